pub mod camera;
pub mod cli;
pub mod export;
pub mod loaders;
pub mod math;
pub mod mesh;
pub mod shading;
pub mod shapes;
pub mod transform;

pub use mesh::{MeshData, Vertex};
pub use shapes::{create_cube, create_cylinder, create_plane, create_sphere, create_torus};
pub use transform::Transform;
