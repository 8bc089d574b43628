mod cube;
mod cylinder;
mod params;
mod plane;
mod ring;
mod sphere;
mod torus;

pub use cube::create_cube;
pub use cylinder::create_cylinder;
pub use params::{Cube, Cylinder, Plane, Sphere, Torus};
pub use plane::create_plane;
pub use ring::{ring_vertices, RingKind};
pub use sphere::create_sphere;
pub use torus::create_torus;
