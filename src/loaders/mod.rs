pub mod shader;
pub mod texture;

pub use shader::{load_shader_source, ShaderProgramSource, ShaderStage};
pub use texture::{load_texture, load_texture_with, TextureData};
