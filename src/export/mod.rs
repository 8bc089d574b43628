pub mod config;
pub mod obj;

pub use config::{load_config, ShapeConfig, ShapeEntry};
pub use obj::{save_obj, write_obj};
