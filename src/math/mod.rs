mod aabb;
mod projection;

pub use aabb::AABB;
pub use projection::{look_at, orthographic, perspective, DEG2RAD, RAD2DEG};
