pub mod core;
pub use self::core::{Vec2, Vec3, Vec4};

pub mod prefix_eq;
pub use prefix_eq::PrefixEq;
