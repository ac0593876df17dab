// Library crate root.
//
// Fixed-size f32 vectors (Vec2/Vec3/Vec4) and a column-major 4x4 matrix for
// graphics transforms. Everything is a plain Copy value; there is no I/O.

pub mod mat4;
pub mod vec;

pub use mat4::Mat4;
pub use vec::{PrefixEq, Vec2, Vec3, Vec4};

#[cfg(test)]
pub mod test_helpers;
