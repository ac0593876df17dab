use crate::mat4::Mat4;
use crate::vec::{Vec3, Vec4};

/// A non-trivial matrix with small integer entries in `-3..=3`, so that products of a
/// few of them stay exact in `f32`. Different seeds give different matrices.
pub fn int_mat4(seed: usize) -> Mat4 {
    let mut m = [0.0_f32; 16];
    for (i, v) in m.iter_mut().enumerate() {
        *v = ((i * (seed * 7 + 3) + seed) % 7) as f32 - 3.0;
    }
    Mat4::from_cols_array(m)
}

pub fn assert_near(a: f32, b: f32, eps: f32, what: &str) {
    assert!(
        (a - b).abs() <= eps,
        "{what}: {a} vs {b} differs by more than {eps}"
    );
}

pub fn assert_vec3_near(a: Vec3, b: Vec3, eps: f32) {
    assert_near(a.x, b.x, eps, "x");
    assert_near(a.y, b.y, eps, "y");
    assert_near(a.z, b.z, eps, "z");
}

pub fn assert_vec4_near(a: Vec4, b: Vec4, eps: f32) {
    assert_vec3_near(a.truncate(), b.truncate(), eps);
    assert_near(a.w, b.w, eps, "w");
}

pub fn assert_mat4_near(a: &Mat4, b: &Mat4, eps: f32) {
    for row in 0..4 {
        for col in 0..4 {
            assert_near(a.get(row, col), b.get(row, col), eps, &format!("({row},{col})"));
        }
    }
}
