use std::fmt;
use std::ops::{Mul, MulAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::vec::{Vec3, Vec4};

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Mat4 {
    // Column-major: element (row, col) lives at `col * 4 + row`.
    m: [f32; 16],
}

#[inline(always)]
const fn idx(row: usize, col: usize) -> usize {
    col * 4 + row
}

// Constructors
// -----------------------------------------------------------------------------
impl Mat4 {
    pub const ZERO: Self = Self { m: [0.0; 16] };
    pub const IDENTITY: Self = Self::from_diagonal(1.0);

    /// All zeros except the four diagonal entries, which are set to `d`.
    pub const fn from_diagonal(d: f32) -> Self {
        let mut m = [0.0; 16];
        m[idx(0, 0)] = d;
        m[idx(1, 1)] = d;
        m[idx(2, 2)] = d;
        m[idx(3, 3)] = d;
        Self { m }
    }

    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Takes 16 elements already in column-major order.
    pub const fn from_cols_array(m: [f32; 16]) -> Self {
        Self { m }
    }

    /// Reads 16 column-major elements from `vals`.
    ///
    /// Returns `None` if there are fewer than 16 elements.
    pub fn from_slice(vals: &[f32]) -> Option<Self> {
        let m: [f32; 16] = vals.get(..16)?.try_into().ok()?;
        Some(Self { m })
    }

    pub const fn as_array(&self) -> &[f32; 16] {
        &self.m
    }

    /// Panics if `row` or `col` is out of range.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        assert!(row < 4 && col < 4, "Mat4 index ({row}, {col}) out of range");
        self.m[idx(row, col)]
    }

    /// Panics if `row` or `col` is out of range.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, v: f32) {
        assert!(row < 4 && col < 4, "Mat4 index ({row}, {col}) out of range");
        self.m[idx(row, col)] = v;
    }

    pub fn transpose(&self) -> Self {
        let mut out = Self::ZERO;
        for col in 0..4 {
            for row in 0..4 {
                out.m[idx(row, col)] = self.m[idx(col, row)];
            }
        }
        out
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::ZERO
    }
}

// Transform factories
// -----------------------------------------------------------------------------
// Angles are in degrees. Projections follow the OpenGL clip-space convention
// (right-handed eye space looking down -z, NDC z in [-1, 1]).
impl Mat4 {
    pub fn orthographic(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        let mut out = Self::IDENTITY;
        out.m[idx(0, 0)] = 2.0 / (right - left);
        out.m[idx(1, 1)] = 2.0 / (top - bottom);
        out.m[idx(2, 2)] = 2.0 / (near - far);

        out.m[idx(0, 3)] = (left + right) / (left - right);
        out.m[idx(1, 3)] = (bottom + top) / (bottom - top);
        out.m[idx(2, 3)] = (near + far) / (near - far);
        out
    }

    /// `fov_deg` is the full vertical field of view. Values near 180 degrees blow up
    /// through `tan` and are not guarded.
    pub fn perspective(fov_deg: f32, aspect_ratio: f32, near: f32, far: f32) -> Self {
        let q = 1.0 / (0.5 * fov_deg).to_radians().tan();

        let mut out = Self::ZERO;
        out.m[idx(0, 0)] = q / aspect_ratio;
        out.m[idx(1, 1)] = q;
        out.m[idx(2, 2)] = (near + far) / (near - far);
        out.m[idx(3, 2)] = -1.0;
        out.m[idx(2, 3)] = (2.0 * near * far) / (near - far);
        out
    }

    pub fn translation(t: Vec3) -> Self {
        let mut out = Self::IDENTITY;
        out.m[idx(0, 3)] = t.x;
        out.m[idx(1, 3)] = t.y;
        out.m[idx(2, 3)] = t.z;
        out
    }

    /// Counter-clockwise about +x when looking down the axis towards the origin.
    pub fn rotation_x(deg: f32) -> Self {
        let (s, c) = deg.to_radians().sin_cos();
        let mut out = Self::IDENTITY;
        out.m[idx(1, 1)] = c;
        out.m[idx(1, 2)] = -s;
        out.m[idx(2, 1)] = s;
        out.m[idx(2, 2)] = c;
        out
    }

    pub fn rotation_y(deg: f32) -> Self {
        let (s, c) = deg.to_radians().sin_cos();
        let mut out = Self::IDENTITY;
        out.m[idx(0, 0)] = c;
        out.m[idx(0, 2)] = s;
        out.m[idx(2, 0)] = -s;
        out.m[idx(2, 2)] = c;
        out
    }

    pub fn rotation_z(deg: f32) -> Self {
        let (s, c) = deg.to_radians().sin_cos();
        let mut out = Self::IDENTITY;
        out.m[idx(0, 0)] = c;
        out.m[idx(0, 1)] = -s;
        out.m[idx(1, 0)] = s;
        out.m[idx(1, 1)] = c;
        out
    }

    /// Returns `Rz * Ry * Rx`, i.e. a column vector is rotated about x first, then y,
    /// then z.
    pub fn rotation(x_deg: f32, y_deg: f32, z_deg: f32) -> Self {
        let mut out = Self::rotation_z(z_deg);
        out.mul_inplace(&Self::rotation_y(y_deg))
            .mul_inplace(&Self::rotation_x(x_deg));
        out
    }

    pub fn scale(s: Vec3) -> Self {
        let mut out = Self::IDENTITY;
        out.m[idx(0, 0)] = s.x;
        out.m[idx(1, 1)] = s.y;
        out.m[idx(2, 2)] = s.z;
        out
    }
}

// Products
// -----------------------------------------------------------------------------
impl Mat4 {
    /// `self = self * other`.
    pub fn mul_inplace(&mut self, other: &Mat4) -> &mut Self {
        let mut out = [0.0; 16];
        for col in 0..4 {
            for row in 0..4 {
                let mut sum = 0.0;
                for e in 0..4 {
                    sum += self.m[idx(row, e)] * other.m[idx(e, col)];
                }
                out[idx(row, col)] = sum;
            }
        }
        self.m = out;
        self
    }

    /// Applies this transform to a point (implicitly using homogeneous `w=1`).
    ///
    /// The bottom row is ignored, so no perspective divide happens here.
    #[inline]
    pub fn transform_point3(&self, p: Vec3) -> Vec3 {
        let m = &self.m;
        Vec3::new(
            m[idx(0, 0)] * p.x + m[idx(0, 1)] * p.y + m[idx(0, 2)] * p.z + m[idx(0, 3)],
            m[idx(1, 0)] * p.x + m[idx(1, 1)] * p.y + m[idx(1, 2)] * p.z + m[idx(1, 3)],
            m[idx(2, 0)] * p.x + m[idx(2, 1)] * p.y + m[idx(2, 2)] * p.z + m[idx(2, 3)],
        )
    }

    #[inline]
    pub fn transform_vec4(&self, v: Vec4) -> Vec4 {
        let m = &self.m;
        let row = |r: usize| {
            m[idx(r, 0)] * v.x + m[idx(r, 1)] * v.y + m[idx(r, 2)] * v.z + m[idx(r, 3)] * v.w
        };
        Vec4::new(row(0), row(1), row(2), row(3))
    }
}

impl Mul for Mat4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut out = self;
        out.mul_inplace(&rhs);
        out
    }
}

impl MulAssign for Mat4 {
    fn mul_assign(&mut self, rhs: Self) {
        self.mul_inplace(&rhs);
    }
}

impl Mul<Vec3> for Mat4 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Vec3 {
        self.transform_point3(rhs)
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    fn mul(self, rhs: Vec4) -> Vec4 {
        self.transform_vec4(rhs)
    }
}

/// One line per logical row, entries separated by spaces.
impl fmt::Display for Mat4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..4 {
            let m = &self.m;
            writeln!(
                f,
                "{:?} {:?} {:?} {:?}",
                m[idx(row, 0)],
                m[idx(row, 1)],
                m[idx(row, 2)],
                m[idx(row, 3)]
            )?;
        }
        Ok(())
    }
}
