use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

// Componentwise arithmetic
// -----------------------------------------------------------------------------
// Each operation has exactly one body, the `_inplace` form. The compound
// assignment operators and the by-value binary operators both route through it.

macro_rules! impl_vec_ops {
    (@binop $name:ident, $op:ident, $op_fn:ident, $assign:ident, $assign_fn:ident, $inplace:ident) => {
        impl $op for $name {
            type Output = Self;

            #[inline]
            fn $op_fn(self, rhs: Self) -> Self {
                let mut out = self;
                out.$inplace(rhs);
                out
            }
        }

        impl $assign for $name {
            #[inline]
            fn $assign_fn(&mut self, rhs: Self) {
                self.$inplace(rhs);
            }
        }
    };

    ($name:ident, $n:literal, [$($c:ident),+]) => {
        impl $name {
            pub const LEN: usize = $n;
            pub const ZERO: Self = Self { $($c: 0.0),+ };

            #[inline]
            pub const fn new($($c: f32),+) -> Self {
                Self { $($c),+ }
            }

            #[inline]
            pub const fn splat(v: f32) -> Self {
                Self { $($c: v),+ }
            }

            #[inline]
            pub const fn to_array(&self) -> [f32; $n] {
                [$(self.$c),+]
            }

            /// Reads the leading components from `vals`.
            ///
            /// Returns `None` if there are too few elements. Extra elements are ignored.
            pub fn from_slice(vals: &[f32]) -> Option<Self> {
                let arr: [f32; $n] = vals.get(..$n)?.try_into().ok()?;
                Some(Self::from(arr))
            }

            #[inline]
            pub fn add_inplace(&mut self, other: Self) -> &mut Self {
                $(self.$c += other.$c;)+
                self
            }

            #[inline]
            pub fn sub_inplace(&mut self, other: Self) -> &mut Self {
                $(self.$c -= other.$c;)+
                self
            }

            #[inline]
            pub fn mul_inplace(&mut self, other: Self) -> &mut Self {
                $(self.$c *= other.$c;)+
                self
            }

            /// Componentwise division. Zero components in `other` are not checked and
            /// produce infinities or NaN.
            #[inline]
            pub fn div_inplace(&mut self, other: Self) -> &mut Self {
                $(self.$c /= other.$c;)+
                self
            }

            #[inline]
            pub fn dot(self, other: Self) -> f32 {
                0.0 $(+ self.$c * other.$c)+
            }

            #[inline]
            pub fn length_squared(self) -> f32 {
                self.dot(self)
            }

            #[inline]
            pub fn length(self) -> f32 {
                self.length_squared().sqrt()
            }
        }

        impl From<[f32; $n]> for $name {
            #[inline]
            fn from(arr: [f32; $n]) -> Self {
                let [$($c),+] = arr;
                Self { $($c),+ }
            }
        }

        impl From<$name> for [f32; $n] {
            #[inline]
            fn from(v: $name) -> Self {
                v.to_array()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(stringify!($name))?;
                f.write_str(":")?;
                for (i, v) in self.to_array().iter().enumerate() {
                    let sep = if i == 0 { " " } else { ", " };
                    write!(f, "{sep}{v:?}")?;
                }
                Ok(())
            }
        }

        impl Neg for $name {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self { $($c: -self.$c),+ }
            }
        }

        impl Mul<f32> for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: f32) -> Self {
                self * Self::splat(rhs)
            }
        }

        impl Div<f32> for $name {
            type Output = Self;

            #[inline]
            fn div(self, rhs: f32) -> Self {
                self / Self::splat(rhs)
            }
        }

        impl_vec_ops!(@binop $name, Add, add, AddAssign, add_assign, add_inplace);
        impl_vec_ops!(@binop $name, Sub, sub, SubAssign, sub_assign, sub_inplace);
        impl_vec_ops!(@binop $name, Mul, mul, MulAssign, mul_assign, mul_inplace);
        impl_vec_ops!(@binop $name, Div, div, DivAssign, div_assign, div_inplace);
    };
}

impl_vec_ops!(Vec2, 2, [x, y]);
impl_vec_ops!(Vec3, 3, [x, y, z]);
impl_vec_ops!(Vec4, 4, [x, y, z, w]);

// Arity conversions
// -----------------------------------------------------------------------------

impl Vec2 {
    #[inline]
    pub const fn extend(self, z: f32) -> Vec3 {
        Vec3::new(self.x, self.y, z)
    }
}

impl Vec3 {
    #[inline]
    pub const fn extend(self, w: f32) -> Vec4 {
        Vec4::new(self.x, self.y, self.z, w)
    }

    #[inline]
    pub const fn truncate(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Right-handed cross product.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }
}

impl Vec4 {
    /// Drops `w` without dividing by it.
    #[inline]
    pub const fn truncate(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}
