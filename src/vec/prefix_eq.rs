use super::core::{Vec2, Vec3, Vec4};

/// Equality over the components shared by two vectors of possibly different arity.
///
/// Only the leading components present in the *smaller* operand are compared, so
/// `Vec3(1, 2, 3)` prefix-equals `Vec2(1, 2)` and `Vec2(1, 2)` prefix-equals
/// `Vec4(1, 2, 7, 9)`. This is not an equivalence relation across arities:
/// `Vec3(1, 2, 3)` and `Vec3(1, 2, 4)` both prefix-equal `Vec2(1, 2)` while not
/// prefix-equalling each other.
///
/// Same-arity `==` stays the ordinary full comparison; use this only where the
/// shared-prefix behavior is actually wanted.
pub trait PrefixEq<Rhs = Self> {
    fn prefix_eq(&self, other: &Rhs) -> bool;
}

macro_rules! impl_prefix_eq {
    ($lhs:ty, $rhs:ty, [$($c:ident),+]) => {
        impl PrefixEq<$rhs> for $lhs {
            #[inline]
            fn prefix_eq(&self, other: &$rhs) -> bool {
                $(self.$c == other.$c)&&+
            }
        }
    };
}

impl_prefix_eq!(Vec2, Vec2, [x, y]);
impl_prefix_eq!(Vec2, Vec3, [x, y]);
impl_prefix_eq!(Vec2, Vec4, [x, y]);

impl_prefix_eq!(Vec3, Vec2, [x, y]);
impl_prefix_eq!(Vec3, Vec3, [x, y, z]);
impl_prefix_eq!(Vec3, Vec4, [x, y, z]);

impl_prefix_eq!(Vec4, Vec2, [x, y]);
impl_prefix_eq!(Vec4, Vec3, [x, y, z]);
impl_prefix_eq!(Vec4, Vec4, [x, y, z, w]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn larger_vs_smaller_ignores_extra_components() {
        assert!(Vec3::new(1.0, 2.0, 3.0).prefix_eq(&Vec2::new(1.0, 2.0)));
        assert!(Vec4::new(1.0, 2.0, 3.0, 4.0).prefix_eq(&Vec2::new(1.0, 2.0)));
        assert!(Vec4::new(1.0, 2.0, 3.0, 4.0).prefix_eq(&Vec3::new(1.0, 2.0, 3.0)));
        assert!(!Vec4::new(1.0, 2.0, 3.0, 4.0).prefix_eq(&Vec3::new(1.0, 2.0, 3.5)));
    }

    #[test]
    fn smaller_vs_larger_ignores_extra_components() {
        assert!(Vec2::new(1.0, 2.0).prefix_eq(&Vec3::new(1.0, 2.0, 99.0)));
        assert!(Vec2::new(1.0, 2.0).prefix_eq(&Vec4::new(1.0, 2.0, 7.0, 9.0)));
        assert!(Vec3::new(1.0, 2.0, 3.0).prefix_eq(&Vec4::new(1.0, 2.0, 3.0, -1.0)));
        assert!(!Vec2::new(1.0, 2.0).prefix_eq(&Vec3::new(1.0, 2.5, 3.0)));
    }

    #[test]
    fn same_arity_compares_everything() {
        assert!(Vec3::new(1.0, 2.0, 3.0).prefix_eq(&Vec3::new(1.0, 2.0, 3.0)));
        assert!(!Vec3::new(1.0, 2.0, 3.0).prefix_eq(&Vec3::new(1.0, 2.0, 4.0)));
        assert!(!Vec4::new(1.0, 2.0, 3.0, 4.0).prefix_eq(&Vec4::new(1.0, 2.0, 3.0, 5.0)));
    }

    #[test]
    fn not_transitive_across_arities() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec2::new(1.0, 2.0);
        let c = Vec3::new(1.0, 2.0, 4.0);

        assert!(a.prefix_eq(&b));
        assert!(b.prefix_eq(&c));
        assert!(!a.prefix_eq(&c));
    }
}
