use rand::Rng;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait for rings.
///
/// Elements do not know which ring they belong to, so all arithmetic goes
/// through the ring object. This allows rings such as `Z_p`, where `p` is only
/// known at runtime.
pub trait Ring: Clone + PartialEq + Eq + Debug + Display {
    type Element: Clone + PartialEq + Eq + Hash + Debug + Display;

    fn zero() -> Self::Element;
    fn is_zero(a: &Self::Element) -> bool;
    fn one(&self) -> Self::Element;
    fn is_one(&self, a: &Self::Element) -> bool;

    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn neg(&self, a: &Self::Element) -> Self::Element;
    fn pow(&self, b: &Self::Element, e: u64) -> Self::Element;

    /// Draw a uniformly distributed element.
    fn sample<G: Rng>(&self, rng: &mut G) -> Self::Element;

    #[inline]
    fn add_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        let r = self.add(a, b);
        *a = r;
    }

    #[inline]
    fn sub_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        let r = self.sub(a, b);
        *a = r;
    }

    #[inline]
    fn mul_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        let r = self.mul(a, b);
        *a = r;
    }

    /// Computes `a += b * c`.
    #[inline]
    fn add_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element) {
        let r = self.mul(b, c);
        self.add_assign(a, &r);
    }

    /// Computes `a -= b * c`.
    #[inline]
    fn sub_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element) {
        let r = self.mul(b, c);
        self.sub_assign(a, &r);
    }
}

/// Trait for fields: every nonzero element has a multiplicative inverse.
pub trait Field: Ring {
    /// Computes `1/a`. Panics when `a` is zero.
    fn inv(&self, a: &Self::Element) -> Self::Element;
}
