use rand::Rng;
use std::fmt;

use poly::raw::zp;
use poly::raw::zp::ufield;
use poly::ring::{Field, Ring};

/// The prime field `Z_p`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FiniteField {
    p: ufield,
}

impl FiniteField {
    /// Create the field `Z_p`. Panics if `p` is not a prime below `2^63`.
    pub fn new(p: ufield) -> FiniteField {
        assert!(p < zp::MAX_PRIME, "modulus {} is too large", p);
        assert!(zp::is_prime(p), "{} is not a prime", p);
        FiniteField { p }
    }

    #[inline]
    pub fn get_prime(&self) -> ufield {
        self.p
    }

    /// Map an integer to its residue class.
    pub fn element(&self, n: i64) -> ufield {
        (n as i128).rem_euclid(self.p as i128) as ufield
    }
}

impl fmt::Display for FiniteField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Z_{}", self.p)
    }
}

impl Ring for FiniteField {
    type Element = ufield;

    #[inline]
    fn zero() -> ufield {
        0
    }

    #[inline]
    fn is_zero(a: &ufield) -> bool {
        *a == 0
    }

    #[inline]
    fn one(&self) -> ufield {
        1
    }

    #[inline]
    fn is_one(&self, a: &ufield) -> bool {
        *a == 1
    }

    #[inline]
    fn add(&self, a: &ufield, b: &ufield) -> ufield {
        zp::add(*a, *b, self.p)
    }

    #[inline]
    fn sub(&self, a: &ufield, b: &ufield) -> ufield {
        zp::sub(*a, *b, self.p)
    }

    #[inline]
    fn mul(&self, a: &ufield, b: &ufield) -> ufield {
        zp::mul(*a, *b, self.p)
    }

    #[inline]
    fn neg(&self, a: &ufield) -> ufield {
        zp::neg(*a, self.p)
    }

    #[inline]
    fn pow(&self, b: &ufield, e: u64) -> ufield {
        zp::pow(*b, e, self.p)
    }

    fn sample<G: Rng>(&self, rng: &mut G) -> ufield {
        rng.gen_range(0, self.p)
    }
}

impl Field for FiniteField {
    #[inline]
    fn inv(&self, a: &ufield) -> ufield {
        zp::inv(*a, self.p)
    }
}

#[cfg(test)]
mod tests {
    use super::FiniteField;
    use poly::ring::{Field, Ring};
    use rand;

    #[test]
    fn element() {
        let f = FiniteField::new(7);
        assert_eq!(f.element(-1), 6);
        assert_eq!(f.element(-15), 6);
        assert_eq!(f.element(15), 1);
        assert_eq!(f.element(i64::min_value()), f.element(i64::min_value() % 7));
    }

    #[test]
    fn arithmetic() {
        let f = FiniteField::new(4293490987);
        let a = f.element(-3);
        let b = f.element(123456);

        assert_eq!(f.add(&a, &b), 123453);
        assert_eq!(f.sub(&b, &a), 123459);
        assert_eq!(f.mul(&f.mul(&a, &b), &f.inv(&b)), a);
        assert!(f.is_one(&f.mul(&b, &f.inv(&b))));
        assert!(FiniteField::is_zero(&f.add(&a, &f.neg(&a))));
        assert!(f.is_one(&f.pow(&b, 4293490986)));

        let mut c = f.one();
        f.add_mul_assign(&mut c, &a, &b);
        assert_eq!(c, f.add(&f.one(), &f.mul(&a, &b)));
        f.sub_mul_assign(&mut c, &a, &b);
        assert_eq!(c, f.one());
    }

    #[test]
    fn sample_in_range() {
        let f = FiniteField::new(13);
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            assert!(f.sample(&mut rng) < 13);
        }
    }

    #[test]
    #[should_panic(expected = "is not a prime")]
    fn composite_modulus() {
        FiniteField::new(91);
    }
}
