use std::fmt;
use std::mem;

use poly::ring::{Field, Ring};

/// Dense univariate polynomial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnivariatePolynomial<F: Ring> {
    // coefficients[i] is the coefficient of x^i. The list is trimmed after every
    // mutation, so the last coefficient is never zero.
    pub coefficients: Vec<F::Element>,
    pub field: F,
}

impl<F: Ring> UnivariatePolynomial<F> {
    /// Constructs a zero polynomial.
    #[inline]
    pub fn new(field: F) -> Self {
        UnivariatePolynomial {
            coefficients: Vec::new(),
            field,
        }
    }

    pub fn constant(constant: F::Element, field: F) -> Self {
        Self::monomial(constant, 0, field)
    }

    /// Constructs `coefficient * x^degree`.
    pub fn monomial(coefficient: F::Element, degree: usize, field: F) -> Self {
        if F::is_zero(&coefficient) {
            return Self::new(field);
        }
        let mut coefficients = vec![F::zero(); degree + 1];
        coefficients[degree] = coefficient;
        UnivariatePolynomial {
            coefficients,
            field,
        }
    }

    /// Constructs a polynomial from its coefficients, lowest degree first.
    pub fn from_coefficients(coefficients: Vec<F::Element>, field: F) -> Self {
        let mut a = UnivariatePolynomial {
            coefficients,
            field,
        };
        a.trim();
        a
    }

    pub fn one(field: F) -> Self {
        let one = field.one();
        Self::constant(one, field)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coefficients.is_empty()
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        self.coefficients.len() == 1 && self.field.is_one(&self.coefficients[0])
    }

    /// The degree, or `None` for the zero polynomial.
    #[inline]
    pub fn degree(&self) -> Option<usize> {
        if self.coefficients.is_empty() {
            None
        } else {
            Some(self.coefficients.len() - 1)
        }
    }

    pub fn coefficient(&self, degree: usize) -> F::Element {
        match self.coefficients.get(degree) {
            Some(c) => c.clone(),
            None => F::zero(),
        }
    }

    /// Get the leading coefficient.
    pub fn lcoeff(&self) -> &F::Element {
        match self.coefficients.last() {
            Some(c) => c,
            None => panic!("The zero polynomial has no leading coefficient"),
        }
    }

    /// Reset to the zero polynomial, keeping the allocation.
    #[inline]
    pub fn set_zero(&mut self) {
        self.coefficients.clear();
    }

    pub fn set_one(&mut self) {
        self.coefficients.clear();
        self.coefficients.push(self.field.one());
    }

    /// Set the coefficient of `x^degree`.
    pub fn set_coefficient(&mut self, degree: usize, c: F::Element) {
        if degree >= self.coefficients.len() {
            if F::is_zero(&c) {
                return;
            }
            self.coefficients.resize(degree + 1, F::zero());
        }
        self.coefficients[degree] = c;
        self.trim();
    }

    /// Remove leading zero coefficients.
    pub fn trim(&mut self) {
        while let Some(true) = self.coefficients.last().map(F::is_zero) {
            self.coefficients.pop();
        }
    }

    pub fn is_canonical(&self) -> bool {
        self.coefficients.last().map_or(true, |c| !F::is_zero(c))
    }

    /// Set `self` to `a * b`.
    pub fn set_mul(&mut self, a: &Self, b: &Self) {
        debug_assert!(a.field == b.field);
        self.coefficients.clear();
        if a.is_zero() || b.is_zero() {
            return;
        }

        self.coefficients
            .resize(a.coefficients.len() + b.coefficients.len() - 1, F::zero());
        for (i, x) in a.coefficients.iter().enumerate() {
            if F::is_zero(x) {
                continue;
            }
            for (j, y) in b.coefficients.iter().enumerate() {
                self.field
                    .add_mul_assign(&mut self.coefficients[i + j], x, y);
            }
        }
        self.trim();
    }

    pub fn mul(&self, other: &Self) -> Self {
        let mut r = Self::new(self.field.clone());
        r.set_mul(self, other);
        r
    }

    /// Multiply every coefficient by `c`.
    pub fn scalar_mul_assign(&mut self, c: &F::Element) {
        if F::is_zero(c) {
            self.coefficients.clear();
            return;
        }
        for x in &mut self.coefficients {
            self.field.mul_assign(x, c);
        }
        self.trim();
    }

    pub fn fmt_with_var(&self, f: &mut fmt::Formatter, var: &str) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut is_first_term = true;
        for (d, c) in self.coefficients.iter().enumerate().rev() {
            if F::is_zero(c) {
                continue;
            }
            if !is_first_term {
                write!(f, "+")?;
            }
            is_first_term = false;

            if d == 0 {
                write!(f, "{}", c)?;
                continue;
            }
            if !self.field.is_one(c) {
                write!(f, "{}*", c)?;
            }
            write!(f, "{}", var)?;
            if d > 1 {
                write!(f, "^{}", d)?;
            }
        }
        Ok(())
    }
}

impl<F: Field> UnivariatePolynomial<F> {
    /// Divide `self` by `div`, writing the quotient to `q` and the remainder to `r`.
    pub fn divrem_into(&self, div: &Self, q: &mut Self, r: &mut Self) {
        if div.is_zero() {
            panic!("Cannot divide by 0 polynomial");
        }

        r.coefficients.clone_from(&self.coefficients);
        q.coefficients.clear();

        let dd = div.coefficients.len() - 1;
        if r.coefficients.len() <= dd {
            return;
        }

        let inv = self.field.inv(div.lcoeff());
        let qlen = r.coefficients.len() - dd;
        q.coefficients.resize(qlen, F::zero());
        for k in (0..qlen).rev() {
            let c = self.field.mul(&r.coefficients[k + dd], &inv);
            if F::is_zero(&c) {
                continue;
            }
            for (j, y) in div.coefficients.iter().enumerate() {
                self.field.sub_mul_assign(&mut r.coefficients[k + j], &c, y);
            }
            q.coefficients[k] = c;
        }

        q.trim();
        r.trim();
    }

    pub fn divrem(&self, div: &Self) -> (Self, Self) {
        let mut q = Self::new(self.field.clone());
        let mut r = Self::new(self.field.clone());
        self.divrem_into(div, &mut q, &mut r);
        (q, r)
    }

    /// Scale the polynomial so that the leading coefficient is one.
    pub fn make_monic(&mut self) {
        if self.is_zero() || self.field.is_one(self.lcoeff()) {
            return;
        }
        let inv = self.field.inv(self.lcoeff());
        for x in &mut self.coefficients {
            self.field.mul_assign(x, &inv);
        }
    }

    /// Set `self` to the monic gcd of `a` and `b` using Euclid's algorithm.
    pub fn set_gcd(&mut self, a: &Self, b: &Self) {
        let mut c = a.clone();
        let mut d = b.clone();
        if c.degree() < d.degree() {
            mem::swap(&mut c, &mut d);
        }

        let mut q = Self::new(self.field.clone());
        let mut r = Self::new(self.field.clone());
        while !d.is_zero() {
            c.divrem_into(&d, &mut q, &mut r);
            mem::swap(&mut c, &mut d);
            mem::swap(&mut d, &mut r);
        }

        c.make_monic();
        *self = c;
    }

    pub fn gcd(a: &Self, b: &Self) -> Self {
        let mut g = Self::new(a.field.clone());
        g.set_gcd(a, b);
        g
    }
}

impl<F: Ring> fmt::Display for UnivariatePolynomial<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.fmt_with_var(f, "x")
    }
}

#[cfg(test)]
mod tests {
    use super::UnivariatePolynomial;
    use poly::raw::finitefield::FiniteField;

    fn poly(f: FiniteField, c: &[i64]) -> UnivariatePolynomial<FiniteField> {
        UnivariatePolynomial::from_coefficients(c.iter().map(|x| f.element(*x)).collect(), f)
    }

    #[test]
    fn trim_and_degree() {
        let f = FiniteField::new(17);
        let a = poly(f, &[1, 2, 0, 17, 34]);
        assert_eq!(a.degree(), Some(1));
        assert!(a.is_canonical());
        assert_eq!(poly(f, &[0, 0]).degree(), None);

        let mut b = UnivariatePolynomial::new(f);
        b.set_coefficient(4, 3);
        assert_eq!(b.degree(), Some(4));
        b.set_coefficient(4, 0);
        assert!(b.is_zero());
        b.set_coefficient(7, 0);
        assert!(b.is_zero());
    }

    #[test]
    fn divmod() {
        // (x^3-2x-4) = (x-3)*(x^2+3x+7)+17
        let f = FiniteField::new(101);
        let a = poly(f, &[-4, -2, 0, 1]);
        let b = poly(f, &[-3, 1]);

        let (q, r) = a.divrem(&b);
        assert_eq!(q, poly(f, &[7, 3, 1]));
        assert_eq!(r, poly(f, &[17]));

        let (q, r) = b.divrem(&a);
        assert!(q.is_zero());
        assert_eq!(r, b);
    }

    #[test]
    fn univariate_gcd() {
        // gcd(x^3-2x^2-4,x-3) = 1
        let f = FiniteField::new(101);
        let a = poly(f, &[-4, 0, -2, 1]);
        let b = poly(f, &[-3, 1]);
        assert!(UnivariatePolynomial::gcd(&a, &b).is_one());

        // gcd((x+1)(x+2), 5(x+1)(x-4)) = x + 1
        let c = poly(f, &[1, 1]);
        let a = c.mul(&poly(f, &[2, 1]));
        let b = c.mul(&poly(f, &[-20, 5]));
        assert_eq!(UnivariatePolynomial::gcd(&a, &b), c);

        let zero = UnivariatePolynomial::new(f);
        assert_eq!(UnivariatePolynomial::gcd(&zero, &b), poly(f, &[-4, -3, 1]));
        assert!(UnivariatePolynomial::gcd(&zero, &zero).is_zero());
    }

    #[test]
    fn scalar_mul_and_monic() {
        let f = FiniteField::new(7);
        let mut a = poly(f, &[1, 2, 3]);
        a.scalar_mul_assign(&3);
        assert_eq!(a, poly(f, &[3, 6, 2]));

        a.make_monic();
        assert!(a.lcoeff() == &1);
    }

    #[test]
    #[should_panic(expected = "Cannot divide by 0 polynomial")]
    fn divide_by_zero() {
        let f = FiniteField::new(7);
        poly(f, &[1, 1]).divrem(&UnivariatePolynomial::new(f));
    }

    #[test]
    fn display() {
        let f = FiniteField::new(7);
        assert_eq!(format!("{}", poly(f, &[5, 1, 0, 3])), "3*x^3+x+5");
        assert_eq!(format!("{}", poly(f, &[0, 0, 1])), "x^2");
        assert_eq!(format!("{}", UnivariatePolynomial::new(f)), "0");
    }
}
