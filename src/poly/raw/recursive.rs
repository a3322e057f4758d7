use std::mem;

use poly::raw::densecoeff::DenseCoeffPolynomial;
use poly::raw::monomial::MonomialLayout;
use poly::raw::univariate::UnivariatePolynomial;
use poly::ring::{Field, Ring};

/// A polynomial with the first variable pulled out: a table of outer exponents
/// with a `DenseCoeffPolynomial` for each of them.
#[derive(Clone, Debug)]
pub struct RecursivePolynomial<F: Ring> {
    // The first `length` entries are the terms, with strictly decreasing outer
    // exponents and nonzero inner polynomials. All slots up to `alloc()` are
    // initialized and share `layout`; those past `length` are zero.
    pub coefficients: Vec<DenseCoeffPolynomial<F>>,
    pub exponents: Vec<u64>,
    pub length: usize,
    pub layout: MonomialLayout,
    pub field: F,
}

impl<F: Ring> RecursivePolynomial<F> {
    /// Constructs a zero polynomial in `nvars` variables whose inner polynomials
    /// pack their exponents in `bits` bits.
    pub fn new(nvars: usize, bits: usize, field: F) -> Self {
        RecursivePolynomial {
            coefficients: Vec::new(),
            exponents: Vec::new(),
            length: 0,
            layout: MonomialLayout::new(nvars, bits),
            field,
        }
    }

    #[inline]
    pub fn alloc(&self) -> usize {
        self.coefficients.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.length
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.length == 0
    }

    #[inline]
    pub fn nvars(&self) -> usize {
        self.layout.nvars()
    }

    #[inline]
    pub fn bits(&self) -> usize {
        self.layout.bits()
    }

    /// Make sure there are at least `length` slots, growing geometrically.
    pub fn fit_length(&mut self, length: usize) {
        let old = self.alloc();
        if length <= old {
            return;
        }

        let new_alloc = length.max(2 * old);
        let zero = DenseCoeffPolynomial::with_layout(self.layout, self.field.clone());
        self.coefficients.resize(new_alloc, zero);
        self.exponents.resize(new_alloc, 0);
    }

    /// Widen the exponent fields of all inner polynomials to at least `bits` bits.
    pub fn fit_bits(&mut self, bits: usize) {
        if bits <= self.bits() {
            return;
        }
        for c in &mut self.coefficients {
            c.fit_bits(bits);
        }
        self.layout = MonomialLayout::new(self.nvars(), bits);
    }

    /// Reset to zero, keeping the slots.
    pub fn set_zero(&mut self) {
        for c in &mut self.coefficients[..self.length] {
            c.set_zero();
        }
        self.length = 0;
    }

    /// Reset to zero and release all slots.
    pub fn clear(&mut self) {
        self.coefficients.clear();
        self.exponents.clear();
        self.length = 0;
    }

    /// Reset to zero and switch all slots to `layout`.
    pub fn reset(&mut self, layout: MonomialLayout) {
        self.set_zero();
        if layout != self.layout {
            for c in &mut self.coefficients {
                c.reset(layout);
            }
            self.layout = layout;
        }
    }

    pub fn set_one(&mut self) {
        self.set_zero();
        self.fit_length(1);
        self.exponents[0] = 0;
        self.coefficients[0].set_one();
        self.length = 1;
    }

    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Set `self` to a copy of `src`, taking over its layout.
    pub fn set(&mut self, src: &Self) {
        self.reset(src.layout);
        self.fit_length(src.length);
        for i in 0..src.length {
            self.coefficients[i].set(&src.coefficients[i]);
            self.exponents[i] = src.exponents[i];
        }
        self.length = src.length;
    }

    /// Check the invariants: strictly decreasing outer exponents, canonical nonzero
    /// inner polynomials and zero slots past the length.
    pub fn is_canonical(&self) -> bool {
        if self.length > self.alloc() || self.exponents.len() != self.alloc() {
            return false;
        }

        if (1..self.length).any(|i| self.exponents[i - 1] <= self.exponents[i]) {
            return false;
        }

        self.coefficients.iter().enumerate().all(|(i, c)| {
            c.layout == self.layout && c.is_canonical() && (i < self.length) != c.is_empty()
        })
    }

    /// The leading outer exponent, or `None` for the zero polynomial.
    pub fn degree(&self) -> Option<u64> {
        if self.length == 0 {
            None
        } else {
            Some(self.exponents[0])
        }
    }

    /// The leading coefficient of the leading inner term.
    pub fn lead_coeff_poly(&self) -> &UnivariatePolynomial<F> {
        assert!(self.length > 0, "The zero polynomial has no leading coefficient");
        &self.coefficients[0].coefficients[0]
    }

    /// Add `s` to every outer exponent.
    pub fn shift_left(&mut self, s: u64) {
        for e in &mut self.exponents[..self.length] {
            *e = match e.checked_add(s) {
                Some(x) => x,
                None => panic!("Exponent overflow when shifting {} left by {}", e, s),
            };
        }
    }

    /// Subtract `s` from every outer exponent. Every exponent must be at least `s`.
    pub fn shift_right(&mut self, s: u64) {
        for e in &mut self.exponents[..self.length] {
            assert!(*e >= s, "Cannot shift exponent {} right by {}", e, s);
            *e -= s;
        }
    }

    /// Multiply every coefficient by the nonzero field element `c`.
    pub fn scalar_mul(&mut self, c: &F::Element) {
        assert!(!F::is_zero(c), "Cannot multiply by zero");
        for p in &mut self.coefficients[..self.length] {
            p.scalar_mul(c);
        }
    }

    /// Returns true if the polynomial is a nonzero element of the field.
    pub fn is_nonzero_constant(&self) -> bool {
        self.length == 1 && self.exponents[0] == 0 && self.coefficients[0].is_nonzero_constant()
    }

    /// The largest degree in the dense variable. The polynomial must not be zero.
    pub fn last_degree(&self) -> usize {
        assert!(self.length > 0, "Cannot take the last degree of the zero polynomial");
        self.coefficients[..self.length]
            .iter()
            .filter_map(|c| c.last_degree())
            .max()
            .unwrap_or(0)
    }

    /// Set `self` to `src * c` for a nonzero `c`.
    pub fn mul_poly(&mut self, src: &Self, c: &UnivariatePolynomial<F>) {
        assert!(!c.is_zero(), "Cannot multiply by the zero polynomial");
        self.reset(src.layout);
        self.fit_length(src.length);
        for i in 0..src.length {
            self.coefficients[i].mul_poly(&src.coefficients[i], c);
            self.exponents[i] = src.exponents[i];
        }
        self.length = src.length;
    }

    /// Multiply `self` in place by a nonzero `c`.
    pub fn mul_poly_assign(&mut self, c: &UnivariatePolynomial<F>) {
        assert!(!c.is_zero(), "Cannot multiply by the zero polynomial");
        let mut t = UnivariatePolynomial::new(self.field.clone());
        for p in &mut self.coefficients[..self.length] {
            p.mul_poly_assign(c, &mut t);
        }
    }
}

impl<F: Field> RecursivePolynomial<F> {
    /// Set `self` to `src / c`. Panics when `c` does not divide every coefficient.
    pub fn divexact_poly(&mut self, src: &Self, c: &UnivariatePolynomial<F>) {
        let mut r = UnivariatePolynomial::new(self.field.clone());
        self.reset(src.layout);
        self.fit_length(src.length);
        for i in 0..src.length {
            self.coefficients[i].divexact_poly(&src.coefficients[i], c, &mut r);
            self.exponents[i] = src.exponents[i];
        }
        self.length = src.length;
    }

    /// Divide `self` in place by `c`.
    pub fn divexact_poly_assign(&mut self, c: &UnivariatePolynomial<F>) {
        let mut q = UnivariatePolynomial::new(self.field.clone());
        let mut r = UnivariatePolynomial::new(self.field.clone());
        for p in &mut self.coefficients[..self.length] {
            p.divexact_poly_assign(c, &mut q, &mut r);
        }
    }

    /// Compute the monic gcd of all dense coefficients. The scan stops as soon as
    /// the gcd is a constant. The content of zero is zero.
    pub fn content(&self) -> UnivariatePolynomial<F> {
        let mut g = UnivariatePolynomial::new(self.field.clone());
        let mut t = UnivariatePolynomial::new(self.field.clone());
        for (i, a) in self.coefficients[..self.length].iter().enumerate() {
            for c in &a.coefficients[..a.length] {
                t.set_gcd(&g, c);
                mem::swap(&mut g, &mut t);
                if g.degree() == Some(0) {
                    debug!(
                        "content is constant after {} of {} outer terms",
                        i + 1,
                        self.length
                    );
                    return g;
                }
            }
        }
        trace!("content {}", g);
        g
    }
}

impl<F: Ring> PartialEq for RecursivePolynomial<F> {
    fn eq(&self, other: &Self) -> bool {
        self.nvars() == other.nvars()
            && self.length == other.length
            && self.exponents[..self.length] == other.exponents[..other.length]
            && self.coefficients[..self.length] == other.coefficients[..other.length]
    }
}

impl<F: Ring> Eq for RecursivePolynomial<F> {}
