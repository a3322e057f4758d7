use std::cmp::Ordering;
use std::mem;

use poly::raw::monomial;
use poly::raw::monomial::MonomialLayout;
use poly::raw::univariate::UnivariatePolynomial;
use poly::ring::{Field, Ring};

/// A sparse multivariate polynomial whose coefficients are dense univariate
/// polynomials in one designated variable.
///
/// The packed exponents of a term have the field of the designated variable set
/// to zero; its degree is the index into the coefficient instead.
#[derive(Clone, Debug)]
pub struct DenseCoeffPolynomial<F: Ring> {
    // The first `length` slots are the terms, sorted by strictly decreasing
    // exponents. Every slot up to `alloc()` holds an initialized coefficient: the
    // ones past `length` are zero and ready for reuse. The exponents of slot i are
    // exponents[i * N..(i + 1) * N].
    pub coefficients: Vec<UnivariatePolynomial<F>>,
    pub exponents: Vec<u64>,
    pub length: usize,
    pub layout: MonomialLayout,
    pub field: F,
}

impl<F: Ring> DenseCoeffPolynomial<F> {
    pub fn new(nvars: usize, bits: usize, field: F) -> Self {
        Self::with_layout(MonomialLayout::new(nvars, bits), field)
    }

    pub fn with_layout(layout: MonomialLayout, field: F) -> Self {
        DenseCoeffPolynomial {
            coefficients: Vec::new(),
            exponents: Vec::new(),
            length: 0,
            layout,
            field,
        }
    }

    /// The number of initialized slots.
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
    pub fn nvars(&self) -> usize {
        self.layout.nvars()
    }

    #[inline]
    pub fn bits(&self) -> usize {
        self.layout.bits()
    }

    /// Make sure there are at least `length` slots. The number of slots at least
    /// doubles on growth and the new slots are zero.
    pub fn fit_length(&mut self, length: usize) {
        let old = self.alloc();
        if length <= old {
            return;
        }

        let new_alloc = length.max(2 * old);
        let zero = UnivariatePolynomial::new(self.field.clone());
        self.coefficients.resize(new_alloc, zero);
        self.exponents.resize(new_alloc * self.layout.words(), 0);
    }

    /// Set the number of terms. Terms beyond the new length are reset to zero;
    /// when extending, the caller guarantees that the revealed slots hold valid terms.
    pub fn set_length(&mut self, length: usize) {
        assert!(
            length <= self.alloc(),
            "length {} exceeds the {} allocated slots",
            length,
            self.alloc()
        );
        for c in &mut self.coefficients[length.min(self.length)..self.length] {
            c.set_zero();
        }
        self.length = length;
    }

    /// Reset to zero, keeping the slots.
    pub fn set_zero(&mut self) {
        self.set_length(0);
    }

    /// Reset to zero and release all slots.
    pub fn clear(&mut self) {
        self.coefficients.clear();
        self.exponents.clear();
        self.length = 0;
    }

    /// Reset to zero and switch to a new exponent layout.
    pub fn reset(&mut self, layout: MonomialLayout) {
        self.set_zero();
        if layout != self.layout {
            self.layout = layout;
            self.exponents.clear();
            self.exponents.resize(self.alloc() * layout.words(), 0);
        }
    }

    /// Widen the exponent fields to at least `bits` bits.
    pub fn fit_bits(&mut self, bits: usize) {
        if bits <= self.bits() {
            return;
        }

        let layout = MonomialLayout::new(self.nvars(), bits);
        let n = layout.words();
        let mut exponents = vec![0; self.alloc() * n];
        let mut e = vec![0; self.nvars()];
        for i in 0..self.length {
            self.layout.unpack(self.exponents(i), &mut e);
            if layout.pack(&e, &mut exponents[i * n..(i + 1) * n]).is_err() {
                unreachable!("widening the exponent fields cannot overflow");
            }
        }
        self.exponents = exponents;
        self.layout = layout;
    }

    pub fn set_one(&mut self) {
        self.set_zero();
        self.fit_length(1);
        for w in self.exponents_mut(0) {
            *w = 0;
        }
        self.coefficients[0].set_one();
        self.length = 1;
    }

    /// The packed exponents of slot `index`.
    #[inline]
    pub fn exponents(&self, index: usize) -> &[u64] {
        let n = self.layout.words();
        &self.exponents[index * n..(index + 1) * n]
    }

    #[inline]
    pub fn exponents_mut(&mut self, index: usize) -> &mut [u64] {
        let n = self.layout.words();
        &mut self.exponents[index * n..(index + 1) * n]
    }

    /// Append a term that sorts after all present terms.
    pub fn push_term(&mut self, exponents: &[u64], coefficient: UnivariatePolynomial<F>) {
        debug_assert!(!coefficient.is_zero());
        debug_assert!(
            self.length == 0
                || monomial::cmp(self.exponents(self.length - 1), exponents) == Ordering::Greater
        );
        let i = self.length;
        self.fit_length(i + 1);
        self.exponents_mut(i).copy_from_slice(exponents);
        self.coefficients[i] = coefficient;
        self.length += 1;
    }

    /// Check the invariants: nonzero trimmed coefficients, strictly decreasing
    /// exponents and zero slots past the length.
    pub fn is_canonical(&self) -> bool {
        if self.length > self.alloc() || self.exponents.len() != self.alloc() * self.layout.words() {
            return false;
        }

        for (i, c) in self.coefficients.iter().enumerate() {
            if i < self.length {
                if c.is_zero() || !c.is_canonical() {
                    return false;
                }
            } else if !c.is_zero() {
                return false;
            }
        }

        (1..self.length)
            .all(|i| monomial::cmp(self.exponents(i - 1), self.exponents(i)) == Ordering::Greater)
    }

    /// Set `self` to a copy of `src`, taking over its layout.
    pub fn set(&mut self, src: &Self) {
        self.reset(src.layout);
        self.fit_length(src.length);
        for i in 0..src.length {
            self.coefficients[i].clone_from(&src.coefficients[i]);
            self.exponents_mut(i).copy_from_slice(src.exponents(i));
        }
        self.length = src.length;
    }

    /// Multiply every coefficient by the nonzero field element `c`.
    pub fn scalar_mul(&mut self, c: &F::Element) {
        assert!(!F::is_zero(c), "Cannot multiply by zero");
        for p in &mut self.coefficients[..self.length] {
            p.scalar_mul_assign(c);
        }
    }

    /// Returns true if the polynomial is a nonzero element of the field.
    pub fn is_nonzero_constant(&self) -> bool {
        self.length == 1
            && monomial::is_zero(self.exponents(0))
            && self.coefficients[0].degree() == Some(0)
    }

    /// The largest degree of a coefficient, or `None` for the zero polynomial.
    pub fn last_degree(&self) -> Option<usize> {
        self.coefficients[..self.length]
            .iter()
            .filter_map(|c| c.degree())
            .max()
    }

    /// Set `self` to `src * c` for a nonzero `c`.
    pub fn mul_poly(&mut self, src: &Self, c: &UnivariatePolynomial<F>) {
        assert!(!c.is_zero(), "Cannot multiply by the zero polynomial");
        self.reset(src.layout);
        self.fit_length(src.length);
        for i in 0..src.length {
            self.coefficients[i].set_mul(&src.coefficients[i], c);
            self.exponents_mut(i).copy_from_slice(src.exponents(i));
        }
        self.length = src.length;
    }

    /// Multiply `self` in place by a nonzero `c`, using `t` as scratch space.
    pub fn mul_poly_assign(&mut self, c: &UnivariatePolynomial<F>, t: &mut UnivariatePolynomial<F>) {
        assert!(!c.is_zero(), "Cannot multiply by the zero polynomial");
        for p in &mut self.coefficients[..self.length] {
            t.set_mul(p, c);
            mem::swap(t, p);
        }
    }
}

impl<F: Field> DenseCoeffPolynomial<F> {
    /// Set `self` to `src / c`. Every coefficient of `src` must be divisible by
    /// `c`; `r` is scratch space for the remainders.
    pub fn divexact_poly(
        &mut self,
        src: &Self,
        c: &UnivariatePolynomial<F>,
        r: &mut UnivariatePolynomial<F>,
    ) {
        self.reset(src.layout);
        self.fit_length(src.length);
        for i in 0..src.length {
            src.coefficients[i].divrem_into(c, &mut self.coefficients[i], r);
            assert!(r.is_zero(), "Polynomial division is not exact");
            self.exponents_mut(i).copy_from_slice(src.exponents(i));
        }
        self.length = src.length;
    }

    /// Divide `self` in place by `c`, using `q` and `r` as scratch space.
    pub fn divexact_poly_assign(
        &mut self,
        c: &UnivariatePolynomial<F>,
        q: &mut UnivariatePolynomial<F>,
        r: &mut UnivariatePolynomial<F>,
    ) {
        for p in &mut self.coefficients[..self.length] {
            p.divrem_into(c, q, r);
            assert!(r.is_zero(), "Polynomial division is not exact");
            mem::swap(q, p);
        }
    }
}

impl<F: Ring> PartialEq for DenseCoeffPolynomial<F> {
    fn eq(&self, other: &Self) -> bool {
        if self.nvars() != other.nvars() || self.length != other.length {
            return false;
        }
        if self.coefficients[..self.length] != other.coefficients[..other.length] {
            return false;
        }
        if self.layout == other.layout {
            let n = self.layout.words();
            return self.exponents[..self.length * n] == other.exponents[..other.length * n];
        }
        (0..self.length).all(|i| {
            self.layout.unpacked(self.exponents(i)) == other.layout.unpacked(other.exponents(i))
        })
    }
}

impl<F: Ring> Eq for DenseCoeffPolynomial<F> {}
