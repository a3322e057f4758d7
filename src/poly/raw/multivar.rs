use std::cmp::Ordering;
use std::fmt;
use std::mem;
use std::ops::{Add, Mul, Neg, Sub};

use num_integer::Integer;

use poly::raw::monomial;
use poly::raw::monomial::{bits_required, ExponentOverflow, MonomialLayout, MIN_BITS};
use poly::ring::Ring;

/// Multivariate polynomial with a degree sparse and variable dense representation.
#[derive(Clone)]
pub struct MultivariatePolynomial<F: Ring> {
    // Data format: the i-th monomial is stored as coefficients[i] and
    // exponents[i * N .. (i + 1) * N], where N is the number of words of a packed
    // exponent vector. Keep coefficients.len() == nterms and
    // exponents.len() == nterms * N. Terms are sorted by strictly decreasing
    // lexicographic order of the exponents, so the first term is the leading term.
    pub coefficients: Vec<F::Element>,
    pub exponents: Vec<u64>,
    pub nterms: usize,
    pub layout: MonomialLayout,
    pub field: F,
}

impl<F: Ring> MultivariatePolynomial<F> {
    /// Constructs a zero polynomial with `bits` bits per exponent.
    #[inline]
    pub fn new(nvars: usize, bits: usize, field: F) -> Self {
        Self {
            coefficients: Vec::new(),
            exponents: Vec::new(),
            nterms: 0,
            layout: MonomialLayout::new(nvars, bits),
            field,
        }
    }

    /// Constructs a zero polynomial with the given number of variables.
    #[inline]
    pub fn with_nvars(nvars: usize, field: F) -> Self {
        Self::new(nvars, MIN_BITS, field)
    }

    /// Constructs a constant polynomial with the given number of variables.
    pub fn from_constant(constant: F::Element, nvars: usize, field: F) -> Self {
        let mut a = Self::with_nvars(nvars, field);
        a.append_monomial(constant, &vec![0; nvars]);
        a
    }

    /// Constructs a polynomial with a single term.
    pub fn from_monomial(coefficient: F::Element, exponents: &[u64], field: F) -> Self {
        let bits = bits_required(exponents.iter().cloned().max().unwrap_or(0));
        let mut a = Self::new(exponents.len(), bits, field);
        a.append_monomial(coefficient, exponents);
        a
    }

    /// Returns the number of terms in the polynomial.
    #[inline]
    pub fn nterms(&self) -> usize {
        self.nterms
    }

    /// Returns the number of variables in the polynomial.
    #[inline]
    pub fn nvars(&self) -> usize {
        self.layout.nvars()
    }

    #[inline]
    pub fn bits(&self) -> usize {
        self.layout.bits()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.nterms == 0
    }

    /// Returns true if the polynomial is constant.
    pub fn is_constant(&self) -> bool {
        self.is_zero() || (self.nterms == 1 && monomial::is_zero(self.exponents(0)))
    }

    /// Returns the packed exponents of the specified monomial.
    #[inline]
    pub fn exponents(&self, index: usize) -> &[u64] {
        let n = self.layout.words();
        &self.exponents[index * n..(index + 1) * n]
    }

    pub fn unpacked_exponents(&self, index: usize) -> Vec<u64> {
        self.layout.unpacked(self.exponents(index))
    }

    /// The exponent of variable `var` in the specified monomial.
    #[inline]
    pub fn exponent(&self, index: usize, var: usize) -> u64 {
        self.layout.get(self.exponents(index), var)
    }

    pub fn clear(&mut self) {
        self.nterms = 0;
        self.coefficients.clear();
        self.exponents.clear();
    }

    /// Reserve room for `length` terms.
    pub fn fit_length(&mut self, length: usize) {
        if length > self.nterms {
            let extra = length - self.nterms;
            self.coefficients.reserve(extra);
            self.exponents.reserve(extra * self.layout.words());
        }
    }

    /// Appends a term with packed exponents that sorts after all present terms.
    #[inline]
    pub fn push_term(&mut self, coefficient: F::Element, exponents: &[u64]) {
        debug_assert!(!F::is_zero(&coefficient));
        debug_assert_eq!(exponents.len(), self.layout.words());
        self.coefficients.push(coefficient);
        self.exponents.extend_from_slice(exponents);
        self.nterms += 1;
    }

    /// Appends a monomial to the polynomial, keeping the terms sorted. The
    /// exponent width grows when `exponents` does not fit.
    pub fn append_monomial(&mut self, coefficient: F::Element, exponents: &[u64]) {
        if F::is_zero(&coefficient) {
            return;
        }
        if self.nvars() != exponents.len() {
            panic!(
                "nvars mismatched: got {}, expected {}",
                exponents.len(),
                self.nvars()
            );
        }

        let mut packed = self.layout.zero_monomial();
        if let Err(e) = self.layout.pack(exponents, &mut packed) {
            let bits = bits_required(exponents.iter().cloned().max().unwrap_or(0));
            trace!("widening exponents from {} to {} bits: {}", self.bits(), bits, e);
            if self.repack_bits(bits).is_err() {
                unreachable!("widening the exponent fields cannot overflow");
            }
            packed = self.layout.zero_monomial();
            if self.layout.pack(exponents, &mut packed).is_err() {
                unreachable!("exponents fit after widening");
            }
        }

        // Binary search to find the insert-point.
        let n = self.layout.words();
        let mut l = 0;
        let mut r = self.nterms;
        while l < r {
            let m = (l + r) / 2;
            match monomial::cmp(&packed, self.exponents(m)) {
                Ordering::Greater => r = m,
                Ordering::Less => l = m + 1,
                Ordering::Equal => {
                    let mut new_coeff = self.field.add(&self.coefficients[m], &coefficient);
                    if F::is_zero(&new_coeff) {
                        // The coefficient becomes zero. Remove this monomial.
                        self.coefficients.remove(m);
                        self.exponents.drain(m * n..(m + 1) * n);
                        self.nterms -= 1;
                    } else {
                        mem::swap(&mut self.coefficients[m], &mut new_coeff);
                    }
                    return;
                }
            }
        }

        self.coefficients.insert(l, coefficient);
        self.exponents.splice(l * n..l * n, packed);
        self.nterms += 1;
    }

    /// Repack the exponents with `bits` bits per variable. On failure the
    /// polynomial is left untouched.
    pub fn repack_bits(&mut self, bits: usize) -> Result<(), ExponentOverflow> {
        let layout = MonomialLayout::new(self.nvars(), bits);
        if layout == self.layout {
            return Ok(());
        }

        let n = layout.words();
        let mut exponents = vec![0; self.nterms * n];
        let mut e = vec![0; self.nvars()];
        for t in 0..self.nterms {
            self.layout.unpack(self.exponents(t), &mut e);
            layout.pack(&e, &mut exponents[t * n..(t + 1) * n])?;
        }

        self.exponents = exponents;
        self.layout = layout;
        Ok(())
    }

    /// Check the structural invariants: consistent storage, no zero coefficients
    /// and strictly decreasing exponents.
    pub fn is_canonical(&self) -> bool {
        if self.coefficients.len() != self.nterms
            || self.exponents.len() != self.nterms * self.layout.words()
        {
            return false;
        }

        if self.coefficients.iter().any(|c| F::is_zero(c)) {
            return false;
        }

        (1..self.nterms)
            .all(|t| monomial::cmp(self.exponents(t - 1), self.exponents(t)) == Ordering::Greater)
    }

    /// Get the degree of the variable `x`.
    /// This operation is O(n).
    pub fn degree(&self, x: usize) -> u64 {
        (0..self.nterms)
            .map(|t| self.exponent(t, x))
            .max()
            .unwrap_or(0)
    }

    /// Get the degree of every variable.
    pub fn degrees(&self) -> Vec<u64> {
        let mut max = vec![0; self.nvars()];
        let mut e = vec![0; self.nvars()];
        for t in 0..self.nterms {
            self.layout.unpack(self.exponents(t), &mut e);
            for (m, x) in max.iter_mut().zip(&e) {
                if *x > *m {
                    *m = *x;
                }
            }
        }
        max
    }

    /// Sort the terms by decreasing exponents, merging equal monomials.
    pub fn sort_terms(&mut self) {
        let n = self.layout.words();
        let coefficients = mem::replace(&mut self.coefficients, Vec::new());
        let exponents = mem::replace(&mut self.exponents, Vec::new());
        let mut terms: Vec<(&[u64], F::Element)> = coefficients
            .into_iter()
            .enumerate()
            .map(|(t, c)| (&exponents[t * n..(t + 1) * n], c))
            .collect();
        terms.sort_by(|a, b| monomial::cmp(b.0, a.0));

        self.nterms = 0;
        for (e, c) in terms {
            if self.nterms > 0 && self.exponents(self.nterms - 1) == e {
                let last = self.nterms - 1;
                self.field.add_assign(&mut self.coefficients[last], &c);
                if F::is_zero(&self.coefficients[last]) {
                    self.coefficients.pop();
                    self.exponents.truncate(last * n);
                    self.nterms -= 1;
                }
            } else {
                self.push_term(c, e);
            }
        }
    }

    /// Compute the deflation of the polynomial: for every variable the minimal
    /// exponent `shift` and the gcd `stride` of the exponents minus the shift.
    /// Variables with a single exponent get stride 1.
    pub fn deflation(&self) -> (Vec<u64>, Vec<u64>) {
        let nvars = self.nvars();
        if self.is_zero() {
            return (vec![0; nvars], vec![1; nvars]);
        }

        let mut e = vec![0; nvars];
        let mut shift = self.unpacked_exponents(0);
        for t in self {
            self.layout.unpack(t.exponents, &mut e);
            for (s, x) in shift.iter_mut().zip(&e) {
                if *x < *s {
                    *s = *x;
                }
            }
        }

        let mut stride = vec![0u64; nvars];
        for t in self {
            self.layout.unpack(t.exponents, &mut e);
            for ((g, x), s) in stride.iter_mut().zip(&e).zip(&shift) {
                *g = (*g).gcd(&(x - s));
            }
        }

        for g in &mut stride {
            if *g == 0 {
                *g = 1;
            }
        }

        (shift, stride)
    }

    /// Map the polynomial to a polynomial in `perm.len()` variables, where the
    /// exponent of new variable `k` is `(e[perm[k]] - shift[perm[k]]) / stride[perm[k]]`,
    /// packed with `bits` bits. Variables outside of `perm` must have the constant
    /// exponent `shift[v]`.
    pub fn permute_deflate(&self, perm: &[usize], shift: &[u64], stride: &[u64], bits: usize) -> Self {
        assert_eq!(shift.len(), self.nvars(), "shift length mismatched");
        assert_eq!(stride.len(), self.nvars(), "stride length mismatched");
        assert!(
            perm.iter().all(|v| *v < self.nvars() && stride[*v] > 0),
            "invalid permutation or zero stride"
        );

        let mut res = Self::new(perm.len(), bits, self.field.clone());
        res.fit_length(self.nterms);

        let mut e = vec![0; self.nvars()];
        let mut d = vec![0; perm.len()];
        let mut packed = res.layout.zero_monomial();
        let mut sorted = true;
        for t in 0..self.nterms {
            self.layout.unpack(self.exponents(t), &mut e);
            if let Some(v) = (0..self.nvars()).find(|v| !perm.contains(v) && e[*v] != shift[*v]) {
                panic!(
                    "Cannot deflate: variable {} is not in the permutation but has exponent {} != {}",
                    v, e[v], shift[v]
                );
            }

            for (dk, &v) in d.iter_mut().zip(perm) {
                if e[v] < shift[v] || (e[v] - shift[v]) % stride[v] != 0 {
                    panic!(
                        "Cannot deflate exponent {} of variable {} with shift {} and stride {}",
                        e[v], v, shift[v], stride[v]
                    );
                }
                *dk = (e[v] - shift[v]) / stride[v];
            }

            if let Err(err) = res.layout.pack(&d, &mut packed) {
                panic!("Cannot deflate into {} bits: {}", bits, err);
            }
            if res.nterms > 0 && monomial::cmp(res.exponents(res.nterms - 1), &packed) != Ordering::Greater {
                sorted = false;
            }
            res.push_term(self.coefficients[t].clone(), &packed);
        }

        if !sorted {
            res.sort_terms();
        }
        debug_assert!(res.is_canonical());
        res
    }

    /// The inverse of `permute_deflate`: map to a polynomial in `nvars` variables
    /// with `bits` bits per exponent, where variable `perm[k]` gets the exponent
    /// `shift[perm[k]] + stride[perm[k]] * e[k]` and every other variable `v` gets `shift[v]`.
    pub fn permute_inflate(
        &self,
        nvars: usize,
        bits: usize,
        perm: &[usize],
        shift: &[u64],
        stride: &[u64],
    ) -> Self {
        assert_eq!(perm.len(), self.nvars(), "permutation length mismatched");
        assert_eq!(shift.len(), nvars, "shift length mismatched");
        assert_eq!(stride.len(), nvars, "stride length mismatched");
        assert!(perm.iter().all(|v| *v < nvars), "invalid permutation");

        let mut res = Self::new(nvars, bits, self.field.clone());
        res.fit_length(self.nterms);

        let mut d = vec![0; self.nvars()];
        let mut e = vec![0; nvars];
        let mut packed = res.layout.zero_monomial();
        let mut sorted = true;
        for t in 0..self.nterms {
            self.layout.unpack(self.exponents(t), &mut d);
            e.copy_from_slice(shift);
            for (&dk, &v) in d.iter().zip(perm) {
                e[v] = match dk.checked_mul(stride[v]).and_then(|x| x.checked_add(shift[v])) {
                    Some(x) => x,
                    None => panic!("Exponent overflow while inflating variable {}", v),
                };
            }

            if let Err(err) = res.layout.pack(&e, &mut packed) {
                panic!("Cannot inflate into {} bits: {}", bits, err);
            }
            if res.nterms > 0 && monomial::cmp(res.exponents(res.nterms - 1), &packed) != Ordering::Greater {
                sorted = false;
            }
            res.push_term(self.coefficients[t].clone(), &packed);
        }

        if !sorted {
            res.sort_terms();
        }
        res
    }

    /// Bring `self` and `other` to the same exponent width.
    fn unify_bits(&mut self, other: &mut Self) {
        if self.nvars() != other.nvars() {
            panic!("nvars mismatched");
        }
        let bits = self.bits().max(other.bits());
        if self.repack_bits(bits).is_err() || other.repack_bits(bits).is_err() {
            unreachable!("widening the exponent fields cannot overflow");
        }
    }
}

/// View object for a term in a multivariate polynomial.
#[derive(Clone, Debug)]
pub struct MultivariateMonomialView<'a, F: 'a + Ring> {
    pub coefficient: &'a F::Element,
    pub exponents: &'a [u64],
}

/// Iterator over terms in a multivariate polynomial.
pub struct MultivariateMonomialViewIterator<'a, F: 'a + Ring> {
    poly: &'a MultivariatePolynomial<F>,
    index: usize,
}

impl<'a, F: Ring> Iterator for MultivariateMonomialViewIterator<'a, F> {
    type Item = MultivariateMonomialView<'a, F>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.index == self.poly.nterms {
            None
        } else {
            let view = MultivariateMonomialView {
                coefficient: &self.poly.coefficients[self.index],
                exponents: self.poly.exponents(self.index),
            };
            self.index += 1;
            Some(view)
        }
    }
}

impl<'a, F: Ring> IntoIterator for &'a MultivariatePolynomial<F> {
    type Item = MultivariateMonomialView<'a, F>;
    type IntoIter = MultivariateMonomialViewIterator<'a, F>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        MultivariateMonomialViewIterator {
            poly: self,
            index: 0,
        }
    }
}

impl<F: Ring> fmt::Debug for MultivariatePolynomial<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "[]");
        }
        let mut first = true;
        write!(f, "[ ")?;
        for t in self {
            if first {
                first = false;
            } else {
                write!(f, ", ")?;
            }
            write!(
                f,
                "{{ {:?}, {:?} }}",
                t.coefficient,
                self.layout.unpacked(t.exponents)
            )?;
        }
        write!(f, " ]")
    }
}

impl<F: Ring> fmt::Display for MultivariatePolynomial<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut is_first_term = true;
        for term in self {
            let coefficient = term.coefficient;
            let mut is_first_factor = true;
            if self.field.is_one(coefficient) {
                if !is_first_term {
                    write!(f, "+")?;
                }
            } else {
                if is_first_term {
                    write!(f, "{}", coefficient)?;
                } else {
                    write!(f, "+{}", coefficient)?;
                }
                is_first_factor = false;
            }
            is_first_term = false;
            for (i, e) in self.layout.unpacked(term.exponents).into_iter().enumerate() {
                if e == 0 {
                    continue;
                }
                if is_first_factor {
                    is_first_factor = false;
                } else {
                    write!(f, "*")?;
                }
                write!(f, "x{}", i)?;
                if e != 1 {
                    write!(f, "^{}", e)?;
                }
            }
            if is_first_factor {
                write!(f, "1")?;
            }
        }
        if is_first_term {
            write!(f, "0")?;
        }
        Ok(())
    }
}

impl<F: Ring> PartialEq for MultivariatePolynomial<F> {
    fn eq(&self, other: &Self) -> bool {
        if self.nvars() != other.nvars() {
            if self.is_zero() && other.is_zero() {
                // Both are 0.
                return true;
            }
            if self.is_zero() || other.is_zero() {
                // One of them is 0.
                return false;
            }
            panic!("nvars mismatched");
        }
        if self.nterms != other.nterms || self.coefficients != other.coefficients {
            return false;
        }
        if self.layout == other.layout {
            return self.exponents == other.exponents;
        }
        (0..self.nterms).all(|t| self.unpacked_exponents(t) == other.unpacked_exponents(t))
    }
}

impl<F: Ring> Eq for MultivariatePolynomial<F> {}

impl<F: Ring> Add for MultivariatePolynomial<F> {
    type Output = Self;

    fn add(mut self, mut other: Self) -> Self::Output {
        if self.is_zero() {
            return other;
        }
        if other.is_zero() {
            return self;
        }
        self.unify_bits(&mut other);

        // Merge the two polynomials, which are assumed to be already sorted.
        let mut res = Self::new(self.nvars(), self.bits(), self.field.clone());
        res.fit_length(self.nterms + other.nterms);
        let mut i = 0;
        let mut j = 0;

        while i < self.nterms && j < other.nterms {
            match monomial::cmp(self.exponents(i), other.exponents(j)) {
                Ordering::Greater => {
                    res.push_term(self.coefficients[i].clone(), self.exponents(i));
                    i += 1;
                }
                Ordering::Less => {
                    res.push_term(other.coefficients[j].clone(), other.exponents(j));
                    j += 1;
                }
                Ordering::Equal => {
                    let new_c = self.field.add(&self.coefficients[i], &other.coefficients[j]);
                    if !F::is_zero(&new_c) {
                        res.push_term(new_c, self.exponents(i));
                    }
                    i += 1;
                    j += 1;
                }
            }
        }

        while i < self.nterms {
            res.push_term(self.coefficients[i].clone(), self.exponents(i));
            i += 1;
        }

        while j < other.nterms {
            res.push_term(other.coefficients[j].clone(), other.exponents(j));
            j += 1;
        }

        res
    }
}

impl<F: Ring> Sub for MultivariatePolynomial<F> {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        self.add(other.neg())
    }
}

impl<F: Ring> Neg for MultivariatePolynomial<F> {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        // Negate coefficients of all terms.
        for c in &mut self.coefficients {
            *c = self.field.neg(c);
        }
        self
    }
}

impl<F: Ring> Mul for MultivariatePolynomial<F> {
    type Output = Self;

    fn mul(mut self, mut other: Self) -> Self::Output {
        if self.nvars() != other.nvars() {
            panic!("nvars mismatched");
        }
        if self.is_zero() {
            return Self::new(other.nvars(), other.bits(), other.field);
        }
        if other.is_zero() {
            return Self::new(self.nvars(), self.bits(), self.field);
        }
        // make sure that the exponents of the product cannot overflow a field
        let max = self
            .degrees()
            .iter()
            .zip(other.degrees())
            .map(|(a, b)| a + b)
            .max()
            .unwrap_or(0);
        let bits = bits_required(max).max(self.bits()).max(other.bits());
        if self.repack_bits(bits).is_err() || other.repack_bits(bits).is_err() {
            unreachable!("widening the exponent fields cannot overflow");
        }

        let n = self.layout.words();
        let mut res = Self::new(self.nvars(), bits, self.field.clone());
        res.fit_length(self.nterms * other.nterms);
        let mut e = vec![0; n];
        for i in 0..self.nterms {
            for j in 0..other.nterms {
                monomial::add(&mut e, self.exponents(i), other.exponents(j));
                let c = self.field.mul(&self.coefficients[i], &other.coefficients[j]);
                if !F::is_zero(&c) {
                    res.push_term(c, &e);
                }
            }
        }

        res.sort_terms();
        res
    }
}

#[cfg(test)]
mod tests {
    use super::MultivariatePolynomial;
    use poly::raw::finitefield::FiniteField;
    use poly::raw::monomial::ExponentOverflow;

    fn poly(f: FiniteField, terms: &[(i64, &[u64])]) -> MultivariatePolynomial<FiniteField> {
        let mut a = MultivariatePolynomial::with_nvars(terms[0].1.len(), f);
        for &(c, e) in terms {
            a.append_monomial(f.element(c), e);
        }
        a
    }

    #[test]
    fn append_monomial_sorts_and_merges() {
        let f = FiniteField::new(13);
        let a = poly(
            f,
            &[(1, &[0, 1]), (2, &[1, 0]), (3, &[0, 0]), (4, &[1, 3]), (5, &[0, 1])],
        );

        assert!(a.is_canonical());
        assert_eq!(a.nterms(), 4);
        assert_eq!(a.unpacked_exponents(0), vec![1, 3]);
        assert_eq!(a.unpacked_exponents(3), vec![0, 0]);
        assert_eq!(a.coefficients, vec![4, 2, 6, 3]);
        let terms: Vec<_> = (&a).into_iter().map(|t| (*t.coefficient, t.exponents.len())).collect();
        assert_eq!(terms, vec![(4, 1), (2, 1), (6, 1), (3, 1)]);

        let b = poly(f, &[(1, &[2, 2]), (-1, &[2, 2])]);
        assert!(b.is_zero());
    }

    #[test]
    fn constants() {
        let f = FiniteField::new(13);
        assert!(MultivariatePolynomial::from_constant(3, 2, f).is_constant());
        assert!(MultivariatePolynomial::from_constant(0, 2, f).is_zero());

        let a = MultivariatePolynomial::from_monomial(5, &[0, 300], f);
        assert!(!a.is_constant());
        assert_eq!(a.bits(), 9);
        assert_eq!(a.exponent(0, 1), 300);
        assert_eq!(a.degrees(), vec![0, 300]);
    }

    #[test]
    fn widening() {
        let f = FiniteField::new(13);
        let mut a = poly(f, &[(1, &[3, 1, 4])]);
        assert_eq!(a.bits(), 8);
        a.append_monomial(2, &[1000, 0, 0]);
        assert!(a.bits() >= 10);
        assert!(a.is_canonical());
        assert_eq!(a.unpacked_exponents(0), vec![1000, 0, 0]);
        assert_eq!(a.unpacked_exponents(1), vec![3, 1, 4]);

        assert_eq!(
            a.repack_bits(9),
            Err(ExponentOverflow {
                var: 0,
                exponent: 1000,
                bits: 9
            })
        );
        assert!(a.repack_bits(40).is_ok());
        assert_eq!(a.unpacked_exponents(0), vec![1000, 0, 0]);
    }

    #[test]
    fn arithmetic() {
        // (x0 + x1)*(x0 - x1) = x0^2 - x1^2
        let f = FiniteField::new(101);
        let a = poly(f, &[(1, &[1, 0]), (1, &[0, 1])]);
        let b = poly(f, &[(1, &[1, 0]), (-1, &[0, 1])]);
        let c = a.clone() * b.clone();
        assert_eq!(c, poly(f, &[(1, &[2, 0]), (-1, &[0, 2])]));
        assert!(c.is_canonical());

        assert_eq!(a.clone() + b.clone(), poly(f, &[(2, &[1, 0])]));
        assert_eq!(a.clone() - b, poly(f, &[(2, &[0, 1])]));
        assert!((a.clone() - a).is_zero());
    }

    #[test]
    fn mul_widens() {
        let f = FiniteField::new(101);
        let a = poly(f, &[(1, &[200, 0]), (1, &[0, 1])]);
        let c = a.clone() * a;
        assert!(c.bits() >= 9);
        assert_eq!(c.degree(0), 400);
        assert_eq!(c.nterms(), 3);
    }

    #[test]
    fn deflation() {
        let f = FiniteField::new(101);
        let a = poly(f, &[(1, &[2, 7, 3]), (3, &[5, 1, 3]), (4, &[11, 4, 3])]);
        let (shift, stride) = a.deflation();
        assert_eq!(shift, vec![2, 1, 3]);
        assert_eq!(stride, vec![3, 3, 1]);

        // swap the first two variables and drop the constant third one
        let d = a.permute_deflate(&[1, 0], &shift, &stride, 8);
        assert!(d.is_canonical());
        assert_eq!(d, poly(f, &[(1, &[2, 0]), (4, &[1, 3]), (3, &[0, 1])]));

        let b = d.permute_inflate(3, 16, &[1, 0], &shift, &stride);
        assert_eq!(b, a);
        assert_eq!(b.bits(), 16);
    }

    #[test]
    #[should_panic(expected = "Cannot deflate exponent 3 of variable 0")]
    fn deflate_bad_stride() {
        let f = FiniteField::new(101);
        let a = poly(f, &[(1, &[3, 0]), (1, &[2, 0])]);
        a.permute_deflate(&[0, 1], &[0, 0], &[2, 1], 8);
    }

    #[test]
    #[should_panic(expected = "Cannot deflate: variable 1")]
    fn deflate_dropped_variable_not_constant() {
        let f = FiniteField::new(101);
        let a = poly(f, &[(1, &[1, 2]), (1, &[0, 1])]);
        a.permute_deflate(&[0], &[0, 1], &[1, 1], 8);
    }

    #[test]
    #[should_panic(expected = "Cannot inflate")]
    fn inflate_too_narrow() {
        let f = FiniteField::new(101);
        let a = poly(f, &[(1, &[1, 200])]);
        a.permute_inflate(2, 8, &[0, 1], &[0, 0], &[1, 2]);
    }

    #[test]
    fn display() {
        let f = FiniteField::new(101);
        let a = poly(f, &[(1, &[2, 0]), (5, &[1, 1]), (7, &[0, 0])]);
        assert_eq!(format!("{}", a), "x0^2+5*x0*x1+7");
        assert_eq!(format!("{:?}", a), "[ { 1, [2, 0] }, { 5, [1, 1] }, { 7, [0, 0] } ]");
    }
}
