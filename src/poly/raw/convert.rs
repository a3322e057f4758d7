//! Conversions between the flat `MultivariatePolynomial` and the recursive
//! `RecursivePolynomial`, where variable 0 is the outer variable and `var` the
//! dense variable of the inner polynomials.

use std::cmp::Ordering;

use poly::raw::monomial;
use poly::raw::monomial::bits_required;
use poly::raw::multivar::MultivariatePolynomial;
use poly::raw::recursive::RecursivePolynomial;
use poly::ring::Ring;

impl<F: Ring> RecursivePolynomial<F> {
    /// Convert a flat polynomial, pulling out variable 0 as the outer variable and
    /// `var` as the dense variable.
    pub fn from_multivariate(b: &MultivariatePolynomial<F>, var: usize) -> Self {
        let mut a = RecursivePolynomial::new(b.nvars(), b.bits(), b.field.clone());
        a.set_from_multivariate(b, var);
        a
    }

    /// Set `self` to the recursive form of `b`, using the layout of `b` for the
    /// inner polynomials.
    ///
    /// Terms are grouped by outer exponent, then by the remaining exponents with
    /// both pulled variables zeroed, then by the degree in `var`. When the
    /// terms of `b` are not in this order already, which happens when `var` is not
    /// the last variable, they are sorted first.
    pub fn set_from_multivariate(&mut self, b: &MultivariatePolynomial<F>, var: usize) {
        let nvars = b.nvars();
        assert!(
            var > 0 && var < nvars,
            "Dense variable {} must be one of the variables 1..{}",
            var,
            nvars
        );

        let layout = b.layout;
        self.reset(layout);

        let n = layout.words();
        let gen0 = layout.gen(0);
        let genv = layout.gen(var);
        let mut tmp = layout.zero_monomial();
        let mut residual = vec![0; b.nterms() * n];
        for t in 0..b.nterms() {
            monomial::msub(&mut tmp, b.exponents(t), b.exponent(t, 0), &gen0);
            monomial::msub(
                &mut residual[t * n..(t + 1) * n],
                &tmp,
                b.exponent(t, var),
                &genv,
            );
        }

        let key_cmp = |s: usize, t: usize| -> Ordering {
            b.exponent(s, 0)
                .cmp(&b.exponent(t, 0))
                .then_with(|| monomial::cmp(&residual[s * n..(s + 1) * n], &residual[t * n..(t + 1) * n]))
                .then_with(|| b.exponent(s, var).cmp(&b.exponent(t, var)))
        };

        let mut order: Vec<usize> = (0..b.nterms()).collect();
        if (1..b.nterms()).any(|t| key_cmp(t - 1, t) != Ordering::Greater) {
            debug!(
                "terms are not grouped by the dense variable {}, sorting {} terms",
                var,
                b.nterms()
            );
            order.sort_by(|&s, &t| key_cmp(t, s));
        }

        for t in order {
            let e0 = b.exponent(t, 0);
            let d = b.exponent(t, var) as usize;
            let r = &residual[t * n..(t + 1) * n];

            if self.length == 0 || self.exponents[self.length - 1] != e0 {
                let i = self.length;
                self.fit_length(i + 1);
                self.exponents[i] = e0;
                self.length += 1;
            }

            let a = &mut self.coefficients[self.length - 1];
            if a.length == 0 || a.exponents(a.length - 1) != r {
                let j = a.length;
                a.fit_length(j + 1);
                a.exponents_mut(j).copy_from_slice(r);
                a.length += 1;
            }

            let j = a.length - 1;
            a.coefficients[j].set_coefficient(d, b.coefficients[t].clone());
        }

        trace!(
            "flattened {} terms into {} outer terms",
            b.nterms(),
            self.length
        );
        debug_assert!(self.is_canonical());
    }

    /// Deflate `b` with `permute_deflate` into the layout of `self` and convert
    /// the result, with the last variable of `perm` as the dense variable.
    pub fn set_from_multivariate_perm_deflate(
        &mut self,
        b: &MultivariatePolynomial<F>,
        perm: &[usize],
        shift: &[u64],
        stride: &[u64],
    ) {
        assert!(perm.len() >= 2, "Need an outer and a dense variable");
        assert_eq!(perm.len(), self.nvars(), "nvars mismatched");

        let d = b.permute_deflate(perm, shift, stride, self.bits());
        debug!(
            "deflated {} terms in {} variables to {} variables",
            b.nterms(),
            b.nvars(),
            perm.len()
        );
        self.set_from_multivariate(&d, perm.len() - 1);
    }

    /// Convert back to a flat polynomial with `bits` bits per exponent.
    pub fn to_multivariate(&self, var: usize, bits: usize) -> MultivariatePolynomial<F> {
        let mut a = MultivariatePolynomial::new(self.nvars(), bits, self.field.clone());
        a.set_from_recursive(self, var);
        a
    }

    /// The smallest exponent width that can hold `self` as a flat polynomial.
    fn required_bits(&self) -> usize {
        if self.is_zero() {
            return self.bits();
        }
        let max = self.exponents[0].max(self.last_degree() as u64);
        bits_required(max).max(self.bits())
    }
}

impl<F: Ring> MultivariatePolynomial<F> {
    /// Set `self` to the flat form of `b`, keeping the layout of `self`. Panics
    /// when an exponent does not fit.
    pub fn set_from_recursive(&mut self, b: &RecursivePolynomial<F>, var: usize) {
        assert_eq!(self.nvars(), b.nvars(), "nvars mismatched");
        assert!(var > 0 && var < self.nvars(), "Invalid dense variable {}", var);

        self.clear();
        let mut count = 0;
        for a in &b.coefficients[..b.length] {
            for c in &a.coefficients[..a.length] {
                count += c.coefficients.iter().filter(|x| !F::is_zero(x)).count();
            }
        }
        self.fit_length(count);

        let same_layout = self.layout == b.layout;
        let gen0 = self.layout.gen(0);
        let genv = self.layout.gen(var);
        let mut e = vec![0; self.nvars()];
        let mut tmp = self.layout.zero_monomial();
        let mut packed = self.layout.zero_monomial();
        let mut sorted = true;

        for (i, a) in b.coefficients[..b.length].iter().enumerate() {
            let e0 = b.exponents[i];
            for j in 0..a.length {
                if !same_layout {
                    b.layout.unpack(a.exponents(j), &mut e);
                }

                for (d, x) in a.coefficients[j].coefficients.iter().enumerate().rev() {
                    if F::is_zero(x) {
                        continue;
                    }

                    let d = d as u64;
                    if same_layout {
                        if !self.layout.fits(e0) || !self.layout.fits(d) {
                            panic!(
                                "Cannot unflatten exponents ({}, {}) into {} bits",
                                e0,
                                d,
                                self.bits()
                            );
                        }
                        monomial::madd(&mut tmp, a.exponents(j), e0, &gen0);
                        monomial::madd(&mut packed, &tmp, d, &genv);
                    } else {
                        e[0] = e0;
                        e[var] = d;
                        if let Err(err) = self.layout.pack(&e, &mut packed) {
                            panic!("Cannot unflatten into {} bits: {}", self.bits(), err);
                        }
                    }

                    if sorted
                        && self.nterms > 0
                        && monomial::cmp(self.exponents(self.nterms - 1), &packed) != Ordering::Greater
                    {
                        sorted = false;
                    }
                    self.push_term(x.clone(), &packed);
                }
            }
        }

        if !sorted {
            trace!("sorting {} unflattened terms", self.nterms);
            self.sort_terms();
        }
        debug_assert!(self.is_canonical());
    }

    /// The inverse of `set_from_multivariate_perm_deflate`: convert `b` back and
    /// inflate it into the variables and layout of `self`.
    pub fn set_from_recursive_perm_inflate(
        &mut self,
        b: &RecursivePolynomial<F>,
        perm: &[usize],
        shift: &[u64],
        stride: &[u64],
    ) {
        assert_eq!(perm.len(), b.nvars(), "nvars mismatched");
        if b.is_zero() {
            self.clear();
            return;
        }

        let t = b.to_multivariate(perm.len() - 1, b.required_bits());
        *self = t.permute_inflate(self.nvars(), self.bits(), perm, shift, stride);
        debug!(
            "inflated {} terms to {} variables with {} bits",
            self.nterms,
            self.nvars(),
            self.bits()
        );
    }
}
