use std::fmt;

use itertools::Itertools;

use poly::raw::densecoeff::DenseCoeffPolynomial;
use poly::raw::recursive::RecursivePolynomial;
use poly::raw::univariate::UnivariatePolynomial;
use poly::ring::Ring;

/// Prints a univariate polynomial with a variable name.
pub struct UnivariatePrinter<'a, F: 'a + Ring> {
    pub poly: &'a UnivariatePolynomial<F>,
    pub var_name: &'a str,
}

impl<'a, F: Ring> fmt::Display for UnivariatePrinter<'a, F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.poly.fmt_with_var(f, self.var_name)
    }
}

/// Prints a `DenseCoeffPolynomial` as `(c)*x1^2*x3+...`, where `var` is the dense
/// variable used inside the coefficients.
pub struct DenseCoeffPrinter<'a, F: 'a + Ring> {
    pub poly: &'a DenseCoeffPolynomial<F>,
    pub var: usize,
    pub var_names: &'a [&'a str],
}

impl<'a, F: Ring> fmt::Display for DenseCoeffPrinter<'a, F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let p = self.poly;
        if p.is_empty() {
            return write!(f, "0");
        }

        let terms = (0..p.len()).map(|i| {
            let factors = p
                .layout
                .unpacked(p.exponents(i))
                .into_iter()
                .enumerate()
                .filter(|&(_, e)| e > 0)
                .map(|(v, e)| {
                    if e == 1 {
                        self.var_names[v].to_string()
                    } else {
                        format!("{}^{}", self.var_names[v], e)
                    }
                })
                .join("*");

            let coeff = format!(
                "({})",
                UnivariatePrinter {
                    poly: &p.coefficients[i],
                    var_name: self.var_names[self.var],
                }
            );
            if factors.is_empty() {
                coeff
            } else {
                format!("{}*{}", coeff, factors)
            }
        });

        write!(f, "{}", terms.format("+"))
    }
}

/// Prints a `RecursivePolynomial` as `(inner)*x0^3 + (inner) + ...`.
pub struct RecursivePrinter<'a, F: 'a + Ring> {
    pub poly: &'a RecursivePolynomial<F>,
    pub var: usize,
    pub var_names: &'a [&'a str],
}

impl<'a, F: Ring> fmt::Display for RecursivePrinter<'a, F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let p = self.poly;
        if p.is_empty() {
            return write!(f, "0");
        }

        let terms = (0..p.len()).map(|i| {
            let inner = DenseCoeffPrinter {
                poly: &p.coefficients[i],
                var: self.var,
                var_names: self.var_names,
            };
            match p.exponents[i] {
                0 => format!("({})", inner),
                1 => format!("({})*{}", inner, self.var_names[0]),
                e => format!("({})*{}^{}", inner, self.var_names[0], e),
            }
        });

        write!(f, "{}", terms.format(" + "))
    }
}
