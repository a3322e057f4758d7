#[cfg(test)]
mod tests {
    use env_logger;
    use rand;
    use rand::Rng;

    use poly::printer::RecursivePrinter;
    use poly::raw::finitefield::FiniteField;
    use poly::raw::univariate::UnivariatePolynomial;
    use poly::raw::{MultivariatePolynomial, RecursivePolynomial};
    use poly::ring::Ring;

    const ROUNDS: usize = 50;

    fn random_poly<R: Rng>(
        rng: &mut R,
        field: FiniteField,
        nvars: usize,
        nterms: usize,
        max_exp: u64,
    ) -> MultivariatePolynomial<FiniteField> {
        let mut p = MultivariatePolynomial::with_nvars(nvars, field);
        for _ in 0..nterms {
            let e: Vec<u64> = (0..nvars).map(|_| rng.gen_range(0, max_exp + 1)).collect();
            let c = field.sample(rng);
            p.append_monomial(c, &e);
        }
        p
    }

    fn random_univariate<R: Rng>(
        rng: &mut R,
        field: FiniteField,
        degree: usize,
    ) -> UnivariatePolynomial<FiniteField> {
        let mut c: Vec<u64> = (0..degree).map(|_| field.sample(rng)).collect();
        c.push(rng.gen_range(1, field.get_prime()));
        UnivariatePolynomial::from_coefficients(c, field)
    }

    fn random_recursive<R: Rng>(rng: &mut R, field: FiniteField) -> RecursivePolynomial<FiniteField> {
        let nvars = rng.gen_range(2, 5);
        let nterms = rng.gen_range(1, 20);
        let mut p = random_poly(rng, field, nvars, nterms, 4);
        if p.is_zero() {
            p = MultivariatePolynomial::from_constant(1, nvars, field);
        }
        RecursivePolynomial::from_multivariate(&p, nvars - 1)
    }

    #[test]
    fn flatten_roundtrip() {
        let _ = env_logger::try_init();
        let mut rng = rand::thread_rng();
        let field = FiniteField::new(101);

        for _ in 0..ROUNDS {
            let nvars = rng.gen_range(2, 6);
            let nterms = rng.gen_range(0, 30);
            let p = random_poly(&mut rng, field, nvars, nterms, 6);
            assert!(p.is_canonical());

            for var in 1..nvars {
                let a = RecursivePolynomial::from_multivariate(&p, var);
                assert!(a.is_canonical());
                assert_eq!(a.to_multivariate(var, p.bits()), p);
                assert_eq!(a.to_multivariate(var, 24), p);
            }
        }
    }

    #[test]
    fn deflate_inflate_roundtrip() {
        let _ = env_logger::try_init();
        let mut rng = rand::thread_rng();
        let field = FiniteField::new(1000003);

        for _ in 0..ROUNDS {
            let nvars = rng.gen_range(2, 5);
            let nterms = rng.gen_range(1, 15);
            let q = random_poly(&mut rng, field, nvars, nterms, 5);
            if q.is_zero() {
                continue;
            }

            // spread the exponents out
            let identity: Vec<usize> = (0..nvars).collect();
            let shift: Vec<u64> = (0..nvars).map(|_| rng.gen_range(0, 6)).collect();
            let stride: Vec<u64> = (0..nvars).map(|_| rng.gen_range(1, 5)).collect();
            let p = q.permute_inflate(nvars, 16, &identity, &shift, &stride);
            assert!(p.is_canonical());

            let (shift, stride) = p.deflation();
            let mut perm = identity.clone();
            rng.shuffle(&mut perm);

            let mut a = RecursivePolynomial::new(nvars, 8, field);
            a.set_from_multivariate_perm_deflate(&p, &perm, &shift, &stride);
            assert!(a.is_canonical());

            let mut b = MultivariatePolynomial::new(nvars, p.bits(), field);
            b.set_from_recursive_perm_inflate(&a, &perm, &shift, &stride);
            assert_eq!(b, p);
        }
    }

    #[test]
    fn deflate_inflate_fixed_variable() {
        let _ = env_logger::try_init();
        let mut rng = rand::thread_rng();
        let field = FiniteField::new(1000003);

        for _ in 0..ROUNDS {
            let nterms = rng.gen_range(1, 15);
            let q = random_poly(&mut rng, field, 3, nterms, 5);
            if q.is_zero() {
                continue;
            }

            // variable 1 only ever has the exponent `fixed`
            let fixed = rng.gen_range(0, 4);
            let mut perm = vec![0, 2, 3];
            let shift: Vec<u64> = vec![rng.gen_range(0, 3), fixed, rng.gen_range(0, 3), 0];
            let stride: Vec<u64> = vec![rng.gen_range(1, 4), 1, 1, rng.gen_range(1, 4)];
            let p = q.permute_inflate(4, 16, &perm, &shift, &stride);
            assert!(p.is_canonical());
            assert!((0..p.nterms()).all(|t| p.exponent(t, 1) == fixed));

            let (shift, stride) = p.deflation();
            assert_eq!(shift[1], fixed);
            rng.shuffle(&mut perm);

            let mut a = RecursivePolynomial::new(3, 8, field);
            a.set_from_multivariate_perm_deflate(&p, &perm, &shift, &stride);
            assert!(a.is_canonical());

            let mut b = MultivariatePolynomial::new(4, p.bits(), field);
            b.set_from_recursive_perm_inflate(&a, &perm, &shift, &stride);
            assert_eq!(b, p);
        }
    }

    #[test]
    fn mutators_stay_canonical() {
        let _ = env_logger::try_init();
        let mut rng = rand::thread_rng();
        let field = FiniteField::new(7);

        for _ in 0..ROUNDS {
            let mut a = random_recursive(&mut rng, field);
            let degree = rng.gen_range(0, 3);
            let c = random_univariate(&mut rng, field, degree);
            let mut b = RecursivePolynomial::new(a.nvars(), 8, field);

            b.mul_poly(&a, &c);
            assert!(b.is_canonical());
            b.divexact_poly_assign(&c);
            assert!(b.is_canonical());

            a.scalar_mul(&rng.gen_range(1, 7));
            assert!(a.is_canonical());
            a.shift_left(3);
            assert!(a.is_canonical());
            a.shift_right(2);
            assert!(a.is_canonical());

            b.set(&a);
            assert!(b.is_canonical());
            a.set_one();
            assert!(a.is_canonical());
            b.swap(&mut a);
            assert!(a.is_canonical() && b.is_canonical());
            a.set_zero();
            assert!(a.is_canonical());
        }
    }

    #[test]
    fn content_divides() {
        let _ = env_logger::try_init();
        let mut rng = rand::thread_rng();
        let field = FiniteField::new(10007);

        for _ in 0..ROUNDS {
            let a = random_recursive(&mut rng, field);
            let g = a.content();
            assert!(!g.is_zero());

            let mut b = RecursivePolynomial::new(a.nvars(), 8, field);
            b.divexact_poly(&a, &g);
            assert!(b.is_canonical());
            assert_eq!(b.content().degree(), Some(0));

            b.set(&a);
            b.divexact_poly_assign(&g);
            assert_eq!(b.content().degree(), Some(0));
        }
    }

    #[test]
    fn content_contains_factor() {
        let _ = env_logger::try_init();
        let mut rng = rand::thread_rng();
        let field = FiniteField::new(10007);

        for _ in 0..ROUNDS {
            let mut a = random_recursive(&mut rng, field);
            let degree = rng.gen_range(1, 4);
            let c = random_univariate(&mut rng, field, degree);
            a.mul_poly_assign(&c);
            assert!(a.is_canonical());

            let (_, r) = a.content().divrem(&c);
            assert!(r.is_zero());
        }
    }

    #[test]
    fn mul_div_inverse() {
        let _ = env_logger::try_init();
        let mut rng = rand::thread_rng();
        let field = FiniteField::new(101);

        for _ in 0..ROUNDS {
            let a = random_recursive(&mut rng, field);
            let degree = rng.gen_range(0, 4);
            let c = random_univariate(&mut rng, field, degree);

            let mut b = RecursivePolynomial::new(a.nvars(), 8, field);
            b.mul_poly(&a, &c);
            let mut d = RecursivePolynomial::new(a.nvars(), 8, field);
            d.divexact_poly(&b, &c);
            assert_eq!(d, a);

            let mut e = a.clone();
            e.mul_poly_assign(&c);
            assert_eq!(e, b);
            e.divexact_poly_assign(&c);
            assert_eq!(e, a);
        }
    }

    #[test]
    fn known_content() {
        // (y + 1) * ((2y + 3) x^2 z + (y - 1) x + 5)
        let field = FiniteField::new(101);
        let mut p = MultivariatePolynomial::with_nvars(3, field);
        for &(c, ref e) in &[
            (3, [2, 1, 0]),
            (5, [2, 1, 1]),
            (2, [2, 1, 2]),
            (100, [1, 0, 0]),
            (1, [1, 0, 2]),
            (5, [0, 0, 0]),
            (5, [0, 0, 1]),
        ] {
            p.append_monomial(c, e);
        }
        let a = RecursivePolynomial::from_multivariate(&p, 2);
        let g = a.content();
        assert_eq!(g, UnivariatePolynomial::from_coefficients(vec![1, 1], field));

        let mut b = a.clone();
        b.divexact_poly_assign(&g);
        let names = ["x", "z", "y"];
        assert_eq!(
            format!(
                "{}",
                RecursivePrinter {
                    poly: &b,
                    var: 2,
                    var_names: &names,
                }
            ),
            "((2*y+3)*z)*x^2 + ((y+100))*x + ((5))"
        );
    }

    #[test]
    #[should_panic(expected = "not exact")]
    fn divexact_by_non_divisor() {
        let field = FiniteField::new(101);
        let mut p = MultivariatePolynomial::with_nvars(2, field);
        p.append_monomial(1, &[1, 1]);
        p.append_monomial(1, &[0, 0]);
        let mut a = RecursivePolynomial::from_multivariate(&p, 1);
        a.divexact_poly_assign(&UnivariatePolynomial::from_coefficients(vec![0, 1], field));
    }

    #[test]
    #[should_panic(expected = "Cannot multiply by the zero polynomial")]
    fn mul_by_zero() {
        let field = FiniteField::new(101);
        let p = MultivariatePolynomial::from_constant(3, 2, field);
        let mut a = RecursivePolynomial::from_multivariate(&p, 1);
        a.mul_poly_assign(&UnivariatePolynomial::new(field));
    }
}
