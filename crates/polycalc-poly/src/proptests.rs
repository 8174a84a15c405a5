//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::polynomial::Polynomial;

    // Small integer coefficients keep every sum and product exact.
    fn small_coeff() -> impl Strategy<Value = f64> {
        (-20i32..20i32).prop_map(f64::from)
    }

    fn small_pairs() -> impl Strategy<Value = Vec<(f64, u32)>> {
        proptest::collection::vec((small_coeff(), 0u32..8), 0..=6)
    }

    fn small_poly() -> impl Strategy<Value = Polynomial> {
        small_pairs().prop_map(|pairs| pairs.into_iter().collect::<Polynomial>())
    }

    fn nonzero_poly() -> impl Strategy<Value = Polynomial> {
        small_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
    }

    fn is_strictly_ascending(p: &Polynomial) -> bool {
        p.terms().windows(2).all(|w| w[0].exponent < w[1].exponent)
    }

    proptest! {
        // Storage invariants

        #[test]
        fn add_term_keeps_unique_sorted_exponents(pairs in small_pairs()) {
            let mut p = Polynomial::new();
            for (c, e) in &pairs {
                p.add_term(*c, *e);
                prop_assert!(is_strictly_ascending(&p));
            }
        }

        #[test]
        fn add_term_accumulates(pairs in small_pairs()) {
            let p: Polynomial = pairs.iter().copied().collect();
            for e in 0u32..8 {
                let expected: f64 = pairs
                    .iter()
                    .filter(|(_, pe)| *pe == e)
                    .map(|(c, _)| c)
                    .sum();
                prop_assert_eq!(p.coeff(e), expected);
            }
        }

        #[test]
        fn operators_keep_invariants(a in small_poly(), b in small_poly()) {
            prop_assert!(is_strictly_ascending(&a.add(&b)));
            prop_assert!(is_strictly_ascending(&a.sub(&b)));
            prop_assert!(is_strictly_ascending(&a.mul(&b)));
        }

        // Ring laws

        #[test]
        fn poly_add_identity(a in small_poly()) {
            prop_assert_eq!(a.add(&Polynomial::new()), a.clone());
            prop_assert_eq!(Polynomial::new().add(&a), a);
        }

        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            // a * (b + c) = a * b + a * c
            let left = a.mul(&b.add(&c));
            let right = a.mul(&b).add(&a.mul(&c));
            prop_assert_eq!(left.normalized(), right.normalized());
        }

        #[test]
        fn poly_sub_self_is_zero(a in small_poly()) {
            let diff = a.sub(&a);
            prop_assert!(diff.is_zero());
            prop_assert!(diff.terms().iter().all(|t| t.is_zero()));
            if a.terms().iter().all(|t| !t.is_zero()) {
                prop_assert!(diff.is_empty());
            }
        }

        #[test]
        fn poly_sub_is_add_neg(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.sub(&b).normalized(), a.add(&b.neg()).normalized());
        }

        // Evaluation

        #[test]
        fn poly_eval_mul(a in small_poly(), b in small_poly(), x in -3i32..3) {
            let x = f64::from(x);
            prop_assert_eq!(a.mul(&b).eval(x), a.eval(x) * b.eval(x));
        }

        // Division

        #[test]
        fn div_exact_product(q in nonzero_poly(), b in nonzero_poly()) {
            // Monic divisors keep every quotient coefficient an integer.
            let lead = b.leading_term().unwrap();
            let b = b.add(&Polynomial::monomial(1.0 - lead.coeff, lead.exponent));
            let a = q.mul(&b);

            let (quot, rem) = a.div_rem(&b).unwrap();
            prop_assert_eq!(quot.normalized(), q.normalized());
            prop_assert!(rem.is_zero());
        }

        #[test]
        fn div_rem_reconstructs(a in small_poly(), b in nonzero_poly()) {
            let (q, r) = a.div_rem(&b).unwrap();
            let db = b.degree().unwrap();
            prop_assert!(r.degree().map_or(true, |d| d < db));

            let rebuilt = q.mul(&b).add(&r);
            let diff = rebuilt.sub(&a);
            // Each step drops a residue of at most |lead(b)| * 5e-4 at the
            // exponent it eliminates; float noise grows with the divisor.
            let tol = 1e-2 * b.terms().iter().map(|t| t.coeff.abs()).sum::<f64>().max(1.0)
                * f64::from(a.degree().unwrap_or(0) + 1);
            for t in diff.terms() {
                prop_assert!(t.coeff.abs() <= tol, "x^{} off by {}", t.exponent, t.coeff);
            }
        }

        #[test]
        fn zero_divisor_refused(a in small_poly(), exps in proptest::collection::vec(0u32..8, 0..4)) {
            let zero: Polynomial = exps.into_iter().map(|e| (0.0, e)).collect();
            prop_assert!(a.div(&zero).is_err());
        }
    }
}
