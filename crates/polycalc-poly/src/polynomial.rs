//! Sparse univariate polynomials.
//!
//! Terms are kept sorted by ascending exponent with at most one term per
//! exponent. Every arithmetic operation builds its result through
//! [`Polynomial::add_term`], so both properties hold after any public call.

use num_traits::{One, Zero};
use smallvec::SmallVec;

use crate::error::PolyError;
use crate::term::Term;

/// Inline capacity of the term list.
const INLINE_TERMS: usize = 8;

/// A sparse polynomial in one variable with `f64` coefficients.
///
/// Zero coefficients may be stored (addition keeps the terms it cancels,
/// see [`Polynomial::add`]); they never count towards the value, the
/// degree, or the rendering of the polynomial.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Polynomial {
    /// Terms in ascending exponent order, one per exponent.
    terms: SmallVec<[Term; INLINE_TERMS]>,
}

impl Polynomial {
    /// Creates the empty polynomial.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the monomial `c * x^n`.
    #[must_use]
    pub fn monomial(c: f64, n: u32) -> Self {
        let mut p = Self::new();
        p.add_term(c, n);
        p
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: f64) -> Self {
        Self::monomial(c, 0)
    }

    /// Builds a polynomial from `(coefficient, exponent)` pairs.
    ///
    /// Pairs sharing an exponent are summed.
    #[must_use]
    pub fn from_pairs(pairs: &[(f64, u32)]) -> Self {
        pairs.iter().copied().collect()
    }

    /// Adds `coeff * x^exponent` to the polynomial.
    ///
    /// If a term with this exponent exists, the coefficient is accumulated
    /// into it and the term is kept even when the sum is zero. Otherwise a
    /// new term is inserted at its sorted position.
    pub fn add_term(&mut self, coeff: f64, exponent: u32) {
        match self.terms.binary_search_by_key(&exponent, |t| t.exponent) {
            Ok(i) => self.terms[i].coeff += coeff,
            Err(i) => self.terms.insert(i, Term::new(coeff, exponent)),
        }
    }

    /// Removes every term.
    pub fn clear(&mut self) {
        self.terms.clear();
    }

    /// Returns the stored terms in ascending exponent order.
    #[must_use]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Returns the number of stored terms, zero terms included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if no term is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns true if every stored coefficient is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.iter().all(Term::is_zero)
    }

    /// Returns the coefficient of `x^exponent`.
    #[must_use]
    pub fn coeff(&self, exponent: u32) -> f64 {
        self.terms
            .binary_search_by_key(&exponent, |t| t.exponent)
            .map_or(0.0, |i| self.terms[i].coeff)
    }

    /// Returns the highest-exponent term with a non-zero coefficient.
    ///
    /// Stored zero terms are skipped, so a cancelled top term never poses
    /// as the leading one.
    #[must_use]
    pub fn leading_term(&self) -> Option<Term> {
        self.terms.iter().rev().find(|t| !t.is_zero()).copied()
    }

    /// Returns the degree, or `None` for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> Option<u32> {
        self.leading_term().map(|t| t.exponent)
    }

    /// Removes the term with the given exponent, returning it.
    pub(crate) fn remove_term(&mut self, exponent: u32) -> Option<Term> {
        self.terms
            .binary_search_by_key(&exponent, |t| t.exponent)
            .ok()
            .map(|i| self.terms.remove(i))
    }

    /// Returns a copy without zero-coefficient terms.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            terms: self.terms.iter().filter(|t| !t.is_zero()).copied().collect(),
        }
    }

    /// Evaluates the polynomial at `x`.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        self.terms
            .iter()
            .map(|t| {
                let power = i32::try_from(t.exponent)
                    .map_or_else(|_| x.powf(f64::from(t.exponent)), |n| x.powi(n));
                t.coeff * power
            })
            .sum()
    }

    /// Adds two polynomials.
    ///
    /// Coefficients that cancel are still inserted, so the result may hold
    /// explicit zero terms.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        self.merge(other, |a, b| Some(a + b), |c| c)
    }

    /// Subtracts `other` from `self`.
    ///
    /// Unlike [`Polynomial::add`], coefficients that cancel to zero are
    /// dropped from the result.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.merge(
            other,
            |a, b| {
                let c = a - b;
                (c != 0.0).then_some(c)
            },
            |c| -c,
        )
    }

    /// Multiplies two polynomials (schoolbook, like degrees combined as
    /// they are produced).
    ///
    /// # Panics
    ///
    /// Panics if an exponent sum overflows `u32`. Use
    /// [`Polynomial::try_mul`] for operands of unbounded degree.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        self.try_mul(other).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Multiplies two polynomials, refusing products whose degree does not
    /// fit in a `u32`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::ExponentOverflow`] for the first pair of terms
    /// whose exponents sum past `u32::MAX`.
    pub fn try_mul(&self, other: &Self) -> Result<Self, PolyError> {
        let mut result = Self::new();
        for t1 in &self.terms {
            for t2 in &other.terms {
                let t = t1.checked_mul(t2).ok_or(PolyError::ExponentOverflow {
                    lhs: t1.exponent,
                    rhs: t2.exponent,
                })?;
                result.add_term(t.coeff, t.exponent);
            }
        }
        Ok(result)
    }

    /// Negates every coefficient.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            terms: self.terms.iter().map(Term::neg).collect(),
        }
    }

    /// Multiplies every coefficient by `c`.
    #[must_use]
    pub fn scale(&self, c: f64) -> Self {
        Self {
            terms: self
                .terms
                .iter()
                .map(|t| Term::new(t.coeff * c, t.exponent))
                .collect(),
        }
    }

    /// Merges two term lists from the highest exponent down.
    ///
    /// `both` combines coefficients sharing an exponent and may drop the
    /// result; `rhs_only` maps a coefficient found only in `other`.
    fn merge<B, R>(&self, other: &Self, both: B, rhs_only: R) -> Self
    where
        B: Fn(f64, f64) -> Option<f64>,
        R: Fn(f64) -> f64,
    {
        let mut result = Self::new();
        let mut lhs = self.terms.iter().rev().peekable();
        let mut rhs = other.terms.iter().rev().peekable();

        loop {
            match (lhs.peek().copied(), rhs.peek().copied()) {
                (Some(a), Some(b)) if a.exponent == b.exponent => {
                    if let Some(c) = both(a.coeff, b.coeff) {
                        result.add_term(c, a.exponent);
                    }
                    lhs.next();
                    rhs.next();
                }
                (Some(a), Some(b)) if a.exponent > b.exponent => {
                    result.add_term(a.coeff, a.exponent);
                    lhs.next();
                }
                (_, Some(b)) => {
                    result.add_term(rhs_only(b.coeff), b.exponent);
                    rhs.next();
                }
                (Some(a), None) => {
                    result.add_term(a.coeff, a.exponent);
                    lhs.next();
                }
                (None, None) => break,
            }
        }

        result
    }
}

impl FromIterator<(f64, u32)> for Polynomial {
    fn from_iter<I: IntoIterator<Item = (f64, u32)>>(iter: I) -> Self {
        let mut p = Self::new();
        p.extend(iter);
        p
    }
}

impl FromIterator<Term> for Polynomial {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        iter.into_iter().map(|t| (t.coeff, t.exponent)).collect()
    }
}

impl Extend<(f64, u32)> for Polynomial {
    fn extend<I: IntoIterator<Item = (f64, u32)>>(&mut self, iter: I) {
        for (c, e) in iter {
            self.add_term(c, e);
        }
    }
}

impl std::ops::Add for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &Polynomial) -> Polynomial {
        Polynomial::add(self, rhs)
    }
}

impl std::ops::Add for Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Polynomial) -> Polynomial {
        Polynomial::add(&self, &rhs)
    }
}

impl std::ops::Sub for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: &Polynomial) -> Polynomial {
        Polynomial::sub(self, rhs)
    }
}

impl std::ops::Sub for Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: Polynomial) -> Polynomial {
        Polynomial::sub(&self, &rhs)
    }
}

impl std::ops::Mul for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: &Polynomial) -> Polynomial {
        Polynomial::mul(self, rhs)
    }
}

impl std::ops::Mul for Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Polynomial) -> Polynomial {
        Polynomial::mul(&self, &rhs)
    }
}

impl std::ops::Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        Polynomial::neg(self)
    }
}

impl std::ops::Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        Polynomial::neg(&self)
    }
}

impl Zero for Polynomial {
    fn zero() -> Self {
        Self::new()
    }

    fn is_zero(&self) -> bool {
        Polynomial::is_zero(self)
    }
}

impl One for Polynomial {
    fn one() -> Self {
        Self::constant(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exponents(p: &Polynomial) -> Vec<u32> {
        p.terms().iter().map(|t| t.exponent).collect()
    }

    #[test]
    fn test_add_term_sorts_and_combines() {
        let mut p = Polynomial::new();
        p.add_term(1.0, 3);
        p.add_term(2.0, 0);
        p.add_term(4.0, 1);
        p.add_term(5.0, 3);

        assert_eq!(exponents(&p), vec![0, 1, 3]);
        assert_eq!(p.coeff(3), 6.0);
        assert_eq!(p.coeff(2), 0.0);
    }

    #[test]
    fn test_add_term_keeps_cancelled_term() {
        let mut p = Polynomial::monomial(2.0, 4);
        p.add_term(-2.0, 4);

        assert_eq!(p.len(), 1);
        assert!(p.is_zero());
        assert_eq!(p.degree(), None);
    }

    #[test]
    fn test_add() {
        // (3x^2 + 2x + 1) + (x + 1) = 3x^2 + 3x + 2
        let a = Polynomial::from_pairs(&[(3.0, 2), (2.0, 1), (1.0, 0)]);
        let b = Polynomial::from_pairs(&[(1.0, 1), (1.0, 0)]);

        let sum = a.add(&b);
        assert_eq!(sum, Polynomial::from_pairs(&[(2.0, 0), (3.0, 1), (3.0, 2)]));
    }

    #[test]
    fn test_add_keeps_zero_terms() {
        let a = Polynomial::from_pairs(&[(1.0, 2), (1.0, 0)]);
        let b = Polynomial::from_pairs(&[(-1.0, 2)]);

        let sum = a.add(&b);
        assert_eq!(exponents(&sum), vec![0, 2]);
        assert_eq!(sum.coeff(2), 0.0);
        assert_eq!(sum.degree(), Some(0));
        assert_eq!(sum.normalized(), Polynomial::constant(1.0));
    }

    #[test]
    fn test_sub_drops_zero_terms() {
        let a = Polynomial::from_pairs(&[(1.0, 2), (1.0, 0)]);
        let b = Polynomial::from_pairs(&[(1.0, 2), (3.0, 1)]);

        let diff = a.sub(&b);
        assert_eq!(diff, Polynomial::from_pairs(&[(1.0, 0), (-3.0, 1)]));

        let self_diff = a.sub(&a);
        assert!(self_diff.is_empty());
    }

    #[test]
    fn test_sub_self_renders_zero() {
        let sq = Polynomial::monomial(1.0, 2);
        assert_eq!(sq.sub(&sq).to_string(), "0");
    }

    #[test]
    fn test_mul() {
        // (x + 1)(x - 1) = x^2 - 1, with the x terms cancelling in place
        let a = Polynomial::from_pairs(&[(1.0, 1), (1.0, 0)]);
        let b = Polynomial::from_pairs(&[(1.0, 1), (-1.0, 0)]);

        let prod = a.mul(&b);
        assert_eq!(prod.coeff(2), 1.0);
        assert_eq!(prod.coeff(1), 0.0);
        assert_eq!(prod.coeff(0), -1.0);
        assert_eq!(prod.degree(), Some(2));
        assert_eq!(prod.to_string(), "x^2 - 1");
    }

    #[test]
    fn test_try_mul_exponent_overflow() {
        let big = Polynomial::monomial(1.0, u32::MAX);
        let x = Polynomial::monomial(1.0, 1);

        assert_eq!(
            big.try_mul(&x),
            Err(PolyError::ExponentOverflow { lhs: u32::MAX, rhs: 1 })
        );
        assert_eq!(
            big.try_mul(&Polynomial::constant(2.0)),
            Ok(Polynomial::monomial(2.0, u32::MAX))
        );
        assert_eq!(x.try_mul(&x), Ok(x.mul(&x)));
    }

    #[test]
    fn test_mul_by_empty() {
        let a = Polynomial::from_pairs(&[(2.0, 3)]);
        assert!(a.mul(&Polynomial::new()).is_empty());
    }

    #[test]
    fn test_leading_term_skips_zeros() {
        let p = Polynomial::from_pairs(&[(5.0, 1), (0.0, 7)]);
        assert_eq!(p.leading_term(), Some(Term::new(5.0, 1)));
    }

    #[test]
    fn test_eval() {
        // p(x) = 1 + 2x + 3x^2
        let p = Polynomial::from_pairs(&[(1.0, 0), (2.0, 1), (3.0, 2)]);

        // p(2) = 1 + 4 + 12 = 17
        assert_eq!(p.eval(2.0), 17.0);
    }

    #[test]
    fn test_operator_traits() {
        let x = Polynomial::monomial(1.0, 1);
        let one = Polynomial::one();

        let sq = (&x + &one) * (&x + &one);
        assert_eq!(sq, Polynomial::from_pairs(&[(1.0, 0), (2.0, 1), (1.0, 2)]));
        assert!(Zero::is_zero(&(&sq - &sq)));
        assert_eq!(-&one, Polynomial::constant(-1.0));
    }

    #[test]
    fn test_scale_and_neg() {
        let p = Polynomial::from_pairs(&[(1.5, 0), (-2.0, 3)]);

        assert_eq!(p.scale(2.0), Polynomial::from_pairs(&[(3.0, 0), (-4.0, 3)]));
        assert_eq!(p.neg(), Polynomial::from_pairs(&[(-1.5, 0), (2.0, 3)]));
    }

    #[test]
    fn test_clear() {
        let mut p = Polynomial::from_pairs(&[(1.0, 0), (2.0, 1)]);
        p.clear();
        assert!(p.is_empty());
        assert!(p.is_zero());
    }
}
