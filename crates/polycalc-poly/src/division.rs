//! Polynomial long division.
//!
//! Quotient coefficients are rounded to [`QUOTIENT_DECIMALS`] decimal places
//! as they are produced, rounding half away from zero. The remainder is
//! whatever is left once its degree drops below the divisor's.

use tracing::{debug, trace};

use crate::error::PolyError;
use crate::polynomial::Polynomial;

/// Number of decimal places kept in every quotient coefficient.
pub const QUOTIENT_DECIMALS: i32 = 3;

/// Rounds a quotient coefficient to [`QUOTIENT_DECIMALS`] places.
///
/// Ties round away from zero: `0.0625` becomes `0.063` and `-0.0625`
/// becomes `-0.063`.
#[must_use]
pub fn round_quotient_coeff(value: f64) -> f64 {
    let scale = 10f64.powi(QUOTIENT_DECIMALS);
    (value * scale).round() / scale
}

impl Polynomial {
    /// Divides `self` by `divisor`, returning the quotient.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DivisionByZero`] if `divisor` has no non-zero
    /// term.
    pub fn div(&self, divisor: &Self) -> Result<Self, PolyError> {
        self.div_rem(divisor).map(|(q, _)| q)
    }

    /// Divides `self` by `divisor`, returning `(quotient, remainder)`.
    ///
    /// Each step divides the remainder's leading term by the divisor's,
    /// rounds the coefficient, adds the resulting monomial to the quotient
    /// and subtracts its product with the divisor from the remainder. The
    /// step's leading exponent is then cleared from the remainder, dropping
    /// the rounding residue, so the remainder's degree strictly decreases.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DivisionByZero`] if `divisor` has no non-zero
    /// term.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), PolyError> {
        let Some(lead) = divisor.leading_term() else {
            return Err(PolyError::DivisionByZero);
        };
        // Stored zero terms above the lead would push step products past
        // the remainder's degree.
        let divisor = divisor.normalized();

        let mut quotient = Self::new();
        let mut remainder = self.clone();

        while let Some(r) = remainder.leading_term() {
            if r.exponent < lead.exponent {
                break;
            }

            let coeff = round_quotient_coeff(r.coeff / lead.coeff);
            let exponent = r.exponent - lead.exponent;
            debug!(coeff, exponent, remainder_degree = r.exponent, "division step");

            let step = Self::monomial(coeff, exponent);
            quotient = quotient.add(&step);
            remainder = remainder.sub(&step.mul(&divisor));

            if let Some(residue) = remainder.remove_term(r.exponent) {
                if !residue.is_zero() {
                    trace!(residue = residue.coeff, exponent = r.exponent, "dropped rounding residue");
                }
            }
        }

        Ok((quotient, remainder))
    }
}
