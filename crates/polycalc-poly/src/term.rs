//! Polynomial terms.

/// A single `coefficient * x^exponent` term.
///
/// The coefficient may be zero: zero terms are tolerated in storage and
/// skipped wherever the value of the polynomial matters.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Term {
    /// The real coefficient.
    pub coeff: f64,
    /// The degree of this term.
    pub exponent: u32,
}

impl Term {
    /// Creates the term `coeff * x^exponent`.
    #[must_use]
    pub const fn new(coeff: f64, exponent: u32) -> Self {
        Self { coeff, exponent }
    }

    /// Returns true if the coefficient is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeff == 0.0
    }

    /// Returns the term with its coefficient negated.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self::new(-self.coeff, self.exponent)
    }

    /// Multiplies two terms: coefficients multiply, exponents add.
    ///
    /// # Panics
    ///
    /// Panics if the exponent sum overflows `u32`.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        self.checked_mul(other)
            .unwrap_or_else(|| panic!("exponent overflow: {} + {}", self.exponent, other.exponent))
    }

    /// Multiplies two terms, returning `None` if the exponent sum overflows.
    #[must_use]
    pub fn checked_mul(&self, other: &Self) -> Option<Self> {
        let exponent = self.exponent.checked_add(other.exponent)?;
        Some(Self::new(self.coeff * other.coeff, exponent))
    }
}

impl From<(f64, u32)> for Term {
    fn from((coeff, exponent): (f64, u32)) -> Self {
        Self::new(coeff, exponent)
    }
}
