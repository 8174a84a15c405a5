//! Errors raised by polynomial operations.

use thiserror::Error;

/// Errors that can occur during polynomial arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    /// The divisor has no non-zero term.
    #[error("division by the zero polynomial")]
    DivisionByZero,

    /// A product term's exponent does not fit in a `u32`.
    #[error("exponent overflow: x^{lhs} * x^{rhs} has no representable degree")]
    ExponentOverflow {
        /// Exponent of the left factor.
        lhs: u32,
        /// Exponent of the right factor.
        rhs: u32,
    },
}
