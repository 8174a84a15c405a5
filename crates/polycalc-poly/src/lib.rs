//! # polycalc-poly
//!
//! Sparse single-variable polynomials with real coefficients.
//!
//! This crate provides:
//! - A sparse term representation keyed by exponent, kept sorted ascending
//! - Addition, subtraction and schoolbook multiplication
//! - Long division with a fixed 3-decimal rounding policy
//! - Rendering in conventional (descending) or ascending term order
//!
//! ## Example
//!
//! ```
//! use polycalc_poly::Polynomial;
//!
//! let a = Polynomial::from_pairs(&[(1.0, 2), (-1.0, 0)]); // x^2 - 1
//! let b = Polynomial::from_pairs(&[(1.0, 1), (-1.0, 0)]); // x - 1
//!
//! let q = a.div(&b).unwrap();
//! assert_eq!(q.to_string(), "x + 1");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod display;
pub mod division;
pub mod error;
pub mod polynomial;
pub mod term;

#[cfg(test)]
mod proptests;

pub use display::{format_general, RenderStyle, Rendered};
pub use division::{round_quotient_coeff, QUOTIENT_DECIMALS};
pub use error::PolyError;
pub use polynomial::Polynomial;
pub use term::Term;
