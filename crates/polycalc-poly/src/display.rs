//! Textual rendering of polynomials.
//!
//! Zero terms are skipped, unit magnitudes are elided on non-constant
//! terms, and coefficients are printed in the shortest `%g`-style form
//! with six significant digits.

use std::fmt;

use crate::polynomial::Polynomial;
use crate::term::Term;

/// Significant digits used when printing a coefficient.
const SIGNIFICANT_DIGITS: usize = 6;

/// Term order and sign layout used when rendering.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum RenderStyle {
    /// Highest exponent first; a negative first term gets a bare `-`.
    ///
    /// `x^2 - 1`, `-x + 1`.
    #[default]
    Conventional,

    /// Lowest exponent first; every negative term, the first included, is
    /// introduced by `" - "`.
    ///
    /// ` - 1 + x^2`, `1 - x`.
    Ascending,
}

impl RenderStyle {
    /// Returns a short name for the style.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            RenderStyle::Conventional => "conventional",
            RenderStyle::Ascending => "ascending",
        }
    }
}

impl fmt::Display for RenderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A polynomial paired with the variable name and style to print it with.
///
/// Created by [`Polynomial::render`].
#[derive(Clone, Copy, Debug)]
pub struct Rendered<'a> {
    poly: &'a Polynomial,
    variable: char,
    style: RenderStyle,
}

impl Polynomial {
    /// Returns a displayable view of the polynomial in `variable`.
    #[must_use]
    pub fn render(&self, variable: char, style: RenderStyle) -> Rendered<'_> {
        Rendered {
            poly: self,
            variable,
            style,
        }
    }
}

impl Rendered<'_> {
    fn write_term(&self, f: &mut fmt::Formatter<'_>, term: &Term, first: bool) -> fmt::Result {
        let negative = term.coeff < 0.0;
        match self.style {
            RenderStyle::Conventional => {
                if first {
                    if negative {
                        f.write_str("-")?;
                    }
                } else if negative {
                    f.write_str(" - ")?;
                } else {
                    f.write_str(" + ")?;
                }
            }
            RenderStyle::Ascending => {
                if !first && term.coeff > 0.0 {
                    f.write_str(" + ")?;
                }
                if negative {
                    f.write_str(" - ")?;
                }
            }
        }

        let magnitude = term.coeff.abs();
        if magnitude != 1.0 || term.exponent == 0 {
            f.write_str(&format_general(magnitude))?;
        }

        match term.exponent {
            0 => Ok(()),
            1 => write!(f, "{}", self.variable),
            n => write!(f, "{}^{n}", self.variable),
        }
    }
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nonzero = self.poly.terms().iter().filter(|t| !t.is_zero());
        let ordered: Box<dyn Iterator<Item = &Term>> = match self.style {
            RenderStyle::Conventional => Box::new(nonzero.rev()),
            RenderStyle::Ascending => Box::new(nonzero),
        };

        let mut first = true;
        for term in ordered {
            self.write_term(f, term, first)?;
            first = false;
        }

        if first {
            f.write_str("0")?;
        }
        Ok(())
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render('x', RenderStyle::Conventional).fmt(f)
    }
}

/// Formats a number like C's `%g`: six significant digits, trailing zeros
/// removed, and exponent notation (`1.5e+07`) when the decimal exponent is
/// below -4 or at least six.
#[must_use]
pub fn format_general(value: f64) -> String {
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }

    // The decimal exponent is taken after rounding to the kept digits.
    let sci = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return sci;
    };

    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    let digits = SIGNIFICANT_DIGITS as i32;
    if exp < -4 || exp >= digits {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", strip_fraction_zeros(mantissa), exp.unsigned_abs())
    } else {
        #[allow(clippy::cast_sign_loss)]
        let decimals = (digits - 1 - exp) as usize;
        strip_fraction_zeros(&format!("{value:.decimals$}")).to_string()
    }
}

/// Removes trailing zeros after a decimal point, and the point itself if
/// nothing follows it.
fn strip_fraction_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
