//! The menu loop.
//!
//! A session holds two operand polynomials and repeatedly offers the menu
//! until the user exits or the input runs out.

use std::io::Write;

use anyhow::Result;
use polycalc_poly::{PolyError, Polynomial, RenderStyle};
use tracing::{debug, info, warn};

use crate::input::{parse_coefficient, parse_count, parse_exponent, InputError, LineSource};

const MENU: &str = "\
Menu:
1. Enter Polynomial 1
2. Enter Polynomial 2
3. Add Polynomials
4. Subtract Polynomials
5. Multiply Polynomials
6. Divide Polynomials
7. Display Polynomials
8. Exit";

/// A menu entry.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MenuChoice {
    /// Read the first operand.
    EnterFirst,
    /// Read the second operand.
    EnterSecond,
    /// Print the sum.
    Add,
    /// Print the difference.
    Subtract,
    /// Print the product.
    Multiply,
    /// Print the quotient.
    Divide,
    /// Print both operands.
    Display,
    /// Leave the session.
    Exit,
}

impl MenuChoice {
    /// Parses a menu selection (`1` to `8`).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "1" => Some(Self::EnterFirst),
            "2" => Some(Self::EnterSecond),
            "3" => Some(Self::Add),
            "4" => Some(Self::Subtract),
            "5" => Some(Self::Multiply),
            "6" => Some(Self::Divide),
            "7" => Some(Self::Display),
            "8" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// How results are printed.
#[derive(Clone, Copy, Debug)]
pub struct SessionOptions {
    /// Name of the polynomial variable.
    pub variable: char,
    /// Term order and sign layout.
    pub style: RenderStyle,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            variable: 'x',
            style: RenderStyle::Conventional,
        }
    }
}

/// An interactive calculator session.
pub struct Session<S, W> {
    source: S,
    out: W,
    options: SessionOptions,
    first: Polynomial,
    second: Polynomial,
}

impl<S: LineSource, W: Write> Session<S, W> {
    /// Creates a session with both operands empty.
    pub fn new(source: S, out: W, options: SessionOptions) -> Self {
        Self {
            source,
            out,
            options,
            first: Polynomial::new(),
            second: Polynomial::new(),
        }
    }

    /// Returns the first operand.
    #[cfg(test)]
    pub fn first(&self) -> &Polynomial {
        &self.first
    }

    /// Returns the second operand.
    #[cfg(test)]
    pub fn second(&self) -> &Polynomial {
        &self.second
    }

    /// Runs the menu loop until `8` is chosen or the input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.out, "{MENU}")?;
            self.out.flush()?;

            let Some(line) = self.source.read_line("Enter your choice: ")? else {
                debug!("input exhausted at menu");
                return Ok(());
            };

            let Some(choice) = MenuChoice::parse(&line) else {
                writeln!(self.out, "Invalid choice. Please try again.")?;
                continue;
            };
            info!(?choice, "menu selection");

            if choice == MenuChoice::Exit {
                writeln!(self.out, "Exiting program.")?;
                return Ok(());
            }
            if !self.apply(choice)? {
                debug!("input exhausted during polynomial entry");
                return Ok(());
            }
        }
    }

    /// Performs one menu action. Returns `false` if the input ran out.
    fn apply(&mut self, choice: MenuChoice) -> Result<bool> {
        match choice {
            MenuChoice::EnterFirst => {
                self.first.clear();
                match self.read_polynomial()? {
                    Some(p) => self.first = p,
                    None => return Ok(false),
                }
            }
            MenuChoice::EnterSecond => {
                self.second.clear();
                match self.read_polynomial()? {
                    Some(p) => self.second = p,
                    None => return Ok(false),
                }
            }
            MenuChoice::Add => {
                let result = self.first.add(&self.second);
                self.print_result("Addition Result: ", &result)?;
            }
            MenuChoice::Subtract => {
                let result = self.first.sub(&self.second);
                self.print_result("Subtraction Result: ", &result)?;
            }
            MenuChoice::Multiply => match self.first.try_mul(&self.second) {
                Ok(result) => self.print_result("Multiplication Result: ", &result)?,
                Err(err) => self.print_error(err)?,
            },
            MenuChoice::Divide => match self.first.div(&self.second) {
                Ok(result) => self.print_result("Division Result: ", &result)?,
                Err(PolyError::DivisionByZero) => writeln!(
                    self.out,
                    "Division by zero error. Please enter a non-zero divisor polynomial."
                )?,
                Err(err) => self.print_error(err)?,
            },
            MenuChoice::Display => {
                let SessionOptions { variable, style } = self.options;
                writeln!(self.out, "Polynomial 1: {}", self.first.render(variable, style))?;
                writeln!(self.out, "Polynomial 2: {}", self.second.render(variable, style))?;
            }
            MenuChoice::Exit => {}
        }
        Ok(true)
    }

    fn print_result(&mut self, label: &str, poly: &Polynomial) -> Result<()> {
        let SessionOptions { variable, style } = self.options;
        writeln!(self.out, "{label}{}", poly.render(variable, style))?;
        Ok(())
    }

    fn print_error(&mut self, err: PolyError) -> Result<()> {
        warn!(%err, "operation refused");
        writeln!(self.out, "Error: {err}.")?;
        Ok(())
    }

    /// Reads a term count and that many (coefficient, exponent) pairs.
    fn read_polynomial(&mut self) -> Result<Option<Polynomial>> {
        let Some(count) = self.prompt("Enter the number of terms in the polynomial: ", parse_count)?
        else {
            return Ok(None);
        };

        let mut poly = Polynomial::new();
        for i in 1..=count {
            let prompt = format!("Enter coefficient for term {i}: ");
            let Some(coeff) = self.prompt(&prompt, parse_coefficient)? else {
                return Ok(None);
            };

            let prompt = format!("Enter exponent for term {i}: ");
            let Some(exponent) = self.prompt(&prompt, parse_exponent)? else {
                return Ok(None);
            };

            poly.add_term(coeff, exponent);
        }

        debug!(terms = poly.len(), "polynomial entered");
        Ok(Some(poly))
    }

    /// Prompts until `parse` accepts the line.
    fn prompt<T>(
        &mut self,
        prompt: &str,
        parse: fn(&str) -> Result<T, InputError>,
    ) -> Result<Option<T>> {
        loop {
            let Some(line) = self.source.read_line(prompt)? else {
                return Ok(None);
            };
            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => {
                    debug!(%err, "rejected input");
                    writeln!(self.out, "Invalid input: {err}. Please try again.")?;
                }
            }
        }
    }
}
