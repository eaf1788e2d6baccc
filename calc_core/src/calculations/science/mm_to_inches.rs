//! # Millimeters to Inches
//!
//! inches = mm / 25.4 (exact by definition of the inch).
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::science::mm_to_inches::{calculate, MmInput};
//!
//! let result = calculate(&MmInput { millimeters: 25.4 }).unwrap();
//! assert_eq!(result.inches, 1.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::Calculator;
use crate::errors::CalcResult;
use crate::form::{FieldSpec, FormValues};
use crate::format::{compact, fixed};
use crate::report::Report;
use crate::units::{Centimeters, Feet, Inches, Millimeters};
use crate::validation::ensure_non_negative;

/// Fractions of an inch used for the nearest-fraction line
const FRACTION_DENOMINATOR: f64 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MmInput {
    pub millimeters: f64,
}

impl MmInput {
    pub fn validate(&self) -> CalcResult<()> {
        ensure_non_negative("millimeters", self.millimeters)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MmResult {
    pub inches: f64,
    pub centimeters: f64,
    pub feet: f64,
}

pub fn calculate(input: &MmInput) -> CalcResult<MmResult> {
    input.validate()?;
    let mm = Millimeters(input.millimeters);
    let inches: Inches = mm.into();
    let feet: Feet = inches.into();
    let centimeters: Centimeters = inches.into();
    Ok(MmResult {
        inches: inches.value(),
        centimeters: centimeters.value(),
        feet: feet.value(),
    })
}

/// Nearest sixteenth of an inch, e.g. `1 3/8"`
fn nearest_fraction(inches: f64) -> String {
    let sixteenths = (inches * FRACTION_DENOMINATOR).round() as u64;
    let whole = sixteenths / 16;
    let mut numerator = sixteenths % 16;
    let mut denominator = 16;
    while numerator != 0 && numerator % 2 == 0 {
        numerator /= 2;
        denominator /= 2;
    }
    match (whole, numerator) {
        (w, 0) => format!("{}\"", w),
        (0, n) => format!("{}/{}\"", n, denominator),
        (w, n) => format!("{} {}/{}\"", w, n, denominator),
    }
}

pub struct MmToInches;

impl Calculator for MmToInches {
    type Input = MmInput;
    type Output = MmResult;

    const FIELDS: &'static [FieldSpec] = &[FieldSpec::number("millimeters", "Millimeters").unit("mm").placeholder("25.4")];

    fn parse(form: &FormValues) -> CalcResult<MmInput> {
        Ok(MmInput {
            millimeters: form.required_number("millimeters")?,
        })
    }

    fn calculate(input: &MmInput) -> CalcResult<MmResult> {
        calculate(input)
    }

    fn report(output: &MmResult) -> Report {
        Report::new("Inches", fixed(output.inches, 4))
            .line("Nearest 1/16 inch", nearest_fraction(output.inches))
            .line("Centimeters", compact(output.centimeters, 4))
            .line("Feet", compact(output.feet, 4))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_inch() {
        let result = calculate(&MmInput { millimeters: 25.4 }).unwrap();
        assert_eq!(result.inches, 1.0);
        assert_eq!(MmToInches::report(&result).headline.value, "1.0000");
    }

    #[test]
    fn test_one_foot() {
        let result = calculate(&MmInput { millimeters: 304.8 }).unwrap();
        assert!((result.feet - 1.0).abs() < 1e-12);
        assert!((result.centimeters - 30.48).abs() < 1e-12);
    }

    #[test]
    fn test_fractions() {
        assert_eq!(nearest_fraction(1.375), "1 3/8\"");
        assert_eq!(nearest_fraction(0.5), "1/2\"");
        assert_eq!(nearest_fraction(2.0), "2\"");
        assert_eq!(nearest_fraction(0.0), "0\"");
    }

    #[test]
    fn test_negative_rejected() {
        assert!(calculate(&MmInput { millimeters: -1.0 }).is_err());
    }
}
