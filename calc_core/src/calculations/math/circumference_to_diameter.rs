//! # Circumference to Diameter
//!
//! ```text
//! D = C / π
//! r = D / 2
//! A = π r²
//! ```
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::math::circumference_to_diameter::{calculate, CircumferenceInput};
//!
//! let result = calculate(&CircumferenceInput { circumference: 31.4159 }).unwrap();
//! assert_eq!(format!("{:.4}", result.diameter), "10.0000");
//! ```

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::calculations::Calculator;
use crate::errors::CalcResult;
use crate::form::{FieldSpec, FormValues};
use crate::format::fixed;
use crate::report::Report;
use crate::validation::ensure_positive;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircumferenceInput {
    pub circumference: f64,
}

impl CircumferenceInput {
    pub fn validate(&self) -> CalcResult<()> {
        ensure_positive("circumference", self.circumference)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleResult {
    pub diameter: f64,
    pub radius: f64,
    pub area: f64,
}

pub fn calculate(input: &CircumferenceInput) -> CalcResult<CircleResult> {
    input.validate()?;
    let diameter = input.circumference / PI;
    let radius = diameter / 2.0;
    Ok(CircleResult {
        diameter,
        radius,
        area: PI * radius * radius,
    })
}

pub struct CircumferenceToDiameter;

impl Calculator for CircumferenceToDiameter {
    type Input = CircumferenceInput;
    type Output = CircleResult;

    const FIELDS: &'static [FieldSpec] = &[FieldSpec::number("circumference", "Circumference").placeholder("31.4159")];

    fn parse(form: &FormValues) -> CalcResult<CircumferenceInput> {
        Ok(CircumferenceInput {
            circumference: form.required_number("circumference")?,
        })
    }

    fn calculate(input: &CircumferenceInput) -> CalcResult<CircleResult> {
        calculate(input)
    }

    fn report(output: &CircleResult) -> Report {
        Report::new("Diameter (D)", fixed(output.diameter, 4))
            .line("Radius (r)", fixed(output.radius, 4))
            .line("Area (A)", fixed(output.area, 4))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_example() {
        let result = calculate(&CircumferenceInput { circumference: 31.4159 }).unwrap();
        let report = CircumferenceToDiameter::report(&result);
        assert_eq!(report.headline.value, "10.0000");
        assert_eq!(report.lines[0].value, "5.0000");
    }

    #[test]
    fn test_zero_rejected() {
        assert!(calculate(&CircumferenceInput { circumference: 0.0 }).is_err());
    }
}
