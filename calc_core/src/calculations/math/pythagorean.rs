//! # Pythagorean Theorem
//!
//! Hypotenuse of a right triangle from its legs: c = √(a² + b²).

use serde::{Deserialize, Serialize};

use crate::calculations::Calculator;
use crate::errors::CalcResult;
use crate::form::{FieldSpec, FormValues};
use crate::format::compact;
use crate::report::Report;
use crate::validation::ensure_positive;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PythagoreanInput {
    pub a: f64,
    pub b: f64,
}

impl PythagoreanInput {
    pub fn validate(&self) -> CalcResult<()> {
        ensure_positive("a", self.a)?;
        ensure_positive("b", self.b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PythagoreanResult {
    pub c: f64,
    pub area: f64,
    pub perimeter: f64,
}

pub fn calculate(input: &PythagoreanInput) -> CalcResult<PythagoreanResult> {
    input.validate()?;
    let c = input.a.hypot(input.b);
    Ok(PythagoreanResult {
        c,
        area: input.a * input.b / 2.0,
        perimeter: input.a + input.b + c,
    })
}

pub struct Pythagorean;

impl Calculator for Pythagorean {
    type Input = PythagoreanInput;
    type Output = PythagoreanResult;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::number("a", "Leg a").placeholder("3"),
        FieldSpec::number("b", "Leg b").placeholder("4"),
    ];

    fn parse(form: &FormValues) -> CalcResult<PythagoreanInput> {
        Ok(PythagoreanInput {
            a: form.required_number("a")?,
            b: form.required_number("b")?,
        })
    }

    fn calculate(input: &PythagoreanInput) -> CalcResult<PythagoreanResult> {
        calculate(input)
    }

    fn report(output: &PythagoreanResult) -> Report {
        Report::new("Hypotenuse (c)", compact(output.c, 6))
            .line("Area", compact(output.area, 6))
            .line("Perimeter", compact(output.perimeter, 6))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_four_five() {
        let result = calculate(&PythagoreanInput { a: 3.0, b: 4.0 }).unwrap();
        assert_eq!(result.c, 5.0);
        assert_eq!(result.area, 6.0);
        assert_eq!(result.perimeter, 12.0);
    }

    #[test]
    fn test_zero_leg_rejected() {
        assert!(calculate(&PythagoreanInput { a: 0.0, b: 4.0 }).is_err());
    }
}
