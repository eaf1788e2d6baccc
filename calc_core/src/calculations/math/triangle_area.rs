//! # Triangle Area (Heron's Formula)
//!
//! ```text
//! s = (a + b + c) / 2
//! A = √(s(s − a)(s − b)(s − c))
//! ```
//!
//! The sides must satisfy the strict triangle inequality.

use serde::{Deserialize, Serialize};

use crate::calculations::Calculator;
use crate::errors::{CalcError, CalcResult};
use crate::form::{FieldSpec, FormValues};
use crate::format::compact;
use crate::report::Report;
use crate::validation::ensure_positive;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriangleInput {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl TriangleInput {
    pub fn validate(&self) -> CalcResult<()> {
        ensure_positive("a", self.a)?;
        ensure_positive("b", self.b)?;
        ensure_positive("c", self.c)?;
        let longest = self.a.max(self.b).max(self.c);
        if longest >= self.a + self.b + self.c - longest {
            return Err(CalcError::domain(
                "triangle area",
                "the longest side must be shorter than the other two combined",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriangleResult {
    pub area: f64,
    pub perimeter: f64,
    pub semi_perimeter: f64,
}

pub fn calculate(input: &TriangleInput) -> CalcResult<TriangleResult> {
    input.validate()?;
    let TriangleInput { a, b, c } = *input;
    let s = (a + b + c) / 2.0;
    let area = (s * (s - a) * (s - b) * (s - c)).max(0.0).sqrt();
    Ok(TriangleResult {
        area,
        perimeter: 2.0 * s,
        semi_perimeter: s,
    })
}

pub struct TriangleArea;

impl Calculator for TriangleArea {
    type Input = TriangleInput;
    type Output = TriangleResult;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::number("a", "Side a").placeholder("5"),
        FieldSpec::number("b", "Side b").placeholder("6"),
        FieldSpec::number("c", "Side c").placeholder("7"),
    ];

    fn parse(form: &FormValues) -> CalcResult<TriangleInput> {
        Ok(TriangleInput {
            a: form.required_number("a")?,
            b: form.required_number("b")?,
            c: form.required_number("c")?,
        })
    }

    fn calculate(input: &TriangleInput) -> CalcResult<TriangleResult> {
        calculate(input)
    }

    fn report(output: &TriangleResult) -> Report {
        Report::new("Area", compact(output.area, 6))
            .line("Perimeter", compact(output.perimeter, 6))
            .line("Semi-perimeter (s)", compact(output.semi_perimeter, 6))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_right_triangle() {
        let result = calculate(&TriangleInput { a: 3.0, b: 4.0, c: 5.0 }).unwrap();
        assert_eq!(result.area, 6.0);
        assert_eq!(result.perimeter, 12.0);
    }

    #[test]
    fn test_scalene() {
        let result = calculate(&TriangleInput { a: 5.0, b: 6.0, c: 7.0 }).unwrap();
        assert!((result.area - 6.0 * 6f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_rejected() {
        let err = calculate(&TriangleInput { a: 1.0, b: 2.0, c: 3.0 }).unwrap_err();
        assert_eq!(err.error_code(), "DOMAIN_ERROR");
        assert!(calculate(&TriangleInput { a: 1.0, b: 1.0, c: 10.0 }).is_err());
    }
}
