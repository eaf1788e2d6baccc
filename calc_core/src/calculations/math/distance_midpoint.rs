//! # Distance, Midpoint & Slope
//!
//! For points (x₁, y₁) and (x₂, y₂):
//!
//! ```text
//! d = √((x₂ − x₁)² + (y₂ − y₁)²)
//! M = ((x₁ + x₂)/2, (y₁ + y₂)/2)
//! m = (y₂ − y₁) / (x₂ − x₁)
//! ```
//!
//! A vertical line has no slope; that is reported, not treated as an error.

use serde::{Deserialize, Serialize};

use crate::calculations::Calculator;
use crate::errors::CalcResult;
use crate::form::{FieldSpec, FormValues};
use crate::format::compact;
use crate::report::Report;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TwoPointsInput {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl TwoPointsInput {
    pub fn validate(&self) -> CalcResult<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TwoPointsResult {
    pub distance: f64,
    pub midpoint_x: f64,
    pub midpoint_y: f64,
    /// `None` for a vertical line
    pub slope: Option<f64>,
    /// y-intercept of the line through both points, when not vertical
    pub intercept: Option<f64>,
}

pub fn calculate(input: &TwoPointsInput) -> CalcResult<TwoPointsResult> {
    input.validate()?;
    let dx = input.x2 - input.x1;
    let dy = input.y2 - input.y1;
    let slope = (dx != 0.0).then(|| dy / dx);
    Ok(TwoPointsResult {
        distance: dx.hypot(dy),
        midpoint_x: (input.x1 + input.x2) / 2.0,
        midpoint_y: (input.y1 + input.y2) / 2.0,
        slope,
        intercept: slope.map(|m| input.y1 - m * input.x1),
    })
}

pub struct DistanceMidpointSlope;

impl Calculator for DistanceMidpointSlope {
    type Input = TwoPointsInput;
    type Output = TwoPointsResult;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::number("x1", "x₁").placeholder("1"),
        FieldSpec::number("y1", "y₁").placeholder("2"),
        FieldSpec::number("x2", "x₂").placeholder("4"),
        FieldSpec::number("y2", "y₂").placeholder("6"),
    ];

    fn parse(form: &FormValues) -> CalcResult<TwoPointsInput> {
        Ok(TwoPointsInput {
            x1: form.required_number("x1")?,
            y1: form.required_number("y1")?,
            x2: form.required_number("x2")?,
            y2: form.required_number("y2")?,
        })
    }

    fn calculate(input: &TwoPointsInput) -> CalcResult<TwoPointsResult> {
        calculate(input)
    }

    fn report(output: &TwoPointsResult) -> Report {
        let report = Report::new("Distance", compact(output.distance, 6)).line(
            "Midpoint",
            format!("({}, {})", compact(output.midpoint_x, 6), compact(output.midpoint_y, 6)),
        );
        match (output.slope, output.intercept) {
            (Some(m), Some(b)) => report
                .line("Slope", compact(m, 6))
                .line("Line", format!("y = {}x + {}", compact(m, 6), compact(b, 6))),
            _ => report
                .line("Slope", "undefined")
                .note("The points lie on a vertical line, so the slope is undefined."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_four_five() {
        let result = calculate(&TwoPointsInput { x1: 1.0, y1: 2.0, x2: 4.0, y2: 6.0 }).unwrap();
        assert_eq!(result.distance, 5.0);
        assert_eq!((result.midpoint_x, result.midpoint_y), (2.5, 4.0));
        assert!((result.slope.unwrap() - 4.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_vertical_line_has_no_slope() {
        let result = calculate(&TwoPointsInput { x1: 2.0, y1: 0.0, x2: 2.0, y2: 5.0 }).unwrap();
        assert_eq!(result.slope, None);
        let report = DistanceMidpointSlope::report(&result);
        assert!(report.lines.iter().any(|l| l.value == "undefined"));
    }

    #[test]
    fn test_same_point() {
        let result = calculate(&TwoPointsInput { x1: 1.0, y1: 1.0, x2: 1.0, y2: 1.0 }).unwrap();
        assert_eq!(result.distance, 0.0);
    }
}
