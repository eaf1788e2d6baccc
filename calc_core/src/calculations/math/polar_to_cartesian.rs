//! # Polar to Cartesian Conversion
//!
//! ```text
//! x = r·cos θ
//! y = r·sin θ
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::Calculator;
use crate::errors::CalcResult;
use crate::form::{FieldSpec, FormValues};
use crate::format::fixed;
use crate::report::Report;
use crate::units::{Degrees, Radians};
use crate::validation::ensure_non_negative;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarInput {
    /// Radius, must be non-negative
    pub r: f64,
    /// Angle in degrees
    pub theta_deg: f64,
}

impl PolarInput {
    pub fn validate(&self) -> CalcResult<()> {
        ensure_non_negative("r", self.r)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CartesianResult {
    pub x: f64,
    pub y: f64,
}

pub fn calculate(input: &PolarInput) -> CalcResult<CartesianResult> {
    input.validate()?;
    let theta: Radians = Degrees(input.theta_deg).into();
    Ok(CartesianResult {
        x: input.r * theta.value().cos(),
        y: input.r * theta.value().sin(),
    })
}

pub struct PolarToCartesian;

impl Calculator for PolarToCartesian {
    type Input = PolarInput;
    type Output = CartesianResult;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::number("r", "Radius").placeholder("5"),
        FieldSpec::number("theta", "Angle").unit("°").placeholder("53.13"),
    ];

    fn parse(form: &FormValues) -> CalcResult<PolarInput> {
        Ok(PolarInput {
            r: form.required_number("r")?,
            theta_deg: form.required_number("theta")?,
        })
    }

    fn calculate(input: &PolarInput) -> CalcResult<CartesianResult> {
        calculate(input)
    }

    fn report(output: &CartesianResult) -> Report {
        Report::new("Point (x, y)", format!("({}, {})", fixed(output.x, 4), fixed(output.y, 4)))
            .line("x", fixed(output.x, 4))
            .line("y", fixed(output.y, 4))
    }
}
