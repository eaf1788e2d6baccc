//! # Cartesian to Polar Conversion
//!
//! Converts a point (x, y) to polar coordinates (r, θ).
//!
//! ```text
//! r = √(x² + y²)
//! θ = atan2(y, x)        reported in degrees, (-180°, 180°]
//! ```
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::math::cartesian_to_polar::{calculate, CartesianInput};
//!
//! let result = calculate(&CartesianInput { x: 3.0, y: 4.0 }).unwrap();
//! assert!((result.r - 5.0).abs() < 1e-12);
//! assert!((result.theta_deg - 53.1301).abs() < 1e-4);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::Calculator;
use crate::errors::CalcResult;
use crate::form::{FieldSpec, FormValues};
use crate::format::fixed;
use crate::report::Report;
use crate::units::{Degrees, Radians};

/// A point in the Cartesian plane.
///
/// ## JSON Example
///
/// ```json
/// { "x": 3.0, "y": 4.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CartesianInput {
    pub x: f64,
    pub y: f64,
}

/// The same point in polar form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarResult {
    /// Distance from the origin
    pub r: f64,
    /// Angle from the positive x axis, degrees
    pub theta_deg: f64,
    /// Angle from the positive x axis, radians
    pub theta_rad: f64,
}

/// Convert (x, y) to (r, θ). Every finite point is valid; the origin maps
/// to r = 0, θ = 0.
pub fn calculate(input: &CartesianInput) -> CalcResult<PolarResult> {
    let r = input.x.hypot(input.y);
    let theta = Radians(input.y.atan2(input.x));
    let degrees: Degrees = theta.into();

    Ok(PolarResult {
        r,
        theta_deg: degrees.value(),
        theta_rad: theta.value(),
    })
}

pub struct CartesianToPolar;

impl Calculator for CartesianToPolar {
    type Input = CartesianInput;
    type Output = PolarResult;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::number("x", "X coordinate").placeholder("3"),
        FieldSpec::number("y", "Y coordinate").placeholder("4"),
    ];

    fn parse(form: &FormValues) -> CalcResult<CartesianInput> {
        Ok(CartesianInput {
            x: form.required_number("x")?,
            y: form.required_number("y")?,
        })
    }

    fn calculate(input: &CartesianInput) -> CalcResult<PolarResult> {
        calculate(input)
    }

    fn report(output: &PolarResult) -> Report {
        Report::new("Radius (r)", fixed(output.r, 4))
            .line("Angle (θ)", format!("{}°", fixed(output.theta_deg, 4)))
            .line("Angle (θ, radians)", fixed(output.theta_rad, 4))
    }
}
