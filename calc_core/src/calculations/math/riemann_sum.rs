//! # Riemann Sum
//!
//! Approximates ∫ₐᵇ f(x) dx by sampling f on `n` equal subintervals.
//!
//! ```text
//! Δx = (b − a) / n
//! left:        Σ f(a + iΔx)·Δx,          i = 0..n−1
//! right:       Σ f(a + iΔx)·Δx,          i = 1..n
//! midpoint:    Σ f(a + (i + ½)Δx)·Δx,    i = 0..n−1
//! trapezoidal: Δx/2 · [f(a) + 2Σ f(a + iΔx) + f(b)],  i = 1..n−1
//! ```
//!
//! The function is any expression in `x` understood by [`crate::expr`].
//! If f is undefined at any sample point the whole sum is rejected rather
//! than silently skipping the point.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::math::riemann_sum::{calculate, RiemannInput, RiemannMethod};
//!
//! let input = RiemannInput {
//!     function: "x^2".to_string(),
//!     lower: 0.0,
//!     upper: 1.0,
//!     intervals: 4,
//!     method: RiemannMethod::Right,
//! };
//! let result = calculate(&input).unwrap();
//! assert!((result.approximation - 0.46875).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::Calculator;
use crate::errors::{CalcError, CalcResult};
use crate::expr::{self, Expr};
use crate::form::{Choice, FieldSpec, FormValues};
use crate::format::compact;
use crate::report::{Report, ReportTable};

/// Largest number of subintervals accepted
pub const MAX_INTERVALS: u32 = 100_000;

/// Rows shown in the sample table
const SAMPLE_ROWS: usize = 10;

/// Where in each subinterval the function is sampled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiemannMethod {
    Left,
    Right,
    Midpoint,
    Trapezoidal,
}

impl RiemannMethod {
    pub const CHOICES: &'static [Choice] = &[
        Choice::new("left", "Left endpoint"),
        Choice::new("right", "Right endpoint"),
        Choice::new("midpoint", "Midpoint"),
        Choice::new("trapezoidal", "Trapezoidal"),
    ];

    fn from_choice(value: &str) -> Self {
        match value {
            "left" => RiemannMethod::Left,
            "right" => RiemannMethod::Right,
            "trapezoidal" => RiemannMethod::Trapezoidal,
            _ => RiemannMethod::Midpoint,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RiemannMethod::Left => "Left endpoint",
            RiemannMethod::Right => "Right endpoint",
            RiemannMethod::Midpoint => "Midpoint",
            RiemannMethod::Trapezoidal => "Trapezoidal",
        }
    }
}

/// ## JSON Example
///
/// ```json
/// { "function": "sin(x)", "lower": 0, "upper": 3.14159, "intervals": 100, "method": "midpoint" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiemannInput {
    /// f(x) as text
    pub function: String,
    pub lower: f64,
    pub upper: f64,
    pub intervals: u32,
    pub method: RiemannMethod,
}

impl RiemannInput {
    pub fn validate(&self) -> CalcResult<()> {
        if self.upper <= self.lower {
            return Err(CalcError::invalid_input(
                "upper",
                self.upper.to_string(),
                "Upper bound must be greater than the lower bound",
            ));
        }
        if self.intervals == 0 || self.intervals > MAX_INTERVALS {
            return Err(CalcError::invalid_input(
                "intervals",
                self.intervals.to_string(),
                format!("Number of intervals must be between 1 and {}", MAX_INTERVALS),
            ));
        }
        Ok(())
    }
}

/// One sampled point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x: f64,
    pub fx: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiemannResult {
    pub approximation: f64,
    pub delta_x: f64,
    pub method: RiemannMethod,
    /// The parsed function, normalised
    pub function: String,
    /// The first few sample points
    pub samples: Vec<Sample>,
}

fn parse_function(source: &str) -> CalcResult<Expr> {
    let f = expr::parse(source)?;
    if let Some(other) = f.variables().into_iter().find(|v| v != "x") {
        return Err(CalcError::invalid_input(
            "function",
            source,
            format!("Only the variable x is allowed, found '{}'", other),
        ));
    }
    Ok(f)
}

pub fn calculate(input: &RiemannInput) -> CalcResult<RiemannResult> {
    input.validate()?;
    let f = parse_function(&input.function)?;

    let n = input.intervals as usize;
    let a = input.lower;
    let dx = (input.upper - input.lower) / n as f64;
    let eval = |x: f64| f.eval(&[("x", x)]).map(|fx| Sample { x, fx });

    let points: Vec<f64> = match input.method {
        RiemannMethod::Left => (0..n).map(|i| a + i as f64 * dx).collect(),
        RiemannMethod::Right => (1..=n).map(|i| a + i as f64 * dx).collect(),
        RiemannMethod::Midpoint => (0..n).map(|i| a + (i as f64 + 0.5) * dx).collect(),
        RiemannMethod::Trapezoidal => (0..=n).map(|i| a + i as f64 * dx).collect(),
    };
    let samples = points.into_iter().map(eval).collect::<CalcResult<Vec<Sample>>>()?;

    let approximation = match input.method {
        RiemannMethod::Trapezoidal => {
            let interior: f64 = samples[1..n].iter().map(|s| s.fx).sum();
            dx / 2.0 * (samples[0].fx + 2.0 * interior + samples[n].fx)
        }
        _ => samples.iter().map(|s| s.fx).sum::<f64>() * dx,
    };
    if !approximation.is_finite() {
        return Err(CalcError::domain("Riemann sum", "the sum overflowed"));
    }

    Ok(RiemannResult {
        approximation,
        delta_x: dx,
        method: input.method,
        function: f.to_string(),
        samples: samples.into_iter().take(SAMPLE_ROWS).collect(),
    })
}

pub struct RiemannSum;

impl Calculator for RiemannSum {
    type Input = RiemannInput;
    type Output = RiemannResult;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("function", "f(x)").placeholder("x^2"),
        FieldSpec::number("lower", "Lower bound (a)").placeholder("0"),
        FieldSpec::number("upper", "Upper bound (b)").placeholder("1"),
        FieldSpec::integer("intervals", "Subintervals (n)").placeholder("4"),
        FieldSpec::choice("method", "Method", RiemannMethod::CHOICES),
    ];

    fn parse(form: &FormValues) -> CalcResult<RiemannInput> {
        Ok(RiemannInput {
            function: form.required_text("function")?.to_string(),
            lower: form.required_number("lower")?,
            upper: form.required_number("upper")?,
            intervals: form.required_count("intervals")?,
            method: RiemannMethod::from_choice(form.choice_or("method", RiemannMethod::CHOICES, "midpoint")?),
        })
    }

    fn calculate(input: &RiemannInput) -> CalcResult<RiemannResult> {
        calculate(input)
    }

    fn report(output: &RiemannResult) -> Report {
        let mut table = ReportTable::new("Sample points", ["x", "f(x)"]);
        for sample in &output.samples {
            table.push_row([compact(sample.x, 6), compact(sample.fx, 6)]);
        }
        Report::new("Approximate integral", compact(output.approximation, 6))
            .line("f(x)", output.function.clone())
            .line("Method", output.method.display_name())
            .line("Δx", compact(output.delta_x, 6))
            .table(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(function: &str, method: RiemannMethod, n: u32) -> RiemannInput {
        RiemannInput {
            function: function.to_string(),
            lower: 0.0,
            upper: 1.0,
            intervals: n,
            method,
        }
    }

    #[test]
    fn test_left_and_right_for_x_squared() {
        let left = calculate(&input("x^2", RiemannMethod::Left, 4)).unwrap();
        assert!((left.approximation - 0.21875).abs() < 1e-12);
        let right = calculate(&input("x^2", RiemannMethod::Right, 4)).unwrap();
        assert!((right.approximation - 0.46875).abs() < 1e-12);
    }

    #[test]
    fn test_midpoint_and_trapezoid() {
        let mid = calculate(&input("x^2", RiemannMethod::Midpoint, 4)).unwrap();
        assert!((mid.approximation - 0.328125).abs() < 1e-12);
        let trap = calculate(&input("x^2", RiemannMethod::Trapezoidal, 4)).unwrap();
        assert!((trap.approximation - 0.34375).abs() < 1e-12);
    }

    #[test]
    fn test_trapezoid_is_exact_for_lines() {
        let result = calculate(&input("2x + 1", RiemannMethod::Trapezoidal, 3)).unwrap();
        assert!((result.approximation - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_converges_for_many_intervals() {
        let mut i = input("sin(x)", RiemannMethod::Midpoint, 1000);
        i.upper = std::f64::consts::PI;
        let result = calculate(&i).unwrap();
        assert!((result.approximation - 2.0).abs() < 1e-5);
        assert_eq!(result.samples.len(), SAMPLE_ROWS);
    }

    #[test]
    fn test_undefined_sample_is_domain_error() {
        let err = calculate(&input("1/x", RiemannMethod::Left, 4)).unwrap_err();
        assert_eq!(err.error_code(), "DOMAIN_ERROR");
        // midpoint never touches x = 0
        assert!(calculate(&input("1/x", RiemannMethod::Midpoint, 4)).is_ok());
    }

    #[test]
    fn test_rejects_bad_bounds_and_variables() {
        let mut i = input("x", RiemannMethod::Left, 4);
        i.upper = 0.0;
        assert!(calculate(&i).is_err());
        assert!(calculate(&input("x*y", RiemannMethod::Left, 4)).is_err());
        assert!(calculate(&input("x", RiemannMethod::Left, 0)).is_err());
    }

    #[test]
    fn test_form_defaults_to_midpoint() {
        let form = FormValues::new()
            .with("function", "x")
            .with("lower", "0")
            .with("upper", "2")
            .with("intervals", "2");
        let parsed = RiemannSum::parse(&form).unwrap();
        assert_eq!(parsed.method, RiemannMethod::Midpoint);
    }
}
