//! # Quadratic Equation
//!
//! Solves ax² + bx + c = 0.
//!
//! ```text
//! Δ = b² − 4ac
//! x = (−b ± √Δ) / 2a            Δ ≥ 0
//! x = −b/2a ± i·√(−Δ)/2a        Δ < 0
//! vertex = (−b/2a, c − b²/4a)
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::Calculator;
use crate::errors::{CalcError, CalcResult};
use crate::form::{FieldSpec, FormValues};
use crate::format::compact;
use crate::report::Report;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadraticInput {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl QuadraticInput {
    pub fn validate(&self) -> CalcResult<()> {
        if self.a == 0.0 {
            return Err(CalcError::invalid_input("a", "0", "Coefficient a cannot be zero (the equation is linear)"));
        }
        Ok(())
    }
}

/// The two roots, real or a complex-conjugate pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Roots {
    /// x1 ≥ x2; equal when Δ = 0
    Real { x1: f64, x2: f64 },
    /// real ± i·imaginary, imaginary > 0
    Complex { real: f64, imaginary: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadraticResult {
    pub discriminant: f64,
    pub roots: Roots,
    pub vertex_x: f64,
    pub vertex_y: f64,
}

pub fn calculate(input: &QuadraticInput) -> CalcResult<QuadraticResult> {
    input.validate()?;
    let QuadraticInput { a, b, c } = *input;
    let discriminant = b * b - 4.0 * a * c;

    let roots = if discriminant >= 0.0 {
        let sqrt_d = discriminant.sqrt();
        // Avoid cancellation: compute the larger-magnitude root first
        let q = -0.5 * (b + b.signum() * sqrt_d);
        let (r1, r2) = if q == 0.0 { (0.0, 0.0) } else { (q / a, c / q) };
        Roots::Real {
            x1: r1.max(r2),
            x2: r1.min(r2),
        }
    } else {
        Roots::Complex {
            real: -b / (2.0 * a),
            imaginary: (-discriminant).sqrt() / (2.0 * a).abs(),
        }
    };

    Ok(QuadraticResult {
        discriminant,
        roots,
        vertex_x: -b / (2.0 * a),
        vertex_y: c - b * b / (4.0 * a),
    })
}

pub struct QuadraticEquation;

impl Calculator for QuadraticEquation {
    type Input = QuadraticInput;
    type Output = QuadraticResult;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::number("a", "Coefficient a").placeholder("1"),
        FieldSpec::number("b", "Coefficient b").placeholder("-3"),
        FieldSpec::number("c", "Coefficient c").placeholder("2"),
    ];

    fn parse(form: &FormValues) -> CalcResult<QuadraticInput> {
        Ok(QuadraticInput {
            a: form.required_number("a")?,
            b: form.required_number("b")?,
            c: form.required_number("c")?,
        })
    }

    fn calculate(input: &QuadraticInput) -> CalcResult<QuadraticResult> {
        calculate(input)
    }

    fn report(output: &QuadraticResult) -> Report {
        let report = match output.roots {
            Roots::Real { x1, x2 } if x1 == x2 => Report::new("Root (double)", compact(x1, 6)),
            Roots::Real { x1, x2 } => {
                Report::new("Roots", format!("x₁ = {}, x₂ = {}", compact(x1, 6), compact(x2, 6)))
            }
            Roots::Complex { real, imaginary } => Report::new(
                "Roots (complex)",
                format!("{} ± {}i", compact(real, 6), compact(imaginary, 6)),
            ),
        };
        report
            .line("Discriminant (Δ)", compact(output.discriminant, 6))
            .line("Vertex", format!("({}, {})", compact(output.vertex_x, 6), compact(output.vertex_y, 6)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve(a: f64, b: f64, c: f64) -> QuadraticResult {
        calculate(&QuadraticInput { a, b, c }).unwrap()
    }

    #[test]
    fn test_two_real_roots() {
        let result = solve(1.0, -3.0, 2.0);
        assert_eq!(result.discriminant, 1.0);
        assert_eq!(result.roots, Roots::Real { x1: 2.0, x2: 1.0 });
        assert_eq!(result.vertex_x, 1.5);
        assert_eq!(result.vertex_y, -0.25);
    }

    #[test]
    fn test_double_root() {
        let result = solve(1.0, 2.0, 1.0);
        assert_eq!(result.roots, Roots::Real { x1: -1.0, x2: -1.0 });
        assert_eq!(QuadraticEquation::report(&result).headline.value, "-1");
    }

    #[test]
    fn test_complex_roots() {
        let result = solve(1.0, 2.0, 5.0);
        assert_eq!(result.roots, Roots::Complex { real: -1.0, imaginary: 2.0 });
        assert_eq!(QuadraticEquation::report(&result).headline.value, "-1 ± 2i");
    }

    #[test]
    fn test_no_constant_term() {
        // x² - 4x = 0 -> 4, 0
        assert_eq!(solve(1.0, -4.0, 0.0).roots, Roots::Real { x1: 4.0, x2: 0.0 });
        // x² = 0
        assert_eq!(solve(1.0, 0.0, 0.0).roots, Roots::Real { x1: 0.0, x2: 0.0 });
    }

    #[test]
    fn test_linear_rejected() {
        assert!(calculate(&QuadraticInput { a: 0.0, b: 1.0, c: 1.0 }).is_err());
    }
}
