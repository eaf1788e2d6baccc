//! # Jacobian Matrix
//!
//! For functions f₁..fₘ of variables x₁..xₙ, the Jacobian is the m×n matrix
//! of first partial derivatives:
//!
//! ```text
//! J[i][j] = ∂fᵢ / ∂xⱼ
//! ```
//!
//! Partial derivatives are computed symbolically, then evaluated at the
//! given point. The determinant is reported only for square matrices.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::math::jacobian::{calculate, JacobianInput};
//!
//! let input = JacobianInput {
//!     functions: vec!["x^2 * y".to_string(), "5x + sin(y)".to_string()],
//!     variables: vec!["x".to_string(), "y".to_string()],
//!     point: vec![1.0, 0.0],
//! };
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.symbolic[0][0], "2*x*y");
//! assert_eq!(result.determinant, Some(-5.0));
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::Calculator;
use crate::errors::{CalcError, CalcResult};
use crate::expr::{self, Expr};
use crate::form::{FieldSpec, FormValues};
use crate::format::compact;
use crate::report::{Report, ReportTable};

/// At most a 3×3 system
pub const MAX_DIMENSION: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JacobianInput {
    pub functions: Vec<String>,
    pub variables: Vec<String>,
    /// Values of `variables`, in the same order
    pub point: Vec<f64>,
}

impl JacobianInput {
    pub fn validate(&self) -> CalcResult<()> {
        if self.functions.is_empty() || self.functions.len() > MAX_DIMENSION {
            return Err(CalcError::invalid_input(
                "functions",
                self.functions.len().to_string(),
                format!("Enter between 1 and {} functions", MAX_DIMENSION),
            ));
        }
        if self.variables.is_empty() || self.variables.len() > MAX_DIMENSION {
            return Err(CalcError::invalid_input(
                "variables",
                self.variables.join(", "),
                format!("Enter between 1 and {} variables", MAX_DIMENSION),
            ));
        }
        for (i, name) in self.variables.iter().enumerate() {
            let valid = name.chars().next().is_some_and(|c| c.is_alphabetic())
                && name.chars().all(|c| c.is_alphanumeric() || c == '_');
            if !valid {
                return Err(CalcError::invalid_input("variables", name.as_str(), "Not a valid variable name"));
            }
            if self.variables[..i].contains(name) {
                return Err(CalcError::invalid_input("variables", name.as_str(), "Variable listed twice"));
            }
        }
        if self.point.len() != self.variables.len() {
            return Err(CalcError::invalid_input(
                "point",
                self.point.len().to_string(),
                format!("Expected {} coordinates, one per variable", self.variables.len()),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JacobianResult {
    /// Partial derivatives as text, `symbolic[i][j] = ∂fᵢ/∂xⱼ`
    pub symbolic: Vec<Vec<String>>,
    /// The same matrix evaluated at the point
    pub values: Vec<Vec<f64>>,
    pub variables: Vec<String>,
    /// Present when the matrix is square
    pub determinant: Option<f64>,
}

fn determinant(m: &[Vec<f64>]) -> f64 {
    match m.len() {
        1 => m[0][0],
        2 => m[0][0] * m[1][1] - m[0][1] * m[1][0],
        _ => {
            m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1]) - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
                + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
        }
    }
}

pub fn calculate(input: &JacobianInput) -> CalcResult<JacobianResult> {
    input.validate()?;

    let functions = input
        .functions
        .iter()
        .map(|src| expr::parse(src))
        .collect::<CalcResult<Vec<Expr>>>()?;

    for (f, src) in functions.iter().zip(&input.functions) {
        if let Some(unknown) = f.variables().into_iter().find(|v| !input.variables.contains(v)) {
            return Err(CalcError::invalid_input(
                "functions",
                src.as_str(),
                format!("Uses '{}', which is not in the variable list", unknown),
            ));
        }
    }

    let bindings: Vec<(&str, f64)> = input.variables.iter().map(String::as_str).zip(input.point.iter().copied()).collect();

    let mut symbolic = Vec::with_capacity(functions.len());
    let mut values = Vec::with_capacity(functions.len());
    for f in &functions {
        let mut symbolic_row = Vec::with_capacity(input.variables.len());
        let mut value_row = Vec::with_capacity(input.variables.len());
        for var in &input.variables {
            let partial = expr::derivative(f, var);
            value_row.push(partial.eval(&bindings)?);
            symbolic_row.push(partial.to_string());
        }
        symbolic.push(symbolic_row);
        values.push(value_row);
    }

    let determinant = (functions.len() == input.variables.len()).then(|| determinant(&values));

    Ok(JacobianResult {
        symbolic,
        values,
        variables: input.variables.clone(),
        determinant,
    })
}

fn split_list(raw: &str, separators: &[char]) -> Vec<String> {
    raw.split(|c: char| separators.contains(&c))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub struct Jacobian;

impl Calculator for Jacobian {
    type Input = JacobianInput;
    type Output = JacobianResult;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("functions", "Functions (separate with ;)").placeholder("x^2*y; 5x + sin(y)"),
        FieldSpec::text("variables", "Variables").placeholder("x, y"),
        FieldSpec::number_list("point", "Evaluate at").placeholder("1, 0"),
    ];

    fn parse(form: &FormValues) -> CalcResult<JacobianInput> {
        Ok(JacobianInput {
            functions: split_list(form.required_text("functions")?, &[';', '\n']),
            variables: split_list(form.required_text("variables")?, &[',', ' ']),
            point: form.required_number_list("point")?,
        })
    }

    fn calculate(input: &JacobianInput) -> CalcResult<JacobianResult> {
        calculate(input)
    }

    fn report(output: &JacobianResult) -> Report {
        let columns = std::iter::once("".to_string()).chain(output.variables.iter().map(|v| format!("∂/∂{}", v)));
        let mut table = ReportTable::new("Evaluated matrix", columns);
        for (i, row) in output.values.iter().enumerate() {
            let cells = std::iter::once(format!("f{}", i + 1)).chain(row.iter().map(|v| compact(*v, 6)));
            table.push_row(cells);
        }

        let headline = match output.determinant {
            Some(det) => Report::new("Determinant", compact(det, 6)),
            None => Report::new(
                "Matrix size",
                format!("{}×{}", output.values.len(), output.variables.len()),
            ),
        };

        let mut report = headline;
        for (i, row) in output.symbolic.iter().enumerate() {
            for (var, partial) in output.variables.iter().zip(row) {
                report = report.line(format!("∂f{}/∂{}", i + 1, var), partial.clone());
            }
        }
        if output.determinant.is_none() {
            report = report.note("The determinant is only defined for square matrices.");
        }
        report.table(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(functions: &[&str], variables: &[&str], point: &[f64]) -> JacobianInput {
        JacobianInput {
            functions: functions.iter().map(|s| s.to_string()).collect(),
            variables: variables.iter().map(|s| s.to_string()).collect(),
            point: point.to_vec(),
        }
    }

    #[test]
    fn test_polar_transform_determinant_is_r() {
        let result = calculate(&input(&["r*cos(t)", "r*sin(t)"], &["r", "t"], &[2.0, 0.7])).unwrap();
        assert!((result.determinant.unwrap() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_three_by_three() {
        let result = calculate(&input(&["x + y + z", "x*y", "z^2"], &["x", "y", "z"], &[1.0, 2.0, 3.0])).unwrap();
        // rows: [1,1,1], [2,1,0], [0,0,6] -> det = 1*(6) - 1*(12) + 1*(0) = -6
        assert_eq!(result.values[1], vec![2.0, 1.0, 0.0]);
        assert_eq!(result.determinant, Some(-6.0));
    }

    #[test]
    fn test_non_square_has_no_determinant() {
        let result = calculate(&input(&["x*y"], &["x", "y"], &[3.0, 4.0])).unwrap();
        assert_eq!(result.values, vec![vec![4.0, 3.0]]);
        assert_eq!(result.determinant, None);
        let report = Jacobian::report(&result);
        assert_eq!(report.headline.value, "1×2");
    }

    #[test]
    fn test_unknown_variable_rejected() {
        let err = calculate(&input(&["x*z"], &["x", "y"], &[1.0, 1.0])).unwrap_err();
        assert_eq!(err.field(), Some("functions"));
    }

    #[test]
    fn test_point_length_must_match() {
        assert!(calculate(&input(&["x"], &["x", "y"], &[1.0])).is_err());
    }

    #[test]
    fn test_domain_error_at_point() {
        let err = calculate(&input(&["ln(x)"], &["x"], &[0.0])).unwrap_err();
        assert_eq!(err.error_code(), "DOMAIN_ERROR");
    }

    #[test]
    fn test_form_parsing() {
        let form = FormValues::new()
            .with("functions", "x^2; x*y")
            .with("variables", "x, y")
            .with("point", "2, 5");
        let parsed = Jacobian::parse(&form).unwrap();
        assert_eq!(parsed.functions, vec!["x^2", "x*y"]);
        assert_eq!(parsed.variables, vec!["x", "y"]);
        let result = Jacobian::calculate(&parsed).unwrap();
        assert_eq!(result.values, vec![vec![4.0, 0.0], vec![5.0, 2.0]]);
    }
}
