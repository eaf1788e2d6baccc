//! # Discrete Convolution
//!
//! ```text
//! (a * b)[k] = Σᵢ a[i]·b[k − i],   k = 0 .. n + m − 2
//! ```
//!
//! The full (linear) convolution of sequences of length n and m has
//! n + m − 1 entries.

use serde::{Deserialize, Serialize};

use crate::calculations::Calculator;
use crate::errors::{CalcError, CalcResult};
use crate::form::{FieldSpec, FormValues};
use crate::format::compact;
use crate::report::{Report, ReportTable};

/// Longest accepted input sequence
pub const MAX_LENGTH: usize = 1000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvolutionInput {
    pub signal: Vec<f64>,
    pub kernel: Vec<f64>,
}

impl ConvolutionInput {
    pub fn validate(&self) -> CalcResult<()> {
        for (field, values) in [("signal", &self.signal), ("kernel", &self.kernel)] {
            if values.is_empty() {
                return Err(CalcError::missing_field(field));
            }
            if values.len() > MAX_LENGTH {
                return Err(CalcError::invalid_input(
                    field,
                    values.len().to_string(),
                    format!("At most {} values are allowed", MAX_LENGTH),
                ));
            }
            if values.iter().any(|v| !v.is_finite()) {
                return Err(CalcError::invalid_input(field, "non-finite", "Values must be finite numbers"));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvolutionResult {
    pub output: Vec<f64>,
    pub sum: f64,
}

pub fn calculate(input: &ConvolutionInput) -> CalcResult<ConvolutionResult> {
    input.validate()?;
    let (a, b) = (&input.signal, &input.kernel);
    let mut output = vec![0.0; a.len() + b.len() - 1];
    for (i, x) in a.iter().enumerate() {
        for (j, y) in b.iter().enumerate() {
            output[i + j] += x * y;
        }
    }
    let sum = output.iter().sum();
    Ok(ConvolutionResult { output, sum })
}

pub struct Convolution;

impl Calculator for Convolution {
    type Input = ConvolutionInput;
    type Output = ConvolutionResult;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::number_list("signal", "Sequence a").placeholder("1, 2, 3"),
        FieldSpec::number_list("kernel", "Sequence b").placeholder("0, 1, 0.5"),
    ];

    fn parse(form: &FormValues) -> CalcResult<ConvolutionInput> {
        Ok(ConvolutionInput {
            signal: form.required_number_list("signal")?,
            kernel: form.required_number_list("kernel")?,
        })
    }

    fn calculate(input: &ConvolutionInput) -> CalcResult<ConvolutionResult> {
        calculate(input)
    }

    fn report(output: &ConvolutionResult) -> Report {
        let joined = output.output.iter().map(|v| compact(*v, 6)).collect::<Vec<_>>().join(", ");
        let mut table = ReportTable::new("Output", ["k", "(a * b)[k]"]);
        for (k, v) in output.output.iter().enumerate() {
            table.push_row([k.to_string(), compact(*v, 6)]);
        }
        Report::new("a * b", format!("[{}]", joined))
            .line("Length", output.output.len().to_string())
            .line("Sum of entries", compact(output.sum, 6))
            .table(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_convolution() {
        let input = ConvolutionInput {
            signal: vec![1.0, 2.0, 3.0],
            kernel: vec![0.0, 1.0, 0.5],
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.output, vec![0.0, 1.0, 2.5, 4.0, 1.5]);
        // sum(a*b) = sum(a) * sum(b)
        assert_eq!(result.sum, 9.0);
    }

    #[test]
    fn test_identity_kernel() {
        let input = ConvolutionInput {
            signal: vec![4.0, -2.0, 7.0],
            kernel: vec![1.0],
        };
        assert_eq!(calculate(&input).unwrap().output, vec![4.0, -2.0, 7.0]);
    }

    #[test]
    fn test_limits() {
        let too_long = ConvolutionInput {
            signal: vec![1.0; MAX_LENGTH + 1],
            kernel: vec![1.0],
        };
        assert!(calculate(&too_long).is_err());
        let empty = ConvolutionInput {
            signal: vec![],
            kernel: vec![1.0],
        };
        assert_eq!(calculate(&empty).unwrap_err(), CalcError::missing_field("signal"));
    }

    #[test]
    fn test_report_headline() {
        let form = FormValues::new().with("signal", "1 1").with("kernel", "1;1");
        let input = Convolution::parse(&form).unwrap();
        let report = Convolution::report(&calculate(&input).unwrap());
        assert_eq!(report.headline.value, "[1, 2, 1]");
    }
}
