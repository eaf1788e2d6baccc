//! # Logarithm
//!
//! log_b(x) = ln(x) / ln(b), for x > 0, b > 0 and b ≠ 1. The natural and
//! common logarithms are reported alongside.

use serde::{Deserialize, Serialize};

use crate::calculations::Calculator;
use crate::errors::{CalcError, CalcResult};
use crate::form::{FieldSpec, FormValues};
use crate::format::compact;
use crate::report::Report;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogarithmInput {
    pub value: f64,
    pub base: f64,
}

impl LogarithmInput {
    pub fn validate(&self) -> CalcResult<()> {
        if self.value <= 0.0 {
            return Err(CalcError::domain("logarithm", "the logarithm of a non-positive number is undefined"));
        }
        if self.base <= 0.0 || self.base == 1.0 {
            return Err(CalcError::invalid_input(
                "base",
                self.base.to_string(),
                "Base must be positive and not equal to 1",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogarithmResult {
    pub result: f64,
    pub natural: f64,
    pub common: f64,
}

pub fn calculate(input: &LogarithmInput) -> CalcResult<LogarithmResult> {
    input.validate()?;
    let result = if input.base == 10.0 {
        input.value.log10()
    } else if input.base == 2.0 {
        input.value.log2()
    } else {
        input.value.ln() / input.base.ln()
    };
    Ok(LogarithmResult {
        result,
        natural: input.value.ln(),
        common: input.value.log10(),
    })
}

pub struct Logarithm;

impl Calculator for Logarithm {
    type Input = LogarithmInput;
    type Output = LogarithmResult;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::number("value", "Value (x)").placeholder("1000"),
        FieldSpec::number("base", "Base (b)").placeholder("10"),
    ];

    fn parse(form: &FormValues) -> CalcResult<LogarithmInput> {
        Ok(LogarithmInput {
            value: form.required_number("value")?,
            base: form.required_number("base")?,
        })
    }

    fn calculate(input: &LogarithmInput) -> CalcResult<LogarithmResult> {
        calculate(input)
    }

    fn report(output: &LogarithmResult) -> Report {
        Report::new("log_b(x)", compact(output.result, 8))
            .line("ln(x)", compact(output.natural, 8))
            .line("log₁₀(x)", compact(output.common, 8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_bases() {
        let result = calculate(&LogarithmInput { value: 1000.0, base: 10.0 }).unwrap();
        assert_eq!(result.result, 3.0);
        let result = calculate(&LogarithmInput { value: 1024.0, base: 2.0 }).unwrap();
        assert_eq!(result.result, 10.0);
    }

    #[test]
    fn test_arbitrary_base() {
        let result = calculate(&LogarithmInput { value: 81.0, base: 3.0 }).unwrap();
        assert!((result.result - 4.0).abs() < 1e-12);
        assert_eq!(Logarithm::report(&result).headline.value, "4");
    }

    #[test]
    fn test_domain() {
        let err = calculate(&LogarithmInput { value: 0.0, base: 10.0 }).unwrap_err();
        assert_eq!(err.error_code(), "DOMAIN_ERROR");
        assert!(calculate(&LogarithmInput { value: 5.0, base: 1.0 }).is_err());
        assert!(calculate(&LogarithmInput { value: 5.0, base: -2.0 }).is_err());
    }
}
