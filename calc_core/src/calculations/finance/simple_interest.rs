//! # Simple Interest
//!
//! I = P · r · t, with r as a decimal and t in years.

use serde::{Deserialize, Serialize};

use crate::calculations::Calculator;
use crate::errors::CalcResult;
use crate::form::{FieldSpec, FormValues};
use crate::format::currency;
use crate::report::Report;
use crate::validation::{ensure_non_negative, ensure_range};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimpleInterestInput {
    pub principal: f64,
    /// Annual rate in percent
    pub annual_rate: f64,
    pub years: f64,
}

impl SimpleInterestInput {
    pub fn validate(&self) -> CalcResult<()> {
        ensure_non_negative("principal", self.principal)?;
        ensure_range("annual_rate", self.annual_rate, 0.0, 100.0)?;
        ensure_range("years", self.years, 0.0, 100.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimpleInterestResult {
    pub interest: f64,
    pub total: f64,
    pub interest_per_year: f64,
}

pub fn calculate(input: &SimpleInterestInput) -> CalcResult<SimpleInterestResult> {
    input.validate()?;
    let interest_per_year = input.principal * input.annual_rate / 100.0;
    let interest = interest_per_year * input.years;
    Ok(SimpleInterestResult {
        interest,
        total: input.principal + interest,
        interest_per_year,
    })
}

pub struct SimpleInterest;

impl Calculator for SimpleInterest {
    type Input = SimpleInterestInput;
    type Output = SimpleInterestResult;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::number("principal", "Principal").unit("$").placeholder("5000"),
        FieldSpec::number("annual_rate", "Annual rate").unit("%").placeholder("4"),
        FieldSpec::number("years", "Years").placeholder("3"),
    ];

    fn parse(form: &FormValues) -> CalcResult<SimpleInterestInput> {
        Ok(SimpleInterestInput {
            principal: form.required_number("principal")?,
            annual_rate: form.required_number("annual_rate")?,
            years: form.required_number("years")?,
        })
    }

    fn calculate(input: &SimpleInterestInput) -> CalcResult<SimpleInterestResult> {
        calculate(input)
    }

    fn report(output: &SimpleInterestResult) -> Report {
        Report::new("Interest", currency(output.interest, "$"))
            .line("Total amount", currency(output.total, "$"))
            .line("Interest per year", currency(output.interest_per_year, "$"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        let result = calculate(&SimpleInterestInput {
            principal: 5000.0,
            annual_rate: 4.0,
            years: 3.0,
        })
        .unwrap();
        assert!((result.interest - 600.0).abs() < 1e-9);
        assert!((result.total - 5600.0).abs() < 1e-9);
        assert_eq!(SimpleInterest::report(&result).headline.value, "$600.00");
    }

    #[test]
    fn test_negative_principal_rejected() {
        let input = SimpleInterestInput {
            principal: -1.0,
            annual_rate: 4.0,
            years: 1.0,
        };
        assert!(calculate(&input).is_err());
    }
}
