//! # Inflation
//!
//! ```text
//! future cost       = amount · (1 + r)^t
//! purchasing power  = amount / (1 + r)^t
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::Calculator;
use crate::errors::CalcResult;
use crate::form::{FieldSpec, FormValues};
use crate::format::{currency, percent};
use crate::report::Report;
use crate::validation::{ensure_non_negative, ensure_range};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InflationInput {
    pub amount: f64,
    /// Average annual inflation in percent; deflation is allowed
    pub annual_rate: f64,
    pub years: f64,
}

impl InflationInput {
    pub fn validate(&self) -> CalcResult<()> {
        ensure_non_negative("amount", self.amount)?;
        ensure_range("annual_rate", self.annual_rate, -50.0, 100.0)?;
        ensure_range("years", self.years, 0.0, 200.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InflationResult {
    pub future_cost: f64,
    pub purchasing_power: f64,
    /// Total price change over the period, in percent
    pub cumulative_inflation: f64,
}

pub fn calculate(input: &InflationInput) -> CalcResult<InflationResult> {
    input.validate()?;
    let factor = (1.0 + input.annual_rate / 100.0).powf(input.years);
    Ok(InflationResult {
        future_cost: input.amount * factor,
        purchasing_power: input.amount / factor,
        cumulative_inflation: (factor - 1.0) * 100.0,
    })
}

pub struct Inflation;

impl Calculator for Inflation {
    type Input = InflationInput;
    type Output = InflationResult;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::number("amount", "Amount today").unit("$").placeholder("100"),
        FieldSpec::number("annual_rate", "Annual inflation").unit("%").placeholder("3"),
        FieldSpec::number("years", "Years").placeholder("10"),
    ];

    fn parse(form: &FormValues) -> CalcResult<InflationInput> {
        Ok(InflationInput {
            amount: form.required_number("amount")?,
            annual_rate: form.required_number("annual_rate")?,
            years: form.required_number("years")?,
        })
    }

    fn calculate(input: &InflationInput) -> CalcResult<InflationResult> {
        calculate(input)
    }

    fn report(output: &InflationResult) -> Report {
        Report::new("Future cost", currency(output.future_cost, "$"))
            .line("Purchasing power of today's amount", currency(output.purchasing_power, "$"))
            .line("Cumulative inflation", percent(output.cumulative_inflation, 2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_years_at_three_percent() {
        let result = calculate(&InflationInput {
            amount: 100.0,
            annual_rate: 3.0,
            years: 10.0,
        })
        .unwrap();
        assert!((result.future_cost - 134.39).abs() < 0.01);
        assert!((result.purchasing_power - 74.41).abs() < 0.01);
    }

    #[test]
    fn test_zero_years_is_identity() {
        let result = calculate(&InflationInput {
            amount: 50.0,
            annual_rate: 7.0,
            years: 0.0,
        })
        .unwrap();
        assert_eq!(result.future_cost, 50.0);
        assert_eq!(result.cumulative_inflation, 0.0);
    }
}
