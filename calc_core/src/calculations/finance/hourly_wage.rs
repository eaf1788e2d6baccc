//! # Hourly Wage
//!
//! Converts an annual salary into hourly, weekly and monthly pay:
//! hourly = salary / (hours per week · weeks per year).

use serde::{Deserialize, Serialize};

use crate::calculations::Calculator;
use crate::errors::CalcResult;
use crate::form::{FieldSpec, FormValues};
use crate::format::currency;
use crate::report::Report;
use crate::validation::{ensure_non_negative, ensure_range};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourlyWageInput {
    pub annual_salary: f64,
    pub hours_per_week: f64,
    pub weeks_per_year: f64,
}

impl HourlyWageInput {
    pub fn validate(&self) -> CalcResult<()> {
        ensure_non_negative("annual_salary", self.annual_salary)?;
        ensure_range("hours_per_week", self.hours_per_week, 1.0, 168.0)?;
        ensure_range("weeks_per_year", self.weeks_per_year, 1.0, 52.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourlyWageResult {
    pub hourly: f64,
    pub weekly: f64,
    pub biweekly: f64,
    pub monthly: f64,
}

pub fn calculate(input: &HourlyWageInput) -> CalcResult<HourlyWageResult> {
    input.validate()?;
    let weekly = input.annual_salary / input.weeks_per_year;
    Ok(HourlyWageResult {
        hourly: weekly / input.hours_per_week,
        weekly,
        biweekly: weekly * 2.0,
        monthly: input.annual_salary / 12.0,
    })
}

pub struct HourlyWage;

impl Calculator for HourlyWage {
    type Input = HourlyWageInput;
    type Output = HourlyWageResult;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::number("annual_salary", "Annual salary").unit("$").placeholder("52000"),
        FieldSpec::number("hours_per_week", "Hours per week").placeholder("40"),
        FieldSpec::number("weeks_per_year", "Weeks worked per year").placeholder("52").optional(),
    ];

    fn parse(form: &FormValues) -> CalcResult<HourlyWageInput> {
        Ok(HourlyWageInput {
            annual_salary: form.required_number("annual_salary")?,
            hours_per_week: form.required_number("hours_per_week")?,
            weeks_per_year: form.number_or("weeks_per_year", 52.0)?,
        })
    }

    fn calculate(input: &HourlyWageInput) -> CalcResult<HourlyWageResult> {
        calculate(input)
    }

    fn report(output: &HourlyWageResult) -> Report {
        Report::new("Hourly wage", currency(output.hourly, "$"))
            .line("Weekly", currency(output.weekly, "$"))
            .line("Every two weeks", currency(output.biweekly, "$"))
            .line("Monthly", currency(output.monthly, "$"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_time() {
        let result = calculate(&HourlyWageInput {
            annual_salary: 52_000.0,
            hours_per_week: 40.0,
            weeks_per_year: 52.0,
        })
        .unwrap();
        assert_eq!(result.hourly, 25.0);
        assert_eq!(result.weekly, 1000.0);
        assert!((result.monthly - 4333.33).abs() < 0.01);
    }

    #[test]
    fn test_zero_hours_rejected() {
        let input = HourlyWageInput {
            annual_salary: 52_000.0,
            hours_per_week: 0.0,
            weeks_per_year: 52.0,
        };
        assert!(calculate(&input).is_err());
    }
}
