//! # Compound Interest
//!
//! ```text
//! A = P(1 + r/n)^(nt) + PMT · ((1 + i)^(12t) − 1) / i
//! i = (1 + r/n)^(n/12) − 1      (effective monthly rate)
//! ```
//!
//! Contributions are made at the end of each month. With a zero rate the
//! contribution term reduces to PMT · 12t.

use serde::{Deserialize, Serialize};

use crate::calculations::Calculator;
use crate::errors::{CalcError, CalcResult};
use crate::form::{FieldSpec, FormValues};
use crate::format::{currency, percent};
use crate::report::{Report, ReportTable};
use crate::validation::{ensure_finite, ensure_non_negative, ensure_range};

pub const MAX_YEARS: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompoundInterestInput {
    pub principal: f64,
    /// Annual rate in percent
    pub annual_rate: f64,
    pub compounds_per_year: u32,
    pub years: f64,
    #[serde(default)]
    pub monthly_contribution: f64,
}

impl CompoundInterestInput {
    pub fn validate(&self) -> CalcResult<()> {
        ensure_non_negative("principal", self.principal)?;
        ensure_range("annual_rate", self.annual_rate, 0.0, 100.0)?;
        if self.compounds_per_year == 0 || self.compounds_per_year > 365 {
            return Err(CalcError::invalid_input(
                "compounds_per_year",
                self.compounds_per_year.to_string(),
                "Compounding must be between 1 and 365 times per year",
            ));
        }
        ensure_range("years", self.years, 0.0, MAX_YEARS)?;
        ensure_non_negative("monthly_contribution", self.monthly_contribution)
    }
}

/// Balance at the end of a whole year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearBalance {
    pub year: u32,
    pub contributed: f64,
    pub balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundInterestResult {
    pub final_balance: f64,
    pub total_contributed: f64,
    pub total_interest: f64,
    /// Effective annual rate in percent
    pub effective_rate: f64,
    pub schedule: Vec<YearBalance>,
}

fn balance_after(input: &CompoundInterestInput, years: f64) -> f64 {
    let n = input.compounds_per_year as f64;
    let r = input.annual_rate / 100.0;
    let growth = (1.0 + r / n).powf(n * years);
    let monthly = (1.0 + r / n).powf(n / 12.0) - 1.0;
    let months = 12.0 * years;
    let contributions = if monthly == 0.0 {
        input.monthly_contribution * months
    } else {
        input.monthly_contribution * ((1.0 + monthly).powf(months) - 1.0) / monthly
    };
    input.principal * growth + contributions
}

pub fn calculate(input: &CompoundInterestInput) -> CalcResult<CompoundInterestResult> {
    input.validate()?;
    let n = input.compounds_per_year as f64;

    let final_balance = ensure_finite("compound interest", balance_after(input, input.years))?;
    let total_contributed = input.principal + input.monthly_contribution * 12.0 * input.years;

    let schedule = (1..=input.years.floor() as u32)
        .map(|year| YearBalance {
            year,
            contributed: input.principal + input.monthly_contribution * 12.0 * year as f64,
            balance: balance_after(input, year as f64),
        })
        .collect();

    Ok(CompoundInterestResult {
        final_balance,
        total_contributed,
        total_interest: final_balance - total_contributed,
        effective_rate: ((1.0 + input.annual_rate / 100.0 / n).powf(n) - 1.0) * 100.0,
        schedule,
    })
}

pub struct CompoundInterest;

impl Calculator for CompoundInterest {
    type Input = CompoundInterestInput;
    type Output = CompoundInterestResult;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::number("principal", "Initial deposit").unit("$").placeholder("10000"),
        FieldSpec::number("annual_rate", "Annual interest rate").unit("%").placeholder("5"),
        FieldSpec::integer("compounds_per_year", "Compounds per year").placeholder("12"),
        FieldSpec::number("years", "Years").placeholder("10"),
        FieldSpec::number("monthly_contribution", "Monthly contribution")
            .unit("$")
            .placeholder("0")
            .optional(),
    ];

    fn parse(form: &FormValues) -> CalcResult<CompoundInterestInput> {
        Ok(CompoundInterestInput {
            principal: form.required_number("principal")?,
            annual_rate: form.required_number("annual_rate")?,
            compounds_per_year: form.required_count("compounds_per_year")?,
            years: form.required_number("years")?,
            monthly_contribution: form.number_or("monthly_contribution", 0.0)?,
        })
    }

    fn calculate(input: &CompoundInterestInput) -> CalcResult<CompoundInterestResult> {
        calculate(input)
    }

    fn report(output: &CompoundInterestResult) -> Report {
        let mut table = ReportTable::new("Growth by year", ["Year", "Contributed", "Balance"]);
        for row in &output.schedule {
            table.push_row([row.year.to_string(), currency(row.contributed, "$"), currency(row.balance, "$")]);
        }
        Report::new("Final balance", currency(output.final_balance, "$"))
            .line("Total contributed", currency(output.total_contributed, "$"))
            .line("Interest earned", currency(output.total_interest, "$"))
            .line("Effective annual rate", percent(output.effective_rate, 3))
            .table(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(principal: f64, rate: f64, n: u32, years: f64, monthly: f64) -> CompoundInterestInput {
        CompoundInterestInput {
            principal,
            annual_rate: rate,
            compounds_per_year: n,
            years,
            monthly_contribution: monthly,
        }
    }

    #[test]
    fn test_annual_compounding() {
        let result = calculate(&input(1000.0, 10.0, 1, 2.0, 0.0)).unwrap();
        assert!((result.final_balance - 1210.0).abs() < 1e-9);
        assert!((result.total_interest - 210.0).abs() < 1e-9);
        assert_eq!(result.schedule.len(), 2);
    }

    #[test]
    fn test_monthly_compounding_textbook() {
        // $10,000 at 5% compounded monthly for 10 years
        let result = calculate(&input(10_000.0, 5.0, 12, 10.0, 0.0)).unwrap();
        assert!((result.final_balance - 16_470.09).abs() < 0.01);
    }

    #[test]
    fn test_contributions_with_zero_rate() {
        let result = calculate(&input(0.0, 0.0, 12, 1.0, 100.0)).unwrap();
        assert!((result.final_balance - 1200.0).abs() < 1e-9);
        assert_eq!(result.total_interest, 0.0);
    }

    #[test]
    fn test_monthly_contributions_annuity() {
        // 12 payments of 100 at 12%/12 = 1% per month
        let result = calculate(&input(0.0, 12.0, 12, 1.0, 100.0)).unwrap();
        assert!((result.final_balance - 1268.25).abs() < 0.01);
    }

    #[test]
    fn test_validation() {
        assert!(calculate(&input(-1.0, 5.0, 12, 1.0, 0.0)).is_err());
        assert!(calculate(&input(100.0, 5.0, 0, 1.0, 0.0)).is_err());
        assert!(calculate(&input(100.0, 5.0, 12, 101.0, 0.0)).is_err());
    }
}
