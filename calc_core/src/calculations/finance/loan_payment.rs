//! # Loan Payment
//!
//! Fixed monthly payment on an amortizing loan:
//!
//! ```text
//! M = P · i / (1 − (1 + i)^−n)      i = annual rate / 12, n = months
//! M = P / n                         when the rate is zero
//! ```
//!
//! The report includes the first year of the amortization schedule.

use serde::{Deserialize, Serialize};

use crate::calculations::Calculator;
use crate::errors::{CalcError, CalcResult};
use crate::form::{FieldSpec, FormValues};
use crate::format::currency;
use crate::report::{Report, ReportTable};
use crate::validation::{ensure_positive, ensure_range};

/// Rows of the amortization schedule kept in the result
const SCHEDULE_MONTHS: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanInput {
    pub principal: f64,
    /// Annual rate in percent; zero is allowed
    pub annual_rate: f64,
    pub years: f64,
}

impl LoanInput {
    pub fn validate(&self) -> CalcResult<()> {
        ensure_positive("principal", self.principal)?;
        ensure_range("annual_rate", self.annual_rate, 0.0, 100.0)?;
        ensure_range("years", self.years, 0.0, 50.0)?;
        if self.months() == 0 {
            return Err(CalcError::invalid_input(
                "years",
                self.years.to_string(),
                "The loan term must be at least one month",
            ));
        }
        Ok(())
    }

    pub fn months(&self) -> u32 {
        (self.years * 12.0).round() as u32
    }
}

/// One month of the amortization schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    pub month: u32,
    pub payment: f64,
    pub interest: f64,
    pub principal: f64,
    pub balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanResult {
    pub monthly_payment: f64,
    pub months: u32,
    pub total_paid: f64,
    pub total_interest: f64,
    pub schedule: Vec<AmortizationRow>,
}

pub fn calculate(input: &LoanInput) -> CalcResult<LoanResult> {
    input.validate()?;
    let months = input.months();
    let n = months as f64;
    let i = input.annual_rate / 100.0 / 12.0;

    let monthly_payment = if i == 0.0 {
        input.principal / n
    } else {
        input.principal * i / (1.0 - (1.0 + i).powf(-n))
    };

    let mut balance = input.principal;
    let schedule = (1..=months.min(SCHEDULE_MONTHS))
        .map(|month| {
            let interest = balance * i;
            let principal = monthly_payment - interest;
            balance = (balance - principal).max(0.0);
            AmortizationRow {
                month,
                payment: monthly_payment,
                interest,
                principal,
                balance,
            }
        })
        .collect();

    let total_paid = monthly_payment * n;
    Ok(LoanResult {
        monthly_payment,
        months,
        total_paid,
        total_interest: total_paid - input.principal,
        schedule,
    })
}

pub struct LoanPayment;

impl Calculator for LoanPayment {
    type Input = LoanInput;
    type Output = LoanResult;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::number("principal", "Loan amount").unit("$").placeholder("200000"),
        FieldSpec::number("annual_rate", "Annual interest rate").unit("%").placeholder("6.5"),
        FieldSpec::number("years", "Term").unit("years").placeholder("30"),
    ];

    fn parse(form: &FormValues) -> CalcResult<LoanInput> {
        Ok(LoanInput {
            principal: form.required_number("principal")?,
            annual_rate: form.required_number("annual_rate")?,
            years: form.required_number("years")?,
        })
    }

    fn calculate(input: &LoanInput) -> CalcResult<LoanResult> {
        calculate(input)
    }

    fn report(output: &LoanResult) -> Report {
        let mut table = ReportTable::new("First payments", ["Month", "Payment", "Interest", "Principal", "Balance"]);
        for row in &output.schedule {
            table.push_row([
                row.month.to_string(),
                currency(row.payment, "$"),
                currency(row.interest, "$"),
                currency(row.principal, "$"),
                currency(row.balance, "$"),
            ]);
        }
        Report::new("Monthly payment", currency(output.monthly_payment, "$"))
            .line("Number of payments", output.months.to_string())
            .line("Total paid", currency(output.total_paid, "$"))
            .line("Total interest", currency(output.total_interest, "$"))
            .table(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thirty_year_mortgage() {
        let result = calculate(&LoanInput {
            principal: 200_000.0,
            annual_rate: 6.5,
            years: 30.0,
        })
        .unwrap();
        assert!((result.monthly_payment - 1264.14).abs() < 0.01);
        assert_eq!(result.months, 360);
        assert_eq!(result.schedule.len(), 12);
        let first = result.schedule[0];
        assert!((first.interest - 1083.33).abs() < 0.01);
    }

    #[test]
    fn test_zero_rate() {
        let result = calculate(&LoanInput {
            principal: 1200.0,
            annual_rate: 0.0,
            years: 1.0,
        })
        .unwrap();
        assert_eq!(result.monthly_payment, 100.0);
        assert_eq!(result.total_interest, 0.0);
        assert!(result.schedule.last().unwrap().balance.abs() < 1e-9);
    }

    #[test]
    fn test_short_term_schedule() {
        let result = calculate(&LoanInput {
            principal: 1000.0,
            annual_rate: 12.0,
            years: 0.25,
        })
        .unwrap();
        assert_eq!(result.months, 3);
        assert_eq!(result.schedule.len(), 3);
        assert!(result.schedule[2].balance < 1e-6);
    }

    #[test]
    fn test_zero_term_rejected() {
        let input = LoanInput {
            principal: 1000.0,
            annual_rate: 5.0,
            years: 0.01,
        };
        assert!(calculate(&input).is_err());
    }
}
