//! # WASPI Compensation (estimate)
//!
//! Women born between 6 April 1950 and 5 April 1960 saw their State Pension
//! age rise from 60. This calculator checks eligibility by date of birth,
//! estimates how many months the pension was delayed and maps the delay
//! onto the £1,000 to £2,950 band recommended by the Ombudsman.
//!
//! ```text
//! m      = whole "pension months" born after 6 April 1950 (each runs 6th → 5th)
//! delay  = min(m + 1, 72) months
//! amount = £1,000 + delay / 72 · (£2,950 − £1,000), rounded to the pound
//! ```
//!
//! The delay model is a simplification of the 1995 and 2011 Pensions Acts.
//! The result is indicative only.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calculations::Calculator;
use crate::errors::{CalcError, CalcResult};
use crate::form::{FieldSpec, FormValues};
use crate::format::currency;
use crate::report::Report;

pub const MIN_COMPENSATION: f64 = 1_000.0;
pub const MAX_COMPENSATION: f64 = 2_950.0;
pub const MAX_DELAY_MONTHS: u32 = 72;

/// Pension age before the changes
const ORIGINAL_PENSION_AGE_MONTHS: u32 = 60 * 12;

fn first_affected() -> CalcResult<NaiveDate> {
    NaiveDate::from_ymd_opt(1950, 4, 6).ok_or_else(|| CalcError::Internal {
        message: "invalid eligibility start date".to_string(),
    })
}

fn last_affected() -> CalcResult<NaiveDate> {
    NaiveDate::from_ymd_opt(1960, 4, 5).ok_or_else(|| CalcError::Internal {
        message: "invalid eligibility end date".to_string(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaspiInput {
    pub date_of_birth: NaiveDate,
}

impl WaspiInput {
    pub fn validate(&self) -> CalcResult<()> {
        if self.date_of_birth.year() < 1900 {
            return Err(CalcError::invalid_input(
                "date_of_birth",
                self.date_of_birth.to_string(),
                "Date of birth is too early",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaspiResult {
    pub eligible: bool,
    /// State Pension date under the old rules (60th birthday)
    pub original_pension_date: Option<NaiveDate>,
    /// Estimated State Pension date after the changes
    pub new_pension_date: Option<NaiveDate>,
    pub delay_months: u32,
    /// Indicative compensation in pounds, for eligible women
    pub compensation: Option<f64>,
}

/// Months in the 6th-to-5th cycle between 6 April 1950 and `dob`
fn pension_months_after_start(dob: NaiveDate) -> i32 {
    let mut months = (dob.year() - 1950) * 12 + dob.month0() as i32 - 3;
    if dob.day() < 6 {
        months -= 1;
    }
    months
}

pub fn calculate(input: &WaspiInput) -> CalcResult<WaspiResult> {
    input.validate()?;
    let dob = input.date_of_birth;
    let eligible = dob >= first_affected()? && dob <= last_affected()?;
    if !eligible {
        return Ok(WaspiResult {
            eligible,
            original_pension_date: None,
            new_pension_date: None,
            delay_months: 0,
            compensation: None,
        });
    }

    let months_after = pension_months_after_start(dob).max(0) as u32;
    let delay_months = (months_after + 1).min(MAX_DELAY_MONTHS);

    let original = dob.checked_add_months(Months::new(ORIGINAL_PENSION_AGE_MONTHS));
    let new = original.and_then(|d| d.checked_add_months(Months::new(delay_months)));

    let fraction = delay_months as f64 / MAX_DELAY_MONTHS as f64;
    let compensation = (MIN_COMPENSATION + fraction * (MAX_COMPENSATION - MIN_COMPENSATION)).round();

    Ok(WaspiResult {
        eligible,
        original_pension_date: original,
        new_pension_date: new,
        delay_months,
        compensation: Some(compensation),
    })
}

pub struct WaspiCompensation;

impl Calculator for WaspiCompensation {
    type Input = WaspiInput;
    type Output = WaspiResult;

    const FIELDS: &'static [FieldSpec] = &[FieldSpec::date("date_of_birth", "Date of birth").placeholder("1955-06-15")];

    fn parse(form: &FormValues) -> CalcResult<WaspiInput> {
        Ok(WaspiInput {
            date_of_birth: form.required_date("date_of_birth")?,
        })
    }

    fn calculate(input: &WaspiInput) -> CalcResult<WaspiResult> {
        calculate(input)
    }

    fn report(output: &WaspiResult) -> Report {
        let Some(amount) = output.compensation else {
            return Report::new("Eligible", "No")
                .note("Only women born between 6 April 1950 and 5 April 1960 are affected.");
        };
        let mut report = Report::new("Indicative compensation", currency(amount, "£"))
            .line("Eligible", "Yes")
            .line("Estimated delay", format!("{} months", output.delay_months));
        if let Some(date) = output.original_pension_date {
            report = report.line("Pension age under old rules", date.to_string());
        }
        if let Some(date) = output.new_pension_date {
            report = report.line("Estimated new pension date", date.to_string());
        }
        report.note("Indicative only: a simplified model, not an official entitlement or offer.")
    }
}
