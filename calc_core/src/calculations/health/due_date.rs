//! # Pregnancy Due Date
//!
//! Naegele's rule: the estimated due date is 280 days (40 weeks) after the
//! first day of the last menstrual period (LMP). Conception is estimated at
//! LMP + 14 days.
//!
//! Gestational age is only reported when an "as of" date is given, which
//! keeps the calculation independent of the system clock.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calculations::Calculator;
use crate::errors::{CalcError, CalcResult};
use crate::form::{FieldSpec, FormValues};
use crate::report::Report;

pub const PREGNANCY_DAYS: u64 = 280;
const CONCEPTION_DAYS: u64 = 14;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DueDateInput {
    pub last_period: NaiveDate,
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

impl DueDateInput {
    pub fn validate(&self) -> CalcResult<()> {
        if let Some(as_of) = self.as_of {
            if as_of < self.last_period {
                return Err(CalcError::invalid_input(
                    "as_of",
                    as_of.to_string(),
                    "Must not be before the last menstrual period",
                ));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestationalAge {
    pub weeks: i64,
    pub days: i64,
    pub trimester: u8,
    /// Negative once the due date has passed
    pub days_remaining: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DueDateResult {
    pub due_date: NaiveDate,
    pub conception_date: NaiveDate,
    pub gestational_age: Option<GestationalAge>,
}

fn add_days(date: NaiveDate, days: u64) -> CalcResult<NaiveDate> {
    date.checked_add_days(Days::new(days))
        .ok_or_else(|| CalcError::invalid_input("last_period", date.to_string(), "Date is out of range"))
}

pub fn calculate(input: &DueDateInput) -> CalcResult<DueDateResult> {
    input.validate()?;
    let due_date = add_days(input.last_period, PREGNANCY_DAYS)?;
    let conception_date = add_days(input.last_period, CONCEPTION_DAYS)?;

    let gestational_age = input.as_of.map(|as_of| {
        let elapsed = (as_of - input.last_period).num_days();
        let weeks = elapsed / 7;
        GestationalAge {
            weeks,
            days: elapsed % 7,
            trimester: match weeks {
                0..=12 => 1,
                13..=26 => 2,
                _ => 3,
            },
            days_remaining: (due_date - as_of).num_days(),
        }
    });

    Ok(DueDateResult {
        due_date,
        conception_date,
        gestational_age,
    })
}

pub struct DueDate;

impl Calculator for DueDate {
    type Input = DueDateInput;
    type Output = DueDateResult;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::date("last_period", "First day of last period").placeholder("2025-01-15"),
        FieldSpec::date("as_of", "As of date").placeholder("2025-04-01").optional(),
    ];

    fn parse(form: &FormValues) -> CalcResult<DueDateInput> {
        Ok(DueDateInput {
            last_period: form.required_date("last_period")?,
            as_of: form.optional_date("as_of")?,
        })
    }

    fn calculate(input: &DueDateInput) -> CalcResult<DueDateResult> {
        calculate(input)
    }

    fn report(output: &DueDateResult) -> Report {
        let report = Report::new("Estimated due date", output.due_date.format("%B %-d, %Y").to_string())
            .line("Estimated conception", output.conception_date.format("%B %-d, %Y").to_string());
        let Some(age) = output.gestational_age else {
            return report;
        };
        let report = report
            .line("Gestational age", format!("{} weeks, {} days", age.weeks, age.days))
            .line("Trimester", age.trimester.to_string());
        let report = if age.days_remaining >= 0 {
            report.line("Days until due date", age.days_remaining.to_string())
        } else {
            report.line("Days past due date", (-age.days_remaining).to_string())
        };
        report.note("Only about 1 in 25 babies arrive on the estimated due date.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_due_date_is_280_days_later() {
        let result = calculate(&DueDateInput {
            last_period: date(2025, 1, 1),
            as_of: None,
        })
        .unwrap();
        assert_eq!(result.due_date, date(2025, 10, 8));
        assert_eq!(result.conception_date, date(2025, 1, 15));
        assert_eq!(result.gestational_age, None);
    }

    #[test]
    fn test_gestational_age() {
        let result = calculate(&DueDateInput {
            last_period: date(2025, 1, 1),
            as_of: Some(date(2025, 4, 1)),
        })
        .unwrap();
        let age = result.gestational_age.unwrap();
        // 90 days
        assert_eq!((age.weeks, age.days), (12, 6));
        assert_eq!(age.trimester, 1);
        assert_eq!(age.days_remaining, 190);
    }

    #[test]
    fn test_as_of_before_lmp_rejected() {
        let input = DueDateInput {
            last_period: date(2025, 3, 1),
            as_of: Some(date(2025, 2, 1)),
        };
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_form_requires_iso_dates() {
        let form = FormValues::new().with("last_period", "01/15/2025");
        assert!(DueDate::parse(&form).is_err());
        let form = FormValues::new().with("last_period", "2025-01-15");
        assert!(DueDate::parse(&form).is_ok());
    }

    #[test]
    fn test_report_formats_dates() {
        let result = calculate(&DueDateInput {
            last_period: date(2025, 1, 1),
            as_of: None,
        })
        .unwrap();
        assert_eq!(DueDate::report(&result).headline.value, "October 8, 2025");
    }
}
