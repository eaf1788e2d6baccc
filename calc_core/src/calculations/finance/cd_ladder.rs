//! # CD Ladder
//!
//! Splits a deposit evenly across `rungs` certificates of deposit with
//! terms of 1, 2, ... `rungs` years. Longer terms usually pay more, so the
//! rate climbs by `rate_step` per rung.
//!
//! ```text
//! amountᵢ = deposit / rungs
//! rateᵢ   = start_rate + rate_step · (i − 1)
//! valueᵢ  = amountᵢ · (1 + rateᵢ/m)^(m · i)
//! APYᵢ    = (1 + rateᵢ/m)^m − 1
//! ```
//!
//! where m is the number of compounding periods per year.

use serde::{Deserialize, Serialize};

use crate::calculations::Calculator;
use crate::errors::{CalcError, CalcResult};
use crate::form::{FieldSpec, FormValues};
use crate::format::{currency, percent};
use crate::report::{Report, ReportTable};
use crate::validation::{ensure_positive, ensure_range};

pub const MAX_RUNGS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CdLadderInput {
    pub deposit: f64,
    pub rungs: u32,
    /// Annual rate of the 1-year rung, in percent
    pub start_rate: f64,
    /// Added to the rate for each longer rung, in percent
    pub rate_step: f64,
    pub compounds_per_year: u32,
}

impl CdLadderInput {
    pub fn validate(&self) -> CalcResult<()> {
        ensure_positive("deposit", self.deposit)?;
        if self.rungs == 0 || self.rungs > MAX_RUNGS {
            return Err(CalcError::invalid_input(
                "rungs",
                self.rungs.to_string(),
                format!("Number of rungs must be between 1 and {}", MAX_RUNGS),
            ));
        }
        ensure_range("start_rate", self.start_rate, 0.0, 100.0)?;
        ensure_range("rate_step", self.rate_step, -10.0, 10.0)?;
        let top_rate = self.start_rate + self.rate_step * (self.rungs - 1) as f64;
        if top_rate < 0.0 {
            return Err(CalcError::invalid_input(
                "rate_step",
                self.rate_step.to_string(),
                "The step makes a later rung's rate negative",
            ));
        }
        if self.compounds_per_year == 0 || self.compounds_per_year > 365 {
            return Err(CalcError::invalid_input(
                "compounds_per_year",
                self.compounds_per_year.to_string(),
                "Compounding must be between 1 and 365 times per year",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rung {
    pub term_years: u32,
    pub amount: f64,
    pub rate: f64,
    pub apy: f64,
    pub maturity_value: f64,
    pub interest: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CdLadderResult {
    pub rungs: Vec<Rung>,
    pub total_maturity_value: f64,
    pub total_interest: f64,
    /// Mean APY across the rungs, in percent
    pub average_apy: f64,
}

pub fn calculate(input: &CdLadderInput) -> CalcResult<CdLadderResult> {
    input.validate()?;
    let m = input.compounds_per_year as f64;
    let amount = input.deposit / input.rungs as f64;

    let rungs: Vec<Rung> = (1..=input.rungs)
        .map(|term| {
            let rate = input.start_rate + input.rate_step * (term - 1) as f64;
            let periodic = 1.0 + rate / 100.0 / m;
            let maturity_value = amount * periodic.powf(m * term as f64);
            Rung {
                term_years: term,
                amount,
                rate,
                apy: (periodic.powf(m) - 1.0) * 100.0,
                maturity_value,
                interest: maturity_value - amount,
            }
        })
        .collect();

    let total_maturity_value = rungs.iter().map(|r| r.maturity_value).sum();
    let total_interest = rungs.iter().map(|r| r.interest).sum();
    let average_apy = rungs.iter().map(|r| r.apy).sum::<f64>() / rungs.len() as f64;

    Ok(CdLadderResult {
        rungs,
        total_maturity_value,
        total_interest,
        average_apy,
    })
}

pub struct CdLadder;

impl Calculator for CdLadder {
    type Input = CdLadderInput;
    type Output = CdLadderResult;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::number("deposit", "Total deposit").unit("$").placeholder("25000"),
        FieldSpec::integer("rungs", "Rungs").placeholder("5"),
        FieldSpec::number("start_rate", "1-year rate").unit("%").placeholder("4.0"),
        FieldSpec::number("rate_step", "Rate step per rung").unit("%").placeholder("0.25").optional(),
        FieldSpec::integer("compounds_per_year", "Compounds per year").placeholder("12").optional(),
    ];

    fn parse(form: &FormValues) -> CalcResult<CdLadderInput> {
        Ok(CdLadderInput {
            deposit: form.required_number("deposit")?,
            rungs: form.required_count("rungs")?,
            start_rate: form.required_number("start_rate")?,
            rate_step: form.number_or("rate_step", 0.0)?,
            compounds_per_year: match form.optional_integer("compounds_per_year")? {
                Some(n) => u32::try_from(n).map_err(|_| {
                    CalcError::invalid_input("compounds_per_year", n.to_string(), "Must be a positive whole number")
                })?,
                None => 12,
            },
        })
    }

    fn calculate(input: &CdLadderInput) -> CalcResult<CdLadderResult> {
        calculate(input)
    }

    fn report(output: &CdLadderResult) -> Report {
        let mut table = ReportTable::new("Ladder", ["Term", "Deposit", "Rate", "APY", "At maturity"]);
        for rung in &output.rungs {
            table.push_row([
                format!("{} yr", rung.term_years),
                currency(rung.amount, "$"),
                percent(rung.rate, 2),
                percent(rung.apy, 3),
                currency(rung.maturity_value, "$"),
            ]);
        }
        Report::new("Total at maturity", currency(output.total_maturity_value, "$"))
            .line("Total interest", currency(output.total_interest, "$"))
            .line("Average APY", percent(output.average_apy, 3))
            .table(table)
            .note("As each CD matures, reinvesting it at the longest term keeps one rung maturing every year.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ladder(rungs: u32, start: f64, step: f64, m: u32) -> CdLadderInput {
        CdLadderInput {
            deposit: 10_000.0,
            rungs,
            start_rate: start,
            rate_step: step,
            compounds_per_year: m,
        }
    }

    #[test]
    fn test_annual_compounding() {
        let result = calculate(&ladder(2, 5.0, 1.0, 1)).unwrap();
        assert_eq!(result.rungs.len(), 2);
        assert!((result.rungs[0].maturity_value - 5250.0).abs() < 1e-9);
        // 5000 * 1.06^2
        assert!((result.rungs[1].maturity_value - 5618.0).abs() < 1e-9);
        assert!((result.total_interest - 868.0).abs() < 1e-9);
        assert!((result.rungs[1].apy - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_monthly_apy_exceeds_rate() {
        let result = calculate(&ladder(1, 5.0, 0.0, 12)).unwrap();
        assert!((result.rungs[0].apy - 5.116_189_788).abs() < 1e-6);
    }

    #[test]
    fn test_zero_rate_returns_deposit() {
        let result = calculate(&ladder(4, 0.0, 0.0, 12)).unwrap();
        assert!((result.total_maturity_value - 10_000.0).abs() < 1e-9);
        assert_eq!(result.total_interest, 0.0);
    }

    #[test]
    fn test_validation() {
        assert!(calculate(&ladder(0, 4.0, 0.0, 12)).is_err());
        assert!(calculate(&ladder(11, 4.0, 0.0, 12)).is_err());
        assert!(calculate(&ladder(5, 1.0, -1.0, 12)).is_err());
        assert!(calculate(&ladder(5, 4.0, 0.0, 0)).is_err());
    }

    #[test]
    fn test_form_defaults() {
        let form = FormValues::new()
            .with("deposit", "$25,000")
            .with("rungs", "5")
            .with("start_rate", "4");
        let parsed = CdLadder::parse(&form).unwrap();
        assert_eq!(parsed.compounds_per_year, 12);
        assert_eq!(parsed.rate_step, 0.0);
        assert_eq!(parsed.deposit, 25_000.0);
    }
}
