//! # Drop Chance
//!
//! Independent attempts at a drop with probability p each:
//!
//! ```text
//! P(at least one in n) = 1 − (1 − p)^n
//! attempts for q       = ⌈ln(1 − q) / ln(1 − p)⌉
//! ```
//!
//! `ln(1 − p)` goes through `ln_1p` and the complement through `exp_m1`;
//! `1.0 - p` rounds to exactly 1 for drop rates below about 1e-14 %.

use serde::{Deserialize, Serialize};

use crate::calculations::Calculator;
use crate::errors::{CalcError, CalcResult};
use crate::form::{FieldSpec, FormValues};
use crate::format::{grouped, percent};
use crate::report::Report;

/// Confidence levels reported as "attempts needed"
const CONFIDENCE: [f64; 3] = [0.5, 0.9, 0.99];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DropChanceInput {
    /// Percent, in (0, 100]
    pub drop_rate: f64,
    pub attempts: u32,
}

impl DropChanceInput {
    pub fn validate(&self) -> CalcResult<()> {
        if self.drop_rate <= 0.0 || self.drop_rate > 100.0 {
            return Err(CalcError::invalid_input(
                "drop_rate",
                self.drop_rate.to_string(),
                "Drop rate must be greater than 0% and at most 100%",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropChanceResult {
    /// Probability of at least one drop, 0..1
    pub at_least_one: f64,
    pub expected_drops: f64,
    /// (confidence, attempts needed)
    pub attempts_needed: Vec<(f64, u64)>,
}

pub fn calculate(input: &DropChanceInput) -> CalcResult<DropChanceResult> {
    input.validate()?;
    let p = input.drop_rate / 100.0;
    let attempts = input.attempts as f64;

    if p >= 1.0 {
        return Ok(DropChanceResult {
            at_least_one: if input.attempts == 0 { 0.0 } else { 1.0 },
            expected_drops: attempts,
            attempts_needed: CONFIDENCE.iter().map(|q| (*q, 1)).collect(),
        });
    }

    // ln(1 − p), exact for tiny p
    let log_miss = (-p).ln_1p();
    let attempts_needed = CONFIDENCE
        .iter()
        .map(|q| {
            let n = ((-q).ln_1p() / log_miss).ceil().max(1.0);
            if n >= u64::MAX as f64 {
                return Err(CalcError::domain(
                    "drop chance",
                    "the drop rate is too small to count the attempts needed",
                ));
            }
            Ok((*q, n as u64))
        })
        .collect::<CalcResult<Vec<_>>>()?;

    Ok(DropChanceResult {
        at_least_one: -(log_miss * attempts).exp_m1(),
        expected_drops: p * attempts,
        attempts_needed,
    })
}

pub struct DropChance;

impl Calculator for DropChance {
    type Input = DropChanceInput;
    type Output = DropChanceResult;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::number("drop_rate", "Drop rate").unit("%").placeholder("1"),
        FieldSpec::integer("attempts", "Attempts").placeholder("100"),
    ];

    fn parse(form: &FormValues) -> CalcResult<DropChanceInput> {
        Ok(DropChanceInput {
            drop_rate: form.required_number("drop_rate")?,
            attempts: form.required_count("attempts")?,
        })
    }

    fn calculate(input: &DropChanceInput) -> CalcResult<DropChanceResult> {
        calculate(input)
    }

    fn report(output: &DropChanceResult) -> Report {
        let mut report = Report::new("Chance of at least one drop", percent(output.at_least_one * 100.0, 2))
            .line("Expected drops", format!("{:.2}", output.expected_drops));
        for (q, n) in &output.attempts_needed {
            report = report.line(format!("Attempts for {:.0}% chance", q * 100.0), grouped(*n as f64, 0));
        }
        report
    }
}
