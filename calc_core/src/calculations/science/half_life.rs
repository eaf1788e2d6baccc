//! # Half-Life Decay
//!
//! ```text
//! N(t) = N₀ · (½)^(t / t½)        λ = ln 2 / t½
//! ```
//!
//! Time units are whatever the user enters, as long as half-life and
//! elapsed time agree.

use serde::{Deserialize, Serialize};

use crate::calculations::Calculator;
use crate::errors::CalcResult;
use crate::form::{FieldSpec, FormValues};
use crate::format::{compact, percent};
use crate::report::Report;
use crate::validation::{ensure_non_negative, ensure_positive};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HalfLifeInput {
    pub initial_amount: f64,
    pub half_life: f64,
    pub elapsed: f64,
}

impl HalfLifeInput {
    pub fn validate(&self) -> CalcResult<()> {
        ensure_positive("initial_amount", self.initial_amount)?;
        ensure_positive("half_life", self.half_life)?;
        ensure_non_negative("elapsed", self.elapsed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HalfLifeResult {
    pub remaining: f64,
    pub decayed: f64,
    /// Remaining share, 0..=1
    pub fraction_remaining: f64,
    pub half_lives_elapsed: f64,
    /// Per time unit
    pub decay_constant: f64,
}

pub fn calculate(input: &HalfLifeInput) -> CalcResult<HalfLifeResult> {
    input.validate()?;
    let half_lives_elapsed = input.elapsed / input.half_life;
    let fraction_remaining = 0.5f64.powf(half_lives_elapsed);
    let remaining = input.initial_amount * fraction_remaining;
    Ok(HalfLifeResult {
        remaining,
        decayed: input.initial_amount - remaining,
        fraction_remaining,
        half_lives_elapsed,
        decay_constant: std::f64::consts::LN_2 / input.half_life,
    })
}

pub struct HalfLife;

impl Calculator for HalfLife {
    type Input = HalfLifeInput;
    type Output = HalfLifeResult;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::number("initial_amount", "Initial amount").placeholder("100"),
        FieldSpec::number("half_life", "Half-life").placeholder("5730"),
        FieldSpec::number("elapsed", "Elapsed time").placeholder("10000"),
    ];

    fn parse(form: &FormValues) -> CalcResult<HalfLifeInput> {
        Ok(HalfLifeInput {
            initial_amount: form.required_number("initial_amount")?,
            half_life: form.required_number("half_life")?,
            elapsed: form.required_number("elapsed")?,
        })
    }

    fn calculate(input: &HalfLifeInput) -> CalcResult<HalfLifeResult> {
        calculate(input)
    }

    fn report(output: &HalfLifeResult) -> Report {
        Report::new("Remaining", compact(output.remaining, 4))
            .line("Decayed", compact(output.decayed, 4))
            .line("Fraction remaining", percent(output.fraction_remaining * 100.0, 2))
            .line("Half-lives elapsed", compact(output.half_lives_elapsed, 3))
            .line("Decay constant (λ)", format!("{:.4e}", output.decay_constant))
            .note("Half-life and elapsed time must use the same unit.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_half_lives_leaves_a_quarter() {
        let result = calculate(&HalfLifeInput {
            initial_amount: 80.0,
            half_life: 10.0,
            elapsed: 20.0,
        })
        .unwrap();
        assert_eq!(result.remaining, 20.0);
        assert_eq!(result.decayed, 60.0);
        assert_eq!(result.half_lives_elapsed, 2.0);
    }

    #[test]
    fn test_no_time_no_decay() {
        let result = calculate(&HalfLifeInput {
            initial_amount: 5.0,
            half_life: 3.0,
            elapsed: 0.0,
        })
        .unwrap();
        assert_eq!(result.remaining, 5.0);
        assert!((result.decay_constant - 0.231_049).abs() < 1e-6);
    }

    #[test]
    fn test_zero_half_life_rejected() {
        assert!(calculate(&HalfLifeInput {
            initial_amount: 5.0,
            half_life: 0.0,
            elapsed: 1.0
        })
        .is_err());
    }
}
