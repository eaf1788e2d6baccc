//! # Dice Probability
//!
//! Exact distribution of the sum of `dice` fair dice with `sides` faces,
//! built by repeated convolution of the single-die distribution:
//!
//! ```text
//! P₁(s) = 1/sides,  s = 1..sides
//! Pₖ(s) = Σ_f Pₖ₋₁(s − f) / sides
//! ```
//!
//! Probabilities are accumulated as f64 directly, so large pools do not
//! overflow the way raw outcome counts would.

use serde::{Deserialize, Serialize};

use crate::calculations::Calculator;
use crate::errors::{CalcError, CalcResult};
use crate::form::{FieldSpec, FormValues};
use crate::format::percent;
use crate::report::Report;

pub const MAX_DICE: u32 = 50;
pub const MAX_SIDES: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceInput {
    pub dice: u32,
    pub sides: u32,
    pub target: u32,
}

impl DiceInput {
    pub fn validate(&self) -> CalcResult<()> {
        if self.dice == 0 || self.dice > MAX_DICE {
            return Err(CalcError::invalid_input(
                "dice",
                self.dice.to_string(),
                format!("Number of dice must be between 1 and {}", MAX_DICE),
            ));
        }
        if self.sides < 2 || self.sides > MAX_SIDES {
            return Err(CalcError::invalid_input(
                "sides",
                self.sides.to_string(),
                format!("Sides must be between 2 and {}", MAX_SIDES),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiceResult {
    pub exactly: f64,
    pub at_least: f64,
    pub at_most: f64,
    pub min_sum: u32,
    pub max_sum: u32,
    pub expected: f64,
}

/// `dist[s]` is the probability that the dice sum to `s`
fn distribution(dice: u32, sides: u32) -> Vec<f64> {
    let sides_f = sides as f64;
    let mut dist = vec![1.0];
    for _ in 0..dice {
        let mut next = vec![0.0; dist.len() + sides as usize];
        for (sum, p) in dist.iter().enumerate() {
            if *p == 0.0 {
                continue;
            }
            for face in 1..=sides as usize {
                next[sum + face] += p / sides_f;
            }
        }
        dist = next;
    }
    dist
}

pub fn calculate(input: &DiceInput) -> CalcResult<DiceResult> {
    input.validate()?;
    let dist = distribution(input.dice, input.sides);
    let t = input.target as usize;

    let exactly = dist.get(t).copied().unwrap_or(0.0);
    let at_most: f64 = dist.iter().take(t + 1).sum();
    let at_least: f64 = dist.iter().skip(t).sum();

    Ok(DiceResult {
        exactly,
        at_least: at_least.min(1.0),
        at_most: at_most.min(1.0),
        min_sum: input.dice,
        max_sum: input.dice * input.sides,
        expected: input.dice as f64 * (input.sides as f64 + 1.0) / 2.0,
    })
}

pub struct DiceProbability;

impl Calculator for DiceProbability {
    type Input = DiceInput;
    type Output = DiceResult;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::integer("dice", "Number of dice").placeholder("2"),
        FieldSpec::integer("sides", "Sides per die").placeholder("6"),
        FieldSpec::integer("target", "Target sum").placeholder("7"),
    ];

    fn parse(form: &FormValues) -> CalcResult<DiceInput> {
        Ok(DiceInput {
            dice: form.required_count("dice")?,
            sides: form.required_count("sides")?,
            target: form.required_count("target")?,
        })
    }

    fn calculate(input: &DiceInput) -> CalcResult<DiceResult> {
        calculate(input)
    }

    fn report(output: &DiceResult) -> Report {
        let report = Report::new("P(sum = target)", percent(output.exactly * 100.0, 4))
            .line("P(sum ≥ target)", percent(output.at_least * 100.0, 4))
            .line("P(sum ≤ target)", percent(output.at_most * 100.0, 4))
            .line("Possible sums", format!("{}–{}", output.min_sum, output.max_sum))
            .line("Expected sum", format!("{}", output.expected));
        if output.exactly == 0.0 {
            report.note("The target cannot be rolled with these dice.")
        } else {
            report
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roll(dice: u32, sides: u32, target: u32) -> DiceResult {
        calculate(&DiceInput { dice, sides, target }).unwrap()
    }

    #[test]
    fn test_two_d6_seven() {
        let result = roll(2, 6, 7);
        assert!((result.exactly - 6.0 / 36.0).abs() < 1e-12);
        assert!((result.at_least - 21.0 / 36.0).abs() < 1e-12);
        assert!((result.at_most - 21.0 / 36.0).abs() < 1e-12);
        assert_eq!(result.expected, 7.0);
    }

    #[test]
    fn test_single_die() {
        let result = roll(1, 20, 20);
        assert!((result.exactly - 0.05).abs() < 1e-12);
        assert!((result.at_most - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_unreachable_targets() {
        let low = roll(3, 6, 2);
        assert_eq!(low.exactly, 0.0);
        assert!((low.at_least - 1.0).abs() < 1e-12);
        let high = roll(3, 6, 19);
        assert_eq!(high.exactly, 0.0);
        assert_eq!(high.at_least, 0.0);
        assert!((high.at_most - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_distribution_sums_to_one() {
        let total: f64 = distribution(50, 100).iter().sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_limits() {
        assert!(calculate(&DiceInput { dice: 0, sides: 6, target: 1 }).is_err());
        assert!(calculate(&DiceInput { dice: 1, sides: 1, target: 1 }).is_err());
        assert!(calculate(&DiceInput { dice: 51, sides: 6, target: 1 }).is_err());
    }
}
