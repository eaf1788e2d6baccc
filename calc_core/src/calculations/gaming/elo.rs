//! # Elo Rating
//!
//! ```text
//! E  = 1 / (1 + 10^((R_opp − R) / 400))
//! R' = R + K · (S − E)        S = 1 win, ½ draw, 0 loss
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::Calculator;
use crate::errors::CalcResult;
use crate::form::{Choice, FieldSpec, FormValues};
use crate::format::{fixed, percent};
use crate::report::Report;
use crate::validation::ensure_range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchResult {
    Win,
    Draw,
    Loss,
}

impl MatchResult {
    pub const CHOICES: &'static [Choice] = &[
        Choice::new("win", "Win"),
        Choice::new("draw", "Draw"),
        Choice::new("loss", "Loss"),
    ];

    fn from_choice(value: &str) -> Self {
        match value {
            "win" => MatchResult::Win,
            "draw" => MatchResult::Draw,
            _ => MatchResult::Loss,
        }
    }

    pub fn score(&self) -> f64 {
        match self {
            MatchResult::Win => 1.0,
            MatchResult::Draw => 0.5,
            MatchResult::Loss => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EloInput {
    pub rating: f64,
    pub opponent_rating: f64,
    pub result: MatchResult,
    #[serde(default = "default_k")]
    pub k_factor: f64,
}

fn default_k() -> f64 {
    32.0
}

impl EloInput {
    pub fn validate(&self) -> CalcResult<()> {
        ensure_range("rating", self.rating, 0.0, 4000.0)?;
        ensure_range("opponent_rating", self.opponent_rating, 0.0, 4000.0)?;
        ensure_range("k_factor", self.k_factor, 1.0, 100.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EloResult {
    /// Probability of winning, 0..1
    pub expected_score: f64,
    pub new_rating: f64,
    pub change: f64,
}

pub fn calculate(input: &EloInput) -> CalcResult<EloResult> {
    input.validate()?;
    let expected_score = 1.0 / (1.0 + 10f64.powf((input.opponent_rating - input.rating) / 400.0));
    let change = input.k_factor * (input.result.score() - expected_score);
    Ok(EloResult {
        expected_score,
        new_rating: input.rating + change,
        change,
    })
}

pub struct EloRating;

impl Calculator for EloRating {
    type Input = EloInput;
    type Output = EloResult;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::number("rating", "Your rating").placeholder("1500"),
        FieldSpec::number("opponent_rating", "Opponent rating").placeholder("1600"),
        FieldSpec::choice("result", "Result", MatchResult::CHOICES),
        FieldSpec::number("k_factor", "K-factor").placeholder("32").optional(),
    ];

    fn parse(form: &FormValues) -> CalcResult<EloInput> {
        Ok(EloInput {
            rating: form.required_number("rating")?,
            opponent_rating: form.required_number("opponent_rating")?,
            result: MatchResult::from_choice(form.required_choice("result", MatchResult::CHOICES)?),
            k_factor: form.number_or("k_factor", default_k())?,
        })
    }

    fn calculate(input: &EloInput) -> CalcResult<EloResult> {
        calculate(input)
    }

    fn report(output: &EloResult) -> Report {
        let sign = if output.change >= 0.0 { "+" } else { "" };
        Report::new("New rating", fixed(output.new_rating, 0))
            .line("Change", format!("{}{}", sign, fixed(output.change, 1)))
            .line("Expected score", percent(output.expected_score * 100.0, 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(rating: f64, opponent: f64, result: MatchResult) -> EloResult {
        calculate(&EloInput {
            rating,
            opponent_rating: opponent,
            result,
            k_factor: 32.0,
        })
        .unwrap()
    }

    #[test]
    fn test_even_match() {
        let win = play(1500.0, 1500.0, MatchResult::Win);
        assert_eq!(win.expected_score, 0.5);
        assert_eq!(win.change, 16.0);
        let draw = play(1500.0, 1500.0, MatchResult::Draw);
        assert_eq!(draw.change, 0.0);
    }

    #[test]
    fn test_upset_win() {
        let result = play(1500.0, 1900.0, MatchResult::Win);
        // E = 1/11
        assert!((result.expected_score - 1.0 / 11.0).abs() < 1e-12);
        assert!((result.change - 32.0 * 10.0 / 11.0).abs() < 1e-9);
    }

    #[test]
    fn test_result_is_required() {
        let form = FormValues::new().with("rating", "1500").with("opponent_rating", "1500");
        assert_eq!(EloRating::parse(&form).unwrap_err().field(), Some("result"));
    }
}
