//! # Percentage
//!
//! Three everyday questions, selected by `mode`:
//!
//! ```text
//! of:      p% of v            = v · p / 100
//! what:    x is what % of y   = x / y · 100
//! change:  % change from x→y  = (y − x) / |x| · 100
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::Calculator;
use crate::errors::{CalcError, CalcResult};
use crate::form::{Choice, FieldSpec, FormValues};
use crate::format::compact;
use crate::report::Report;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PercentageMode {
    /// `first`% of `second`
    PercentOf,
    /// `first` is what percent of `second`
    WhatPercent,
    /// Percent change from `first` to `second`
    Change,
}

impl PercentageMode {
    pub const CHOICES: &'static [Choice] = &[
        Choice::new("of", "X% of Y"),
        Choice::new("what", "X is what % of Y"),
        Choice::new("change", "% change from X to Y"),
    ];

    fn from_choice(value: &str) -> Self {
        match value {
            "what" => PercentageMode::WhatPercent,
            "change" => PercentageMode::Change,
            _ => PercentageMode::PercentOf,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentageInput {
    pub mode: PercentageMode,
    pub first: f64,
    pub second: f64,
}

impl PercentageInput {
    pub fn validate(&self) -> CalcResult<()> {
        match self.mode {
            PercentageMode::WhatPercent if self.second == 0.0 => {
                Err(CalcError::domain("percentage", "cannot take a percentage of zero"))
            }
            PercentageMode::Change if self.first == 0.0 => {
                Err(CalcError::domain("percent change", "change from zero is undefined"))
            }
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentageResult {
    pub mode: PercentageMode,
    pub value: f64,
    /// Absolute difference, for `Change`
    pub difference: Option<f64>,
}

pub fn calculate(input: &PercentageInput) -> CalcResult<PercentageResult> {
    input.validate()?;
    let PercentageInput { mode, first, second } = *input;
    let (value, difference) = match mode {
        PercentageMode::PercentOf => (second * first / 100.0, None),
        PercentageMode::WhatPercent => (first / second * 100.0, None),
        PercentageMode::Change => ((second - first) / first.abs() * 100.0, Some(second - first)),
    };
    Ok(PercentageResult { mode, value, difference })
}

pub struct Percentage;

impl Calculator for Percentage {
    type Input = PercentageInput;
    type Output = PercentageResult;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::choice("mode", "Question", PercentageMode::CHOICES),
        FieldSpec::number("first", "X").placeholder("15"),
        FieldSpec::number("second", "Y").placeholder("200"),
    ];

    fn parse(form: &FormValues) -> CalcResult<PercentageInput> {
        Ok(PercentageInput {
            mode: PercentageMode::from_choice(form.choice_or("mode", PercentageMode::CHOICES, "of")?),
            first: form.required_number("first")?,
            second: form.required_number("second")?,
        })
    }

    fn calculate(input: &PercentageInput) -> CalcResult<PercentageResult> {
        calculate(input)
    }

    fn report(output: &PercentageResult) -> Report {
        match output.mode {
            PercentageMode::PercentOf => Report::new("Result", compact(output.value, 6)),
            PercentageMode::WhatPercent => Report::new("Percentage", format!("{}%", compact(output.value, 4))),
            PercentageMode::Change => {
                let direction = if output.value >= 0.0 { "Increase" } else { "Decrease" };
                Report::new(direction, format!("{}%", compact(output.value.abs(), 4)))
                    .line("Difference", compact(output.difference.unwrap_or_default(), 6))
            }
        }
    }
}
