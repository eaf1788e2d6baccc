//! # XP to Level
//!
//! A power-curve progression where leveling up from level L costs
//!
//! ```text
//! xp(L) = base · L^growth
//! ```
//!
//! and the XP between two levels is the sum over every level in between.

use serde::{Deserialize, Serialize};

use crate::calculations::Calculator;
use crate::errors::{CalcError, CalcResult};
use crate::form::{FieldSpec, FormValues};
use crate::format::grouped;
use crate::report::{Report, ReportTable};
use crate::validation::{ensure_finite, ensure_positive, ensure_range};

pub const MAX_LEVEL: u32 = 1000;
const TABLE_ROWS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct XpInput {
    pub current_level: u32,
    pub target_level: u32,
    pub base_xp: f64,
    #[serde(default = "default_growth")]
    pub growth: f64,
}

fn default_growth() -> f64 {
    1.5
}

impl XpInput {
    pub fn validate(&self) -> CalcResult<()> {
        if self.current_level == 0 || self.current_level > MAX_LEVEL {
            return Err(CalcError::invalid_input(
                "current_level",
                self.current_level.to_string(),
                format!("Level must be between 1 and {}", MAX_LEVEL),
            ));
        }
        if self.target_level <= self.current_level || self.target_level > MAX_LEVEL {
            return Err(CalcError::invalid_input(
                "target_level",
                self.target_level.to_string(),
                format!("Target must be above the current level and at most {}", MAX_LEVEL),
            ));
        }
        ensure_positive("base_xp", self.base_xp)?;
        ensure_range("growth", self.growth, 0.0, 5.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XpResult {
    pub total_xp: f64,
    pub levels: u32,
    /// XP cost of each level-up, starting at the current level
    pub steps: Vec<(u32, f64)>,
}

pub fn calculate(input: &XpInput) -> CalcResult<XpResult> {
    input.validate()?;
    let cost = |level: u32| input.base_xp * (level as f64).powf(input.growth);
    let steps: Vec<(u32, f64)> = (input.current_level..input.target_level)
        .map(|level| (level, cost(level)))
        .collect();
    let total_xp = ensure_finite("xp to level", steps.iter().map(|(_, xp)| xp).sum())?;
    Ok(XpResult {
        total_xp,
        levels: input.target_level - input.current_level,
        steps: steps.into_iter().take(TABLE_ROWS).collect(),
    })
}

pub struct XpToLevel;

impl Calculator for XpToLevel {
    type Input = XpInput;
    type Output = XpResult;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::integer("current_level", "Current level").placeholder("1"),
        FieldSpec::integer("target_level", "Target level").placeholder("10"),
        FieldSpec::number("base_xp", "XP for level 1 → 2").placeholder("100"),
        FieldSpec::number("growth", "Growth exponent").placeholder("1.5").optional(),
    ];

    fn parse(form: &FormValues) -> CalcResult<XpInput> {
        Ok(XpInput {
            current_level: form.required_count("current_level")?,
            target_level: form.required_count("target_level")?,
            base_xp: form.required_number("base_xp")?,
            growth: form.number_or("growth", default_growth())?,
        })
    }

    fn calculate(input: &XpInput) -> CalcResult<XpResult> {
        calculate(input)
    }

    fn report(output: &XpResult) -> Report {
        let mut table = ReportTable::new("Level-ups", ["From", "To", "XP"]);
        for (level, xp) in &output.steps {
            table.push_row([level.to_string(), (level + 1).to_string(), grouped(*xp, 0)]);
        }
        Report::new("Total XP needed", grouped(output.total_xp, 0))
            .line("Levels to gain", output.levels.to_string())
            .table(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_growth() {
        let result = calculate(&XpInput {
            current_level: 1,
            target_level: 4,
            base_xp: 100.0,
            growth: 1.0,
        })
        .unwrap();
        // 100 + 200 + 300
        assert_eq!(result.total_xp, 600.0);
        assert_eq!(result.levels, 3);
    }

    #[test]
    fn test_quadratic_growth() {
        let result = calculate(&XpInput {
            current_level: 2,
            target_level: 4,
            base_xp: 10.0,
            growth: 2.0,
        })
        .unwrap();
        // 10*4 + 10*9
        assert_eq!(result.total_xp, 130.0);
        assert_eq!(result.steps, vec![(2, 40.0), (3, 90.0)]);
    }

    #[test]
    fn test_table_is_truncated() {
        let result = calculate(&XpInput {
            current_level: 1,
            target_level: 100,
            base_xp: 100.0,
            growth: 1.5,
        })
        .unwrap();
        assert_eq!(result.steps.len(), 10);
        assert_eq!(result.levels, 99);
    }

    #[test]
    fn test_target_must_exceed_current() {
        let input = XpInput {
            current_level: 5,
            target_level: 5,
            base_xp: 100.0,
            growth: 1.5,
        };
        assert!(calculate(&input).is_err());
    }
}
