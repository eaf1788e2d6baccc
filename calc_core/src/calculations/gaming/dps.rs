//! # Damage Per Second
//!
//! ```text
//! average hit = damage · (1 + crit chance · (crit multiplier − 1))
//! DPS         = average hit · attacks per second
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::Calculator;
use crate::errors::CalcResult;
use crate::form::{FieldSpec, FormValues};
use crate::format::{compact, percent};
use crate::report::Report;
use crate::validation::{ensure_positive, ensure_range};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DpsInput {
    pub damage: f64,
    pub attacks_per_second: f64,
    /// Percent
    #[serde(default)]
    pub crit_chance: f64,
    #[serde(default = "default_crit_multiplier")]
    pub crit_multiplier: f64,
}

fn default_crit_multiplier() -> f64 {
    2.0
}

impl DpsInput {
    pub fn validate(&self) -> CalcResult<()> {
        ensure_positive("damage", self.damage)?;
        ensure_positive("attacks_per_second", self.attacks_per_second)?;
        ensure_range("crit_chance", self.crit_chance, 0.0, 100.0)?;
        ensure_range("crit_multiplier", self.crit_multiplier, 1.0, 100.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DpsResult {
    pub dps: f64,
    pub base_dps: f64,
    pub average_hit: f64,
    /// Share of total DPS coming from crits, in percent
    pub crit_share: f64,
}

pub fn calculate(input: &DpsInput) -> CalcResult<DpsResult> {
    input.validate()?;
    let chance = input.crit_chance / 100.0;
    let average_hit = input.damage * (1.0 + chance * (input.crit_multiplier - 1.0));
    let dps = average_hit * input.attacks_per_second;
    let base_dps = input.damage * input.attacks_per_second;
    Ok(DpsResult {
        dps,
        base_dps,
        average_hit,
        crit_share: (dps - base_dps) / dps * 100.0,
    })
}

pub struct DamagePerSecond;

impl Calculator for DamagePerSecond {
    type Input = DpsInput;
    type Output = DpsResult;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::number("damage", "Damage per hit").placeholder("120"),
        FieldSpec::number("attacks_per_second", "Attacks per second").placeholder("1.5"),
        FieldSpec::number("crit_chance", "Critical hit chance").unit("%").placeholder("25").optional(),
        FieldSpec::number("crit_multiplier", "Critical multiplier").unit("×").placeholder("2").optional(),
    ];

    fn parse(form: &FormValues) -> CalcResult<DpsInput> {
        Ok(DpsInput {
            damage: form.required_number("damage")?,
            attacks_per_second: form.required_number("attacks_per_second")?,
            crit_chance: form.number_or("crit_chance", 0.0)?,
            crit_multiplier: form.number_or("crit_multiplier", default_crit_multiplier())?,
        })
    }

    fn calculate(input: &DpsInput) -> CalcResult<DpsResult> {
        calculate(input)
    }

    fn report(output: &DpsResult) -> Report {
        Report::new("DPS", compact(output.dps, 2))
            .line("Without crits", compact(output.base_dps, 2))
            .line("Average hit", compact(output.average_hit, 2))
            .line("From crits", percent(output.crit_share, 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_crits() {
        let result = calculate(&DpsInput {
            damage: 100.0,
            attacks_per_second: 2.0,
            crit_chance: 25.0,
            crit_multiplier: 2.0,
        })
        .unwrap();
        assert_eq!(result.average_hit, 125.0);
        assert_eq!(result.dps, 250.0);
        assert_eq!(result.crit_share, 20.0);
    }

    #[test]
    fn test_no_crits() {
        let form = FormValues::new().with("damage", "50").with("attacks_per_second", "1");
        let result = DamagePerSecond::calculate(&DamagePerSecond::parse(&form).unwrap()).unwrap();
        assert_eq!(result.dps, 50.0);
        assert_eq!(result.crit_share, 0.0);
    }

    #[test]
    fn test_multiplier_below_one_rejected() {
        let input = DpsInput {
            damage: 10.0,
            attacks_per_second: 1.0,
            crit_chance: 10.0,
            crit_multiplier: 0.5,
        };
        assert!(calculate(&input).is_err());
    }
}
