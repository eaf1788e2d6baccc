//! # Waist-to-Hip Ratio
//!
//! WHR = waist / hip, with WHO risk bands for cardiovascular disease:
//!
//! | Risk     | Male        | Female      |
//! |----------|-------------|-------------|
//! | Low      | ≤ 0.95      | ≤ 0.80      |
//! | Moderate | 0.96 – 1.00 | 0.81 – 0.85 |
//! | High     | > 1.00      | > 0.85      |

use serde::{Deserialize, Serialize};

use crate::calculations::health::Sex;
use crate::calculations::Calculator;
use crate::errors::CalcResult;
use crate::form::{FieldSpec, FormValues};
use crate::format::fixed;
use crate::report::Report;
use crate::validation::ensure_positive;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthRisk {
    Low,
    Moderate,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaistHipInput {
    pub sex: Sex,
    /// Any unit, as long as both measurements use the same one
    pub waist: f64,
    pub hip: f64,
}

impl WaistHipInput {
    pub fn validate(&self) -> CalcResult<()> {
        ensure_positive("waist", self.waist)?;
        ensure_positive("hip", self.hip)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaistHipResult {
    pub ratio: f64,
    pub risk: HealthRisk,
}

pub fn calculate(input: &WaistHipInput) -> CalcResult<WaistHipResult> {
    input.validate()?;
    let ratio = input.waist / input.hip;
    // Bands are published to two decimals
    let rounded = (ratio * 100.0).round() / 100.0;
    let (low_max, moderate_max) = match input.sex {
        Sex::Male => (0.95, 1.00),
        Sex::Female => (0.80, 0.85),
    };
    let risk = if rounded <= low_max {
        HealthRisk::Low
    } else if rounded <= moderate_max {
        HealthRisk::Moderate
    } else {
        HealthRisk::High
    };
    Ok(WaistHipResult { ratio, risk })
}

pub struct WaistToHipRatio;

impl Calculator for WaistToHipRatio {
    type Input = WaistHipInput;
    type Output = WaistHipResult;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::choice("sex", "Sex", Sex::CHOICES),
        FieldSpec::number("waist", "Waist").placeholder("32"),
        FieldSpec::number("hip", "Hip").placeholder("38"),
    ];

    fn parse(form: &FormValues) -> CalcResult<WaistHipInput> {
        Ok(WaistHipInput {
            sex: Sex::from_form(form)?,
            waist: form.required_number("waist")?,
            hip: form.required_number("hip")?,
        })
    }

    fn calculate(input: &WaistHipInput) -> CalcResult<WaistHipResult> {
        calculate(input)
    }

    fn report(output: &WaistHipResult) -> Report {
        let risk = match output.risk {
            HealthRisk::Low => "Low",
            HealthRisk::Moderate => "Moderate",
            HealthRisk::High => "High",
        };
        Report::new("Waist-to-hip ratio", fixed(output.ratio, 2)).line("Health risk", risk)
    }
}
