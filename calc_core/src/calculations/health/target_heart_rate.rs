//! # Target Heart Rate
//!
//! Karvonen method:
//!
//! ```text
//! max HR  = 220 − age
//! reserve = max HR − resting HR
//! target  = resting HR + reserve · intensity
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::Calculator;
use crate::errors::{CalcError, CalcResult};
use crate::form::{FieldSpec, FormValues};
use crate::format::fixed;
use crate::report::{Report, ReportTable};
use crate::validation::ensure_range;

/// (zone, low %, high %)
const ZONES: [(&str, f64, f64); 5] = [
    ("Zone 1 (recovery)", 50.0, 60.0),
    ("Zone 2 (endurance)", 60.0, 70.0),
    ("Zone 3 (aerobic)", 70.0, 80.0),
    ("Zone 4 (threshold)", 80.0, 90.0),
    ("Zone 5 (maximum)", 90.0, 100.0),
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeartRateInput {
    pub age: f64,
    pub resting_hr: f64,
    /// Percent of heart rate reserve
    pub low_intensity: f64,
    pub high_intensity: f64,
}

impl HeartRateInput {
    pub fn validate(&self) -> CalcResult<()> {
        ensure_range("age", self.age, 1.0, 120.0)?;
        ensure_range("resting_hr", self.resting_hr, 30.0, 120.0)?;
        ensure_range("low_intensity", self.low_intensity, 0.0, 100.0)?;
        ensure_range("high_intensity", self.high_intensity, 0.0, 100.0)?;
        if self.low_intensity > self.high_intensity {
            return Err(CalcError::invalid_input(
                "low_intensity",
                self.low_intensity.to_string(),
                "Low intensity cannot exceed high intensity",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeartRateResult {
    pub max_hr: f64,
    pub reserve: f64,
    pub target_low: f64,
    pub target_high: f64,
    /// (zone, low bpm, high bpm)
    pub zones: Vec<(String, f64, f64)>,
}

pub fn calculate(input: &HeartRateInput) -> CalcResult<HeartRateResult> {
    input.validate()?;
    let max_hr = 220.0 - input.age;
    let reserve = max_hr - input.resting_hr;
    if reserve <= 0.0 {
        return Err(CalcError::domain(
            "target heart rate",
            "resting heart rate must be below the estimated maximum",
        ));
    }
    let at = |pct: f64| input.resting_hr + reserve * pct / 100.0;
    Ok(HeartRateResult {
        max_hr,
        reserve,
        target_low: at(input.low_intensity),
        target_high: at(input.high_intensity),
        zones: ZONES.iter().map(|(name, lo, hi)| (name.to_string(), at(*lo), at(*hi))).collect(),
    })
}

pub struct TargetHeartRate;

impl Calculator for TargetHeartRate {
    type Input = HeartRateInput;
    type Output = HeartRateResult;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::number("age", "Age").unit("years").placeholder("35"),
        FieldSpec::number("resting_hr", "Resting heart rate").unit("bpm").placeholder("65"),
        FieldSpec::number("low_intensity", "Low intensity").unit("%").placeholder("50").optional(),
        FieldSpec::number("high_intensity", "High intensity").unit("%").placeholder("85").optional(),
    ];

    fn parse(form: &FormValues) -> CalcResult<HeartRateInput> {
        Ok(HeartRateInput {
            age: form.required_number("age")?,
            resting_hr: form.required_number("resting_hr")?,
            low_intensity: form.number_or("low_intensity", 50.0)?,
            high_intensity: form.number_or("high_intensity", 85.0)?,
        })
    }

    fn calculate(input: &HeartRateInput) -> CalcResult<HeartRateResult> {
        calculate(input)
    }

    fn report(output: &HeartRateResult) -> Report {
        let mut table = ReportTable::new("Training zones", ["Zone", "bpm"]);
        for (name, lo, hi) in &output.zones {
            table.push_row([name.clone(), format!("{}–{}", fixed(*lo, 0), fixed(*hi, 0))]);
        }
        Report::new(
            "Target range",
            format!("{}–{} bpm", fixed(output.target_low, 0), fixed(output.target_high, 0)),
        )
        .line("Estimated max heart rate", format!("{} bpm", fixed(output.max_hr, 0)))
        .line("Heart rate reserve", format!("{} bpm", fixed(output.reserve, 0)))
        .table(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_karvonen() {
        let result = calculate(&HeartRateInput {
            age: 40.0,
            resting_hr: 60.0,
            low_intensity: 50.0,
            high_intensity: 85.0,
        })
        .unwrap();
        assert_eq!(result.max_hr, 180.0);
        assert_eq!(result.reserve, 120.0);
        assert_eq!(result.target_low, 120.0);
        assert_eq!(result.target_high, 162.0);
        assert_eq!(result.zones.len(), 5);
    }

    #[test]
    fn test_inverted_range_rejected() {
        let input = HeartRateInput {
            age: 40.0,
            resting_hr: 60.0,
            low_intensity: 90.0,
            high_intensity: 50.0,
        };
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_resting_above_max_is_domain_error() {
        let input = HeartRateInput {
            age: 110.0,
            resting_hr: 115.0,
            low_intensity: 50.0,
            high_intensity: 85.0,
        };
        assert_eq!(calculate(&input).unwrap_err().error_code(), "DOMAIN_ERROR");
    }
}
