//! # Ohm's Law
//!
//! Given exactly two of voltage V, current I and resistance R, find the
//! third and the power dissipated:
//!
//! ```text
//! V = I·R     I = V/R     R = V/I     P = V·I
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::Calculator;
use crate::errors::{CalcError, CalcResult};
use crate::form::{FieldSpec, FormValues};
use crate::format::compact;
use crate::report::Report;
use crate::validation::ensure_non_negative;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OhmsLawInput {
    #[serde(default)]
    pub voltage: Option<f64>,
    #[serde(default)]
    pub current: Option<f64>,
    #[serde(default)]
    pub resistance: Option<f64>,
}

impl OhmsLawInput {
    pub fn validate(&self) -> CalcResult<()> {
        let given = [self.voltage, self.current, self.resistance].iter().filter(|v| v.is_some()).count();
        if given != 2 {
            return Err(CalcError::invalid_input(
                "voltage",
                given.to_string(),
                "Enter exactly two of voltage, current and resistance",
            ));
        }
        if let Some(r) = self.resistance {
            ensure_non_negative("resistance", r)?;
        }
        Ok(())
    }
}

/// Which quantity was solved for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Solved {
    Voltage,
    Current,
    Resistance,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OhmsLawResult {
    pub solved: Solved,
    pub voltage: f64,
    pub current: f64,
    pub resistance: f64,
    pub power: f64,
}

fn divide(numerator: f64, denominator: f64, what: &str) -> CalcResult<f64> {
    if denominator == 0.0 {
        return Err(CalcError::domain("Ohm's law", format!("{} would require dividing by zero", what)));
    }
    Ok(numerator / denominator)
}

pub fn calculate(input: &OhmsLawInput) -> CalcResult<OhmsLawResult> {
    input.validate()?;
    let (solved, voltage, current, resistance) = match (input.voltage, input.current, input.resistance) {
        (None, Some(i), Some(r)) => (Solved::Voltage, i * r, i, r),
        (Some(v), None, Some(r)) => (Solved::Current, v, divide(v, r, "current")?, r),
        (Some(v), Some(i), None) => (Solved::Resistance, v, i, divide(v, i, "resistance")?),
        _ => {
            return Err(CalcError::Internal {
                message: "unexpected combination of Ohm's law inputs".to_string(),
            })
        }
    };
    if resistance < 0.0 {
        return Err(CalcError::domain("Ohm's law", "voltage and current give a negative resistance"));
    }
    Ok(OhmsLawResult {
        solved,
        voltage,
        current,
        resistance,
        power: voltage * current,
    })
}

pub struct OhmsLaw;

impl Calculator for OhmsLaw {
    type Input = OhmsLawInput;
    type Output = OhmsLawResult;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::number("voltage", "Voltage (V)").unit("V").placeholder("12").optional(),
        FieldSpec::number("current", "Current (I)").unit("A").placeholder("2").optional(),
        FieldSpec::number("resistance", "Resistance (R)").unit("Ω").placeholder("6").optional(),
    ];

    fn parse(form: &FormValues) -> CalcResult<OhmsLawInput> {
        Ok(OhmsLawInput {
            voltage: form.optional_number("voltage")?,
            current: form.optional_number("current")?,
            resistance: form.optional_number("resistance")?,
        })
    }

    fn calculate(input: &OhmsLawInput) -> CalcResult<OhmsLawResult> {
        calculate(input)
    }

    fn report(output: &OhmsLawResult) -> Report {
        let voltage = format!("{} V", compact(output.voltage, 6));
        let current = format!("{} A", compact(output.current, 6));
        let resistance = format!("{} Ω", compact(output.resistance, 6));
        let report = match output.solved {
            Solved::Voltage => Report::new("Voltage", voltage)
                .line("Current", current)
                .line("Resistance", resistance),
            Solved::Current => Report::new("Current", current)
                .line("Voltage", voltage)
                .line("Resistance", resistance),
            Solved::Resistance => Report::new("Resistance", resistance)
                .line("Voltage", voltage)
                .line("Current", current),
        };
        report.line("Power", format!("{} W", compact(output.power, 6)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve(v: Option<f64>, i: Option<f64>, r: Option<f64>) -> CalcResult<OhmsLawResult> {
        calculate(&OhmsLawInput {
            voltage: v,
            current: i,
            resistance: r,
        })
    }

    #[test]
    fn test_each_unknown() {
        let v = solve(None, Some(2.0), Some(6.0)).unwrap();
        assert_eq!((v.solved, v.voltage, v.power), (Solved::Voltage, 12.0, 24.0));
        let i = solve(Some(12.0), None, Some(6.0)).unwrap();
        assert_eq!((i.solved, i.current), (Solved::Current, 2.0));
        let r = solve(Some(12.0), Some(2.0), None).unwrap();
        assert_eq!((r.solved, r.resistance), (Solved::Resistance, 6.0));
    }

    #[test]
    fn test_requires_exactly_two() {
        assert!(solve(Some(1.0), None, None).is_err());
        assert!(solve(Some(1.0), Some(1.0), Some(1.0)).is_err());
        assert!(solve(None, None, None).is_err());
    }

    #[test]
    fn test_zero_divisor_is_domain_error() {
        let err = solve(Some(12.0), None, Some(0.0)).unwrap_err();
        assert_eq!(err.error_code(), "DOMAIN_ERROR");
        let err = solve(Some(12.0), Some(0.0), None).unwrap_err();
        assert_eq!(err.error_code(), "DOMAIN_ERROR");
    }
}
