//! # Kinetic Energy
//!
//! ```text
//! KE = ½·m·v²        p = m·v
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::Calculator;
use crate::errors::CalcResult;
use crate::form::{FieldSpec, FormValues};
use crate::format::compact;
use crate::report::Report;
use crate::validation::{ensure_finite, ensure_positive};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KineticEnergyInput {
    /// kg
    pub mass: f64,
    /// m/s, sign is direction
    pub velocity: f64,
}

impl KineticEnergyInput {
    pub fn validate(&self) -> CalcResult<()> {
        ensure_positive("mass", self.mass)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KineticEnergyResult {
    pub joules: f64,
    pub kilojoules: f64,
    /// kg·m/s
    pub momentum: f64,
}

pub fn calculate(input: &KineticEnergyInput) -> CalcResult<KineticEnergyResult> {
    input.validate()?;
    let joules = ensure_finite("kinetic energy", 0.5 * input.mass * input.velocity * input.velocity)?;
    Ok(KineticEnergyResult {
        joules,
        kilojoules: joules / 1000.0,
        momentum: input.mass * input.velocity,
    })
}

pub struct KineticEnergy;

impl Calculator for KineticEnergy {
    type Input = KineticEnergyInput;
    type Output = KineticEnergyResult;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::number("mass", "Mass").unit("kg").placeholder("1200"),
        FieldSpec::number("velocity", "Velocity").unit("m/s").placeholder("25"),
    ];

    fn parse(form: &FormValues) -> CalcResult<KineticEnergyInput> {
        Ok(KineticEnergyInput {
            mass: form.required_number("mass")?,
            velocity: form.required_number("velocity")?,
        })
    }

    fn calculate(input: &KineticEnergyInput) -> CalcResult<KineticEnergyResult> {
        calculate(input)
    }

    fn report(output: &KineticEnergyResult) -> Report {
        Report::new("Kinetic energy", format!("{} J", compact(output.joules, 3)))
            .line("Kilojoules", format!("{} kJ", compact(output.kilojoules, 4)))
            .line("Momentum", format!("{} kg·m/s", compact(output.momentum, 3)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_car_at_highway_speed() {
        let result = calculate(&KineticEnergyInput {
            mass: 1200.0,
            velocity: 25.0,
        })
        .unwrap();
        assert_eq!(result.joules, 375_000.0);
        assert_eq!(result.kilojoules, 375.0);
        assert_eq!(result.momentum, 30_000.0);
    }

    #[test]
    fn test_direction_does_not_change_energy() {
        let result = calculate(&KineticEnergyInput {
            mass: 2.0,
            velocity: -3.0,
        })
        .unwrap();
        assert_eq!(result.joules, 9.0);
        assert_eq!(result.momentum, -6.0);
    }

    #[test]
    fn test_massless_rejected() {
        assert!(calculate(&KineticEnergyInput {
            mass: 0.0,
            velocity: 3.0
        })
        .is_err());
    }
}
