//! # Molarity
//!
//! M = moles of solute / liters of solution. Moles may be entered directly
//! or derived from a mass and molar mass.

use serde::{Deserialize, Serialize};

use crate::calculations::Calculator;
use crate::errors::{CalcError, CalcResult};
use crate::form::{FieldSpec, FormValues};
use crate::format::compact;
use crate::report::Report;
use crate::validation::{ensure_non_negative, ensure_positive};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MolarityInput {
    #[serde(default)]
    pub moles: Option<f64>,
    /// Grams of solute, used with `molar_mass` when `moles` is absent
    #[serde(default)]
    pub mass_g: Option<f64>,
    /// g/mol
    #[serde(default)]
    pub molar_mass: Option<f64>,
    pub volume_liters: f64,
}

impl MolarityInput {
    pub fn validate(&self) -> CalcResult<()> {
        ensure_positive("volume_liters", self.volume_liters)?;
        match (self.moles, self.mass_g, self.molar_mass) {
            (Some(moles), _, _) => ensure_non_negative("moles", moles),
            (None, Some(mass), Some(molar_mass)) => {
                ensure_non_negative("mass_g", mass)?;
                ensure_positive("molar_mass", molar_mass)
            }
            (None, Some(_), None) => Err(CalcError::missing_field("molar_mass")),
            (None, None, _) => Err(CalcError::missing_field("moles")),
        }
    }

    fn resolved_moles(&self) -> f64 {
        match (self.moles, self.mass_g, self.molar_mass) {
            (Some(moles), _, _) => moles,
            (None, Some(mass), Some(molar_mass)) => mass / molar_mass,
            _ => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MolarityResult {
    pub moles: f64,
    /// mol/L
    pub molarity: f64,
    /// mmol/L
    pub millimolar: f64,
}

pub fn calculate(input: &MolarityInput) -> CalcResult<MolarityResult> {
    input.validate()?;
    let moles = input.resolved_moles();
    let molarity = moles / input.volume_liters;
    Ok(MolarityResult {
        moles,
        molarity,
        millimolar: molarity * 1000.0,
    })
}

pub struct Molarity;

impl Calculator for Molarity {
    type Input = MolarityInput;
    type Output = MolarityResult;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::number("volume_liters", "Solution volume").unit("L").placeholder("0.5"),
        FieldSpec::number("moles", "Solute").unit("mol").placeholder("0.25").optional(),
        FieldSpec::number("mass_g", "Solute mass").unit("g").placeholder("14.61").optional(),
        FieldSpec::number("molar_mass", "Molar mass").unit("g/mol").placeholder("58.44").optional(),
    ];

    fn parse(form: &FormValues) -> CalcResult<MolarityInput> {
        Ok(MolarityInput {
            moles: form.optional_number("moles")?,
            mass_g: form.optional_number("mass_g")?,
            molar_mass: form.optional_number("molar_mass")?,
            volume_liters: form.required_number("volume_liters")?,
        })
    }

    fn calculate(input: &MolarityInput) -> CalcResult<MolarityResult> {
        calculate(input)
    }

    fn report(output: &MolarityResult) -> Report {
        Report::new("Molarity", format!("{} M", compact(output.molarity, 4)))
            .line("Millimolar", format!("{} mM", compact(output.millimolar, 3)))
            .line("Solute", format!("{} mol", compact(output.moles, 4)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_moles() {
        let result = calculate(&MolarityInput {
            moles: Some(0.25),
            mass_g: None,
            molar_mass: None,
            volume_liters: 0.5,
        })
        .unwrap();
        assert_eq!(result.molarity, 0.5);
        assert_eq!(result.millimolar, 500.0);
    }

    #[test]
    fn test_from_mass_of_salt() {
        let result = calculate(&MolarityInput {
            moles: None,
            mass_g: Some(58.44),
            molar_mass: Some(58.44),
            volume_liters: 2.0,
        })
        .unwrap();
        assert_eq!(result.moles, 1.0);
        assert_eq!(result.molarity, 0.5);
    }

    #[test]
    fn test_missing_solute() {
        let err = calculate(&MolarityInput {
            moles: None,
            mass_g: Some(10.0),
            molar_mass: None,
            volume_liters: 1.0,
        })
        .unwrap_err();
        assert_eq!(err.field(), Some("molar_mass"));
        let err = calculate(&MolarityInput {
            moles: None,
            mass_g: None,
            molar_mass: None,
            volume_liters: 1.0,
        })
        .unwrap_err();
        assert_eq!(err.field(), Some("moles"));
    }
}
