//! # Density
//!
//! ρ = m / V, entered in grams and cubic centimeters.

use serde::{Deserialize, Serialize};

use crate::calculations::Calculator;
use crate::errors::CalcResult;
use crate::form::{FieldSpec, FormValues};
use crate::format::compact;
use crate::report::Report;
use crate::validation::{ensure_non_negative, ensure_positive};

/// g/cm³ of liquid water near 4 °C
const WATER_DENSITY: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensityInput {
    pub mass_g: f64,
    pub volume_cm3: f64,
}

impl DensityInput {
    pub fn validate(&self) -> CalcResult<()> {
        ensure_non_negative("mass_g", self.mass_g)?;
        ensure_positive("volume_cm3", self.volume_cm3)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensityResult {
    pub g_per_cm3: f64,
    pub kg_per_m3: f64,
    pub floats_in_water: bool,
}

pub fn calculate(input: &DensityInput) -> CalcResult<DensityResult> {
    input.validate()?;
    let g_per_cm3 = input.mass_g / input.volume_cm3;
    Ok(DensityResult {
        g_per_cm3,
        kg_per_m3: g_per_cm3 * 1000.0,
        floats_in_water: g_per_cm3 < WATER_DENSITY,
    })
}

pub struct Density;

impl Calculator for Density {
    type Input = DensityInput;
    type Output = DensityResult;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::number("mass_g", "Mass").unit("g").placeholder("270"),
        FieldSpec::number("volume_cm3", "Volume").unit("cm³").placeholder("100"),
    ];

    fn parse(form: &FormValues) -> CalcResult<DensityInput> {
        Ok(DensityInput {
            mass_g: form.required_number("mass_g")?,
            volume_cm3: form.required_number("volume_cm3")?,
        })
    }

    fn calculate(input: &DensityInput) -> CalcResult<DensityResult> {
        calculate(input)
    }

    fn report(output: &DensityResult) -> Report {
        Report::new("Density", format!("{} g/cm³", compact(output.g_per_cm3, 4)))
            .line("SI units", format!("{} kg/m³", compact(output.kg_per_m3, 2)))
            .line("In water", if output.floats_in_water { "Floats" } else { "Sinks" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aluminium_block() {
        let result = calculate(&DensityInput {
            mass_g: 270.0,
            volume_cm3: 100.0,
        })
        .unwrap();
        assert!((result.g_per_cm3 - 2.7).abs() < 1e-12);
        assert!((result.kg_per_m3 - 2700.0).abs() < 1e-9);
        assert!(!result.floats_in_water);
    }

    #[test]
    fn test_cork_floats() {
        let result = calculate(&DensityInput {
            mass_g: 24.0,
            volume_cm3: 100.0,
        })
        .unwrap();
        assert!(result.floats_in_water);
    }

    #[test]
    fn test_zero_volume_rejected() {
        let err = calculate(&DensityInput {
            mass_g: 1.0,
            volume_cm3: 0.0,
        })
        .unwrap_err();
        assert_eq!(err.field(), Some("volume_cm3"));
    }
}
