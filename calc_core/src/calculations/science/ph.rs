//! # pH
//!
//! From hydrogen-ion concentration at 25 °C:
//!
//! ```text
//! pH = -log₁₀[H⁺]      pOH = 14 - pH      [OH⁻] = 10⁻¹⁴ / [H⁺]
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::Calculator;
use crate::errors::CalcResult;
use crate::form::{FieldSpec, FormValues};
use crate::format::fixed;
use crate::report::Report;
use crate::validation::ensure_positive;

/// Ionic product of water at 25 °C
const KW: f64 = 1e-14;

/// |pH - 7| below this reads as neutral
const NEUTRAL_TOLERANCE: f64 = 0.005;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhInput {
    /// mol/L
    pub hydrogen_concentration: f64,
}

impl PhInput {
    pub fn validate(&self) -> CalcResult<()> {
        ensure_positive("hydrogen_concentration", self.hydrogen_concentration)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Acidity {
    Acidic,
    Neutral,
    Basic,
}

impl Acidity {
    pub fn classify(ph: f64) -> Self {
        if (ph - 7.0).abs() < NEUTRAL_TOLERANCE {
            Acidity::Neutral
        } else if ph < 7.0 {
            Acidity::Acidic
        } else {
            Acidity::Basic
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Acidity::Acidic => "Acidic",
            Acidity::Neutral => "Neutral",
            Acidity::Basic => "Basic",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhResult {
    pub ph: f64,
    pub poh: f64,
    pub hydroxide_concentration: f64,
    pub acidity: Acidity,
}

pub fn calculate(input: &PhInput) -> CalcResult<PhResult> {
    input.validate()?;
    let ph = -input.hydrogen_concentration.log10();
    Ok(PhResult {
        ph,
        poh: 14.0 - ph,
        hydroxide_concentration: KW / input.hydrogen_concentration,
        acidity: Acidity::classify(ph),
    })
}

pub struct Ph;

impl Calculator for Ph {
    type Input = PhInput;
    type Output = PhResult;

    const FIELDS: &'static [FieldSpec] = &[FieldSpec::number("hydrogen_concentration", "[H⁺] concentration")
        .unit("mol/L")
        .placeholder("1e-7")];

    fn parse(form: &FormValues) -> CalcResult<PhInput> {
        Ok(PhInput {
            hydrogen_concentration: form.required_number("hydrogen_concentration")?,
        })
    }

    fn calculate(input: &PhInput) -> CalcResult<PhResult> {
        calculate(input)
    }

    fn report(output: &PhResult) -> Report {
        Report::new("pH", fixed(output.ph, 2))
            .line("pOH", fixed(output.poh, 2))
            .line("[OH⁻]", format!("{:.3e} mol/L", output.hydroxide_concentration))
            .line("Solution", output.acidity.label())
            .note("Assumes an aqueous solution at 25 °C.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ph_of(concentration: f64) -> PhResult {
        calculate(&PhInput {
            hydrogen_concentration: concentration,
        })
        .unwrap()
    }

    #[test]
    fn test_pure_water_is_neutral() {
        let result = ph_of(1e-7);
        assert!((result.ph - 7.0).abs() < 1e-9);
        assert_eq!(result.acidity, Acidity::Neutral);
    }

    #[test]
    fn test_acid_and_base() {
        let acid = ph_of(1e-3);
        assert!((acid.ph - 3.0).abs() < 1e-9);
        assert!((acid.poh - 11.0).abs() < 1e-9);
        assert_eq!(acid.acidity, Acidity::Acidic);
        assert_eq!(ph_of(1e-10).acidity, Acidity::Basic);
    }

    #[test]
    fn test_zero_concentration_rejected() {
        assert!(calculate(&PhInput {
            hydrogen_concentration: 0.0
        })
        .is_err());
    }
}
