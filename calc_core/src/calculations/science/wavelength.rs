//! # Wavelength & Frequency
//!
//! For electromagnetic radiation in vacuum:
//!
//! ```text
//! f = c / λ        E = h·f
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::Calculator;
use crate::errors::CalcResult;
use crate::form::{FieldSpec, FormValues};
use crate::report::Report;
use crate::validation::ensure_positive;

/// Speed of light, m/s
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;
/// Planck constant, J·s
pub const PLANCK: f64 = 6.626_070_15e-34;
/// Elementary charge, J per eV
pub const ELECTRON_VOLT: f64 = 1.602_176_634e-19;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WavelengthInput {
    pub wavelength_nm: f64,
}

impl WavelengthInput {
    pub fn validate(&self) -> CalcResult<()> {
        ensure_positive("wavelength_nm", self.wavelength_nm)
    }
}

/// Band of the electromagnetic spectrum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpectrumRegion {
    GammaRay,
    XRay,
    Ultraviolet,
    Visible,
    Infrared,
    Microwave,
    Radio,
}

impl SpectrumRegion {
    /// Conventional boundaries, in nanometers
    pub fn from_nanometers(nm: f64) -> Self {
        match nm {
            n if n < 0.01 => SpectrumRegion::GammaRay,
            n if n < 10.0 => SpectrumRegion::XRay,
            n if n < 380.0 => SpectrumRegion::Ultraviolet,
            n if n <= 750.0 => SpectrumRegion::Visible,
            n if n < 1e6 => SpectrumRegion::Infrared,
            n if n < 1e9 => SpectrumRegion::Microwave,
            _ => SpectrumRegion::Radio,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SpectrumRegion::GammaRay => "Gamma ray",
            SpectrumRegion::XRay => "X-ray",
            SpectrumRegion::Ultraviolet => "Ultraviolet",
            SpectrumRegion::Visible => "Visible light",
            SpectrumRegion::Infrared => "Infrared",
            SpectrumRegion::Microwave => "Microwave",
            SpectrumRegion::Radio => "Radio",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WavelengthResult {
    pub frequency_hz: f64,
    pub energy_joules: f64,
    pub energy_ev: f64,
    pub region: SpectrumRegion,
}

pub fn calculate(input: &WavelengthInput) -> CalcResult<WavelengthResult> {
    input.validate()?;
    let meters = input.wavelength_nm * 1e-9;
    let frequency_hz = SPEED_OF_LIGHT / meters;
    let energy_joules = PLANCK * frequency_hz;
    Ok(WavelengthResult {
        frequency_hz,
        energy_joules,
        energy_ev: energy_joules / ELECTRON_VOLT,
        region: SpectrumRegion::from_nanometers(input.wavelength_nm),
    })
}

pub struct WavelengthFrequency;

impl Calculator for WavelengthFrequency {
    type Input = WavelengthInput;
    type Output = WavelengthResult;

    const FIELDS: &'static [FieldSpec] = &[FieldSpec::number("wavelength_nm", "Wavelength")
        .unit("nm")
        .placeholder("550")];

    fn parse(form: &FormValues) -> CalcResult<WavelengthInput> {
        Ok(WavelengthInput {
            wavelength_nm: form.required_number("wavelength_nm")?,
        })
    }

    fn calculate(input: &WavelengthInput) -> CalcResult<WavelengthResult> {
        calculate(input)
    }

    fn report(output: &WavelengthResult) -> Report {
        Report::new("Frequency", format!("{:.4e} Hz", output.frequency_hz))
            .line("Photon energy", format!("{:.4e} J", output.energy_joules))
            .line("Photon energy (eV)", format!("{:.4} eV", output.energy_ev))
            .line("Region", output.region.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_green_light() {
        let result = calculate(&WavelengthInput { wavelength_nm: 550.0 }).unwrap();
        assert!((result.frequency_hz - 5.450_772e14).abs() / 5.45e14 < 1e-6);
        assert!((result.energy_ev - 2.254_26).abs() < 1e-4);
        assert_eq!(result.region, SpectrumRegion::Visible);
    }

    #[test]
    fn test_regions() {
        assert_eq!(SpectrumRegion::from_nanometers(0.001), SpectrumRegion::GammaRay);
        assert_eq!(SpectrumRegion::from_nanometers(250.0), SpectrumRegion::Ultraviolet);
        assert_eq!(SpectrumRegion::from_nanometers(10_000.0), SpectrumRegion::Infrared);
        assert_eq!(SpectrumRegion::from_nanometers(1e8), SpectrumRegion::Microwave);
        assert_eq!(SpectrumRegion::from_nanometers(1e12), SpectrumRegion::Radio);
    }

    #[test]
    fn test_zero_wavelength_rejected() {
        assert!(calculate(&WavelengthInput { wavelength_nm: 0.0 }).is_err());
    }
}
