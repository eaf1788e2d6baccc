//! # Temperature Converter
//!
//! ```text
//! °F = °C · 9/5 + 32
//! K  = °C + 273.15
//! ```
//!
//! Temperatures below absolute zero (0 K) are rejected.

use serde::{Deserialize, Serialize};

use crate::calculations::Calculator;
use crate::errors::{CalcError, CalcResult};
use crate::form::{Choice, FieldSpec, FormValues};
use crate::format::compact;
use crate::report::Report;
use crate::units::{Celsius, Fahrenheit, Kelvin};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    pub const CHOICES: &'static [Choice] = &[
        Choice::new("c", "Celsius (°C)"),
        Choice::new("f", "Fahrenheit (°F)"),
        Choice::new("k", "Kelvin (K)"),
    ];

    fn from_choice(value: &str) -> Self {
        match value {
            "f" => TemperatureUnit::Fahrenheit,
            "k" => TemperatureUnit::Kelvin,
            _ => TemperatureUnit::Celsius,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureInput {
    pub value: f64,
    pub unit: TemperatureUnit,
}

impl TemperatureInput {
    fn to_celsius(self) -> Celsius {
        match self.unit {
            TemperatureUnit::Celsius => Celsius(self.value),
            TemperatureUnit::Fahrenheit => Fahrenheit(self.value).into(),
            TemperatureUnit::Kelvin => Kelvin(self.value).into(),
        }
    }

    pub fn validate(&self) -> CalcResult<()> {
        let kelvin: Kelvin = self.to_celsius().into();
        // Tolerate rounding right at absolute zero
        if kelvin.value() < -1e-9 {
            return Err(CalcError::invalid_input(
                "value",
                self.value.to_string(),
                "Temperature is below absolute zero",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureResult {
    pub celsius: f64,
    pub fahrenheit: f64,
    pub kelvin: f64,
}

pub fn calculate(input: &TemperatureInput) -> CalcResult<TemperatureResult> {
    input.validate()?;
    let celsius = input.to_celsius();
    let fahrenheit: Fahrenheit = celsius.into();
    let kelvin: Kelvin = celsius.into();
    Ok(TemperatureResult {
        celsius: celsius.value(),
        fahrenheit: fahrenheit.value(),
        kelvin: kelvin.value().max(0.0),
    })
}

pub struct TemperatureConverter;

impl Calculator for TemperatureConverter {
    type Input = TemperatureInput;
    type Output = TemperatureResult;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::number("value", "Temperature").placeholder("100"),
        FieldSpec::choice("unit", "From", TemperatureUnit::CHOICES),
    ];

    fn parse(form: &FormValues) -> CalcResult<TemperatureInput> {
        Ok(TemperatureInput {
            value: form.required_number("value")?,
            unit: TemperatureUnit::from_choice(form.choice_or("unit", TemperatureUnit::CHOICES, "c")?),
        })
    }

    fn calculate(input: &TemperatureInput) -> CalcResult<TemperatureResult> {
        calculate(input)
    }

    fn report(output: &TemperatureResult) -> Report {
        Report::new("Celsius", format!("{} °C", compact(output.celsius, 2)))
            .line("Fahrenheit", format!("{} °F", compact(output.fahrenheit, 2)))
            .line("Kelvin", format!("{} K", compact(output.kelvin, 2)))
    }
}
