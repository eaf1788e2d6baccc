//! # Daily Water Intake
//!
//! A common rule of thumb: 33 mL per kg of body weight, plus 350 mL for
//! every 30 minutes of exercise.

use serde::{Deserialize, Serialize};

use crate::calculations::Calculator;
use crate::errors::CalcResult;
use crate::form::{FieldSpec, FormValues};
use crate::format::fixed;
use crate::report::Report;
use crate::validation::ensure_range;

const ML_PER_KG: f64 = 33.0;
const ML_PER_30_MIN: f64 = 350.0;
const ML_PER_CUP: f64 = 236.588;
const ML_PER_FL_OZ: f64 = 29.5735;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaterIntakeInput {
    pub weight_kg: f64,
    #[serde(default)]
    pub exercise_minutes: f64,
}

impl WaterIntakeInput {
    pub fn validate(&self) -> CalcResult<()> {
        ensure_range("weight_kg", self.weight_kg, 1.0, 500.0)?;
        ensure_range("exercise_minutes", self.exercise_minutes, 0.0, 1440.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaterIntakeResult {
    pub liters: f64,
    pub cups: f64,
    pub fluid_ounces: f64,
}

pub fn calculate(input: &WaterIntakeInput) -> CalcResult<WaterIntakeResult> {
    input.validate()?;
    let ml = input.weight_kg * ML_PER_KG + input.exercise_minutes / 30.0 * ML_PER_30_MIN;
    Ok(WaterIntakeResult {
        liters: ml / 1000.0,
        cups: ml / ML_PER_CUP,
        fluid_ounces: ml / ML_PER_FL_OZ,
    })
}

pub struct WaterIntake;

impl Calculator for WaterIntake {
    type Input = WaterIntakeInput;
    type Output = WaterIntakeResult;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::number("weight_kg", "Weight").unit("kg").placeholder("70"),
        FieldSpec::number("exercise_minutes", "Exercise per day")
            .unit("min")
            .placeholder("30")
            .optional(),
    ];

    fn parse(form: &FormValues) -> CalcResult<WaterIntakeInput> {
        Ok(WaterIntakeInput {
            weight_kg: form.required_number("weight_kg")?,
            exercise_minutes: form.number_or("exercise_minutes", 0.0)?,
        })
    }

    fn calculate(input: &WaterIntakeInput) -> CalcResult<WaterIntakeResult> {
        calculate(input)
    }

    fn report(output: &WaterIntakeResult) -> Report {
        Report::new("Daily water", format!("{} L", fixed(output.liters, 1)))
            .line("Cups (8 fl oz)", fixed(output.cups, 1))
            .line("Fluid ounces", fixed(output.fluid_ounces, 0))
            .note("Food provides part of this. Needs rise in hot weather and during illness.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_exercise() {
        let result = calculate(&WaterIntakeInput {
            weight_kg: 70.0,
            exercise_minutes: 60.0,
        })
        .unwrap();
        // 2310 + 700 mL
        assert!((result.liters - 3.01).abs() < 1e-9);
    }

    #[test]
    fn test_exercise_is_optional() {
        let form = FormValues::new().with("weight_kg", "100");
        let result = WaterIntake::calculate(&WaterIntake::parse(&form).unwrap()).unwrap();
        assert!((result.liters - 3.3).abs() < 1e-9);
    }
}
