//! # Body Mass Index
//!
//! BMI = weight (kg) / height (m)², classified with the WHO adult bands.

use serde::{Deserialize, Serialize};

use crate::calculations::Calculator;
use crate::errors::CalcResult;
use crate::form::{FieldSpec, FormValues};
use crate::format::fixed;
use crate::report::Report;
use crate::units::{Kilograms, Pounds};
use crate::validation::ensure_range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    ObeseClass1,
    ObeseClass2,
    ObeseClass3,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        match bmi {
            b if b < 18.5 => BmiCategory::Underweight,
            b if b < 25.0 => BmiCategory::Normal,
            b if b < 30.0 => BmiCategory::Overweight,
            b if b < 35.0 => BmiCategory::ObeseClass1,
            b if b < 40.0 => BmiCategory::ObeseClass2,
            _ => BmiCategory::ObeseClass3,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::ObeseClass1 => "Obesity (class I)",
            BmiCategory::ObeseClass2 => "Obesity (class II)",
            BmiCategory::ObeseClass3 => "Obesity (class III)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiInput {
    pub weight_kg: f64,
    pub height_cm: f64,
}

impl BmiInput {
    pub fn validate(&self) -> CalcResult<()> {
        ensure_range("weight_kg", self.weight_kg, 1.0, 500.0)?;
        ensure_range("height_cm", self.height_cm, 50.0, 272.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    pub bmi: f64,
    pub category: BmiCategory,
    /// Weight range for a normal BMI (18.5–24.9) at this height
    pub healthy_min_kg: f64,
    pub healthy_max_kg: f64,
}

pub fn calculate(input: &BmiInput) -> CalcResult<BmiResult> {
    input.validate()?;
    let meters = input.height_cm / 100.0;
    let bmi = input.weight_kg / (meters * meters);
    Ok(BmiResult {
        bmi,
        category: BmiCategory::from_bmi(bmi),
        healthy_min_kg: 18.5 * meters * meters,
        healthy_max_kg: 24.9 * meters * meters,
    })
}

pub struct BodyMassIndex;

impl Calculator for BodyMassIndex {
    type Input = BmiInput;
    type Output = BmiResult;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::number("weight_kg", "Weight").unit("kg").placeholder("70"),
        FieldSpec::number("height_cm", "Height").unit("cm").placeholder("175"),
    ];

    fn parse(form: &FormValues) -> CalcResult<BmiInput> {
        Ok(BmiInput {
            weight_kg: form.required_number("weight_kg")?,
            height_cm: form.required_number("height_cm")?,
        })
    }

    fn calculate(input: &BmiInput) -> CalcResult<BmiResult> {
        calculate(input)
    }

    fn report(output: &BmiResult) -> Report {
        let min_lb: Pounds = Kilograms(output.healthy_min_kg).into();
        let max_lb: Pounds = Kilograms(output.healthy_max_kg).into();
        Report::new("BMI", fixed(output.bmi, 1))
            .line("Category", output.category.display_name())
            .line(
                "Healthy weight for your height",
                format!(
                    "{}–{} kg ({}–{} lb)",
                    fixed(output.healthy_min_kg, 1),
                    fixed(output.healthy_max_kg, 1),
                    fixed(min_lb.value(), 0),
                    fixed(max_lb.value(), 0)
                ),
            )
            .note("BMI does not distinguish muscle from fat and is a screening tool, not a diagnosis.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_weight() {
        let result = calculate(&BmiInput {
            weight_kg: 70.0,
            height_cm: 175.0,
        })
        .unwrap();
        assert!((result.bmi - 22.857).abs() < 0.001);
        assert_eq!(result.category, BmiCategory::Normal);
        assert_eq!(BodyMassIndex::report(&result).headline.value, "22.9");
    }

    #[test]
    fn test_category_boundaries() {
        assert_eq!(BmiCategory::from_bmi(18.49), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::ObeseClass1);
        assert_eq!(BmiCategory::from_bmi(40.0), BmiCategory::ObeseClass3);
    }

    #[test]
    fn test_out_of_range_height() {
        assert!(calculate(&BmiInput {
            weight_kg: 70.0,
            height_cm: 10.0
        })
        .is_err());
    }
}
