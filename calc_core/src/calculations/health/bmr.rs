//! # Basal Metabolic Rate
//!
//! Mifflin-St Jeor equation, kcal/day:
//!
//! ```text
//! male:   10·kg + 6.25·cm − 5·age + 5
//! female: 10·kg + 6.25·cm − 5·age − 161
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::health::Sex;
use crate::calculations::Calculator;
use crate::errors::CalcResult;
use crate::form::{FieldSpec, FormValues};
use crate::format::grouped;
use crate::report::Report;
use crate::validation::ensure_range;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmrInput {
    pub sex: Sex,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: f64,
}

impl BmrInput {
    pub fn validate(&self) -> CalcResult<()> {
        ensure_range("weight_kg", self.weight_kg, 1.0, 500.0)?;
        ensure_range("height_cm", self.height_cm, 50.0, 272.0)?;
        ensure_range("age", self.age, 1.0, 120.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmrResult {
    /// kcal/day
    pub bmr: f64,
}

pub fn calculate(input: &BmrInput) -> CalcResult<BmrResult> {
    input.validate()?;
    let offset = match input.sex {
        Sex::Male => 5.0,
        Sex::Female => -161.0,
    };
    Ok(BmrResult {
        bmr: 10.0 * input.weight_kg + 6.25 * input.height_cm - 5.0 * input.age + offset,
    })
}

pub struct BasalMetabolicRate;

impl Calculator for BasalMetabolicRate {
    type Input = BmrInput;
    type Output = BmrResult;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::choice("sex", "Sex", Sex::CHOICES),
        FieldSpec::number("weight_kg", "Weight").unit("kg").placeholder("70"),
        FieldSpec::number("height_cm", "Height").unit("cm").placeholder("175"),
        FieldSpec::number("age", "Age").unit("years").placeholder("30"),
    ];

    fn parse(form: &FormValues) -> CalcResult<BmrInput> {
        Ok(BmrInput {
            sex: Sex::from_form(form)?,
            weight_kg: form.required_number("weight_kg")?,
            height_cm: form.required_number("height_cm")?,
            age: form.required_number("age")?,
        })
    }

    fn calculate(input: &BmrInput) -> CalcResult<BmrResult> {
        calculate(input)
    }

    fn report(output: &BmrResult) -> Report {
        Report::new("BMR", format!("{} kcal/day", grouped(output.bmr, 0)))
            .note("Energy used at complete rest. Multiply by an activity factor for daily needs.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_male_and_female() {
        let male = calculate(&BmrInput {
            sex: Sex::Male,
            weight_kg: 70.0,
            height_cm: 175.0,
            age: 30.0,
        })
        .unwrap();
        assert_eq!(male.bmr, 1648.75);
        let female = calculate(&BmrInput {
            sex: Sex::Female,
            weight_kg: 60.0,
            height_cm: 165.0,
            age: 25.0,
        })
        .unwrap();
        assert_eq!(female.bmr, 1345.25);
    }

    #[test]
    fn test_report() {
        let report = BasalMetabolicRate::report(&BmrResult { bmr: 1648.75 });
        assert_eq!(report.headline.value, "1,649 kcal/day");
    }
}
