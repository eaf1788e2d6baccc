//! # Army Body Fat
//!
//! U.S. Army circumference-based body fat estimate (AR 600-9), all
//! measurements in inches:
//!
//! ```text
//! male:   %BF = 86.010·log10(waist − neck) − 70.041·log10(height) + 36.76
//! female: %BF = 163.205·log10(waist + hip − neck) − 97.684·log10(height) − 78.387
//! ```
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::health::army_body_fat::{calculate, ArmyBodyFatInput};
//! use calc_core::calculations::health::Sex;
//!
//! let input = ArmyBodyFatInput {
//!     sex: Sex::Male,
//!     height_in: 70.0,
//!     neck_in: 15.0,
//!     waist_in: 34.0,
//!     hip_in: None,
//! };
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.body_fat_percent, 17.5);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::health::Sex;
use crate::calculations::Calculator;
use crate::errors::{CalcError, CalcResult};
use crate::form::{FieldSpec, FormValues};
use crate::format::percent;
use crate::report::Report;
use crate::validation::ensure_range;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArmyBodyFatInput {
    pub sex: Sex,
    pub height_in: f64,
    pub neck_in: f64,
    pub waist_in: f64,
    /// Required for women
    #[serde(default)]
    pub hip_in: Option<f64>,
}

impl ArmyBodyFatInput {
    pub fn validate(&self) -> CalcResult<()> {
        ensure_range("height_in", self.height_in, 36.0, 96.0)?;
        ensure_range("neck_in", self.neck_in, 5.0, 40.0)?;
        ensure_range("waist_in", self.waist_in, 15.0, 80.0)?;
        match (self.sex, self.hip_in) {
            (Sex::Female, None) => Err(CalcError::missing_field("hip_in")),
            (_, Some(hip)) => ensure_range("hip_in", hip, 15.0, 80.0),
            (Sex::Male, None) => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArmyBodyFatResult {
    /// Rounded to one decimal place
    pub body_fat_percent: f64,
}

pub fn calculate(input: &ArmyBodyFatInput) -> CalcResult<ArmyBodyFatResult> {
    input.validate()?;

    let circumference = match input.sex {
        Sex::Male => input.waist_in - input.neck_in,
        Sex::Female => input.waist_in + input.hip_in.unwrap_or_default() - input.neck_in,
    };
    if circumference <= 0.0 {
        return Err(CalcError::domain(
            "army body fat",
            "the neck measurement must be smaller than the waist (and hip) measurement",
        ));
    }

    let raw = match input.sex {
        Sex::Male => 86.010 * circumference.log10() - 70.041 * input.height_in.log10() + 36.76,
        Sex::Female => 163.205 * circumference.log10() - 97.684 * input.height_in.log10() - 78.387,
    };

    Ok(ArmyBodyFatResult {
        body_fat_percent: (raw * 10.0).round() / 10.0,
    })
}

pub struct ArmyBodyFat;

impl Calculator for ArmyBodyFat {
    type Input = ArmyBodyFatInput;
    type Output = ArmyBodyFatResult;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::choice("sex", "Sex", Sex::CHOICES),
        FieldSpec::number("height_in", "Height").unit("in").placeholder("70"),
        FieldSpec::number("neck_in", "Neck").unit("in").placeholder("15"),
        FieldSpec::number("waist_in", "Waist").unit("in").placeholder("34"),
        FieldSpec::number("hip_in", "Hip (women)").unit("in").placeholder("40").optional(),
    ];

    fn parse(form: &FormValues) -> CalcResult<ArmyBodyFatInput> {
        Ok(ArmyBodyFatInput {
            sex: Sex::from_form(form)?,
            height_in: form.required_number("height_in")?,
            neck_in: form.required_number("neck_in")?,
            waist_in: form.required_number("waist_in")?,
            hip_in: form.optional_number("hip_in")?,
        })
    }

    fn calculate(input: &ArmyBodyFatInput) -> CalcResult<ArmyBodyFatResult> {
        calculate(input)
    }

    fn report(output: &ArmyBodyFatResult) -> Report {
        Report::new("Body fat", percent(output.body_fat_percent, 1))
            .note("Circumference tape method; measure at the narrowest point of the neck and at the navel.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn male(height: f64, neck: f64, waist: f64) -> ArmyBodyFatInput {
        ArmyBodyFatInput {
            sex: Sex::Male,
            height_in: height,
            neck_in: neck,
            waist_in: waist,
            hip_in: None,
        }
    }

    #[test]
    fn test_male_formula() {
        let result = calculate(&male(70.0, 15.0, 34.0)).unwrap();
        // 86.010*log10(19) - 70.041*log10(70) + 36.76 = 17.51...
        assert_eq!(result.body_fat_percent, 17.5);
    }

    #[test]
    fn test_female_formula() {
        let input = ArmyBodyFatInput {
            sex: Sex::Female,
            height_in: 64.0,
            neck_in: 13.0,
            waist_in: 30.0,
            hip_in: Some(38.0),
        };
        let result = calculate(&input).unwrap();
        // 163.205*log10(55) - 97.684*log10(64) - 78.387 = 29.21...
        assert_eq!(result.body_fat_percent, 29.2);
    }

    #[test]
    fn test_female_requires_hip() {
        let input = ArmyBodyFatInput {
            sex: Sex::Female,
            height_in: 64.0,
            neck_in: 13.0,
            waist_in: 30.0,
            hip_in: None,
        };
        assert_eq!(calculate(&input).unwrap_err(), CalcError::missing_field("hip_in"));
    }

    #[test]
    fn test_neck_not_smaller_than_waist_is_domain_error() {
        let err = calculate(&male(70.0, 30.0, 30.0)).unwrap_err();
        assert_eq!(err.error_code(), "DOMAIN_ERROR");
        // neck larger than waist: rejected before any logarithm is taken
        let err = calculate(&male(70.0, 40.0, 20.0)).unwrap_err();
        assert_eq!(err.error_code(), "DOMAIN_ERROR");
        assert!(!err.to_string().contains("NaN"));
    }

    #[test]
    fn test_result_is_deterministic() {
        let input = male(68.0, 16.0, 36.5);
        assert_eq!(calculate(&input), calculate(&input));
    }

    #[test]
    fn test_form_parsing() {
        let form = FormValues::new()
            .with("sex", "Male")
            .with("height_in", "70")
            .with("neck_in", "15")
            .with("waist_in", "34");
        let evaluation = crate::calculations::CalculatorKind::ArmyBodyFat.evaluate(&form).unwrap();
        assert_eq!(evaluation.report.headline.value, "17.5%");
    }
}
