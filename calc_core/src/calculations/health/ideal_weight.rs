//! # Ideal Body Weight
//!
//! Four classic formulas, each a base weight for 5 ft plus a fixed amount
//! per inch above 5 ft (weights in kg):
//!
//! | Formula  | Male           | Female         |
//! |----------|----------------|----------------|
//! | Devine   | 50 + 2.3/in    | 45.5 + 2.3/in  |
//! | Robinson | 52 + 1.9/in    | 49 + 1.7/in    |
//! | Miller   | 56.2 + 1.41/in | 53.1 + 1.36/in |
//! | Hamwi    | 48 + 2.7/in    | 45.5 + 2.2/in  |

use serde::{Deserialize, Serialize};

use crate::calculations::health::Sex;
use crate::calculations::Calculator;
use crate::errors::CalcResult;
use crate::form::{FieldSpec, FormValues};
use crate::format::fixed;
use crate::report::{Report, ReportTable};
use crate::units::{Kilograms, Pounds};
use crate::validation::ensure_range;

const BASE_HEIGHT_IN: f64 = 60.0;

/// (name, male base, male per inch, female base, female per inch)
const FORMULAS: [(&str, f64, f64, f64, f64); 4] = [
    ("Devine", 50.0, 2.3, 45.5, 2.3),
    ("Robinson", 52.0, 1.9, 49.0, 1.7),
    ("Miller", 56.2, 1.41, 53.1, 1.36),
    ("Hamwi", 48.0, 2.7, 45.5, 2.2),
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IdealWeightInput {
    pub sex: Sex,
    pub height_in: f64,
}

impl IdealWeightInput {
    pub fn validate(&self) -> CalcResult<()> {
        ensure_range("height_in", self.height_in, 48.0, 96.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormulaWeight {
    pub formula: String,
    pub kg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdealWeightResult {
    pub estimates: Vec<FormulaWeight>,
    pub average_kg: f64,
}

pub fn calculate(input: &IdealWeightInput) -> CalcResult<IdealWeightResult> {
    input.validate()?;
    let inches_over = input.height_in - BASE_HEIGHT_IN;
    let estimates: Vec<FormulaWeight> = FORMULAS
        .iter()
        .map(|(name, male_base, male_step, female_base, female_step)| {
            let kg = match input.sex {
                Sex::Male => male_base + male_step * inches_over,
                Sex::Female => female_base + female_step * inches_over,
            };
            FormulaWeight {
                formula: name.to_string(),
                kg,
            }
        })
        .collect();
    let average_kg = estimates.iter().map(|e| e.kg).sum::<f64>() / estimates.len() as f64;
    Ok(IdealWeightResult { estimates, average_kg })
}

pub struct IdealWeight;

impl Calculator for IdealWeight {
    type Input = IdealWeightInput;
    type Output = IdealWeightResult;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::choice("sex", "Sex", Sex::CHOICES),
        FieldSpec::number("height_in", "Height").unit("in").placeholder("70"),
    ];

    fn parse(form: &FormValues) -> CalcResult<IdealWeightInput> {
        Ok(IdealWeightInput {
            sex: Sex::from_form(form)?,
            height_in: form.required_number("height_in")?,
        })
    }

    fn calculate(input: &IdealWeightInput) -> CalcResult<IdealWeightResult> {
        calculate(input)
    }

    fn report(output: &IdealWeightResult) -> Report {
        let lb = |kg: f64| -> f64 { Pounds::from(Kilograms(kg)).value() };
        let mut table = ReportTable::new("By formula", ["Formula", "kg", "lb"]);
        for e in &output.estimates {
            table.push_row([e.formula.clone(), fixed(e.kg, 1), fixed(lb(e.kg), 1)]);
        }
        let report = Report::new(
            "Average ideal weight",
            format!("{} kg ({} lb)", fixed(output.average_kg, 1), fixed(lb(output.average_kg), 1)),
        )
        .table(table);
        if output.estimates.iter().any(|e| e.kg <= 0.0) {
            report.note("These formulas were designed for adults at least 5 ft tall.")
        } else {
            report
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_male_seventy_inches() {
        let result = calculate(&IdealWeightInput {
            sex: Sex::Male,
            height_in: 70.0,
        })
        .unwrap();
        let kg: Vec<f64> = result.estimates.iter().map(|e| e.kg).collect();
        assert!((kg[0] - 73.0).abs() < 1e-9);
        assert!((kg[1] - 71.0).abs() < 1e-9);
        assert!((kg[2] - 70.3).abs() < 1e-9);
        assert!((kg[3] - 75.0).abs() < 1e-9);
        assert!((result.average_kg - 72.325).abs() < 1e-9);
    }

    #[test]
    fn test_female_at_five_feet_is_base() {
        let result = calculate(&IdealWeightInput {
            sex: Sex::Female,
            height_in: 60.0,
        })
        .unwrap();
        assert_eq!(result.estimates[0].kg, 45.5);
        assert_eq!(result.estimates[2].kg, 53.1);
    }
}
