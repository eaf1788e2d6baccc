//! Health calculators: body composition, energy needs, heart rate and
//! pregnancy dating.
//!
//! Several calculators share the [`Sex`] choice, since most of the
//! published formulas have separate male and female coefficients.

pub mod army_body_fat;
pub mod bmi;
pub mod bmr;
pub mod calorie_needs;
pub mod due_date;
pub mod ideal_weight;
pub mod target_heart_rate;
pub mod waist_to_hip;
pub mod water_intake;

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::form::{Choice, FormValues};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub const CHOICES: &'static [Choice] = &[Choice::new("male", "Male"), Choice::new("female", "Female")];

    /// Read the `sex` field of a form
    pub fn from_form(form: &FormValues) -> CalcResult<Sex> {
        match form.required_choice("sex", Sex::CHOICES)? {
            "female" => Ok(Sex::Female),
            _ => Ok(Sex::Male),
        }
    }
}
