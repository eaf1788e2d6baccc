//! # Daily Calorie Needs
//!
//! Total daily energy expenditure: Mifflin-St Jeor BMR times an activity
//! multiplier, with common weight-loss and weight-gain targets.
//!
//! | Activity          | Multiplier |
//! |-------------------|------------|
//! | Sedentary         | 1.2        |
//! | Lightly active    | 1.375      |
//! | Moderately active | 1.55       |
//! | Very active       | 1.725      |
//! | Extra active      | 1.9        |

use serde::{Deserialize, Serialize};

use crate::calculations::health::Sex;
use crate::calculations::Calculator;
use crate::errors::CalcResult;
use crate::form::{Choice, FieldSpec, FormValues};
use crate::format::grouped;
use crate::report::{Report, ReportTable};
use crate::validation::ensure_range;

/// ~0.5 kg per week
const DAILY_ADJUSTMENT: f64 = 500.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    ExtraActive,
}

impl ActivityLevel {
    pub const CHOICES: &'static [Choice] = &[
        Choice::new("sedentary", "Sedentary (little or no exercise)"),
        Choice::new("light", "Lightly active (1-3 days/week)"),
        Choice::new("moderate", "Moderately active (3-5 days/week)"),
        Choice::new("active", "Very active (6-7 days/week)"),
        Choice::new("extra_active", "Extra active (physical job or twice daily)"),
    ];

    fn from_choice(value: &str) -> Self {
        match value {
            "sedentary" => ActivityLevel::Sedentary,
            "light" => ActivityLevel::Light,
            "active" => ActivityLevel::Active,
            "extra_active" => ActivityLevel::ExtraActive,
            _ => ActivityLevel::Moderate,
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalorieInput {
    pub sex: Sex,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: f64,
    pub activity: ActivityLevel,
}

impl CalorieInput {
    pub fn validate(&self) -> CalcResult<()> {
        ensure_range("weight_kg", self.weight_kg, 1.0, 500.0)?;
        ensure_range("height_cm", self.height_cm, 50.0, 272.0)?;
        ensure_range("age", self.age, 1.0, 120.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalorieResult {
    pub bmr: f64,
    pub maintenance: f64,
    pub weight_loss: f64,
    pub weight_gain: f64,
}

pub fn calculate(input: &CalorieInput) -> CalcResult<CalorieResult> {
    input.validate()?;
    let offset = match input.sex {
        Sex::Male => 5.0,
        Sex::Female => -161.0,
    };
    let bmr = 10.0 * input.weight_kg + 6.25 * input.height_cm - 5.0 * input.age + offset;
    let maintenance = bmr * input.activity.multiplier();
    Ok(CalorieResult {
        bmr,
        maintenance,
        weight_loss: (maintenance - DAILY_ADJUSTMENT).max(0.0),
        weight_gain: maintenance + DAILY_ADJUSTMENT,
    })
}

pub struct CalorieNeeds;

impl Calculator for CalorieNeeds {
    type Input = CalorieInput;
    type Output = CalorieResult;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::choice("sex", "Sex", Sex::CHOICES),
        FieldSpec::number("weight_kg", "Weight").unit("kg").placeholder("70"),
        FieldSpec::number("height_cm", "Height").unit("cm").placeholder("175"),
        FieldSpec::number("age", "Age").unit("years").placeholder("30"),
        FieldSpec::choice("activity", "Activity level", ActivityLevel::CHOICES),
    ];

    fn parse(form: &FormValues) -> CalcResult<CalorieInput> {
        Ok(CalorieInput {
            sex: Sex::from_form(form)?,
            weight_kg: form.required_number("weight_kg")?,
            height_cm: form.required_number("height_cm")?,
            age: form.required_number("age")?,
            activity: ActivityLevel::from_choice(form.choice_or("activity", ActivityLevel::CHOICES, "moderate")?),
        })
    }

    fn calculate(input: &CalorieInput) -> CalcResult<CalorieResult> {
        calculate(input)
    }

    fn report(output: &CalorieResult) -> Report {
        let kcal = |v: f64| format!("{} kcal/day", grouped(v, 0));
        let mut table = ReportTable::new("Targets", ["Goal", "Calories"]);
        table.push_row(["Lose ~0.5 kg/week".to_string(), kcal(output.weight_loss)]);
        table.push_row(["Maintain".to_string(), kcal(output.maintenance)]);
        table.push_row(["Gain ~0.5 kg/week".to_string(), kcal(output.weight_gain)]);
        Report::new("Maintenance calories", kcal(output.maintenance))
            .line("BMR", kcal(output.bmr))
            .table(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moderate_male() {
        let result = calculate(&CalorieInput {
            sex: Sex::Male,
            weight_kg: 70.0,
            height_cm: 175.0,
            age: 30.0,
            activity: ActivityLevel::Moderate,
        })
        .unwrap();
        assert_eq!(result.bmr, 1648.75);
        assert!((result.maintenance - 2555.5625).abs() < 1e-9);
        assert!((result.weight_loss - 2055.5625).abs() < 1e-9);
    }

    #[test]
    fn test_activity_defaults_to_moderate() {
        let form = FormValues::new()
            .with("sex", "female")
            .with("weight_kg", "60")
            .with("height_cm", "165")
            .with("age", "25");
        assert_eq!(CalorieNeeds::parse(&form).unwrap().activity, ActivityLevel::Moderate);
    }

    #[test]
    fn test_multipliers_increase() {
        let levels = [
            ActivityLevel::Sedentary,
            ActivityLevel::Light,
            ActivityLevel::Moderate,
            ActivityLevel::Active,
            ActivityLevel::ExtraActive,
        ];
        assert!(levels.windows(2).all(|w| w[0].multiplier() < w[1].multiplier()));
    }
}
