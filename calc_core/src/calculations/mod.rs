//! # Calculators
//!
//! Every calculator lives in its own module and follows the same pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable) with `validate()`
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//! - a unit struct implementing [`Calculator`], which adds the form fields,
//!   form parsing and the display [`Report`]
//!
//! No calculator depends on another. [`CalculatorKind`] is the only place
//! that knows all of them, and it only dispatches.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::CalculatorKind;
//! use calc_core::form::FormValues;
//!
//! let form = FormValues::new().with("x", "3").with("y", "4");
//! let evaluation = CalculatorKind::CartesianToPolar.evaluate(&form).unwrap();
//! assert_eq!(evaluation.report.headline.value, "5.0000");
//! ```

pub mod finance;
pub mod gaming;
pub mod health;
pub mod math;
pub mod science;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::form::{FieldSpec, FormValues};
use crate::report::{Evaluation, Report};
use crate::validation::ensure_finite_output;

/// The form-to-formula-to-report contract every calculator implements.
pub trait Calculator {
    /// Typed, validated input
    type Input: Serialize + DeserializeOwned;
    /// Typed result
    type Output: Serialize;

    /// Form fields in display order
    const FIELDS: &'static [FieldSpec];

    /// Turn raw form text into a typed input.
    ///
    /// Only parsing happens here; range checks belong to `calculate`, so the
    /// JSON path gets the same validation.
    fn parse(form: &FormValues) -> CalcResult<Self::Input>;

    /// Run the formula
    fn calculate(input: &Self::Input) -> CalcResult<Self::Output>;

    /// Render a result for display
    fn report(output: &Self::Output) -> Report;
}

/// Every result, in every field, must be a finite number before anyone
/// sees it; overflow on extreme inputs becomes a `DomainError`.
fn run_form<C: Calculator>(name: &str, form: &FormValues) -> CalcResult<Evaluation> {
    let input = C::parse(form)?;
    let output = C::calculate(&input)?;
    ensure_finite_output(name, &output)?;
    let report = C::report(&output);
    if let Some(label) = report.non_finite_label() {
        return Err(CalcError::domain(
            name,
            format!("{} is too large or undefined for these inputs", label),
        ));
    }
    Ok(Evaluation {
        report,
        data: serde_json::to_value(&output)?,
    })
}

fn run_json<C: Calculator>(name: &str, value: serde_json::Value) -> CalcResult<serde_json::Value> {
    let input: C::Input = serde_json::from_value(value)?;
    let output = C::calculate(&input)?;
    ensure_finite_output(name, &output)?;
    Ok(serde_json::to_value(&output)?)
}

macro_rules! calculator_kinds {
    ($($variant:ident => $calc:ty),+ $(,)?) => {
        /// Identifies one calculator. Serializes as its variant name.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum CalculatorKind {
            $($variant),+
        }

        impl CalculatorKind {
            /// Every calculator, in catalog order
            pub const ALL: &'static [CalculatorKind] = &[$(CalculatorKind::$variant),+];

            /// Form fields for this calculator
            pub fn fields(self) -> &'static [FieldSpec] {
                match self {
                    $(CalculatorKind::$variant => <$calc as Calculator>::FIELDS),+
                }
            }

            fn dispatch_form(self, form: &FormValues) -> CalcResult<Evaluation> {
                match self {
                    $(CalculatorKind::$variant => run_form::<$calc>(stringify!($variant), form)),+
                }
            }

            fn dispatch_json(self, value: serde_json::Value) -> CalcResult<serde_json::Value> {
                match self {
                    $(CalculatorKind::$variant => run_json::<$calc>(stringify!($variant), value)),+
                }
            }
        }
    };
}

calculator_kinds! {
    // Math
    CartesianToPolar => math::cartesian_to_polar::CartesianToPolar,
    PolarToCartesian => math::polar_to_cartesian::PolarToCartesian,
    CircumferenceToDiameter => math::circumference_to_diameter::CircumferenceToDiameter,
    RiemannSum => math::riemann_sum::RiemannSum,
    Jacobian => math::jacobian::Jacobian,
    Convolution => math::convolution::Convolution,
    QuadraticEquation => math::quadratic::QuadraticEquation,
    Percentage => math::percentage::Percentage,
    Pythagorean => math::pythagorean::Pythagorean,
    Logarithm => math::logarithm::Logarithm,
    CombinationsPermutations => math::combinations::CombinationsPermutations,
    GcdLcm => math::gcd_lcm::GcdLcm,
    DistanceMidpointSlope => math::distance_midpoint::DistanceMidpointSlope,
    TriangleArea => math::triangle_area::TriangleArea,
    DescriptiveStatistics => math::statistics::DescriptiveStatistics,
    // Finance
    CdLadder => finance::cd_ladder::CdLadder,
    CompoundInterest => finance::compound_interest::CompoundInterest,
    SimpleInterest => finance::simple_interest::SimpleInterest,
    LoanPayment => finance::loan_payment::LoanPayment,
    ReturnOnInvestment => finance::roi::ReturnOnInvestment,
    Inflation => finance::inflation::Inflation,
    Tip => finance::tip::Tip,
    SalesTax => finance::sales_tax::SalesTax,
    ArkansasChildSupport => finance::child_support::ArkansasChildSupport,
    WaspiCompensation => finance::waspi::WaspiCompensation,
    HourlyWage => finance::hourly_wage::HourlyWage,
    // Health
    ArmyBodyFat => health::army_body_fat::ArmyBodyFat,
    BodyMassIndex => health::bmi::BodyMassIndex,
    BasalMetabolicRate => health::bmr::BasalMetabolicRate,
    CalorieNeeds => health::calorie_needs::CalorieNeeds,
    IdealWeight => health::ideal_weight::IdealWeight,
    WaterIntake => health::water_intake::WaterIntake,
    TargetHeartRate => health::target_heart_rate::TargetHeartRate,
    DueDate => health::due_date::DueDate,
    WaistToHipRatio => health::waist_to_hip::WaistToHipRatio,
    // Gaming
    DiceProbability => gaming::dice_probability::DiceProbability,
    DamagePerSecond => gaming::dps::DamagePerSecond,
    EloRating => gaming::elo::EloRating,
    KdRatio => gaming::kd_ratio::KdRatio,
    XpToLevel => gaming::xp_to_level::XpToLevel,
    DropChance => gaming::drop_chance::DropChance,
    // Science
    MmToInches => science::mm_to_inches::MmToInches,
    TemperatureConverter => science::temperature::TemperatureConverter,
    OhmsLaw => science::ohms_law::OhmsLaw,
    SpeedDistanceTime => science::speed::SpeedDistanceTime,
    KineticEnergy => science::kinetic_energy::KineticEnergy,
    Density => science::density::Density,
    HalfLife => science::half_life::HalfLife,
    Ph => science::ph::Ph,
    Molarity => science::molarity::Molarity,
    WavelengthFrequency => science::wavelength::WavelengthFrequency,
}

impl CalculatorKind {
    /// Parse, validate and compute from raw form values.
    ///
    /// On failure the error describes the first offending field; callers
    /// keep whatever result they were showing before.
    pub fn evaluate(self, form: &FormValues) -> CalcResult<Evaluation> {
        let outcome = self.dispatch_form(form);
        match &outcome {
            Ok(_) => tracing::debug!(calculator = ?self, "evaluation succeeded"),
            Err(e) => tracing::debug!(calculator = ?self, code = e.error_code(), "evaluation rejected: {}", e),
        }
        outcome
    }

    /// Compute from a JSON-encoded `*Input`, returning the JSON `*Result`.
    pub fn evaluate_json(self, input: serde_json::Value) -> CalcResult<serde_json::Value> {
        tracing::debug!(calculator = ?self, "evaluating JSON input");
        self.dispatch_json(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_calculator_has_fields() {
        for kind in CalculatorKind::ALL {
            let fields = kind.fields();
            assert!(!fields.is_empty(), "{:?} has no fields", kind);
            assert!(fields.len() <= 8, "{:?} has too many fields", kind);
            let keys: HashSet<_> = fields.iter().map(|f| f.key).collect();
            assert_eq!(keys.len(), fields.len(), "{:?} repeats a field key", kind);
        }
    }

    #[test]
    fn test_blank_form_is_rejected_everywhere() {
        for kind in CalculatorKind::ALL {
            let result = kind.evaluate(&FormValues::new());
            assert!(result.is_err(), "{:?} accepted an empty form", kind);
        }
    }

    /// Placeholder values, or the first option of a choice field
    fn sample_form(kind: CalculatorKind) -> FormValues {
        let mut form = FormValues::new();
        for field in kind.fields() {
            let value = match field.choices().first() {
                Some(choice) if field.placeholder.is_empty() => choice.value,
                _ => field.placeholder,
            };
            if !value.is_empty() {
                form.set(field.key, value);
            }
        }
        form
    }

    #[test]
    fn test_extreme_inputs_never_render_non_finite_values() {
        use crate::form::FieldKind;
        const EXTREMES: [&str; 5] = ["1e300", "-1e300", "1e-300", "-1e-300", "1e308"];
        for kind in CalculatorKind::ALL {
            let base = sample_form(*kind);
            let numeric: Vec<_> = kind
                .fields()
                .iter()
                .filter(|f| matches!(f.kind, FieldKind::Number | FieldKind::NumberList))
                .collect();
            for extreme in EXTREMES {
                let list = format!("{0}, {0}", extreme);
                let text = |field: &crate::form::FieldSpec| match field.kind {
                    FieldKind::NumberList => list.clone(),
                    _ => extreme.to_string(),
                };
                // one field at a time, then all of them together
                let mut forms: Vec<FormValues> = numeric
                    .iter()
                    .map(|field| base.clone().with(field.key, text(*field)))
                    .collect();
                let mut all = base.clone();
                for field in &numeric {
                    all.set(field.key, text(*field));
                }
                forms.push(all);

                for form in forms {
                    match kind.evaluate(&form) {
                        Ok(evaluation) => {
                            let report = &evaluation.report;
                            assert_eq!(report.non_finite_label(), None, "{:?} with {:?}", kind, form);
                            let rendered = report.to_text();
                            assert!(
                                !rendered.split(|c: char| !c.is_ascii_alphanumeric()).any(|w| w == "inf" || w == "NaN"),
                                "{:?} rendered {}",
                                kind,
                                rendered
                            );
                        }
                        Err(err) => assert!(err.is_user_error(), "{:?} with {:?}: {}", kind, form, err),
                    }
                }
            }
        }
    }

    #[test]
    fn test_overflowing_results_are_domain_errors() {
        let cases = [
            (CalculatorKind::Convolution, FormValues::new().with("signal", "1e200").with("kernel", "1e200")),
            (CalculatorKind::SalesTax, FormValues::new().with("price", "1e308").with("tax_rate", "100")),
            (
                CalculatorKind::Percentage,
                FormValues::new().with("mode", "what").with("first", "1e300").with("second", "1e-300"),
            ),
            (CalculatorKind::Density, FormValues::new().with("mass_g", "1e306").with("volume_cm3", "1")),
            (
                CalculatorKind::SpeedDistanceTime,
                FormValues::new().with("distance_km", "1e308").with("time_hours", "0.001"),
            ),
            (
                CalculatorKind::Jacobian,
                FormValues::new()
                    .with("functions", "1e200*x; 1e200*y")
                    .with("variables", "x, y")
                    .with("point", "1, 1"),
            ),
        ];
        for (kind, form) in cases {
            let err = kind.evaluate(&form).unwrap_err();
            assert_eq!(err.error_code(), "DOMAIN_ERROR", "{:?}: {}", kind, err);
            assert!(!err.to_string().contains("inf"), "{:?}: {}", kind, err);
        }

        // the JSON path applies the same check
        let err = CalculatorKind::Density
            .evaluate_json(serde_json::json!({ "mass_g": 1e306, "volume_cm3": 1.0 }))
            .unwrap_err();
        assert_eq!(err.error_code(), "DOMAIN_ERROR");
        assert!(err.to_string().contains("kg_per_m3"));

        // a mean that fits is still reported even when the sum does not
        let form = FormValues::new().with("values", "1e308, 1e308");
        let evaluation = CalculatorKind::DescriptiveStatistics.evaluate(&form).unwrap();
        assert_eq!(evaluation.report.non_finite_label(), None);
        assert_eq!(evaluation.data["mean"].as_f64(), Some(1e308));
    }

    #[test]
    fn test_non_numeric_first_number_field_is_rejected() {
        use crate::form::FieldKind;
        for kind in CalculatorKind::ALL {
            let Some(field) = kind.fields().iter().find(|f| f.kind == FieldKind::Number && f.required) else {
                continue;
            };
            let form = FormValues::new().with(field.key, "twelve");
            let err = kind.evaluate(&form).unwrap_err();
            assert!(err.is_user_error(), "{:?}: {}", kind, err);
        }
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let form = FormValues::new().with("x", "3").with("y", "4");
        let first = CalculatorKind::CartesianToPolar.evaluate(&form).unwrap();
        let second = CalculatorKind::CartesianToPolar.evaluate(&form).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_json_path_validates() {
        let bad = serde_json::json!({ "millimeters": -1.0 });
        assert!(CalculatorKind::MmToInches.evaluate_json(bad).is_err());
        let good = serde_json::json!({ "millimeters": 25.4 });
        let out = CalculatorKind::MmToInches.evaluate_json(good).unwrap();
        assert!((out["inches"].as_f64().unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_kind_serializes_as_name() {
        let json = serde_json::to_string(&CalculatorKind::ArmyBodyFat).unwrap();
        assert_eq!(json, "\"ArmyBodyFat\"");
    }
}
