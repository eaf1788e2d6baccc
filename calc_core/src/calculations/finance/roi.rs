//! # Return on Investment
//!
//! ```text
//! ROI            = (returned − invested) / invested · 100
//! annualized ROI = ((returned / invested)^(1/years) − 1) · 100
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::Calculator;
use crate::errors::CalcResult;
use crate::form::{FieldSpec, FormValues};
use crate::format::{currency, percent};
use crate::report::Report;
use crate::validation::{ensure_non_negative, ensure_positive};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiInput {
    pub invested: f64,
    pub returned: f64,
    /// Holding period; enables the annualized figure
    #[serde(default)]
    pub years: Option<f64>,
}

impl RoiInput {
    pub fn validate(&self) -> CalcResult<()> {
        ensure_positive("invested", self.invested)?;
        ensure_non_negative("returned", self.returned)?;
        if let Some(years) = self.years {
            ensure_positive("years", years)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiResult {
    pub gain: f64,
    /// Percent
    pub roi: f64,
    /// Percent per year, when a holding period was given
    pub annualized_roi: Option<f64>,
}

pub fn calculate(input: &RoiInput) -> CalcResult<RoiResult> {
    input.validate()?;
    let gain = input.returned - input.invested;
    let ratio = input.returned / input.invested;
    Ok(RoiResult {
        gain,
        roi: gain / input.invested * 100.0,
        annualized_roi: input.years.map(|years| (ratio.powf(1.0 / years) - 1.0) * 100.0),
    })
}

pub struct ReturnOnInvestment;

impl Calculator for ReturnOnInvestment {
    type Input = RoiInput;
    type Output = RoiResult;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::number("invested", "Amount invested").unit("$").placeholder("1000"),
        FieldSpec::number("returned", "Amount returned").unit("$").placeholder("1500"),
        FieldSpec::number("years", "Holding period").unit("years").placeholder("3").optional(),
    ];

    fn parse(form: &FormValues) -> CalcResult<RoiInput> {
        Ok(RoiInput {
            invested: form.required_number("invested")?,
            returned: form.required_number("returned")?,
            years: form.optional_number("years")?,
        })
    }

    fn calculate(input: &RoiInput) -> CalcResult<RoiResult> {
        calculate(input)
    }

    fn report(output: &RoiResult) -> Report {
        let label = if output.gain >= 0.0 { "Gain" } else { "Loss" };
        let report = Report::new("ROI", percent(output.roi, 2)).line(label, currency(output.gain.abs(), "$"));
        match output.annualized_roi {
            Some(annual) => report.line("Annualized ROI", percent(annual, 2)),
            None => report,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gain() {
        let result = calculate(&RoiInput {
            invested: 1000.0,
            returned: 1500.0,
            years: None,
        })
        .unwrap();
        assert_eq!(result.roi, 50.0);
        assert_eq!(result.annualized_roi, None);
    }

    #[test]
    fn test_annualized() {
        let result = calculate(&RoiInput {
            invested: 1000.0,
            returned: 1210.0,
            years: Some(2.0),
        })
        .unwrap();
        assert!((result.annualized_roi.unwrap() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_loss() {
        let result = calculate(&RoiInput {
            invested: 200.0,
            returned: 150.0,
            years: None,
        })
        .unwrap();
        assert_eq!(result.roi, -25.0);
        assert_eq!(ReturnOnInvestment::report(&result).lines[0].label, "Loss");
    }

    #[test]
    fn test_zero_investment_rejected() {
        let input = RoiInput {
            invested: 0.0,
            returned: 10.0,
            years: None,
        };
        assert!(calculate(&input).is_err());
    }
}
