//! # Arkansas Child Support (estimate)
//!
//! A simplified percentage-of-income estimate: the paying parent's monthly
//! net income times a fixed share that grows with the number of children.
//!
//! | Children | Share of net income |
//! |----------|---------------------|
//! | 1        | 15%                 |
//! | 2        | 21%                 |
//! | 3        | 25%                 |
//! | 4        | 28%                 |
//! | 5        | 30%                 |
//! | 6        | 32%                 |
//!
//! This is not the official Arkansas family support chart and ignores
//! deductions, shared custody and court discretion.

use serde::{Deserialize, Serialize};

use crate::calculations::Calculator;
use crate::errors::{CalcError, CalcResult};
use crate::form::{FieldSpec, FormValues};
use crate::format::{currency, percent};
use crate::report::{Report, ReportTable};
use crate::validation::ensure_non_negative;

/// Share of net income, indexed by number of children − 1
pub const SHARES: [f64; 6] = [15.0, 21.0, 25.0, 28.0, 30.0, 32.0];

const WEEKS_PER_YEAR: f64 = 52.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChildSupportInput {
    pub monthly_net_income: f64,
    pub children: u32,
}

impl ChildSupportInput {
    pub fn validate(&self) -> CalcResult<()> {
        ensure_non_negative("monthly_net_income", self.monthly_net_income)?;
        if self.children == 0 || self.children as usize > SHARES.len() {
            return Err(CalcError::invalid_input(
                "children",
                self.children.to_string(),
                format!("Number of children must be between 1 and {}", SHARES.len()),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildSupportResult {
    /// Percent of net income
    pub share: f64,
    pub monthly: f64,
    pub weekly: f64,
    pub biweekly: f64,
    /// Monthly amount for every supported number of children
    pub by_children: Vec<(u32, f64)>,
}

pub fn calculate(input: &ChildSupportInput) -> CalcResult<ChildSupportResult> {
    input.validate()?;
    let share = SHARES[input.children as usize - 1];
    let monthly = input.monthly_net_income * share / 100.0;
    let weekly = monthly * 12.0 / WEEKS_PER_YEAR;
    Ok(ChildSupportResult {
        share,
        monthly,
        weekly,
        biweekly: weekly * 2.0,
        by_children: SHARES
            .iter()
            .zip(1u32..)
            .map(|(s, n)| (n, input.monthly_net_income * s / 100.0))
            .collect(),
    })
}

pub struct ArkansasChildSupport;

impl Calculator for ArkansasChildSupport {
    type Input = ChildSupportInput;
    type Output = ChildSupportResult;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::number("monthly_net_income", "Paying parent's monthly net income")
            .unit("$")
            .placeholder("3500"),
        FieldSpec::integer("children", "Number of children").placeholder("2"),
    ];

    fn parse(form: &FormValues) -> CalcResult<ChildSupportInput> {
        Ok(ChildSupportInput {
            monthly_net_income: form.required_number("monthly_net_income")?,
            children: form.required_count("children")?,
        })
    }

    fn calculate(input: &ChildSupportInput) -> CalcResult<ChildSupportResult> {
        calculate(input)
    }

    fn report(output: &ChildSupportResult) -> Report {
        let mut table = ReportTable::new("By number of children", ["Children", "Share", "Monthly"]);
        for (children, amount) in &output.by_children {
            table.push_row([
                children.to_string(),
                percent(SHARES[*children as usize - 1], 0),
                currency(*amount, "$"),
            ]);
        }
        Report::new("Estimated monthly support", currency(output.monthly, "$"))
            .line("Share of net income", percent(output.share, 0))
            .line("Weekly", currency(output.weekly, "$"))
            .line("Every two weeks", currency(output.biweekly, "$"))
            .table(table)
            .note("Simplified estimate, not the official Arkansas family support chart. Courts may order a different amount.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_children() {
        let result = calculate(&ChildSupportInput {
            monthly_net_income: 4000.0,
            children: 2,
        })
        .unwrap();
        assert_eq!(result.share, 21.0);
        assert_eq!(result.monthly, 840.0);
        assert!((result.weekly - 193.85).abs() < 0.01);
        assert_eq!(result.by_children.len(), 6);
        assert_eq!(result.by_children[0], (1, 600.0));
    }

    #[test]
    fn test_report_is_flagged_unofficial() {
        let result = calculate(&ChildSupportInput {
            monthly_net_income: 1000.0,
            children: 1,
        })
        .unwrap();
        let report = ArkansasChildSupport::report(&result);
        assert!(report.notes[0].contains("not the official"));
    }

    #[test]
    fn test_children_range() {
        for children in [0, 7] {
            let input = ChildSupportInput {
                monthly_net_income: 1000.0,
                children,
            };
            assert!(calculate(&input).is_err());
        }
    }
}
