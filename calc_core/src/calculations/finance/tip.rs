//! # Tip
//!
//! Tip, total and per-person share of a bill.

use serde::{Deserialize, Serialize};

use crate::calculations::Calculator;
use crate::errors::{CalcError, CalcResult};
use crate::form::{FieldSpec, FormValues};
use crate::format::currency;
use crate::report::Report;
use crate::validation::{ensure_non_negative, ensure_range};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TipInput {
    pub bill: f64,
    /// Percent
    pub tip_percent: f64,
    pub people: u32,
}

impl TipInput {
    pub fn validate(&self) -> CalcResult<()> {
        ensure_non_negative("bill", self.bill)?;
        ensure_range("tip_percent", self.tip_percent, 0.0, 100.0)?;
        if self.people == 0 {
            return Err(CalcError::invalid_input("people", "0", "At least one person must pay"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TipResult {
    pub tip: f64,
    pub total: f64,
    pub per_person: f64,
    pub tip_per_person: f64,
}

pub fn calculate(input: &TipInput) -> CalcResult<TipResult> {
    input.validate()?;
    let tip = input.bill * input.tip_percent / 100.0;
    let total = input.bill + tip;
    let people = input.people as f64;
    Ok(TipResult {
        tip,
        total,
        per_person: total / people,
        tip_per_person: tip / people,
    })
}

pub struct Tip;

impl Calculator for Tip {
    type Input = TipInput;
    type Output = TipResult;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::number("bill", "Bill amount").unit("$").placeholder("84.50"),
        FieldSpec::number("tip_percent", "Tip").unit("%").placeholder("18"),
        FieldSpec::integer("people", "Split between").placeholder("1").optional(),
    ];

    fn parse(form: &FormValues) -> CalcResult<TipInput> {
        let people = match form.optional_integer("people")? {
            Some(n) => u32::try_from(n)
                .map_err(|_| CalcError::invalid_input("people", n.to_string(), "Must be a positive whole number"))?,
            None => 1,
        };
        Ok(TipInput {
            bill: form.required_number("bill")?,
            tip_percent: form.required_number("tip_percent")?,
            people,
        })
    }

    fn calculate(input: &TipInput) -> CalcResult<TipResult> {
        calculate(input)
    }

    fn report(output: &TipResult) -> Report {
        let report = Report::new("Tip", currency(output.tip, "$")).line("Total", currency(output.total, "$"));
        if output.per_person != output.total {
            report
                .line("Each person pays", currency(output.per_person, "$"))
                .line("Tip per person", currency(output.tip_per_person, "$"))
        } else {
            report
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_bill() {
        let result = calculate(&TipInput {
            bill: 100.0,
            tip_percent: 20.0,
            people: 4,
        })
        .unwrap();
        assert_eq!(result.tip, 20.0);
        assert_eq!(result.total, 120.0);
        assert_eq!(result.per_person, 30.0);
        assert_eq!(result.tip_per_person, 5.0);
    }

    #[test]
    fn test_people_defaults_to_one() {
        let form = FormValues::new().with("bill", "50").with("tip_percent", "10");
        let result = Tip::calculate(&Tip::parse(&form).unwrap()).unwrap();
        assert_eq!(result.per_person, 55.0);
        assert_eq!(Tip::report(&result).lines.len(), 1);
    }

    #[test]
    fn test_zero_people_rejected() {
        let input = TipInput {
            bill: 10.0,
            tip_percent: 15.0,
            people: 0,
        };
        assert!(calculate(&input).is_err());
    }
}
