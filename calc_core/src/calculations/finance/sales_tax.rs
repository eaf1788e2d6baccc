//! # Sales Tax
//!
//! tax = price · rate, total = price + tax.

use serde::{Deserialize, Serialize};

use crate::calculations::Calculator;
use crate::errors::CalcResult;
use crate::form::{FieldSpec, FormValues};
use crate::format::currency;
use crate::report::Report;
use crate::validation::{ensure_non_negative, ensure_range};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalesTaxInput {
    pub price: f64,
    /// Percent
    pub tax_rate: f64,
}

impl SalesTaxInput {
    pub fn validate(&self) -> CalcResult<()> {
        ensure_non_negative("price", self.price)?;
        ensure_range("tax_rate", self.tax_rate, 0.0, 100.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalesTaxResult {
    pub tax: f64,
    pub total: f64,
}

pub fn calculate(input: &SalesTaxInput) -> CalcResult<SalesTaxResult> {
    input.validate()?;
    let tax = input.price * input.tax_rate / 100.0;
    Ok(SalesTaxResult {
        tax,
        total: input.price + tax,
    })
}

pub struct SalesTax;

impl Calculator for SalesTax {
    type Input = SalesTaxInput;
    type Output = SalesTaxResult;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::number("price", "Price before tax").unit("$").placeholder("49.99"),
        FieldSpec::number("tax_rate", "Sales tax rate").unit("%").placeholder("8.25"),
    ];

    fn parse(form: &FormValues) -> CalcResult<SalesTaxInput> {
        Ok(SalesTaxInput {
            price: form.required_number("price")?,
            tax_rate: form.required_number("tax_rate")?,
        })
    }

    fn calculate(input: &SalesTaxInput) -> CalcResult<SalesTaxResult> {
        calculate(input)
    }

    fn report(output: &SalesTaxResult) -> Report {
        Report::new("Total price", currency(output.total, "$")).line("Sales tax", currency(output.tax, "$"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax() {
        let result = calculate(&SalesTaxInput {
            price: 200.0,
            tax_rate: 7.5,
        })
        .unwrap();
        assert_eq!(result.tax, 15.0);
        assert_eq!(result.total, 215.0);
        assert_eq!(SalesTax::report(&result).headline.value, "$215.00");
    }

    #[test]
    fn test_rate_out_of_range() {
        assert!(calculate(&SalesTaxInput {
            price: 1.0,
            tax_rate: 101.0
        })
        .is_err());
    }
}
