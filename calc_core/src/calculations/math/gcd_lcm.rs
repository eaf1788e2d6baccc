//! # GCD & LCM
//!
//! Greatest common divisor by Euclid's algorithm; least common multiple via
//! lcm(a, b) = a / gcd(a, b) · b, folded over the whole list.

use serde::{Deserialize, Serialize};

use crate::calculations::Calculator;
use crate::errors::{CalcError, CalcResult};
use crate::form::{FieldSpec, FormValues};
use crate::report::Report;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GcdLcmInput {
    pub numbers: Vec<u64>,
}

impl GcdLcmInput {
    pub fn validate(&self) -> CalcResult<()> {
        if self.numbers.len() < 2 {
            return Err(CalcError::invalid_input(
                "numbers",
                self.numbers.len().to_string(),
                "Enter at least two numbers",
            ));
        }
        if let Some(zero) = self.numbers.iter().find(|n| **n == 0) {
            return Err(CalcError::invalid_input("numbers", zero.to_string(), "Numbers must be positive integers"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GcdLcmResult {
    pub gcd: u64,
    pub lcm: u64,
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

pub fn calculate(input: &GcdLcmInput) -> CalcResult<GcdLcmResult> {
    input.validate()?;
    let mut g = input.numbers[0];
    let mut l = input.numbers[0];
    for &n in &input.numbers[1..] {
        g = gcd(g, n);
        l = (l / gcd(l, n))
            .checked_mul(n)
            .ok_or_else(|| CalcError::domain("lcm", "the least common multiple is too large"))?;
    }
    Ok(GcdLcmResult { gcd: g, lcm: l })
}

pub struct GcdLcm;

impl Calculator for GcdLcm {
    type Input = GcdLcmInput;
    type Output = GcdLcmResult;

    const FIELDS: &'static [FieldSpec] = &[FieldSpec::number_list("numbers", "Numbers").placeholder("12, 18, 30")];

    fn parse(form: &FormValues) -> CalcResult<GcdLcmInput> {
        let numbers = form
            .required_number_list("numbers")?
            .into_iter()
            .map(|v| {
                if v.fract() != 0.0 || v < 0.0 || v > u64::MAX as f64 {
                    Err(CalcError::invalid_input("numbers", v.to_string(), "Numbers must be positive integers"))
                } else {
                    Ok(v as u64)
                }
            })
            .collect::<CalcResult<Vec<u64>>>()?;
        Ok(GcdLcmInput { numbers })
    }

    fn calculate(input: &GcdLcmInput) -> CalcResult<GcdLcmResult> {
        calculate(input)
    }

    fn report(output: &GcdLcmResult) -> Report {
        Report::new("GCD", output.gcd.to_string()).line("LCM", output.lcm.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_numbers() {
        let result = calculate(&GcdLcmInput { numbers: vec![12, 18, 30] }).unwrap();
        assert_eq!(result, GcdLcmResult { gcd: 6, lcm: 180 });
    }

    #[test]
    fn test_coprime() {
        let result = calculate(&GcdLcmInput { numbers: vec![7, 9] }).unwrap();
        assert_eq!(result, GcdLcmResult { gcd: 1, lcm: 63 });
    }

    #[test]
    fn test_overflow_is_domain_error() {
        let input = GcdLcmInput {
            numbers: vec![u64::MAX, u64::MAX - 1],
        };
        assert_eq!(calculate(&input).unwrap_err().error_code(), "DOMAIN_ERROR");
    }

    #[test]
    fn test_rejects_bad_lists() {
        assert!(calculate(&GcdLcmInput { numbers: vec![5] }).is_err());
        assert!(calculate(&GcdLcmInput { numbers: vec![5, 0] }).is_err());
        let form = FormValues::new().with("numbers", "4, 2.5");
        assert!(GcdLcm::parse(&form).is_err());
    }
}
