//! # Combinations & Permutations
//!
//! ```text
//! nPr = n! / (n − r)!
//! nCr = n! / (r! (n − r)!)
//! ```
//!
//! Computed as running products rather than full factorials. n is capped
//! at 170, the largest n for which n! fits in an f64.

use serde::{Deserialize, Serialize};

use crate::calculations::Calculator;
use crate::errors::{CalcError, CalcResult};
use crate::form::{FieldSpec, FormValues};
use crate::format::compact;
use crate::report::Report;

pub const MAX_N: u32 = 170;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinationsInput {
    pub n: u32,
    pub r: u32,
}

impl CombinationsInput {
    pub fn validate(&self) -> CalcResult<()> {
        if self.n > MAX_N {
            return Err(CalcError::invalid_input(
                "n",
                self.n.to_string(),
                format!("n must be at most {}", MAX_N),
            ));
        }
        if self.r > self.n {
            return Err(CalcError::invalid_input("r", self.r.to_string(), "r cannot exceed n"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CombinationsResult {
    pub combinations: f64,
    pub permutations: f64,
}

pub fn calculate(input: &CombinationsInput) -> CalcResult<CombinationsResult> {
    input.validate()?;
    let (n, r) = (input.n as u64, input.r as u64);

    let permutations: f64 = ((n - r + 1)..=n).map(|k| k as f64).product();

    // Multiplicative form keeps every intermediate an exact integer while it fits
    let k = r.min(n - r);
    let mut combinations = 1.0_f64;
    for i in 1..=k {
        combinations = combinations * (n - k + i) as f64 / i as f64;
    }

    Ok(CombinationsResult {
        combinations: combinations.round(),
        permutations,
    })
}

pub struct CombinationsPermutations;

impl Calculator for CombinationsPermutations {
    type Input = CombinationsInput;
    type Output = CombinationsResult;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::integer("n", "Total items (n)").placeholder("10"),
        FieldSpec::integer("r", "Items chosen (r)").placeholder("3"),
    ];

    fn parse(form: &FormValues) -> CalcResult<CombinationsInput> {
        Ok(CombinationsInput {
            n: form.required_count("n")?,
            r: form.required_count("r")?,
        })
    }

    fn calculate(input: &CombinationsInput) -> CalcResult<CombinationsResult> {
        calculate(input)
    }

    fn report(output: &CombinationsResult) -> Report {
        Report::new("Combinations (nCr)", compact(output.combinations, 0))
            .line("Permutations (nPr)", compact(output.permutations, 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_choose_three() {
        let result = calculate(&CombinationsInput { n: 10, r: 3 }).unwrap();
        assert_eq!(result.combinations, 120.0);
        assert_eq!(result.permutations, 720.0);
    }

    #[test]
    fn test_edges() {
        let none = calculate(&CombinationsInput { n: 5, r: 0 }).unwrap();
        assert_eq!((none.combinations, none.permutations), (1.0, 1.0));
        let all = calculate(&CombinationsInput { n: 5, r: 5 }).unwrap();
        assert_eq!((all.combinations, all.permutations), (1.0, 120.0));
        let empty = calculate(&CombinationsInput { n: 0, r: 0 }).unwrap();
        assert_eq!(empty.combinations, 1.0);
    }

    #[test]
    fn test_large_n_stays_finite() {
        let result = calculate(&CombinationsInput { n: 170, r: 85 }).unwrap();
        assert!(result.combinations.is_finite());
        assert!(result.permutations.is_finite());
    }

    #[test]
    fn test_rejects_r_above_n() {
        assert!(calculate(&CombinationsInput { n: 3, r: 4 }).is_err());
        assert!(calculate(&CombinationsInput { n: 171, r: 1 }).is_err());
    }
}
