//! # Descriptive Statistics
//!
//! Summary statistics for a list of numbers:
//!
//! ```text
//! mean      = Σx / n
//! median    = middle value (mean of the two middle values for even n)
//! σ (pop.)  = √(Σ(x − mean)² / n)
//! s (samp.) = √(Σ(x − mean)² / (n − 1))     requires n ≥ 2
//! ```
//!
//! Mode lists every value that occurs most often; when every value occurs
//! exactly once there is no mode.
//!
//! Mean and deviations use a running (Welford) update, so data near the
//! `f64` limits still has a mean even when its sum does not fit.

use serde::{Deserialize, Serialize};

use crate::calculations::Calculator;
use crate::errors::{CalcError, CalcResult};
use crate::form::{FieldSpec, FormValues};
use crate::format::compact;
use crate::report::Report;

/// Largest accepted data set
pub const MAX_VALUES: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsInput {
    pub values: Vec<f64>,
}

impl StatisticsInput {
    pub fn validate(&self) -> CalcResult<()> {
        if self.values.is_empty() {
            return Err(CalcError::missing_field("values"));
        }
        if self.values.len() > MAX_VALUES {
            return Err(CalcError::invalid_input(
                "values",
                self.values.len().to_string(),
                format!("At most {} values are allowed", MAX_VALUES),
            ));
        }
        if self.values.iter().any(|v| !v.is_finite()) {
            return Err(CalcError::invalid_input("values", "non-finite", "Values must be finite numbers"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsResult {
    pub count: usize,
    /// `None` when the total is outside the `f64` range
    pub sum: Option<f64>,
    pub mean: f64,
    pub median: f64,
    pub modes: Vec<f64>,
    pub min: f64,
    pub max: f64,
    pub range: f64,
    pub population_std_dev: f64,
    /// `None` for a single value
    pub sample_std_dev: Option<f64>,
}

pub fn calculate(input: &StatisticsInput) -> CalcResult<StatisticsResult> {
    input.validate()?;

    let mut sorted = input.values.clone();
    sorted.sort_by(f64::total_cmp);
    let n = sorted.len();

    let sum: f64 = sorted.iter().sum();
    let (mean, squared) = running_mean(&sorted);
    let median = if n % 2 == 1 {
        sorted[n / 2]
    } else {
        sorted[n / 2 - 1] / 2.0 + sorted[n / 2] / 2.0
    };

    // Runs of equal values in the sorted data
    let mut runs: Vec<(f64, usize)> = Vec::new();
    for &v in &sorted {
        match runs.last_mut() {
            Some((last, count)) if *last == v => *count += 1,
            _ => runs.push((v, 1)),
        }
    }
    let best = runs.iter().map(|(_, c)| *c).max().unwrap_or(0);
    let modes = if best > 1 {
        runs.iter().filter(|(_, c)| *c == best).map(|(v, _)| *v).collect()
    } else {
        Vec::new()
    };

    let population_std_dev = (squared / n as f64).sqrt();
    let sample_std_dev = (n >= 2).then(|| (squared / (n - 1) as f64).sqrt());

    let min = sorted[0];
    let max = sorted[n - 1];

    Ok(StatisticsResult {
        count: n,
        sum: sum.is_finite().then_some(sum),
        mean,
        median,
        modes,
        min,
        max,
        range: max - min,
        population_std_dev,
        sample_std_dev,
    })
}

/// Mean and sum of squared deviations in one pass
fn running_mean(values: &[f64]) -> (f64, f64) {
    let mut mean = 0.0;
    let mut squared = 0.0;
    for (i, &x) in values.iter().enumerate() {
        let delta = x - mean;
        mean += delta / (i + 1) as f64;
        squared += delta * (x - mean);
    }
    (mean, squared)
}

pub struct DescriptiveStatistics;

impl Calculator for DescriptiveStatistics {
    type Input = StatisticsInput;
    type Output = StatisticsResult;

    const FIELDS: &'static [FieldSpec] =
        &[FieldSpec::number_list("values", "Data set").placeholder("2, 4, 4, 4, 5, 5, 7, 9")];

    fn parse(form: &FormValues) -> CalcResult<StatisticsInput> {
        Ok(StatisticsInput {
            values: form.required_number_list("values")?,
        })
    }

    fn calculate(input: &StatisticsInput) -> CalcResult<StatisticsResult> {
        calculate(input)
    }

    fn report(output: &StatisticsResult) -> Report {
        let modes = if output.modes.is_empty() {
            "none".to_string()
        } else {
            output.modes.iter().map(|m| compact(*m, 6)).collect::<Vec<_>>().join(", ")
        };
        let mut report = Report::new("Mean", compact(output.mean, 6))
            .line("Count", output.count.to_string())
            .line("Sum", output.sum.map_or_else(|| "too large to display".to_string(), |s| compact(s, 6)))
            .line("Median", compact(output.median, 6))
            .line("Mode", modes)
            .line("Min / Max", format!("{} / {}", compact(output.min, 6), compact(output.max, 6)))
            .line("Range", compact(output.range, 6))
            .line("Population std dev (σ)", compact(output.population_std_dev, 6));
        report = match output.sample_std_dev {
            Some(s) => report.line("Sample std dev (s)", compact(s, 6)),
            None => report.note("Sample standard deviation needs at least two values."),
        };
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(values: &[f64]) -> StatisticsResult {
        calculate(&StatisticsInput { values: values.to_vec() }).unwrap()
    }

    #[test]
    fn test_textbook_data_set() {
        let result = stats(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert_eq!(result.count, 8);
        assert_eq!(result.mean, 5.0);
        assert_eq!(result.median, 4.5);
        assert_eq!(result.modes, vec![4.0]);
        assert_eq!(result.population_std_dev, 2.0);
        assert!((result.sample_std_dev.unwrap() - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
        assert_eq!(result.range, 7.0);
    }

    #[test]
    fn test_multimodal_and_no_mode() {
        assert_eq!(stats(&[1.0, 1.0, 2.0, 2.0, 3.0]).modes, vec![1.0, 2.0]);
        assert!(stats(&[3.0, 1.0, 2.0]).modes.is_empty());
    }

    #[test]
    fn test_single_value() {
        let result = stats(&[42.0]);
        assert_eq!(result.median, 42.0);
        assert_eq!(result.population_std_dev, 0.0);
        assert_eq!(result.sample_std_dev, None);
        assert!(!DescriptiveStatistics::report(&result).notes.is_empty());
    }

    #[test]
    fn test_mean_of_values_near_the_limit() {
        let result = stats(&[1e308, 1e308]);
        assert_eq!(result.mean, 1e308);
        assert_eq!(result.median, 1e308);
        assert_eq!(result.sum, None);
        assert_eq!(result.population_std_dev, 0.0);
        assert!(!DescriptiveStatistics::report(&result).to_text().contains("inf"));
    }

    #[test]
    fn test_empty_rejected() {
        assert!(calculate(&StatisticsInput { values: vec![] }).is_err());
    }
}
