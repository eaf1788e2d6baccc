//! # Speed, Distance & Time
//!
//! speed = distance / time, reported in km/h, m/s and mph, with running
//! pace in minutes per kilometer.

use serde::{Deserialize, Serialize};

use crate::calculations::Calculator;
use crate::errors::CalcResult;
use crate::form::{FieldSpec, FormValues};
use crate::format::compact;
use crate::report::Report;
use crate::validation::{ensure_non_negative, ensure_positive};

const KM_PER_MILE: f64 = 1.609_344;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedInput {
    pub distance_km: f64,
    pub time_hours: f64,
}

impl SpeedInput {
    pub fn validate(&self) -> CalcResult<()> {
        ensure_non_negative("distance_km", self.distance_km)?;
        ensure_positive("time_hours", self.time_hours)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedResult {
    pub km_per_hour: f64,
    pub meters_per_second: f64,
    pub miles_per_hour: f64,
    /// Minutes per kilometer; `None` for zero distance
    pub pace_min_per_km: Option<f64>,
}

pub fn calculate(input: &SpeedInput) -> CalcResult<SpeedResult> {
    input.validate()?;
    let km_per_hour = input.distance_km / input.time_hours;
    Ok(SpeedResult {
        km_per_hour,
        meters_per_second: km_per_hour / 3.6,
        miles_per_hour: km_per_hour / KM_PER_MILE,
        pace_min_per_km: (input.distance_km > 0.0).then(|| input.time_hours * 60.0 / input.distance_km),
    })
}

fn format_pace(minutes: f64) -> String {
    let total_seconds = (minutes * 60.0).round() as u64;
    format!("{}:{:02} /km", total_seconds / 60, total_seconds % 60)
}

pub struct SpeedDistanceTime;

impl Calculator for SpeedDistanceTime {
    type Input = SpeedInput;
    type Output = SpeedResult;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::number("distance_km", "Distance").unit("km").placeholder("10"),
        FieldSpec::number("time_hours", "Time").unit("h").placeholder("0.75"),
    ];

    fn parse(form: &FormValues) -> CalcResult<SpeedInput> {
        Ok(SpeedInput {
            distance_km: form.required_number("distance_km")?,
            time_hours: form.required_number("time_hours")?,
        })
    }

    fn calculate(input: &SpeedInput) -> CalcResult<SpeedResult> {
        calculate(input)
    }

    fn report(output: &SpeedResult) -> Report {
        let report = Report::new("Speed", format!("{} km/h", compact(output.km_per_hour, 3)))
            .line("Meters per second", format!("{} m/s", compact(output.meters_per_second, 3)))
            .line("Miles per hour", format!("{} mph", compact(output.miles_per_hour, 3)));
        match output.pace_min_per_km {
            Some(pace) => report.line("Pace", format_pace(pace)),
            None => report,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_k_in_forty_five_minutes() {
        let result = calculate(&SpeedInput {
            distance_km: 10.0,
            time_hours: 0.75,
        })
        .unwrap();
        assert!((result.km_per_hour - 13.333_333).abs() < 1e-6);
        assert_eq!(format_pace(result.pace_min_per_km.unwrap()), "4:30 /km");
    }

    #[test]
    fn test_unit_conversions() {
        let result = calculate(&SpeedInput {
            distance_km: 36.0,
            time_hours: 1.0,
        })
        .unwrap();
        assert_eq!(result.meters_per_second, 10.0);
        assert!((result.miles_per_hour - 22.369_363).abs() < 1e-6);
    }

    #[test]
    fn test_zero_time_rejected() {
        assert!(calculate(&SpeedInput {
            distance_km: 1.0,
            time_hours: 0.0
        })
        .is_err());
    }
}
