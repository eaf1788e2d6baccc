//! # K/D Ratio
//!
//! ```text
//! K/D = kills / deaths
//! KDA = (kills + assists) / deaths
//! ```
//!
//! A deathless game counts as one death, as most scoreboards do.

use serde::{Deserialize, Serialize};

use crate::calculations::Calculator;
use crate::errors::CalcResult;
use crate::form::{FieldSpec, FormValues};
use crate::format::fixed;
use crate::report::Report;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KdInput {
    pub kills: u32,
    pub deaths: u32,
    #[serde(default)]
    pub assists: u32,
}

impl KdInput {
    pub fn validate(&self) -> CalcResult<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KdResult {
    pub kd: f64,
    pub kda: f64,
    /// Kills per death needed to reach the next whole K/D
    pub kills_to_next: u32,
}

pub fn calculate(input: &KdInput) -> CalcResult<KdResult> {
    input.validate()?;
    let deaths = input.deaths.max(1);
    let kd = input.kills as f64 / deaths as f64;
    let next_whole = (kd.floor() as u32).saturating_add(1);
    Ok(KdResult {
        kd,
        kda: (input.kills as f64 + input.assists as f64) / deaths as f64,
        kills_to_next: next_whole.saturating_mul(deaths).saturating_sub(input.kills),
    })
}

pub struct KdRatio;

impl Calculator for KdRatio {
    type Input = KdInput;
    type Output = KdResult;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::integer("kills", "Kills").placeholder("24"),
        FieldSpec::integer("deaths", "Deaths").placeholder("10"),
        FieldSpec::integer("assists", "Assists").placeholder("8").optional(),
    ];

    fn parse(form: &FormValues) -> CalcResult<KdInput> {
        let assists = match form.get("assists") {
            Some(_) => form.required_count("assists")?,
            None => 0,
        };
        Ok(KdInput {
            kills: form.required_count("kills")?,
            deaths: form.required_count("deaths")?,
            assists,
        })
    }

    fn calculate(input: &KdInput) -> CalcResult<KdResult> {
        calculate(input)
    }

    fn report(output: &KdResult) -> Report {
        Report::new("K/D", fixed(output.kd, 2))
            .line("KDA", fixed(output.kda, 2))
            .line(
                "Kills for next whole K/D",
                format!("{} without dying", output.kills_to_next),
            )
    }
}
