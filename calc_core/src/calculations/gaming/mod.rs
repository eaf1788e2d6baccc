//! Gaming calculators: dice odds, combat math, ratings and progression.

pub mod dice_probability;
pub mod dps;
pub mod drop_chance;
pub mod elo;
pub mod kd_ratio;
pub mod xp_to_level;
