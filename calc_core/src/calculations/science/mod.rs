//! Science calculators: unit conversions, electricity, mechanics and
//! chemistry.

pub mod density;
pub mod half_life;
pub mod kinetic_energy;
pub mod mm_to_inches;
pub mod molarity;
pub mod ohms_law;
pub mod ph;
pub mod speed;
pub mod temperature;
pub mod wavelength;
