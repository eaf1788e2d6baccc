//! Math calculators: coordinates, geometry, algebra, calculus and statistics.

pub mod cartesian_to_polar;
pub mod circumference_to_diameter;
pub mod combinations;
pub mod convolution;
pub mod distance_midpoint;
pub mod gcd_lcm;
pub mod jacobian;
pub mod logarithm;
pub mod percentage;
pub mod polar_to_cartesian;
pub mod pythagorean;
pub mod quadratic;
pub mod riemann_sum;
pub mod statistics;
pub mod triangle_area;
