//! # Math Expressions
//!
//! A small symbolic-math engine for the calculators that take a formula as
//! input (Riemann sums, Jacobians). It parses single-variable or
//! multi-variable expressions, evaluates them safely and differentiates them
//! symbolically.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::expr::{derivative, parse};
//!
//! let f = parse("x^2 * y + sin(y)").unwrap();
//! let df_dx = derivative(&f, "x");
//! assert_eq!(df_dx.to_string(), "2*x*y");
//! assert_eq!(df_dx.eval(&[("x", 3.0), ("y", 2.0)]).unwrap(), 12.0);
//! ```
//!
//! ## Supported Syntax
//!
//! - Operators `+ - * / ^` (also `**`), unary minus, parentheses
//! - Implicit multiplication: `2x`, `3(x + 1)`
//! - Constants `pi`, `e`
//! - Functions `sin cos tan asin acos atan sinh cosh tanh exp ln log sqrt abs`
//! - At most [`MAX_EXPRESSION_LEN`] characters and [`MAX_NESTING`] levels deep

mod ast;
mod derive;
mod parser;

pub use ast::{Constant, Expr, Func};
pub use derive::{derivative, simplify};
pub use parser::{parse, MAX_EXPRESSION_LEN, MAX_NESTING};
