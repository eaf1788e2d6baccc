//! # calc_core - Calculator Directory Engine
//!
//! `calc_core` holds everything behind Calcfolio's calculator directory:
//! the calculators themselves, the catalog that describes them, and the
//! router that maps URL paths to pages and SEO metadata. All inputs and
//! outputs are JSON-serializable, so the same calculators serve the CLI,
//! the GUI and any other shell.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Independent**: No calculator depends on another
//! - **JSON-First**: All inputs and results implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::config::SiteConfig;
//! use calc_core::form::FormValues;
//! use calc_core::routing::{Route, Router};
//!
//! let router = Router::new(&SiteConfig::default());
//! let page = router.resolve("/science/mm-to-inches");
//! let Route::Calculator(calculator) = page.route else { panic!("not a calculator") };
//!
//! let form = FormValues::new().with("millimeters", "25.4");
//! let evaluation = calculator.kind.evaluate(&form).unwrap();
//! assert_eq!(evaluation.report.headline.value, "1.0000");
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Every calculator, grouped by category
//! - [`catalog`] - Static category and calculator descriptors
//! - [`routing`] - Path resolution and per-page metadata
//! - [`metadata`] - Page titles, descriptions, canonical URLs
//! - [`content`] - Embedded educational markdown
//! - [`config`] - Site configuration (TOML)
//! - [`form`] - Form field specs and raw form values
//! - [`report`] - Display-ready results
//! - [`expr`] - Math expression parser and symbolic derivatives
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod catalog;
pub mod config;
pub mod content;
pub mod errors;
pub mod expr;
pub mod form;
pub mod format;
pub mod metadata;
pub mod report;
pub mod routing;
pub mod units;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use calculations::{Calculator, CalculatorKind};
pub use catalog::{CalculatorDescriptor, CategoryDescriptor, CategorySlug};
pub use config::SiteConfig;
pub use errors::{CalcError, CalcResult};
pub use form::{FieldSpec, FormValues};
pub use metadata::PageMetadata;
pub use report::{Evaluation, Report};
pub use routing::{ResolvedPage, Route, Router};
