//! # cotes-integrate
//!
//! Composite quadrature driving for the Cotes framework.
//!
//! This crate provides:
//! - The composite driver: apply a rule over every panel of an equal
//!   partition of `[a, b]` and sum left to right
//! - A parallel driver with bit-identical results
//! - A convergence harness for measuring accuracy against a known value
//!
//! # Example
//!
//! ```
//! use cotes_integrate::composite;
//! use cotes_rules::BuiltinRule;
//!
//! // ∫₀^π sin(x) dx = 2
//! let rule = BuiltinRule::Simpson.rule();
//! let estimate = composite(&f64::sin, 0.0, std::f64::consts::PI, 100, &rule).unwrap();
//! assert!((estimate - 2.0).abs() < 1e-6);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]

pub mod composite;
pub mod convergence;
pub mod error;
pub mod parallel;

mod proptests;

pub use composite::composite;
pub use convergence::{convergence_scan, panels_to_tolerance, ConvergenceSample};
pub use error::CompositeError;
pub use parallel::composite_par;
