//! # cotes-rules
//!
//! Newton-Cotes quadrature rules for the Cotes framework.
//!
//! This crate provides:
//! - Rule construction from a coefficient vector and an open/closed flag
//! - The built-in catalog of reference rules (trapezoid, midpoint,
//!   Simpson, Boole, Milne)
//! - Fail-fast validation of rule definitions
//!
//! ## Design Principles
//!
//! - **Rules are values**: a rule is an immutable struct, not a closure;
//!   construction happens once and application is a pure method
//! - **One evaluation capability**: integrands are plain `Fn(f64) -> f64`
//! - **No masking**: non-finite integrand values flow through untouched

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]

pub mod catalog;
pub mod error;
pub mod rule;

mod proptests;

pub use catalog::BuiltinRule;
pub use error::RuleError;
pub use rule::NewtonCotesRule;
