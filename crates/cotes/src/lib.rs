//! # Cotes
//!
//! Composite Newton-Cotes quadrature for one-dimensional integrals.
//!
//! The framework is three small pieces composed bottom-up: a rule
//! generator deriving a fixed-order rule from a coefficient vector and an
//! open/closed flag, the rule itself (a pure value applied per panel),
//! and a composite driver summing the rule over an equal partition of
//! `[a, b]`. A catalog of five reference rules validates the generator
//! against independently known closed forms.
//!
//! ## Quick Start
//!
//! ```
//! use cotes::prelude::*;
//! use std::f64::consts::PI;
//!
//! // ∫₀^π sin(x) dx = 2
//! let simpson = BuiltinRule::Simpson.rule();
//! let estimate = composite(&f64::sin, 0.0, PI, 100, &simpson).unwrap();
//! assert!((estimate - 2.0).abs() < 1e-8);
//!
//! // Custom rules come from the same generator as the catalog
//! let rule = NewtonCotesRule::new(&[1.0, 3.0, 3.0, 1.0], false).unwrap();
//! let estimate = composite(&f64::sin, 0.0, PI, 100, &rule).unwrap();
//! assert!((estimate - 2.0).abs() < 1e-7);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use cotes_integrate as integrate;
pub use cotes_rules as rules;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use cotes_integrate::{
        composite, composite_par, convergence_scan, panels_to_tolerance, CompositeError,
        ConvergenceSample,
    };
    pub use cotes_rules::{BuiltinRule, NewtonCotesRule, RuleError};
}
