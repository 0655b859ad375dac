//! Error types for rule construction.

use thiserror::Error;

/// Errors that can occur when constructing a quadrature rule.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RuleError {
    /// The coefficient vector was empty.
    #[error("coefficient vector is empty")]
    EmptyCoefficients,

    /// The coefficients sum to zero, so the weighted sum cannot be
    /// normalized.
    #[error("coefficient sum is zero")]
    ZeroCoefficientSum,

    /// A closed rule with a single coefficient has no endpoint-to-endpoint
    /// span.
    #[error("closed rule requires at least two coefficients")]
    DegenerateClosedRule,

    /// The name does not match any catalog rule.
    #[error("unknown rule name: {0}")]
    UnknownRule(String),
}
