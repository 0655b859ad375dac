//! Error types for composite driving.

use thiserror::Error;

/// Errors that can occur when driving a rule over a partition.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CompositeError {
    /// The partition must contain at least one panel; an empty sum is
    /// rejected rather than silently returned as 0.
    #[error("composite integration requires at least one panel")]
    NoPanels,
}
