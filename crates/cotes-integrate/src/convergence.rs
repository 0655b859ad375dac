//! Convergence Measurement
//!
//! Utilities for comparing accuracy against cost across rules: drive the
//! composite integrator over a schedule of panel counts and record the
//! deviation from a known reference value. Pure measurement, no I/O.

use cotes_rules::NewtonCotesRule;

use crate::composite::composite;
use crate::error::CompositeError;

/// One row of a convergence scan.
#[derive(Clone, Debug, PartialEq)]
pub struct ConvergenceSample {
    /// Panel count used for this estimate.
    pub panels: usize,
    /// Composite estimate at this panel count.
    pub estimate: f64,
    /// Absolute deviation from the reference value.
    pub abs_error: f64,
}

/// Drives `rule` over every panel count in `schedule` and records the
/// estimate and its absolute deviation from `reference`.
///
/// # Errors
///
/// [`CompositeError::NoPanels`] if the schedule contains a zero panel
/// count.
pub fn convergence_scan<F: Fn(f64) -> f64>(
    f: &F,
    a: f64,
    b: f64,
    reference: f64,
    rule: &NewtonCotesRule,
    schedule: &[usize],
) -> Result<Vec<ConvergenceSample>, CompositeError> {
    schedule
        .iter()
        .map(|&panels| {
            let estimate = composite(f, a, b, panels, rule)?;
            Ok(ConvergenceSample {
                panels,
                estimate,
                abs_error: (estimate - reference).abs(),
            })
        })
        .collect()
}

/// Finds the smallest panel count whose composite estimate lands within
/// `tolerance` of `reference`, scanning 1..=`max_panels`.
///
/// Returns `None` if no panel count in range reaches the tolerance.
/// Useful for ranking rules by the cost they need for a given accuracy.
pub fn panels_to_tolerance<F: Fn(f64) -> f64>(
    f: &F,
    a: f64,
    b: f64,
    reference: f64,
    rule: &NewtonCotesRule,
    tolerance: f64,
    max_panels: usize,
) -> Option<usize> {
    (1..=max_panels).find(|&panels| {
        // panels >= 1 throughout the scan, so the driver cannot fail
        composite(f, a, b, panels, rule)
            .map(|estimate| (estimate - reference).abs() <= tolerance)
            .unwrap_or(false)
    })
}
