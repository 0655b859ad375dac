//! Parallel Composite Driving
//!
//! Panel contributions are computed with rayon, collected in panel order,
//! and reduced sequentially, so the result is bit-identical to the
//! sequential driver. Small partitions fall back to the sequential path.

use cotes_rules::NewtonCotesRule;
use rayon::prelude::*;

use crate::composite::composite;
use crate::error::CompositeError;

/// Minimum panel count before parallel evaluation pays for itself.
const PARALLEL_THRESHOLD: usize = 64;

/// Parallel equivalent of [`composite`].
///
/// Same contract, same panel geometry, and a bit-identical result: the
/// per-panel estimates are gathered in partition order and summed left to
/// right. Requires `f` to be reentrant, which the framework assumes of
/// every integrand.
///
/// # Errors
///
/// [`CompositeError::NoPanels`] if `panels` is zero.
pub fn composite_par<F: Fn(f64) -> f64 + Sync>(
    f: &F,
    a: f64,
    b: f64,
    panels: usize,
    rule: &NewtonCotesRule,
) -> Result<f64, CompositeError> {
    if panels == 0 {
        return Err(CompositeError::NoPanels);
    }
    if panels < PARALLEL_THRESHOLD {
        return composite(f, a, b, panels, rule);
    }

    let width = (b - a) / panels as f64;

    let contributions: Vec<f64> = (0..panels)
        .into_par_iter()
        .map(|i| {
            let left = a + i as f64 * width;
            let right = if i + 1 == panels {
                b
            } else {
                a + (i + 1) as f64 * width
            };
            rule.apply(f, left, right)
        })
        .collect();

    Ok(contributions.iter().sum())
}
