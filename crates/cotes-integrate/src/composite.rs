//! Composite Quadrature Driving
//!
//! The composite driver partitions `[a, b]` into n equal panels and sums
//! a rule's estimate over every panel, left to right. Panel boundaries
//! are deterministic in `(a, b, n, i)`: breakpoint i is
//! `a + i·(b - a)/n`, computed multiplicatively rather than by repeated
//! addition, and the final breakpoint is pinned to `b` so a one-panel
//! call reduces to a direct rule application.

use cotes_rules::NewtonCotesRule;

use crate::error::CompositeError;

/// Approximates `∫ₐᵇ f(x) dx` by applying `rule` over `panels` equal
/// panels and summing the estimates left to right.
///
/// A zero-width interval yields 0 for any panel count; reversed bounds
/// negate the result; NaN or infinity returned by `f` anywhere in the
/// partition taints the whole sum and propagates to the caller.
///
/// # Errors
///
/// [`CompositeError::NoPanels`] if `panels` is zero.
///
/// # Example
///
/// ```
/// use cotes_integrate::composite;
/// use cotes_rules::BuiltinRule;
///
/// // ∫₀^π sin(x) dx = 2; 100 midpoint panels land within 1e-3
/// let rule = BuiltinRule::Midpoint.rule();
/// let estimate = composite(&f64::sin, 0.0, std::f64::consts::PI, 100, &rule).unwrap();
/// assert!((estimate - 2.0).abs() < 1e-3);
/// ```
pub fn composite<F: Fn(f64) -> f64>(
    f: &F,
    a: f64,
    b: f64,
    panels: usize,
    rule: &NewtonCotesRule,
) -> Result<f64, CompositeError> {
    if panels == 0 {
        return Err(CompositeError::NoPanels);
    }

    let width = (b - a) / panels as f64;

    let mut sum = 0.0;
    let mut left = a;
    for i in 1..=panels {
        let right = if i == panels { b } else { a + i as f64 * width };
        sum += rule.apply(f, left, right);
        left = right;
    }

    Ok(sum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cotes_rules::BuiltinRule;
    use std::f64::consts::PI;

    #[test]
    fn test_single_panel_matches_direct_application() {
        // With one panel the driver is exactly one rule application
        for entry in BuiltinRule::ALL {
            let rule = entry.rule();
            let driven = composite(&f64::sin, 0.25, 2.5, 1, &rule).unwrap();
            let direct = rule.apply(&f64::sin, 0.25, 2.5);
            assert_eq!(driven, direct, "{entry}");
        }
    }

    #[test]
    fn test_zero_width_interval() {
        for entry in BuiltinRule::ALL {
            let rule = entry.rule();
            for panels in [1, 2, 17] {
                let estimate = composite(&f64::exp, 3.0, 3.0, panels, &rule).unwrap();
                assert_eq!(estimate, 0.0, "{entry} with {panels} panels");
            }
        }
    }

    #[test]
    fn test_antisymmetry_in_bounds() {
        for entry in BuiltinRule::ALL {
            let rule = entry.rule();
            let forward = composite(&f64::sin, 0.0, PI, 8, &rule).unwrap();
            let backward = composite(&f64::sin, PI, 0.0, 8, &rule).unwrap();
            assert!((forward + backward).abs() < 1e-12, "{entry}");
        }
    }

    #[test]
    fn test_midpoint_ten_panels() {
        // Ten midpoint panels over [0, π] give ≈ 2.00825, converging to 2
        let rule = BuiltinRule::Midpoint.rule();
        let estimate = composite(&f64::sin, 0.0, PI, 10, &rule).unwrap();
        assert!((estimate - 2.0083).abs() < 5e-4);
    }

    #[test]
    fn test_midpoint_hundred_panels() {
        let rule = BuiltinRule::Midpoint.rule();
        let estimate = composite(&f64::sin, 0.0, PI, 100, &rule).unwrap();
        assert!((estimate - 2.0).abs() < 1e-3);
    }

    #[test]
    fn test_error_strictly_decreases_for_low_order_rules() {
        // ∫₀^π sin(x) dx = 2; midpoint and trapezoid errors shrink
        // monotonically as the partition refines from 1 to 100 panels
        for entry in [BuiltinRule::Midpoint, BuiltinRule::Trapezoid] {
            let rule = entry.rule();
            let mut previous = f64::INFINITY;
            for panels in 1..=100 {
                let estimate = composite(&f64::sin, 0.0, PI, panels, &rule).unwrap();
                let error = (estimate - 2.0).abs();
                assert!(error < previous, "{entry} at {panels} panels");
                previous = error;
            }
            assert!(previous < 1e-3);
        }
    }

    #[test]
    fn test_trapezoid_exact_on_linear_any_partition() {
        // ∫₁⁴ (2x - 3) dx = 6
        let rule = BuiltinRule::Trapezoid.rule();
        for panels in [1, 3, 10] {
            let estimate = composite(&|x| 2.0 * x - 3.0, 1.0, 4.0, panels, &rule).unwrap();
            assert!((estimate - 6.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_simpson_exact_on_cubic_any_partition() {
        // ∫₋₁² x³ dx = 15/4
        let rule = BuiltinRule::Simpson.rule();
        for panels in [1, 4, 9] {
            let estimate = composite(&|x| x.powi(3), -1.0, 2.0, panels, &rule).unwrap();
            assert!((estimate - 3.75).abs() < 1e-12);
        }
    }

    #[test]
    fn test_boole_exact_on_quintic_any_partition() {
        // ∫₀² x⁵ dx = 32/3
        let rule = BuiltinRule::Boole.rule();
        for panels in [1, 2, 5] {
            let estimate = composite(&|x| x.powi(5), 0.0, 2.0, panels, &rule).unwrap();
            assert!((estimate - 32.0 / 3.0).abs() < 1e-11);
        }
    }

    #[test]
    fn test_zero_panels_rejected() {
        let rule = BuiltinRule::Midpoint.rule();
        assert_eq!(
            composite(&f64::sin, 0.0, PI, 0, &rule),
            Err(CompositeError::NoPanels)
        );
    }

    #[test]
    fn test_nan_in_one_panel_taints_the_sum() {
        // f is finite on [0, 1) but NaN beyond; every partition of [0, 2]
        // touches the tainted region
        let f = |x: f64| if x < 1.0 { x } else { f64::NAN };
        let rule = BuiltinRule::Midpoint.rule();
        let estimate = composite(&f, 0.0, 2.0, 4, &rule).unwrap();
        assert!(estimate.is_nan());
    }

    #[test]
    fn test_infinity_propagates() {
        // 1/x blows up at the left endpoint of the first closed panel
        let f = |x: f64| 1.0 / x;
        let rule = BuiltinRule::Trapezoid.rule();
        let estimate = composite(&f, 0.0, 1.0, 10, &rule).unwrap();
        assert!(estimate.is_infinite());
    }
}
