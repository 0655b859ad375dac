//! Newton-Cotes Rule Construction
//!
//! A Newton-Cotes rule approximates the integral of `f` over a single
//! panel `[a, b]` as a weighted sum of function values at evenly spaced
//! points, normalized by the coefficient sum:
//!
//! ```text
//! ∫ₐᵇ f(x) dx ≈ (b - a) / Σcᵢ · Σ cᵢ · f(xᵢ)
//! ```
//!
//! Closed rules place their k points endpoint-to-endpoint on a grid of
//! k - 1 segments; open rules place them on the interior of a grid of
//! k + 1 segments, never touching the endpoints. The midpoint rule is the
//! degenerate open case: one coefficient, one evaluation at `(a + b) / 2`.

use smallvec::SmallVec;

use crate::error::RuleError;

/// A fixed-order Newton-Cotes quadrature rule.
///
/// The rule is an immutable value: coefficients and the open flag are set
/// at construction and the derived grid geometry is cached. Applying the
/// rule is a pure function of `(f, a, b)`, so a single rule may be reused
/// across arbitrarily many panels, from any number of threads.
#[derive(Clone, Debug, PartialEq)]
pub struct NewtonCotesRule {
    /// Rule weights, one per evaluation point.
    coefficients: SmallVec<[f64; 8]>,
    /// Sum of the weights, cached for normalization.
    coefficient_sum: f64,
    /// Number of equal segments in the panel grid.
    segments: usize,
    /// Whether the panel endpoints are excluded from the point set.
    open: bool,
}

impl NewtonCotesRule {
    /// Creates a rule from a coefficient vector and an open/closed flag.
    ///
    /// With k coefficients, a closed rule spans a grid of k - 1 segments
    /// (first point at `a`, last at `b`); an open rule spans a grid of
    /// k + 1 segments, evaluating only at the k interior grid points.
    ///
    /// # Errors
    ///
    /// - [`RuleError::EmptyCoefficients`] if `coefficients` is empty
    /// - [`RuleError::ZeroCoefficientSum`] if the weights sum to zero
    /// - [`RuleError::DegenerateClosedRule`] for a closed rule with a
    ///   single coefficient
    ///
    /// # Example
    ///
    /// ```
    /// use cotes_rules::NewtonCotesRule;
    ///
    /// // Simpson's rule: ∫₀^π sin(x) dx ≈ (π/6)(sin 0 + 4 sin(π/2) + sin π)
    /// let simpson = NewtonCotesRule::new(&[1.0, 4.0, 1.0], false).unwrap();
    /// let estimate = simpson.apply(&f64::sin, 0.0, std::f64::consts::PI);
    /// assert!((estimate - 2.0944).abs() < 1e-4);
    /// ```
    pub fn new(coefficients: &[f64], open: bool) -> Result<Self, RuleError> {
        if coefficients.is_empty() {
            return Err(RuleError::EmptyCoefficients);
        }
        if !open && coefficients.len() < 2 {
            return Err(RuleError::DegenerateClosedRule);
        }
        let coefficient_sum: f64 = coefficients.iter().sum();
        if coefficient_sum == 0.0 {
            return Err(RuleError::ZeroCoefficientSum);
        }

        let segments = if open {
            coefficients.len() + 1
        } else {
            coefficients.len() - 1
        };

        Ok(Self {
            coefficients: SmallVec::from_slice(coefficients),
            coefficient_sum,
            segments,
            open,
        })
    }

    /// Builds a rule from catalog data known to satisfy the constructor
    /// invariants.
    pub(crate) fn from_catalog(coefficients: &'static [f64], open: bool) -> Self {
        let segments = if open {
            coefficients.len() + 1
        } else {
            coefficients.len() - 1
        };

        Self {
            coefficients: SmallVec::from_slice(coefficients),
            coefficient_sum: coefficients.iter().sum(),
            segments,
            open,
        }
    }

    /// Approximates `∫ₐᵇ f(x) dx` over a single panel.
    ///
    /// Evaluation point i sits at `a + (i + s)·(b - a)/n`, where n is the
    /// segment count and s is 1 for open rules and 0 for closed rules.
    /// A zero-width panel yields exactly 0 for finite integrand values;
    /// reversed bounds negate the result; NaN or infinity returned by `f`
    /// propagates to the caller untouched.
    pub fn apply<F: Fn(f64) -> f64>(&self, f: &F, a: f64, b: f64) -> f64 {
        let spacing = (b - a) / self.segments as f64;
        let shift = usize::from(self.open);

        let mut weighted = 0.0;
        for (i, coefficient) in self.coefficients.iter().enumerate() {
            let x = a + (i + shift) as f64 * spacing;
            weighted += coefficient * f(x);
        }

        (b - a) / self.coefficient_sum * weighted
    }

    /// The rule weights.
    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Whether the rule excludes the panel endpoints.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Number of equal segments in the panel grid.
    #[must_use]
    pub fn segments(&self) -> usize {
        self.segments
    }

    /// Number of integrand evaluations per application.
    #[must_use]
    pub fn evaluations(&self) -> usize {
        self.coefficients.len()
    }
}
