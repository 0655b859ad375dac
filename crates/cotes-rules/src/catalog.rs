//! Built-in Rule Catalog
//!
//! Five reference rules with independently known closed forms. The
//! catalog is data, not logic: each entry is a coefficient vector and an
//! open flag fed through the same generator as caller-supplied rules,
//! which is what makes it useful for validating the generator.
//!
//! | name | coefficients | open | exact through degree |
//! |---|---|---|---|
//! | trapezoid | [1, 1] | no | 1 |
//! | midpoint | [1] | yes | 1 |
//! | simpson | [1, 4, 1] | no | 3 |
//! | boole | [7, 32, 12, 32, 7] | no | 5 |
//! | milne | [2, -1, 2] | yes | 3 |

use std::fmt;
use std::str::FromStr;

use crate::error::RuleError;
use crate::rule::NewtonCotesRule;

/// The built-in Newton-Cotes rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BuiltinRule {
    /// Two-point closed rule.
    Trapezoid,
    /// One-point open rule evaluating at the panel midpoint.
    Midpoint,
    /// Three-point closed rule.
    Simpson,
    /// Five-point closed rule.
    Boole,
    /// Three-point open rule.
    Milne,
}

impl BuiltinRule {
    /// Every catalog rule, for iteration in tests, demos, and benches.
    pub const ALL: [BuiltinRule; 5] = [
        BuiltinRule::Trapezoid,
        BuiltinRule::Midpoint,
        BuiltinRule::Simpson,
        BuiltinRule::Boole,
        BuiltinRule::Milne,
    ];

    /// Rule weights, per the published Newton-Cotes tables.
    #[must_use]
    pub fn coefficients(self) -> &'static [f64] {
        match self {
            BuiltinRule::Trapezoid => &[1.0, 1.0],
            BuiltinRule::Midpoint => &[1.0],
            BuiltinRule::Simpson => &[1.0, 4.0, 1.0],
            BuiltinRule::Boole => &[7.0, 32.0, 12.0, 32.0, 7.0],
            BuiltinRule::Milne => &[2.0, -1.0, 2.0],
        }
    }

    /// Whether the rule omits the panel endpoints.
    #[must_use]
    pub fn is_open(self) -> bool {
        matches!(self, BuiltinRule::Midpoint | BuiltinRule::Milne)
    }

    /// The catalog name, also accepted by [`FromStr`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            BuiltinRule::Trapezoid => "trapezoid",
            BuiltinRule::Midpoint => "midpoint",
            BuiltinRule::Simpson => "simpson",
            BuiltinRule::Boole => "boole",
            BuiltinRule::Milne => "milne",
        }
    }

    /// Constructs the rule value for this catalog entry.
    #[must_use]
    pub fn rule(self) -> NewtonCotesRule {
        NewtonCotesRule::from_catalog(self.coefficients(), self.is_open())
    }
}

impl fmt::Display for BuiltinRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BuiltinRule {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BuiltinRule::ALL
            .into_iter()
            .find(|rule| rule.name() == s)
            .ok_or_else(|| RuleError::UnknownRule(s.to_string()))
    }
}
