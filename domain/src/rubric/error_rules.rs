//! Error-count scoring rules
//!
//! An `error_count` criterion starts at its maximum and loses a fixed number of
//! points per deduction unit. Minor errors are folded into major-equivalents
//! first, using the rubric-wide [`ErrorConversionRules`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::num::NonZeroU32;

/// Severity class of a detected mistake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSeverity {
    Major,
    Minor,
}

/// How many minor errors make up one major-equivalent
///
/// The ratio is a non-zero integer, enforced by the type. Leftover minor
/// errors that do not complete a full major-equivalent are dropped.
///
/// # Example
///
/// ```
/// use grader_domain::rubric::ErrorConversionRules;
///
/// let rules = ErrorConversionRules::new(3).unwrap();
/// assert_eq!(rules.major_equivalents(3), 1);
/// assert_eq!(rules.major_equivalents(5), 1);
/// assert_eq!(rules.major_equivalents(2), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorConversionRules {
    pub minor_per_major: NonZeroU32,
}

impl ErrorConversionRules {
    /// Returns `None` when `minor_per_major` is 0
    pub fn new(minor_per_major: u32) -> Option<Self> {
        NonZeroU32::new(minor_per_major).map(|minor_per_major| Self { minor_per_major })
    }

    /// Number of whole major-equivalents contained in `minor` errors
    pub fn major_equivalents(&self, minor: u64) -> u64 {
        minor / u64::from(self.minor_per_major.get())
    }
}

impl Default for ErrorConversionRules {
    fn default() -> Self {
        Self {
            minor_per_major: NonZeroU32::MIN,
        }
    }
}

/// Rule payload for an `error_count` criterion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorCountScoringRules {
    /// Points removed per deduction unit
    pub deduction_per_unit: u32,
    /// Lowest score the criterion can fall to
    #[serde(default)]
    pub floor: u32,
    /// Severity of each error kind the classifier may itemize
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub error_weights: BTreeMap<String, ErrorSeverity>,
}

impl ErrorCountScoringRules {
    pub fn new(deduction_per_unit: u32) -> Self {
        Self {
            deduction_per_unit,
            floor: 0,
            error_weights: BTreeMap::new(),
        }
    }

    pub fn with_floor(mut self, floor: u32) -> Self {
        self.floor = floor;
        self
    }

    pub fn with_error_kind(mut self, kind: impl Into<String>, severity: ErrorSeverity) -> Self {
        self.error_weights.insert(kind.into(), severity);
        self
    }

    pub fn severity_of(&self, kind: &str) -> Option<ErrorSeverity> {
        self.error_weights.get(kind).copied()
    }

    /// Raw major count plus whole major-equivalents from the minor count
    pub fn deduction_units(&self, major: u64, minor: u64, conversion: &ErrorConversionRules) -> u64 {
        major.saturating_add(conversion.major_equivalents(minor))
    }

    /// Points left after deducting `units`, kept within `[floor, max_points]`
    pub fn points_after(&self, max_points: u32, units: u64) -> u32 {
        let deduction = units.saturating_mul(u64::from(self.deduction_per_unit));
        let remaining = u64::from(max_points).saturating_sub(deduction);
        let clamped = remaining
            .max(u64::from(self.floor))
            .min(u64::from(max_points));
        // clamped <= max_points, which is a u32
        clamped as u32
    }
}
