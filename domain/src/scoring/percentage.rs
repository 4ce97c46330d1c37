//! Percentage and band selection
//!
//! Percentages are fixed-point values in hundredths of a percent, so the same
//! inputs always give the same bits. Division rounds half to even.

use crate::core::error::ScoringError;
use crate::rubric::OverallBand;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;

/// A percentage with two decimal places
///
/// Serialized as a plain JSON number (`66.67`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Percentage(i64);

impl Percentage {
    pub const ZERO: Percentage = Percentage(0);
    pub const HUNDRED: Percentage = Percentage(10_000);

    pub const fn from_hundredths(hundredths: i64) -> Self {
        Self(hundredths)
    }

    /// Nearest two-decimal value, ties to even
    pub fn from_f64(value: f64) -> Self {
        Self((value * 100.0).round_ties_even() as i64)
    }

    pub fn hundredths(self) -> i64 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl std::fmt::Display for Percentage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Serialize for Percentage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

impl<'de> Deserialize<'de> for Percentage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        if !value.is_finite() {
            return Err(serde::de::Error::custom("percentage must be a finite number"));
        }
        Ok(Self::from_f64(value))
    }
}

/// `earned / possible * 100`, rounded half-to-even at two decimals.
///
/// A zero `possible` yields 0 rather than an error.
///
/// ```
/// use grader_domain::scoring::{compute_percentage, Percentage};
///
/// assert_eq!(compute_percentage(20, 30).to_string(), "66.67");
/// assert_eq!(compute_percentage(0, 0), Percentage::ZERO);
/// ```
pub fn compute_percentage(earned: u64, possible: u64) -> Percentage {
    if possible == 0 {
        return Percentage::ZERO;
    }

    let numerator = u128::from(earned) * 10_000;
    let divisor = u128::from(possible);
    let quotient = numerator / divisor;
    let remainder = numerator % divisor;

    let rounded = match (remainder * 2).cmp(&divisor) {
        Ordering::Less => quotient,
        Ordering::Greater => quotient + 1,
        Ordering::Equal => quotient + (quotient & 1),
    };

    Percentage(i64::try_from(rounded).unwrap_or(i64::MAX))
}

/// Pick the band whose inclusive lower bound `percentage` reaches.
///
/// Bands are scanned from the highest threshold down, so a percentage sitting
/// exactly on a threshold lands in the higher band. A percentage below every
/// threshold lands in the lowest band.
pub fn select_overall_band(
    percentage: Percentage,
    bands: &[OverallBand],
) -> Result<&OverallBand, ScoringError> {
    let mut ordered: Vec<&OverallBand> = bands.iter().collect();
    ordered.sort_by(|a, b| b.threshold.cmp(&a.threshold));

    let lowest = ordered.last().copied();
    ordered
        .into_iter()
        .find(|band| band.admits(percentage))
        .or(lowest)
        .ok_or(ScoringError::NoBandConfigured { rubric_id: None })
}
