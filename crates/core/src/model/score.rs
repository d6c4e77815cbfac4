use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScoreError {
    #[error("score must be between 0 and 100, got {0}")]
    OutOfRange(u32),
    #[error("score must be a number between 0 and 100, got {0}")]
    NotANumber(String),
}

/// A percentage-style score in `0..=100`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "u32")]
pub struct Score(u8);

impl Score {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(100);

    /// Creates a score.
    ///
    /// # Errors
    ///
    /// Returns `ScoreError::OutOfRange` if `value` exceeds 100.
    pub fn new(value: u32) -> Result<Self, ScoreError> {
        match u8::try_from(value) {
            Ok(v) if v <= 100 => Ok(Self(v)),
            _ => Err(ScoreError::OutOfRange(value)),
        }
    }

    /// Rounds to the nearest whole score and clamps into `0..=100`.
    /// Non-finite input reads as zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn saturating(value: f64) -> Self {
        if !value.is_finite() {
            return Self::ZERO;
        }
        Self(value.round().clamp(0.0, 100.0) as u8)
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u32> for Score {
    type Error = ScoreError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Fractions round to the nearest whole score; anything outside `0..=100`
/// after rounding is rejected.
impl TryFrom<f64> for Score {
    type Error = ScoreError;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        let rounded = value.round();
        if !rounded.is_finite() || rounded < 0.0 {
            return Err(ScoreError::NotANumber(value.to_string()));
        }
        Self::new(rounded.min(f64::from(u32::MAX)) as u32)
    }
}

impl From<Score> for u32 {
    fn from(score: Score) -> Self {
        u32::from(score.0)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bounds() {
        assert_eq!(Score::new(0).unwrap(), Score::ZERO);
        assert_eq!(Score::new(100).unwrap(), Score::MAX);
    }

    #[test]
    fn rejects_above_hundred() {
        assert_eq!(Score::new(101), Err(ScoreError::OutOfRange(101)));
        assert_eq!(Score::new(1_000), Err(ScoreError::OutOfRange(1_000)));
    }

    #[test]
    fn deserialize_rejects_out_of_range() {
        let ok: Score = serde_json::from_str("85").unwrap();
        assert_eq!(ok.value(), 85);
        assert!(serde_json::from_str::<Score>("150").is_err());
        assert!(serde_json::from_str::<Score>("-3").is_err());
    }

    #[test]
    fn deserialize_rounds_fractional_scores() {
        let score: Score = serde_json::from_str("72.5").unwrap();
        assert_eq!(score.value(), 73);
        let score: Score = serde_json::from_str("99.6").unwrap();
        assert_eq!(score, Score::MAX);
        assert_eq!(serde_json::to_string(&score).unwrap(), "100");
    }

    #[test]
    fn saturating_clamps_and_rounds() {
        assert_eq!(Score::saturating(140.0), Score::MAX);
        assert_eq!(Score::saturating(-2.0), Score::ZERO);
        assert_eq!(Score::saturating(f64::NAN), Score::ZERO);
        assert_eq!(Score::saturating(41.4).value(), 41);
    }
}
