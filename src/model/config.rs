use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::constants::{
    BASELINE_PUTTS, DRIVE_DIVISOR, NARROW_HANDICAP_THRESHOLD, WEIGHT_COURSE, WEIGHT_HISTORICAL, WEIGHT_RECENT,
    WEIGHT_SUM_TOLERANCE
};

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Weight {name} must be a finite, non-negative number (got {value})")]
    InvalidWeight { name: &'static str, value: f64 },

    #[error("Component weights must sum to 1.0 (got {0})")]
    WeightSum(f64),

    #[error("{name} must be a finite, positive number (got {value})")]
    NonPositive { name: &'static str, value: f64 }
}

/// Tunable constants of the scoring pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub weight_course: f64,
    pub weight_recent: f64,
    pub weight_historical: f64,
    /// Holes with a handicap at or below this rank count as narrow
    pub narrow_handicap: u32,
    /// Driving distance (yards) that maps to a drive factor of 1.0
    pub drive_divisor: f64,
    /// Putts per hole that maps to a putting score of 1.0
    pub baseline_putts: f64
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weight_course: WEIGHT_COURSE,
            weight_recent: WEIGHT_RECENT,
            weight_historical: WEIGHT_HISTORICAL,
            narrow_handicap: NARROW_HANDICAP_THRESHOLD,
            drive_divisor: DRIVE_DIVISOR,
            baseline_putts: BASELINE_PUTTS
        }
    }
}

impl ScoringConfig {
    pub fn weight_sum(&self) -> f64 {
        self.weight_course + self.weight_recent + self.weight_historical
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("weight_course", self.weight_course),
            ("weight_recent", self.weight_recent),
            ("weight_historical", self.weight_historical)
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeight { name, value });
            }
        }

        let sum = self.weight_sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::WeightSum(sum));
        }

        for (name, value) in [
            ("drive_divisor", self.drive_divisor),
            ("baseline_putts", self.baseline_putts)
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        Ok(())
    }

    /// Weighted combination of the three component scores.
    pub fn overall_score(&self, course_score: f64, recent_score: f64, historical_score: f64) -> f64 {
        debug_assert!(
            (self.weight_sum() - 1.0).abs() <= WEIGHT_SUM_TOLERANCE,
            "component weights must sum to 1.0"
        );

        self.weight_course * course_score + self.weight_recent * recent_score + self.weight_historical * historical_score
    }
}
