use serde::Serialize;

use crate::{
    course::CourseTable,
    model::{config::ScoringConfig, error::ScoringError, structures::player_profile::PlayerProfile}
};

/// The three course-fit sub-scores and their equally weighted mean.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CourseFitBreakdown {
    pub drive_score: f64,
    pub accuracy_score: f64,
    pub putting_score: f64,
    pub course_score: f64
}

/// # Course fit
///
/// Blends three proxies into a single score:
/// 1. Length: `(driving_distance / drive_divisor) * mean(distance_norm)`
/// 2. Precision: `fairway_accuracy * narrow_fraction`, where narrow holes are those with a
///     handicap at or below the configured threshold (the tightest driving holes by convention)
/// 3. Putting: `baseline_putts / putting_avg`
///
/// The course score is the arithmetic mean of the three. None of them is clamped.
pub fn score_course_fit(
    profile: &PlayerProfile,
    table: &CourseTable,
    config: &ScoringConfig
) -> Result<CourseFitBreakdown, ScoringError> {
    if table.is_empty() {
        return Err(ScoringError::Division {
            field: "hole_count",
            reason: "course table has no holes".to_string()
        });
    }

    if config.drive_divisor == 0.0 {
        return Err(ScoringError::Division {
            field: "drive_divisor",
            reason: "driving distance divisor is zero".to_string()
        });
    }

    if profile.putting_avg == 0.0 {
        return Err(ScoringError::Division {
            field: "putting_avg",
            reason: "putting average is zero".to_string()
        });
    }

    let drive_score = (profile.driving_distance / config.drive_divisor) * table.mean_distance_norm();
    let accuracy_score = profile.fairway_accuracy * table.narrow_fraction(config.narrow_handicap);
    let putting_score = config.baseline_putts / profile.putting_avg;

    // Tiny positive putting averages overflow the quotient
    if !putting_score.is_finite() {
        return Err(ScoringError::Division {
            field: "putting_avg",
            reason: format!("putting average {:e} is too small to divide by", profile.putting_avg)
        });
    }

    let course_score = (drive_score + accuracy_score + putting_score) / 3.0;
    if !course_score.is_finite() {
        return Err(ScoringError::Division {
            field: "course_score",
            reason: format!(
                "sub-scores do not combine to a finite value (drive {}, accuracy {}, putting {})",
                drive_score, accuracy_score, putting_score
            )
        });
    }

    Ok(CourseFitBreakdown {
        drive_score,
        accuracy_score,
        putting_score,
        course_score
    })
}
