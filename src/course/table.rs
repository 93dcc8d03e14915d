use itertools::{Itertools, MinMaxResult};
use serde::Serialize;

use super::InputError;

/// A hole as read from the source, before whole-table normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawHole {
    pub distance: f64,
    pub average_score: f64,
    pub handicap: u32
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoleRecord {
    /// Yards
    pub distance: f64,
    pub average_score: f64,
    /// 1 is the hardest hole on the course
    pub handicap: u32,
    /// `distance / max(distance)` over the whole table
    pub distance_norm: f64,
    /// Min-max scaled `average_score` over the whole table
    pub difficulty_norm: f64
}

/// Non-empty, immutable, normalized hole table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseTable {
    holes: Vec<HoleRecord>
}

impl CourseTable {
    /// Normalizes a set of holes, preserving their order.
    ///
    /// Both normalizations are whole-table statistics, so the maximum
    /// distance and the score range are computed over every hole before
    /// any record is produced.
    pub fn from_holes(raw: Vec<RawHole>) -> Result<CourseTable, InputError> {
        let max_distance = match raw.iter().map(|h| h.distance).minmax() {
            MinMaxResult::NoElements => return Err(InputError::Empty),
            MinMaxResult::OneElement(d) => d,
            MinMaxResult::MinMax(_, max) => max
        };

        if max_distance <= 0.0 {
            return Err(InputError::Degenerate {
                column: "distance",
                reason: format!("maximum distance must be positive (got {})", max_distance)
            });
        }

        let (min_score, max_score) = raw
            .iter()
            .map(|h| h.average_score)
            .minmax()
            .into_option()
            .ok_or(InputError::Empty)?;
        let score_range = max_score - min_score;

        if score_range <= 0.0 {
            return Err(InputError::Degenerate {
                column: "average_score",
                reason: format!("all {} holes share the same average score {}", raw.len(), min_score)
            });
        }

        let holes = raw
            .into_iter()
            .map(|h| HoleRecord {
                distance: h.distance,
                average_score: h.average_score,
                handicap: h.handicap,
                distance_norm: h.distance / max_distance,
                difficulty_norm: (h.average_score - min_score) / score_range
            })
            .collect();

        Ok(CourseTable { holes })
    }

    pub fn holes(&self) -> &[HoleRecord] {
        &self.holes
    }

    pub fn len(&self) -> usize {
        self.holes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holes.is_empty()
    }

    pub fn mean_distance_norm(&self) -> f64 {
        self.holes.iter().map(|h| h.distance_norm).sum::<f64>() / self.holes.len() as f64
    }

    /// Fraction of holes whose handicap is at or below `threshold`.
    pub fn narrow_fraction(&self, threshold: u32) -> f64 {
        let narrow = self.holes.iter().filter(|h| h.handicap <= threshold).count();

        narrow as f64 / self.holes.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn raw(distance: f64, average_score: f64, handicap: u32) -> RawHole {
        RawHole {
            distance,
            average_score,
            handicap
        }
    }

    #[test]
    fn test_two_hole_normalization() {
        let table = CourseTable::from_holes(vec![raw(300.0, 4.0, 3), raw(400.0, 5.0, 10)]).unwrap();

        let distance_norms: Vec<f64> = table.holes().iter().map(|h| h.distance_norm).collect();
        let difficulty_norms: Vec<f64> = table.holes().iter().map(|h| h.difficulty_norm).collect();

        assert_eq!(distance_norms, vec![0.75, 1.0]);
        assert_eq!(difficulty_norms, vec![0.0, 1.0]);
        assert_abs_diff_eq!(table.narrow_fraction(5), 0.5);
        assert_abs_diff_eq!(table.mean_distance_norm(), 0.875);
    }

    #[test]
    fn test_normalization_bounds() {
        let table = CourseTable::from_holes(vec![
            raw(482.0, 4.35, 7),
            raw(341.0, 4.12, 13),
            raw(428.0, 4.28, 5),
            raw(609.0, 4.81, 11),
            raw(194.0, 3.21, 15),
            raw(288.0, 3.34, 1)
        ])
        .unwrap();

        let max_distance = table.holes().iter().map(|h| h.distance_norm).fold(f64::MIN, f64::max);
        let min_difficulty = table.holes().iter().map(|h| h.difficulty_norm).fold(f64::MAX, f64::min);
        let max_difficulty = table.holes().iter().map(|h| h.difficulty_norm).fold(f64::MIN, f64::max);

        assert_eq!(max_distance, 1.0);
        assert_eq!(min_difficulty, 0.0);
        assert_eq!(max_difficulty, 1.0);
        for hole in table.holes() {
            assert!((0.0..=1.0).contains(&hole.distance_norm));
            assert!((0.0..=1.0).contains(&hole.difficulty_norm));
        }
    }

    #[test]
    fn test_preserves_row_order() {
        let table = CourseTable::from_holes(vec![raw(400.0, 5.0, 10), raw(300.0, 4.0, 3), raw(350.0, 4.5, 1)]).unwrap();

        let handicaps: Vec<u32> = table.holes().iter().map(|h| h.handicap).collect();
        assert_eq!(handicaps, vec![10, 3, 1]);
    }

    #[test]
    fn test_empty_table() {
        assert!(matches!(CourseTable::from_holes(vec![]), Err(InputError::Empty)));
    }

    #[test]
    fn test_single_hole_is_degenerate() {
        let result = CourseTable::from_holes(vec![raw(400.0, 4.0, 1)]);

        assert!(matches!(
            result,
            Err(InputError::Degenerate {
                column: "average_score",
                ..
            })
        ));
    }

    #[test]
    fn test_flat_scores_are_degenerate() {
        let result = CourseTable::from_holes(vec![raw(300.0, 4.0, 1), raw(400.0, 4.0, 2)]);

        assert!(matches!(
            result,
            Err(InputError::Degenerate {
                column: "average_score",
                ..
            })
        ));
    }

    #[test]
    fn test_zero_distances_are_degenerate() {
        let result = CourseTable::from_holes(vec![raw(0.0, 4.0, 1), raw(0.0, 5.0, 2)]);

        assert!(matches!(result, Err(InputError::Degenerate { column: "distance", .. })));
    }
}
