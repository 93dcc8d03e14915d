use std::collections::{HashMap, HashSet};

use crate::{
    course::{CourseTable, RawHole},
    model::{
        error::ScoringError, form::FormEstimator, profile::ProfileSource,
        structures::player_profile::PlayerProfile
    }
};

/// Builds a normalized table from `(distance, average_score, handicap)` rows.
pub fn generate_course_table(holes: &[(f64, f64, u32)]) -> CourseTable {
    let raw = holes
        .iter()
        .map(|&(distance, average_score, handicap)| RawHole {
            distance,
            average_score,
            handicap
        })
        .collect();

    CourseTable::from_holes(raw).expect("Expected a valid course table")
}

/// An 18-hole championship-length table.
pub fn generate_championship_table() -> CourseTable {
    generate_course_table(&[
        (482.0, 4.35, 7),
        (341.0, 4.12, 13),
        (428.0, 4.28, 5),
        (609.0, 4.81, 11),
        (382.0, 4.05, 9),
        (194.0, 3.21, 15),
        (479.0, 4.41, 3),
        (288.0, 3.34, 17),
        (477.0, 4.22, 1),
        (462.0, 4.31, 4),
        (379.0, 4.02, 14),
        (667.0, 4.93, 10),
        (183.0, 3.12, 16),
        (358.0, 4.09, 12),
        (500.0, 4.46, 2),
        (231.0, 3.28, 18),
        (313.0, 3.97, 8),
        (484.0, 4.38, 6)
    ])
}

pub fn generate_profile(driving_distance: f64, fairway_accuracy: f64, putting_avg: f64) -> PlayerProfile {
    PlayerProfile {
        driving_distance,
        fairway_accuracy,
        putting_avg
    }
}

pub fn generate_identities(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("Player {}", i)).collect()
}

/// Deterministic profile source: a default profile, per-player overrides,
/// and identities that always fail with a provider error.
#[derive(Debug, Clone)]
pub struct FixedProfileSource {
    default: PlayerProfile,
    overrides: HashMap<String, PlayerProfile>,
    failing: HashSet<String>
}

impl FixedProfileSource {
    pub fn new(default: PlayerProfile) -> Self {
        Self {
            default,
            overrides: HashMap::new(),
            failing: HashSet::new()
        }
    }

    pub fn insert(&mut self, identity: &str, profile: PlayerProfile) {
        self.overrides.insert(identity.to_string(), profile);
    }

    pub fn fail_for(&mut self, identity: &str) {
        self.failing.insert(identity.to_string());
    }
}

impl ProfileSource for FixedProfileSource {
    fn fetch_profile(&mut self, identity: &str) -> Result<PlayerProfile, ScoringError> {
        if self.failing.contains(identity) {
            return Err(ScoringError::Provider {
                identity: identity.to_string(),
                reason: "provider unreachable".to_string()
            });
        }

        Ok(self.overrides.get(identity).copied().unwrap_or(self.default))
    }
}

/// Deterministic form estimator: a default value with per-player overrides.
#[derive(Debug, Clone)]
pub struct FixedForm {
    default: f64,
    overrides: HashMap<String, f64>
}

impl FixedForm {
    pub fn new(default: f64) -> Self {
        Self {
            default,
            overrides: HashMap::new()
        }
    }

    pub fn insert(&mut self, identity: &str, value: f64) {
        self.overrides.insert(identity.to_string(), value);
    }
}

impl FormEstimator for FixedForm {
    fn estimate(&mut self, identity: &str) -> f64 {
        self.overrides.get(identity).copied().unwrap_or(self.default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_championship_table() {
        let table = generate_championship_table();

        assert_eq!(table.len(), 18);
        assert_eq!(table.holes().iter().filter(|h| h.handicap <= 5).count(), 5);
    }

    #[test]
    fn test_fixed_profile_source() {
        let mut source = FixedProfileSource::new(generate_profile(300.0, 0.6, 1.8));
        source.insert("Player 2", generate_profile(310.0, 0.7, 1.7));
        source.fail_for("Player 3");

        assert_eq!(source.fetch_profile("Player 1").unwrap().driving_distance, 300.0);
        assert_eq!(source.fetch_profile("Player 2").unwrap().driving_distance, 310.0);
        assert!(source.fetch_profile("Player 3").is_err());
    }

    #[test]
    #[should_panic(expected = "Expected a valid course table")]
    fn test_invalid_table_panics() {
        generate_course_table(&[(400.0, 4.0, 1)]);
    }
}
