use serde::{Deserialize, Serialize};

/// Physical and skill attributes of a single player, as supplied by a
/// [`ProfileSource`](crate::model::profile::ProfileSource).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    /// Average driving distance in yards
    pub driving_distance: f64,
    /// Fraction of fairways hit, 0..=1
    pub fairway_accuracy: f64,
    /// Putts per hole
    pub putting_avg: f64
}

impl PlayerProfile {
    /// Checks the profile for values a provider should never hand out.
    ///
    /// A putting average of exactly zero passes here; it is rejected later
    /// by the course-fit scorer as a division failure.
    pub fn validate(&self) -> Result<(), String> {
        if !self.driving_distance.is_finite() || self.driving_distance <= 0.0 {
            return Err(format!("driving_distance must be positive (got {})", self.driving_distance));
        }

        if !(0.0..=1.0).contains(&self.fairway_accuracy) {
            return Err(format!(
                "fairway_accuracy must be within 0..=1 (got {})",
                self.fairway_accuracy
            ));
        }

        if !self.putting_avg.is_finite() || self.putting_avg < 0.0 {
            return Err(format!("putting_avg must be non-negative (got {})", self.putting_avg));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::PlayerProfile;

    fn profile(driving_distance: f64, fairway_accuracy: f64, putting_avg: f64) -> PlayerProfile {
        PlayerProfile {
            driving_distance,
            fairway_accuracy,
            putting_avg
        }
    }

    #[test]
    fn test_validate_accepts_realistic_profile() {
        assert!(profile(300.0, 0.65, 1.75).validate().is_ok());
    }

    #[test]
    fn test_validate_accepts_zero_putting() {
        assert!(profile(300.0, 0.65, 0.0).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(profile(0.0, 0.65, 1.75).validate().is_err());
        assert!(profile(f64::NAN, 0.65, 1.75).validate().is_err());
        assert!(profile(300.0, 1.2, 1.75).validate().is_err());
        assert!(profile(300.0, -0.1, 1.75).validate().is_err());
        assert!(profile(300.0, 0.65, -1.0).validate().is_err());
        assert!(profile(300.0, 0.65, f64::INFINITY).validate().is_err());
    }
}
