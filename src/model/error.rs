use serde::{ser::SerializeStruct, Serialize, Serializer};
use strum_macros::IntoStaticStr;
use thiserror::Error;

/// Failure while scoring a single player.
#[derive(Debug, Error, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ScoringError {
    #[error("division by zero in {field}: {reason}")]
    Division { field: &'static str, reason: String },

    #[error("profile provider failed for {identity}: {reason}")]
    Provider { identity: String, reason: String }
}

impl ScoringError {
    pub fn kind(&self) -> &'static str {
        self.into()
    }
}

/// A [`ScoringError`] together with the player and tier it belongs to.
#[derive(Debug, Error)]
#[error("{identity} (tier {tier}): {error}")]
pub struct PlayerFailure {
    pub identity: String,
    pub tier: u32,
    #[source]
    pub error: ScoringError
}

impl Serialize for PlayerFailure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PlayerFailure", 4)?;
        state.serialize_field("player", &self.identity)?;
        state.serialize_field("tier", &self.tier)?;
        state.serialize_field("kind", self.error.kind())?;
        state.serialize_field("reason", &self.error.to_string())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind() {
        let division = ScoringError::Division {
            field: "putting_avg",
            reason: "zero".to_string()
        };
        let provider = ScoringError::Provider {
            identity: "Jon Rahm".to_string(),
            reason: "offline".to_string()
        };

        assert_eq!(division.kind(), "division");
        assert_eq!(provider.kind(), "provider");
    }

    #[test]
    fn test_failure_display_carries_context() {
        let failure = PlayerFailure {
            identity: "Shane Lowry".to_string(),
            tier: 1,
            error: ScoringError::Division {
                field: "putting_avg",
                reason: "putting average is zero".to_string()
            }
        };

        let message = failure.to_string();
        assert!(message.contains("Shane Lowry"));
        assert!(message.contains("tier 1"));
        assert!(message.contains("putting_avg"));
    }

    #[test]
    fn test_failure_serializes() {
        let failure = PlayerFailure {
            identity: "Shane Lowry".to_string(),
            tier: 2,
            error: ScoringError::Provider {
                identity: "Shane Lowry".to_string(),
                reason: "no profile on record".to_string()
            }
        };

        let json = serde_json::to_value(&failure).unwrap();
        assert_eq!(json["player"], "Shane Lowry");
        assert_eq!(json["tier"], 2);
        assert_eq!(json["kind"], "provider");
    }
}
