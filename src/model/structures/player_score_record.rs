use serde::{Deserialize, Serialize};

/// One ranked output row.
///
/// Scores are kept at full precision; rounding is a rendering concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerScoreRecord {
    pub player: String,
    pub tier: u32,
    pub course_score: f64,
    pub recent_score: f64,
    pub historical_score: f64,
    pub overall_score: f64
}
