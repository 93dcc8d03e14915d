use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// What the ranker does when a single player cannot be scored.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Leave the player out of the ranking and list them as flagged
    #[default]
    Flag,
    /// Stop ranking the tier at the first failure
    Abort
}
