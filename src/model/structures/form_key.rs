use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// How a player identity is transformed before it is hashed by a
/// synthetic form estimator. Each signal uses its own key so the two
/// estimates are not trivially identical.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum FormKey {
    /// Characters in reverse order (recent form)
    Reversed,
    /// Unicode uppercase (historical form)
    Uppercase
}

impl FormKey {
    pub fn apply(&self, identity: &str) -> String {
        match self {
            FormKey::Reversed => identity.chars().rev().collect(),
            FormKey::Uppercase => identity.to_uppercase()
        }
    }
}
