use serde::{Deserialize, Serialize};

/// The decision a custom rule applies to matching access requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Matching requests are permitted without prompting.
    Allow,
    /// Matching requests are refused without prompting.
    Deny,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Allow => write!(f, "allow"),
            Outcome::Deny => write!(f, "deny"),
        }
    }
}
