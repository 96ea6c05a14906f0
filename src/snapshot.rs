use serde::{Deserialize, Serialize};

use crate::outcome::Outcome;

/// A read-only, path-centric view of one custom rule.
///
/// Snapshots are derived from the daemon's rule list on every query and are
/// never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathSnapshot {
    pub snap: String,
    pub interface: String,
    pub path_pattern: String,
    pub permissions: Vec<String>,
    pub outcome: Outcome,
}

impl std::fmt::Display for PathSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} [{}] ({})",
            self.snap,
            self.outcome,
            self.path_pattern,
            self.permissions.join(","),
            self.interface
        )
    }
}
