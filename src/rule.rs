use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::outcome::Outcome;
use crate::snapshot::PathSnapshot;

/// A custom rule stored by snapd.
///
/// Rules are created by the daemon when a user answers a prompt with a
/// lasting decision; this crate only ever reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CustomRule {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    /// Numeric uid of the user the rule belongs to.
    pub user: u32,
    /// Name of the snap the rule applies to.
    pub snap: String,
    /// Interface category, e.g. `home`.
    pub interface: String,
    pub constraints: RuleConstraints,
    pub outcome: Outcome,
    pub lifespan: Lifespan,
    /// When the rule stops applying, if ever.
    ///
    /// snapd encodes "never" as the zero time `0001-01-01T00:00:00Z`, which
    /// decodes to `None`.
    #[serde(
        default,
        deserialize_with = "deserialize_expiration",
        skip_serializing_if = "Option::is_none"
    )]
    pub expiration: Option<DateTime<Utc>>,
}

/// What a rule matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RuleConstraints {
    /// Path glob the rule applies to.
    pub path_pattern: String,
    /// Permissions covered by the rule (`read`, `write`, `execute`, ...).
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// How long a rule remains in force.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lifespan {
    Forever,
    Session,
    Single,
    Timespan,
}

impl std::fmt::Display for Lifespan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Lifespan::Forever => write!(f, "forever"),
            Lifespan::Session => write!(f, "session"),
            Lifespan::Single => write!(f, "single"),
            Lifespan::Timespan => write!(f, "timespan"),
        }
    }
}

impl CustomRule {
    /// Returns true if the rule carries an expiration at or before `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expiration.is_some_and(|at| at <= now)
    }

    /// Returns true if the rule covers the given permission.
    pub fn grants(&self, permission: &str) -> bool {
        self.constraints.permissions.iter().any(|p| p == permission)
    }

    /// Projects this rule into the path-centric view used for folder listings.
    pub fn path_snapshot(&self) -> PathSnapshot {
        PathSnapshot {
            snap: self.snap.clone(),
            interface: self.interface.clone(),
            path_pattern: self.constraints.path_pattern.clone(),
            permissions: self.constraints.permissions.clone(),
            outcome: self.outcome,
        }
    }
}

fn deserialize_expiration<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<DateTime<Utc>>::deserialize(deserializer)?;
    Ok(value.filter(|at| at.year() > 1))
}
