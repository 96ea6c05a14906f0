use serde::{Deserialize, Serialize};

use crate::rule::CustomRule;
use crate::snapshot::PathSnapshot;

/// The custom rules reported by the daemon, in the order it returned them.
///
/// A ruleset is a snapshot of a single query; it is never refreshed or
/// mutated after decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ruleset {
    rules: Vec<CustomRule>,
}

impl Ruleset {
    /// Creates a ruleset from already-decoded rules.
    pub fn new(rules: Vec<CustomRule>) -> Self {
        Self { rules }
    }

    /// Creates an empty ruleset.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Returns the rules in this ruleset.
    pub fn rules(&self) -> &[CustomRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the daemon reported no custom rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns the rules that belong to the named snap.
    pub fn for_snap<'a>(&'a self, snap: &'a str) -> impl Iterator<Item = &'a CustomRule> + 'a {
        self.rules.iter().filter(move |rule| rule.snap == snap)
    }

    /// Projects every rule into a [`PathSnapshot`], preserving order.
    pub fn path_snapshots(&self) -> Vec<PathSnapshot> {
        self.rules.iter().map(CustomRule::path_snapshot).collect()
    }
}

impl IntoIterator for Ruleset {
    type Item = CustomRule;
    type IntoIter = std::vec::IntoIter<CustomRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.into_iter()
    }
}
