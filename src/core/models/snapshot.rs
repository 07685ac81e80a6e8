//! Snapshot model
//!
//! The unit of persistence: both lists at one point in time.

use serde::{Deserialize, Serialize};

use super::record::{Contribution, Contributor};

/// Complete serialized state of both collections
///
/// Either list may be missing from a stored document; it then loads as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Ordered contributions
    #[serde(default)]
    pub contributions: Vec<Contribution>,
    /// Ordered contributors
    #[serde(default)]
    pub contributors: Vec<Contributor>,
}

impl Snapshot {
    /// Create an empty snapshot
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            contributions: Vec::new(),
            contributors: Vec::new(),
        }
    }

    /// True when both lists are empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contributions.is_empty() && self.contributors.is_empty()
    }
}
