//! Record models
//!
//! Contributions and contributors have no identity of their own: a record is
//! addressed only by its position in the owning list.

use serde::{Deserialize, Serialize};

use super::collection::Field;

/// Something that was contributed to the invention
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contribution {
    /// Free-text description of the contribution
    #[serde(default)]
    pub description: String,
}

impl Contribution {
    /// Create a contribution with the given description
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A person who contributed to the invention
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    /// Contributor's name
    #[serde(default)]
    pub name: String,
    /// Area of expertise
    #[serde(default)]
    pub expertise: String,
    /// What this person contributed
    #[serde(default)]
    pub contribution: String,
}

impl Contributor {
    /// Create a contributor with all fields set
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        expertise: impl Into<String>,
        contribution: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            expertise: expertise.into(),
            contribution: contribution.into(),
        }
    }

    /// Get a field value
    ///
    /// Returns `None` for fields that belong to contributions.
    #[must_use]
    pub fn field(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => Some(&self.name),
            Field::Expertise => Some(&self.expertise),
            Field::Contribution => Some(&self.contribution),
            Field::Description => None,
        }
    }

    pub(crate) fn slot_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Name => Some(&mut self.name),
            Field::Expertise => Some(&mut self.expertise),
            Field::Contribution => Some(&mut self.contribution),
            Field::Description => None,
        }
    }
}
