//! Collection and field selectors

use serde::{Deserialize, Serialize};

/// One of the two editable lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    /// The contributions list
    Contributions,
    /// The contributors list
    Contributors,
}

impl Collection {
    /// Singular label used when rendering a record heading
    #[must_use]
    pub const fn record_label(self) -> &'static str {
        match self {
            Self::Contributions => "Contribution",
            Self::Contributors => "Contributor",
        }
    }
}

impl std::str::FromStr for Collection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "contributions" | "contribution" => Ok(Self::Contributions),
            "contributors" | "contributor" => Ok(Self::Contributors),
            _ => Err(format!(
                "Unknown collection: {s}. Use 'contributions' or 'contributors'"
            )),
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Contributions => write!(f, "contributions"),
            Self::Contributors => write!(f, "contributors"),
        }
    }
}

/// An editable field of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    /// `Contribution.description`
    Description,
    /// `Contributor.name`
    Name,
    /// `Contributor.expertise`
    Expertise,
    /// `Contributor.contribution`
    Contribution,
}

impl Field {
    /// All fields of a contributor, in display order
    pub const CONTRIBUTOR_FIELDS: [Self; 3] = [Self::Name, Self::Expertise, Self::Contribution];

    /// The collection whose records carry this field
    #[must_use]
    pub const fn collection(self) -> Collection {
        match self {
            Self::Description => Collection::Contributions,
            Self::Name | Self::Expertise | Self::Contribution => Collection::Contributors,
        }
    }
}

impl std::str::FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "description" | "desc" => Ok(Self::Description),
            "name" => Ok(Self::Name),
            "expertise" => Ok(Self::Expertise),
            "contribution" => Ok(Self::Contribution),
            _ => Err(format!(
                "Unknown field: {s}. Use 'name', 'expertise', 'contribution' or 'description'"
            )),
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Description => write!(f, "description"),
            Self::Name => write!(f, "name"),
            Self::Expertise => write!(f, "expertise"),
            Self::Contribution => write!(f, "contribution"),
        }
    }
}
