//! Patent application questionnaire
//!
//! Answers are free text except for the yes/no questions. Every field
//! defaults when absent so a partially filled form still loads.

use serde::{Deserialize, Serialize};

/// Answers collected by the patent application form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatentApplication {
    /// How far along the invention is (idea, prototype, ...)
    pub invention_stage: String,
    /// Whether and how a prior art search was done
    pub prior_art_search: String,
    /// What makes the invention new
    pub novelty: String,
    /// Has the invention been publicly disclosed
    pub public_disclosure: bool,
    /// Goals for seeking a patent
    pub patent_goals: Vec<String>,
    /// Free-text goal not covered by `patent_goals`
    pub other_goal: Option<String>,
    /// Where protection is sought
    pub protection_regions: String,
    /// Desired filing timeline
    pub timeline: String,
    /// Available budget
    pub budget: String,
    /// Familiarity with the disclosure process
    pub disclosure_process_familiarity: String,
    /// Wants the disclosure process explained
    pub need_disclosure_explanation: bool,
    /// Wants help preparing the disclosure
    pub need_disclosure_assistance: bool,
    /// Wants a confidentiality agreement
    pub need_confidentiality_agreement: bool,
}

impl PatentApplication {
    /// Parse a form from TOML text
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Goals joined for display, with the other-goal suffix when present
    #[must_use]
    pub fn goals_summary(&self) -> String {
        let joined = self.patent_goals.join(", ");
        match self.other_goal.as_deref().filter(|g| !g.is_empty()) {
            Some(other) => format!("{joined} (Other: {other})"),
            None => joined,
        }
    }
}
