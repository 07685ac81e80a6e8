//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use std::fmt::Write as _;

use serde::Serialize;

use crate::core::models::{Collection, Contribution, Contributor, EditorState};
use crate::core::services::Submission;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Contents of the lists, for rendering
#[derive(Debug, Serialize)]
pub struct StateView {
    /// Contributions in order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contributions: Option<Vec<Contribution>>,
    /// Contributors in order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contributors: Option<Vec<Contributor>>,
    /// When the saved snapshot was last written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<String>,
}

impl StateView {
    /// View of both lists
    #[must_use]
    pub fn full(state: &EditorState, saved_at: Option<String>) -> Self {
        Self {
            contributions: Some(state.contributions().to_vec()),
            contributors: Some(state.contributors().to_vec()),
            saved_at,
        }
    }

    /// View of a single list
    #[must_use]
    pub fn only(state: &EditorState, collection: Collection) -> Self {
        match collection {
            Collection::Contributions => Self {
                contributions: Some(state.contributions().to_vec()),
                contributors: None,
                saved_at: None,
            },
            Collection::Contributors => Self {
                contributions: None,
                contributors: Some(state.contributors().to_vec()),
                saved_at: None,
            },
        }
    }

    /// Render the view based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }

    /// Human-readable text, numbered from 1 like the form headings
    #[must_use]
    pub fn to_human(&self) -> String {
        let mut out = String::new();

        if let Some(contributions) = &self.contributions {
            let _ = writeln!(out, "Contributions:");
            if contributions.is_empty() {
                let _ = writeln!(out, "  (none)");
            }
            for (i, c) in contributions.iter().enumerate() {
                let _ = writeln!(out, "  Contribution {}", i + 1);
                let _ = writeln!(out, "    {}", display_or_blank(&c.description));
            }
        }

        if let Some(contributors) = &self.contributors {
            if self.contributions.is_some() {
                let _ = writeln!(out);
            }
            let _ = writeln!(out, "Contributors:");
            if contributors.is_empty() {
                let _ = writeln!(out, "  (none)");
            }
            for (i, c) in contributors.iter().enumerate() {
                let _ = writeln!(out, "  Contributor {}", i + 1);
                let _ = writeln!(out, "    Name:         {}", display_or_blank(&c.name));
                let _ = writeln!(out, "    Expertise:    {}", display_or_blank(&c.expertise));
                let _ = writeln!(out, "    Contribution: {}", display_or_blank(&c.contribution));
            }
        }

        if let Some(saved_at) = &self.saved_at {
            let _ = writeln!(out, "\nLast saved: {saved_at}");
        }

        out
    }
}

fn display_or_blank(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Successful result with a message
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

/// Render a report submission
pub fn render_submission(submission: &Submission, mode: OutputMode) {
    match mode {
        OutputMode::Human => {
            println!("{}", submission.message);
            if let Some(report) = &submission.report {
                println!("\n{report}");
            }
        },
        OutputMode::Json => {
            println!("{}", serde_json::to_string_pretty(submission).unwrap_or_default());
        },
    }
}
