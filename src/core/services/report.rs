//! Application submission
//!
//! Sends the prompt to a [`ReportGenerator`] and maps the result to what the
//! presentation layer shows. The returned text is never inspected.

use log::{error, info};
use serde::Serialize;

use super::prompt::{SYSTEM_PROMPT, build_prompt};
use crate::core::models::{PatentApplication, Snapshot};
use crate::core::ports::ReportGenerator;

/// Message shown when a report was produced
pub const SUCCESS_MESSAGE: &str = "Patent application submitted successfully!";

/// Message shown when the generator failed
pub const FAILURE_MESSAGE: &str = "An error occurred while processing your application.";

/// Report text used when the service answered without content
pub const EMPTY_REPORT: &str = "Unable to generate report.";

/// Outcome of submitting an application
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    /// Whether a report was produced
    pub success: bool,
    /// User-facing status message
    pub message: String,
    /// Generated report, on success
    pub report: Option<String>,
}

/// Build the prompt, call the generator, and summarize the outcome
///
/// Generator failures are logged and turned into an unsuccessful
/// [`Submission`]; they are not returned as errors.
pub async fn submit_application<G: ReportGenerator>(
    generator: &G,
    application: &PatentApplication,
    snapshot: &Snapshot,
) -> Submission {
    let prompt = build_prompt(application, snapshot);

    match generator.generate(SYSTEM_PROMPT, &prompt).await {
        Ok(text) => {
            let report = text
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| EMPTY_REPORT.to_string());
            info!("report generated ({} chars)", report.len());
            Submission {
                success: true,
                message: SUCCESS_MESSAGE.to_string(),
                report: Some(report),
            }
        },
        Err(e) => {
            error!("error generating report: {e}");
            Submission {
                success: false,
                message: FAILURE_MESSAGE.to_string(),
                report: None,
            }
        },
    }
}
