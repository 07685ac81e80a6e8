//! Report generator port
//!
//! Boundary to the hosted text-generation service. The core hands over a
//! system message and a user prompt and receives opaque text back.

use std::future::Future;

use thiserror::Error;

/// Failures at the report-generation boundary
///
/// Kept separate from persistence errors so callers never confuse a remote
/// outage with local data problems.
#[derive(Debug, Error)]
pub enum RemoteServiceError {
    /// No API key was configured
    #[error("missing API key (set {0})")]
    MissingApiKey(String),

    /// The request could not be sent or the connection failed
    #[error("request failed: {0}")]
    Transport(String),

    /// The service answered with a non-success status
    #[error("service returned status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, as returned
        body: String,
    },

    /// The response body could not be decoded
    #[error("unexpected response: {0}")]
    Decode(String),
}

/// Produces a free-text report from a prompt
pub trait ReportGenerator {
    /// Generate text for `prompt` under the given `system` instruction
    ///
    /// `Ok(None)` means the service answered but returned no text.
    fn generate(
        &self,
        system: &str,
        prompt: &str,
    ) -> impl Future<Output = Result<Option<String>, RemoteServiceError>> + Send;
}
