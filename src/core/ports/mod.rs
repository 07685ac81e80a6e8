//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core logic and external
//! systems (durable storage, the hosted report generator).
//!
//! Implementations live in the `adapters` module.

mod key_value_store;
mod report_generator;

pub use key_value_store::{KeyValueStore, StoreError};
pub use report_generator::{RemoteServiceError, ReportGenerator};
