//! Services coordinating models and ports
//!
//! - [`repository`] - snapshot save / load through a key-value store
//! - [`editor`] - session holding the live state and its observers
//! - [`prompt`] - report prompt templating
//! - [`report`] - application submission to a report generator

pub mod editor;
pub mod prompt;
pub mod report;
pub mod repository;

pub use editor::{Action, Editor, StateObserver};
pub use prompt::{SYSTEM_PROMPT, build_prompt};
pub use report::{Submission, submit_application};
pub use repository::{PersistenceError, SNAPSHOT_KEY, SnapshotRepository};
