//! Core domain logic for disclosure intake
//!
//! This module contains the list editor, snapshot persistence and report
//! submission. All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (records, snapshot, editor state, application form)
//! - `services/` - Orchestration (repository, editor session, prompt, submission)
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
