//! Domain models for disclosure intake
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Contribution`] / [`Contributor`] - list records, identified by position only
//! - [`Snapshot`] - the persisted unit holding both lists
//! - [`EditorState`] - both lists with pure append / edit / remove transitions
//! - [`PatentApplication`] - questionnaire answers used for report generation

mod application;
mod collection;
mod editor_state;
mod record;
mod snapshot;

pub use application::PatentApplication;
pub use collection::{Collection, Field};
pub use editor_state::{EditorError, EditorState};
pub use record::{Contribution, Contributor};
pub use snapshot::Snapshot;
