//! List editor state
//!
//! Two independent ordered lists with pure transitions. Every transition takes
//! `&self` and returns a new state, so a failed transition leaves the caller's
//! value untouched.
//!
//! # Examples
//!
//! ```
//! use intake::core::models::{Collection, EditorState, Field};
//!
//! let state = EditorState::new()
//!     .append(Collection::Contributors)
//!     .edit_field(Collection::Contributors, 0, Field::Name, "Ada")
//!     .unwrap();
//! assert_eq!(state.contributors()[0].name, "Ada");
//!
//! let state = state.remove_at(Collection::Contributors, 0).unwrap();
//! assert_eq!(state.len(Collection::Contributors), 0);
//! ```

use thiserror::Error;

use super::collection::{Collection, Field};
use super::record::{Contribution, Contributor};
use super::snapshot::Snapshot;

/// Errors from list editor transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EditorError {
    /// Position does not address an existing record
    #[error("position {position} is out of range for {collection} (length {len})")]
    OutOfRange {
        /// Collection that was addressed
        collection: Collection,
        /// Requested zero-based position
        position: usize,
        /// Current length of the collection
        len: usize,
    },

    /// Field does not exist on records of the collection
    #[error("field '{field}' does not belong to {collection}")]
    FieldMismatch {
        /// Collection that was addressed
        collection: Collection,
        /// Requested field
        field: Field,
    },
}

/// In-memory state of both lists
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorState {
    contributions: Vec<Contribution>,
    contributors: Vec<Contributor>,
}

impl EditorState {
    /// Create an empty state
    #[must_use]
    pub const fn new() -> Self {
        Self {
            contributions: Vec::new(),
            contributors: Vec::new(),
        }
    }

    /// Build a state from a persisted snapshot
    #[must_use]
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            contributions: snapshot.contributions,
            contributors: snapshot.contributors,
        }
    }

    /// Copy the current lists into a snapshot
    #[must_use]
    pub fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            contributions: self.contributions.clone(),
            contributors: self.contributors.clone(),
        }
    }

    /// Contributions in order
    #[must_use]
    pub fn contributions(&self) -> &[Contribution] {
        &self.contributions
    }

    /// Contributors in order
    #[must_use]
    pub fn contributors(&self) -> &[Contributor] {
        &self.contributors
    }

    /// Number of records in a collection
    #[must_use]
    pub fn len(&self, collection: Collection) -> usize {
        match collection {
            Collection::Contributions => self.contributions.len(),
            Collection::Contributors => self.contributors.len(),
        }
    }

    /// True when both collections are empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contributions.is_empty() && self.contributors.is_empty()
    }

    /// Append one empty record to the end of a collection
    #[must_use]
    pub fn append(&self, collection: Collection) -> Self {
        let mut next = self.clone();
        match collection {
            Collection::Contributions => next.contributions.push(Contribution::default()),
            Collection::Contributors => next.contributors.push(Contributor::default()),
        }
        next
    }

    /// Replace one field of the record at `position`
    ///
    /// All other records, and all other fields of the target record, are
    /// left as they were.
    pub fn edit_field(
        &self,
        collection: Collection,
        position: usize,
        field: Field,
        value: impl Into<String>,
    ) -> Result<Self, EditorError> {
        if field.collection() != collection {
            return Err(EditorError::FieldMismatch { collection, field });
        }
        self.check_position(collection, position)?;

        let mut next = self.clone();
        let slot = match collection {
            Collection::Contributions => next
                .contributions
                .get_mut(position)
                .map(|c| &mut c.description),
            Collection::Contributors => next
                .contributors
                .get_mut(position)
                .and_then(|c| c.slot_mut(field)),
        };
        if let Some(slot) = slot {
            *slot = value.into();
        }
        Ok(next)
    }

    /// Remove the record at `position`, shifting later records down by one
    pub fn remove_at(&self, collection: Collection, position: usize) -> Result<Self, EditorError> {
        self.check_position(collection, position)?;

        let mut next = self.clone();
        match collection {
            Collection::Contributions => {
                next.contributions.remove(position);
            },
            Collection::Contributors => {
                next.contributors.remove(position);
            },
        }
        Ok(next)
    }

    fn check_position(&self, collection: Collection, position: usize) -> Result<(), EditorError> {
        let len = self.len(collection);
        if position >= len {
            return Err(EditorError::OutOfRange {
                collection,
                position,
                len,
            });
        }
        Ok(())
    }
}
