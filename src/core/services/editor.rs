//! Editor session
//!
//! Holds the current [`EditorState`], applies actions to it, persists it
//! through a [`SnapshotRepository`], and tells subscribed observers about
//! every change. Rendering lives entirely in observers.

use log::debug;

use super::repository::{PersistenceError, SnapshotRepository};
use crate::core::models::{Collection, EditorError, EditorState, Field};
use crate::core::ports::KeyValueStore;

/// A user-triggered change to the lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Add an empty record at the end
    Append(Collection),
    /// Replace one field of one record
    Edit {
        /// Target collection
        collection: Collection,
        /// Zero-based position
        position: usize,
        /// Field to replace
        field: Field,
        /// New value
        value: String,
    },
    /// Delete one record
    Remove {
        /// Target collection
        collection: Collection,
        /// Zero-based position
        position: usize,
    },
}

/// Receives the new state after each change
pub trait StateObserver {
    /// Called once per successful change
    fn state_changed(&mut self, state: &EditorState);
}

/// Current state plus its persistence
pub struct Editor<S> {
    state: EditorState,
    repository: SnapshotRepository<S>,
    observers: Vec<Box<dyn StateObserver>>,
}

impl<S: std::fmt::Debug> std::fmt::Debug for Editor<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Editor")
            .field("state", &self.state)
            .field("repository", &self.repository)
            .field("observers", &format!("<{} observers>", self.observers.len()))
            .finish()
    }
}

impl<S: KeyValueStore> Editor<S> {
    /// Start with an empty state
    pub const fn new(repository: SnapshotRepository<S>) -> Self {
        Self {
            state: EditorState::new(),
            repository,
            observers: Vec::new(),
        }
    }

    /// Start from whatever the repository holds
    pub fn open(repository: SnapshotRepository<S>) -> Result<Self, PersistenceError> {
        let snapshot = repository.load()?;
        Ok(Self {
            state: EditorState::from_snapshot(snapshot),
            repository,
            observers: Vec::new(),
        })
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> &EditorState {
        &self.state
    }

    /// Underlying repository
    pub const fn repository(&self) -> &SnapshotRepository<S> {
        &self.repository
    }

    /// Register an observer
    pub fn subscribe(&mut self, observer: Box<dyn StateObserver>) {
        self.observers.push(observer);
    }

    /// Apply an action
    ///
    /// On error the state is unchanged and no observer is called.
    pub fn apply(&mut self, action: Action) -> Result<&EditorState, EditorError> {
        debug!("applying {action:?}");
        let next = match action {
            Action::Append(collection) => self.state.append(collection),
            Action::Edit {
                collection,
                position,
                field,
                value,
            } => self.state.edit_field(collection, position, field, value)?,
            Action::Remove {
                collection,
                position,
            } => self.state.remove_at(collection, position)?,
        };
        self.replace(next);
        Ok(&self.state)
    }

    /// Persist the current state
    pub fn save(&mut self) -> Result<(), PersistenceError> {
        self.repository.save(&self.state.to_snapshot())
    }

    /// Replace the current state with the stored snapshot
    pub fn load(&mut self) -> Result<&EditorState, PersistenceError> {
        let snapshot = self.repository.load()?;
        self.replace(EditorState::from_snapshot(snapshot));
        Ok(&self.state)
    }

    /// Discard the current state and its stored copy
    pub fn reset(&mut self) -> Result<(), PersistenceError> {
        self.repository.clear()?;
        self.replace(EditorState::new());
        Ok(())
    }

    /// Give back the repository
    pub fn into_repository(self) -> SnapshotRepository<S> {
        self.repository
    }

    fn replace(&mut self, next: EditorState) {
        self.state = next;
        for observer in &mut self.observers {
            observer.state_changed(&self.state);
        }
    }
}
