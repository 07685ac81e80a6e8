//! Command implementations

mod contribution;
mod contributor;
mod draft;
mod report;

pub use contribution::contribution;
pub use contributor::contributor;
pub use draft::{load, reset, save, status};
#[cfg(feature = "llm")]
pub use report::report;
pub use report::prompt;

use anyhow::Context;
use log::debug;

use intake::adapters::storage::FileStore;
use intake::config::IntakeConfig;
use intake::core::models::{Collection, EditorState};
use intake::core::services::{Editor, SnapshotRepository, StateObserver};

/// Key holding the unsaved draft
pub const DRAFT_KEY: &str = "intake.draft";

/// Resolved configuration and storage for one CLI invocation
#[derive(Debug)]
pub struct Workspace {
    config: IntakeConfig,
}

impl Workspace {
    pub const fn new(config: IntakeConfig) -> Self {
        Self { config }
    }

    #[cfg(feature = "llm")]
    pub const fn config(&self) -> &IntakeConfig {
        &self.config
    }

    fn store(&self) -> FileStore {
        self.config.storage.file_store()
    }

    /// Repository for the saved contributor analysis
    pub fn saved(&self) -> SnapshotRepository<FileStore> {
        SnapshotRepository::new(self.store())
    }

    /// Repository for the working draft, which carries no save time
    pub fn draft(&self) -> SnapshotRepository<FileStore> {
        SnapshotRepository::with_key(self.store(), DRAFT_KEY).without_saved_at()
    }

    /// Editor over the working draft, with change logging attached
    pub fn draft_editor(&self) -> anyhow::Result<Editor<FileStore>> {
        let mut editor = Editor::open(self.draft()).context("failed to open draft")?;
        editor.subscribe(Box::new(ChangeLog));
        Ok(editor)
    }
}

/// Logs list sizes after each change
struct ChangeLog;

impl StateObserver for ChangeLog {
    fn state_changed(&mut self, state: &EditorState) {
        debug!(
            "draft now has {} contribution(s), {} contributor(s)",
            state.len(Collection::Contributions),
            state.len(Collection::Contributors)
        );
    }
}

/// Convert a 1-based number from the command line to a position
fn position(number: usize) -> anyhow::Result<usize> {
    number
        .checked_sub(1)
        .ok_or_else(|| anyhow::anyhow!("numbers start at 1"))
}
