//! Key-value store implementations
//!
//! - `memory` - `HashMap` backed, for tests and embedding
//! - `file` - JSON file on disk, the CLI default

mod file;
mod memory;

pub use file::{FileStore, STORE_FILE};
pub use memory::MemoryStore;
