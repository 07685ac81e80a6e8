//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `storage/` - key-value stores (memory, JSON file)
//! - `groq` - chat-completion report generator (`llm` feature)

#[cfg(feature = "llm")]
pub mod groq;
pub mod storage;
