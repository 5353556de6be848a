//! # pondplan store
//!
//! Persistence for named pond configurations.
//!
//! The core hands a [`SavedPond`] snapshot to a [`PondStore`] and receives
//! one back; no core logic depends on the storage format. Two
//! implementations are provided:
//!
//! - [`JsonFileStore`] — one pretty-printed JSON file per configuration
//! - [`MemoryStore`] — for testing

mod error;
mod file;
mod memory;
mod saved;
mod store;

pub use error::{StoreError, StoreResult};
pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use saved::{PondSummary, SavedPond};
pub use store::{sanitize_name, PondStore};
