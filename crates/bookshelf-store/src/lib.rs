//! bookshelf-store: In-memory storage for the Bookshelf API
//!
//! This crate provides:
//! - A process-wide [`Store`] holding the notes and books collections
//! - [`BookFilter`] for the optional book listing filters
//! - Typed store errors
//!
//! # Architecture
//!
//! Both collections are insertion-ordered vectors guarded by `RwLock`;
//! there is no persistence and no indexing beyond linear scan by id. The
//! lock serializes each search-then-mutate sequence so concurrent requests
//! observe whole operations.
//!
//! # Usage
//!
//! ```rust
//! use bookshelf_core::NoteDraft;
//! use bookshelf_store::Store;
//!
//! let store = Store::new();
//! let note = store.add_note(NoteDraft::default()).unwrap();
//! assert_eq!(store.get_note(&note.id).unwrap().id, note.id);
//! ```

pub mod error;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use store::{BookFilter, Store};

// Re-export bookshelf-core for downstream crates
pub use bookshelf_core;
