//! bookshelf-core: Domain types for the Bookshelf API
//!
//! This crate defines the records held by the two resource collections:
//!
//! - [`Note`]: a free-form titled text record with tags
//! - [`Book`]: a catalog record tracking reading progress and a derived
//!   completion flag
//!
//! plus the draft types ([`NoteDraft`], [`BookDraft`]) that carry the
//! caller-supplied fields of create and update requests.
//!
//! All types serialize to the camelCase wire format used by the HTTP API.

pub mod types;

pub use types::{Book, BookDraft, BookId, Note, NoteDraft, NoteId};
