//! Documents Module
//!
//! This module owns the in-memory document collection. Documents are created
//! with version 1, mutated only by updates (which bump the version by
//! exactly 1), and never deleted. All state is volatile; durability across
//! restarts is out of scope.

/// Document records and the owning store
pub mod store;

/// Re-export commonly used types
pub use store::{Document, DocumentStore};
