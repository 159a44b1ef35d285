//! CollabDocs — a small collaborative document backend.
//!
//! The crate exposes a JSON-over-HTTP RPC surface for user authentication,
//! document creation/editing, active-user tracking, and forwarding free-text
//! queries to a downstream answering service.
//!
//! # Overview
//!
//! - **`backend`** - The Axum server: state-owning components, request
//!   handlers, routing, and configuration.
//! - **`shared`** - Wire-level request/response types shared with clients.

pub mod backend;
pub mod shared;
