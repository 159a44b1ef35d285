//! Backend Module
//!
//! This module contains all server-side code for the CollabDocs application.
//! It provides an Axum HTTP server exposing four RPC-style operations
//! (Login, Logout, Post, Get) over JSON bodies.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`facade`** - Request handlers: authentication check and routing to
//!   the owning component
//! - **`auth`** - Session issuing, validation, and revocation
//! - **`documents`** - Document collection with per-document versioning
//! - **`presence`** - Active-user registry
//! - **`llm`** - Proxy client for the downstream answering service
//! - **`error`** - Backend error types
//!
//! # State Management
//!
//! Each mutable table (sessions, documents, active users) is owned by
//! exactly one component and is only mutated through that component's
//! operations. Components synchronize internally, so every logical
//! operation is atomic with respect to concurrent handlers.
//!
//! # Error Handling
//!
//! Per-request failures are resolved inside the facade and reported as a
//! uniform `FAILURE` status with a human-readable message. Downstream
//! failures are caught at the LLM client boundary. The only fatal error is
//! failing to bind the listening socket.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Request handlers (the collaboration facade)
pub mod facade;

/// Session authority: token issue/validate/revoke
pub mod auth;

/// Document store
pub mod documents;

/// Active-user registry
pub mod presence;

/// Downstream LLM proxy client
pub mod llm;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use auth::SessionAuthority;
pub use documents::DocumentStore;
pub use error::LlmError;
pub use llm::LlmProxyClient;
pub use presence::ActiveUserRegistry;
pub use server::init::create_app;
pub use server::state::AppState;
