//! Facade Module
//!
//! The single entry point for all request types. Each handler validates the
//! session token first (except Login), then delegates to the component that
//! owns the relevant state, and assembles the response. Handlers never
//! touch the shared tables directly.

/// RPC operation handlers
pub mod handlers;

/// Re-export commonly used handlers
pub use handlers::{handle_get, handle_login, handle_logout, handle_post};
