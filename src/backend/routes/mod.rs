//! Routes Module
//!
//! HTTP route configuration for the backend.

/// Router assembly
pub mod router;

/// Re-export commonly used functions
pub use router::create_router;
