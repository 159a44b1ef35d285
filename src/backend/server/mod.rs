//! Server Module
//!
//! Server initialization, application state, and configuration.

/// Environment-based configuration
pub mod config;

/// Application assembly
pub mod init;

/// Shared application state
pub mod state;

/// Re-export commonly used types
pub use config::ServerConfig;
pub use init::create_app;
pub use state::AppState;
