//! Authentication Module
//!
//! This module owns the session table: issuing opaque tokens against the
//! fixed credential set, validating them, and revoking them on logout.
//!
//! # Authentication Flow
//!
//! 1. **Login**: Credentials verified by exact match → fresh token recorded
//!    and returned
//! 2. **Validate**: Token looked up → owning username returned, no side
//!    effects
//! 3. **Logout**: Token removed → username returned so the caller can also
//!    clear presence
//!
//! # Security
//!
//! Credentials are a fixed in-memory table compared by exact match; tokens
//! are UUID v4, so collision with any other live token is negligible and
//! concurrent logins never receive the same token.

/// Session issuing, validation, and revocation
pub mod sessions;

/// Re-export commonly used types
pub use sessions::{Credential, Session, SessionAuthority};
