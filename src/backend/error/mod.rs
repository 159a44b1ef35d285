//! Backend Error Module
//!
//! Error types for the backend server. Request-level failures (bad
//! credentials, invalid tokens, malformed payloads) are resolved inside the
//! facade as uniform `FAILURE` responses, so the only structured error type
//! here is the downstream LLM failure classification.

use thiserror::Error;

/// Failure classification for downstream LLM calls
///
/// Each variant carries a distinct, human-readable diagnostic. The facade
/// renders the diagnostic into a `FAILURE` response item; the error is
/// never surfaced as a transport fault.
#[derive(Debug, Error)]
pub enum LlmError {
    /// The downstream service could not be reached at all
    #[error("LLM server is not running. Please start it first.")]
    Unreachable,

    /// The downstream call exceeded the per-query timeout
    #[error("LLM query timed out after {0} seconds")]
    Timeout(u64),

    /// The downstream service answered, but with an application error
    #[error("LLM error: {0}")]
    Application(String),
}
