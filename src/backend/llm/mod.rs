//! LLM Proxy Module
//!
//! Client for the downstream answering service. The service is a
//! best-effort dependency: the server probes it at startup with a bounded
//! retry loop, keeps running if it never becomes reachable, and bounds each
//! forwarded query with a timeout. Downstream failures are classified and
//! reported to the facade as structured errors, never raised as transport
//! faults.

/// Downstream HTTP client and startup probe
pub mod client;

/// Re-export commonly used types
pub use client::{LlmProxyClient, QUERY_CONTEXT};
