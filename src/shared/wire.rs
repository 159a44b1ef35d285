/**
 * RPC Wire Types
 *
 * This module defines the request and response types for the four RPC
 * operations exposed by the server: Login, Logout, Post, and Get.
 *
 * Every response carries a flat `SUCCESS`/`FAILURE` status. Business
 * failures (bad credentials, invalid tokens, malformed payloads, downstream
 * outages) are reported through this status and never as transport-level
 * errors.
 */
use serde::{Deserialize, Serialize};

/// Delimiter separating the document id from the new content in an
/// `update` payload. The payload is split on the FIRST occurrence only,
/// so content may itself contain the delimiter.
pub const UPDATE_DELIMITER: char = '|';

/// Flat request outcome reported to callers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Status {
    #[serde(rename = "SUCCESS")]
    Success,
    #[serde(rename = "FAILURE")]
    Failure,
}

/// Login request
///
/// Credentials are compared by exact match against the server's fixed
/// credential set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response
///
/// `token` is empty when `status` is `FAILURE`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub status: Status,
    /// Opaque session token to present on subsequent requests
    pub token: String,
}

/// Logout request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutRequest {
    pub token: String,
}

/// Generic status/message response, used by Logout and Post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: Status,
    pub message: String,
}

/// Post request
///
/// `kind` selects the mutation:
/// - `"document"` - create a new document from `data`
/// - `"update"` - `data` is `<id>|<new content>`, split on the first `|`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostRequest {
    pub token: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub data: String,
}

/// Get request
///
/// `kind` selects the query: `"documents"`, `"active_users"`, or
/// `"llm_query"` (with the query text in `params`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetRequest {
    pub token: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub params: String,
}

/// One item of a Get response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DataItem {
    pub id: String,
    pub data: String,
}

/// Get response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetResponse {
    pub status: Status,
    pub items: Vec<DataItem>,
}
