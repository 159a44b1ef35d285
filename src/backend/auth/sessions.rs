/**
 * Session Management
 *
 * This module implements the session authority: it authenticates users
 * against a fixed credential set and manages the table of live session
 * tokens.
 *
 * # Concurrency
 *
 * The session table is read and mutated by many concurrently running
 * handlers. All access goes through a `tokio::sync::RwLock`, so each
 * operation is atomic: no reader observes a session mid-insertion or
 * mid-removal, and two concurrent logouts of the same token cannot both
 * succeed.
 */
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// A known (username, password) pair
#[derive(Debug, Clone)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

impl Credential {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// A live authenticated session
#[derive(Debug, Clone)]
pub struct Session {
    /// Opaque session token (UUID v4)
    pub token: String,
    /// Username that owns this session
    pub username: String,
    /// When the session was created
    pub created_at: DateTime<Utc>,
}

/// Issues, validates, and revokes session tokens
///
/// The credential set is fixed at construction. Sessions live until logout;
/// there is no expiry mechanism.
pub struct SessionAuthority {
    credentials: Vec<Credential>,
    sessions: RwLock<HashMap<String, Session>>,
}

impl SessionAuthority {
    /// Create an authority with the default demo credential set
    pub fn new() -> Self {
        Self::with_credentials(vec![
            Credential::new("admin", "admin123"),
            Credential::new("alice", "alice123"),
            Credential::new("bob", "bob123"),
        ])
    }

    /// Create an authority with an explicit credential set
    pub fn with_credentials(credentials: Vec<Credential>) -> Self {
        Self {
            credentials,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Authenticate a user and issue a fresh session token
    ///
    /// Returns `None` if the pair does not exactly match a known credential.
    /// On success the session is recorded before the token is returned, so a
    /// returned token always validates.
    pub async fn authenticate(&self, username: &str, password: &str) -> Option<String> {
        let known = self
            .credentials
            .iter()
            .any(|c| c.username == username && c.password == password);
        if !known {
            tracing::warn!("Authentication failed for user: {}", username);
            return None;
        }

        let token = Uuid::new_v4().to_string();
        let session = Session {
            token: token.clone(),
            username: username.to_string(),
            created_at: Utc::now(),
        };

        let mut sessions = self.sessions.write().await;
        sessions.insert(token.clone(), session);
        tracing::info!("Session created for user: {}", username);
        Some(token)
    }

    /// Look up the username owning a token
    ///
    /// Returns `None` for tokens that were never issued or were revoked.
    /// Has no side effects.
    pub async fn validate_token(&self, token: &str) -> Option<String> {
        let sessions = self.sessions.read().await;
        sessions.get(token).map(|s| s.username.clone())
    }

    /// Revoke a session, returning the username it belonged to
    ///
    /// Removal is atomic: when two callers race on the same token, exactly
    /// one receives `Some`. Revoking an absent token returns `None`.
    pub async fn logout(&self, token: &str) -> Option<String> {
        let mut sessions = self.sessions.write().await;
        sessions.remove(token).map(|s| {
            tracing::info!("Session ended for user: {}", s.username);
            s.username
        })
    }

    /// Number of live sessions
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

impl Default for SessionAuthority {
    fn default() -> Self {
        Self::new()
    }
}
