/**
 * Application State Management
 *
 * The `AppState` struct is the central state container handed to every
 * handler. It holds one `Arc` per state-owning component; cloning the state
 * (as Axum does per request) only bumps reference counts.
 *
 * # Thread Safety
 *
 * The shared tables (sessions, documents, active users) are synchronized
 * inside their owning components, so handlers can run concurrently on the
 * multi-threaded runtime without any external locking.
 */
use std::sync::Arc;

use crate::backend::auth::SessionAuthority;
use crate::backend::documents::DocumentStore;
use crate::backend::llm::LlmProxyClient;
use crate::backend::presence::ActiveUserRegistry;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Session table owner: token issue/validate/revoke
    pub sessions: Arc<SessionAuthority>,
    /// Document collection owner
    pub documents: Arc<DocumentStore>,
    /// Active-user set owner
    pub active_users: Arc<ActiveUserRegistry>,
    /// Downstream LLM proxy
    pub llm: Arc<LlmProxyClient>,
}
