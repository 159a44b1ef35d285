/**
 * Server Initialization
 *
 * Assembles the application: constructs the state-owning components, runs
 * the bounded startup probe against the downstream LLM service, and wires
 * up the router.
 *
 * # Degraded startup
 *
 * The LLM service is a best-effort dependency. If the probe exhausts its
 * attempts the server still starts and serves all non-LLM operations; LLM
 * queries fail with a classified error until the service becomes reachable.
 */
use axum::Router;
use std::sync::Arc;

use crate::backend::auth::SessionAuthority;
use crate::backend::documents::DocumentStore;
use crate::backend::llm::LlmProxyClient;
use crate::backend::presence::ActiveUserRegistry;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// Builds the session authority, document store, active-user registry, and
/// LLM proxy, probes the downstream service, and returns the configured
/// router. Probe exhaustion is logged, not fatal.
pub async fn create_app(config: &ServerConfig) -> Router<()> {
    tracing::info!("Initializing application server");

    let sessions = Arc::new(SessionAuthority::new());
    let documents = Arc::new(DocumentStore::new());
    let active_users = Arc::new(ActiveUserRegistry::new());
    let llm = Arc::new(LlmProxyClient::new(
        config.llm_base_url.clone(),
        config.llm_query_timeout,
    ));

    tracing::info!("Connecting to LLM server at {}...", config.llm_base_url);
    llm.wait_until_ready(config.llm_probe_attempts, config.llm_probe_delay)
        .await;

    let app_state = AppState {
        sessions,
        documents,
        active_users,
        llm,
    };

    create_router(app_state)
}
