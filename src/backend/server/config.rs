/**
 * Server Configuration
 *
 * Configuration is loaded from environment variables with sensible
 * defaults for local development. Invalid values are logged and replaced
 * by their defaults; configuration problems never prevent startup.
 */
use std::time::Duration;

/// Default listening port for the RPC surface
const DEFAULT_PORT: u16 = 50051;

/// Default base URL of the downstream LLM service
const DEFAULT_LLM_URL: &str = "http://127.0.0.1:50052";

/// Runtime configuration for the server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// TCP port the server listens on (`SERVER_PORT`)
    pub port: u16,
    /// Base URL of the downstream LLM service (`LLM_SERVER_URL`)
    pub llm_base_url: String,
    /// Startup probe attempts against the LLM service (`LLM_PROBE_ATTEMPTS`)
    pub llm_probe_attempts: u32,
    /// Delay between probe attempts (`LLM_PROBE_DELAY_SECS`)
    pub llm_probe_delay: Duration,
    /// Per-query timeout for forwarded LLM calls (`LLM_QUERY_TIMEOUT_SECS`)
    pub llm_query_timeout: Duration,
}

impl ServerConfig {
    /// Load configuration from the environment
    pub fn from_env() -> Self {
        Self {
            port: env_parsed("SERVER_PORT", DEFAULT_PORT),
            llm_base_url: std::env::var("LLM_SERVER_URL")
                .unwrap_or_else(|_| DEFAULT_LLM_URL.to_string()),
            llm_probe_attempts: env_parsed("LLM_PROBE_ATTEMPTS", 5),
            llm_probe_delay: Duration::from_secs(env_parsed("LLM_PROBE_DELAY_SECS", 2)),
            llm_query_timeout: Duration::from_secs(env_parsed("LLM_QUERY_TIMEOUT_SECS", 10)),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            llm_base_url: DEFAULT_LLM_URL.to_string(),
            llm_probe_attempts: 5,
            llm_probe_delay: Duration::from_secs(2),
            llm_query_timeout: Duration::from_secs(10),
        }
    }
}

/// Read an environment variable and parse it, falling back to `default`
fn env_parsed<T: std::str::FromStr + std::fmt::Display>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid {}={:?}, using default {}", name, raw, default);
            default
        }),
        Err(_) => default,
    }
}
