/**
 * LLM Proxy Client
 *
 * HTTP client for the downstream answering service. Exposes a single
 * `Answer(request_id, query, context) -> text` operation reached at
 * `POST {base}/answer` with a JSON body.
 *
 * # Degraded mode
 *
 * `wait_until_ready` probes the service a bounded number of times at
 * startup. If every attempt fails the client is still usable; queries keep
 * failing with a classified error until the service becomes reachable, and
 * all non-LLM operations are unaffected.
 *
 * # Per-query behavior
 *
 * Each incoming query results in at most one downstream call, carrying a
 * fresh correlation id, the verbatim query text, and a fixed context
 * string, bounded by the configured timeout.
 */
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

use crate::backend::error::LlmError;

/// Fixed context string sent with every forwarded query
pub const QUERY_CONTEXT: &str = "Document collaboration system";

/// Path of the downstream answer operation
const ANSWER_PATH: &str = "/answer";

/// Timeout for a single startup probe attempt
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Downstream request body
#[derive(Debug, Serialize)]
struct AnswerRequest<'a> {
    request_id: String,
    query: &'a str,
    context: &'a str,
}

/// Downstream response body
#[derive(Debug, Deserialize)]
struct AnswerResponse {
    answer: String,
}

/// Client for the downstream answering service
pub struct LlmProxyClient {
    http: reqwest::Client,
    base_url: String,
    query_timeout: Duration,
}

impl LlmProxyClient {
    /// Create a client for the service at `base_url`
    ///
    /// `query_timeout` bounds each forwarded query; the startup probe uses
    /// its own, shorter timeout.
    pub fn new(base_url: impl Into<String>, query_timeout: Duration) -> Self {
        let base_url = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            query_timeout,
        }
    }

    /// Probe the downstream service until it answers or attempts run out
    ///
    /// Issues up to `attempts` probe calls, sleeping `delay` between
    /// failures and stopping on the first success. Returns whether the
    /// service answered. Exhaustion is logged and the server continues in
    /// degraded mode; with `attempts == 0` the probe is skipped entirely.
    pub async fn wait_until_ready(&self, attempts: u32, delay: Duration) -> bool {
        if attempts == 0 {
            return false;
        }
        for attempt in 1..=attempts {
            match self.probe().await {
                Ok(()) => {
                    tracing::info!("Connected to LLM server at {}", self.base_url);
                    return true;
                }
                Err(e) => {
                    if attempt < attempts {
                        tracing::warn!(
                            "LLM server not ready ({}), retrying in {}s (attempt {}/{})",
                            e,
                            delay.as_secs(),
                            attempt,
                            attempts
                        );
                        tokio::time::sleep(delay).await;
                    }
                }
            }
        }
        tracing::warn!(
            "Could not connect to LLM server at {}; LLM queries will fail until it becomes reachable",
            self.base_url
        );
        false
    }

    /// Forward a query downstream and return the answer text
    ///
    /// Issues exactly one downstream call with a fresh correlation id. Any
    /// failure is classified into a [`LlmError`] with a distinct diagnostic.
    pub async fn answer(&self, query: &str) -> Result<String, LlmError> {
        let request = AnswerRequest {
            request_id: Uuid::new_v4().to_string(),
            query,
            context: QUERY_CONTEXT,
        };

        let response = self
            .http
            .post(self.answer_url())
            .json(&request)
            .timeout(self.query_timeout)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        if !response.status().is_success() {
            return Err(LlmError::Application(format!(
                "downstream returned {}",
                response.status()
            )));
        }

        let body: AnswerResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Application(format!("invalid response body: {}", e)))?;
        Ok(body.answer)
    }

    /// One probe call with the short probe timeout
    ///
    /// Any HTTP response counts as reachable; only transport failures mean
    /// the service is not ready.
    async fn probe(&self) -> Result<(), reqwest::Error> {
        let request = AnswerRequest {
            request_id: "probe".to_string(),
            query: "test connection",
            context: "test",
        };
        self.http
            .post(self.answer_url())
            .json(&request)
            .timeout(PROBE_TIMEOUT)
            .send()
            .await?;
        Ok(())
    }

    fn answer_url(&self) -> String {
        format!("{}{}", self.base_url, ANSWER_PATH)
    }

    /// Map an HTTP client error onto the failure taxonomy
    fn classify(&self, error: reqwest::Error) -> LlmError {
        if error.is_timeout() {
            LlmError::Timeout(self.query_timeout.as_secs())
        } else if error.is_connect() {
            LlmError::Unreachable
        } else {
            LlmError::Application(error.to_string())
        }
    }
}
