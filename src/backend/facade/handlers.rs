/**
 * Collaboration Facade Handlers
 *
 * HTTP handlers for the four RPC operations. The facade is stateless: it
 * authenticates via the session authority, routes to the document store,
 * the active-user registry, or the LLM proxy, and assembles the response.
 *
 * Business failures (bad credentials, invalid tokens, malformed payloads,
 * unknown request types, downstream outages) always surface as a uniform
 * `FAILURE` status in a 200 response; they are never mapped onto HTTP error
 * codes or allowed to escape as transport faults.
 */
use axum::extract::State;
use axum::response::Json;

use crate::backend::server::state::AppState;
use crate::shared::wire::{
    DataItem, GetRequest, GetResponse, LoginRequest, LoginResponse, LogoutRequest, PostRequest,
    Status, StatusResponse, UPDATE_DELIMITER,
};

/// Login handler
///
/// Delegates to the session authority; on success the user is also marked
/// active. Failure yields an empty token.
pub async fn handle_login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Json<LoginResponse> {
    tracing::info!("Login attempt: {}", request.username);

    match state
        .sessions
        .authenticate(&request.username, &request.password)
        .await
    {
        Some(token) => {
            state.active_users.add(&request.username);
            Json(LoginResponse {
                status: Status::Success,
                token,
            })
        }
        None => Json(LoginResponse {
            status: Status::Failure,
            token: String::new(),
        }),
    }
}

/// Logout handler
///
/// Revocation and the success/failure decision are a single atomic step in
/// the session authority, so two concurrent logouts of the same token
/// cannot both report success. A stale or never-issued token yields
/// "Invalid token" without mutating any state.
pub async fn handle_logout(
    State(state): State<AppState>,
    Json(request): Json<LogoutRequest>,
) -> Json<StatusResponse> {
    tracing::info!("Logout request");

    match state.sessions.logout(&request.token).await {
        Some(username) => {
            state.active_users.remove(&username);
            Json(StatusResponse {
                status: Status::Success,
                message: "Logged out successfully".to_string(),
            })
        }
        None => Json(StatusResponse {
            status: Status::Failure,
            message: "Invalid token".to_string(),
        }),
    }
}

/// Post handler: document creation and updates
///
/// Validates the token before touching the store. An update payload is
/// `<id>|<content>`, split on the first delimiter; a payload without the
/// delimiter, an unknown id, or an unrecognized type is a failure with no
/// state change.
pub async fn handle_post(
    State(state): State<AppState>,
    Json(request): Json<PostRequest>,
) -> Json<StatusResponse> {
    tracing::info!("Post request: type={}", request.kind);

    let Some(username) = state.sessions.validate_token(&request.token).await else {
        return Json(StatusResponse {
            status: Status::Failure,
            message: "Invalid token".to_string(),
        });
    };

    match request.kind.as_str() {
        "document" => {
            let id = state.documents.create(&username, &request.data).await;
            Json(StatusResponse {
                status: Status::Success,
                message: format!("Document created with ID: {}", id),
            })
        }
        "update" => {
            if let Some((id, content)) = request.data.split_once(UPDATE_DELIMITER) {
                if state.documents.update(id, content, &username).await {
                    return Json(StatusResponse {
                        status: Status::Success,
                        message: "Document updated".to_string(),
                    });
                }
            }
            Json(StatusResponse {
                status: Status::Failure,
                message: "Invalid request".to_string(),
            })
        }
        _ => Json(StatusResponse {
            status: Status::Failure,
            message: "Invalid request".to_string(),
        }),
    }
}

/// Get handler: document listing, active users, and LLM queries
///
/// Validates the token first. LLM failures are converted into a `FAILURE`
/// response carrying a diagnostic `error` item; the other query types are
/// unaffected by downstream availability. An unrecognized type yields a
/// failure with an empty item list.
pub async fn handle_get(
    State(state): State<AppState>,
    Json(request): Json<GetRequest>,
) -> Json<GetResponse> {
    tracing::info!("Get request: type={}", request.kind);

    if state.sessions.validate_token(&request.token).await.is_none() {
        return Json(GetResponse {
            status: Status::Failure,
            items: Vec::new(),
        });
    }

    match request.kind.as_str() {
        "documents" => {
            let items = state
                .documents
                .list_all()
                .await
                .into_iter()
                .map(|doc| DataItem {
                    data: doc.summary(),
                    id: doc.id,
                })
                .collect();
            Json(GetResponse {
                status: Status::Success,
                items,
            })
        }
        "active_users" => {
            let items = state
                .active_users
                .list()
                .into_iter()
                .enumerate()
                .map(|(i, user)| DataItem {
                    id: i.to_string(),
                    data: user,
                })
                .collect();
            Json(GetResponse {
                status: Status::Success,
                items,
            })
        }
        "llm_query" => match state.llm.answer(&request.params).await {
            Ok(answer) => Json(GetResponse {
                status: Status::Success,
                items: vec![DataItem {
                    id: "llm_response".to_string(),
                    data: answer,
                }],
            }),
            Err(e) => {
                tracing::warn!("LLM query failed: {}", e);
                Json(GetResponse {
                    status: Status::Failure,
                    items: vec![DataItem {
                        id: "error".to_string(),
                        data: e.to_string(),
                    }],
                })
            }
        },
        _ => Json(GetResponse {
            status: Status::Failure,
            items: Vec::new(),
        }),
    }
}
