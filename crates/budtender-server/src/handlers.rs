//! The recommendation endpoint.
//!
//! Per-request state machine, terminal on first exit:
//! received → validated → gateway called → interpreted / relayed error.
//! Nothing persists across requests; concurrent requests are independent.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderName, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Serialize;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info, warn};

use budtender_core::{
    chat::ChatMessage,
    error::RecommendError,
    interpret::{interpret, suggest_products_spec},
    provider::{CompletionBackend, CompletionParams},
    recommend::{RecommendationRequest, RecommendationResponse, RequestKind},
};
use budtender_prompt::composer::compose_system_prompt;

/// Shared, immutable per-process state. `backend` is `None` when the
/// gateway credential is missing; every request then reports the
/// configuration fault.
pub struct AppState<B> {
    pub backend: Option<Arc<B>>,
}

impl<B> Clone for AppState<B> {
    fn clone(&self) -> Self {
        Self {
            backend: self.backend.clone(),
        }
    }
}

/// Error envelope crossing the system boundary. Never carries upstream
/// bodies or internal error chains.
#[derive(Debug, Serialize)]
struct ErrorEnvelope {
    error: String,
}

/// Build the application router: the recommendation route plus permissive
/// CORS for the browser clients (preflight is answered by the layer with no
/// body).
pub fn router<B>(state: AppState<B>) -> Router
where
    B: CompletionBackend + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            header::CONTENT_TYPE,
        ]);

    Router::new()
        .route("/recommendations", post(recommend::<B>))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn recommend<B>(
    State(state): State<AppState<B>>,
    payload: Result<Json<RecommendationRequest>, JsonRejection>,
) -> Response
where
    B: CompletionBackend + 'static,
{
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            // A body we cannot parse cannot carry a usable `userInput`;
            // report the same fixed envelope as a missing field. The parse
            // detail stays in the logs.
            warn!(error = %rejection, "rejecting malformed request body");
            return error_response(
                StatusCode::BAD_REQUEST,
                RecommendError::InvalidInput.to_string(),
            );
        }
    };

    match handle(&state, request).await {
        Ok(envelope) => (StatusCode::OK, Json(envelope)).into_response(),
        Err(err) => {
            error!(error = %err, "recommendation request failed");
            let status = StatusCode::from_u16(err.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            error_response(status, err.to_string())
        }
    }
}

async fn handle<B>(
    state: &AppState<B>,
    request: RecommendationRequest,
) -> Result<RecommendationResponse, RecommendError>
where
    B: CompletionBackend,
{
    let kind = request.into_kind()?;
    info!(input = kind.user_input(), "processing recommendation request");

    let backend = state
        .backend
        .as_ref()
        .ok_or(RecommendError::MissingCredential)?;

    let tool_requested = matches!(kind, RequestKind::Conversational { .. });
    let messages = vec![
        ChatMessage::system(compose_system_prompt(&kind)),
        ChatMessage::user(kind.user_input()),
    ];

    let mut params = CompletionParams::new(messages);
    if tool_requested {
        params = params.with_tool(suggest_products_spec());
    }

    let reply = backend.complete(params).await?;
    info!("completion succeeded");

    let envelope = interpret(reply, tool_requested);
    if let Some(products) = &envelope.products {
        info!(count = products.len(), "extracted product suggestions");
    }

    Ok(envelope)
}

fn error_response(status: StatusCode, message: String) -> Response {
    let message = if message.is_empty() {
        "Unknown error".to_string()
    } else {
        message
    };
    (status, Json(ErrorEnvelope { error: message })).into_response()
}
