use crate::core::contact::ContactHandler;
use crate::core::{ConfigProvider, ContactPayload, ContactReply, EmailSender};
use crate::utils::error::MSG_MESSAGE_TOO_LONG;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{any, get},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub const CONTACT_PATH: &str = "/api/contact";

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Accepts every method so the handler, not the router, answers non-POST
/// requests with the JSON 405 body.
async fn contact<S, C>(
    State(handler): State<Arc<ContactHandler<S, C>>>,
    method: Method,
    body: Result<Bytes, BytesRejection>,
) -> Response
where
    S: EmailSender + 'static,
    C: ConfigProvider + 'static,
{
    let payload = match body {
        Ok(bytes) => ContactPayload::from_bytes(&bytes),
        // Over the router's body limit: far past the message limit as well
        Err(rejection)
            if method == Method::POST && rejection.status() == StatusCode::PAYLOAD_TOO_LARGE =>
        {
            tracing::info!("Contact submission rejected: {}", rejection.body_text());
            return ContactReply::rejected(400, MSG_MESSAGE_TOO_LONG).into_response();
        }
        Err(rejection) => {
            tracing::debug!("Unreadable request body: {}", rejection.body_text());
            ContactPayload::Empty
        }
    };

    handler
        .handle(method.as_str(), payload)
        .await
        .into_response()
}

impl IntoResponse for ContactReply {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.body)).into_response()
    }
}

pub fn router<S, C>(handler: Arc<ContactHandler<S, C>>) -> Router
where
    S: EmailSender + 'static,
    C: ConfigProvider + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route(CONTACT_PATH, any(contact::<S, C>))
        .with_state(handler)
        .layer(TraceLayer::new_for_http())
}
