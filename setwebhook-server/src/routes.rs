//! `/set_webhook` registers `<base_url>/<token>` and relays Telegram's answer; `/healthz` reports liveness.

use std::sync::Arc;

use axum::extract::State;
use axum::http::header::{CONTENT_TYPE, HOST};
use axum::http::{HeaderMap, HeaderValue, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use setwebhook_core::{UpstreamResponse, WebhookRegistration, TOKEN_MISSING_MESSAGE};
use tracing::{error, info};

use crate::AppState;

pub const SET_WEBHOOK_PATH: &str = "/set_webhook";
pub const HEALTHZ_PATH: &str = "/healthz";

const FORWARDED_PROTO: &str = "x-forwarded-proto";
const FORWARDED_HOST: &str = "x-forwarded-host";

/// `GET /set_webhook`: registers `<base_url>/<token>` and relays Telegram's answer.
pub(crate) async fn set_webhook(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    uri: Uri,
) -> Response {
    let token = match state.config.token.as_deref() {
        Some(token) => token,
        None => return json_error(StatusCode::INTERNAL_SERVER_ERROR, TOKEN_MISSING_MESSAGE),
    };

    let base_url = match state.config.exposed_url.clone() {
        Some(exposed) => exposed,
        None => match request_base_url(&headers, &uri) {
            Some(base_url) => base_url,
            None => return json_error(StatusCode::BAD_REQUEST, "cannot determine request host"),
        },
    };

    let registration = match WebhookRegistration::new(token, base_url) {
        Ok(registration) => registration,
        Err(e) => return json_error(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string()),
    };

    info!(base_url = %registration.base_url(), "Registering webhook");
    match state.registrar.register(&registration).await {
        Ok(upstream) => relay(upstream),
        Err(e) => {
            error!(error = %e, "setWebhook request failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "ok": false, "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

/// `GET /healthz`
pub(crate) async fn healthz() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// `<scheme>://<host>` of the incoming request.
///
/// Scheme: first `X-Forwarded-Proto` value, else the URI scheme, else `http`.
/// Host: first `X-Forwarded-Host` value, else `Host`, else the URI authority.
pub fn request_base_url(headers: &HeaderMap, uri: &Uri) -> Option<String> {
    let scheme = first_header_value(headers, FORWARDED_PROTO)
        .or_else(|| uri.scheme_str().map(str::to_string))
        .unwrap_or_else(|| "http".to_string());

    let host = first_header_value(headers, FORWARDED_HOST)
        .or_else(|| first_header_value(headers, HOST.as_str()))
        .or_else(|| uri.authority().map(|a| a.to_string()))?;

    if host.contains('/') || host.chars().any(char::is_whitespace) {
        return None;
    }
    Some(format!("{}://{}", scheme.to_ascii_lowercase(), host))
}

fn first_header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)?
        .to_str()
        .ok()?
        .split(',')
        .next()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Same status, same body; content type echoed from Telegram.
fn relay(upstream: UpstreamResponse) -> Response {
    let status = StatusCode::from_u16(upstream.status).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = upstream
        .content_type
        .as_deref()
        .and_then(|ct| HeaderValue::from_str(ct).ok())
        .unwrap_or_else(|| HeaderValue::from_static("application/json"));
    (status, [(CONTENT_TYPE, content_type)], upstream.body).into_response()
}

fn json_error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}
