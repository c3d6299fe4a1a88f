//! `/api/*` reverse proxy to the upstream auth backend.
//!
//! ERROR HANDLING
//! ==============
//! Upstream responses (including 4xx/5xx) are relayed untouched so the
//! backend's `{"message": ...}` bodies reach the browser. Only transport
//! failures are answered locally, with the same JSON envelope.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::Json;
use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

pub const UPSTREAM_UNAVAILABLE_MESSAGE: &str = "Auth service is unavailable. Please try again later.";

const FORWARDED_REQUEST_HEADERS: [HeaderName; 4] =
    [header::ACCEPT, header::AUTHORIZATION, header::CONTENT_TYPE, header::COOKIE];
const RELAYED_RESPONSE_HEADERS: [HeaderName; 4] =
    [header::CACHE_CONTROL, header::CONTENT_TYPE, header::LOCATION, header::SET_COOKIE];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "auth proxy failed");
        let status = match &self {
            Self::Upstream(e) if e.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        };
        (status, Json(serde_json::json!({ "message": UPSTREAM_UNAVAILABLE_MESSAGE }))).into_response()
    }
}

/// Join the upstream base URL with the incoming path and query.
pub(crate) fn upstream_url(base: &str, path_and_query: &str) -> String {
    format!("{}{path_and_query}", base.trim_end_matches('/'))
}

fn copy_headers(source: &HeaderMap, names: &[HeaderName]) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in names {
        for value in source.get_all(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

/// Headers the backend needs to see: body type and session cookie.
pub(crate) fn forwarded_request_headers(incoming: &HeaderMap) -> HeaderMap {
    copy_headers(incoming, &FORWARDED_REQUEST_HEADERS)
}

/// Headers relayed to the browser; `set-cookie` carries the session and
/// `location` the target of upstream redirects, which are never followed.
pub(crate) fn relayed_response_headers(upstream: &HeaderMap) -> HeaderMap {
    copy_headers(upstream, &RELAYED_RESPONSE_HEADERS)
}

/// `ANY /api/{*path}` — forward the request to `AUTH_API_URL`.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let path_and_query = uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str());
    let url = upstream_url(&state.auth_api_url, path_and_query);

    let upstream = state
        .http
        .request(method.clone(), &url)
        .headers(forwarded_request_headers(&headers))
        .body(body)
        .send()
        .await?;

    let status = upstream.status();
    let response_headers = relayed_response_headers(upstream.headers());
    let bytes = upstream.bytes().await?;
    tracing::debug!(%method, %url, status = status.as_u16(), "proxied auth request");

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = response_headers;
    Ok(response)
}
