//! REST helpers for the auth backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs, since forms only submit in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is classified into `ApiError` here so pages only ever
//! render `ApiError::user_message()`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{AuthUser, LoginRequest, SignupRequest};
#[cfg(any(test, feature = "hydrate"))]
use super::types::AuthResponse;

pub const LOGIN_ENDPOINT: &str = "/api/auth/login";
pub const SIGNUP_ENDPOINT: &str = "/api/auth/signup";
pub const ME_ENDPOINT: &str = "/api/auth/me";
pub const LOGOUT_ENDPOINT: &str = "/api/auth/logout";

#[cfg(not(feature = "hydrate"))]
const SERVER_UNAVAILABLE: &str = "not available on server";

/// Turn a finished response into the authenticated user or a classified error.
#[cfg(any(test, feature = "hydrate"))]
fn parse_auth_response(status: u16, body: &str) -> Result<AuthUser, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::from_status(status, body));
    }
    serde_json::from_str::<AuthResponse>(body)
        .map(|resp| resp.user)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn post_auth<T: serde::Serialize>(url: &str, payload: &T) -> Result<AuthUser, ApiError> {
    let resp = gloo_net::http::Request::post(url)
        .json(payload)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let status = resp.status();
    let body = resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))?;
    let result = parse_auth_response(status, &body);
    if let Err(e) = &result {
        log::warn!("{url} failed: {e}");
    }
    result
}

/// Sign in with email and password via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns `ApiError` if the request fails, the backend rejects the
/// credentials, or the response body is malformed.
pub async fn login(req: &LoginRequest) -> Result<AuthUser, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_auth(LOGIN_ENDPOINT, req).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err(ApiError::Network(SERVER_UNAVAILABLE.to_owned()))
    }
}

/// Create an account via `POST /api/auth/signup`.
///
/// # Errors
///
/// Returns `ApiError` if the request fails, the backend rejects the
/// registration, or the response body is malformed.
pub async fn sign_up(req: &SignupRequest) -> Result<AuthUser, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_auth(SIGNUP_ENDPOINT, req).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err(ApiError::Network(SERVER_UNAVAILABLE.to_owned()))
    }
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<AuthUser> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(ME_ENDPOINT).send().await.ok()?;
        let status = resp.status();
        let body = resp.text().await.ok()?;
        parse_auth_response(status, &body).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// End the session via `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = gloo_net::http::Request::post(LOGOUT_ENDPOINT).send().await {
            log::warn!("logout request failed: {e}");
        }
    }
}
