//! Wire DTOs for the auth backend.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Form-only state (the
//! signup terms checkbox) lives in `pages` and never reaches these types.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST /api/auth/login`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/auth/signup`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

/// An authenticated user as returned by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    /// Backend document identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name entered at signup.
    pub full_name: String,
    pub email: String,
    /// Avatar image URL, if the backend assigned one.
    #[serde(default)]
    pub profile_pic: Option<String>,
    /// Whether the user finished onboarding after signup.
    #[serde(default)]
    pub is_onboarded: bool,
}

/// Success envelope shared by login, signup and `me`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub success: bool,
    pub user: AuthUser,
}

/// Error envelope the backend sends with non-2xx responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
