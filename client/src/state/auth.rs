//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and the login/signup hooks to coordinate redirects
//! and identity-dependent rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use super::mutation::{Mutation, use_auth_mutation};
use crate::net::api;
use crate::net::types::{AuthUser, LoginRequest, SignupRequest};

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<AuthUser>,
    /// True until the initial `/api/auth/me` lookup settles.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    /// Record the outcome of a session lookup or a successful login/signup.
    pub fn settle(&mut self, user: Option<AuthUser>) {
        self.user = user;
        self.loading = false;
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Login hook: posts credentials and stores the returned user on success.
pub fn use_login() -> Mutation<LoginRequest> {
    use_auth_mutation(|req: LoginRequest| async move { api::login(&req).await })
}

/// Signup hook: posts registration data and stores the new user on success.
pub fn use_sign_up() -> Mutation<SignupRequest> {
    use_auth_mutation(|req: SignupRequest| async move { api::sign_up(&req).await })
}

/// Populate `auth` from `/api/auth/me` once, in the browser.
pub fn load_current_user(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = api::fetch_current_user().await;
        log::debug!("session lookup settled: authenticated={}", user.is_some());
        auth.update(|a| a.settle(user));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }
}
