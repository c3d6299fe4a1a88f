//! Mutation hook shared by the login and signup forms.
//!
//! DESIGN
//! ======
//! `MutationState` is a plain struct with explicit `begin`/`settle`
//! transitions; `Mutation` wraps it in a signal and hands the request future
//! to a spawner (the browser task queue in `hydrate` builds). Pages read
//! `is_pending()`/`status()` and call `trigger()`, nothing else.

#[cfg(test)]
#[path = "mutation_test.rs"]
mod mutation_test;

use std::future::Future;
use std::pin::Pin;

use leptos::prelude::*;

use super::auth::AuthState;
use crate::net::error::ApiError;
use crate::net::types::AuthUser;

/// A request future waiting to be driven to completion on the UI thread.
pub type LocalTask = Pin<Box<dyn Future<Output = ()>>>;

/// Request lifecycle of a single form's submissions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MutationState {
    pub pending: bool,
    pub error: Option<ApiError>,
}

/// UI state derived from `MutationState`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MutationStatus {
    Idle,
    Pending,
    Failed(ApiError),
}

impl MutationStatus {
    /// Text for the form's error banner; `None` hides the banner.
    pub fn banner_text(&self) -> Option<String> {
        match self {
            Self::Failed(e) => Some(e.user_message()),
            Self::Idle | Self::Pending => None,
        }
    }
}

impl MutationState {
    /// Start a request. Clears the previous error.
    ///
    /// Returns `false` (and changes nothing) while a request is in flight.
    pub fn begin(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        self.error = None;
        true
    }

    /// Finish the in-flight request, handing back the user on success.
    pub fn settle(&mut self, result: Result<AuthUser, ApiError>) -> Option<AuthUser> {
        self.pending = false;
        match result {
            Ok(user) => Some(user),
            Err(e) => {
                self.error = Some(e);
                None
            }
        }
    }

    pub fn status(&self) -> MutationStatus {
        if self.pending {
            return MutationStatus::Pending;
        }
        match &self.error {
            Some(e) => MutationStatus::Failed(e.clone()),
            None => MutationStatus::Idle,
        }
    }
}

/// Reactive handle returned by `use_login` / `use_sign_up`.
pub struct Mutation<I: 'static> {
    state: RwSignal<MutationState>,
    trigger: Callback<I>,
}

impl<I: 'static> Clone for Mutation<I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I: 'static> Copy for Mutation<I> {}

impl<I: 'static> Mutation<I> {
    /// Submit `input`. Ignored while a previous request is still pending.
    pub fn trigger(&self, input: I) {
        self.trigger.run(input);
    }

    pub fn is_pending(&self) -> bool {
        self.state.with(|s| s.pending)
    }

    pub fn status(&self) -> MutationStatus {
        self.state.with(MutationState::status)
    }

    /// Banner text for the latest failure, if any.
    pub fn banner_text(&self) -> Option<String> {
        self.status().banner_text()
    }
}

fn spawn_task(task: LocalTask) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(task);
    // Forms only submit in the browser; SSR renders never trigger.
    #[cfg(not(feature = "hydrate"))]
    drop(task);
}

/// Build a mutation around an auth request. On success the returned user is
/// written into the `AuthState` context, which drives the route guards.
pub fn use_auth_mutation<I, F, Fut>(request: F) -> Mutation<I>
where
    I: 'static,
    F: Fn(I) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<AuthUser, ApiError>> + 'static,
{
    auth_mutation_with(expect_context::<RwSignal<AuthState>>(), request, spawn_task)
}

/// `use_auth_mutation` with an explicit auth signal and task spawner.
pub(crate) fn auth_mutation_with<I, F, Fut>(
    auth: RwSignal<AuthState>,
    request: F,
    spawn: fn(LocalTask),
) -> Mutation<I>
where
    I: 'static,
    F: Fn(I) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<AuthUser, ApiError>> + 'static,
{
    let state = RwSignal::new(MutationState::default());

    let trigger = Callback::new(move |input: I| {
        let mut started = false;
        state.update(|s| started = s.begin());
        if !started {
            return;
        }

        let request_fut = request(input);
        spawn(Box::pin(async move {
            let result = request_fut.await;
            let mut user = None;
            state.update(|s| user = s.settle(result));
            if let Some(user) = user {
                #[cfg(feature = "hydrate")]
                log::info!("authenticated as {}", user.email);
                auth.update(|a| a.settle(Some(user)));
            }
        }));
    });

    Mutation { state, trigger }
}
