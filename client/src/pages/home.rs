//! Authenticated landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Target of the post-login/signup redirect. Anonymous visitors are sent to
//! `/login` once the session lookup settles.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::auth_layout::AuthLayout;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let display_name = move || {
        auth.get()
            .user
            .map(|user| user.full_name)
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            auth.update(|a| a.settle(None));
        });
    };

    view! {
        <AuthLayout>
            <div class="w-full flex-1 space-y-6">
                <Show
                    when=move || !auth.get().loading
                    fallback=|| view! { <span class="loading loading-spinner loading-md"></span> }
                >
                    <h2 class="text-3xl font-bold text-white mb-2">
                        "Welcome, " {display_name}
                    </h2>
                    <p class="text-gray-300">"You're signed in."</p>
                    <button
                        type="button"
                        class="btn btn-outline w-full text-white border-white/20"
                        on:click=on_logout
                    >
                        "Log out"
                    </button>
                </Show>
            </div>
        </AuthLayout>
    }
}
