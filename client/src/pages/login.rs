//! Login page: email + password sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::auth_layout::AuthLayout;
use crate::components::error_banner::ErrorBanner;
use crate::components::submit_button::SubmitButton;
use crate::net::types::LoginRequest;
use crate::state::auth::{AuthState, use_login};
use crate::util::auth::{SIGNUP_PATH, install_authed_redirect};

/// Input fields of the login form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
}

/// Write one keystroke's worth of input into the matching field.
pub fn apply_login_input(form: &mut LoginRequest, field: LoginField, value: String) {
    match field {
        LoginField::Email => form.email = value,
        LoginField::Password => form.password = value,
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_authed_redirect(auth, use_navigate());

    let form = RwSignal::new(LoginRequest::default());
    let login = use_login();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        login.trigger(form.get_untracked());
    };
    let on_field = move |field: LoginField| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            form.update(|f| apply_login_input(f, field, value));
        }
    };

    view! {
        <AuthLayout>
            <ErrorBanner message=Signal::derive(move || login.banner_text())/>

            <div class="w-full flex-1">
                <form on:submit=on_submit>
                    <div class="space-y-6">
                        <div>
                            <h2 class="text-3xl font-bold text-white mb-2">"Welcome Back"</h2>
                            <p class="text-gray-300">
                                "Sign in to your account to continue your language journey"
                            </p>
                        </div>

                        <div class="flex flex-col gap-4">
                            <div class="form-control w-full">
                                <label class="label">
                                    <span class="label-text text-gray-300 font-medium">"Email"</span>
                                </label>
                                <input
                                    type="email"
                                    placeholder="hello@example.com"
                                    class="input input-bordered w-full bg-white/10 border-white/20 text-white placeholder-gray-400 focus:border-blue-400 focus:outline-none transition-all"
                                    prop:value=move || form.with(|f| f.email.clone())
                                    on:input=on_field(LoginField::Email)
                                    required
                                />
                            </div>

                            <div class="form-control w-full">
                                <label class="label">
                                    <span class="label-text text-gray-300 font-medium">"Password"</span>
                                </label>
                                <input
                                    type="password"
                                    placeholder="••••••••"
                                    class="input input-bordered w-full bg-white/10 border-white/20 text-white placeholder-gray-400 focus:border-blue-400 focus:outline-none transition-all"
                                    prop:value=move || form.with(|f| f.password.clone())
                                    on:input=on_field(LoginField::Password)
                                    required
                                />
                            </div>

                            <SubmitButton
                                pending=Signal::derive(move || login.is_pending())
                                idle_label="Sign In"
                                pending_label="Signing in..."
                                class="mt-2"
                            />

                            <div class="text-center mt-6">
                                <p class="text-gray-300 text-sm">
                                    "Don't have an account? "
                                    <a
                                        href=SIGNUP_PATH
                                        class="text-blue-400 hover:text-blue-300 font-semibold transition-colors"
                                    >
                                        "Create one"
                                    </a>
                                </p>
                            </div>
                        </div>
                    </div>
                </form>
            </div>
        </AuthLayout>
    }
}
