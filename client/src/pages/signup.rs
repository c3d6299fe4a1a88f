//! Signup page: full name, email, password and terms acceptance.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::auth_layout::{APP_NAME, AuthLayout};
use crate::components::error_banner::ErrorBanner;
use crate::components::submit_button::SubmitButton;
use crate::net::types::SignupRequest;
use crate::state::auth::{AuthState, use_sign_up};
use crate::util::auth::{LOGIN_PATH, install_authed_redirect};

pub const PASSWORD_HINT: &str = "Password must be at least 6 characters long";

/// Local signup form state. Terms acceptance is enforced by the browser's
/// `required` checkbox and is not part of the request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub accepted_terms: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignupField {
    FullName,
    Email,
    Password,
}

impl SignupForm {
    pub fn apply_input(&mut self, field: SignupField, value: String) {
        match field {
            SignupField::FullName => self.full_name = value,
            SignupField::Email => self.email = value,
            SignupField::Password => self.password = value,
        }
    }

    /// Payload sent to `POST /api/auth/signup`.
    pub fn to_request(&self) -> SignupRequest {
        SignupRequest {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_authed_redirect(auth, use_navigate());

    let form = RwSignal::new(SignupForm::default());
    let sign_up = use_sign_up();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        sign_up.trigger(form.with_untracked(SignupForm::to_request));
    };
    let on_field = move |field: SignupField| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            form.update(|f| f.apply_input(field, value));
        }
    };

    view! {
        <AuthLayout>
            <ErrorBanner message=Signal::derive(move || sign_up.banner_text())/>

            <div class="w-full flex-1">
                <form on:submit=on_submit>
                    <div class="space-y-6">
                        <div>
                            <h2 class="text-3xl font-bold text-white mb-2">"Create an Account"</h2>
                            <p class="text-gray-300">
                                {format!("Join {APP_NAME} and start your language learning adventure!")}
                            </p>
                        </div>

                        <div class="space-y-4">
                            <div class="form-control w-full">
                                <label class="label">
                                    <span class="label-text text-gray-300 font-medium">"Full Name"</span>
                                </label>
                                <input
                                    type="text"
                                    placeholder="John Doe"
                                    class="input input-bordered w-full bg-white/10 border-white/20 text-white placeholder-gray-400 focus:border-blue-400 focus:outline-none transition-all"
                                    prop:value=move || form.with(|f| f.full_name.clone())
                                    on:input=on_field(SignupField::FullName)
                                    required
                                />
                            </div>
                            <div class="form-control w-full">
                                <label class="label">
                                    <span class="label-text text-gray-300 font-medium">"Email"</span>
                                </label>
                                <input
                                    type="email"
                                    placeholder="john@gmail.com"
                                    class="input input-bordered w-full bg-white/10 border-white/20 text-white placeholder-gray-400 focus:border-blue-400 focus:outline-none transition-all"
                                    prop:value=move || form.with(|f| f.email.clone())
                                    on:input=on_field(SignupField::Email)
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
                                    on:input=on_field(SignupField::Password)
                                    required
                                />
                                <p class="text-xs text-gray-400 mt-2">{PASSWORD_HINT}</p>
                            </div>

                            <div class="form-control">
                                <label class="label cursor-pointer justify-start gap-3">
                                    <input
                                        type="checkbox"
                                        class="checkbox checkbox-sm border-white/30"
                                        prop:checked=move || form.with(|f| f.accepted_terms)
                                        on:change=move |ev| {
                                            let checked = event_target_checked(&ev);
                                            form.update(|f| f.accepted_terms = checked);
                                        }
                                        required
                                    />
                                    <span class="text-xs leading-tight text-gray-300">
                                        "I agree to the "
                                        <span class="text-blue-400 hover:text-blue-300 font-semibold">"terms of service"</span>
                                        " and "
                                        <span class="text-blue-400 hover:text-blue-300 font-semibold">"privacy policy"</span>
                                    </span>
                                </label>
                            </div>
                        </div>

                        <SubmitButton
                            pending=Signal::derive(move || sign_up.is_pending())
                            idle_label="Create Account"
                            pending_label="Creating Account..."
                        />

                        <div class="text-center mt-6">
                            <p class="text-gray-300 text-sm">
                                "Already have an account? "
                                <a
                                    href=LOGIN_PATH
                                    class="text-blue-400 hover:text-blue-300 font-semibold transition-colors"
                                >
                                    "Sign in"
                                </a>
                            </p>
                        </div>
                    </div>
                </form>
            </div>
        </AuthLayout>
    }
}
