//! Form submit button with a spinner state.
//!
//! While `pending` is true the button is disabled and shows `pending_label`
//! next to a spinner.

#[cfg(test)]
#[path = "submit_button_test.rs"]
mod submit_button_test;

use leptos::prelude::*;

/// Label for the current request state.
pub fn submit_label<'a>(pending: bool, idle_label: &'a str, pending_label: &'a str) -> &'a str {
    if pending { pending_label } else { idle_label }
}

#[component]
pub fn SubmitButton(
    #[prop(into)] pending: Signal<bool>,
    idle_label: &'static str,
    pending_label: &'static str,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            class=format!(
                "btn bg-gradient-to-r from-blue-500 to-purple-600 hover:from-blue-600 hover:to-purple-700 border-0 text-white w-full font-semibold transition-all duration-300 shadow-lg hover:shadow-purple-500/50 {class}",
            )
            disabled=move || pending.get()
        >
            <Show when=move || pending.get()>
                <span class="loading loading-spinner loading-xs"></span>
            </Show>
            {move || submit_label(pending.get(), idle_label, pending_label)}
        </button>
    }
}
