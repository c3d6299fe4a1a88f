//! Alert box shown above a form when its last submission failed.

use leptos::prelude::*;

#[component]
pub fn ErrorBanner(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.with(Option::is_some)>
            <div class="alert alert-error mb-6 bg-red-500/20 border border-red-500/50 rounded-lg p-4" role="alert">
                <span class="text-red-200">{move || message.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}
