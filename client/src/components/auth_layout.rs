//! Two-column card used by the login and signup pages.
//!
//! DESIGN
//! ======
//! Left column: logo plus the page's own content. Right column: the
//! illustration panel, hidden below the `lg` breakpoint.

use leptos::prelude::*;

pub const APP_NAME: &str = "Streamify";

#[component]
pub fn AuthLayout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center p-4 sm:p-6 md:p-8 bg-gradient-to-br from-slate-900 via-slate-800 to-slate-900">
            <div class="fixed inset-0 overflow-hidden pointer-events-none">
                <div class="absolute top-20 left-10 w-72 h-72 bg-blue-500 rounded-full mix-blend-multiply filter blur-3xl opacity-20 animate-blob"></div>
                <div class="absolute top-40 right-10 w-72 h-72 bg-purple-500 rounded-full mix-blend-multiply filter blur-3xl opacity-20 animate-blob animation-delay-2000"></div>
                <div class="absolute -bottom-8 left-20 w-72 h-72 bg-pink-500 rounded-full mix-blend-multiply filter blur-3xl opacity-20 animate-blob animation-delay-4000"></div>
            </div>

            <div class="w-full max-w-5xl mx-auto relative z-10">
                <div class="border border-white/10 flex flex-col lg:flex-row bg-white/5 backdrop-blur-2xl rounded-2xl shadow-2xl overflow-hidden hover:border-white/20 transition-all duration-300">
                    <div class="w-full lg:w-1/2 p-8 sm:p-10 md:p-12 flex flex-col bg-gradient-to-br from-white/10 to-white/5">
                        <Logo/>
                        {children()}
                    </div>
                    <Illustration/>
                </div>
            </div>
        </div>
    }
}

#[component]
fn Logo() -> impl IntoView {
    view! {
        <div class="mb-8 flex items-center justify-start gap-3">
            <div class="p-2 bg-gradient-to-br from-blue-500 to-purple-600 rounded-lg">
                <ShipWheelIcon/>
            </div>
            <span class="text-3xl font-bold font-mono bg-clip-text text-transparent bg-gradient-to-r from-blue-400 via-purple-400 to-pink-400 tracking-wider">
                {APP_NAME}
            </span>
        </div>
    }
}

#[component]
fn ShipWheelIcon() -> impl IntoView {
    view! {
        <svg
            class="size-7 text-white"
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <circle cx="12" cy="12" r="8"/>
            <path d="M12 2v7.5"/>
            <path d="m19 5-5.23 5.23"/>
            <path d="M22 12h-7.5"/>
            <path d="m19 19-5.23-5.23"/>
            <path d="M12 14.5V22"/>
            <path d="M10.23 13.77 5 19"/>
            <path d="M9.5 12H2"/>
            <path d="M10.23 10.23 5 5"/>
            <circle cx="12" cy="12" r="2.5"/>
        </svg>
    }
}

#[component]
fn Illustration() -> impl IntoView {
    view! {
        <div class="hidden lg:flex w-full lg:w-1/2 bg-gradient-to-br from-blue-500/20 via-purple-500/20 to-pink-500/20 items-center justify-center p-8 relative overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-t from-slate-900/80 to-transparent"></div>
            <div class="max-w-md p-8 relative z-10 text-center">
                <div class="relative aspect-square max-w-sm mx-auto mb-4 drop-shadow-2xl">
                    <img src="/i.png" alt="Language connection illustration" class="w-full h-full"/>
                </div>
                <div class="space-y-4 mt-6">
                    <h2 class="text-2xl font-bold text-white">"Connect with language partners worldwide"</h2>
                    <p class="text-gray-300">
                        "Practice conversations, make friends, and improve your language skills together"
                    </p>
                </div>
            </div>
        </div>
    }
}
