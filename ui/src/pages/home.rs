//! Landing page

use crate::state::Session;
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<Session>();

    view! {
        <section class="mx-auto flex w-11/12 max-w-7xl flex-col items-center gap-8 py-24 text-center">
            <h1 class="text-4xl font-semibold text-slate-50">
                "Empower your future with "
                <span class="text-yellow-300">"coding skills"</span>
            </h1>
            <p class="max-w-2xl text-lg text-slate-400">
                "Learn at your own pace, from anywhere in the world, with hands-on projects and feedback from instructors."
            </p>
            {move || if session.is_authenticated() {
                view! {
                    <a href="/dashboard/my-profile" class="rounded-md bg-yellow-300 px-6 py-3 font-bold text-slate-900">
                        "Go to dashboard"
                    </a>
                }
                .into_any()
            } else {
                view! {
                    <a href="/signup" class="rounded-md bg-yellow-300 px-6 py-3 font-bold text-slate-900">
                        "Get started"
                    </a>
                }
                .into_any()
            }}
        </section>
    }
}
