//! Simple content pages linked from the navbar

use crate::state::Session;
use leptos::prelude::*;

#[component]
fn Placeholder(title: &'static str, blurb: &'static str) -> impl IntoView {
    view! {
        <section class="mx-auto w-11/12 max-w-7xl py-12">
            <h1 class="text-3xl text-slate-50">{title}</h1>
            <p class="mt-2 text-slate-400">{blurb}</p>
        </section>
    }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    view! { <Placeholder title="About Us" blurb="We are building the future of online learning." /> }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    view! { <Placeholder title="Contact Us" blurb="Questions or feedback? Reach out and we will get back to you." /> }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    view! { <Placeholder title="Log in" blurb="Sign-in is handled by the account service." /> }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    view! { <Placeholder title="Sign up" blurb="Registration is handled by the account service." /> }
}

/// Dashboard landing for signed-in users; shows what the session holds
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<Session>();

    view! {
        <section class="mx-auto w-11/12 max-w-7xl py-12">
            <h1 class="text-3xl text-slate-50">"Dashboard"</h1>
            {move || {
                let snapshot = session.snapshot();
                match snapshot.user {
                    Some(user) => view! {
                        <dl class="mt-4 grid grid-cols-[max-content_1fr] gap-x-6 gap-y-2 text-slate-300">
                            <dt class="text-slate-500">"Name"</dt>
                            <dd>{user.display_name()}</dd>
                            <dt class="text-slate-500">"Email"</dt>
                            <dd>{user.email.clone()}</dd>
                            <dt class="text-slate-500">"Account"</dt>
                            <dd>{format!("{:?}", user.account_type)}</dd>
                            <dt class="text-slate-500">"Cart items"</dt>
                            <dd>{snapshot.total_items}</dd>
                        </dl>
                    }
                    .into_any(),
                    None => view! {
                        <p class="mt-2 text-slate-400">
                            "You are not signed in. "
                            <a href="/login" class="text-yellow-300">"Log in"</a>
                        </p>
                    }
                    .into_any(),
                }
            }}
        </section>
    }
}
