//! Account menu for signed-in users

use crate::components::icons::ChevronDown;
use crate::state::Session;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn ProfileDropdown(session: Session) -> impl IntoView {
    let navigate = use_navigate();
    let open = RwSignal::new(false);

    let avatar = move || {
        session.user.with(|user| match user {
            Some(user) => match user.image.clone() {
                Some(src) => view! {
                    <img
                        src=src
                        alt=format!("profile-{}", user.first_name)
                        class="aspect-square w-[30px] rounded-full object-cover"
                    />
                }
                .into_any(),
                None => view! {
                    <span class="grid aspect-square w-[30px] place-items-center rounded-full bg-slate-600 text-sm font-semibold text-slate-50">
                        {user.initial()}
                    </span>
                }
                .into_any(),
            },
            None => ().into_any(),
        })
    };

    view! {
        <div class="relative">
            <button
                class="flex items-center gap-x-1 text-slate-100"
                aria-label="Account menu"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                {avatar}
                <ChevronDown />
            </button>

            {move || open.get().then(|| {
                let navigate = navigate.clone();
                view! {
                    <div class="absolute right-0 top-[118%] z-[1000] flex flex-col divide-y divide-slate-700 overflow-hidden rounded-md border border-slate-700 bg-slate-800">
                        <p class="px-4 py-2 text-xs text-slate-400">
                            {move || session.user.with(|u| u.as_ref().map(|u| u.display_name()).unwrap_or_default())}
                        </p>
                        <a
                            href="/dashboard/my-profile"
                            class="px-4 py-2 text-sm text-slate-100 hover:bg-slate-700"
                            on:click=move |_| open.set(false)
                        >
                            "Dashboard"
                        </a>
                        <button
                            class="px-4 py-2 text-left text-sm text-slate-100 hover:bg-slate-700"
                            on:click=move |_| {
                                open.set(false);
                                session.clear();
                                navigate("/", Default::default());
                            }
                        >
                            "Logout"
                        </button>
                    </div>
                }
            })}
        </div>
    }
}
