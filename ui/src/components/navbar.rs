//! Top navigation bar

use crate::category_menu::{load_categories_on_mount, CategoryMenuState};
use crate::components::icons::{CartIcon, ChevronDown, MenuIcon};
use crate::components::ProfileDropdown;
use crate::config::ApiConfig;
use crate::data::NAVBAR_LINKS;
use crate::navbar_model::{self, AuthControls, CartAffordance, MenuToggle, Submenu};
use crate::state::Session;
use crate::types::NavbarLink;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Site navigation: primary links, category submenu, cart and account area.
///
/// Desktop and mobile layouts are both rendered; CSS breakpoints decide
/// which one is visible.
#[component]
pub fn Navbar(
    /// Session the bar reads auth and cart state from
    session: Session,
    /// Server the category list is fetched from
    api: ApiConfig,
) -> impl IntoView {
    let pathname = use_location().pathname;

    let menu = CategoryMenuState::new();
    load_categories_on_mount(menu, api);

    let mobile_menu = RwSignal::new(MenuToggle::default());

    let submenu = Memo::new(move |_| menu.sub_links.with(|c| navbar_model::submenu(c)));
    let auth = Memo::new(move |_| {
        session
            .token
            .with(|token| navbar_model::auth_controls(token.as_deref()))
    });
    let cart = Memo::new(move |_| {
        let total_items = session.total_items.get();
        session
            .user
            .with(|user| navbar_model::cart_affordance(user.as_ref(), total_items))
    });

    let link_class = move |link: &'static NavbarLink| {
        if pathname.with(|p| navbar_model::is_active(link, p)) {
            "text-yellow-300"
        } else {
            "text-slate-100"
        }
    };

    let desktop_links = NAVBAR_LINKS
        .iter()
        .map(|link| {
            if navbar_model::is_catalog_link(link) {
                view! {
                    <li class="list-none">
                        <div class=move || format!(
                            "group relative flex cursor-pointer items-center gap-1 {}",
                            link_class(link)
                        )>
                            <p>{link.title}</p>
                            <ChevronDown />
                            <div class="invisible absolute left-1/2 top-1/2 z-[1000] flex w-max min-w-[200px] -translate-x-1/2 translate-y-[3em] flex-col rounded-lg bg-slate-50 p-4 text-slate-900 opacity-0 transition-all duration-150 group-hover:visible group-hover:translate-y-[1.65em] group-hover:opacity-100">
                                <div class="absolute left-1/2 top-0 -z-10 h-6 w-6 translate-x-[80%] -translate-y-[40%] rotate-45 select-none rounded bg-slate-50"></div>
                                {move || match submenu.get() {
                                    Submenu::NoResults => view! {
                                        <p class="text-center">"No Courses Found"</p>
                                    }.into_any(),
                                    Submenu::Links(links) => links
                                        .into_iter()
                                        .map(|sub| view! {
                                            <a
                                                href=sub.href
                                                class="block whitespace-nowrap rounded-lg px-4 py-2 hover:bg-slate-200"
                                            >
                                                {sub.label}
                                            </a>
                                        })
                                        .collect_view()
                                        .into_any(),
                                }}
                            </div>
                        </div>
                    </li>
                }
                .into_any()
            } else {
                view! {
                    <li class="list-none">
                        <a href=link.path class=move || link_class(link)>{link.title}</a>
                    </li>
                }
                .into_any()
            }
        })
        .collect_view();

    view! {
        <div class=move || format!(
            "flex flex-col border-b border-b-slate-700 transition-all duration-200 {}",
            if pathname.with(|p| p != "/") { "bg-slate-800" } else { "" }
        )>
            <div class="mx-auto flex h-14 w-11/12 max-w-7xl items-center justify-between">
                <a href="/">
                    <img src="/assets/logo.svg" alt="Logo" width="160" height="32" loading="lazy" />
                </a>

                // Desktop menu
                <nav class="hidden md:flex gap-x-6 text-slate-100">
                    <ul class="flex gap-x-6">{desktop_links}</ul>
                </nav>

                <div class="hidden md:flex items-center gap-x-4">
                    {move || match cart.get() {
                        CartAffordance::Hidden => None,
                        shown @ CartAffordance::Shown { .. } => Some(view! {
                            <a href="/dashboard/cart" class="relative text-slate-200">
                                <CartIcon />
                                {shown.badge().map(|badge| view! {
                                    <span class="absolute -bottom-2 -right-2 grid h-5 w-5 place-items-center rounded-full bg-slate-600 text-xs font-bold text-yellow-100">
                                        {badge}
                                    </span>
                                })}
                            </a>
                        }),
                    }}
                    {auth_area(
                        session,
                        auth,
                        "rounded border border-slate-700 bg-slate-800 px-3 py-2 text-xs text-slate-100",
                    )}
                </div>

                <button
                    class="md:hidden"
                    aria-label="Toggle navigation menu"
                    on:click=move |_| mobile_menu.update(MenuToggle::toggle)
                >
                    <MenuIcon />
                </button>
            </div>

            // Mobile menu
            {move || mobile_menu.with(MenuToggle::is_open).then(|| view! {
                <div class="md:hidden flex flex-col gap-3 bg-slate-800 px-6 pb-4 text-slate-100">
                    {mobile_links(submenu)}

                    {move || match cart.get() {
                        CartAffordance::Hidden => None,
                        CartAffordance::Shown { total_items } => Some(view! {
                            <a href="/dashboard/cart" class="flex items-center gap-2">
                                <CartIcon size="w-5 h-5" />
                                {format!("Cart ({})", total_items)}
                            </a>
                        }),
                    }}

                    {auth_area(
                        session,
                        auth,
                        "mt-2 rounded border border-slate-700 bg-slate-800 px-3 py-2 text-sm text-white",
                    )}
                </div>
            })}
        </div>
    }
}

/// Stacked links for the mobile panel; the catalog expands in place
fn mobile_links(submenu: Memo<Submenu>) -> impl IntoView {
    NAVBAR_LINKS
        .iter()
        .map(|link| {
            if navbar_model::is_catalog_link(link) {
                view! {
                    <div>
                        <details class="group cursor-pointer">
                            <summary class="flex items-center justify-between">
                                {link.title}
                                <ChevronDown />
                            </summary>
                            <ul class="mt-2 pl-4">
                                {move || match submenu.get() {
                                    Submenu::NoResults => view! {
                                        <li class="text-slate-400">"No Courses Found"</li>
                                    }.into_any(),
                                    Submenu::Links(links) => links
                                        .into_iter()
                                        .map(|sub| view! {
                                            <li><a href=sub.href>{sub.label}</a></li>
                                        })
                                        .collect_view()
                                        .into_any(),
                                }}
                            </ul>
                        </details>
                    </div>
                }
                .into_any()
            } else {
                view! {
                    <div>
                        <a href=link.path>{link.title}</a>
                    </div>
                }
                .into_any()
            }
        })
        .collect_view()
}

/// Log in / Sign up for anonymous visitors, the profile menu otherwise
fn auth_area(
    session: Session,
    auth: Memo<AuthControls>,
    button_class: &'static str,
) -> impl IntoView {
    move || match auth.get() {
        AuthControls::LoginSignup => view! {
            <a href="/login">
                <button class=button_class>"Log in"</button>
            </a>
            <a href="/signup">
                <button class=button_class>"Sign up"</button>
            </a>
        }
        .into_any(),
        AuthControls::ProfileDropdown => view! { <ProfileDropdown session=session /> }.into_any(),
    }
}
