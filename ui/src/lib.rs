//! StudyHub web UI - Leptos frontend
//!
//! App shell for the StudyHub learning site: routes, session state and the
//! navigation bar with its server-backed category menu.

pub mod api;
pub mod category_menu;
pub mod components;
pub mod config;
pub mod data;
pub mod navbar_model;
pub mod pages;
pub mod routing;
pub mod state;
pub mod types;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use components::Navbar;
use config::ApiConfig;
use pages::{
    catalog::CatalogPage,
    home::HomePage,
    info::{AboutPage, ContactPage, DashboardPage, LoginPage, SignupPage},
};
use state::Session;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = Session::load();
    provide_context(session);
    let api = ApiConfig::from_env();

    view! {
        <Title text="StudyHub" />
        <Router>
            <div class="flex min-h-screen w-screen flex-col bg-slate-900">
                <Navbar session=session api=api />
                <main class="flex-1">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/catalog/:catalogName") view=CatalogPage />
                        <Route path=path!("/about") view=AboutPage />
                        <Route path=path!("/contact") view=ContactPage />
                        <Route path=path!("/login") view=LoginPage />
                        <Route path=path!("/signup") view=SignupPage />
                        <Route path=path!("/dashboard/my-profile") view=DashboardPage />
                        <Route path=path!("/dashboard/cart") view=DashboardPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-1 items-center justify-center py-24">
            <div class="text-center">
                <h1 class="mb-4 text-6xl font-bold text-slate-500">"404"</h1>
                <p class="mb-8 text-xl text-slate-400">"Page not found"</p>
                <a
                    href="/"
                    class="rounded-lg bg-yellow-300 px-6 py-3 font-medium text-slate-900 transition-colors hover:bg-yellow-200"
                >
                    "Go Home"
                </a>
            </div>
        </div>
    }
}
