//! Category landing page reached from the catalog submenu

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Turn a catalog slug back into a readable heading
fn heading_from_slug(slug: &str) -> String {
    slug.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
pub fn CatalogPage() -> impl IntoView {
    let params = use_params_map();
    let heading = move || {
        params.with(|p| {
            p.get("catalogName")
                .map(|slug| heading_from_slug(&slug))
                .unwrap_or_default()
        })
    };

    view! {
        <section class="mx-auto w-11/12 max-w-7xl py-12">
            <p class="text-sm text-slate-400">
                "Home / Catalog / "
                <span class="text-yellow-300">{heading}</span>
            </p>
            <h1 class="mt-4 text-3xl text-slate-50">{heading}</h1>
            <p class="mt-2 text-slate-400">"Courses in this category will appear here."</p>
        </section>
    }
}
