//! Page Header Component
//!
//! Title bar with page navigation and logout.

use leptos::prelude::*;

use crate::context::{use_app_context, Page};

#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    links: Vec<(&'static str, Page)>,
) -> impl IntoView {
    let ctx = use_app_context();
    let user_name = move || {
        ctx.session
            .with(|session| session.user().map(|user| user.name.clone()))
            .unwrap_or_default()
    };

    view! {
        <header class="page-header">
            <h1>{title}</h1>
            <nav class="page-nav">
                {links
                    .into_iter()
                    .map(|(label, page)| view! {
                        <button class="nav-btn" on:click=move |_| ctx.navigate(page)>{label}</button>
                    })
                    .collect_view()}
                <button class="logout-btn" on:click=move |_| ctx.logout()>
                    "Logout (" {user_name} ")"
                </button>
            </nav>
        </header>
    }
}
