//! Status Screens
//!
//! Full-page placeholders for loading and fetch errors.

use leptos::prelude::*;

use crate::context::{use_app_context, Page};

#[component]
pub fn StatusScreen(#[prop(into)] message: String) -> impl IntoView {
    view! { <div class="page-status">{message}</div> }
}

/// Fetch failure with a single way out
#[component]
pub fn ErrorScreen(#[prop(into)] message: String) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="page-status error">
            <p>"Error: " {message}</p>
            <button class="primary-btn" on:click=move |_| ctx.navigate(Page::Generate)>
                "Back to Main"
            </button>
        </div>
    }
}
