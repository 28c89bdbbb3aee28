//! Session Guard Component
//!
//! Confirms the session before rendering a protected page.

use leptos::prelude::*;

use super::StatusScreen;
use crate::context::{use_app_context, Page, SessionStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Gate {
    Wait,
    Open,
    Redirect,
}

/// Render `children` only for an authenticated session.
///
/// Re-checks the cookie on mount; an anonymous session goes back to the
/// entry page without an error message.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let ctx = use_app_context();

    Effect::new(move |_| ctx.refresh_session());

    let gate = Memo::new(move |_| match ctx.session.get() {
        SessionStatus::Authenticated(_) => Gate::Open,
        SessionStatus::Anonymous => Gate::Redirect,
        SessionStatus::Unknown | SessionStatus::Checking => Gate::Wait,
    });

    Effect::new(move |_| {
        if gate.get() == Gate::Redirect {
            ctx.navigate(Page::Landing);
        }
    });

    view! {
        {move || match gate.get() {
            Gate::Open => children().into_any(),
            Gate::Redirect => view! { <StatusScreen message="Redirecting..." /> }.into_any(),
            Gate::Wait => view! { <StatusScreen message="Loading..." /> }.into_any(),
        }}
    }
}
