//! Recipe Frontend App
//!
//! Root component: provides the app context and switches between pages.

use leptos::ev;
use leptos::prelude::*;

use crate::context::{AppContext, Page, SessionStatus};
use crate::pages::{FavoritesPage, GeneratePage, HistoryPage, LandingPage};

#[component]
pub fn App() -> impl IntoView {
    // State
    let (session, set_session) = signal(SessionStatus::Unknown);
    let (page, set_page) = signal(Page::current());

    // Provide context to all children
    provide_context(AppContext::new((session, set_session), (page, set_page)));

    // Back/forward buttons only change the hash
    let hash_listener = window_event_listener(ev::hashchange, move |_| {
        let next = Page::current();
        if page.get_untracked() != next {
            log::debug!("[APP] Hash changed to {:?}", next);
            set_page.set(next);
        }
    });
    on_cleanup(move || hash_listener.remove());

    view! {
        <div class="app">
            {move || match page.get() {
                Page::Landing => view! { <LandingPage /> }.into_any(),
                Page::Generate => view! { <GeneratePage /> }.into_any(),
                Page::History => view! { <HistoryPage /> }.into_any(),
                Page::Favorites => view! { <FavoritesPage /> }.into_any(),
            }}
        </div>
    }
}
