//! Recipe Sidebar Component
//!
//! Tabbed list of previous and favorite recipes next to the generator.

use leptos::prelude::*;

use crate::models::RecipeDetail;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarTab {
    Previous,
    Favorites,
}

impl SidebarTab {
    pub fn label(&self) -> &'static str {
        match self {
            SidebarTab::Previous => "Previous",
            SidebarTab::Favorites => "Favorites",
        }
    }

    pub fn fetch_error(&self) -> &'static str {
        match self {
            SidebarTab::Previous => "Failed to fetch previous recipes",
            SidebarTab::Favorites => "Failed to fetch favorite recipes",
        }
    }

    fn empty_message(&self) -> &'static str {
        match self {
            SidebarTab::Previous => "No recipes yet",
            SidebarTab::Favorites => "No favorites yet",
        }
    }
}

/// One sidebar fetch, identified by the tab and reload counter it was issued for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarLoad {
    pub tab: SidebarTab,
    pub trigger: u32,
}

impl SidebarLoad {
    /// Whether this fetch may still write the sidebar, given the latest tab
    /// and reload counter (`None` once the page is gone).
    pub fn is_latest(&self, tab: Option<SidebarTab>, trigger: Option<u32>) -> bool {
        tab == Some(self.tab) && trigger == Some(self.trigger)
    }
}

/// Sidebar listing for the generate page
///
/// # Arguments
/// * `tab` - Active tab
/// * `recipes` - Entries for the active tab
/// * `on_select` - Show the clicked recipe in the main panel
#[component]
pub fn RecipeSidebar(
    #[prop(into)] tab: Signal<SidebarTab>,
    #[prop(into)] recipes: Signal<Vec<RecipeDetail>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] on_tab: Callback<SidebarTab>,
    #[prop(into)] on_select: Callback<RecipeDetail>,
) -> impl IntoView {
    let tab_button = move |which: SidebarTab| {
        view! {
            <button
                class=move || if tab.get() == which { "sidebar-tab active" } else { "sidebar-tab" }
                on:click=move |_| on_tab.run(which)
            >
                {which.label()}
            </button>
        }
    };

    let body = move || {
        if loading.get() {
            return view! { <p class="sidebar-status">"Loading..."</p> }.into_any();
        }
        if let Some(message) = error.get() {
            return view! { <p class="sidebar-status error">{message}</p> }.into_any();
        }
        let entries = recipes.get();
        if entries.is_empty() {
            return view! { <p class="sidebar-status">{tab.get().empty_message()}</p> }.into_any();
        }
        entries
            .into_iter()
            .map(|recipe| {
                let name = recipe.summary.name.clone();
                view! {
                    <li class="sidebar-item" on:click=move |_| on_select.run(recipe.clone())>
                        {name}
                    </li>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <aside class="recipe-sidebar">
            <div class="sidebar-tabs">
                {tab_button(SidebarTab::Previous)}
                {tab_button(SidebarTab::Favorites)}
            </div>
            <ul class="sidebar-list">{body}</ul>
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_older_load_for_same_tab_is_dropped() {
        let first = SidebarLoad { tab: SidebarTab::Favorites, trigger: 1 };
        let second = SidebarLoad { tab: SidebarTab::Favorites, trigger: 2 };

        // Second reload fired before the first answered
        assert!(!first.is_latest(Some(SidebarTab::Favorites), Some(2)));
        assert!(second.is_latest(Some(SidebarTab::Favorites), Some(2)));
    }

    #[test]
    fn test_load_dropped_after_tab_switch_or_teardown() {
        let load = SidebarLoad { tab: SidebarTab::Previous, trigger: 0 };
        assert!(!load.is_latest(Some(SidebarTab::Favorites), Some(0)));
        assert!(!load.is_latest(None, None));
        assert!(load.is_latest(Some(SidebarTab::Previous), Some(0)));
    }
}
