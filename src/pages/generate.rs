//! Generate Page
//!
//! Prompt form, generated recipe panel and the previous/favorites sidebar.

use favorite_sync::FavoriteSync;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{GeneratedRecipePanel, PageHeader, RecipeSidebar, RequireSession, SidebarLoad, SidebarTab};
use crate::context::{use_app_context, Page};
use crate::favorite_toggle::{is_favorite_signal, is_pending_signal, toggle_favorite};
use crate::models::{favorite_ids, PromptKind, RecipeDetail};
use crate::validation::{validate_prompt, Field, FormErrors};

#[component]
pub fn GeneratePage() -> impl IntoView {
    view! {
        <RequireSession>
            <GenerateWorkspace />
        </RequireSession>
    }
}

#[component]
fn GenerateWorkspace() -> impl IntoView {
    let ctx = use_app_context();

    // Prompt form
    let (kind, set_kind) = signal(PromptKind::default());
    let (text, set_text) = signal(String::new());
    let (prompt_errors, set_prompt_errors) = signal(FormErrors::default());
    let (generating, set_generating) = signal(false);
    let (generate_error, set_generate_error) = signal(None::<String>);

    // Main panel
    let current = RwSignal::new(None::<RecipeDetail>);
    let favorites = RwSignal::new(FavoriteSync::default());
    let toggle_error = RwSignal::new(None::<String>);

    // Sidebar
    let (tab, set_tab) = signal(SidebarTab::Previous);
    let (reload, set_reload) = signal(0u32);
    let sidebar_recipes = RwSignal::new(Vec::<RecipeDetail>::new());
    let sidebar_loading = RwSignal::new(true);
    let sidebar_error = RwSignal::new(None::<String>);

    // Seed the panel's favorite set; a failure leaves it empty
    Effect::new(move |_| {
        let issued_at = favorites.with_untracked(FavoriteSync::epoch);
        spawn_local(async move {
            match api::list_favorites().await {
                Ok(list) => {
                    favorites.try_update(|sync| sync.replace(favorite_ids(&list), issued_at));
                }
                Err(err) => {
                    if !ctx.handle_auth_error(&err) {
                        log::warn!("[GEN] Could not load favorites: {}", err);
                    }
                }
            }
        });
    });

    // Reload the sidebar on tab switch and after each generation
    Effect::new(move |_| {
        let load = SidebarLoad {
            tab: tab.get(),
            trigger: reload.get(),
        };
        let which = load.tab;
        log::debug!("[GEN] Loading {} sidebar, trigger={}", which.label(), load.trigger);
        sidebar_loading.set(true);
        sidebar_error.set(None);
        let issued_at = favorites.with_untracked(FavoriteSync::epoch);
        spawn_local(async move {
            let result = match which {
                SidebarTab::Previous => api::list_recipes().await,
                SidebarTab::Favorites => api::list_favorites().await,
            };
            // A newer tab switch or reload owns the sidebar now
            if !load.is_latest(tab.try_get_untracked(), reload.try_get_untracked()) {
                log::debug!("[GEN] Dropping stale {} sidebar load", which.label());
                return;
            }
            match result {
                Ok(list) => {
                    if which == SidebarTab::Favorites {
                        favorites.try_update(|sync| sync.replace(favorite_ids(&list), issued_at));
                    }
                    sidebar_recipes.try_set(list);
                }
                Err(err) => {
                    if ctx.handle_auth_error(&err) {
                        return;
                    }
                    log::error!("[GEN] Sidebar load failed: {}", err);
                    sidebar_error.try_set(Some(err.user_message(which.fetch_error())));
                }
            }
            sidebar_loading.try_set(false);
        });
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if generating.get_untracked() {
            return;
        }
        let prompt_kind = kind.get_untracked();
        let prompt_text = text.get_untracked();
        let found = validate_prompt(prompt_kind, &prompt_text);
        let valid = found.is_empty();
        set_prompt_errors.set(found);
        if !valid {
            return;
        }

        set_generating.set(true);
        set_generate_error.set(None);
        spawn_local(async move {
            let prompt = prompt_kind.prompt(prompt_text.trim().to_string());
            match api::generate_recipe(&prompt).await {
                Ok(recipe) => {
                    log::info!("[GEN] Generated recipe {}", recipe.id());
                    toggle_error.try_set(None);
                    current.try_set(Some(recipe));
                    set_text.try_set(String::new());
                    match tab.try_get_untracked() {
                        Some(SidebarTab::Previous) => {
                            set_reload.try_update(|n| *n += 1);
                        }
                        Some(SidebarTab::Favorites) => {
                            set_tab.try_set(SidebarTab::Previous);
                        }
                        None => {}
                    }
                }
                Err(err) => {
                    if !ctx.handle_auth_error(&err) {
                        log::error!("[GEN] Generation failed: {}", err);
                        set_generate_error.try_set(Some(err.user_message("Failed to generate recipe")));
                    }
                }
            }
            set_generating.try_set(false);
        });
    };

    let on_toggle = Callback::new(move |_: ()| {
        let Some(id) = current.with_untracked(|recipe| recipe.as_ref().map(RecipeDetail::id)) else {
            return;
        };
        toggle_error.set(None);
        toggle_favorite(ctx, favorites, id, move |settlement, fallback| {
            if let Some(failure) = settlement.failure() {
                toggle_error.try_set(Some(failure.user_message(fallback)));
            } else if tab.try_get_untracked() == Some(SidebarTab::Favorites) {
                set_reload.try_update(|n| *n += 1);
            }
        });
    });

    let on_select = Callback::new(move |recipe: RecipeDetail| {
        toggle_error.set(None);
        current.set(Some(recipe));
    });

    view! {
        <div class="generate-page">
            <PageHeader
                title="Recipe Generator"
                links={vec![("My Recipes", Page::History), ("Favorites", Page::Favorites)]}
            />
            <div class="generate-layout">
                <RecipeSidebar
                    tab=tab
                    recipes=sidebar_recipes
                    loading=sidebar_loading
                    error=sidebar_error
                    on_tab=move |which: SidebarTab| set_tab.set(which)
                    on_select=on_select
                />

                <main class="generate-main">
                    <form class="prompt-form" on:submit=submit>
                        <div class="prompt-row">
                            <select
                                class="prompt-kind"
                                prop:value=move || kind.get().as_str()
                                on:change=move |ev| {
                                    set_kind.set(PromptKind::from_str(&event_target_value(&ev)));
                                    set_prompt_errors.set(FormErrors::default());
                                }
                            >
                                <option value={PromptKind::Ingredients.as_str()}>{PromptKind::Ingredients.label()}</option>
                                <option value={PromptKind::DishName.as_str()}>{PromptKind::DishName.label()}</option>
                            </select>
                            <input
                                type="text"
                                class=move || {
                                    if prompt_errors.with(|errors| errors.has(Field::Prompt)) {
                                        "prompt-input invalid"
                                    } else {
                                        "prompt-input"
                                    }
                                }
                                placeholder=move || kind.get().placeholder()
                                prop:value=move || text.get()
                                on:input=move |ev| set_text.set(event_target_value(&ev))
                            />
                            <button type="submit" class="primary-btn" disabled=move || generating.get()>
                                {move || if generating.get() { "Generating..." } else { "Generate Recipe" }}
                            </button>
                        </div>
                        {move || prompt_errors
                            .with(|errors| errors.get(Field::Prompt))
                            .map(|message| view! { <p class="field-error">{message}</p> })}
                        {move || generate_error.get().map(|message| view! { <p class="inline-error">{message}</p> })}
                    </form>

                    {move || match current.get() {
                        Some(recipe) => {
                            let id = recipe.id();
                            view! {
                                <GeneratedRecipePanel
                                    recipe=recipe
                                    favorite=is_favorite_signal(favorites, id)
                                    pending=is_pending_signal(favorites, id)
                                    error=toggle_error
                                    on_toggle=on_toggle
                                />
                            }
                            .into_any()
                        }
                        None => view! {
                            <p class="generate-empty">
                                "Enter ingredients or a dish name to generate your first recipe."
                            </p>
                        }
                        .into_any(),
                    }}
                </main>
            </div>
        </div>
    }
}
