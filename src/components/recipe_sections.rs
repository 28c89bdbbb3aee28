//! Recipe Sections Component
//!
//! Image, ingredients, instructions and tutorials, shared by the overlay and
//! the generation panel.

use leptos::prelude::*;

use crate::models::{RecipeDetail, Tutorial};

fn or_not_specified(text: String) -> String {
    if text.is_empty() {
        "Not specified".to_string()
    } else {
        text
    }
}

#[component]
pub fn RecipeSections(recipe: RecipeDetail) -> impl IntoView {
    let RecipeDetail { summary, tutorials } = recipe;
    let alt = summary.name;
    let image = summary
        .image_url
        .map(|url| view! { <img class="recipe-image" src=url alt=alt /> });
    let ingredients = or_not_specified(summary.ingredients);
    let instructions = or_not_specified(summary.instructions);

    view! {
        {image}
        <section class="recipe-section">
            <h3>"Ingredients:"</h3>
            <pre class="recipe-text">{ingredients}</pre>
        </section>
        <section class="recipe-section">
            <h3>"Instructions:"</h3>
            <pre class="recipe-text">{instructions}</pre>
        </section>
        <TutorialList tutorials=tutorials />
    }
}

/// Video links; renders nothing for an empty list
#[component]
pub fn TutorialList(tutorials: Vec<Tutorial>) -> impl IntoView {
    (!tutorials.is_empty()).then(move || {
        view! {
            <section class="recipe-section tutorials">
                <h3>"Recipe Tutorials:"</h3>
                <div class="tutorial-grid">
                    {tutorials
                        .into_iter()
                        .map(|tutorial| {
                            let Tutorial { url, thumbnail_url, title, channel_name, .. } = tutorial;
                            let alt = title.clone();
                            let hover = title.clone();
                            let thumb = thumbnail_url
                                .map(|src| view! { <img class="tutorial-thumb" src=src alt=alt /> });
                            let channel = channel_name
                                .map(|name| view! { <p class="tutorial-channel">"Channel: " {name}</p> });
                            view! {
                                <a class="tutorial-card" href=url target="_blank" rel="noopener noreferrer">
                                    {thumb}
                                    <h4 class="tutorial-title" title=hover>{title}</h4>
                                    {channel}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        }
    })
}
