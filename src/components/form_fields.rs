//! Form Field Helpers
//!
//! Inline validation feedback for the auth forms.

use leptos::prelude::*;

use crate::validation::{Field, FormErrors};

/// Message under a field, if validation flagged it
#[component]
pub fn FieldError(errors: ReadSignal<FormErrors>, field: Field) -> impl IntoView {
    move || {
        errors
            .with(|errors| errors.get(field))
            .map(|message| view! { <p class="field-error">{message}</p> })
    }
}

/// Input class with the invalid marker when `field` has an error
pub fn field_class(errors: ReadSignal<FormErrors>, field: Field) -> impl Fn() -> &'static str + Send + Sync + Copy + 'static {
    move || {
        if errors.with(|errors| errors.has(field)) {
            "form-input invalid"
        } else {
            "form-input"
        }
    }
}

/// Banner for an error the server sent back
#[component]
pub fn ServerError(message: ReadSignal<Option<String>>) -> impl IntoView {
    move || message.get().map(|message| view! { <div class="form-error">{message}</div> })
}
