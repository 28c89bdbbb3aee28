//! Signup Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::form_fields::{field_class, FieldError, ServerError};
use crate::api::{self, RegisterArgs};
use crate::validation::{validate_signup, Field, FormErrors, SignupForm as SignupFields};

/// Registration form; a new account still has to log in afterwards
#[component]
pub fn SignupForm(
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_registered: Callback<()>,
) -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (agree_terms, set_agree_terms) = signal(false);
    let (errors, set_errors) = signal(FormErrors::default());
    let (server_error, set_server_error) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let form = SignupFields {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            agree_terms: agree_terms.get_untracked(),
        };
        let found = validate_signup(&form);
        let valid = found.is_empty();
        set_errors.set(found);
        if !valid {
            return;
        }

        set_submitting.set(true);
        set_server_error.set(None);
        spawn_local(async move {
            let args = RegisterArgs {
                name: &form.name,
                email: &form.email,
                password: &form.password,
            };
            match api::register(&args).await {
                Ok(()) => {
                    log::info!("[AUTH] Registered {}", form.email);
                    on_registered.run(());
                }
                Err(err) => {
                    log::warn!("[AUTH] Registration failed: {}", err);
                    set_server_error.try_set(Some(err.user_message("Registration failed")));
                    set_submitting.try_set(false);
                }
            }
        });
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <form class="auth-form" on:submit=submit on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2>"Create Account"</h2>
                    <button type="button" class="modal-close" on:click=move |_| on_close.run(())>"×"</button>
                </div>
                <ServerError message=server_error />

                <label for="signup-name">"Name"</label>
                <input
                    id="signup-name"
                    type="text"
                    class=field_class(errors, Field::Name)
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <FieldError errors=errors field=Field::Name />

                <label for="signup-email">"Email"</label>
                <input
                    id="signup-email"
                    type="email"
                    class=field_class(errors, Field::Email)
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <FieldError errors=errors field=Field::Email />

                <label for="signup-password">"Password"</label>
                <input
                    id="signup-password"
                    type="password"
                    class=field_class(errors, Field::Password)
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <FieldError errors=errors field=Field::Password />

                <label class=move || {
                    if errors.with(|errors| errors.has(Field::AgreeTerms)) { "terms invalid" } else { "terms" }
                }>
                    <input
                        type="checkbox"
                        prop:checked=move || agree_terms.get()
                        on:change=move |ev| set_agree_terms.set(event_target_checked(&ev))
                    />
                    " I agree to the terms"
                </label>
                <FieldError errors=errors field=Field::AgreeTerms />

                <button type="submit" class="primary-btn" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Creating account..." } else { "Sign Up" }}
                </button>
            </form>
        </div>
    }
}
