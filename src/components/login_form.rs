//! Login Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::form_fields::{field_class, FieldError, ServerError};
use crate::api::{self, LoginArgs};
use crate::context::{use_app_context, Page};
use crate::validation::{validate_login, Field, FormErrors};

/// Email/password login shown over the landing page
#[component]
pub fn LoginForm(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (errors, set_errors) = signal(FormErrors::default());
    let (server_error, set_server_error) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        let found = validate_login(&email_value, &password_value);
        let valid = found.is_empty();
        set_errors.set(found);
        if !valid {
            return;
        }

        set_submitting.set(true);
        set_server_error.set(None);
        spawn_local(async move {
            let args = LoginArgs {
                email: &email_value,
                password: &password_value,
            };
            match api::login(&args).await {
                Ok(user) => {
                    ctx.set_user(user);
                    ctx.navigate(Page::Generate);
                }
                Err(err) => {
                    log::warn!("[AUTH] Login failed: {}", err);
                    set_server_error.try_set(Some(err.user_message("Login failed")));
                    set_submitting.try_set(false);
                }
            }
        });
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <form class="auth-form" on:submit=submit on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2>"Welcome Back"</h2>
                    <button type="button" class="modal-close" on:click=move |_| on_close.run(())>"×"</button>
                </div>
                <ServerError message=server_error />

                <label for="login-email">"Email"</label>
                <input
                    id="login-email"
                    type="email"
                    class=field_class(errors, Field::Email)
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <FieldError errors=errors field=Field::Email />

                <label for="login-password">"Password"</label>
                <input
                    id="login-password"
                    type="password"
                    class=field_class(errors, Field::Password)
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <FieldError errors=errors field=Field::Password />

                <button type="submit" class="primary-btn" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Logging in..." } else { "Login" }}
                </button>
            </form>
        </div>
    }
}
