//! Landing Page
//!
//! Entry screen with login and signup.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{LoginForm, SignupForm};
use crate::context::{use_app_context, Page, SessionStatus};

/// How long the "account created" notice stays up
const NOTICE_MS: u32 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthForm {
    None,
    Login,
    Signup,
}

#[component]
pub fn LandingPage() -> impl IntoView {
    let ctx = use_app_context();
    let (form, set_form) = signal(AuthForm::None);
    let (notice, set_notice) = signal(false);

    Effect::new(move |_| ctx.refresh_session());

    let close = Callback::new(move |_: ()| set_form.set(AuthForm::None));
    let registered = Callback::new(move |_: ()| {
        set_form.set(AuthForm::None);
        set_notice.set(true);
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_MS).await;
            set_notice.try_set(false);
        });
    });

    let actions = move || match ctx.session.get() {
        SessionStatus::Authenticated(user) => view! {
            <p class="welcome">"Welcome back, " {user.name} "!"</p>
            <div class="landing-actions">
                <button class="primary-btn" on:click=move |_| ctx.navigate(Page::Generate)>
                    "Start Cooking"
                </button>
                <button class="secondary-btn" on:click=move |_| ctx.logout()>"Logout"</button>
            </div>
        }
        .into_any(),
        SessionStatus::Unknown | SessionStatus::Checking => {
            view! { <p class="landing-status">"Checking session..."</p> }.into_any()
        }
        SessionStatus::Anonymous => view! {
            <div class="landing-actions">
                <button class="primary-btn" on:click=move |_| set_form.set(AuthForm::Login)>"Login"</button>
                <button class="secondary-btn" on:click=move |_| set_form.set(AuthForm::Signup)>"Sign Up"</button>
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="landing-page">
            <section class="hero">
                <h1>"Recipe Generator"</h1>
                <p class="tagline">
                    "Turn the ingredients you have into a recipe, or name a dish and get the steps."
                </p>
                {actions}
            </section>

            <Show when=move || notice.get()>
                <div class="notice success">
                    <strong>"Account Created"</strong>
                    <p>"Your account was created. Please log in."</p>
                </div>
            </Show>

            {move || match form.get() {
                AuthForm::Login => view! { <LoginForm on_close=close /> }.into_any(),
                AuthForm::Signup => view! { <SignupForm on_close=close on_registered=registered /> }.into_any(),
                AuthForm::None => ().into_any(),
            }}
        </div>
    }
}
