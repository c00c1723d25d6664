//! Login page with an email/password form.
//!
//! A declared failure from the API (`success: false`) surfaces here as an
//! error banner — the platform's earlier client swallowed it and the form
//! just did nothing.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::routes;
use crate::state::auth::use_auth;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let query = use_query_map();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let submit = move || {
        if submitting.get_untracked() {
            return;
        }
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        if email_value.trim().is_empty() || password_value.is_empty() {
            error.set(Some("Email and password are required".to_owned()));
            return;
        }

        submitting.set(true);
        error.set(None);
        let return_to = query
            .get_untracked()
            .get("returnTo")
            .unwrap_or_else(|| routes::PATH_AFTER_LOGIN.to_owned());
        let navigate = navigate.clone();

        leptos::task::spawn_local(async move {
            match auth.login(email_value.trim(), &password_value).await {
                Ok(()) => navigate(&return_to, NavigateOptions::default()),
                Err(err) => error.set(Some(err.to_string())),
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <h1>"Log in"</h1>
            {move || error.get().map(|msg| view! { <p class="auth-page__error">{msg}</p> })}
            <form
                class="auth-page__form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    submit();
                }
            >
                <label class="auth-page__label">
                    "Email"
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-page__label">
                    "Password"
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
            <p class="auth-page__alt">
                "New here? " <a href=routes::AUTH_REGISTER>"Create an account"</a>
            </p>
        </div>
    }
}
