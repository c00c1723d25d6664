//! Registration page. Same submission contract as login: a declared
//! failure from the API renders as an error banner.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::routes;
use crate::state::auth::use_auth;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let submit = move || {
        if submitting.get_untracked() {
            return;
        }
        let first_value = first_name.get_untracked();
        let last_value = last_name.get_untracked();
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        if first_value.trim().is_empty()
            || last_value.trim().is_empty()
            || email_value.trim().is_empty()
            || password_value.is_empty()
        {
            error.set(Some("All fields are required".to_owned()));
            return;
        }

        submitting.set(true);
        error.set(None);
        let navigate = navigate.clone();

        leptos::task::spawn_local(async move {
            let result = auth
                .register(
                    email_value.trim(),
                    &password_value,
                    first_value.trim(),
                    last_value.trim(),
                )
                .await;
            match result {
                Ok(()) => navigate(routes::PATH_AFTER_LOGIN, NavigateOptions::default()),
                Err(err) => error.set(Some(err.to_string())),
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <h1>"Create an account"</h1>
            {move || error.get().map(|msg| view! { <p class="auth-page__error">{msg}</p> })}
            <form
                class="auth-page__form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    submit();
                }
            >
                <label class="auth-page__label">
                    "First name"
                    <input
                        type="text"
                        prop:value=move || first_name.get()
                        on:input=move |ev| first_name.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-page__label">
                    "Last name"
                    <input
                        type="text"
                        prop:value=move || last_name.get()
                        on:input=move |ev| last_name.set(event_target_value(&ev))
                    />
                </label>
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
                    {move || if submitting.get() { "Creating..." } else { "Sign up" }}
                </button>
            </form>
            <p class="auth-page__alt">
                "Already registered? " <a href=routes::AUTH_LOGIN>"Log in"</a>
            </p>
        </div>
    }
}
