//! Authenticated dashboard landing page.

use leptos::prelude::*;

use crate::state::auth::use_auth;

/// Greets the signed-in user. Reached only through `AuthGuard`, so the
/// session is authenticated whenever this renders.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();

    let greeting = move || {
        auth.session()
            .get()
            .user
            .as_ref()
            .and_then(|u| u.display_name())
            .map_or_else(
                || "Welcome back".to_owned(),
                |name| format!("Welcome back, {name}"),
            )
    };

    view! {
        <div class="dashboard-page">
            <h1>{greeting}</h1>
            <p>"Pick up where you left off."</p>
        </div>
    }
}
