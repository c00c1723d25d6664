//! Top navigation bar with auth-aware links and the cart badge.

use leptos::prelude::*;

use crate::net::types::User;
use crate::routes;
use crate::state::auth::use_auth;
use crate::state::cart::CartState;

/// Site-wide header. Logout only clears the session; the active route's
/// guard performs any redirect that follows.
#[component]
pub fn NavBar() -> impl IntoView {
    let auth = use_auth();
    let cart = expect_context::<RwSignal<CartState>>();

    view! {
        <header class="nav-bar">
            <a href=routes::HOME class="nav-bar__brand">"LearnHub"</a>
            <nav class="nav-bar__links">
                {move || {
                    let session = auth.session().get();
                    if session.is_authenticated {
                        let name = session
                            .user
                            .as_ref()
                            .and_then(|u| u.display_name())
                            .unwrap_or("Account")
                            .to_owned();
                        let instructor = session
                            .user
                            .as_ref()
                            .is_some_and(User::is_instructor);
                        view! {
                            <a href=routes::DASHBOARD>"Dashboard"</a>
                            {instructor
                                .then(|| {
                                    view! { <a href=routes::INSTRUCTOR>"Instructor studio"</a> }
                                })}
                            <span class="nav-bar__user">{name}</span>
                            <span class="nav-bar__cart">
                                {move || format!("Cart ({})", cart.get().count())}
                            </span>
                            <button class="btn" on:click=move |_| auth.logout()>
                                "Log out"
                            </button>
                        }
                            .into_any()
                    } else {
                        view! {
                            <a href=routes::AUTH_LOGIN>"Log in"</a>
                            <a href=routes::AUTH_REGISTER>"Sign up"</a>
                        }
                            .into_any()
                    }
                }}
            </nav>
        </header>
    }
}
