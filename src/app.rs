//! Root application component with routing, guards, and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::guards::{AuthGuard, GuestGuard, RoleGuard};
use crate::net::types::User;
use crate::pages::{
    dashboard::DashboardPage, home::HomePage, instructor::InstructorPage, login::LoginPage,
    register::RegisterPage,
};
use crate::state::auth::Auth;
use crate::state::cart::{self, CartState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth and cart contexts, kicks off the one-shot session
/// initialization, and wires the cart subscription before routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = Auth::provide();
    let cart = RwSignal::new(CartState::default());
    provide_context(cart);
    cart::subscribe_to_sign_in(auth, cart);

    // Resolve the stored token once. Effects only run in the browser, so
    // SSR renders the pre-initialization loading state under the guards.
    Effect::new(move || {
        leptos::task::spawn_local(async move { auth.initialize().await });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/learnhub.css"/>
        <Title text="LearnHub"/>

        <Router>
            <NavBar/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route
                    path=(StaticSegment("auth"), StaticSegment("login"))
                    view=|| {
                        view! {
                            <GuestGuard>
                                <LoginPage/>
                            </GuestGuard>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("auth"), StaticSegment("register"))
                    view=|| {
                        view! {
                            <GuestGuard>
                                <RegisterPage/>
                            </GuestGuard>
                        }
                    }
                />
                <Route
                    path=StaticSegment("dashboard")
                    view=|| {
                        view! {
                            <AuthGuard>
                                <DashboardPage/>
                            </AuthGuard>
                        }
                    }
                />
                <Route
                    path=StaticSegment("instructor")
                    view=|| {
                        view! {
                            <RoleGuard predicate=User::is_instructor>
                                <InstructorPage/>
                            </RoleGuard>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}
