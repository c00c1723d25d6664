//! Public landing page.

use leptos::prelude::*;

use crate::routes;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"LearnHub"</h1>
            <p>"Courses from instructors who ship."</p>
            <a href=routes::AUTH_REGISTER class="btn btn--primary">
                "Get started"
            </a>
        </div>
    }
}
