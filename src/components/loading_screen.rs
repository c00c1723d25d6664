//! Full-screen loading indicator.

use leptos::prelude::*;

/// Shown by guards while the session is still initializing.
#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="loading-screen__spinner"></div>
            <p>"Loading..."</p>
        </div>
    }
}
