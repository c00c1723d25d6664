//! Instructor area landing page. Reached only through `RoleGuard`.

use leptos::prelude::*;

#[component]
pub fn InstructorPage() -> impl IntoView {
    view! {
        <div class="instructor-page">
            <h1>"Instructor studio"</h1>
            <p>"Manage your courses and roadmaps."</p>
        </div>
    }
}
