//! Home page showing the post feed.

use leptos::prelude::*;

use crate::routes;

/// Home page — the most recent posts, newest first.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h1>"Latest posts"</h1>
            </header>
            <section class="home-page__feed">
                <p class="home-page__empty">
                    "Nothing here yet. "
                    <a href=routes::NEW_POST>"Write the first post."</a>
                </p>
            </section>
        </div>
    }
}
