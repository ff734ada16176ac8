//! Post composer page.

use leptos::prelude::*;

/// New-post page — title and content fields plus a publish button.
#[component]
pub fn NewPostPage() -> impl IntoView {
    view! {
        <div class="new-post-page">
            <h1>"New post"</h1>
            <form class="new-post-form">
                <input
                    class="new-post-form__title"
                    type="text"
                    placeholder="Title"
                />
                <textarea
                    class="new-post-form__content"
                    rows="12"
                    placeholder="Write something..."
                ></textarea>
                <button class="btn btn--primary" type="submit">
                    "Publish"
                </button>
            </form>
        </div>
    }
}
