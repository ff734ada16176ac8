//! Login page.

use leptos::prelude::*;

use crate::routes;

/// Login page — username and password form, with a link to account creation.
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Microblog"</h1>
                <p class="login-card__subtitle">"Log in"</p>
                <form class="login-form">
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                    />
                    <button class="login-button" type="submit">
                        "Log in"
                    </button>
                </form>
                <p class="login-card__footer">
                    "No account? "
                    <a href=routes::SIGN_UP>"Sign up."</a>
                </p>
            </div>
        </div>
    }
}
