//! Account creation page.

use leptos::prelude::*;

use crate::routes;

/// Sign-up page — pick a username and password, with a link back to login.
#[component]
pub fn SignUpPage() -> impl IntoView {
    view! {
        <div class="sign-up-page">
            <div class="login-card">
                <h1>"Microblog"</h1>
                <p class="login-card__subtitle">"Create an account"</p>
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
                        "Sign up"
                    </button>
                </form>
                <p class="login-card__footer">
                    "Already registered? "
                    <a href=routes::LOGIN>"Log in."</a>
                </p>
            </div>
        </div>
    }
}
