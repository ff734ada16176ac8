//! Top navigation bar linking the application routes.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::routes;

/// CSS class for a nav link: the active modifier is applied only when the
/// current path equals the link path exactly, matching the route table's
/// lookup semantics.
fn link_class(current: &str, path: &str) -> &'static str {
    if current == path {
        "nav-bar__link nav-bar__link--active"
    } else {
        "nav-bar__link"
    }
}

/// Navigation bar shown above every page.
#[component]
pub fn NavBar() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <nav class="nav-bar">
            <span class="nav-bar__brand">"Microblog"</span>
            <a
                href=routes::HOME
                class=move || link_class(&pathname.get(), routes::HOME)
            >
                "Home"
            </a>
            <a
                href=routes::NEW_POST
                class=move || link_class(&pathname.get(), routes::NEW_POST)
            >
                "New post"
            </a>
            <span class="nav-bar__spacer"></span>
            <a
                href=routes::LOGIN
                class=move || link_class(&pathname.get(), routes::LOGIN)
            >
                "Log in"
            </a>
            <a
                href=routes::SIGN_UP
                class=move || link_class(&pathname.get(), routes::SIGN_UP)
            >
                "Sign up"
            </a>
        </nav>
    }
}
