//! Static route table mapping URL paths to page views.
//!
//! The table is built once as a `static` and never mutated; path matching
//! itself is `leptos_router`'s job. This module only declares which view
//! belongs to which path and answers exact-match lookups against that
//! declaration.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use leptos::prelude::*;

use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::new_post::NewPostPage;
use crate::pages::sign_up::SignUpPage;

/// Path of the home feed.
pub const HOME: &str = "/";
/// Path of the post composer.
pub const NEW_POST: &str = "/new-post";
/// Path of the login page.
pub const LOGIN: &str = "/login";
/// Path of the account creation page.
pub const SIGN_UP: &str = "/sign-up";

/// Constructor for the view rendered at a path.
pub type ViewFn = fn() -> AnyView;

/// One path-to-view binding.
pub struct RouteEntry {
    pub path: &'static str,
    pub view: ViewFn,
}

/// Every route the application serves.
///
/// Paths are unique. The table is a plain `static`, so it cannot be mutated
/// after load.
pub static ROUTES: [RouteEntry; 4] = [
    RouteEntry { path: HOME, view: home },
    RouteEntry { path: NEW_POST, view: new_post },
    RouteEntry { path: LOGIN, view: login },
    RouteEntry { path: SIGN_UP, view: sign_up },
];

fn home() -> AnyView {
    HomePage().into_any()
}

fn new_post() -> AnyView {
    NewPostPage().into_any()
}

fn login() -> AnyView {
    LoginPage().into_any()
}

fn sign_up() -> AnyView {
    SignUpPage().into_any()
}

/// Exact-match lookup of the view constructor registered for `path`.
///
/// No normalization is applied: trailing slashes, case variants, and
/// relative paths all miss.
pub fn view_for(path: &str) -> Option<ViewFn> {
    ROUTES.iter().find(|entry| entry.path == path).map(|entry| entry.view)
}

/// Render the view registered at `path`.
///
/// Falls back to the not-found message for paths absent from the table, so
/// callers never have to unwrap.
pub fn render(path: &str) -> AnyView {
    match view_for(path) {
        Some(view) => view(),
        None => view! { <p class="not-found">"Page not found."</p> }.into_any(),
    }
}

/// Path with the leading slash stripped — the form `leptos_router` declares
/// static segments in. The root path maps to the empty segment.
pub fn segment(path: &'static str) -> &'static str {
    path.trim_start_matches('/')
}
