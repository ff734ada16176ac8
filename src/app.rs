//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::routes;

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
/// Sets up client-side routing over the static route table in [`routes`].
/// Each `<Route>` pulls its segment and view from the table so the binding
/// is declared in exactly one place.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/microblog.css"/>
        <Title text="Microblog"/>

        <Router>
            <NavBar/>
            <main class="app-content">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route
                        path=StaticSegment(routes::segment(routes::HOME))
                        view=|| routes::render(routes::HOME)
                    />
                    <Route
                        path=StaticSegment(routes::segment(routes::NEW_POST))
                        view=|| routes::render(routes::NEW_POST)
                    />
                    <Route
                        path=StaticSegment(routes::segment(routes::LOGIN))
                        view=|| routes::render(routes::LOGIN)
                    />
                    <Route
                        path=StaticSegment(routes::segment(routes::SIGN_UP))
                        view=|| routes::render(routes::SIGN_UP)
                    />
                </Routes>
            </main>
        </Router>
    }
}
