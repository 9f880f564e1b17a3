//! Root application component and SSR shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::landing::LandingPage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content="Trustworthy product metrics, live dashboards, and alerts."/>
                <link rel="icon" href="/assets/logo.svg"/>
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
/// Mounts the landing page at `/`. Any other path renders a short message
/// with a link home.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/leadpage.css"/>

        <Router>
            <Routes fallback=|| view! { <p class="not-found">"Page not found. " <a href="/">"Back to home"</a></p> }>
                <Route path=StaticSegment("") view=LandingPage/>
            </Routes>
        </Router>
    }
}
