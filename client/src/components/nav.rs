//! Top navigation bar with in-page section links.

use leptos::prelude::*;

use crate::components::logo::LogoWithFallback;
use crate::config::{ANCHOR_CONTACT, BRAND_NAME, SECTION_ANCHORS};

/// Logo, brand name, and one link per section anchor.
#[component]
pub fn SiteNav() -> impl IntoView {
    view! {
        <header class="site-nav">
            <a class="site-nav__brand" href="#">
                <LogoWithFallback/>
                <span class="site-nav__name">{BRAND_NAME}</span>
            </a>
            <nav class="site-nav__links">
                {SECTION_ANCHORS
                    .iter()
                    .map(|a| view! { <a class="site-nav__link" href=a.href()>{a.label}</a> })
                    .collect_view()}
            </nav>
            <a class="site-nav__cta" href=ANCHOR_CONTACT.href()>"Book a demo"</a>
        </header>
    }
}
