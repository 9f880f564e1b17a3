//! Page footer.

use leptos::prelude::*;

use crate::config::{BRAND_NAME, SECTION_ANCHORS};

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <span class="site-footer__brand">{BRAND_NAME}</span>
            <nav class="site-footer__links">
                {SECTION_ANCHORS
                    .iter()
                    .map(|a| view! { <a href=a.href()>{a.label}</a> })
                    .collect_view()}
            </nav>
            <span class="site-footer__legal">"We only use your details to follow up on your request."</span>
        </footer>
    }
}
