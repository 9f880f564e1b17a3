//! Brand logo with an initial-letter fallback.
//!
//! DESIGN
//! ======
//! The `<img>` is rendered until its `error` event fires, then the component
//! latches to a styled badge for the rest of the page view. There is no
//! retry. An image that failed before hydration attached the listener is
//! caught by checking `complete` with zero natural width after mount.

use leptos::prelude::*;

use crate::config::{BRAND_NAME, LOGO_PATH, brand_initial};
use crate::state::logo::LogoState;

#[component]
pub fn LogoWithFallback() -> impl IntoView {
    let logo = RwSignal::new(LogoState::default());
    let img_ref = NodeRef::<leptos::html::Img>::new();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let Some(img) = img_ref.get() else {
            return;
        };
        if img.complete() && img.natural_width() == 0 {
            logo.maybe_update(LogoState::mark_broken);
        }
    });

    view! {
        <Show
            when=move || !logo.get().is_broken()
            fallback=|| view! {
                <span class="logo logo--fallback" role="img" aria-label=BRAND_NAME>
                    {brand_initial().to_string()}
                </span>
            }
        >
            <img
                class="logo"
                src=LOGO_PATH
                alt=BRAND_NAME
                width="32"
                height="32"
                node_ref=img_ref
                on:error=move |_| {
                    logo.maybe_update(LogoState::mark_broken);
                }
            />
        </Show>
    }
}
