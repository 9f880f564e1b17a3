//! Compile-time site configuration.
//!
//! The page has no runtime configuration surface: the form endpoint, logo
//! path, and section anchors are fixed at build time and shared by the page,
//! the nav, and the developer self-checks.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Brand shown in the nav, hero, and fallback logo badge.
pub const BRAND_NAME: &str = "Lumen Analytics";

/// Document title set when the landing page mounts.
pub const PAGE_TITLE: &str = "Lumen Analytics | Turn product data into decisions";

/// Hosted form-processing endpoint that receives lead submissions.
pub const FORM_ENDPOINT: &str = "https://formspree.io/f/xlumenld";

/// Prefix every valid form-service endpoint must start with.
pub const FORM_ENDPOINT_PREFIX: &str = "https://formspree.io/f/";

/// Public path of the brand logo image.
pub const LOGO_PATH: &str = "/assets/logo.svg";

/// In-page section anchor with its nav label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Anchor {
    pub id: &'static str,
    pub label: &'static str,
}

impl Anchor {
    /// Fragment link targeting this anchor, e.g. `#why`.
    pub fn href(self) -> String {
        format!("#{}", self.id)
    }
}

pub const ANCHOR_WHY: Anchor = Anchor { id: "why", label: "Why Lumen" };
pub const ANCHOR_FEATURES: Anchor = Anchor { id: "features", label: "Features" };
pub const ANCHOR_CONTACT: Anchor = Anchor { id: "contact", label: "Contact" };

/// Anchors that must exist in the rendered page, in nav order.
pub const SECTION_ANCHORS: [Anchor; 3] = [ANCHOR_WHY, ANCHOR_FEATURES, ANCHOR_CONTACT];

/// First character of the brand, used by the logo fallback badge.
pub fn brand_initial() -> char {
    BRAND_NAME.chars().next().map_or('?', |c| c.to_ascii_uppercase())
}
