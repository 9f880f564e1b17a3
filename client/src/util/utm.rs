//! UTM attribution capture.
//!
//! Reads the allow-listed `utm_*` keys from the page query string once at
//! mount. Other keys are ignored, empty values are treated as absent, and
//! the first occurrence of a repeated key wins.

#[cfg(test)]
#[path = "utm_test.rs"]
mod utm_test;

use std::borrow::Cow;

use serde::Serialize;

/// Query keys captured for attribution.
pub const UTM_KEYS: [&str; 5] = ["utm_source", "utm_medium", "utm_campaign", "utm_term", "utm_content"];

/// Captured UTM values. Absent keys are omitted when serialized.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct UtmParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_medium: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_campaign: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_term: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_content: Option<String>,
}

impl UtmParams {
    /// Parse a query string, with or without the leading `?`.
    pub fn from_query(query: &str) -> Self {
        let mut params = Self::default();
        let query = query.strip_prefix('?').unwrap_or(query);
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = decode_component(raw_key);
            let Some(slot) = params.slot_mut(&key) else {
                continue;
            };
            if slot.is_some() {
                continue;
            }
            let value = decode_component(raw_value);
            if !value.is_empty() {
                *slot = Some(value);
            }
        }
        params
    }

    /// Parse the current page URL. Empty outside the browser.
    pub fn from_location() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let search = web_sys::window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            Self::from_query(&search)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    fn slot_mut(&mut self, key: &str) -> Option<&mut Option<String>> {
        match key {
            "utm_source" => Some(&mut self.utm_source),
            "utm_medium" => Some(&mut self.utm_medium),
            "utm_campaign" => Some(&mut self.utm_campaign),
            "utm_term" => Some(&mut self.utm_term),
            "utm_content" => Some(&mut self.utm_content),
            _ => None,
        }
    }
}

/// `application/x-www-form-urlencoded` decoding: `+` is a space, then
/// percent escapes. Malformed escapes fall back to the raw text.
fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced).map_or_else(|_| spaced.clone(), Cow::into_owned)
}
