//! Developer smoke checks for non-production builds.
//!
//! Confirms the form endpoint looks like the hosted form service and that
//! every section anchor the nav links to exists in the document. Failures
//! are console warnings only. Release builds compile `run_in_document` to
//! a no-op.

#[cfg(test)]
#[path = "dev_checks_test.rs"]
mod dev_checks_test;

use crate::config::{FORM_ENDPOINT, FORM_ENDPOINT_PREFIX, SECTION_ANCHORS};

/// A failed smoke check.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DevCheckFailure {
    #[error("form endpoint {endpoint} does not start with {prefix}")]
    EndpointPrefix { endpoint: String, prefix: &'static str },

    #[error("missing section anchor #{0}")]
    MissingAnchor(&'static str),
}

pub fn check_endpoint(endpoint: &str) -> Option<DevCheckFailure> {
    if endpoint.starts_with(FORM_ENDPOINT_PREFIX) {
        None
    } else {
        Some(DevCheckFailure::EndpointPrefix { endpoint: endpoint.to_owned(), prefix: FORM_ENDPOINT_PREFIX })
    }
}

/// Anchors for which `has_id` answers `false`.
pub fn missing_anchors(has_id: impl Fn(&str) -> bool) -> Vec<DevCheckFailure> {
    SECTION_ANCHORS
        .iter()
        .filter(|a| !has_id(a.id))
        .map(|a| DevCheckFailure::MissingAnchor(a.id))
        .collect()
}

/// Run every check against the configured endpoint and the given id lookup.
pub fn run_all(has_id: impl Fn(&str) -> bool) -> Vec<DevCheckFailure> {
    let mut failures: Vec<DevCheckFailure> = check_endpoint(FORM_ENDPOINT).into_iter().collect();
    failures.extend(missing_anchors(has_id));
    failures
}

/// Run the checks against the live document. Browser debug builds only.
pub fn run_in_document() {
    #[cfg(all(feature = "hydrate", debug_assertions))]
    {
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            leptos::logging::warn!("dev checks skipped: no document");
            return;
        };
        let failures = run_all(|id| doc.get_element_by_id(id).is_some());
        if failures.is_empty() {
            leptos::logging::log!("dev checks passed");
        }
        for failure in failures {
            leptos::logging::warn!("dev check failed: {failure}");
        }
    }
}
