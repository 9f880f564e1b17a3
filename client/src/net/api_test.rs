use std::cell::RefCell;

use futures::executor::block_on;

use super::*;
use crate::state::lead_form::FormValues;
use crate::util::utm::UtmParams;

struct RecordingTransport {
    reply: Result<u16, String>,
    sent: RefCell<Vec<(String, String)>>,
}

impl RecordingTransport {
    fn replying(reply: Result<u16, String>) -> Self {
        Self { reply, sent: RefCell::new(Vec::new()) }
    }
}

impl LeadTransport for RecordingTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<u16, String> {
        self.sent.borrow_mut().push((url.to_owned(), body));
        self.reply.clone()
    }
}

fn ada_payload() -> LeadPayload {
    let values = FormValues { name: "Ada".into(), email: "ada@example.com".into(), ..FormValues::default() };
    LeadPayload::new(values, UtmParams::default())
}

// =============================================================
// Status classification
// =============================================================

#[test]
fn success_range_is_2xx() {
    assert!(is_success_status(200));
    assert!(is_success_status(201));
    assert!(is_success_status(299));
    assert!(!is_success_status(199));
    assert!(!is_success_status(300));
    assert!(!is_success_status(422));
    assert!(!is_success_status(500));
}

// =============================================================
// submit_lead
// =============================================================

#[test]
fn submit_lead_posts_once_to_form_endpoint() {
    let transport = RecordingTransport::replying(Ok(200));
    assert_eq!(block_on(submit_lead(&transport, &ada_payload())), Ok(()));

    let sent = transport.sent.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, FORM_ENDPOINT);
    let body: serde_json::Value = serde_json::from_str(&sent[0].1).unwrap();
    assert_eq!(body["name"], "Ada");
    assert_eq!(body["email"], "ada@example.com");
}

#[test]
fn submit_lead_maps_non_2xx_to_status_error() {
    let transport = RecordingTransport::replying(Ok(500));
    assert_eq!(block_on(submit_lead(&transport, &ada_payload())), Err(SubmitError::Status(500)));
}

#[test]
fn submit_lead_maps_transport_failure_to_network_error() {
    let transport = RecordingTransport::replying(Err("Failed to fetch".into()));
    assert_eq!(
        block_on(submit_lead(&transport, &ada_payload())),
        Err(SubmitError::Network("Failed to fetch".into()))
    );
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_transport_is_unavailable_outside_browser() {
    let result = block_on(submit_lead(&BrowserTransport, &ada_payload()));
    assert_eq!(result, Err(SubmitError::Network("not available on server".into())));
}

// =============================================================
// User-facing messages
// =============================================================

#[test]
fn status_error_shows_generic_submission_failure() {
    assert_eq!(SubmitError::Status(503).user_message(), SUBMISSION_FAILED_MESSAGE);
}

#[test]
fn network_error_shows_its_own_message() {
    assert_eq!(SubmitError::Network("Failed to fetch".into()).user_message(), "Failed to fetch");
}

#[test]
fn blank_network_error_falls_back_to_generic() {
    assert_eq!(SubmitError::Network("  ".into()).user_message(), GENERIC_ERROR_MESSAGE);
}

#[test]
fn encode_error_falls_back_to_generic() {
    assert_eq!(SubmitError::Encode("bad".into()).user_message(), GENERIC_ERROR_MESSAGE);
}

#[test]
fn display_includes_status_for_logs() {
    assert_eq!(SubmitError::Status(404).to_string(), "form service returned status 404");
}
