use super::*;

#[test]
fn configured_endpoint_passes() {
    assert_eq!(check_endpoint(FORM_ENDPOINT), None);
}

#[test]
fn foreign_endpoint_fails_with_prefix_in_message() {
    let failure = check_endpoint("https://example.com/submit").unwrap();
    assert_eq!(
        failure.to_string(),
        format!("form endpoint https://example.com/submit does not start with {FORM_ENDPOINT_PREFIX}")
    );
}

#[test]
fn missing_anchors_empty_when_all_present() {
    assert!(missing_anchors(|_| true).is_empty());
}

#[test]
fn missing_anchors_reports_each_absent_id() {
    let failures = missing_anchors(|id| id == "why");
    assert_eq!(
        failures,
        vec![DevCheckFailure::MissingAnchor("features"), DevCheckFailure::MissingAnchor("contact")]
    );
}

#[test]
fn run_all_combines_checks() {
    let failures = run_all(|_| false);
    assert_eq!(failures.len(), SECTION_ANCHORS.len());
    assert!(run_all(|_| true).is_empty());
}

#[test]
fn run_in_document_is_callable_outside_browser() {
    run_in_document();
}
