use super::*;

#[test]
fn form_endpoint_has_expected_prefix() {
    assert!(FORM_ENDPOINT.starts_with(FORM_ENDPOINT_PREFIX));
    assert!(FORM_ENDPOINT.len() > FORM_ENDPOINT_PREFIX.len());
}

#[test]
fn section_anchors_are_why_features_contact() {
    let ids: Vec<&str> = SECTION_ANCHORS.iter().map(|a| a.id).collect();
    assert_eq!(ids, ["why", "features", "contact"]);
}

#[test]
fn anchor_href_is_fragment_link() {
    assert_eq!(ANCHOR_CONTACT.href(), "#contact");
}

#[test]
fn brand_initial_is_uppercase_first_letter() {
    assert_eq!(brand_initial(), 'L');
}

#[test]
fn logo_path_is_absolute() {
    assert!(LOGO_PATH.starts_with('/'));
}
