use super::*;

#[test]
fn from_query_captures_source_and_medium_only() {
    let utm = UtmParams::from_query("?utm_source=newsletter&utm_medium=email");
    assert_eq!(utm.utm_source.as_deref(), Some("newsletter"));
    assert_eq!(utm.utm_medium.as_deref(), Some("email"));
    assert!(utm.utm_campaign.is_none());
    assert!(utm.utm_term.is_none());
    assert!(utm.utm_content.is_none());
}

#[test]
fn from_query_accepts_missing_question_mark() {
    let utm = UtmParams::from_query("utm_campaign=spring");
    assert_eq!(utm.utm_campaign.as_deref(), Some("spring"));
}

#[test]
fn from_query_ignores_keys_outside_allow_list() {
    let utm = UtmParams::from_query("?ref=abc&utm_id=7&gclid=xyz");
    assert!(utm.is_empty());
}

#[test]
fn from_query_decodes_plus_and_percent_escapes() {
    let utm = UtmParams::from_query("?utm_term=rust+web%20dev&utm_content=a%2Bb");
    assert_eq!(utm.utm_term.as_deref(), Some("rust web dev"));
    assert_eq!(utm.utm_content.as_deref(), Some("a+b"));
}

#[test]
fn from_query_first_occurrence_wins() {
    let utm = UtmParams::from_query("?utm_source=first&utm_source=second");
    assert_eq!(utm.utm_source.as_deref(), Some("first"));
}

#[test]
fn from_query_treats_empty_values_as_absent() {
    let utm = UtmParams::from_query("?utm_source=&utm_medium&utm_term=x");
    assert!(utm.utm_source.is_none());
    assert!(utm.utm_medium.is_none());
    assert_eq!(utm.utm_term.as_deref(), Some("x"));
}

#[test]
fn from_query_empty_string_is_empty() {
    assert!(UtmParams::from_query("").is_empty());
    assert!(UtmParams::from_query("?").is_empty());
}

#[test]
fn serialize_omits_absent_keys() {
    let utm = UtmParams::from_query("?utm_source=newsletter&utm_medium=email");
    let json = serde_json::to_value(&utm).unwrap();
    assert_eq!(json, serde_json::json!({ "utm_source": "newsletter", "utm_medium": "email" }));
}

#[test]
fn utm_keys_match_struct_fields() {
    let query = UTM_KEYS
        .iter()
        .map(|k| format!("{k}=v"))
        .collect::<Vec<_>>()
        .join("&");
    let json = serde_json::to_value(UtmParams::from_query(&query)).unwrap();
    let obj = json.as_object().unwrap();
    assert_eq!(obj.len(), UTM_KEYS.len());
    for key in UTM_KEYS {
        assert_eq!(obj.get(key).and_then(|v| v.as_str()), Some("v"));
    }
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn from_location_is_empty_outside_browser() {
    assert!(UtmParams::from_location().is_empty());
}
