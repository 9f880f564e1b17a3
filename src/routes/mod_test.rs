use super::*;

#[test]
fn resolve_site_root_prefers_override() {
    let root = resolve_site_root(Some(Path::new("/srv/site")), "target/site");
    assert_eq!(root, PathBuf::from("/srv/site"));
}

#[test]
fn resolve_site_root_falls_back_to_leptos_options() {
    assert_eq!(resolve_site_root(None, "target/site"), PathBuf::from("target/site"));
}

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}
