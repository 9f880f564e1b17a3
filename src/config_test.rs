use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg.addr, SocketAddr::new(DEFAULT_BIND_HOST.parse().unwrap(), DEFAULT_PORT));
    assert_eq!(cfg.site_root, None);
    assert!(cfg.assets_dir.ends_with("public/assets"));
}

#[test]
fn from_lookup_reads_addr_and_port() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("LEADPAGE_ADDR", "127.0.0.1"), ("PORT", "8080")])).unwrap();
    assert_eq!(cfg.addr, "127.0.0.1:8080".parse().unwrap());
}

#[test]
fn from_lookup_accepts_ipv6() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("LEADPAGE_ADDR", "::1")])).unwrap();
    assert!(cfg.addr.is_ipv6());
}

#[test]
fn from_lookup_rejects_bad_port() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".into() });
}

#[test]
fn from_lookup_rejects_port_out_of_range() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "PORT", .. }));
}

#[test]
fn from_lookup_rejects_bad_addr() {
    let err = ServerConfig::from_lookup(lookup_from(&[("LEADPAGE_ADDR", "localhost")])).unwrap_err();
    assert_eq!(err.to_string(), "invalid LEADPAGE_ADDR: \"localhost\"");
}

#[test]
fn from_lookup_blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("PORT", "  "), ("LEADPAGE_SITE_ROOT", "")])).unwrap();
    assert_eq!(cfg.addr.port(), DEFAULT_PORT);
    assert_eq!(cfg.site_root, None);
}

#[test]
fn from_lookup_reads_directory_overrides() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[
        ("LEADPAGE_SITE_ROOT", "/srv/site"),
        ("LEADPAGE_ASSETS_DIR", "/srv/assets"),
    ]))
    .unwrap();
    assert_eq!(cfg.site_root, Some(PathBuf::from("/srv/site")));
    assert_eq!(cfg.assets_dir, PathBuf::from("/srv/assets"));
}
