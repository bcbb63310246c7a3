use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn from_lookup_uses_defaults_when_unset() {
    let cfg = HostConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.backend_url, DEFAULT_BACKEND_URL);
}

#[test]
fn from_lookup_reads_port_and_backend() {
    let cfg = HostConfig::from_lookup(lookup_from(&[("PORT", "8081"), ("BACKEND_URL", "https://media.internal")])).unwrap();
    assert_eq!(cfg, HostConfig { port: 8081, backend_url: "https://media.internal".to_owned() });
}

#[test]
fn from_lookup_strips_trailing_slashes() {
    let cfg = HostConfig::from_lookup(lookup_from(&[("BACKEND_URL", " http://localhost:9000// ")])).unwrap();
    assert_eq!(cfg.backend_url, "http://localhost:9000");
}

#[test]
fn from_lookup_rejects_bad_port() {
    let err = HostConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".to_owned() });
}

#[test]
fn from_lookup_rejects_non_http_backend() {
    for raw in ["ftp://media", "localhost:8080", "http://", ""] {
        let err = HostConfig::from_lookup(lookup_from(&[("BACKEND_URL", raw)])).unwrap_err();
        assert_eq!(err, ConfigError::Invalid { var: "BACKEND_URL", value: raw.to_owned() });
    }
}
