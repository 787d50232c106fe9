use super::*;

#[test]
fn from_vars_defaults_to_local_backend() {
    let cfg = AppConfig::from_vars(None, None).unwrap();
    assert_eq!(cfg.api_url, DEFAULT_API_URL);
    assert_eq!(cfg.bind_addr, None);
}

#[test]
fn from_vars_strips_trailing_slash() {
    let cfg = AppConfig::from_vars(Some("https://api.example.com/api/"), None).unwrap();
    assert_eq!(cfg.api_url, "https://api.example.com/api");
}

#[test]
fn from_vars_blank_api_url_falls_back_to_default() {
    let cfg = AppConfig::from_vars(Some("   "), None).unwrap();
    assert_eq!(cfg.api_url, DEFAULT_API_URL);
}

#[test]
fn from_vars_rejects_non_http_api_url() {
    let err = AppConfig::from_vars(Some("ftp://example.com"), None).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidApiUrl(_)));
}

#[test]
fn from_vars_binds_all_interfaces_on_port() {
    let cfg = AppConfig::from_vars(None, Some("8080")).unwrap();
    assert_eq!(cfg.bind_addr, Some("0.0.0.0:8080".parse().unwrap()));
}

#[test]
fn from_vars_rejects_bad_port() {
    let err = AppConfig::from_vars(None, Some("eighty")).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(p) if p == "eighty"));
}
