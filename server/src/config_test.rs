use super::*;

#[test]
fn from_values_defaults() {
    let cfg = ServerConfig::from_values(None, None).unwrap();
    assert_eq!(cfg, ServerConfig { port: DEFAULT_PORT, site_root: None });
}

#[test]
fn from_values_parses_overrides() {
    let cfg = ServerConfig::from_values(Some(" 8080 "), Some("/srv/campus/site")).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.site_root, Some(PathBuf::from("/srv/campus/site")));
}

#[test]
fn from_values_treats_blank_as_unset() {
    let cfg = ServerConfig::from_values(Some(""), Some("   ")).unwrap();
    assert_eq!(cfg, ServerConfig { port: DEFAULT_PORT, site_root: None });
}

#[test]
fn from_values_rejects_bad_port() {
    assert_eq!(ServerConfig::from_values(Some("http"), None), Err(ConfigError::InvalidPort("http".into())));
    assert_eq!(ServerConfig::from_values(Some("70000"), None), Err(ConfigError::InvalidPort("70000".into())));
}

#[test]
fn config_error_messages() {
    assert_eq!(ConfigError::InvalidPort("x".into()).to_string(), "invalid PORT 'x'");
    assert_eq!(ConfigError::Leptos("missing".into()).to_string(), "leptos configuration: missing");
}

#[test]
fn dotenv_failure_ignores_loaded_and_missing_files() {
    assert!(dotenv_failure(&Ok(PathBuf::from(".env"))).is_none());
    let missing = Err(dotenvy::Error::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "no .env")));
    assert!(dotenv_failure(&missing).is_none());
}

#[test]
fn dotenv_failure_reports_malformed_file() {
    let malformed = Err(dotenvy::Error::LineParse("PORT 3000".into(), 4));
    assert!(dotenv_failure(&malformed).is_some());

    let unreadable = Err(dotenvy::Error::Io(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied")));
    assert!(dotenv_failure(&unreadable).is_some());
}
