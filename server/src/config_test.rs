use super::*;

#[test]
fn from_vars_defaults_when_unset() {
    let cfg = ServerConfig::from_vars(None, None).unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn from_vars_blank_values_use_defaults() {
    let cfg = ServerConfig::from_vars(Some("  "), Some("")).unwrap();
    assert_eq!(cfg, ServerConfig::default());
}

#[test]
fn from_vars_parses_overrides() {
    let cfg = ServerConfig::from_vars(Some("127.0.0.1"), Some(" 8080 ")).unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn from_vars_accepts_ipv6() {
    let cfg = ServerConfig::from_vars(Some("::1"), Some("443")).unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "[::1]:443");
}

#[test]
fn from_vars_rejects_bad_port() {
    for raw in ["abc", "0", "70000", "-1"] {
        assert_eq!(
            ServerConfig::from_vars(None, Some(raw)),
            Err(ConfigError::InvalidPort(raw.to_owned())),
            "expected {raw:?} to be rejected"
        );
    }
}

#[test]
fn from_vars_rejects_bad_host() {
    assert_eq!(
        ServerConfig::from_vars(Some("localhost"), None),
        Err(ConfigError::InvalidHost("localhost".to_owned()))
    );
}

#[test]
fn config_error_messages_name_the_variable() {
    assert_eq!(ConfigError::InvalidPort("x".into()).to_string(), "invalid PORT 'x': expected 1-65535");
    assert_eq!(ConfigError::InvalidHost("y".into()).to_string(), "invalid HOST 'y': expected an IP address");
}
