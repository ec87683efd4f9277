use super::*;

#[test]
fn default_config_is_valid() {
    assert!(validate(&GsiConfig::default()).is_ok());
}

#[test]
fn timeout_too_small() {
    let mut config = GsiConfig::default();
    config.transport.timeout_ms = 10;
    config.transport.connect_timeout_ms = 10;

    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("transport.timeout_ms = 10 is out of range [100, 10000]"));
    assert!(err.contains("transport.connect_timeout_ms = 10 is out of range [50, 10000]"));
}

#[test]
fn timeout_too_large() {
    let mut config = GsiConfig::default();
    config.transport.timeout_ms = 30_000;

    let err = validate(&config).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError(_)));
}

#[test]
fn connect_timeout_above_request_timeout() {
    let mut config = GsiConfig::default();
    config.transport.timeout_ms = 200;
    config.transport.connect_timeout_ms = 800;

    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("exceeds transport.timeout_ms"));
}
