//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r#"# TeamSpeak GSI bridge configuration
# Only override what you want to change -- missing fields use defaults.
# Documents are always posted to http://localhost:9088.

[encoding]
# policy = "derived"       # derived, raw

[transport]
# timeout_ms = 1500        # 100-10000
# connect_timeout_ms = 500 # 50-10000

[logging]
# level = "info"           # trace, debug, info, warn, error
"#
    .to_string()
}
