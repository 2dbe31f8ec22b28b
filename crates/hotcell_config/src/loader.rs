//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::HostConfig;
use std::path::Path;

/// Loads and validates a `hotcell.toml` configuration from a host directory.
///
/// Reads `<host_dir>/hotcell.toml`, parses it, and validates required fields.
pub fn load_config(host_dir: &Path) -> Result<HostConfig, ConfigError> {
    let config_path = host_dir.join("hotcell.toml");
    let content = std::fs::read_to_string(&config_path)?;
    load_config_from_str(&content)
}

/// Parses and validates a `hotcell.toml` configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<HostConfig, ConfigError> {
    let config: HostConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Validates that required fields are present and configuration values are
/// consistent.
fn validate_config(config: &HostConfig) -> Result<(), ConfigError> {
    if config.cell.identifier.is_empty() {
        return Err(ConfigError::MissingField("cell.identifier".to_string()));
    }
    if config.resolver.root.as_os_str().is_empty() {
        return Err(ConfigError::MissingField("resolver.root".to_string()));
    }
    // Identifiers are resolved under the root; an absolute identifier
    // would escape it (Path::join discards the root for absolute paths).
    if std::path::Path::new(&config.cell.identifier).is_absolute() {
        return Err(ConfigError::ValidationError(
            "cell.identifier must be a relative path".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_config() {
        let toml = r#"
[cell]
identifier = "rules/pricing.expr"

[resolver]
root = "scripts"
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.cell.identifier, "rules/pricing.expr");
        assert!(!config.cell.synchronized);
        assert_eq!(config.resolver.root.to_str(), Some("scripts"));
    }

    #[test]
    fn parse_synchronized_config() {
        let toml = r#"
[cell]
identifier = "rules/pricing.expr"
synchronized = true

[resolver]
root = "/srv/rules"
"#;
        let config = load_config_from_str(toml).unwrap();
        assert!(config.cell.synchronized);
    }

    #[test]
    fn empty_identifier_rejected() {
        let toml = r#"
[cell]
identifier = ""

[resolver]
root = "scripts"
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField(f) if f == "cell.identifier"));
    }

    #[test]
    fn empty_root_rejected() {
        let toml = r#"
[cell]
identifier = "rule.expr"

[resolver]
root = ""
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField(f) if f == "resolver.root"));
    }

    #[test]
    fn absolute_identifier_rejected() {
        let toml = r#"
[cell]
identifier = "/etc/rule.expr"

[resolver]
root = "scripts"
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(
            matches!(err, ConfigError::ValidationError(ref m) if m.contains("relative")),
            "expected validation error, got {err}"
        );
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let err = load_config_from_str("[cell\nidentifier = ").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("hotcell.toml"),
            "[cell]\nidentifier = \"a.expr\"\n\n[resolver]\nroot = \"scripts\"\n",
        )
        .unwrap();

        let config = load_config(dir.path()).unwrap();
        assert_eq!(config.cell.identifier, "a.expr");
    }

    #[test]
    fn load_from_directory_without_config_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
