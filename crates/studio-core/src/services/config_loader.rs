use std::path::Path;

use crate::error::{ControlError, Result};
use crate::models::ControlConfig;

pub const CONFIG_FILENAME: &str = ".studio-control.yaml";

/// Load a config file from an explicit path.
pub fn load(config_path: &Path) -> Result<ControlConfig> {
    if !config_path.exists() {
        return Err(ControlError::ConfigNotFound(config_path.to_path_buf()));
    }
    let contents = std::fs::read_to_string(config_path)?;
    let config: ControlConfig = serde_yaml::from_str(&contents)
        .map_err(|e| ControlError::InvalidConfig(e.to_string()))?;
    if config.host.trim().is_empty() {
        return Err(ControlError::InvalidConfig("host must not be empty".into()));
    }
    if config.scheme.trim().is_empty() {
        return Err(ControlError::InvalidConfig("scheme must not be empty".into()));
    }
    Ok(config)
}

/// Load `.studio-control.yaml` from `dir`, falling back to defaults when absent.
pub fn load_or_default(dir: &Path) -> Result<ControlConfig> {
    match load(&dir.join(CONFIG_FILENAME)) {
        Ok(config) => Ok(config),
        Err(ControlError::ConfigNotFound(path)) => {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(ControlConfig::default())
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn parse_full_config() {
        let dir = tempfile::tempdir().unwrap();
        let yaml = r#"
scheme: https
host: deploy.internal
port: 8443
"#;
        fs::write(dir.path().join(CONFIG_FILENAME), yaml).unwrap();
        let config = load_or_default(dir.path()).unwrap();
        assert_eq!(config.scheme, "https");
        assert_eq!(config.host, "deploy.internal");
        assert_eq!(config.port, 8443);
        assert_eq!(config.base_url(), "https://deploy.internal:8443");
    }

    #[test]
    fn parse_minimal_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "host: 10.0.0.4\n").unwrap();
        let config = load_or_default(dir.path()).unwrap();
        assert_eq!(config.base_url(), "http://10.0.0.4:5000");
    }

    #[test]
    fn missing_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_or_default(dir.path()).unwrap();
        assert_eq!(config, ControlConfig::default());
        assert_eq!(config.base_url(), "http://localhost:5000");
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load(&dir.path().join("nope.yaml")),
            Err(ControlError::ConfigNotFound(_))
        ));
    }

    #[test]
    fn empty_host_is_invalid() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "host: \"\"\n").unwrap();
        assert!(matches!(
            load_or_default(dir.path()),
            Err(ControlError::InvalidConfig(_))
        ));
    }

    #[test]
    fn bad_port_is_invalid() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "port: not-a-port\n").unwrap();
        assert!(matches!(
            load_or_default(dir.path()),
            Err(ControlError::InvalidConfig(_))
        ));
    }
}
