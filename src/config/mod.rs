//! Configuration loading and management

use crate::core::error::ConfigError;
use crate::render::EscapeMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind (e.g., "0.0.0.0:3000")
    pub bind: String,

    /// Name reported by the health endpoints
    pub service_name: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3000".to_string(),
            service_name: "leasedoc".to_string(),
        }
    }
}

/// Override files for the built-in fallback templates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackTemplatePaths {
    pub invoice: Option<PathBuf>,
    pub receipt: Option<PathBuf>,
}

/// Rendering behaviour
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// How substituted values are escaped
    pub escape: EscapeMode,

    pub fallback_templates: FallbackTemplatePaths,
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, overridden by `RUST_LOG`
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

/// Complete service configuration
///
/// Every section is optional in YAML; missing keys take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsConfig {
    pub server: ServerConfig,
    pub rendering: RenderingConfig,
    pub logging: LoggingConfig,
}

impl DocsConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Create a default configuration for testing
    pub fn default_config() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = DocsConfig::default_config();

        assert_eq!(config.server.bind, "127.0.0.1:3000");
        assert_eq!(config.server.service_name, "leasedoc");
        assert_eq!(config.rendering.escape, EscapeMode::Html);
        assert_eq!(config.rendering.fallback_templates, FallbackTemplatePaths::default());
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_from_yaml_str() {
        let yaml = r#"
server:
  bind: "0.0.0.0:8080"
rendering:
  escape: none
  fallback_templates:
    receipt: /etc/leasedoc/receipt.html
logging:
  filter: "leasedoc=debug,tower_http=info"
"#;

        let config = DocsConfig::from_yaml_str(yaml).unwrap();

        assert_eq!(config.server.bind, "0.0.0.0:8080");
        // Unset keys keep their defaults
        assert_eq!(config.server.service_name, "leasedoc");
        assert_eq!(config.rendering.escape, EscapeMode::None);
        assert_eq!(config.rendering.fallback_templates.invoice, None);
        assert_eq!(
            config.rendering.fallback_templates.receipt,
            Some(PathBuf::from("/etc/leasedoc/receipt.html"))
        );
        assert_eq!(config.logging.filter, "leasedoc=debug,tower_http=info");
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(DocsConfig::from_yaml_str("{}").unwrap(), DocsConfig::default());
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let err = DocsConfig::from_yaml_str("rendering:\n  escape: maybe\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_from_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "server:\n  service_name: docs-eu").unwrap();

        let config = DocsConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(config.server.service_name, "docs-eu");

        let err = DocsConfig::from_yaml_file("/nonexistent/leasedoc.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
