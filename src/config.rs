//! Admin Service Configuration
//!
//! Loaded from a JSON file. Every field has a default, so `{}` is a
//! valid configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{AdminError, AdminResult};
use crate::view::DateStyle;

/// Service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminConfig {
    /// Host to bind to (default: "127.0.0.1")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Origins allowed cross-origin access; empty disables CORS entirely
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Nodes per listing page (default: 100)
    #[serde(default = "default_per_page")]
    pub per_page: usize,

    /// Show the Title column unless the request says otherwise
    #[serde(default = "default_show_title")]
    pub show_title: bool,

    /// Date-created display convention
    #[serde(default)]
    pub date_style: DateStyle,

    /// Prefix for node detail links (must end in '/')
    #[serde(default = "default_node_url_prefix")]
    pub node_url_prefix: String,

    /// Prefix for user profile links (must end in '/')
    #[serde(default = "default_user_url_prefix")]
    pub user_url_prefix: String,

    /// Secret for CSRF signatures; random per process when unset
    #[serde(default)]
    pub csrf_secret: Option<String>,

    /// Lifetime of a CSRF token in seconds (default: 3600)
    #[serde(default = "default_csrf_max_age_secs")]
    pub csrf_max_age_secs: i64,

    /// JSON array of nodes loaded at start
    #[serde(default)]
    pub fixture: Option<PathBuf>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_per_page() -> usize {
    100
}

fn default_show_title() -> bool {
    true
}

fn default_csrf_max_age_secs() -> i64 {
    crate::csrf::DEFAULT_MAX_AGE_SECS
}

fn default_node_url_prefix() -> String {
    "/admin/nodes/".to_string()
}

fn default_user_url_prefix() -> String {
    "/admin/users/".to_string()
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            per_page: default_per_page(),
            show_title: default_show_title(),
            date_style: DateStyle::default(),
            node_url_prefix: default_node_url_prefix(),
            user_url_prefix: default_user_url_prefix(),
            csrf_secret: None,
            csrf_max_age_secs: default_csrf_max_age_secs(),
            fixture: None,
        }
    }
}

impl AdminConfig {
    /// Create a default config on the given port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Load and validate configuration from file
    pub fn load(path: &Path) -> AdminResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| AdminError::Config(format!("Failed to read config: {}", e)))?;

        let config: AdminConfig = serde_json::from_str(&content)
            .map_err(|e| AdminError::Config(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints
    pub fn validate(&self) -> AdminResult<()> {
        if self.per_page == 0 {
            return Err(AdminError::Config("per_page must be > 0".to_string()));
        }

        for (name, prefix) in [
            ("node_url_prefix", &self.node_url_prefix),
            ("user_url_prefix", &self.user_url_prefix),
        ] {
            if prefix.is_empty() || !prefix.ends_with('/') {
                return Err(AdminError::Config(format!(
                    "{} must be non-empty and end with '/': '{}'",
                    name, prefix
                )));
            }
        }

        if matches!(&self.csrf_secret, Some(s) if s.is_empty()) {
            return Err(AdminError::Config("csrf_secret must not be empty".to_string()));
        }

        if self.csrf_max_age_secs <= 0 {
            return Err(AdminError::Config("csrf_max_age_secs must be > 0".to_string()));
        }

        Ok(())
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = AdminConfig::default();
        assert_eq!(config.socket_addr(), "127.0.0.1:8000");
        assert_eq!(config.per_page, 100);
        assert!(config.show_title);
        assert!(config.cors_origins.is_empty());
        assert_eq!(config.csrf_max_age_secs, 3600);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{}}").unwrap();
        let config = AdminConfig::load(file.path()).unwrap();
        assert_eq!(config.port, 8000);
        assert_eq!(config.date_style, DateStyle::EnUs);
    }

    #[test]
    fn test_load_overrides() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"port": 9090, "per_page": 25, "show_title": false, "date_style": "iso"}}"#
        )
        .unwrap();
        let config = AdminConfig::load(file.path()).unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.per_page, 25);
        assert!(!config.show_title);
        assert_eq!(config.date_style, DateStyle::Iso);
    }

    #[test]
    fn test_validation_failures() {
        let config = AdminConfig {
            per_page: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = AdminConfig {
            node_url_prefix: "/admin/nodes".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = AdminConfig {
            csrf_secret: Some(String::new()),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = AdminConfig {
            csrf_max_age_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            AdminConfig::load(Path::new("/nonexistent/nodeadmin.json")),
            Err(AdminError::Config(_))
        ));
    }
}
