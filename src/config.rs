use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::CsrGenError;
use crate::key::RSA_KEY_SIZE_BITS;

/// Host description loaded from a TOML file.
///
/// Constructed once at startup and read-only afterwards. `hostname` is
/// required; `dns_names` is optional and defaults to `[hostname]`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub hostname: String,
    #[serde(default)]
    dns_names: Option<Vec<String>>,
}

impl Config {
    /// Loads and validates a configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, CsrGenError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            CsrGenError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&raw).map_err(|e| match e {
            CsrGenError::ConfigError(msg) => {
                CsrGenError::ConfigError(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    /// Parses and validates a configuration from TOML text.
    pub fn from_toml_str(raw: &str) -> Result<Self, CsrGenError> {
        let config: Config =
            toml::from_str(raw).map_err(|e| CsrGenError::ConfigError(e.to_string()))?;
        if config.hostname.is_empty() {
            return Err(CsrGenError::ConfigError(
                "hostname must not be empty".to_string(),
            ));
        }
        Ok(config)
    }

    /// Subject common name for the request. Always the hostname.
    pub fn common_name(&self) -> &str {
        &self.hostname
    }

    /// DNS names for the SAN extension, in configuration order.
    ///
    /// An absent or empty `dns_names` field falls back to `[hostname]`.
    pub fn dns_names(&self) -> Vec<String> {
        match &self.dns_names {
            Some(names) if !names.is_empty() => names.clone(),
            _ => vec![self.hostname.clone()],
        }
    }

    /// Modulus size in bits for the generated key.
    pub fn key_size(&self) -> usize {
        RSA_KEY_SIZE_BITS
    }

    /// The path the private key file is written to (PEM format).
    pub fn key_path(&self) -> PathBuf {
        PathBuf::from(format!("{}.key", self.hostname))
    }

    /// The path the certificate signing request file is written to
    /// (PEM format).
    pub fn csr_path(&self) -> PathBuf {
        PathBuf::from(format!("{}.csr", self.hostname))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dns_names_default_to_hostname() {
        let config = Config::from_toml_str(r#"hostname = "example.com""#).unwrap();
        assert_eq!(config.dns_names(), vec!["example.com".to_string()]);
    }

    #[test]
    fn test_empty_dns_names_default_to_hostname() {
        let config =
            Config::from_toml_str("hostname = \"example.com\"\ndns_names = []").unwrap();
        assert_eq!(config.dns_names(), vec!["example.com".to_string()]);
    }

    #[test]
    fn test_dns_names_preserve_configured_order() {
        let config = Config::from_toml_str(
            "hostname = \"example.com\"\ndns_names = [\"www.example.com\", \"example.com\"]",
        )
        .unwrap();
        assert_eq!(
            config.dns_names(),
            vec!["www.example.com".to_string(), "example.com".to_string()]
        );
    }

    #[test]
    fn test_derived_paths_and_key_size() {
        let config = Config::from_toml_str(r#"hostname = "example.com""#).unwrap();
        assert_eq!(config.key_path(), PathBuf::from("example.com.key"));
        assert_eq!(config.csr_path(), PathBuf::from("example.com.csr"));
        assert_eq!(config.key_size(), 2048);
        assert_eq!(config.common_name(), "example.com");
    }

    #[test]
    fn test_missing_hostname_is_config_error() {
        let err = Config::from_toml_str(r#"dns_names = ["example.com"]"#).unwrap_err();
        assert!(matches!(err, CsrGenError::ConfigError(_)));
    }

    #[test]
    fn test_empty_hostname_is_config_error() {
        let err = Config::from_toml_str(r#"hostname = """#).unwrap_err();
        assert!(matches!(err, CsrGenError::ConfigError(_)));
    }
}
