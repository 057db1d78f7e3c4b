//! Application settings loading from config.toml
//!
//! Every setting has a default, so the storefront runs without any config file.
//! Values from `config.toml` are applied first and environment variables
//! (optionally from `.env`) override them.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default location of the settings file.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP listener settings
    pub server: ServerConfig,
    /// Catalog source and export settings
    pub catalog: CatalogConfig,
    /// Messaging deep-link settings
    pub messaging: MessagingConfig,
    /// OCR engine settings
    pub ocr: OcrConfig,
}

/// `[server]` section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address the HTTP server binds to
    pub listen_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
        }
    }
}

/// `[catalog]` section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Catalog JSON read once at startup
    pub source_path: PathBuf,
    /// File name offered for catalog downloads
    pub export_file_name: String,
    /// Image shown when a product has none
    pub placeholder_image: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from("products/products.json"),
            export_file_name: "products.json".to_string(),
            placeholder_image: "assets/products/placeholder.webp".to_string(),
        }
    }
}

/// `[messaging]` section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MessagingConfig {
    /// Messaging service base URL
    pub base_url: String,
    /// Fixed destination phone number
    pub destination: String,
    /// Longest message sent, in characters
    pub max_length: usize,
}

impl Default for MessagingConfig {
    fn default() -> Self {
        Self {
            base_url: "https://wa.me".to_string(),
            destination: "2348112023440".to_string(),
            max_length: 600,
        }
    }
}

/// `[ocr]` section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Tesseract executable
    pub tesseract_bin: String,
    /// Upper bound on one recognition
    pub timeout_secs: u64,
    /// Largest accepted upload
    pub max_upload_bytes: usize,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            tesseract_bin: "tesseract".to_string(),
            timeout_secs: 60,
            max_upload_bytes: 10 * 1024 * 1024,
        }
    }
}

/// Loads settings from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;

    parse_config(&contents)
}

/// Parses settings from TOML text.
///
/// # Errors
/// Returns an error if the TOML is invalid or a value has the wrong type.
pub fn parse_config(contents: &str) -> Result<AppConfig> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads settings from `config.toml` when it exists, then applies environment overrides.
///
/// A missing file is not an error; defaults are used instead.
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_app_configuration() -> Result<AppConfig> {
    let path = Path::new(DEFAULT_CONFIG_PATH);
    let mut config = if path.exists() {
        load_config(path)?
    } else {
        info!("No {DEFAULT_CONFIG_PATH} found, using default settings.");
        AppConfig::default()
    };
    apply_overrides(&mut config, |key| std::env::var(key).ok());
    Ok(config)
}

/// Overrides settings from environment-style key lookups.
///
/// Recognised keys: `STOREFRONT_LISTEN_ADDR`, `STOREFRONT_CATALOG_PATH`,
/// `STOREFRONT_WHATSAPP_NUMBER`, `STOREFRONT_TESSERACT_BIN`.
pub fn apply_overrides<F>(config: &mut AppConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(addr) = lookup("STOREFRONT_LISTEN_ADDR") {
        config.server.listen_addr = addr;
    }
    if let Some(path) = lookup("STOREFRONT_CATALOG_PATH") {
        config.catalog.source_path = PathBuf::from(path);
    }
    if let Some(number) = lookup("STOREFRONT_WHATSAPP_NUMBER") {
        config.messaging.destination = number;
    }
    if let Some(bin) = lookup("STOREFRONT_TESSERACT_BIN") {
        config.ocr.tesseract_bin = bin;
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_parse_partial_config_keeps_defaults() {
        let toml_str = r#"
            [server]
            listen_addr = "0.0.0.0:3000"

            [messaging]
            destination = "2340000000000"
        "#;

        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.server.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.messaging.destination, "2340000000000");
        assert_eq!(config.messaging.base_url, "https://wa.me");
        assert_eq!(config.messaging.max_length, 600);
        assert_eq!(
            config.catalog.source_path,
            PathBuf::from("products/products.json")
        );
        assert_eq!(config.ocr.tesseract_bin, "tesseract");
    }

    #[test]
    fn test_parse_invalid_config_is_config_error() {
        let result = parse_config("[server]\nlisten_addr = 8080\n");
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_load_config_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config(dir.path().join("nope.toml"));
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[catalog]\nexport_file_name = \"catalog.json\"\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.catalog.export_file_name, "catalog.json");
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let env: HashMap<&str, &str> = [
            ("STOREFRONT_LISTEN_ADDR", "0.0.0.0:9000"),
            ("STOREFRONT_WHATSAPP_NUMBER", "111"),
        ]
        .into_iter()
        .collect();
        let mut config = AppConfig::default();

        apply_overrides(&mut config, |key| env.get(key).map(|v| (*v).to_string()));

        assert_eq!(config.server.listen_addr, "0.0.0.0:9000");
        assert_eq!(config.messaging.destination, "111");
        assert_eq!(config.ocr.tesseract_bin, "tesseract");
    }
}
