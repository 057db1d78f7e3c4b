//! Configuration - settings file and environment overrides.

/// Application settings from config.toml and environment overrides
pub mod settings;

pub use settings::{
    AppConfig, CatalogConfig, MessagingConfig, OcrConfig, ServerConfig, load_app_configuration,
    load_config,
};
