//! Startup catalog loading.
//!
//! The catalog document is read once. Any read or parse failure is logged and the
//! built-in products are used instead; the caller never sees an error and there is
//! no retry.

use crate::{
    core::{catalog::CatalogStore, defaults::default_products},
    entities::ProductModel,
    errors::{Error, Result},
};
use std::path::Path;
use tracing::{error, info, instrument};

/// Parses a catalog JSON document (an array of products).
///
/// # Errors
/// Returns [`Error::CatalogLoad`] when the text is not a valid catalog document.
pub fn parse_catalog(text: &str) -> Result<Vec<ProductModel>> {
    serde_json::from_str(text).map_err(|e| Error::CatalogLoad {
        message: e.to_string(),
    })
}

/// Reads and parses the catalog document at `path`.
///
/// # Errors
/// Returns [`Error::CatalogLoad`] when the file is unreadable or malformed.
pub async fn read_catalog(path: &Path) -> Result<Vec<ProductModel>> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| Error::CatalogLoad {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
    parse_catalog(&text)
}

/// Builds the session catalog from `path`, falling back to the built-in products.
#[instrument]
pub async fn load_catalog(path: &Path) -> CatalogStore {
    match read_catalog(path).await {
        Ok(products) => {
            info!("Loaded {} products from {}", products.len(), path.display());
            CatalogStore::new(products)
        }
        Err(e) => {
            error!("Error loading products: {e}. Using built-in catalog.");
            CatalogStore::new(default_products())
        }
    }
}
