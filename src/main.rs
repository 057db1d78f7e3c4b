use deetrem_storefront::{
    config,
    core::{events::AppContext, loader::load_catalog, ocr::TesseractCli},
    errors::Result,
    web::{self, AppState},
};
use dotenvy::dotenv;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; variables may also be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load the application configuration
    let app_config = config::load_app_configuration()
        .inspect_err(|e| error!("Critical error loading application configuration: {}", e))?;

    // 4. Load the catalog, falling back to the built-in products
    let catalog = load_catalog(&app_config.catalog.source_path).await;
    info!("Catalog ready with {} products", catalog.len());

    // 5. Serve the storefront
    let ocr = Arc::new(TesseractCli::from_config(&app_config.ocr));
    let state = AppState::new(AppContext::new(catalog, &app_config), ocr);
    web::serve(&app_config, state)
        .await
        .inspect_err(|e| error!("Storefront server failed: {}", e))
}
