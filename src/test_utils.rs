//! Shared test utilities for the storefront.
//!
//! Fixture builders for products and forms, a fixed clock, and in-process OCR
//! engines so admin and web tests never shell out to tesseract.

use crate::{
    core::{
        admin::ProductForm,
        extractor::{BoundingBox, OcrWord},
        ocr::{OcrEngine, OcrOutput},
    },
    entities::{ProductModel, StockStatus},
    errors::{Error, Result},
};
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use std::time::Duration;

/// Routes `tracing` output through the test harness; safe to call repeatedly.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_test_writer()
        .try_init();
}

/// A fixed instant used wherever a test needs "now".
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Creates a test product with sensible defaults.
///
/// # Defaults
/// * `model`: `"DT-100"`
/// * `price_ngn`: 50 000
/// * `status`: in stock
#[must_use]
pub fn product_with_id(id: &str) -> ProductModel {
    ProductModel {
        id: id.to_string(),
        model: "DT-100".to_string(),
        title: format!("Test product {id}"),
        price_ngn: 50_000,
        currency: "NGN".to_string(),
        status: StockStatus::InStock,
        ..ProductModel::default()
    }
}

/// A valid product form for `model` at `price`, with two 200 W panels.
#[must_use]
pub fn product_form(model: &str, price: &str) -> ProductForm {
    ProductForm {
        model: model.to_string(),
        title: format!("DEETREM {model} Power Station"),
        price: price.to_string(),
        status: "in_stock".to_string(),
        battery_capacity: "1000".to_string(),
        ac_output: "1200".to_string(),
        solar_count: "2".to_string(),
        panel_wattage: "200".to_string(),
        charge_controller: "50A".to_string(),
    }
}

fn word(text: &str, x0: f64, y0: f64) -> OcrWord {
    OcrWord {
        text: text.to_string(),
        bbox: BoundingBox {
            x0,
            y0,
            x1: x0 + 20.0,
            y1: y0 + 5.0,
        },
    }
}

/// Recognition of a typical spec sheet: 1000 Wh, 2 x 200 W panels.
#[must_use]
pub fn sample_ocr_output() -> OcrOutput {
    OcrOutput {
        text: "DT-1000 1000Wh LiFePO4\n2x200W solar".to_string(),
        words: vec![
            word("DT-1000", 5.0, 5.0),
            word("1000Wh", 30.0, 5.0),
            word("2x200W", 5.0, 20.0),
        ],
    }
}

/// Engine that always returns the same output, optionally after a delay.
#[derive(Debug, Clone)]
pub struct StaticOcr {
    output: OcrOutput,
    delay: Duration,
}

impl StaticOcr {
    /// Returns `output` immediately.
    #[must_use]
    pub const fn new(output: OcrOutput) -> Self {
        Self {
            output,
            delay: Duration::ZERO,
        }
    }

    /// Sleeps for `delay` before answering.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl OcrEngine for StaticOcr {
    async fn recognize(&self, _image: &[u8]) -> Result<OcrOutput> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(self.output.clone())
    }
}

/// Engine that rejects every image.
#[derive(Debug, Clone, Copy)]
pub struct FailingOcr;

#[async_trait]
impl OcrEngine for FailingOcr {
    async fn recognize(&self, _image: &[u8]) -> Result<OcrOutput> {
        Err(Error::Ocr {
            message: "unreadable image".to_string(),
        })
    }
}
