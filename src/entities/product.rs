//! Product entity - A power station listed in the storefront catalog.
//!
//! The serde shape of these records is the catalog JSON document: the startup
//! source, the admin export and the admin import all read and write exactly this
//! layout. Every field defaults when absent so partially filled documents load.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stock availability shown on product cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    /// Normal availability
    #[default]
    InStock,
    /// Few units left
    LowStock,
    /// Nothing to sell right now
    OutOfStock,
}

impl StockStatus {
    /// Wire value used in JSON documents and query strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InStock => "in_stock",
            Self::LowStock => "low_stock",
            Self::OutOfStock => "out_of_stock",
        }
    }

    /// Customer-facing label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::InStock => "In Stock",
            Self::LowStock => "Low Stock",
            Self::OutOfStock => "Out of Stock",
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StockStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in_stock" => Ok(Self::InStock),
            "low_stock" => Ok(Self::LowStock),
            "out_of_stock" => Ok(Self::OutOfStock),
            other => Err(other.to_string()),
        }
    }
}

/// Technical specifications, owned 1:1 by a [`Model`].
///
/// By convention `solar_panel_count` and `each_panel_watt` are both zero or both positive.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Specs {
    /// Battery capacity in watt-hours
    pub battery_capacity_wh: u32,
    /// Continuous AC output in watts
    pub ac_output_watts: u32,
    /// Output voltage, free text (e.g. "220-240V")
    pub output_voltage: String,
    /// Inverter type, free text (e.g. "Pure sine wave")
    pub inverter_type: String,
    /// Port labels in display order
    pub ports: Vec<String>,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Dimensions, free text
    pub dimensions_cm: String,
    /// Number of bundled solar panels
    pub solar_panel_count: u32,
    /// Wattage of each bundled panel
    pub each_panel_watt: u32,
    /// Charge controller rating, if a solar bundle is included
    pub charge_controller: Option<String>,
    /// Free-text notes
    pub notes: String,
}

/// Accepted payment arrangements, owned 1:1 by a [`Model`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeliveryOptions {
    /// Customer may pay when the unit arrives
    pub pay_on_delivery: bool,
    /// Customer may pay in full up front
    pub pay_before_delivery: bool,
    /// Customer may pay a 50% deposit
    #[serde(rename = "deposit50")]
    pub deposit_50: bool,
}

impl DeliveryOptions {
    /// Every arrangement allowed.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            pay_on_delivery: true,
            pay_before_delivery: true,
            deposit_50: true,
        }
    }
}

/// Product record.
///
/// A stock count of 0 should come with [`StockStatus::OutOfStock`]; this is a
/// data-entry responsibility and is not enforced here.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Model {
    /// Stable identifier, unique within a catalog
    pub id: String,
    /// Model code (e.g. "DT-500"); capacity filtering matches against it
    pub model: String,
    /// Display title
    pub title: String,
    /// Price in whole naira
    #[serde(rename = "priceNGN")]
    pub price_ngn: i64,
    /// Currency code
    pub currency: String,
    /// Units available
    pub stock_count: u32,
    /// Availability badge
    pub status: StockStatus,
    /// One-line description for cards
    pub short_description: String,
    /// Technical specifications
    pub specs: Specs,
    /// Payment arrangements
    pub delivery_options: DeliveryOptions,
    /// Image references, first one is the card image
    pub images: Vec<String>,
    /// When the product was created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Model {
    /// First image reference, or `placeholder` when the product has none.
    #[must_use]
    pub fn primary_image<'a>(&'a self, placeholder: &'a str) -> &'a str {
        self.images.first().map_or(placeholder, String::as_str)
    }
}
