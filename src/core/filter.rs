//! Filter engine - Derives the visible subset of the catalog.
//!
//! Three independent criteria are combined with logical AND. Each criterion is
//! either the "all" sentinel (no filtering) or one exact value. Surviving products
//! keep their catalog order.

use crate::{
    core::messaging::encode_query_component,
    entities::{ProductModel, StockStatus},
    errors::{Error, Result},
};
use std::str::FromStr;

/// Sentinel value that disables a criterion.
pub const ALL: &str = "all";

/// One filter criterion.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Criterion<T> {
    /// Criterion disabled
    #[default]
    All,
    /// Only products matching this value survive
    Only(T),
}

impl<T> Criterion<T> {
    /// True when the criterion does not filter.
    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    fn query_value(&self) -> String
    where
        T: ToString,
    {
        match self {
            Self::All => ALL.to_string(),
            Self::Only(value) => encode_query_component(&value.to_string()),
        }
    }

    fn admits(&self, predicate: impl FnOnce(&T) -> bool) -> bool {
        match self {
            Self::All => true,
            Self::Only(value) => predicate(value),
        }
    }
}

impl<T: FromStr> Criterion<T> {
    /// Parses a raw form value; blank and `"all"` both disable the criterion.
    ///
    /// # Errors
    /// Returns [`Error::InvalidFilter`] when the value does not parse as `T`.
    pub fn parse(criterion: &'static str, raw: Option<&str>) -> Result<Self> {
        match raw.map(str::trim) {
            None | Some("" | ALL) => Ok(Self::All),
            Some(value) => value
                .parse()
                .map(Self::Only)
                .map_err(|_| Error::InvalidFilter {
                    criterion,
                    value: value.to_string(),
                }),
        }
    }
}

/// The three storefront filters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    /// Capacity bucket, matched as `DT-<bucket>` inside the model code
    pub capacity: Criterion<String>,
    /// Exact solar panel count
    pub solar_panels: Criterion<u32>,
    /// Exact stock status
    pub stock: Criterion<StockStatus>,
}

impl CatalogFilter {
    /// Builds a filter from raw form values.
    ///
    /// # Errors
    /// Returns [`Error::InvalidFilter`] when the solar or stock value is not recognised.
    pub fn from_raw(
        capacity: Option<&str>,
        solar_panels: Option<&str>,
        stock: Option<&str>,
    ) -> Result<Self> {
        Ok(Self {
            capacity: Criterion::parse("capacity", capacity)?,
            solar_panels: Criterion::parse("solar", solar_panels)?,
            stock: Criterion::parse("stock", stock)?,
        })
    }

    /// True when no criterion is active.
    #[must_use]
    pub const fn is_unfiltered(&self) -> bool {
        self.capacity.is_all() && self.solar_panels.is_all() && self.stock.is_all()
    }

    /// Query string that reproduces this filter on `GET /`, with its leading `?`.
    /// Empty when no criterion is active.
    #[must_use]
    pub fn query_string(&self) -> String {
        if self.is_unfiltered() {
            return String::new();
        }
        format!(
            "?capacity={}&solar={}&stock={}",
            self.capacity.query_value(),
            self.solar_panels.query_value(),
            self.stock.query_value(),
        )
    }

    /// True when `product` satisfies every active criterion.
    #[must_use]
    pub fn matches(&self, product: &ProductModel) -> bool {
        self.capacity
            .admits(|bucket| product.model.contains(&format!("DT-{bucket}")))
            && self
                .solar_panels
                .admits(|count| product.specs.solar_panel_count == *count)
            && self.stock.admits(|status| product.status == *status)
    }

    /// Returns the matching products in catalog order. An empty result is not an error.
    #[must_use]
    pub fn apply<'a>(&self, products: &'a [ProductModel]) -> Vec<&'a ProductModel> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}
