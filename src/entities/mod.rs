//! Entity module - Contains the catalog record definitions.
//! These records are both the in-memory model and the catalog JSON document shape.

pub mod product;

pub use product::{DeliveryOptions, Model as ProductModel, Specs, StockStatus};
