//! HTTP route handlers
//!
//! Each handler extracts its inputs, builds the matching [`crate::core::events::UiEvent`]
//! and returns the outcome of dispatching it.

/// Admin panel routes
pub mod admin;
/// Shopper-facing routes
pub mod storefront;
