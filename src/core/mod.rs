//! Core storefront logic, independent of the HTTP surface.

/// Admin panel: create, staged edit, delete, import/export, OCR intake
pub mod admin;
/// In-memory product list
pub mod catalog;
/// Built-in fallback products
pub mod defaults;
/// User actions and the session context they run against
pub mod events;
/// Product specification guesses from recognised text
pub mod extractor;
/// Storefront filters
pub mod filter;
/// Startup catalog loading with fallback
pub mod loader;
/// Message texts and deep links
pub mod messaging;
/// User notifications
pub mod notice;
/// OCR engine trait and the tesseract adapter
pub mod ocr;
/// HTML views
pub mod render;
