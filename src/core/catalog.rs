//! Catalog store - The ordered, in-memory list of products for one session.
//!
//! The store is the only source of truth; filtered views are derived snapshots.
//! Lookups by a stale id return `None` / `false` rather than an error so callers
//! can treat them as silent no-ops.

use crate::entities::ProductModel;
use tracing::debug;

/// Ordered product list with unique ids.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogStore {
    products: Vec<ProductModel>,
}

impl CatalogStore {
    /// Creates a store holding `products` in the given order.
    #[must_use]
    pub const fn new(products: Vec<ProductModel>) -> Self {
        Self { products }
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[ProductModel] {
        &self.products
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// True when the catalog holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Finds a product by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ProductModel> {
        self.products.iter().find(|p| p.id == id)
    }

    /// True when a product with `id` exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Appends a product at the end of the catalog.
    pub fn push(&mut self, product: ProductModel) {
        debug!("Appending product {} to catalog", product.id);
        self.products.push(product);
    }

    /// Replaces the product carrying `product.id` in place, keeping its position.
    ///
    /// Returns false (and changes nothing) when no such product exists.
    pub fn replace(&mut self, product: ProductModel) -> bool {
        match self.products.iter_mut().find(|p| p.id == product.id) {
            Some(slot) => {
                *slot = product;
                true
            }
            None => false,
        }
    }

    /// Removes every product carrying `id`; imported documents may repeat one.
    ///
    /// Returns true when anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        let removed = before - self.products.len();
        if removed > 1 {
            debug!("Removed {removed} products sharing id {id}");
        }
        removed > 0
    }

    /// Replaces the whole catalog.
    pub fn replace_all(&mut self, products: Vec<ProductModel>) {
        debug!(
            "Replacing catalog of {} products with {} products",
            self.products.len(),
            products.len()
        );
        self.products = products;
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::product_with_id;

    fn store() -> CatalogStore {
        CatalogStore::new(vec![
            product_with_id("a"),
            product_with_id("b"),
            product_with_id("c"),
        ])
    }

    #[test]
    fn test_get_and_contains() {
        let store = store();
        assert_eq!(store.get("b").unwrap().id, "b");
        assert!(store.contains("c"));
        assert!(store.get("zzz").is_none());
    }

    #[test]
    fn test_remove_keeps_order_of_remaining() {
        let mut store = store();
        assert!(store.remove("b"));
        let ids: Vec<&str> = store.products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
        assert!(!store.remove("b"));
    }

    #[test]
    fn test_remove_drops_every_duplicate() {
        let mut store = CatalogStore::new(vec![
            product_with_id("a"),
            product_with_id("b"),
            product_with_id("a"),
        ]);
        assert!(store.remove("a"));
        let ids: Vec<&str> = store.products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["b"]);
        assert!(!store.contains("a"));
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut store = store();
        let mut updated = product_with_id("b");
        updated.title = "Updated".to_string();

        assert!(store.replace(updated));
        assert_eq!(store.products()[1].title, "Updated");
        assert!(!store.replace(product_with_id("missing")));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_replace_all() {
        let mut store = store();
        store.replace_all(vec![product_with_id("x")]);
        assert_eq!(store.len(), 1);
        assert!(store.contains("x"));
        store.replace_all(Vec::new());
        assert!(store.is_empty());
    }
}
