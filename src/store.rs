// Application state container
//
// All shop state lives here and changes only through `Store::apply`. The TUI
// event loop is the sole caller, so there is no locking: network results
// arrive as channel events and are applied on the same task that handles
// keyboard input. Derived values (filtered view, cart total) are recomputed
// on every read instead of being cached fields, which keeps them impossible
// to leave stale across mutations.

use crate::cart::{cart_total, remove_line, CartLine};
use crate::catalog::{filter_products, Product};

/// Fixed user-facing message for a failed catalog load (initial or reload)
pub const LOAD_ERROR_MESSAGE: &str =
    "Unable to fetch products. Try pressing 'd' to seed demo data.";

/// State transitions the UI can request
#[derive(Debug, Clone)]
pub enum Action {
    /// A catalog fetch (initial load, reload, or seed) has been issued
    LoadStarted,
    /// GET /products succeeded; replace the catalog wholesale
    CatalogLoaded(Vec<Product>),
    /// GET /products failed (network error or non-2xx)
    LoadFailed,
    /// Seed + refetch succeeded; replace the catalog and reset the filter
    SeedCompleted(Vec<Product>),
    /// POST /seed failed; the refetch was skipped, catalog untouched
    SeedFailed,
    /// Raw search box text changed (every keystroke, no debounce)
    QueryChanged(String),
    /// Append a snapshot of this product to the cart
    AddToCart(Product),
    /// Remove the cart line at this position (out of range: no-op)
    RemoveFromCart(usize),
    /// An order submission is in flight
    CheckoutStarted,
    /// POST /orders returned 2xx; the cart empties
    CheckoutSucceeded,
    /// POST /orders failed; the cart stays intact for a manual retry
    CheckoutFailed,
}

/// Shop state: catalog, search query, cart, and load-cycle flags
///
/// Per load cycle the UI state machine is Idle -> Loading -> {Loaded, Errored};
/// `loading` and `error` encode which leg we are on.
#[derive(Debug, Default)]
pub struct Store {
    pub catalog: Vec<Product>,
    pub query: String,
    pub cart: Vec<CartLine>,
    pub loading: bool,
    pub error: Option<String>,
    pub checkout_pending: bool,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a state transition
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::LoadStarted => {
                self.loading = true;
                self.error = None;
            }
            Action::CatalogLoaded(products) => {
                self.catalog = products;
                self.loading = false;
                self.error = None;
            }
            Action::LoadFailed => {
                self.loading = false;
                self.error = Some(LOAD_ERROR_MESSAGE.to_string());
            }
            Action::SeedCompleted(products) => {
                self.catalog = products;
                // A fresh demo catalog shows unfiltered
                self.query.clear();
                self.loading = false;
                self.error = None;
            }
            Action::SeedFailed => {
                self.loading = false;
            }
            Action::QueryChanged(query) => {
                self.query = query;
            }
            Action::AddToCart(product) => {
                self.cart.push(CartLine::from_product(&product));
            }
            Action::RemoveFromCart(index) => {
                remove_line(&mut self.cart, index);
            }
            Action::CheckoutStarted => {
                self.checkout_pending = true;
            }
            Action::CheckoutSucceeded => {
                self.cart.clear();
                self.checkout_pending = false;
            }
            Action::CheckoutFailed => {
                self.checkout_pending = false;
            }
        }
    }

    /// Current filtered view: always derived from the full catalog and query
    pub fn filtered(&self) -> Vec<&Product> {
        filter_products(&self.catalog, &self.query)
    }

    /// Current cart total, recomputed from the lines
    pub fn cart_total(&self) -> f64 {
        cart_total(&self.cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, title: &str, price: f64, description: Option<&str>) -> Product {
        Product {
            id,
            title: title.to_string(),
            price,
            description: description.map(String::from),
            image: None,
            sizes: None,
        }
    }

    #[test]
    fn test_load_cycle_success() {
        let mut store = Store::new();
        store.apply(Action::LoadStarted);
        assert!(store.loading);

        store.apply(Action::CatalogLoaded(vec![product(1, "Tee", 20.0, None)]));
        assert!(!store.loading);
        assert!(store.error.is_none());
        assert_eq!(store.catalog.len(), 1);
        assert_eq!(store.filtered().len(), 1);
    }

    #[test]
    fn test_load_cycle_failure() {
        // Failed initial load: loading ends false, fixed error message,
        // catalog and filtered view stay empty
        let mut store = Store::new();
        store.apply(Action::LoadStarted);
        store.apply(Action::LoadFailed);

        assert!(!store.loading);
        assert_eq!(store.error.as_deref(), Some(LOAD_ERROR_MESSAGE));
        assert!(store.catalog.is_empty());
        assert!(store.filtered().is_empty());
    }

    #[test]
    fn test_reload_clears_previous_error() {
        let mut store = Store::new();
        store.apply(Action::LoadStarted);
        store.apply(Action::LoadFailed);
        store.apply(Action::LoadStarted);
        assert!(store.error.is_none());
    }

    #[test]
    fn test_query_filters_catalog() {
        let mut store = Store::new();
        store.apply(Action::CatalogLoaded(vec![
            product(1, "Tee", 20.0, Some("red")),
            product(2, "Hoodie", 45.0, Some("black")),
        ]));

        store.apply(Action::QueryChanged("red".to_string()));
        let filtered = store.filtered();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Tee");

        store.apply(Action::QueryChanged("blue".to_string()));
        assert!(store.filtered().is_empty());

        store.apply(Action::QueryChanged(String::new()));
        assert_eq!(store.filtered().len(), 2);
    }

    #[test]
    fn test_seed_resets_active_filter() {
        let mut store = Store::new();
        store.apply(Action::CatalogLoaded(vec![product(1, "Tee", 20.0, None)]));
        store.apply(Action::QueryChanged("tee".to_string()));

        store.apply(Action::SeedCompleted(vec![
            product(2, "Hoodie", 45.0, None),
            product(3, "Cap", 15.0, None),
        ]));
        assert!(store.query.is_empty());
        assert_eq!(store.filtered().len(), 2);
    }

    #[test]
    fn test_seed_failure_leaves_catalog_and_query_alone() {
        let mut store = Store::new();
        store.apply(Action::CatalogLoaded(vec![product(1, "Tee", 20.0, None)]));
        store.apply(Action::QueryChanged("tee".to_string()));

        store.apply(Action::LoadStarted);
        store.apply(Action::SeedFailed);
        assert!(!store.loading);
        assert_eq!(store.catalog.len(), 1);
        assert_eq!(store.query, "tee");
    }

    #[test]
    fn test_cart_add_remove_totals() {
        let mut store = Store::new();
        let tee = product(1, "Tee", 20.0, None);

        store.apply(Action::AddToCart(tee.clone()));
        store.apply(Action::AddToCart(tee));
        assert_eq!(store.cart.len(), 2);
        assert_eq!(store.cart_total(), 40.0);

        store.apply(Action::RemoveFromCart(0));
        assert_eq!(store.cart.len(), 1);
        assert_eq!(store.cart_total(), 20.0);

        // Out of range is a defined no-op
        store.apply(Action::RemoveFromCart(9));
        assert_eq!(store.cart.len(), 1);
    }

    #[test]
    fn test_checkout_success_empties_cart() {
        let mut store = Store::new();
        store.apply(Action::AddToCart(product(1, "Tee", 20.0, None)));
        store.apply(Action::CheckoutStarted);
        assert!(store.checkout_pending);

        store.apply(Action::CheckoutSucceeded);
        assert!(store.cart.is_empty());
        assert!(!store.checkout_pending);
    }

    #[test]
    fn test_checkout_failure_preserves_cart() {
        let mut store = Store::new();
        store.apply(Action::AddToCart(product(1, "Tee", 20.0, None)));
        store.apply(Action::CheckoutStarted);
        store.apply(Action::CheckoutFailed);

        assert_eq!(store.cart.len(), 1);
        assert_eq!(store.cart_total(), 20.0);
        assert!(!store.checkout_pending);
    }

    #[test]
    fn test_catalog_replacement_keeps_cart_snapshots() {
        let mut store = Store::new();
        store.apply(Action::CatalogLoaded(vec![product(1, "Tee", 20.0, None)]));
        store.apply(Action::AddToCart(store.catalog[0].clone()));

        // Refetch with different prices must not rewrite existing lines
        store.apply(Action::CatalogLoaded(vec![product(1, "Tee", 99.0, None)]));
        assert_eq!(store.cart_total(), 20.0);
    }
}
