// Product catalog - the data model for items sold by the shop backend
//
// Products arrive as JSON from GET /products and are immutable once fetched.
// The catalog is replaced wholesale on every fetch; the filtered view is
// always recomputed from the full catalog, never patched incrementally.

use serde::{Deserialize, Serialize};

/// Sizes offered when a product does not declare any of its own
pub const DEFAULT_SIZES: [&str; 3] = ["S", "M", "L"];

/// One product in the catalog
///
/// Wire shape: `{id, title, price (number), description?, image?, sizes?: [string]}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub sizes: Option<Vec<String>>,
}

impl Product {
    /// Sizes to offer in the card's size selector
    ///
    /// Falls back to S/M/L when the product declares none (or an empty list).
    pub fn size_options(&self) -> Vec<String> {
        match &self.sizes {
            Some(sizes) if !sizes.is_empty() => sizes.clone(),
            _ => DEFAULT_SIZES.iter().map(|s| s.to_string()).collect(),
        }
    }

}

/// Filter the catalog by a raw search query
///
/// Case-insensitive substring match against `title + " " + description`,
/// with a missing description treated as empty. An empty query matches
/// everything. Always filters the full catalog, so repeated application
/// with the same query is idempotent.
pub fn filter_products<'a>(catalog: &'a [Product], query: &str) -> Vec<&'a Product> {
    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|p| {
            let haystack = format!("{} {}", p.title, p.description.as_deref().unwrap_or(""));
            haystack.to_lowercase().contains(&needle)
        })
        .collect()
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
    fn test_empty_query_returns_full_catalog() {
        let catalog = vec![product(1, "Tee", 20.0, None), product(2, "Hoodie", 45.0, None)];
        assert_eq!(filter_products(&catalog, "").len(), 2);
    }

    #[test]
    fn test_filter_matches_title_case_insensitive() {
        let catalog = vec![product(1, "Black Hoodie", 45.0, None)];
        assert_eq!(filter_products(&catalog, "hOoDiE").len(), 1);
        assert_eq!(filter_products(&catalog, "tee").len(), 0);
    }

    #[test]
    fn test_filter_matches_description() {
        // Scenario from the shop workflow: query "red" hits the description,
        // query "blue" hits nothing
        let catalog = vec![product(1, "Tee", 20.0, Some("red"))];
        let red = filter_products(&catalog, "red");
        assert_eq!(red.len(), 1);
        assert_eq!(red[0].title, "Tee");
        assert!(filter_products(&catalog, "blue").is_empty());
    }

    #[test]
    fn test_filter_missing_description_defaults_to_empty() {
        let catalog = vec![product(1, "Tee", 20.0, None)];
        // Must not panic or match on a phantom description
        assert!(filter_products(&catalog, "cotton").is_empty());
        assert_eq!(filter_products(&catalog, "tee").len(), 1);
    }

    #[test]
    fn test_filter_spans_title_description_boundary() {
        // title + " " + description means the joining space is searchable
        let catalog = vec![product(1, "Tee", 20.0, Some("red"))];
        assert_eq!(filter_products(&catalog, "tee red").len(), 1);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let catalog = vec![
            product(1, "Tee", 20.0, Some("red cotton")),
            product(2, "Cap", 15.0, Some("blue wool")),
            product(3, "Red Scarf", 25.0, None),
        ];
        let once: Vec<Product> = filter_products(&catalog, "red")
            .into_iter()
            .cloned()
            .collect();
        let twice: Vec<&Product> = filter_products(&once, "red");
        assert_eq!(once.len(), 2);
        assert_eq!(twice.len(), once.len());
    }

    #[test]
    fn test_size_options_fallback() {
        let mut p = product(1, "Tee", 20.0, None);
        assert_eq!(p.size_options(), vec!["S", "M", "L"]);

        p.sizes = Some(vec![]);
        assert_eq!(p.size_options(), vec!["S", "M", "L"]);

        p.sizes = Some(vec!["XL".to_string()]);
        assert_eq!(p.size_options(), vec!["XL"]);
    }

    #[test]
    fn test_product_deserializes_with_optional_fields_absent() {
        let p: Product = serde_json::from_str(r#"{"id": 1, "title": "Tee", "price": 20}"#)
            .expect("minimal product should parse");
        assert_eq!(p.id, 1);
        assert_eq!(p.price, 20.0);
        assert!(p.description.is_none());
        assert!(p.sizes.is_none());
    }
}
