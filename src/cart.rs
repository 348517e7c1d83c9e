// Shopping cart - ordered lines with implicit quantity 1
//
// A cart line is a snapshot of the product at the time it was added; later
// catalog refreshes never touch existing lines. Adding the same product twice
// yields two independent lines, and removal is positional, not by identity.

use crate::catalog::Product;

/// One entry in the cart
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product_id: u64,
    pub title: String,
    pub price: f64,
    pub image: Option<String>,
    pub sizes: Option<Vec<String>>,
}

impl CartLine {
    /// Snapshot a product into a cart line
    pub fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id,
            title: product.title.clone(),
            price: product.price,
            image: product.image.clone(),
            sizes: product.sizes.clone(),
        }
    }

    /// First declared size of the snapshotted product, if any
    pub fn first_size(&self) -> Option<String> {
        self.sizes.as_ref().and_then(|s| s.first().cloned())
    }
}

/// Sum of line prices (quantity is always 1)
pub fn cart_total(lines: &[CartLine]) -> f64 {
    lines.iter().map(|l| l.price).sum()
}

/// Remove the line at `index`, shifting later lines down by one
///
/// Out-of-range indices are a no-op, never a panic.
pub fn remove_line(lines: &mut Vec<CartLine>, index: usize) {
    if index < lines.len() {
        lines.remove(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tee() -> Product {
        Product {
            id: 1,
            title: "Tee".to_string(),
            price: 20.0,
            description: Some("red".to_string()),
            image: None,
            sizes: Some(vec!["S".to_string(), "M".to_string()]),
        }
    }

    #[test]
    fn test_snapshot_copies_product_fields() {
        let line = CartLine::from_product(&tee());
        assert_eq!(line.product_id, 1);
        assert_eq!(line.title, "Tee");
        assert_eq!(line.price, 20.0);
        assert_eq!(line.first_size(), Some("S".to_string()));
    }

    #[test]
    fn test_duplicate_adds_make_independent_lines() {
        // Add Tee ($20) twice: 2 lines, total $40
        let mut cart = Vec::new();
        cart.push(CartLine::from_product(&tee()));
        cart.push(CartLine::from_product(&tee()));
        assert_eq!(cart.len(), 2);
        assert_eq!(cart_total(&cart), 40.0);

        // Remove index 0: one line left (still a Tee), total $20
        remove_line(&mut cart, 0);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart_total(&cart), 20.0);
    }

    #[test]
    fn test_remove_preserves_order_of_survivors() {
        let mut cart: Vec<CartLine> = (0..4)
            .map(|i| {
                let mut p = tee();
                p.id = i;
                p.title = format!("Item {}", i);
                CartLine::from_product(&p)
            })
            .collect();

        remove_line(&mut cart, 1);
        let titles: Vec<&str> = cart.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["Item 0", "Item 2", "Item 3"]);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut cart = vec![CartLine::from_product(&tee())];
        remove_line(&mut cart, 5);
        assert_eq!(cart.len(), 1);

        let mut empty: Vec<CartLine> = Vec::new();
        remove_line(&mut empty, 0);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_add_then_remove_restores_total() {
        let mut cart = vec![CartLine::from_product(&tee())];
        let before = cart_total(&cart);
        cart.push(CartLine::from_product(&tee()));
        remove_line(&mut cart, 1);
        assert_eq!(cart_total(&cart), before);
    }

    #[test]
    fn test_empty_cart_total_is_zero() {
        assert_eq!(cart_total(&[]), 0.0);
    }
}
