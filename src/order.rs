// Order submission payload - built from the cart at checkout time
//
// Wire shape (POST /orders):
//   {items: [{product_id, title, price, quantity, size, image}],
//    customer: {name, email, address}, total, status}
//
// The order is write-once: constructed, serialized, sent, and never kept
// around locally. There is no idempotency key, so resubmitting after a
// failure creates a fresh logically-identical order server-side.

use crate::cart::{cart_total, CartLine};
use serde::{Deserialize, Serialize};

/// One order line; quantity is always 1 in this design
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: u64,
    pub title: String,
    pub price: f64,
    pub quantity: u32,
    /// First declared size of the product, serialized as null when absent
    pub size: Option<String>,
    pub image: Option<String>,
}

/// Placeholder customer identity - there is no authentication
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub email: String,
    pub address: String,
}

impl Customer {
    pub fn guest() -> Self {
        Self {
            name: "Guest".to_string(),
            email: "guest@example.com".to_string(),
            address: "N/A".to_string(),
        }
    }
}

/// The full checkout payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub items: Vec<OrderItem>,
    pub customer: Customer,
    pub total: f64,
    pub status: String,
}

impl OrderRequest {
    /// Build an order from the current cart contents
    pub fn from_cart(cart: &[CartLine]) -> Self {
        let items = cart
            .iter()
            .map(|line| OrderItem {
                product_id: line.product_id,
                title: line.title.clone(),
                price: line.price,
                quantity: 1,
                size: line.first_size(),
                image: line.image.clone(),
            })
            .collect();

        Self {
            items,
            customer: Customer::guest(),
            total: cart_total(cart),
            status: "pending".to_string(),
        }
    }
}
