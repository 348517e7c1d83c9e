// Background network tasks
//
// Every user action that touches the backend spawns at most one task here.
// Tasks own a cloned ApiClient and report back over an mpsc channel; the TUI
// event loop is the only consumer, so all state mutation stays on one task.
// If the loop has already exited, the send fails and the task ends quietly -
// a late completion can never write into a torn-down UI.

use crate::api::ApiClient;
use crate::catalog::Product;
use crate::order::OrderRequest;
use tokio::sync::mpsc;

/// Results flowing from network tasks back to the event loop
///
/// Errors are carried as display strings: the UI only ever shows them, and
/// keeping the enum `Send + 'static` without an error type is simpler.
#[derive(Debug)]
pub enum NetEvent {
    /// Outcome of GET /products (initial load or manual reload)
    ProductsLoaded(Result<Vec<Product>, String>),
    /// Outcome of the seed sequence (POST /seed, then GET /products)
    SeedFinished(Result<Vec<Product>, String>),
    /// Outcome of POST /orders
    OrderFinished(Result<(), String>),
    /// Outcome of GET /test (raw status code on success)
    HealthChecked(Result<u16, String>),
}

async fn deliver(tx: &mpsc::Sender<NetEvent>, event: NetEvent) {
    if tx.send(event).await.is_err() {
        tracing::debug!("UI gone before network task finished; result dropped");
    }
}

/// Fetch the catalog (initial load and manual reload share this path)
pub fn spawn_load(api: ApiClient, tx: mpsc::Sender<NetEvent>) {
    tokio::spawn(async move {
        let result = api.fetch_products().await.map_err(|e| format!("{:#}", e));
        if let Err(e) = &result {
            tracing::warn!("Product load failed: {}", e);
        }
        deliver(&tx, NetEvent::ProductsLoaded(result)).await;
    });
}

/// Seed demo data, then refetch the catalog
///
/// Strictly sequential: the refetch is issued only after POST /seed
/// completes, and only when it succeeded. A failed seed skips the refetch
/// entirely and surfaces as an error.
pub fn spawn_seed(api: ApiClient, tx: mpsc::Sender<NetEvent>) {
    tokio::spawn(async move {
        let result = match api.seed().await {
            Ok(()) => {
                tracing::info!("Demo data seeded, refetching catalog");
                api.fetch_products().await.map_err(|e| format!("{:#}", e))
            }
            Err(e) => {
                tracing::warn!("Seed failed: {:#}", e);
                Err(format!("{:#}", e))
            }
        };
        deliver(&tx, NetEvent::SeedFinished(result)).await;
    });
}

/// Submit an order built from the cart
pub fn spawn_checkout(api: ApiClient, order: OrderRequest, tx: mpsc::Sender<NetEvent>) {
    tokio::spawn(async move {
        tracing::info!(
            "Submitting order: {} item(s), total ${:.2}",
            order.items.len(),
            order.total
        );
        let result = api.submit_order(&order).await.map_err(|e| format!("{:#}", e));
        if let Err(e) = &result {
            tracing::warn!("Checkout failed: {}", e);
        }
        deliver(&tx, NetEvent::OrderFinished(result)).await;
    });
}

/// Probe GET /test and report the raw status
pub fn spawn_health(api: ApiClient, tx: mpsc::Sender<NetEvent>) {
    tokio::spawn(async move {
        let result = api.health().await.map_err(|e| format!("{:#}", e));
        deliver(&tx, NetEvent::HealthChecked(result)).await;
    });
}
