//! `tradegate-sales` — the two invariant enforcers and the sanctioned write
//! API over the sales dataset.
//!
//! - [`TitleChangeAudit`] appends one audit entry per employee title change.
//! - [`StockGuard`] admits an order line only if the product has sufficient
//!   stock, decrementing stock atomically with the insert.
//! - [`SalesOps`] wraps both behind the two operations callers are meant to
//!   use: [`SalesOps::change_employee_title`] and
//!   [`SalesOps::insert_order_line`].

pub mod audit;
pub mod ops;
pub mod stock;

pub use audit::TitleChangeAudit;
pub use ops::SalesOps;
pub use stock::StockGuard;

use std::sync::Arc;

use tradegate_store::MemoryStore;

/// Wire both enforcers into a store.
///
/// This is how a store is assembled for use with [`SalesOps`]; a store
/// without the enforcers accepts writes unguarded.
pub fn register_enforcers(store: &mut MemoryStore) {
    store.register_employee_update_hook(Arc::new(TitleChangeAudit));
    store.register_order_line_insert_hook(Arc::new(StockGuard));
}
