//! The sanctioned write operations.

use std::sync::Arc;

use tradegate_core::{EmployeeId, OrderId, ProductId};
use tradegate_store::{Employee, MemoryStore, OrderLine, StoreResult};

/// The two operations through which mutations enter the system.
///
/// Thin composition over the store: each operation does its attribute
/// lookups and parameter defaulting, then submits the mutation; the
/// registered enforcers do the rest inside the store's transaction. Expects
/// a store assembled via [`crate::register_enforcers`].
pub struct SalesOps {
    store: Arc<MemoryStore>,
}

impl SalesOps {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &MemoryStore {
        &self.store
    }

    /// Change an employee's title.
    ///
    /// Pure pass-through: fails with `UnknownReference` if the employee does
    /// not exist, otherwise applies whatever title the caller supplied. The
    /// title-change audit fires inside the update transaction; returns the
    /// updated row.
    pub fn change_employee_title(
        &self,
        employee_id: EmployeeId,
        new_title: impl Into<String>,
    ) -> StoreResult<Employee> {
        let new_title = new_title.into();
        let updated = self
            .store
            .update_employee(employee_id, |e| e.title = new_title)?;

        tracing::info!(employee_id = %employee_id, title = %updated.title, "employee title changed");
        Ok(updated)
    }

    /// Add a line to an order.
    ///
    /// Resolves the unit price from the product (`UnknownReference` if the
    /// product does not exist), defaults the discount to 0 when the caller
    /// passes `None`, and submits the full line for insertion — where the
    /// stock guard admits or rejects it. Returns the line as inserted.
    pub fn insert_order_line(
        &self,
        order_id: OrderId,
        product_id: ProductId,
        quantity: i64,
        discount: Option<u32>,
    ) -> StoreResult<OrderLine> {
        let unit_price = self.store.product(product_id)?.unit_price;

        let line = OrderLine {
            order_id,
            product_id,
            unit_price,
            quantity,
            discount: discount.unwrap_or(0),
        };

        self.store.insert_order_line(line.clone())?;

        tracing::info!(
            order_id = %order_id,
            product_id = %product_id,
            quantity,
            unit_price,
            "order line inserted"
        );
        Ok(line)
    }
}
