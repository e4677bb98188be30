//! Record types held by the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tradegate_core::{EmployeeId, Entity, OrderId, ProductId};

/// Employee record.
///
/// Created externally; only the title is mutated through this core, and every
/// title change leaves an [`AuditEntry`] behind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub title: String,
}

impl Entity for Employee {
    type Id = EmployeeId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Product record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Price in smallest currency unit (e.g., cents).
    pub unit_price: u64,
    /// Units in stock. Never observed negative; the stock guard rejects any
    /// insertion that would overdraw it.
    pub stock: i64,
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Order line: one product position on an order.
///
/// `unit_price` is captured from the product at insertion time and never
/// re-derived. Immutable once inserted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub order_id: OrderId,
    pub product_id: ProductId,
    /// Price in smallest currency unit, copied from the product at insert.
    pub unit_price: u64,
    pub quantity: i64,
    /// Discount in basis points (0 = none).
    pub discount: u32,
}

impl OrderLine {
    /// Table key: order lines are unique per `(order_id, product_id)`.
    pub fn key(&self) -> (OrderId, ProductId) {
        (self.order_id, self.product_id)
    }
}

/// Audit ledger entry recording one employee title change.
///
/// Append-only: entries are never mutated or deleted, and they reference the
/// employee by id only — the employee may change further or disappear without
/// affecting past entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Time-ordered (UUIDv7) entry id.
    pub entry_id: Uuid,
    pub employee_id: EmployeeId,
    pub previous_title: String,
    pub new_title: String,
    /// When the change was recorded (defaults to time of append).
    pub modified_at: DateTime<Utc>,
}

impl AuditEntry {
    pub fn new(
        employee_id: EmployeeId,
        previous_title: impl Into<String>,
        new_title: impl Into<String>,
    ) -> Self {
        Self {
            entry_id: Uuid::now_v7(),
            employee_id,
            previous_title: previous_title.into(),
            new_title: new_title.into(),
            modified_at: Utc::now(),
        }
    }
}
