//! In-memory transactional store.

use std::sync::{Arc, Mutex};

use thiserror::Error;

use tradegate_core::{DomainError, EmployeeId, OrderId, ProductId};

use crate::dataset::Dataset;
use crate::hooks::{EmployeeUpdateHook, OrderLineInsertHook};
use crate::records::{AuditEntry, Employee, OrderLine, Product};

/// Store operation error.
///
/// Domain failures pass through transparently; everything else here is a
/// storage-level failure.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A writer panicked while holding the dataset lock.
    #[error("dataset lock poisoned")]
    LockPoisoned,
}

pub type StoreResult<T> = Result<T, StoreError>;

/// In-memory store over the sales dataset, with transactional writes and
/// registered write hooks.
///
/// Every write runs as one transaction: the dataset lock is held across the
/// whole check-then-write sequence (concurrent writers are serialized), the
/// mutation runs against a working copy, and the working copy replaces the
/// live dataset only if everything — including every hook — succeeded. A
/// rejected or failed write leaves no observable trace.
///
/// Intended for tests/dev. Not optimized for large datasets (each write
/// clones the tables).
#[derive(Default)]
pub struct MemoryStore {
    data: Mutex<Dataset>,
    employee_update_hooks: Vec<Arc<dyn EmployeeUpdateHook>>,
    order_line_insert_hooks: Vec<Arc<dyn OrderLineInsertHook>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a hook to run after every employee update.
    ///
    /// Registration takes `&mut self`: hooks are wired before the store is
    /// shared, never while writes are in flight.
    pub fn register_employee_update_hook(&mut self, hook: Arc<dyn EmployeeUpdateHook>) {
        self.employee_update_hooks.push(hook);
    }

    /// Register a hook to run before every order line insert.
    pub fn register_order_line_insert_hook(&mut self, hook: Arc<dyn OrderLineInsertHook>) {
        self.order_line_insert_hooks.push(hook);
    }

    /// Run `f` against a working copy of the dataset; commit on `Ok`.
    ///
    /// The lock is held for the whole call, so the read-check-write sequences
    /// inside `f` (and inside any hooks it runs) are atomic with respect to
    /// every other writer and reader.
    fn transaction<T>(&self, f: impl FnOnce(&mut Dataset) -> StoreResult<T>) -> StoreResult<T> {
        let mut live = self.data.lock().map_err(|_| StoreError::LockPoisoned)?;
        let mut working = live.clone();
        let out = f(&mut working)?;
        *live = working;
        Ok(out)
    }

    fn read<T>(&self, f: impl FnOnce(&Dataset) -> T) -> StoreResult<T> {
        let live = self.data.lock().map_err(|_| StoreError::LockPoisoned)?;
        Ok(f(&live))
    }

    // --- writes ---

    /// Insert a new employee. Fires no hooks: the audit trail records title
    /// *changes*, not hires.
    pub fn insert_employee(&self, employee: Employee) -> StoreResult<()> {
        self.transaction(|data| Ok(data.insert_employee(employee)?))
    }

    pub fn insert_product(&self, product: Product) -> StoreResult<()> {
        self.transaction(|data| Ok(data.insert_product(product)?))
    }

    /// Apply `f` to the employee row, then run the after-update hooks inside
    /// the same transaction. A hook error rolls the whole update back.
    pub fn update_employee(
        &self,
        id: EmployeeId,
        f: impl FnOnce(&mut Employee),
    ) -> StoreResult<Employee> {
        self.transaction(|data| {
            let before = data.employee(id)?.clone();
            let mut after = before.clone();
            f(&mut after);
            // The key is not mutable through updates.
            after.id = before.id;
            data.put_employee(after.clone())?;
            for hook in &self.employee_update_hooks {
                hook.after_update(data, &before, &after)?;
            }
            tracing::debug!(employee_id = %id, "employee updated");
            Ok(after)
        })
    }

    /// Insert an order line, running the before-insert hooks inside the same
    /// transaction. Two terminal outcomes: admitted (line appended, hook side
    /// effects committed) or rejected (nothing committed).
    pub fn insert_order_line(&self, line: OrderLine) -> StoreResult<()> {
        self.transaction(|data| {
            if data.order_line(line.order_id, line.product_id).is_some() {
                return Err(DomainError::conflict(format!(
                    "order {} already has a line for product {}",
                    line.order_id, line.product_id
                ))
                .into());
            }
            for hook in &self.order_line_insert_hooks {
                hook.before_insert(data, &line)?;
            }
            data.push_order_line(line.clone())?;
            tracing::debug!(
                order_id = %line.order_id,
                product_id = %line.product_id,
                quantity = line.quantity,
                "order line admitted"
            );
            Ok(())
        })
    }

    // --- reads (cloned snapshots) ---

    pub fn employee(&self, id: EmployeeId) -> StoreResult<Employee> {
        self.read(|data| data.employee(id).cloned())?
            .map_err(Into::into)
    }

    pub fn product(&self, id: ProductId) -> StoreResult<Product> {
        self.read(|data| data.product(id).cloned())?
            .map_err(Into::into)
    }

    /// Current stock for a product.
    pub fn stock(&self, id: ProductId) -> StoreResult<i64> {
        Ok(self.product(id)?.stock)
    }

    pub fn order_lines(&self, order_id: OrderId) -> StoreResult<Vec<OrderLine>> {
        self.read(|data| data.order_lines(order_id).cloned().collect())
    }

    pub fn audit_entries(&self, employee_id: EmployeeId) -> StoreResult<Vec<AuditEntry>> {
        self.read(|data| data.audit_entries(employee_id).cloned().collect())
    }
}
