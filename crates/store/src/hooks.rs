//! Write hooks: the store's extension points.
//!
//! Hooks run synchronously inside the transaction of the write that triggers
//! them, with mutable access to the whole dataset. Returning an error aborts
//! the write and every mutation the hook made — the caller observes either
//! all effects or none.

use tradegate_core::DomainResult;

use crate::dataset::Dataset;
use crate::records::{Employee, OrderLine};

/// Runs after an employee row has been updated, before commit.
pub trait EmployeeUpdateHook: Send + Sync {
    /// `before` and `after` are the row as it was and as it is in the
    /// transaction's working state; the update itself is already applied to
    /// `data` when the hook runs.
    fn after_update(
        &self,
        data: &mut Dataset,
        before: &Employee,
        after: &Employee,
    ) -> DomainResult<()>;
}

/// Runs before an order line row is appended, within the insert transaction.
pub trait OrderLineInsertHook: Send + Sync {
    /// The line is not yet in `data` when the hook runs; an `Ok` return
    /// admits it.
    fn before_insert(&self, data: &mut Dataset, line: &OrderLine) -> DomainResult<()>;
}
