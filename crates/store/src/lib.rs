//! `tradegate-store` — transactional record store with write hooks.
//!
//! The store holds the four record tables of the sales dataset and exposes
//! two extension points: a before-insert hook on order lines and an
//! after-update hook on employees. Hooks run synchronously inside the
//! transaction of the write that triggers them; a hook error aborts the
//! whole write.

pub mod dataset;
pub mod hooks;
pub mod memory;
pub mod records;

pub use dataset::Dataset;
pub use hooks::{EmployeeUpdateHook, OrderLineInsertHook};
pub use memory::{MemoryStore, StoreError, StoreResult};
pub use records::{AuditEntry, Employee, OrderLine, Product};
