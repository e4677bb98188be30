//! The in-memory relational dataset: four tables and their row-level rules.

use std::collections::HashMap;

use tradegate_core::{DomainError, DomainResult, EmployeeId, Entity, OrderId, ProductId};

use crate::records::{AuditEntry, Employee, OrderLine, Product};

/// Resolve a row in a keyed table, or fail naming the entity.
fn row<'a, E: Entity>(
    table: &'a HashMap<E::Id, E>,
    id: E::Id,
    entity: &'static str,
) -> DomainResult<&'a E>
where
    E::Id: core::fmt::Display,
{
    table.get(&id).ok_or_else(|| DomainError::unknown(entity, id))
}

fn row_mut<'a, E: Entity>(
    table: &'a mut HashMap<E::Id, E>,
    id: E::Id,
    entity: &'static str,
) -> DomainResult<&'a mut E>
where
    E::Id: core::fmt::Display,
{
    table.get_mut(&id).ok_or_else(|| DomainError::unknown(entity, id))
}

/// All tables of the sales dataset.
///
/// `Dataset` enforces only row-level rules (key uniqueness, ledger
/// append-only integrity). Cross-row invariants are the job of the hooks
/// registered on [`crate::MemoryStore`], which receive `&mut Dataset` inside
/// a transaction.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    employees: HashMap<EmployeeId, Employee>,
    products: HashMap<ProductId, Product>,
    /// Kept in insertion order; unique per `(order_id, product_id)`.
    order_lines: Vec<OrderLine>,
    /// Append-only ledger, in insertion order.
    audit_log: Vec<AuditEntry>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    // --- employees ---

    pub fn employee(&self, id: EmployeeId) -> DomainResult<&Employee> {
        row(&self.employees, id, "employee")
    }

    pub fn insert_employee(&mut self, employee: Employee) -> DomainResult<()> {
        if self.employees.contains_key(&employee.id) {
            return Err(DomainError::conflict(format!(
                "employee {} already exists",
                employee.id
            )));
        }
        self.employees.insert(employee.id, employee);
        Ok(())
    }

    /// Replace an existing employee row. The row must already exist; new
    /// employees go through [`Dataset::insert_employee`].
    pub fn put_employee(&mut self, employee: Employee) -> DomainResult<()> {
        let slot = row_mut(&mut self.employees, employee.id, "employee")?;
        *slot = employee;
        Ok(())
    }

    // --- products ---

    pub fn product(&self, id: ProductId) -> DomainResult<&Product> {
        row(&self.products, id, "product")
    }

    pub fn product_mut(&mut self, id: ProductId) -> DomainResult<&mut Product> {
        row_mut(&mut self.products, id, "product")
    }

    pub fn insert_product(&mut self, product: Product) -> DomainResult<()> {
        if self.products.contains_key(&product.id) {
            return Err(DomainError::conflict(format!(
                "product {} already exists",
                product.id
            )));
        }
        self.products.insert(product.id, product);
        Ok(())
    }

    // --- order lines ---

    pub fn order_line(&self, order_id: OrderId, product_id: ProductId) -> Option<&OrderLine> {
        self.order_lines
            .iter()
            .find(|l| l.order_id == order_id && l.product_id == product_id)
    }

    pub fn order_lines(&self, order_id: OrderId) -> impl Iterator<Item = &OrderLine> {
        self.order_lines.iter().filter(move |l| l.order_id == order_id)
    }

    /// Append an order line row.
    ///
    /// Key uniqueness only — stock admission is enforced by the before-insert
    /// hooks, not here.
    pub fn push_order_line(&mut self, line: OrderLine) -> DomainResult<()> {
        if self.order_line(line.order_id, line.product_id).is_some() {
            return Err(DomainError::conflict(format!(
                "order {} already has a line for product {}",
                line.order_id, line.product_id
            )));
        }
        self.order_lines.push(line);
        Ok(())
    }

    // --- audit ledger ---

    /// Append one entry to the audit ledger.
    ///
    /// The ledger only accepts real changes: an entry whose previous and new
    /// titles are equal is rejected, and that rejection aborts the enclosing
    /// transaction.
    pub fn append_audit_entry(&mut self, entry: AuditEntry) -> DomainResult<()> {
        if entry.previous_title == entry.new_title {
            return Err(DomainError::audit_write(format!(
                "entry for employee {} records no change (title '{}')",
                entry.employee_id, entry.new_title
            )));
        }
        self.audit_log.push(entry);
        Ok(())
    }

    pub fn audit_entries(&self, employee_id: EmployeeId) -> impl Iterator<Item = &AuditEntry> {
        self.audit_log
            .iter()
            .filter(move |e| e.employee_id == employee_id)
    }

    pub fn audit_len(&self) -> usize {
        self.audit_log.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u32, stock: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("product-{id}"),
            unit_price: 1400,
            stock,
        }
    }

    #[test]
    fn insert_product_rejects_duplicate_key() {
        let mut data = Dataset::new();
        data.insert_product(product(10, 5)).unwrap();
        let err = data.insert_product(product(10, 9)).unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[test]
    fn put_employee_requires_existing_row() {
        let mut data = Dataset::new();
        let err = data
            .put_employee(Employee {
                id: EmployeeId::new(1),
                name: "Nancy".into(),
                title: "Sales Rep".into(),
            })
            .unwrap_err();
        assert!(matches!(err, DomainError::UnknownReference { .. }));
    }

    #[test]
    fn push_order_line_rejects_duplicate_pair() {
        let mut data = Dataset::new();
        let line = OrderLine {
            order_id: OrderId::new(10692),
            product_id: ProductId::new(10),
            unit_price: 1400,
            quantity: 2,
            discount: 0,
        };
        data.push_order_line(line.clone()).unwrap();
        let err = data.push_order_line(line).unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[test]
    fn ledger_rejects_no_op_entries() {
        let mut data = Dataset::new();
        let err = data
            .append_audit_entry(AuditEntry::new(EmployeeId::new(1), "Manager", "Manager"))
            .unwrap_err();
        assert!(matches!(err, DomainError::AuditWrite(_)));
        assert_eq!(data.audit_len(), 0);
    }
}
