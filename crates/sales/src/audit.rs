//! Title-change audit: every employee title change leaves a ledger entry.

use tradegate_core::DomainResult;
use tradegate_store::{AuditEntry, Dataset, Employee, EmployeeUpdateHook};

/// After-update hook appending one [`AuditEntry`] per title change.
///
/// Fires only when the title actually changed: updates to other fields, and
/// rewrites of the title to its current value, leave the ledger untouched.
/// If the ledger append fails, the error propagates and the whole update is
/// rolled back — a title change without its audit entry never commits.
pub struct TitleChangeAudit;

impl EmployeeUpdateHook for TitleChangeAudit {
    fn after_update(
        &self,
        data: &mut Dataset,
        before: &Employee,
        after: &Employee,
    ) -> DomainResult<()> {
        if before.title == after.title {
            return Ok(());
        }

        let entry = AuditEntry::new(after.id, before.title.clone(), after.title.clone());
        data.append_audit_entry(entry)?;

        tracing::debug!(
            employee_id = %after.id,
            previous_title = %before.title,
            new_title = %after.title,
            "title change audited"
        );
        Ok(())
    }
}
