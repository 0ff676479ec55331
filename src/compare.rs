//! The privilege comparator.

use crate::privilege::{Category, PrivilegeString};
use crate::record::PrivilegeRecord;

/// Compute the required privileges absent from `granted`.
///
/// Walks the categories present in `required` in canonical order, and each
/// category's scopes in their given order. A required scope is satisfied
/// only by the exact same string under the same category in `granted` —
/// a granted `"*"` does not satisfy `"articles"`, it only satisfies a
/// required `"*"`. Categories absent from `required` impose no constraint.
///
/// Returns `None` when nothing is missing, otherwise the non-empty missing
/// list in category-then-scope order.
pub fn missing_privileges(
    required: &PrivilegeRecord,
    granted: &PrivilegeRecord,
) -> Option<Vec<PrivilegeString>> {
    let mut missing = Vec::new();

    for category in Category::ALL {
        let Some(scopes) = required.scopes(category) else {
            continue;
        };
        for scope in scopes {
            if !granted.contains(category, scope) {
                missing.push(PrivilegeString::new(category, scope.clone()));
            }
        }
    }

    if missing.is_empty() {
        None
    } else {
        Some(missing)
    }
}
