//! Comparator tests.
//!
//! These pin the exact diffing semantics: which required entries count as
//! missing, in what order they are reported, and that matching is literal
//! string equality with no wildcard expansion.

use privgate::{missing_privileges, Category, PrivilegeRecord, PrivilegeString};

fn privileges(strings: &[&str]) -> Vec<PrivilegeString> {
    strings.iter().map(|s| s.parse().unwrap()).collect()
}

// ============================================================================
// Nothing-required cases
// ============================================================================

/// An empty required record is satisfied by anything
#[test]
fn empty_required_always_satisfied() {
    let required = PrivilegeRecord::new();

    assert_eq!(missing_privileges(&required, &PrivilegeRecord::new()), None);
    assert_eq!(missing_privileges(&required, &PrivilegeRecord::wildcard()), None);
    assert_eq!(
        missing_privileges(&required, &PrivilegeRecord::new().with(Category::Read, ["articles"])),
        None
    );
}

/// Categories that are present but empty impose no constraint
#[test]
fn present_but_empty_categories_satisfied() {
    let required = PrivilegeRecord::new()
        .with(Category::Create, Vec::<String>::new())
        .with(Category::Delete, Vec::<String>::new());

    assert_eq!(missing_privileges(&required, &PrivilegeRecord::new()), None);
}

/// Categories absent from required are ignored even when granted lacks them
#[test]
fn absent_required_categories_ignored() {
    let required = PrivilegeRecord::new().with(Category::Read, ["articles"]);
    let granted = PrivilegeRecord::new().with(Category::Read, ["articles"]);

    // update/delete/create/additional absent on both sides: no constraint
    assert_eq!(missing_privileges(&required, &granted), None);
}

// ============================================================================
// Missing detection
// ============================================================================

/// A granted scope satisfies exactly its own category and string
#[test]
fn exact_match_not_reported() {
    let required = PrivilegeRecord::new()
        .with(Category::Read, ["articles"])
        .with(Category::Update, ["articles"]);
    let granted = PrivilegeRecord::new().with(Category::Read, ["articles"]);

    assert_eq!(
        missing_privileges(&required, &granted),
        Some(privileges(&["update:articles"]))
    );
}

/// A grant in one category never satisfies another category's scope
#[test]
fn grants_do_not_cross_categories() {
    let required = PrivilegeRecord::new().with(Category::Delete, ["articles"]);
    let granted = PrivilegeRecord::new()
        .with(Category::Read, ["articles"])
        .with(Category::Update, ["articles"]);

    assert_eq!(
        missing_privileges(&required, &granted),
        Some(privileges(&["delete:articles"]))
    );
}

/// Matching is literal: a granted "*" satisfies only a required "*"
#[test]
fn wildcard_grant_is_literal() {
    let required = PrivilegeRecord::new().with(Category::Delete, ["users"]);
    let granted = PrivilegeRecord::new().with(Category::Delete, ["*"]);

    assert_eq!(
        missing_privileges(&required, &granted),
        Some(privileges(&["delete:users"]))
    );

    let star_required = PrivilegeRecord::new().with(Category::Delete, ["*"]);
    assert_eq!(missing_privileges(&star_required, &granted), None);
}

/// The full wildcard record fails every concrete requirement
#[test]
fn wildcard_record_misses_concrete_scopes() {
    let required = PrivilegeRecord::new()
        .with(Category::Read, ["articles"])
        .with(Category::Update, ["articles"]);

    assert_eq!(
        missing_privileges(&required, &PrivilegeRecord::wildcard()),
        Some(privileges(&["read:articles", "update:articles"]))
    );
}

/// Result is never an empty list: strictly None or length >= 1
#[test]
fn result_never_empty() {
    let required = PrivilegeRecord::new().with(Category::Read, ["articles"]);
    let granted = PrivilegeRecord::new().with(Category::Read, ["articles"]);

    match missing_privileges(&required, &granted) {
        None => {}
        Some(missing) => assert!(!missing.is_empty()),
    }
}

// ============================================================================
// Ordering
// ============================================================================

/// Missing entries keep the canonical category order and the required
/// record's scope order
#[test]
fn order_preserved() {
    let required = PrivilegeRecord::new()
        .with(Category::Delete, ["users", "articles"])
        .with(Category::Create, ["comments"]);
    let granted = PrivilegeRecord::new();

    // create comes before delete in canonical order; scope order is as given
    assert_eq!(
        missing_privileges(&required, &granted),
        Some(privileges(&["create:comments", "delete:users", "delete:articles"]))
    );
}

/// Satisfied scopes drop out without disturbing the order of the rest
#[test]
fn partial_grants_keep_relative_order() {
    let required = PrivilegeRecord::new().with(Category::Read, ["a", "b", "c"]);
    let granted = PrivilegeRecord::new().with(Category::Read, ["b"]);

    assert_eq!(
        missing_privileges(&required, &granted),
        Some(privileges(&["read:a", "read:c"]))
    );
}

/// Duplicate required scopes are reported once per occurrence
#[test]
fn duplicate_required_scopes_reported_each_time() {
    let required = PrivilegeRecord::new().with(Category::Read, ["articles", "articles"]);
    let granted = PrivilegeRecord::new();

    assert_eq!(
        missing_privileges(&required, &granted),
        Some(privileges(&["read:articles", "read:articles"]))
    );
}

/// Duplicates on the granted side are harmless
#[test]
fn duplicate_grants_still_satisfy() {
    let required = PrivilegeRecord::new().with(Category::Read, ["articles"]);
    let granted = PrivilegeRecord::new().with(Category::Read, ["articles", "articles"]);

    assert_eq!(missing_privileges(&required, &granted), None);
}

/// Empty-string scopes are ordinary scopes under literal matching
#[test]
fn empty_scope_matched_literally() {
    let required = PrivilegeRecord::new().with(Category::Update, [""]);

    assert_eq!(
        missing_privileges(&required, &PrivilegeRecord::new()),
        Some(privileges(&["update:"]))
    );
    assert_eq!(
        missing_privileges(&required, &PrivilegeRecord::new().with(Category::Update, [""])),
        None
    );
}
