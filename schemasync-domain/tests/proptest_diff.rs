//! Property-based tests for the consistency differ.
//!
//! These tests verify that:
//! - Diffing the same indexes twice produces identical issue sequences
//! - Identical indexes produce no issues
//! - Schema-driven issues always precede rules-only issues

use proptest::prelude::*;
use schemasync_domain::diff_indexes;
use schemasync_types::{FieldIndex, IssueKind};

/// Strategy to generate a small field index.
fn arb_index() -> impl Strategy<Value = FieldIndex> {
    prop::collection::btree_map(
        prop::string::string_regex(r"[A-Z][a-z]{0,5}").unwrap(),
        prop::collection::btree_set(
            prop::string::string_regex(r"[a-z][a-z0-9_]{0,5}").unwrap(),
            0..6,
        ),
        0..6,
    )
    .prop_map(|m| m.into_iter().collect::<FieldIndex>())
}

proptest! {
    #[test]
    fn diff_is_deterministic(schema in arb_index(), rules in arb_index()) {
        prop_assert_eq!(diff_indexes(&schema, &rules), diff_indexes(&schema, &rules));
    }

    #[test]
    fn identical_indexes_are_consistent(index in arb_index()) {
        let copy = index.clone();
        prop_assert!(diff_indexes(&index, &copy).is_empty());
    }

    #[test]
    fn rules_only_issues_come_last(schema in arb_index(), rules in arb_index()) {
        let issues = diff_indexes(&schema, &rules);
        let first_rules_only = issues
            .iter()
            .position(|i| i.kind == IssueKind::TypeMissingInSchema)
            .unwrap_or(issues.len());
        for issue in &issues[first_rules_only..] {
            prop_assert_eq!(issue.kind, IssueKind::TypeMissingInSchema);
        }
    }

    #[test]
    fn every_type_difference_is_reported(schema in arb_index(), rules in arb_index()) {
        let issues = diff_indexes(&schema, &rules);
        for name in schema.type_names() {
            if !rules.contains_type(name) {
                let found = issues
                    .iter()
                    .any(|i| i.kind == IssueKind::TypeMissingInRules && i.type_name == name);
                prop_assert!(found, "no type_missing_in_rules issue for {}", name);
            }
        }
        for name in rules.type_names() {
            if !schema.contains_type(name) {
                let found = issues
                    .iter()
                    .any(|i| i.kind == IssueKind::TypeMissingInSchema && i.type_name == name);
                prop_assert!(found, "no type_missing_in_schema issue for {}", name);
            }
        }
    }
}
