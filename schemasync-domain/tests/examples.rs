//! End-to-end checks: SDL + rules text through both indexers into the differ.

use pretty_assertions::assert_eq;
use schemasync_domain::{diff_indexes, is_consistent};
use schemasync_rules::index_rules;
use schemasync_schema::index_schema;
use std::collections::BTreeSet;

fn messages(schema: &str, rules: &str) -> Vec<String> {
    let schema_index = index_schema(schema).expect("valid schema");
    let rules_index = index_rules(rules);
    diff_indexes(&schema_index, &rules_index)
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[test]
fn single_missing_field() {
    let issues = messages("type User { id: ID! name: String }", "User:\n  - id:\n");
    assert_eq!(
        issues,
        vec!["type User: fields missing in rules → name".to_string()]
    );
}

#[test]
fn ghost_type_in_rules() {
    let issues = messages(
        "type User { id: ID! }",
        "User:\n  - id: required\nGhost:\n  - boo: spooky\n",
    );
    assert_eq!(
        issues,
        vec!["Type Ghost defined in rules but not in schema".to_string()]
    );
}

#[test]
fn fully_covered_schema_is_consistent() {
    let schema = r#"
enum OrderStatus { PENDING CONFIRMED }
type User { id: ID! name: String email: String orders: [Order!]! }
type Order { id: ID! status: OrderStatus }
"#;
    let rules = "\
User:
  - id: non-empty
  - name: 1..100 characters
  - email: RFC 5322 address
  - orders: may be empty
Order:
  - id: non-empty
  - status: one of PENDING, CONFIRMED
";
    let schema_index = index_schema(schema).unwrap();
    let issues = diff_indexes(&schema_index, &index_rules(rules));
    assert!(is_consistent(&issues), "unexpected issues: {:?}", issues);
}

#[test]
fn multi_field_messages_compare_as_sets() {
    let issues = messages(
        "type User { id: ID! name: String email: String }",
        "User:\n- id:\n- age:\n- height:\n",
    );
    assert_eq!(issues.len(), 2);

    let (prefix, list) = issues[0].split_once(" → ").unwrap();
    assert_eq!(prefix, "type User: fields missing in rules");
    let got: BTreeSet<&str> = list.split(", ").collect();
    assert_eq!(got, BTreeSet::from(["email", "name"]));

    let (prefix, list) = issues[1].split_once(" → ").unwrap();
    assert_eq!(prefix, "type User: rules mention non-existent fields");
    let got: BTreeSet<&str> = list.split(", ").collect();
    assert_eq!(got, BTreeSet::from(["age", "height"]));
}

#[test]
fn schema_type_without_rules_section() {
    let issues = messages("type User { id: ID! } type Order { id: ID! }", "User:\n- id:\n");
    assert_eq!(
        issues,
        vec!["Type Order defined in schema but missing in rules".to_string()]
    );
}
