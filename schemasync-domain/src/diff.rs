use schemasync_types::{FieldIndex, Issue, IssueKind};
use tracing::debug;

/// Diff two indexes into an ordered list of issues.
///
/// Order: one pass over the schema index (missing fields before unknown
/// fields for each type), then every rules-only type. Both indexes enumerate
/// in sorted order, so the output is identical for identical inputs.
pub fn diff_indexes(schema: &FieldIndex, rules: &FieldIndex) -> Vec<Issue> {
    let mut issues = Vec::new();

    for (type_name, schema_fields) in schema.iter() {
        let Some(rule_fields) = rules.fields(type_name) else {
            issues.push(Issue::type_level(IssueKind::TypeMissingInRules, type_name));
            continue;
        };

        let missing: Vec<&String> = schema_fields.difference(rule_fields).collect();
        let extra: Vec<&String> = rule_fields.difference(schema_fields).collect();

        if !missing.is_empty() {
            issues.push(Issue::field_level(
                IssueKind::MissingInRules,
                type_name,
                missing.into_iter().cloned(),
            ));
        }
        if !extra.is_empty() {
            issues.push(Issue::field_level(
                IssueKind::UnknownInSchema,
                type_name,
                extra.into_iter().cloned(),
            ));
        }
    }

    for type_name in rules.type_names() {
        if !schema.contains_type(type_name) {
            issues.push(Issue::type_level(IssueKind::TypeMissingInSchema, type_name));
        }
    }

    debug!(
        schema_types = schema.len(),
        rules_types = rules.len(),
        issues = issues.len(),
        "diffed indexes"
    );
    issues
}

/// An empty issue list is the only passing outcome.
pub fn is_consistent(issues: &[Issue]) -> bool {
    issues.is_empty()
}
