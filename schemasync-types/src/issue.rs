use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a consistency issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// Schema declares fields the rules never mention.
    MissingInRules,
    /// Rules mention fields the schema does not declare.
    UnknownInSchema,
    /// Schema type has no section in the rules.
    TypeMissingInRules,
    /// Rules section names a type the schema does not declare.
    TypeMissingInSchema,
}

/// One human-readable finding of the consistency differ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub kind: IssueKind,
    pub type_name: String,

    /// Offending field names, sorted. Empty for type-level issues.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<String>,
}

impl Issue {
    pub fn type_level(kind: IssueKind, type_name: impl Into<String>) -> Self {
        Self {
            kind,
            type_name: type_name.into(),
            fields: Vec::new(),
        }
    }

    pub fn field_level<F: Into<String>>(
        kind: IssueKind,
        type_name: impl Into<String>,
        fields: impl IntoIterator<Item = F>,
    ) -> Self {
        Self {
            kind,
            type_name: type_name.into(),
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = &self.type_name;
        match self.kind {
            IssueKind::MissingInRules => write!(
                f,
                "type {}: fields missing in rules → {}",
                t,
                self.fields.join(", ")
            ),
            IssueKind::UnknownInSchema => write!(
                f,
                "type {}: rules mention non-existent fields → {}",
                t,
                self.fields.join(", ")
            ),
            IssueKind::TypeMissingInRules => {
                write!(f, "Type {} defined in schema but missing in rules", t)
            }
            IssueKind::TypeMissingInSchema => {
                write!(f, "Type {} defined in rules but not in schema", t)
            }
        }
    }
}
