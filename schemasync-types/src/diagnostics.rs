use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a rules-document line was dropped or flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RulesDiagnosticKind {
    /// Dashed line seen while no type section is open.
    FieldOutsideType,
    /// Dashed line that does not look like `- name:`.
    UnmatchedFieldLine,
    /// Neither a type header nor a dashed line.
    UnrecognizedLine,
    /// Header whose name is not a bare identifier. The section is still opened.
    MalformedHeader,
    /// Header repeating an earlier type; the earlier fields are discarded.
    RedefinedType,
}

impl RulesDiagnosticKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FieldOutsideType => "field_outside_type",
            Self::UnmatchedFieldLine => "unmatched_field_line",
            Self::UnrecognizedLine => "unrecognized_line",
            Self::MalformedHeader => "malformed_header",
            Self::RedefinedType => "redefined_type",
        }
    }
}

/// A line the rules parser tolerated but did not fully understand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesDiagnostic {
    /// 1-based line number in the source document.
    pub line: usize,
    pub kind: RulesDiagnosticKind,
    /// The trimmed line text.
    pub text: String,
}

impl fmt::Display for RulesDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}: {}", self.line, self.kind.as_str(), self.text)
    }
}
