//! Rules-document ingestion.
//!
//! The rules document is written by hand and is often half-finished, so the
//! parser is best-effort: it never fails, and lines it cannot place are
//! dropped. Every dropped line is still reported through
//! [`RulesParse::diagnostics`] for callers that want stricter checking.
//!
//! Grammar, per trimmed line:
//!
//! ```text
//! User:              opens type `User` (last header for a name wins)
//!   - id: required   adds field `id` to the open type
//!   - must be set    dropped (no `name:`)
//! ```

mod cursor;

pub use cursor::{Cursor, LineEvent, step};

use schemasync_types::{FieldIndex, FieldIndexBuilder, RulesDiagnostic, RulesDiagnosticKind};
use tracing::debug;

/// Result of parsing a rules document.
#[derive(Debug, Clone, Default)]
pub struct RulesParse {
    pub index: FieldIndex,
    pub diagnostics: Vec<RulesDiagnostic>,
}

/// Parse `text` into a field index plus diagnostics for every tolerated line.
pub fn parse_rules(text: &str) -> RulesParse {
    let mut builder = FieldIndexBuilder::new();
    let mut diagnostics = Vec::new();

    let mut flag = |line_no: usize, kind: RulesDiagnosticKind, text: &str| {
        diagnostics.push(RulesDiagnostic {
            line: line_no,
            kind,
            text: text.to_string(),
        });
    };

    text.lines()
        .enumerate()
        .fold(Cursor::default(), |cursor, (idx, raw)| {
            let line = raw.trim();
            let line_no = idx + 1;
            let (next, event) = step(cursor, line);
            match event {
                LineEvent::Blank => {}
                LineEvent::OpenType { name, well_formed } => {
                    if !well_formed {
                        flag(line_no, RulesDiagnosticKind::MalformedHeader, line);
                    }
                    if builder.open_type(name) {
                        flag(line_no, RulesDiagnosticKind::RedefinedType, line);
                    }
                }
                LineEvent::Field { type_name, field } => {
                    builder.add_field(&type_name, field);
                }
                LineEvent::Dropped(kind) => flag(line_no, kind, line),
            }
            next
        });

    let index = builder.build();
    debug!(
        types = index.len(),
        fields = index.field_count(),
        diagnostics = diagnostics.len(),
        "indexed rules"
    );
    RulesParse { index, diagnostics }
}

/// Parse `text` into a field index, discarding diagnostics.
pub fn index_rules(text: &str) -> FieldIndex {
    parse_rules(text).index
}
