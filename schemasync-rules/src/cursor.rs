use regex::Regex;
use schemasync_types::RulesDiagnosticKind;
use std::sync::LazyLock;

static FIELD_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-\s*([A-Za-z0-9_]+):").expect("field line regex"));

/// Parser position: the type section the next field line belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cursor {
    current: Option<String>,
}

impl Cursor {
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// The open section, if it can accept fields. The empty type name opened
    /// by a bare `:` line never does.
    fn accepting(&self) -> Option<&str> {
        self.current().filter(|name| !name.is_empty())
    }
}

/// Classification of one trimmed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEvent {
    Blank,
    OpenType { name: String, well_formed: bool },
    Field { type_name: String, field: String },
    Dropped(RulesDiagnosticKind),
}

/// Advance the parser by one already-trimmed line.
pub fn step(cursor: Cursor, line: &str) -> (Cursor, LineEvent) {
    if line.is_empty() {
        return (cursor, LineEvent::Blank);
    }

    if !line.starts_with('-') {
        return match line.strip_suffix(':') {
            Some(name) => {
                let event = LineEvent::OpenType {
                    name: name.to_string(),
                    well_formed: is_identifier(name),
                };
                let next = Cursor {
                    current: Some(name.to_string()),
                };
                (next, event)
            }
            None => (cursor, LineEvent::Dropped(RulesDiagnosticKind::UnrecognizedLine)),
        };
    }

    let Some(type_name) = cursor.accepting().map(str::to_string) else {
        return (cursor, LineEvent::Dropped(RulesDiagnosticKind::FieldOutsideType));
    };

    match FIELD_LINE.captures(line) {
        Some(caps) => {
            let field = caps[1].to_string();
            (cursor, LineEvent::Field { type_name, field })
        }
        None => (
            cursor,
            LineEvent::Dropped(RulesDiagnosticKind::UnmatchedFieldLine),
        ),
    }
}

fn is_identifier(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
