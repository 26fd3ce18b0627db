//! Shared DTOs for the schemasync workspace.
//!
//! # Design constraints
//! - Report types are serialized to disk and printed as JSON.
//! - Be conservative with breaking changes.
//! - Prefer adding optional fields over changing semantics.

pub mod config;
pub mod diagnostics;
pub mod index;
pub mod issue;
pub mod report;

pub use config::GenerationConfig;
pub use diagnostics::{RulesDiagnostic, RulesDiagnosticKind};
pub use index::{FieldIndex, FieldIndexBuilder, FieldSet};
pub use issue::{Issue, IssueKind};

/// Schema identifiers.
pub mod schema {
    pub const SCHEMASYNC_CHECK_V1: &str = "schemasync.check.v1";
}

/// Name prefix GraphQL reserves for introspection types.
pub const INTROSPECTION_PREFIX: &str = "__";
