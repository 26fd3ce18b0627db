use crate::diagnostics::RulesDiagnostic;
use crate::issue::Issue;
use camino::Utf8PathBuf;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Serialized outcome of one consistency check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    /// Always [`crate::schema::SCHEMASYNC_CHECK_V1`] for reports written by this version.
    pub schema: String,
    pub tool: ToolInfo,
    pub run: RunInfo,
    pub inputs: CheckInputs,
    pub verdict: CheckVerdict,

    #[serde(default)]
    pub issues: Vec<Issue>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<RulesDiagnostic>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunInfo {
    pub started_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckInputs {
    pub schema: InputRef,
    pub rules: InputRef,
}

/// Where an input came from, plus a digest of the text that was checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRef {
    pub path: Utf8PathBuf,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha256: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckVerdict {
    pub status: CheckStatus,
    pub counts: CheckCounts,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reasons: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    Pass,
    Fail,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckCounts {
    pub issues: u64,
    pub diagnostics: u64,
}

/// Verdict reason tokens.
pub mod reasons {
    pub const ISSUES_FOUND: &str = "issues_found";
    pub const STRICT_RULES_DIAGNOSTICS: &str = "strict_rules_diagnostics";
}

impl CheckReport {
    pub fn passed(&self) -> bool {
        self.verdict.status == CheckStatus::Pass
    }
}
