//! The check and generate pipelines.

use crate::error::ToolError;
use crate::ports::{GenerationGateway, GenerationRequest, SourcePort, WritePort};
use crate::settings::{CheckSettings, GenerateSettings};
use camino::Utf8Path;
use chrono::Utc;
use schemasync_artifacts::{WrittenFixtures, write_check_report, write_fixtures};
use schemasync_domain::diff_indexes;
use schemasync_fixtures::{MalformedGenerationOutput, build_prompt, validate_response};
use schemasync_rules::parse_rules;
use schemasync_schema::index_schema;
use schemasync_types::FieldIndex;
use schemasync_types::report::{
    CheckCounts, CheckInputs, CheckReport, CheckStatus, CheckVerdict, InputRef, RunInfo, ToolInfo,
    reasons,
};
use sha2::{Digest, Sha256};
use tracing::{debug, info, warn};

/// Name and version stamped into reports.
#[derive(Debug, Clone)]
pub struct ToolIdentity {
    pub name: String,
    pub version: Option<String>,
}

impl Default for ToolIdentity {
    fn default() -> Self {
        Self {
            name: "schemasync".to_string(),
            version: Some(env!("CARGO_PKG_VERSION").to_string()),
        }
    }
}

/// Result of a check run.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub report: CheckReport,
    pub schema_index: FieldIndex,
    pub rules_index: FieldIndex,
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        self.report.passed()
    }

    pub fn exit_code(&self) -> u8 {
        if self.passed() { 0 } else { 2 }
    }
}

/// Result of a generate run that did not hit a tool error.
#[derive(Debug)]
pub enum GenerateOutcome {
    /// Both fixture files were written.
    Written {
        paths: WrittenFixtures,
        missing_keys: Vec<&'static str>,
    },

    /// The service answered with text that is not a JSON object. Nothing was written.
    Malformed(MalformedGenerationOutput),

    /// The consistency check failed and generation was not attempted.
    Blocked(Box<CheckOutcome>),
}

impl GenerateOutcome {
    pub fn exit_code(&self) -> u8 {
        match self {
            GenerateOutcome::Written { .. } => 0,
            GenerateOutcome::Malformed(_) | GenerateOutcome::Blocked(_) => 2,
        }
    }
}

fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

struct Documents {
    schema: String,
    rules: String,
}

fn read_documents(
    schema_path: &Utf8Path,
    rules_path: &Utf8Path,
    sources: &dyn SourcePort,
) -> Result<Documents, ToolError> {
    let schema = sources.read_to_string(schema_path)?;
    let rules = sources.read_to_string(rules_path)?;
    debug!(%schema_path, %rules_path, "read documents");
    Ok(Documents { schema, rules })
}

fn check_documents(
    docs: &Documents,
    settings: &CheckSettings,
    tool: &ToolIdentity,
) -> Result<CheckOutcome, ToolError> {
    let started_at = Utc::now();

    let schema_index = index_schema(&docs.schema)?;
    let parsed = parse_rules(&docs.rules);
    let issues = diff_indexes(&schema_index, &parsed.index);

    let mut reasons = Vec::new();
    if !issues.is_empty() {
        reasons.push(reasons::ISSUES_FOUND.to_string());
    }
    if settings.strict && !parsed.diagnostics.is_empty() {
        reasons.push(reasons::STRICT_RULES_DIAGNOSTICS.to_string());
    }
    let status = if reasons.is_empty() {
        CheckStatus::Pass
    } else {
        CheckStatus::Fail
    };

    info!(
        issues = issues.len(),
        diagnostics = parsed.diagnostics.len(),
        ?status,
        "consistency check complete"
    );

    let report = CheckReport {
        schema: schemasync_types::schema::SCHEMASYNC_CHECK_V1.to_string(),
        tool: ToolInfo {
            name: tool.name.clone(),
            version: tool.version.clone(),
        },
        run: RunInfo {
            started_at,
            ended_at: Some(Utc::now()),
        },
        inputs: CheckInputs {
            schema: InputRef {
                path: settings.schema_path.clone(),
                sha256: Some(sha256_hex(docs.schema.as_bytes())),
            },
            rules: InputRef {
                path: settings.rules_path.clone(),
                sha256: Some(sha256_hex(docs.rules.as_bytes())),
            },
        },
        verdict: CheckVerdict {
            status,
            counts: CheckCounts {
                issues: issues.len() as u64,
                diagnostics: parsed.diagnostics.len() as u64,
            },
            reasons,
        },
        issues,
        diagnostics: parsed.diagnostics,
    };

    Ok(CheckOutcome {
        report,
        schema_index,
        rules_index: parsed.index,
    })
}

/// Index both documents and report every disagreement between them.
///
/// A schema that fails to parse is a [`ToolError::SchemaParse`]; the rules
/// document never fails.
pub fn run_check(
    settings: &CheckSettings,
    sources: &dyn SourcePort,
    tool: &ToolIdentity,
) -> Result<CheckOutcome, ToolError> {
    let docs = read_documents(&settings.schema_path, &settings.rules_path, sources)?;
    check_documents(&docs, settings, tool)
}

/// Write `report.json` and `report.md` for a check run.
pub fn write_check_artifacts(
    outcome: &CheckOutcome,
    out_dir: &Utf8Path,
    writer: &dyn WritePort,
) -> anyhow::Result<()> {
    write_check_report(&outcome.report, out_dir, writer)
}

/// Ask the generation service for valid and invalid fixtures and write them.
///
/// Transport failures are tool errors. Output that is not a JSON object is
/// returned as [`GenerateOutcome::Malformed`] and leaves `out_dir` untouched.
pub fn run_generate(
    settings: &GenerateSettings,
    sources: &dyn SourcePort,
    gateway: &dyn GenerationGateway,
    writer: &dyn WritePort,
    tool: &ToolIdentity,
) -> Result<GenerateOutcome, ToolError> {
    let docs = read_documents(&settings.schema_path, &settings.rules_path, sources)?;

    if settings.require_consistent {
        let check = check_documents(&docs, &settings.check_settings(), tool)?;
        if !check.passed() {
            warn!(
                issues = check.report.issues.len(),
                "consistency check failed, skipping generation"
            );
            return Ok(GenerateOutcome::Blocked(Box::new(check)));
        }
    }

    let request = build_prompt(&docs.schema, &docs.rules);
    let raw = gateway.generate(&GenerationRequest {
        config: &settings.generation,
        request: &request,
    })?;
    debug!(bytes = raw.len(), "received generation output");

    let set = match validate_response(&raw) {
        Ok(set) => set,
        Err(malformed) => {
            warn!(reason = %malformed.reason, "generation output rejected");
            return Ok(GenerateOutcome::Malformed(malformed));
        }
    };

    let paths = write_fixtures(&set, &settings.out_dir, writer)?;
    info!(out_dir = %settings.out_dir, "fixtures written");
    Ok(GenerateOutcome::Written {
        paths,
        missing_keys: set.missing_keys,
    })
}
