//! Rendering helpers for human-readable check output.

use schemasync_types::report::{CheckReport, CheckStatus};

pub const CONSISTENT_LINE: &str = "Schema and rules are consistent";
pub const ISSUES_HEADER: &str = "Consistency check found issues:";
pub const DIAGNOSTICS_HEADER: &str = "Rules diagnostics:";

/// Plain-text report for standard output.
pub fn render_check_text(report: &CheckReport, show_diagnostics: bool) -> String {
    let mut out = String::new();
    if report.issues.is_empty() {
        out.push_str(CONSISTENT_LINE);
        out.push('\n');
    } else {
        out.push_str(ISSUES_HEADER);
        out.push('\n');
        for issue in &report.issues {
            out.push_str(&format!(" - {}\n", issue));
        }
    }

    if show_diagnostics && !report.diagnostics.is_empty() {
        out.push_str(DIAGNOSTICS_HEADER);
        out.push('\n');
        for diag in &report.diagnostics {
            out.push_str(&format!(" - {}\n", diag));
        }
    }
    out
}

pub fn render_check_md(report: &CheckReport) -> String {
    let mut out = String::new();
    out.push_str("# schemasync check\n\n");
    out.push_str(&format!("- Status: `{}`\n", status_label(report.verdict.status)));
    out.push_str(&format!("- Schema: `{}`\n", report.inputs.schema.path));
    out.push_str(&format!("- Rules: `{}`\n", report.inputs.rules.path));
    out.push_str(&format!(
        "- Issues: {} (diagnostics {})\n\n",
        report.verdict.counts.issues, report.verdict.counts.diagnostics
    ));

    out.push_str("## Issues\n\n");
    if report.issues.is_empty() {
        out.push_str("_No issues found._\n");
    } else {
        for issue in &report.issues {
            out.push_str(&format!("- {}\n", issue));
        }
    }

    if !report.diagnostics.is_empty() {
        out.push_str("\n## Rules diagnostics\n\n");
        out.push_str("| Line | Kind | Text |\n");
        out.push_str("|---:|---|---|\n");
        for diag in &report.diagnostics {
            out.push_str(&format!(
                "| {} | `{}` | `{}` |\n",
                diag.line,
                diag.kind.as_str(),
                diag.text.replace('|', "\\|")
            ));
        }
    }

    out
}

fn status_label(status: CheckStatus) -> &'static str {
    match status {
        CheckStatus::Pass => "pass",
        CheckStatus::Fail => "fail",
    }
}
