//! Artifact writing for pipeline outputs.
//!
//! All writes go through [`WritePort`] so embedders and tests can capture
//! them without touching the filesystem. Files are overwritten in place;
//! there is no atomic rename and concurrent writers to one directory race.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use schemasync_fixtures::FixtureSet;
use schemasync_render::render_check_md;
use schemasync_types::report::CheckReport;
use serde_json::Value;
use tracing::debug;

pub const VALID_FIXTURE_FILE: &str = "valid.json";
pub const INVALID_FIXTURE_FILE: &str = "invalid.json";
pub const REPORT_JSON_FILE: &str = "report.json";
pub const REPORT_MD_FILE: &str = "report.md";

/// File-system write operations.
pub trait WritePort {
    fn write_file(&self, path: &Utf8Path, contents: &[u8]) -> anyhow::Result<()>;
    fn create_dir_all(&self, path: &Utf8Path) -> anyhow::Result<()>;
}

/// Filesystem-backed [`WritePort`].
#[derive(Debug, Clone, Default)]
pub struct FsWritePort;

impl WritePort for FsWritePort {
    fn write_file(&self, path: &Utf8Path, contents: &[u8]) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create parent dir for {}", path))?;
        }
        fs::write(path, contents).with_context(|| format!("write {}", path))
    }

    fn create_dir_all(&self, path: &Utf8Path) -> anyhow::Result<()> {
        fs::create_dir_all(path).with_context(|| format!("create_dir_all {}", path))
    }
}

/// Paths written by [`write_fixtures`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFixtures {
    pub valid: Utf8PathBuf,
    pub invalid: Utf8PathBuf,
}

/// Write both fixture payloads as pretty-printed JSON under `out_dir`.
pub fn write_fixtures(
    set: &FixtureSet,
    out_dir: &Utf8Path,
    writer: &dyn WritePort,
) -> anyhow::Result<WrittenFixtures> {
    writer.create_dir_all(out_dir)?;

    let valid = out_dir.join(VALID_FIXTURE_FILE);
    write_json(writer, &valid, &set.valid).context("write valid fixtures")?;

    let invalid = out_dir.join(INVALID_FIXTURE_FILE);
    write_json(writer, &invalid, &set.invalid).context("write invalid fixtures")?;

    debug!(%valid, %invalid, "wrote fixtures");
    Ok(WrittenFixtures { valid, invalid })
}

/// Write `report.json` and `report.md` under `out_dir`.
pub fn write_check_report(
    report: &CheckReport,
    out_dir: &Utf8Path,
    writer: &dyn WritePort,
) -> anyhow::Result<()> {
    writer.create_dir_all(out_dir)?;

    let json = serde_json::to_string_pretty(report).context("serialize check report")?;
    writer.write_file(&out_dir.join(REPORT_JSON_FILE), json.as_bytes())?;

    let md = render_check_md(report);
    writer.write_file(&out_dir.join(REPORT_MD_FILE), md.as_bytes())?;

    debug!(%out_dir, "wrote check report");
    Ok(())
}

fn write_json(writer: &dyn WritePort, path: &Utf8Path, value: &Value) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(value).context("serialize json")?;
    writer.write_file(path, s.as_bytes())
}
