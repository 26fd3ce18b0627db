//! Clap-free settings for the check and generate pipelines.

use camino::Utf8PathBuf;
use schemasync_types::GenerationConfig;

pub const DEFAULT_SCHEMA_PATH: &str = "schema.graphql";
pub const DEFAULT_RULES_PATH: &str = "rules.txt";
pub const DEFAULT_CONFIG_PATH: &str = "config.json";
pub const DEFAULT_OUT_DIR: &str = "outputs";

/// Settings for the check pipeline.
#[derive(Debug, Clone)]
pub struct CheckSettings {
    pub schema_path: Utf8PathBuf,
    pub rules_path: Utf8PathBuf,

    /// Treat rules diagnostics as failures.
    pub strict: bool,
}

impl Default for CheckSettings {
    fn default() -> Self {
        Self {
            schema_path: Utf8PathBuf::from(DEFAULT_SCHEMA_PATH),
            rules_path: Utf8PathBuf::from(DEFAULT_RULES_PATH),
            strict: false,
        }
    }
}

/// Settings for the generate pipeline.
#[derive(Debug, Clone)]
pub struct GenerateSettings {
    pub schema_path: Utf8PathBuf,
    pub rules_path: Utf8PathBuf,
    pub out_dir: Utf8PathBuf,
    pub generation: GenerationConfig,

    /// Run the check first and stop before generating if it fails.
    pub require_consistent: bool,
}

impl GenerateSettings {
    pub fn new(generation: GenerationConfig) -> Self {
        Self {
            schema_path: Utf8PathBuf::from(DEFAULT_SCHEMA_PATH),
            rules_path: Utf8PathBuf::from(DEFAULT_RULES_PATH),
            out_dir: Utf8PathBuf::from(DEFAULT_OUT_DIR),
            generation,
            require_consistent: false,
        }
    }

    pub(crate) fn check_settings(&self) -> CheckSettings {
        CheckSettings {
            schema_path: self.schema_path.clone(),
            rules_path: self.rules_path.clone(),
            strict: false,
        }
    }
}
