//! Port traits abstracting all I/O away from the pipeline.

use crate::error::GenerationTransportError;
use camino::Utf8Path;
use schemasync_fixtures::FixtureRequest;
use schemasync_types::GenerationConfig;

pub use schemasync_artifacts::WritePort;

/// Source of the schema and rules documents.
pub trait SourcePort {
    fn read_to_string(&self, path: &Utf8Path) -> anyhow::Result<String>;
}

/// Everything the gateway needs for one call.
#[derive(Debug, Clone, Copy)]
pub struct GenerationRequest<'a> {
    pub config: &'a GenerationConfig,
    pub request: &'a FixtureRequest,
}

/// The external generation service.
///
/// Returns the raw generated text; whether it is valid fixture JSON is
/// decided downstream. The call may block indefinitely unless the
/// implementation enforces a timeout.
pub trait GenerationGateway {
    fn generate(&self, request: &GenerationRequest<'_>) -> Result<String, GenerationTransportError>;
}
