//! Error types for the schemasync pipelines.
//!
//! Exit codes:
//! - 0: consistent / fixtures written
//! - 1: tool error (schema parse, transport, I/O, config)
//! - 2: check failed, generation output malformed, or generation blocked by the check

use schemasync_schema::SchemaParseError;
use thiserror::Error;

/// Longest response body kept in a [`GenerationTransportError::Status`].
const MAX_ERROR_BODY: usize = 1024;

/// Fatal failure talking to the generation service. Never retried.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenerationTransportError {
    /// The request could not be sent or the body could not be read.
    #[error("generation request failed: {message}")]
    Transport { message: String },

    /// The endpoint answered with a non-success status.
    #[error("generation endpoint returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The endpoint answered, but not with `choices[0].message.content`.
    #[error("unexpected generation response: {message}")]
    ResponseShape { message: String },
}

impl GenerationTransportError {
    pub fn status(status: u16, body: &str) -> Self {
        let body = match body.char_indices().nth(MAX_ERROR_BODY) {
            Some((cut, _)) => format!("{}…", &body[..cut]),
            None => body.to_string(),
        };
        Self::Status { status, body }
    }
}

/// Error type for pipeline results.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error(transparent)]
    SchemaParse(#[from] SchemaParseError),

    #[error(transparent)]
    Transport(#[from] GenerationTransportError),

    #[error("{0:#}")]
    Internal(#[from] anyhow::Error),
}

impl ToolError {
    /// Every tool error is a hard failure.
    pub fn exit_code(&self) -> u8 {
        1
    }
}
