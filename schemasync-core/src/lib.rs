//! Embeddable core library for schemasync.
//!
//! Provides a clap-free, I/O-abstracted entry point suitable for linking
//! into a test harness or other host process.
//!
//! # Port traits
//!
//! All I/O is abstracted behind port traits in [`ports`]:
//! - [`SourcePort`](ports::SourcePort): read the schema and rules documents
//! - [`GenerationGateway`](ports::GenerationGateway): call the generation service
//! - [`WritePort`](ports::WritePort): write files and create directories
//!
//! The [`adapters`] module provides default filesystem and HTTP implementations.
//!
//! # Entry points
//!
//! - [`run_check`](pipeline::run_check): index both documents and diff them
//! - [`run_generate`](pipeline::run_generate): synthesize and write fixtures

pub mod adapters;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod settings;

pub use error::{GenerationTransportError, ToolError};

// Re-exported so embedders don't need the leaf crates directly.
pub use schemasync_fixtures::{FixtureSet, MalformedGenerationOutput};
pub use schemasync_schema::SchemaParseError;
pub use schemasync_types::{FieldIndex, GenerationConfig, Issue};
