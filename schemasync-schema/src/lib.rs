//! GraphQL SDL ingestion.
//!
//! Only object types matter for the consistency surface: every other kind of
//! definition (enum, scalar, union, interface, input, directive, schema) is
//! skipped. Field types, arguments, defaults and directives are discarded; the
//! index keeps field names only.

use graphql_parser::schema::{Definition, TypeDefinition, TypeExtension, parse_schema};
use schemasync_types::{FieldIndex, FieldIndexBuilder, INTROSPECTION_PREFIX};
use thiserror::Error;
use tracing::debug;

/// The schema text is not valid SDL.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("failed to parse schema: {message}")]
pub struct SchemaParseError {
    pub message: String,
}

/// Build a [`FieldIndex`] from SDL text.
///
/// `extend type` blocks add their fields to the extended type, and repeated
/// definitions of one type union their fields. Names carrying the reserved
/// introspection prefix never reach the index.
pub fn index_schema(sdl: &str) -> Result<FieldIndex, SchemaParseError> {
    let document = parse_schema::<String>(sdl).map_err(|e| SchemaParseError {
        message: e
            .to_string()
            .trim_start_matches("schema parse error: ")
            .to_string(),
    })?;

    let mut builder = FieldIndexBuilder::new();
    for definition in document.definitions {
        let (name, fields) = match definition {
            Definition::TypeDefinition(TypeDefinition::Object(object)) => {
                (object.name, object.fields)
            }
            Definition::TypeExtension(TypeExtension::Object(extension)) => {
                (extension.name, extension.fields)
            }
            _ => continue,
        };

        if name.starts_with(INTROSPECTION_PREFIX) {
            debug!(type_name = %name, "skipping reserved introspection type");
            continue;
        }

        builder.extend_type(name, fields.into_iter().map(|f| f.name));
    }

    let index = builder.build();
    debug!(
        types = index.len(),
        fields = index.field_count(),
        "indexed schema"
    );
    Ok(index)
}
