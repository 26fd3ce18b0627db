//! Fixture synthesis boundaries.
//!
//! The generative service itself is a black box. This crate owns the two
//! deterministic edges around it: building the prompt that goes out, and
//! validating the text that comes back. Validation is tolerant about missing
//! members but never repairs the text; anything that is not a JSON object is
//! reported as [`MalformedGenerationOutput`].

mod prompt;
mod response;
pub mod wire;

pub use prompt::{FixtureRequest, SYSTEM_PROMPT, build_prompt};
pub use response::{
    FixtureSet, INVALID_DATA_KEY, MalformedGenerationOutput, VALID_DATA_KEY, validate_response,
};
