//! # schemagen Codegen
//!
//! C# code generation from schema descriptors.
//!
//! This crate provides:
//! - A per-run type table and property type resolution
//! - Schema class, data-carrier, and enum/constant-group rendering
//! - A generation entry point returning one source file per descriptor
//!
//! Writing the returned files to disk is left to the caller.

pub mod backend;
pub mod csharp;
pub mod error;
pub mod generator;
pub mod options;

pub use backend::Backend;
pub use csharp::CSharpBackend;
pub use error::CodegenError;
pub use generator::{Descriptor, GeneratedFile, Generator};
pub use options::GenerateOptions;

use schemagen_schema::Context;

/// Generates C# sources for every descriptor in a context.
///
/// # Arguments
/// * `context` - Resolved schema descriptors
/// * `options` - Namespace and import configuration
///
/// # Returns
/// One generated file per class, interface, and non-reserved enum.
///
/// # Errors
/// Returns `CodegenError` if any descriptor cannot be rendered.
pub fn generate(
    context: &Context,
    options: &GenerateOptions,
) -> Result<Vec<GeneratedFile>, CodegenError> {
    Generator::new(context, options).generate()
}

/// Generates C# sources from a JSON-serialized context.
///
/// # Errors
/// Returns `CodegenError` if parsing or generation fails.
pub fn generate_from_json(
    json: &str,
    options: &GenerateOptions,
) -> Result<Vec<GeneratedFile>, CodegenError> {
    let context = schemagen_schema::parse_context(json)?;
    generate(&context, options)
}

/// Generates C# sources from a JSON-serialized context file.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, or generation fails.
pub fn generate_from_file(
    path: &std::path::Path,
    options: &GenerateOptions,
) -> Result<Vec<GeneratedFile>, CodegenError> {
    let json = std::fs::read_to_string(path)?;
    generate_from_json(&json, options)
}
