//! Backend trait.

use crate::error::CodegenError;
use crate::generator::GeneratedFile;
use crate::options::GenerateOptions;
use schemagen_schema::Context;

/// A target-language code generation backend.
///
/// Each backend hardcodes its own rendering and type table; the trait only
/// fixes the shape of a generation run so callers can pick a backend at
/// runtime.
pub trait Backend: Send + Sync {
    /// Unique backend identifier (e.g., "csharp").
    fn name(&self) -> &'static str;

    /// Target language.
    fn language(&self) -> &'static str;

    /// File extension for generated code, without the dot.
    fn extension(&self) -> &'static str;

    /// Generates one source file per descriptor in `context`.
    ///
    /// # Errors
    /// Returns `CodegenError` if a descriptor cannot be rendered.
    fn generate(
        &self,
        context: &Context,
        options: &GenerateOptions,
    ) -> Result<Vec<GeneratedFile>, CodegenError>;
}
