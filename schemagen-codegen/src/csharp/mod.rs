//! C# code generation modules.
//!
//! Targets the Colyseus C# schema runtime: classes become `Schema`
//! subclasses with `[Type]` attributes, interfaces become MessagePack DTOs,
//! and enums become integer enums or constant structs.

pub mod classes;
pub mod enums;
pub mod interfaces;
pub mod properties;
pub mod types;

pub use classes::ClassGenerator;
pub use enums::EnumGenerator;
pub use interfaces::InterfaceGenerator;
pub use properties::PropertyGenerator;
pub use types::{PrimitiveType, TypeResolver, TypeTable};

use crate::backend::Backend;
use crate::error::CodegenError;
use crate::generator::{GeneratedFile, Generator};
use crate::options::GenerateOptions;
use schemagen_schema::Context;

/// Source file extension for generated C#.
pub const EXTENSION: &str = "cs";

/// C# backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct CSharpBackend;

impl Backend for CSharpBackend {
    fn name(&self) -> &'static str {
        "csharp"
    }

    fn language(&self) -> &'static str {
        "csharp"
    }

    fn extension(&self) -> &'static str {
        EXTENSION
    }

    fn generate(
        &self,
        context: &Context,
        options: &GenerateOptions,
    ) -> Result<Vec<GeneratedFile>, CodegenError> {
        Generator::new(context, options).generate()
    }
}

/// Opens the optional namespace block, including the separating blank line.
fn open_namespace(output: &mut String, options: &GenerateOptions) {
    match options.namespace() {
        Some(namespace) => output.push_str(&format!("\nnamespace {} {{\n", namespace)),
        None => output.push('\n'),
    }
}

/// Closes the optional namespace block.
fn close_namespace(output: &mut String, options: &GenerateOptions) {
    if options.namespace().is_some() {
        output.push_str("}\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_metadata() {
        let backend = CSharpBackend;
        assert_eq!(backend.name(), "csharp");
        assert_eq!(backend.language(), "csharp");
        assert_eq!(backend.extension(), "cs");
    }

    #[test]
    fn test_namespace_wrapping() {
        let options = GenerateOptions::new().with_namespace("Game");
        let mut output = String::new();
        open_namespace(&mut output, &options);
        close_namespace(&mut output, &options);
        assert_eq!(output, "\nnamespace Game {\n}\n");

        let mut output = String::new();
        open_namespace(&mut output, &GenerateOptions::new());
        close_namespace(&mut output, &GenerateOptions::new());
        assert_eq!(output, "\n");
    }
}
