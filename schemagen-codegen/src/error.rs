//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Context loading error.
    #[error("context parse error: {0}")]
    Parse(#[from] schemagen_schema::ParseError),

    /// Schema contract violation.
    #[error("schema error: {0}")]
    Schema(#[from] schemagen_schema::SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Code generation error.
    #[error("generation error: {message}")]
    Generation {
        /// Error message.
        message: String,
    },

    /// Type name with no target-language mapping.
    #[error("unknown type '{type_name}' in property '{property}' of '{owner}'")]
    UnresolvedType {
        /// Owning descriptor.
        owner: String,
        /// Property name.
        property: String,
        /// Declared type name.
        type_name: String,
    },

    /// Child-typed property whose type is not a known container.
    #[error("unknown container type '{type_name}' in property '{property}' of '{owner}'")]
    UnknownContainer {
        /// Owning descriptor.
        owner: String,
        /// Property name.
        property: String,
        /// Declared type name.
        type_name: String,
    },

    /// Enumeration member value that does not fit the `int` backing type.
    #[error("value {value} of member '{member}' in '{owner}' is outside the int range")]
    ValueOutOfRange {
        /// Owning enum.
        owner: String,
        /// Member name.
        member: String,
        /// Declared value.
        value: i64,
    },

    /// Two descriptors would produce the same output file.
    #[error("duplicate output file '{file}' produced by {kind} '{descriptor}'")]
    DuplicateOutput {
        /// Output file name.
        file: String,
        /// Kind of the second descriptor.
        kind: &'static str,
        /// Name of the second descriptor.
        descriptor: String,
    },
}

impl CodegenError {
    /// Creates a generation error with the given message.
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }

    /// Creates an unresolved type error.
    pub fn unresolved(
        owner: impl Into<String>,
        property: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Self {
        Self::UnresolvedType {
            owner: owner.into(),
            property: property.into(),
            type_name: type_name.into(),
        }
    }
}
