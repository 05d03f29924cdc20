//! Error types for context loading and validation.

use thiserror::Error;

/// Error type for loading a serialized context.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON decoding error.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid context structure.
    #[error("invalid context structure: {message}")]
    InvalidStructure {
        /// Error message.
        message: String,
    },
}

/// Error type for context validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Two descriptors share a name.
    #[error("duplicate {kind} definition: '{name}'")]
    DuplicateDefinition {
        /// Kind of descriptor (class, interface, enum).
        kind: String,
        /// Name of the duplicate.
        name: String,
    },

    /// Two properties of one descriptor share a wire index.
    #[error("duplicate index {index} in '{owner}': '{first}' and '{second}'")]
    DuplicateIndex {
        /// Owning descriptor.
        owner: String,
        /// Wire index.
        index: u16,
        /// First property using the index.
        first: String,
        /// Second property using the index.
        second: String,
    },

    /// Two properties or members of one descriptor share a name.
    #[error("duplicate property '{property}' in '{owner}'")]
    DuplicateProperty {
        /// Owning descriptor.
        owner: String,
        /// Property name.
        property: String,
    },

    /// A reference or container property without a child type.
    #[error("property '{property}' in '{owner}' has type '{type_name}' but no childType")]
    MissingChildType {
        /// Owning descriptor.
        owner: String,
        /// Property name.
        property: String,
        /// Declared type.
        type_name: String,
    },

    /// A plain property carrying a child type.
    #[error("property '{property}' in '{owner}' has type '{type_name}' which takes no childType")]
    UnexpectedChildType {
        /// Owning descriptor.
        owner: String,
        /// Property name.
        property: String,
        /// Declared type.
        type_name: String,
    },

    /// Validation error.
    #[error("validation error: {message}")]
    Validation {
        /// Error message.
        message: String,
    },
}

impl SchemaError {
    /// Creates a duplicate definition error.
    pub fn duplicate(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::DuplicateDefinition {
            kind: kind.into(),
            name: name.into(),
        }
    }
}
