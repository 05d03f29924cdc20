//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! ```
//! use schemagen::prelude::*;
//! ```

// Schema types
pub use schemagen_schema::{
    ChildType, ClassDef, ContainerKind, Context, EnumDef, EnumKind, EnumMember, InterfaceDef,
    MemberValue, PropertyDef, PropertyKind, validate_context,
};

// Errors
pub use schemagen_codegen::CodegenError;
pub use schemagen_schema::{ParseError, SchemaError};

// Generation
pub use schemagen_codegen::{
    Backend, CSharpBackend, GenerateOptions, GeneratedFile, Generator, generate,
    generate_from_file, generate_from_json,
};
