//! # schemagen Schema
//!
//! Descriptor model shared by every schemagen backend.
//!
//! This crate provides:
//! - Class, interface, and enum descriptors with typed properties
//! - Loading of a serialized [`Context`] produced by the schema front end
//! - Optional structural validation of a context
//!
//! Descriptors are read-only inputs to code generation; nothing in this
//! crate renders source text.

pub mod error;
pub mod parser;
pub mod properties;
pub mod types;
pub mod validation;

pub use error::{ParseError, SchemaError};
pub use parser::{parse_context, parse_context_file};
pub use properties::{ChildType, ContainerKind, PropertyDef, PropertyKind};
pub use types::{
    ClassDef, Context, EnumDef, EnumKind, EnumMember, InterfaceDef, MemberValue,
    RESERVED_OPERATION_ENUM,
};
pub use validation::validate_context;
