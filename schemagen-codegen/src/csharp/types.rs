//! Type table and type resolution.
//!
//! The [`TypeTable`] maps schema type names to C# type names. It is built
//! fresh for every generation run from the primitives below plus the enum
//! names of the run's context, so enum names never leak between runs.

use crate::error::CodegenError;
use schemagen_schema::properties::REF_TYPE;
use schemagen_schema::{ChildType, ContainerKind, Context, PropertyDef};
use std::collections::HashMap;

/// Schema primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    /// UTF-8 string.
    String,
    /// Untyped number.
    Number,
    /// Boolean.
    Boolean,
    /// Signed 8-bit integer.
    Int8,
    /// Unsigned 8-bit integer.
    Uint8,
    /// Signed 16-bit integer.
    Int16,
    /// Unsigned 16-bit integer.
    Uint16,
    /// Signed 32-bit integer.
    Int32,
    /// Unsigned 32-bit integer.
    Uint32,
    /// Signed 64-bit integer.
    Int64,
    /// Unsigned 64-bit integer.
    Uint64,
    /// 32-bit floating point.
    Float32,
    /// 64-bit floating point.
    Float64,
}

impl PrimitiveType {
    /// Every primitive, in table order.
    pub const ALL: [Self; 13] = [
        Self::String,
        Self::Number,
        Self::Boolean,
        Self::Int8,
        Self::Uint8,
        Self::Int16,
        Self::Uint16,
        Self::Int32,
        Self::Uint32,
        Self::Int64,
        Self::Uint64,
        Self::Float32,
        Self::Float64,
    ];

    /// Returns the C# type name for this primitive.
    #[must_use]
    pub const fn csharp_type(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "float",
            Self::Boolean => "bool",
            Self::Int8 => "sbyte",
            Self::Uint8 => "byte",
            Self::Int16 => "short",
            Self::Uint16 => "ushort",
            Self::Int32 => "int",
            Self::Uint32 => "uint",
            Self::Int64 => "long",
            Self::Uint64 => "ulong",
            Self::Float32 => "float",
            Self::Float64 => "double",
        }
    }

    /// Returns the schema type name.
    #[must_use]
    pub const fn schema_name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Int8 => "int8",
            Self::Uint8 => "uint8",
            Self::Int16 => "int16",
            Self::Uint16 => "uint16",
            Self::Int32 => "int32",
            Self::Uint32 => "uint32",
            Self::Int64 => "int64",
            Self::Uint64 => "uint64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
        }
    }

    /// Parses a primitive type from its schema name.
    #[must_use]
    pub fn from_schema_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.schema_name() == name)
    }
}

/// Mapping from schema type names to C# type names.
#[derive(Debug, Clone)]
pub struct TypeTable {
    entries: HashMap<String, String>,
}

impl TypeTable {
    /// Creates a table holding only the primitive mappings.
    #[must_use]
    pub fn new() -> Self {
        let entries = PrimitiveType::ALL
            .iter()
            .map(|p| (p.schema_name().to_string(), p.csharp_type().to_string()))
            .collect();
        Self { entries }
    }

    /// Creates a table for one run: primitives plus every enum in `context`.
    #[must_use]
    pub fn for_context(context: &Context) -> Self {
        let mut table = Self::new();
        for enum_def in &context.enums {
            table.register_enum(&enum_def.name);
        }
        table
    }

    /// Registers an enum name, mapped to itself.
    pub fn register_enum(&mut self, name: &str) {
        self.entries.insert(name.to_string(), name.to_string());
    }

    /// Looks up the C# type for a schema type name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Returns the number of mapped names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TypeTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves property descriptors to C# type expressions.
#[derive(Debug, Clone, Copy)]
pub struct TypeResolver<'a> {
    table: &'a TypeTable,
}

impl<'a> TypeResolver<'a> {
    /// Creates a resolver over the given table.
    #[must_use]
    pub fn new(table: &'a TypeTable) -> Self {
        Self { table }
    }

    /// Resolves the type of a schema-tracked field.
    ///
    /// Enum types win over everything else; child-typed properties become
    /// the referenced type or a `XxxSchema<T>` container; plain properties
    /// go through the table.
    ///
    /// # Errors
    /// Returns `CodegenError` if a type name has no mapping or a child-typed
    /// property is not a known container.
    pub fn resolve(&self, owner: &str, prop: &PropertyDef) -> Result<String, CodegenError> {
        if let Some(enum_type) = &prop.enum_type {
            return Ok(enum_type.clone());
        }

        let Some(child) = &prop.child_type else {
            return self.resolve_plain(owner, prop);
        };

        let element = self.element_type(owner, prop, child)?;
        if prop.type_name == REF_TYPE {
            return Ok(element);
        }

        let kind = self.container_kind(owner, prop)?;
        Ok(format!("{}<{}>", container_class(kind), element))
    }

    /// Resolves the type of a plain data-carrier field.
    ///
    /// Same as [`resolve`](Self::resolve), except containers flatten to a
    /// `T[]` array of their element type.
    ///
    /// # Errors
    /// Returns `CodegenError` under the same conditions as `resolve`.
    pub fn resolve_dto(&self, owner: &str, prop: &PropertyDef) -> Result<String, CodegenError> {
        match (&prop.enum_type, &prop.child_type) {
            (None, Some(child)) if prop.type_name != REF_TYPE => {
                self.container_kind(owner, prop)?;
                let element = self.element_type(owner, prop, child)?;
                Ok(format!("{element}[]"))
            }
            _ => self.resolve(owner, prop),
        }
    }

    /// Resolves a property without child type.
    fn resolve_plain(&self, owner: &str, prop: &PropertyDef) -> Result<String, CodegenError> {
        if ContainerKind::from_schema_name(&prop.type_name).is_some() {
            return Err(schemagen_schema::SchemaError::MissingChildType {
                owner: owner.to_string(),
                property: prop.name.clone(),
                type_name: prop.type_name.clone(),
            }
            .into());
        }

        self.table
            .lookup(&prop.type_name)
            .map(str::to_string)
            .ok_or_else(|| CodegenError::unresolved(owner, &prop.name, &prop.type_name))
    }

    /// Resolves a child type: user-defined names pass through verbatim.
    fn element_type(
        &self,
        owner: &str,
        prop: &PropertyDef,
        child: &ChildType,
    ) -> Result<String, CodegenError> {
        if child.user_defined {
            return Ok(child.name.clone());
        }

        self.table
            .lookup(&child.name)
            .map(str::to_string)
            .ok_or_else(|| CodegenError::unresolved(owner, &prop.name, &child.name))
    }

    fn container_kind(
        &self,
        owner: &str,
        prop: &PropertyDef,
    ) -> Result<ContainerKind, CodegenError> {
        ContainerKind::from_schema_name(&prop.type_name).ok_or_else(|| {
            CodegenError::UnknownContainer {
                owner: owner.to_string(),
                property: prop.name.clone(),
                type_name: prop.type_name.clone(),
            }
        })
    }
}

/// Returns the runtime container class for a container kind.
#[must_use]
pub fn container_class(kind: ContainerKind) -> String {
    format!("{}Schema", capitalize(kind.schema_name()))
}

/// Upper-cases the first character of a string.
#[must_use]
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
