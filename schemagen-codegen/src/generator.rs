//! Generation entry point.
//!
//! Walks a [`Context`] and renders one C# source file per descriptor:
//! classes first, then interfaces, then enums, each in context order.

use crate::csharp::{
    ClassGenerator, EXTENSION, EnumGenerator, InterfaceGenerator, PropertyGenerator,
    TypeResolver, TypeTable,
};
use crate::error::CodegenError;
use crate::options::GenerateOptions;
use schemagen_schema::{ClassDef, Context, EnumDef, InterfaceDef};
use std::collections::HashSet;
use tracing::{debug, warn};

/// One generated source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// File name, including extension.
    pub name: String,
    /// Complete source text.
    pub content: String,
}

/// A descriptor selected for generation.
#[derive(Debug, Clone, Copy)]
pub enum Descriptor<'a> {
    /// Schema-tracked class.
    Class(&'a ClassDef),
    /// Plain data carrier.
    Interface(&'a InterfaceDef),
    /// Enum or constant group.
    Enum(&'a EnumDef),
}

impl<'a> Descriptor<'a> {
    /// Returns the descriptor name.
    #[must_use]
    pub fn name(&self) -> &'a str {
        match *self {
            Self::Class(c) => &c.name,
            Self::Interface(i) => &i.name,
            Self::Enum(e) => &e.name,
        }
    }

    /// Returns the descriptor kind, for diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Class(_) => "class",
            Self::Interface(_) => "interface",
            Self::Enum(_) => "enum",
        }
    }
}

/// C# code generator for one context.
///
/// The type table is owned by the generator, so concurrent or repeated
/// runs never share enum registrations.
pub struct Generator<'a> {
    context: &'a Context,
    options: &'a GenerateOptions,
    table: TypeTable,
}

impl<'a> Generator<'a> {
    /// Creates a generator, registering every enum of `context` as a type.
    #[must_use]
    pub fn new(context: &'a Context, options: &'a GenerateOptions) -> Self {
        Self {
            context,
            options,
            table: TypeTable::for_context(context),
        }
    }

    /// Returns the type table of this run.
    #[must_use]
    pub fn type_table(&self) -> &TypeTable {
        &self.table
    }

    /// Iterates the descriptors that produce files, in output order.
    ///
    /// The reserved operation enum is skipped.
    pub fn descriptors(&self) -> impl Iterator<Item = Descriptor<'a>> {
        let context = self.context;
        context
            .classes
            .iter()
            .map(Descriptor::Class)
            .chain(context.interfaces.iter().map(Descriptor::Interface))
            .chain(context.user_enums().map(Descriptor::Enum))
    }

    /// Generates all source files.
    ///
    /// # Returns
    /// One file per class, interface, and non-reserved enum.
    ///
    /// # Errors
    /// Returns `CodegenError` if a property type cannot be resolved, a
    /// descriptor has no name, or two descriptors map to the same file.
    pub fn generate(&self) -> Result<Vec<GeneratedFile>, CodegenError> {
        let properties = PropertyGenerator::new(TypeResolver::new(&self.table));
        let classes = ClassGenerator::new(properties, self.options);
        let interfaces = InterfaceGenerator::new(properties, self.options);
        let enums = EnumGenerator::new(self.options);

        if self.context.enums.iter().any(EnumDef::is_reserved) {
            debug!("skipping reserved operation enum");
        }

        let mut seen = HashSet::new();
        let mut files = Vec::new();

        for descriptor in self.descriptors() {
            let name = descriptor.name();
            if name.is_empty() {
                return Err(CodegenError::generation(format!(
                    "{} descriptor without a name",
                    descriptor.kind()
                )));
            }

            let file_name = format!("{}.{}", name, EXTENSION);
            if !seen.insert(file_name.clone()) {
                return Err(CodegenError::DuplicateOutput {
                    file: file_name,
                    kind: descriptor.kind(),
                    descriptor: name.to_string(),
                });
            }

            let content = match descriptor {
                Descriptor::Class(class) => classes.generate(class),
                Descriptor::Interface(interface) => interfaces.generate(interface),
                Descriptor::Enum(enum_def) => enums.generate(enum_def),
            }
            .inspect_err(|err| warn!(descriptor = name, error = %err, "generation failed"))?;

            debug!(file = %file_name, kind = descriptor.kind(), "generated");
            files.push(GeneratedFile {
                name: file_name,
                content,
            });
        }

        debug!(files = files.len(), "generation complete");
        Ok(files)
    }
}
