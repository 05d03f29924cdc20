//! Field declaration generation.

use crate::csharp::types::TypeResolver;
use crate::error::CodegenError;
use schemagen_schema::PropertyDef;

/// Generator for single field declarations.
#[derive(Debug, Clone, Copy)]
pub struct PropertyGenerator<'a> {
    resolver: TypeResolver<'a>,
}

impl<'a> PropertyGenerator<'a> {
    /// Creates a new property generator.
    #[must_use]
    pub fn new(resolver: TypeResolver<'a>) -> Self {
        Self { resolver }
    }

    /// Generates a schema-tracked field with its `[Type]` attribute.
    ///
    /// # Arguments
    /// * `owner` - Name of the owning class, for error reporting
    /// * `prop` - Property to render
    /// * `indent` - Extra indentation (one tab inside a namespace)
    ///
    /// # Errors
    /// Returns `CodegenError` if the property type cannot be resolved.
    pub fn generate(
        &self,
        owner: &str,
        prop: &PropertyDef,
        indent: &str,
    ) -> Result<String, CodegenError> {
        let lang_type = self.resolver.resolve(owner, prop)?;
        let mut type_args = format!("\"{}\"", prop.type_name);

        let initializer = match &prop.child_type {
            Some(child) => {
                type_args.push_str(&format!(", typeof({})", lang_type));
                // Primitive element names let the runtime rebuild the element type.
                if !child.user_defined {
                    type_args.push_str(&format!(", \"{}\"", child.name));
                }
                "new()"
            }
            None => "default",
        };

        let mut output = String::new();
        if prop.deprecated {
            output.push_str(&format!(
                "\t{}[System.Obsolete(\"field '{}' is deprecated.\", true)]\n",
                indent, prop.name
            ));
        }
        output.push_str(&format!("\t{}[Type({}, {})]\n", indent, prop.index, type_args));
        output.push_str(&format!(
            "\t{}public {} {} = {};",
            indent, lang_type, prop.name, initializer
        ));

        Ok(output)
    }

    /// Generates a plain data-carrier field.
    ///
    /// # Errors
    /// Returns `CodegenError` if the property type cannot be resolved.
    pub fn generate_dto(
        &self,
        owner: &str,
        prop: &PropertyDef,
        indent: &str,
    ) -> Result<String, CodegenError> {
        let lang_type = self.resolver.resolve_dto(owner, prop)?;
        Ok(format!("\t{}public {} {};", indent, lang_type, prop.name))
    }
}
