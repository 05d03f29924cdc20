//! Schema class code generation.

use crate::csharp::properties::PropertyGenerator;
use crate::csharp::{close_namespace, open_namespace};
use crate::error::CodegenError;
use crate::options::GenerateOptions;
use schemagen_schema::ClassDef;

/// Generator for schema-tracked classes.
pub struct ClassGenerator<'a> {
    properties: PropertyGenerator<'a>,
    options: &'a GenerateOptions,
}

impl<'a> ClassGenerator<'a> {
    /// Creates a new class generator.
    #[must_use]
    pub fn new(properties: PropertyGenerator<'a>, options: &'a GenerateOptions) -> Self {
        Self {
            properties,
            options,
        }
    }

    /// Generates the source unit for one class.
    ///
    /// # Errors
    /// Returns `CodegenError` if any property type cannot be resolved.
    pub fn generate(&self, class: &ClassDef) -> Result<String, CodegenError> {
        let indent = self.options.indent();
        let fields = class
            .properties
            .iter()
            .map(|prop| self.properties.generate(&class.name, prop, indent))
            .collect::<Result<Vec<_>, _>>()?;

        let mut output = String::new();
        output.push_str("using Colyseus.Schema;\n");
        output.push_str("using UnityEngine.Scripting;\n");
        open_namespace(&mut output, self.options);

        output.push_str(&format!(
            "{}public partial class {} : {} {{\n",
            indent, class.name, class.extends
        ));
        output.push_str(&format!("{}\t[Preserve]\n", indent));
        output.push_str(&format!("{}\tpublic {}() {{ }}\n", indent, class.name));

        if !fields.is_empty() {
            output.push('\n');
            output.push_str(&fields.join("\n\n"));
            output.push('\n');
        }

        output.push_str(&format!("{}}}\n", indent));
        close_namespace(&mut output, self.options);

        Ok(output)
    }
}
