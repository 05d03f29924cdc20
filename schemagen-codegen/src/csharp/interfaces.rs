//! Data-carrier (DTO) code generation.

use crate::csharp::properties::PropertyGenerator;
use crate::csharp::{close_namespace, open_namespace};
use crate::error::CodegenError;
use crate::options::GenerateOptions;
use schemagen_schema::InterfaceDef;

/// Generator for MessagePack data carriers.
pub struct InterfaceGenerator<'a> {
    properties: PropertyGenerator<'a>,
    options: &'a GenerateOptions,
}

impl<'a> InterfaceGenerator<'a> {
    /// Creates a new interface generator.
    #[must_use]
    pub fn new(properties: PropertyGenerator<'a>, options: &'a GenerateOptions) -> Self {
        Self {
            properties,
            options,
        }
    }

    /// Generates the source unit for one interface.
    ///
    /// # Errors
    /// Returns `CodegenError` if any property type cannot be resolved.
    pub fn generate(&self, interface: &InterfaceDef) -> Result<String, CodegenError> {
        let indent = self.options.indent();
        let fields = interface
            .properties
            .iter()
            .map(|prop| self.properties.generate_dto(&interface.name, prop, indent))
            .collect::<Result<Vec<_>, _>>()?;

        let mut output = String::new();
        output.push_str("using MessagePack;\n");
        if let Some(using) = self.options.using() {
            output.push_str(&format!("using {};\n", using));
        }
        open_namespace(&mut output, self.options);

        output.push_str(&format!(
            "{}[MessagePackObject(keyAsPropertyName: true)]\n",
            indent
        ));
        output.push_str(&format!("{}public class {} {{\n", indent, interface.name));
        for field in &fields {
            output.push_str(field);
            output.push('\n');
        }
        output.push_str(&format!("{}}}\n", indent));
        close_namespace(&mut output, self.options);

        Ok(output)
    }
}
