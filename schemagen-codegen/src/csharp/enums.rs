//! Enum and constant-group code generation.

use crate::csharp::close_namespace;
use crate::error::CodegenError;
use crate::options::GenerateOptions;
use schemagen_schema::{EnumDef, EnumKind, EnumMember, MemberValue};

/// Generator for enums and constant groups.
pub struct EnumGenerator<'a> {
    options: &'a GenerateOptions,
}

impl<'a> EnumGenerator<'a> {
    /// Creates a new enum generator.
    #[must_use]
    pub fn new(options: &'a GenerateOptions) -> Self {
        Self { options }
    }

    /// Generates the source unit for one enum descriptor.
    ///
    /// # Errors
    /// Returns `CodegenError::ValueOutOfRange` if an enumeration member does
    /// not fit the `int` backing type.
    pub fn generate(&self, enum_def: &EnumDef) -> Result<String, CodegenError> {
        let mut output = String::new();
        let indent = self.options.indent();
        if let Some(namespace) = self.options.namespace() {
            output.push_str(&format!("namespace {} {{\n", namespace));
        }

        match enum_def.kind {
            EnumKind::Enumeration => self.generate_enum(&mut output, enum_def, indent)?,
            EnumKind::ConstantGroup => self.generate_struct(&mut output, enum_def, indent),
        }

        output.push_str(&format!("{}}}\n", indent));
        close_namespace(&mut output, self.options);
        Ok(output)
    }

    /// Generates an integer-backed enum body.
    fn generate_enum(
        &self,
        output: &mut String,
        enum_def: &EnumDef,
        indent: &str,
    ) -> Result<(), CodegenError> {
        output.push_str(&format!("{}public enum {} : int {{\n\n", indent, enum_def.name));
        for (position, member) in enum_def.members.iter().enumerate() {
            check_int_range(enum_def, member)?;
            let (_, literal) = member_literal(&member.value, position);
            output.push_str(&format!("{}\t{} = {},\n", indent, member.name, literal));
        }
        Ok(())
    }

    /// Generates a constant-group struct body.
    fn generate_struct(&self, output: &mut String, enum_def: &EnumDef, indent: &str) {
        output.push_str(&format!("{}public struct {} {{\n\n", indent, enum_def.name));
        for (position, member) in enum_def.members.iter().enumerate() {
            let (data_type, literal) = member_literal(&member.value, position);
            let literal = match member.value {
                MemberValue::Float(_) => format!("{}f", literal),
                _ => literal,
            };
            output.push_str(&format!(
                "{}\tpublic const {} {} = {};\n",
                indent, data_type, member.name, literal
            ));
        }
    }
}

/// Rejects integer values an `int`-backed enum cannot hold.
fn check_int_range(enum_def: &EnumDef, member: &EnumMember) -> Result<(), CodegenError> {
    match member.value {
        MemberValue::Integer(value) if i32::try_from(value).is_err() => {
            Err(CodegenError::ValueOutOfRange {
                owner: enum_def.name.clone(),
                member: member.name.clone(),
                value,
            })
        }
        _ => Ok(()),
    }
}

/// Returns the C# data type and literal for a member value.
fn member_literal(value: &MemberValue, position: usize) -> (&'static str, String) {
    match value {
        MemberValue::Integer(v) if i32::try_from(*v).is_ok() => ("int", v.to_string()),
        MemberValue::Integer(v) => ("long", v.to_string()),
        MemberValue::Float(v) => ("float", v.to_string()),
        MemberValue::Text(text) => ("string", format!("\"{}\"", escape_string(text))),
        MemberValue::Positional => ("int", position.to_string()),
    }
}

/// Escapes text for a regular C# string literal.
fn escape_string(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '\0' => escaped.push_str("\\0"),
            c if c.is_control() => escaped.push_str(&format!("\\u{:04x}", c as u32)),
            c => escaped.push(c),
        }
    }
    escaped
}
