//! Descriptor definitions.
//!
//! This module contains the data structures the schema front end hands to
//! code generation: the [`Context`] and its class, interface, and enum
//! descriptors.

use crate::error::ParseError;
use crate::properties::PropertyDef;
use serde::Deserialize;

/// Name of the internal enum encoding wire-protocol operation codes.
pub const RESERVED_OPERATION_ENUM: &str = "OPERATION";

/// Name suffix marking an enum as a true enumeration.
const ENUMERATION_SUFFIX: &str = "Enum";

/// Resolved schema universe passed into generation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Context {
    /// Class descriptors, in declaration order.
    pub classes: Vec<ClassDef>,
    /// Interface descriptors, in declaration order.
    pub interfaces: Vec<InterfaceDef>,
    /// Enum descriptors, in declaration order.
    pub enums: Vec<EnumDef>,
}

impl Context {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a context serialized as JSON by the schema front end.
    ///
    /// # Errors
    /// Returns `ParseError` if the JSON is malformed or does not describe a
    /// context.
    pub fn from_json(json: &str) -> Result<Self, ParseError> {
        crate::parser::parse_context(json)
    }

    /// Adds a class descriptor.
    pub fn add_class(&mut self, class: ClassDef) {
        self.classes.push(class);
    }

    /// Adds an interface descriptor.
    pub fn add_interface(&mut self, interface: InterfaceDef) {
        self.interfaces.push(interface);
    }

    /// Adds an enum descriptor.
    pub fn add_enum(&mut self, enum_def: EnumDef) {
        self.enums.push(enum_def);
    }

    /// Iterates enum descriptors except the reserved operation enum.
    pub fn user_enums(&self) -> impl Iterator<Item = &EnumDef> {
        self.enums.iter().filter(|e| !e.is_reserved())
    }

    /// Looks up a class by name.
    #[must_use]
    pub fn get_class(&self, name: &str) -> Option<&ClassDef> {
        self.classes.iter().find(|c| c.name == name)
    }

    /// Looks up an enum by name.
    #[must_use]
    pub fn get_enum(&self, name: &str) -> Option<&EnumDef> {
        self.enums.iter().find(|e| e.name == name)
    }

    /// Returns true if the context holds no descriptors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.interfaces.is_empty() && self.enums.is_empty()
    }
}

/// Class descriptor (schema-tracked object).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClassDef {
    /// Class name (unique within the context).
    pub name: String,
    /// Base class name.
    pub extends: String,
    /// Properties in declaration (wire) order.
    #[serde(default)]
    pub properties: Vec<PropertyDef>,
}

impl ClassDef {
    /// Creates a new class definition.
    #[must_use]
    pub fn new(name: impl Into<String>, extends: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extends: extends.into(),
            properties: Vec::new(),
        }
    }

    /// Adds a property to the class.
    pub fn add_property(&mut self, property: PropertyDef) {
        self.properties.push(property);
    }

    /// Adds a property, builder style.
    #[must_use]
    pub fn with_property(mut self, property: PropertyDef) -> Self {
        self.properties.push(property);
        self
    }
}

/// Interface descriptor (plain data carrier).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InterfaceDef {
    /// Interface name.
    pub name: String,
    /// Properties in declaration order.
    #[serde(default)]
    pub properties: Vec<PropertyDef>,
}

impl InterfaceDef {
    /// Creates a new interface definition.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
        }
    }

    /// Adds a property to the interface.
    pub fn add_property(&mut self, property: PropertyDef) {
        self.properties.push(property);
    }

    /// Adds a property, builder style.
    #[must_use]
    pub fn with_property(mut self, property: PropertyDef) -> Self {
        self.properties.push(property);
        self
    }
}

/// How an enum's member set is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EnumKind {
    /// Closed, integer-backed enumeration.
    Enumeration,
    /// Group of named, typed constants.
    ConstantGroup,
}

impl EnumKind {
    /// Infers the kind from the naming convention (`...Enum` is an
    /// enumeration, anything else a constant group).
    #[must_use]
    pub fn infer(name: &str) -> Self {
        if name.ends_with(ENUMERATION_SUFFIX) {
            Self::Enumeration
        } else {
            Self::ConstantGroup
        }
    }
}

/// Enum descriptor.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawEnumDef")]
pub struct EnumDef {
    /// Enum name.
    pub name: String,
    /// Rendering kind.
    pub kind: EnumKind,
    /// Members in declaration order.
    pub members: Vec<EnumMember>,
}

impl EnumDef {
    /// Creates a new enum definition, inferring its kind from the name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            kind: EnumKind::infer(&name),
            name,
            members: Vec::new(),
        }
    }

    /// Overrides the rendering kind.
    #[must_use]
    pub fn with_kind(mut self, kind: EnumKind) -> Self {
        self.kind = kind;
        self
    }

    /// Adds a member to the enum.
    pub fn add_member(&mut self, member: EnumMember) {
        self.members.push(member);
    }

    /// Adds a member, builder style.
    #[must_use]
    pub fn with_member(mut self, member: EnumMember) -> Self {
        self.members.push(member);
        self
    }

    /// Returns true if this is the reserved operation-code enum.
    #[must_use]
    pub fn is_reserved(&self) -> bool {
        self.name == RESERVED_OPERATION_ENUM
    }
}

#[derive(Deserialize)]
struct RawEnumDef {
    name: String,
    #[serde(default)]
    kind: Option<EnumKind>,
    #[serde(default, alias = "members")]
    properties: Vec<EnumMember>,
}

impl From<RawEnumDef> for EnumDef {
    fn from(raw: RawEnumDef) -> Self {
        Self {
            kind: raw.kind.unwrap_or_else(|| EnumKind::infer(&raw.name)),
            name: raw.name,
            members: raw.properties,
        }
    }
}

/// Enum member.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawEnumMember")]
pub struct EnumMember {
    /// Member name.
    pub name: String,
    /// Member value.
    pub value: MemberValue,
}

impl EnumMember {
    /// Creates a new enum member.
    #[must_use]
    pub fn new(name: impl Into<String>, value: MemberValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Creates a member whose value is classified from declared text.
    #[must_use]
    pub fn from_declared(name: impl Into<String>, declared: Option<&str>) -> Self {
        Self::new(name, MemberValue::classify(declared))
    }
}

#[derive(Deserialize)]
struct RawEnumMember {
    name: String,
    #[serde(default, rename = "type", alias = "value")]
    value: Option<RawMemberValue>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawMemberValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl From<RawEnumMember> for EnumMember {
    fn from(raw: RawEnumMember) -> Self {
        let value = match raw.value {
            None => MemberValue::Positional,
            Some(RawMemberValue::Integer(v)) => MemberValue::Integer(v),
            Some(RawMemberValue::Float(v)) => MemberValue::from_number(v),
            Some(RawMemberValue::Text(text)) => MemberValue::classify(Some(&text)),
        };
        Self {
            name: raw.name,
            value,
        }
    }
}

/// Value of an enum member.
#[derive(Debug, Clone, PartialEq)]
pub enum MemberValue {
    /// Explicit integral value.
    Integer(i64),
    /// Explicit fractional value.
    Float(f64),
    /// Explicit symbolic value.
    Text(String),
    /// No declared value; the member's zero-based position is used.
    Positional,
}

/// Smallest `f64` that fits an `i64`.
const I64_LOWER: f64 = -9_223_372_036_854_775_808.0;
/// First `f64` past `i64::MAX`.
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

impl MemberValue {
    /// Classifies declared member text.
    ///
    /// Absent or empty text is positional, numeric text is an integer or
    /// float, anything else is kept verbatim as text. Whitespace-only text
    /// counts as the number zero.
    #[must_use]
    pub fn classify(declared: Option<&str>) -> Self {
        let Some(raw) = declared else {
            return Self::Positional;
        };
        if raw.is_empty() {
            return Self::Positional;
        }
        let text = raw.trim();
        if text.is_empty() {
            return Self::Integer(0);
        }
        if let Some(value) = parse_integer(text) {
            return Self::Integer(value);
        }
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Self::from_number(value),
            _ => Self::Text(raw.to_string()),
        }
    }

    /// Classifies a numeric value as integer or float.
    ///
    /// Whole numbers are integers as long as they fit an `i64`; larger
    /// magnitudes stay floats.
    #[must_use]
    pub fn from_number(value: f64) -> Self {
        if value.fract() == 0.0 && value >= I64_LOWER && value < I64_UPPER {
            Self::Integer(value as i64)
        } else {
            Self::Float(value)
        }
    }

    /// Returns true if the value is an explicit integer.
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(_))
    }

    /// Returns true if the value is an explicit float.
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::Float(_))
    }

    /// Returns true if the value is explicit text.
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }
}

/// Parses decimal or `0x`/`0o`/`0b` prefixed integer text.
fn parse_integer(text: &str) -> Option<i64> {
    let radix = match text.get(..2) {
        Some("0x" | "0X") => 16,
        Some("0o" | "0O") => 8,
        Some("0b" | "0B") => 2,
        _ => return text.parse().ok(),
    };
    i64::from_str_radix(&text[2..], radix).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_value_classify() {
        assert_eq!(MemberValue::classify(Some("5")), MemberValue::Integer(5));
        assert_eq!(MemberValue::classify(Some("-3")), MemberValue::Integer(-3));
        assert_eq!(MemberValue::classify(Some("5.5")), MemberValue::Float(5.5));
        assert_eq!(MemberValue::classify(Some("2.0")), MemberValue::Integer(2));
        assert_eq!(MemberValue::classify(Some("0x10")), MemberValue::Integer(16));
        assert_eq!(
            MemberValue::classify(Some("red")),
            MemberValue::Text("red".to_string())
        );
        assert_eq!(
            MemberValue::classify(Some("NaN")),
            MemberValue::Text("NaN".to_string())
        );
        assert_eq!(MemberValue::classify(None), MemberValue::Positional);
        assert_eq!(MemberValue::classify(Some("")), MemberValue::Positional);
    }

    #[test]
    fn test_member_value_whitespace_is_zero() {
        assert_eq!(MemberValue::classify(Some("  ")), MemberValue::Integer(0));
        assert_eq!(MemberValue::classify(Some(" 7 ")), MemberValue::Integer(7));
    }

    #[test]
    fn test_member_value_large_whole_numbers() {
        assert_eq!(
            MemberValue::classify(Some("1e15")),
            MemberValue::Integer(1_000_000_000_000_000)
        );
        assert_eq!(
            MemberValue::classify(Some("1e18")),
            MemberValue::Integer(1_000_000_000_000_000_000)
        );
        assert_eq!(
            MemberValue::classify(Some("3000000000")),
            MemberValue::Integer(3_000_000_000)
        );
        // Beyond i64 range.
        assert_eq!(MemberValue::classify(Some("1e20")), MemberValue::Float(1e20));
        assert_eq!(MemberValue::from_number(-4.0), MemberValue::Integer(-4));
    }

    #[test]
    fn test_member_value_predicates() {
        assert!(MemberValue::Integer(1).is_integer());
        assert!(MemberValue::Float(0.5).is_float());
        assert!(MemberValue::Text("a".to_string()).is_text());
        assert!(!MemberValue::Positional.is_integer());
    }

    #[test]
    fn test_enum_kind_infer() {
        assert_eq!(EnumKind::infer("ColorEnum"), EnumKind::Enumeration);
        assert_eq!(EnumKind::infer("Colors"), EnumKind::ConstantGroup);
        assert_eq!(EnumKind::infer("Enumerated"), EnumKind::ConstantGroup);
    }

    #[test]
    fn test_enum_def_reserved() {
        assert!(EnumDef::new(RESERVED_OPERATION_ENUM).is_reserved());
        assert!(!EnumDef::new("Operation").is_reserved());
    }

    #[test]
    fn test_context_user_enums() {
        let mut context = Context::new();
        assert!(context.is_empty());
        context.add_enum(EnumDef::new("ColorEnum"));
        context.add_enum(EnumDef::new(RESERVED_OPERATION_ENUM));
        context.add_enum(EnumDef::new("Limits"));

        let names: Vec<_> = context.user_enums().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["ColorEnum", "Limits"]);
        assert!(context.get_enum("Limits").is_some());
        assert!(context.get_class("Limits").is_none());
    }

    #[test]
    fn test_deserialize_enum_members() {
        let json = r#"{
            "name": "Weapon",
            "properties": [
                {"name": "Sword", "type": "5"},
                {"name": "Bow", "type": 2.5},
                {"name": "Axe", "type": "heavy"},
                {"name": "Fist"}
            ]
        }"#;
        let enum_def: EnumDef = serde_json::from_str(json).expect("Failed to parse");
        assert_eq!(enum_def.kind, EnumKind::ConstantGroup);
        let values: Vec<_> = enum_def.members.iter().map(|m| m.value.clone()).collect();
        assert_eq!(
            values,
            [
                MemberValue::Integer(5),
                MemberValue::Float(2.5),
                MemberValue::Text("heavy".to_string()),
                MemberValue::Positional,
            ]
        );
    }

    #[test]
    fn test_deserialize_explicit_enum_kind() {
        let json = r#"{"name": "Status", "kind": "enumeration", "properties": []}"#;
        let enum_def: EnumDef = serde_json::from_str(json).expect("Failed to parse");
        assert_eq!(enum_def.kind, EnumKind::Enumeration);
    }
}
