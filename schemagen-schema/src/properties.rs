//! Property descriptors.
//!
//! A property is one typed, indexed field of a class or interface. Its
//! declared `type` is a primitive name, `"ref"`, or a container kind; the
//! optional child type names the referenced structure or element type.

use serde::Deserialize;

/// Schema type name of a reference property.
pub const REF_TYPE: &str = "ref";

/// Property definition.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDef {
    /// Property name.
    pub name: String,
    /// Wire index (zero-based, unique within the owner).
    #[serde(default)]
    pub index: u16,
    /// Declared schema type.
    #[serde(rename = "type")]
    pub type_name: String,
    /// Referenced structure or element type.
    #[serde(default)]
    pub child_type: Option<ChildType>,
    /// Enum governing the value domain.
    #[serde(default)]
    pub enum_type: Option<String>,
    /// Whether the property is deprecated.
    #[serde(default)]
    pub deprecated: bool,
}

impl PropertyDef {
    /// Creates a new property definition.
    #[must_use]
    pub fn new(name: impl Into<String>, index: u16, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            index,
            type_name: type_name.into(),
            child_type: None,
            enum_type: None,
            deprecated: false,
        }
    }

    /// Sets the child type, inferring whether it is user-defined.
    #[must_use]
    pub fn with_child_type(mut self, child_type: impl Into<String>) -> Self {
        self.child_type = Some(ChildType::new(child_type));
        self
    }

    /// Sets the enum type.
    #[must_use]
    pub fn with_enum_type(mut self, enum_type: impl Into<String>) -> Self {
        self.enum_type = Some(enum_type.into());
        self
    }

    /// Marks the property as deprecated.
    #[must_use]
    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    /// Returns the structural kind of the property.
    #[must_use]
    pub fn kind(&self) -> PropertyKind {
        if self.type_name == REF_TYPE {
            return PropertyKind::Reference;
        }
        match ContainerKind::from_schema_name(&self.type_name) {
            Some(kind) => PropertyKind::Container(kind),
            None => PropertyKind::Plain,
        }
    }

    /// Returns true if the property carries a child type.
    #[must_use]
    pub fn has_child_type(&self) -> bool {
        self.child_type.is_some()
    }
}

/// Child type of a reference or container property.
///
/// Whether the name refers to a user-defined structure is decided once,
/// when the descriptor is built, instead of at every use site.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub struct ChildType {
    /// Structure or element type name.
    pub name: String,
    /// Whether the name refers to a user-defined structure.
    pub user_defined: bool,
}

impl ChildType {
    /// Creates a child type, classifying capitalized names as user-defined.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let user_defined = name.starts_with(|c: char| c.is_ascii_uppercase());
        Self { name, user_defined }
    }

    /// Creates a child type with an explicit classification.
    #[must_use]
    pub fn with_user_defined(name: impl Into<String>, user_defined: bool) -> Self {
        Self {
            name: name.into(),
            user_defined,
        }
    }
}

impl From<String> for ChildType {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<&str> for ChildType {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Structural kind of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// Reference to a single structure or primitive.
    Reference,
    /// Parametrized container.
    Container(ContainerKind),
    /// Primitive or enum value.
    Plain,
}

/// Parametrized container kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    /// Ordered list.
    Array,
    /// String-keyed map.
    Map,
    /// Unordered set.
    Set,
    /// Unordered collection.
    Collection,
}

impl ContainerKind {
    /// Returns the schema type name.
    #[must_use]
    pub const fn schema_name(&self) -> &'static str {
        match self {
            Self::Array => "array",
            Self::Map => "map",
            Self::Set => "set",
            Self::Collection => "collection",
        }
    }

    /// Parses a container kind from its schema name.
    #[must_use]
    pub fn from_schema_name(name: &str) -> Option<Self> {
        match name {
            "array" => Some(Self::Array),
            "map" => Some(Self::Map),
            "set" => Some(Self::Set),
            "collection" => Some(Self::Collection),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_type_classification() {
        assert!(ChildType::new("Item").user_defined);
        assert!(!ChildType::new("string").user_defined);
        assert!(!ChildType::new("_Hidden").user_defined);
        assert!(!ChildType::new("").user_defined);
        assert!(ChildType::with_user_defined("vec2", true).user_defined);
    }

    #[test]
    fn test_property_kind() {
        assert_eq!(PropertyDef::new("hp", 0, "int32").kind(), PropertyKind::Plain);
        assert_eq!(
            PropertyDef::new("target", 1, "ref")
                .with_child_type("Player")
                .kind(),
            PropertyKind::Reference
        );
        assert_eq!(
            PropertyDef::new("items", 2, "map")
                .with_child_type("Item")
                .kind(),
            PropertyKind::Container(ContainerKind::Map)
        );
        assert_eq!(
            PropertyDef::new("scores", 3, "array")
                .with_child_type("float64")
                .kind(),
            PropertyKind::Container(ContainerKind::Array)
        );
    }

    #[test]
    fn test_container_kind_from_schema_name() {
        for kind in [
            ContainerKind::Array,
            ContainerKind::Map,
            ContainerKind::Set,
            ContainerKind::Collection,
        ] {
            assert_eq!(ContainerKind::from_schema_name(kind.schema_name()), Some(kind));
        }
        assert_eq!(ContainerKind::from_schema_name("list"), None);
    }

    #[test]
    fn test_property_builder() {
        let prop = PropertyDef::new("color", 3, "string")
            .with_enum_type("ColorEnum")
            .deprecated();
        assert_eq!(prop.enum_type.as_deref(), Some("ColorEnum"));
        assert!(prop.deprecated);
        assert!(!prop.has_child_type());
    }

    #[test]
    fn test_deserialize_property() {
        let json = r#"{"name":"items","index":1,"type":"array","childType":"string"}"#;
        let prop: PropertyDef = serde_json::from_str(json).expect("Failed to parse");
        assert_eq!(prop.type_name, "array");
        assert_eq!(prop.child_type, Some(ChildType::with_user_defined("string", false)));
        assert!(!prop.deprecated);
    }
}
