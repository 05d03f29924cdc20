//! Context validation utilities.
//!
//! Code generation assumes the front end already validated its context.
//! These checks are available to front ends and tests that want to assert
//! the structural contract explicitly.

use crate::error::SchemaError;
use crate::properties::{PropertyDef, PropertyKind};
use crate::types::{Context, EnumDef};
use std::collections::{HashMap, HashSet};

/// Validates a context for structural correctness.
///
/// # Arguments
/// * `context` - The context to validate
///
/// # Returns
/// Ok(()) if valid, or SchemaError describing the first issue found.
///
/// # Errors
/// Returns `SchemaError` if validation fails.
pub fn validate_context(context: &Context) -> Result<(), SchemaError> {
    validate_names(context)?;

    for class in &context.classes {
        validate_properties(&class.name, &class.properties)?;
    }
    for interface in &context.interfaces {
        validate_properties(&interface.name, &interface.properties)?;
    }
    for enum_def in &context.enums {
        validate_enum(enum_def)?;
    }

    Ok(())
}

/// Validates that descriptor names are unique across all kinds.
fn validate_names(context: &Context) -> Result<(), SchemaError> {
    let mut seen = HashSet::new();

    let names = context
        .classes
        .iter()
        .map(|c| ("class", c.name.as_str()))
        .chain(
            context
                .interfaces
                .iter()
                .map(|i| ("interface", i.name.as_str())),
        )
        .chain(context.enums.iter().map(|e| ("enum", e.name.as_str())));

    for (kind, name) in names {
        if !seen.insert(name) {
            return Err(SchemaError::duplicate(kind, name));
        }
    }

    Ok(())
}

/// Validates the properties of one class or interface.
fn validate_properties(owner: &str, properties: &[PropertyDef]) -> Result<(), SchemaError> {
    let mut seen_names = HashSet::new();
    let mut seen_indices: HashMap<u16, &str> = HashMap::new();

    for prop in properties {
        if !seen_names.insert(prop.name.as_str()) {
            return Err(SchemaError::DuplicateProperty {
                owner: owner.to_string(),
                property: prop.name.clone(),
            });
        }

        if let Some(first) = seen_indices.insert(prop.index, prop.name.as_str()) {
            return Err(SchemaError::DuplicateIndex {
                owner: owner.to_string(),
                index: prop.index,
                first: first.to_string(),
                second: prop.name.clone(),
            });
        }

        match (prop.kind(), prop.has_child_type()) {
            (PropertyKind::Reference | PropertyKind::Container(_), false) => {
                return Err(SchemaError::MissingChildType {
                    owner: owner.to_string(),
                    property: prop.name.clone(),
                    type_name: prop.type_name.clone(),
                });
            }
            (PropertyKind::Plain, true) => {
                return Err(SchemaError::UnexpectedChildType {
                    owner: owner.to_string(),
                    property: prop.name.clone(),
                    type_name: prop.type_name.clone(),
                });
            }
            _ => {}
        }
    }

    Ok(())
}

/// Validates an enum definition.
fn validate_enum(enum_def: &EnumDef) -> Result<(), SchemaError> {
    let mut seen_names = HashSet::new();

    for member in &enum_def.members {
        if member.name.is_empty() {
            return Err(SchemaError::Validation {
                message: format!("Unnamed member in enum '{}'", enum_def.name),
            });
        }
        if !seen_names.insert(member.name.as_str()) {
            return Err(SchemaError::DuplicateProperty {
                owner: enum_def.name.clone(),
                property: member.name.clone(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ClassDef, EnumMember, InterfaceDef, MemberValue};

    fn player_context() -> Context {
        let mut context = Context::new();
        context.add_class(
            ClassDef::new("Player", "Schema")
                .with_property(PropertyDef::new("hp", 0, "int32"))
                .with_property(PropertyDef::new("items", 1, "array").with_child_type("string")),
        );
        context
    }

    #[test]
    fn test_validate_valid_context() {
        assert!(validate_context(&player_context()).is_ok());
    }

    #[test]
    fn test_validate_duplicate_descriptor_name() {
        let mut context = player_context();
        context.add_interface(InterfaceDef::new("Player"));

        let result = validate_context(&context);
        assert!(matches!(
            result,
            Err(SchemaError::DuplicateDefinition { ref kind, ref name })
                if kind == "interface" && name == "Player"
        ));
    }

    #[test]
    fn test_validate_duplicate_index() {
        let mut context = player_context();
        context.classes[0].add_property(PropertyDef::new("mana", 1, "int32"));

        let err = validate_context(&context).expect_err("should fail");
        assert_eq!(
            err.to_string(),
            "duplicate index 1 in 'Player': 'items' and 'mana'"
        );
    }

    #[test]
    fn test_validate_duplicate_property_name() {
        let mut context = player_context();
        context.classes[0].add_property(PropertyDef::new("hp", 2, "int32"));

        assert!(matches!(
            validate_context(&context),
            Err(SchemaError::DuplicateProperty { .. })
        ));
    }

    #[test]
    fn test_validate_missing_child_type() {
        let mut context = player_context();
        context.classes[0].add_property(PropertyDef::new("pets", 2, "map"));

        assert!(matches!(
            validate_context(&context),
            Err(SchemaError::MissingChildType { ref property, .. }) if property == "pets"
        ));
    }

    #[test]
    fn test_validate_unexpected_child_type() {
        let mut context = player_context();
        context.classes[0].add_property(PropertyDef::new("name", 2, "string").with_child_type("X"));

        assert!(matches!(
            validate_context(&context),
            Err(SchemaError::UnexpectedChildType { .. })
        ));
    }

    #[test]
    fn test_validate_duplicate_enum_member() {
        let mut context = Context::new();
        context.add_enum(
            EnumDef::new("ColorEnum")
                .with_member(EnumMember::new("Red", MemberValue::Positional))
                .with_member(EnumMember::new("Red", MemberValue::Integer(2))),
        );

        assert!(validate_context(&context).is_err());
    }
}
