//! Context loading.
//!
//! The schema front end serializes its resolved [`Context`] as JSON; this
//! module turns that hand-off document back into descriptors.

use crate::error::ParseError;
use crate::types::Context;
use std::path::Path;

/// Parses a serialized context from a JSON string.
///
/// # Arguments
/// * `json` - JSON document with `classes`, `interfaces` and `enums` arrays
///
/// # Returns
/// Parsed context or parse error.
///
/// # Errors
/// Returns `ParseError` if the JSON is malformed or its root is not an object.
pub fn parse_context(json: &str) -> Result<Context, ParseError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    if !value.is_object() {
        return Err(ParseError::InvalidStructure {
            message: "context root must be a JSON object".to_string(),
        });
    }
    Ok(serde_json::from_value(value)?)
}

/// Parses a serialized context from a JSON file.
///
/// # Errors
/// Returns `ParseError` if reading or parsing fails.
pub fn parse_context_file(path: &Path) -> Result<Context, ParseError> {
    let json = std::fs::read_to_string(path)?;
    parse_context(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::ContainerKind;
    use crate::properties::PropertyKind;
    use crate::types::{EnumKind, MemberValue};
    use std::io::Write;

    const CONTEXT_JSON: &str = r#"{
        "classes": [
            {
                "name": "Player",
                "extends": "Schema",
                "properties": [
                    {"name": "hp", "type": "int32", "index": 0},
                    {"name": "items", "type": "array", "childType": "string", "index": 1},
                    {"name": "pets", "type": "map", "childType": "Pet", "index": 2, "deprecated": true}
                ]
            }
        ],
        "interfaces": [
            {"name": "JoinOptions", "properties": [{"name": "token", "type": "string"}]}
        ],
        "enums": [
            {"name": "OPERATION", "properties": [{"name": "ADD", "type": "128"}]},
            {"name": "ColorEnum", "properties": [{"name": "Red"}, {"name": "Blue"}]}
        ]
    }"#;

    #[test]
    fn test_parse_context() {
        let context = parse_context(CONTEXT_JSON).expect("Failed to parse");

        assert_eq!(context.classes.len(), 1);
        assert_eq!(context.interfaces.len(), 1);
        assert_eq!(context.enums.len(), 2);

        let player = &context.classes[0];
        assert_eq!(player.extends, "Schema");
        assert_eq!(player.properties[1].index, 1);
        assert_eq!(
            player.properties[2].kind(),
            PropertyKind::Container(ContainerKind::Map)
        );
        assert!(player.properties[2].deprecated);
        assert!(
            player.properties[2]
                .child_type
                .as_ref()
                .is_some_and(|c| c.user_defined)
        );

        let color = &context.enums[1];
        assert_eq!(color.kind, EnumKind::Enumeration);
        assert_eq!(color.members[0].value, MemberValue::Positional);
    }

    #[test]
    fn test_parse_empty_context() {
        let context = parse_context("{}").expect("Failed to parse");
        assert!(context.is_empty());
    }

    #[test]
    fn test_parse_non_object_root() {
        let result = parse_context("[]");
        assert!(matches!(result, Err(ParseError::InvalidStructure { .. })));
    }

    #[test]
    fn test_parse_malformed_json() {
        let result = parse_context("{\"classes\": [");
        assert!(matches!(result, Err(ParseError::Json(_))));
    }

    #[test]
    fn test_parse_class_without_extends() {
        let result = parse_context(r#"{"classes": [{"name": "Orphan"}]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_context_file() {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(CONTEXT_JSON.as_bytes())
            .expect("Failed to write temp file");

        let context = parse_context_file(file.path()).expect("Failed to parse");
        assert_eq!(context.classes[0].name, "Player");
    }

    #[test]
    fn test_parse_missing_file() {
        let result = parse_context_file(Path::new("/nonexistent/context.json"));
        assert!(matches!(result, Err(ParseError::Io(_))));
    }
}
