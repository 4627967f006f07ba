//! Attribute value types.

/// Value stored in a model attribute.
pub type AttributeValue = serde_json::Value;

/// Name/value map used for mass assignment.
pub type AttributeValues = serde_json::Map<String, AttributeValue>;

/// Whether a value counts as "not provided": null, a blank string, or an empty collection.
pub fn is_empty_value(value: &AttributeValue) -> bool {
    match value {
        AttributeValue::Null => true,
        AttributeValue::String(text) => text.trim().is_empty(),
        AttributeValue::Array(items) => items.is_empty(),
        AttributeValue::Object(map) => map.is_empty(),
        AttributeValue::Bool(_) | AttributeValue::Number(_) => false,
    }
}
