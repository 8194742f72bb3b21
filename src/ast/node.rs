use serde_json::Value;

/// The node's `type` discriminant, if it has one.
pub fn kind(node: &Value) -> Option<&str> {
    node.get("type")?.as_str()
}

/// True when the node's `type` discriminant equals `expected`.
pub fn is_kind(node: &Value, expected: &str) -> bool {
    kind(node) == Some(expected)
}

/// The `name` of an Identifier node.
pub fn identifier_name(node: &Value) -> Option<&str> {
    node.get("name")?.as_str()
}

/// The elements of an array-valued field, or an empty slice when the field
/// is absent or not an array.
pub fn elements<'a>(node: &'a Value, field: &str) -> &'a [Value] {
    node.get(field)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}
