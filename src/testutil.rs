//! Shared AST-construction helpers for unit tests.
//!
//! Node shapes mirror what `@babel/parser` emits for the corresponding
//! source, trimmed to the fields the recognizer inspects.

use serde_json::{json, Value};

pub fn ident(name: &str) -> Value {
    json!({"type": "Identifier", "name": name})
}

pub fn string_literal(value: &str) -> Value {
    json!({"type": "StringLiteral", "value": value})
}

/// `require(<source>)`
pub fn require_call(source: &str) -> Value {
    json!({
        "type": "CallExpression",
        "callee": ident("require"),
        "arguments": [string_literal(source)],
    })
}

/// `require(<source>).<property>`
pub fn require_member(source: &str, property: &str) -> Value {
    json!({
        "type": "MemberExpression",
        "computed": false,
        "object": require_call(source),
        "property": ident(property),
    })
}

pub fn declarator(id: Value, init: Value) -> Value {
    json!({"type": "VariableDeclarator", "id": id, "init": init})
}

pub fn var_declaration(declarators: Vec<Value>) -> Value {
    json!({
        "type": "VariableDeclaration",
        "kind": "var",
        "declarations": declarators,
    })
}

/// A destructuring property, shorthand when key and local name coincide.
pub fn object_property(key: &str, value: &str) -> Value {
    json!({
        "type": "ObjectProperty",
        "key": ident(key),
        "computed": false,
        "shorthand": key == value,
        "value": ident(value),
    })
}

pub fn object_pattern(properties: Vec<Value>) -> Value {
    json!({"type": "ObjectPattern", "properties": properties})
}

pub fn program(body: Vec<Value>) -> Value {
    json!({"type": "Program", "sourceType": "module", "body": body})
}
