//! Per-declarator replacement construction.

use serde_json::Value;

use crate::ast::builder::{
    import_declaration, import_default_specifier, import_specifier, variable_declaration,
};
use crate::ast::node::{elements, identifier_name, is_kind};

use super::idioms::{match_require, match_require_with_property};

/// Rewrite one declarator of a `kind` declaration list into its replacement
/// node.
///
/// Idioms are tried in order: plain require first, then property-accessed
/// require. A declarator matching neither is passed through unchanged,
/// re-wrapped as a standalone single-declarator declaration of the same
/// kind — that is how `var a = require("x"), b = 1;` splits into one import
/// plus one ordinary declaration.
pub fn declarator_to_replacement(declarator: &Value, kind: &str) -> Value {
    if let Some(m) = match_require(declarator) {
        let id = m.node("id");
        let source = m.node("sources")[0].clone();
        if is_kind(id, "ObjectPattern") {
            return pattern_to_named_import(id, source);
        }
        return import_declaration(vec![import_default_specifier(id.clone())], source);
    }

    if let Some(m) = match_require_with_property(declarator) {
        let id = m.node("id").clone();
        let property = m.node("property");
        let source = m.node("sources")[0].clone();
        // `.default` access is the interop spelling of a default import.
        let specifier = if identifier_name(property) == Some("default") {
            import_default_specifier(id)
        } else {
            import_specifier(id, property.clone())
        };
        return import_declaration(vec![specifier], source);
    }

    variable_declaration(kind, vec![declarator.clone()])
}

/// `{a, b: myB, default: d} = require(...)` → one combined import with a
/// specifier per destructured property.
fn pattern_to_named_import(pattern: &Value, source: Value) -> Value {
    let specifiers = elements(pattern, "properties")
        .iter()
        .map(|property| {
            let key = &property["key"];
            let value = &property["value"];
            if identifier_name(key) == Some("default") {
                import_default_specifier(value.clone())
            } else {
                import_specifier(value.clone(), key.clone())
            }
        })
        .collect();
    import_declaration(specifiers, source)
}
