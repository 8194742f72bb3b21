//! Constructors for the replacement nodes the rewriter emits.
//!
//! Shapes follow Babel's ESTree flavour so transformed ASTs feed straight
//! back into `@babel/generator` (or any ESTree printer) on the caller side.

use serde_json::{json, Value};

/// `import <specifiers> from <source>;`
pub fn import_declaration(specifiers: Vec<Value>, source: Value) -> Value {
    json!({
        "type": "ImportDeclaration",
        "specifiers": specifiers,
        "source": source,
    })
}

/// `import local from "...";` — the default-binding specifier.
pub fn import_default_specifier(local: Value) -> Value {
    json!({
        "type": "ImportDefaultSpecifier",
        "local": local,
    })
}

/// `import { imported as local } from "...";` — a named specifier.
pub fn import_specifier(local: Value, imported: Value) -> Value {
    json!({
        "type": "ImportSpecifier",
        "imported": imported,
        "local": local,
    })
}

/// A declaration list of the given kind (`var`/`let`/`const`) wrapping the
/// supplied declarators.
pub fn variable_declaration(kind: &str, declarations: Vec<Value>) -> Value {
    json!({
        "type": "VariableDeclaration",
        "kind": kind,
        "declarations": declarations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::node::is_kind;

    fn identifier(name: &str) -> Value {
        json!({"type": "Identifier", "name": name})
    }

    fn string_literal(value: &str) -> Value {
        json!({"type": "StringLiteral", "value": value})
    }

    #[test]
    fn builds_default_import() {
        let decl = import_declaration(
            vec![import_default_specifier(identifier("foo"))],
            string_literal("foo"),
        );
        assert!(is_kind(&decl, "ImportDeclaration"));
        assert_eq!(decl["source"]["value"], "foo");
        assert!(is_kind(&decl["specifiers"][0], "ImportDefaultSpecifier"));
        assert_eq!(decl["specifiers"][0]["local"]["name"], "foo");
    }

    #[test]
    fn builds_named_specifier() {
        let spec = import_specifier(identifier("myBar"), identifier("bar"));
        assert!(is_kind(&spec, "ImportSpecifier"));
        assert_eq!(spec["imported"]["name"], "bar");
        assert_eq!(spec["local"]["name"], "myBar");
    }

    #[test]
    fn rewraps_declarator_as_declaration() {
        let declarator = json!({
            "type": "VariableDeclarator",
            "id": identifier("bar"),
            "init": {"type": "NumericLiteral", "value": 1},
        });
        let decl = variable_declaration("var", vec![declarator.clone()]);
        assert_eq!(decl["kind"], "var");
        assert_eq!(decl["declarations"][0], declarator);
    }
}
