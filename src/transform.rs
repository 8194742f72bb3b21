//! Program-level traversal and splicing.
//!
//! Only direct children of the `Program` body are candidates: a require
//! declaration nested inside any block stays untouched, matching the
//! module-scope-only policy. Declarator order is preserved left to right,
//! since later bindings may depend on earlier ones.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

use crate::ast::node::{elements, is_kind};
use crate::rewrite::{declarator_to_replacement, is_var_with_require_calls};

/// Result of transforming one AST file.
#[derive(Debug)]
pub struct FileOutcome {
    /// Number of top-level declarations rewritten.
    pub rewritten: usize,
    /// Serialized transformed AST, trailing newline included.
    pub output: String,
}

/// Rewrite every top-level require declaration in a `Program` (or Babel
/// `File`) node in place. Returns the number of declarations rewritten.
pub fn transform_program(root: &mut Value) -> usize {
    let program = if is_kind(root, "File") {
        match root.get_mut("program") {
            Some(program) => program,
            None => return 0,
        }
    } else {
        root
    };
    if !is_kind(program, "Program") {
        return 0;
    }
    let Some(body) = program.get_mut("body").and_then(Value::as_array_mut) else {
        return 0;
    };

    let mut rewritten = 0;
    let mut new_body = Vec::with_capacity(body.len());
    for stmt in body.drain(..) {
        if !is_var_with_require_calls(&stmt) {
            new_body.push(stmt);
            continue;
        }
        let kind = stmt
            .get("kind")
            .and_then(Value::as_str)
            .unwrap_or("var")
            .to_string();
        let mut replacements: Vec<Value> = elements(&stmt, "declarations")
            .iter()
            .map(|dec| declarator_to_replacement(dec, &kind))
            .collect();
        // The original declaration's leading comments move to the first
        // replacement so they survive re-serialization.
        if let (Some(first), Some(comments)) =
            (replacements.first_mut(), stmt.get("leadingComments"))
        {
            first["leadingComments"] = comments.clone();
        }
        rewritten += 1;
        new_body.extend(replacements);
    }
    *body = new_body;
    rewritten
}

/// Read a JSON AST file, transform it, and serialize the result.
pub fn transform_file(path: &Path) -> Result<FileOutcome> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let mut ast: Value = serde_json::from_str(&text)
        .with_context(|| format!("invalid JSON AST in {}", path.display()))?;
    let rewritten = transform_program(&mut ast);
    let mut output = serde_json::to_string_pretty(&ast)
        .with_context(|| format!("failed to serialize {}", path.display()))?;
    output.push('\n');
    Ok(FileOutcome { rewritten, output })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::testutil::{declarator, ident, program, require_call, var_declaration};

    fn require_declaration(kind: &str, name: &str, source: &str) -> Value {
        let mut declaration = var_declaration(vec![declarator(ident(name), require_call(source))]);
        declaration["kind"] = Value::from(kind);
        declaration
    }

    #[test]
    fn rewrites_top_level_declaration() {
        let mut ast = program(vec![require_declaration("var", "foo", "foo")]);
        assert_eq!(transform_program(&mut ast), 1);
        let body = ast["body"].as_array().unwrap();
        assert_eq!(body.len(), 1);
        assert_eq!(body[0]["type"], "ImportDeclaration");
    }

    #[test]
    fn unwraps_babel_file_node() {
        let mut ast = json!({
            "type": "File",
            "program": program(vec![require_declaration("const", "x", "m")]),
        });
        assert_eq!(transform_program(&mut ast), 1);
        assert_eq!(ast["program"]["body"][0]["type"], "ImportDeclaration");
    }

    // var foo = require("foo"), bar = 1;
    //   → import foo from "foo"; var bar = 1;
    #[test]
    fn mixed_declaration_splits_in_order() {
        let mut declaration = require_declaration("var", "foo", "foo");
        declaration["declarations"].as_array_mut().unwrap().push(json!({
            "type": "VariableDeclarator",
            "id": ident("bar"),
            "init": {"type": "NumericLiteral", "value": 1},
        }));
        let mut ast = program(vec![declaration]);
        assert_eq!(transform_program(&mut ast), 1);
        let body = ast["body"].as_array().unwrap();
        assert_eq!(body.len(), 2);
        assert_eq!(body[0]["type"], "ImportDeclaration");
        assert_eq!(body[1]["type"], "VariableDeclaration");
        assert_eq!(body[1]["kind"], "var");
        assert_eq!(body[1]["declarations"][0]["id"]["name"], "bar");
    }

    #[test]
    fn nested_block_declaration_is_untouched() {
        let nested = json!({
            "type": "IfStatement",
            "test": ident("cond"),
            "consequent": {
                "type": "BlockStatement",
                "body": [require_declaration("var", "foo", "foo")],
            },
        });
        let mut ast = program(vec![nested.clone()]);
        assert_eq!(transform_program(&mut ast), 0);
        assert_eq!(ast["body"][0], nested);
    }

    #[test]
    fn non_idiom_program_is_value_identical() {
        let original = program(vec![
            json!({
                "type": "VariableDeclaration",
                "kind": "var",
                "declarations": [{
                    "type": "VariableDeclarator",
                    "id": ident("x"),
                    "init": {"type": "NumericLiteral", "value": 2},
                }],
            }),
            json!({"type": "ExpressionStatement", "expression": ident("x")}),
        ]);
        let mut ast = original.clone();
        assert_eq!(transform_program(&mut ast), 0);
        assert_eq!(ast, original);
    }

    #[test]
    fn leading_comments_move_to_first_replacement() {
        let mut declaration = require_declaration("var", "foo", "foo");
        declaration["leadingComments"] =
            json!([{"type": "CommentLine", "value": " load foo"}]);
        let mut ast = program(vec![declaration]);
        transform_program(&mut ast);
        assert_eq!(
            ast["body"][0]["leadingComments"][0]["value"],
            " load foo"
        );
    }

    #[test]
    fn statement_order_is_preserved() {
        let mut ast = program(vec![
            require_declaration("var", "a", "a"),
            json!({"type": "ExpressionStatement", "expression": ident("a")}),
            require_declaration("var", "b", "b"),
        ]);
        assert_eq!(transform_program(&mut ast), 2);
        let body = ast["body"].as_array().unwrap();
        assert_eq!(body[0]["type"], "ImportDeclaration");
        assert_eq!(body[1]["type"], "ExpressionStatement");
        assert_eq!(body[2]["type"], "ImportDeclaration");
        assert_eq!(body[2]["source"]["value"], "b");
    }

    #[test]
    fn non_program_root_is_a_no_op() {
        let mut ast = json!({"type": "BlockStatement", "body": []});
        assert_eq!(transform_program(&mut ast), 0);
    }
}
