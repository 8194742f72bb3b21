//! Helpers over Babel-shaped `serde_json::Value` AST nodes.
//!
//! The crate never defines its own node type: ASTs arrive as JSON (the output
//! of `@babel/parser --json` or equivalent) and leave the same way. `node`
//! holds read-only accessors; `builder` constructs the replacement nodes.

pub mod builder;
pub mod node;
