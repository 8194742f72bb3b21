//! The require-idiom patterns, declared atop the matching engine.
//!
//! Three recognized shapes:
//!
//! ```text
//! var foo = require("foo");            plain binding
//! var {a, b: myB} = require("foo");    flat destructuring
//! var foo = require("foo").bar;        property access
//! ```
//!
//! Anything else (nested or array destructuring, multi-argument `require`,
//! non-literal module specifiers, destructuring of a property access) is a
//! plain no-match, never an error; the caller leaves such code untouched.

use std::sync::LazyLock;

use serde_json::Value;

use crate::ast::node::{elements, is_kind};
use crate::pattern::{
    any_of, capture, each, exact_length, fields, is_match, lit, Bindings, Pattern,
};

fn identifier() -> Pattern {
    fields([("type", lit("Identifier"))])
}

fn string_literal() -> Pattern {
    fields([("type", lit("StringLiteral"))])
}

/// Property with plain identifier key and value, not computed. Shorthand
/// properties (`{foo}`) satisfy this; nested patterns and rest elements have
/// a different `value`/`type` and fail.
fn simple_property() -> Pattern {
    fields([
        ("type", lit("ObjectProperty")),
        ("key", identifier()),
        ("computed", lit(false)),
        ("value", identifier()),
    ])
}

/// `{a, b: myB, ...}` with every property simple.
fn object_pattern() -> Pattern {
    fields([
        ("type", lit("ObjectPattern")),
        ("properties", each(simple_property())),
    ])
}

/// `require(<source>)` with exactly one string-literal argument. The
/// argument list is captured whole under `sources`, so `sources[0]` is the
/// module-specifier node.
fn require_call() -> Pattern {
    fields([
        ("type", lit("CallExpression")),
        (
            "callee",
            fields([("type", lit("Identifier")), ("name", lit("require"))]),
        ),
        (
            "arguments",
            capture("sources", exact_length([string_literal()])),
        ),
    ])
}

/// Matches `<id> = require(<source>)`, where `<id>` is a plain identifier
/// or a flat object pattern. Captures `id` and `sources`.
static MATCH_REQUIRE: LazyLock<Pattern> = LazyLock::new(|| {
    fields([
        ("type", lit("VariableDeclarator")),
        ("id", capture("id", any_of([identifier(), object_pattern()]))),
        ("init", require_call()),
    ])
});

/// Matches `<id> = require(<source>).<property>`, identifier `<id>` only;
/// destructuring a property access is not recognized.
/// Captures `id`, `sources`, and `property`.
static MATCH_REQUIRE_WITH_PROPERTY: LazyLock<Pattern> = LazyLock::new(|| {
    fields([
        ("type", lit("VariableDeclarator")),
        ("id", capture("id", identifier())),
        (
            "init",
            fields([
                ("type", lit("MemberExpression")),
                ("computed", lit(false)),
                ("object", require_call()),
                ("property", capture("property", identifier())),
            ]),
        ),
    ])
});

/// Try the plain require idiom against one declarator.
pub fn match_require(declarator: &Value) -> Option<Bindings> {
    is_match(declarator, &MATCH_REQUIRE)
}

/// Try the property-access require idiom against one declarator.
pub fn match_require_with_property(declarator: &Value) -> Option<Bindings> {
    is_match(declarator, &MATCH_REQUIRE_WITH_PROPERTY)
}

/// True iff `node` is a VariableDeclaration with at least one declarator in
/// a recognized require idiom. Used as the pre-filter before rewriting.
pub fn is_var_with_require_calls(node: &Value) -> bool {
    is_kind(node, "VariableDeclaration")
        && elements(node, "declarations")
            .iter()
            .any(|dec| match_require(dec).is_some() || match_require_with_property(dec).is_some())
}
