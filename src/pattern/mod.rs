//! Declarative pattern matching and extraction over JSON-shaped AST nodes.
//!
//! A [`Pattern`] describes an expected tree shape: scalar literals compared
//! by equality, field maps matched structurally (unlisted fields are
//! unconstrained), positional sequence patterns, alternatives, and named
//! captures. [`is_match`] walks node and pattern together and, on success,
//! returns the [`Bindings`] gathered from every capture in the pattern.
//!
//! The engine knows nothing about JavaScript; the recognizer rules in
//! [`crate::rewrite`] are built entirely from these combinators.

pub mod bindings;
pub mod matcher;

pub use bindings::Bindings;
pub use matcher::{
    any_of, capture, capture_any, each, exact_length, fields, is_match, lit, seq, Pattern,
};
