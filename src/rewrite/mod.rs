//! Recognition and rewriting of CommonJS `require` declaration idioms.
//!
//! `idioms` declares the patterns and the `is_var_with_require_calls`
//! pre-filter; `replace` turns matched declarators into import declarations.
//! Everything here is stateless — the same declarator always classifies the
//! same way, and unrecognized shapes always pass through untouched.

pub mod idioms;
pub mod replace;

pub use idioms::{is_var_with_require_calls, match_require, match_require_with_property};
pub use replace::declarator_to_replacement;
