//! The matching engine proper: the `Pattern` type and `is_match`.

use serde_json::Value;

use super::bindings::Bindings;

/// A declarative description of an expected tree shape.
///
/// Patterns are immutable once built and may be shared freely (e.g. as
/// `LazyLock` statics). Matching is a single recursive walk — linear in the
/// size of the pattern/node pair, with no backtracking beyond trying the
/// alternatives of `AnyOf` in order.
#[derive(Debug, Clone)]
pub enum Pattern {
    /// A scalar compared by equality (kind strings, names, `computed: false`).
    Literal(Value),
    /// Field-by-field structural match: every listed field must exist on the
    /// node and match its sub-pattern; fields not listed are unconstrained.
    Fields(Vec<(String, Pattern)>),
    /// Positional match over an array; extra trailing elements are tolerated.
    Sequence(Vec<Pattern>),
    /// Positional match over an array whose length must equal the pattern's.
    ExactLength(Vec<Pattern>),
    /// Every element of an array must match the sub-pattern.
    Each(Box<Pattern>),
    /// Alternatives tried in order; the first that matches wins. Captures
    /// from failed alternatives are discarded.
    AnyOf(Vec<Pattern>),
    /// Record the matched value under `name`. With no inner pattern, any
    /// value is accepted; otherwise the inner pattern must also match and
    /// its captures are kept alongside this one.
    Capture {
        name: &'static str,
        inner: Option<Box<Pattern>>,
    },
}

impl Pattern {
    /// Boolean view of a match, ignoring captures.
    pub fn matches(&self, node: &Value) -> bool {
        is_match(node, self).is_some()
    }
}

/// Match `node` against `pattern`.
///
/// Returns `None` on mismatch, or the captures gathered from every
/// `Capture` encountered during this one evaluation. Mismatch is a normal
/// result, never a panic; the only panic in the engine is a capture-name
/// collision, which indicates a defective pattern declaration.
pub fn is_match(node: &Value, pattern: &Pattern) -> Option<Bindings> {
    let mut captured = Bindings::new();
    if match_into(node, pattern, &mut captured) {
        Some(captured)
    } else {
        None
    }
}

/// Recursive worker. Captures accumulate eagerly into `captured`; when the
/// overall match fails the caller discards the accumulator, so partial
/// captures never escape. `AnyOf` and `Each` branch through fresh
/// accumulators and merge only on success.
fn match_into(node: &Value, pattern: &Pattern, captured: &mut Bindings) -> bool {
    match pattern {
        Pattern::Literal(expected) => node == expected,

        Pattern::Fields(fields) => {
            let Some(obj) = node.as_object() else {
                return false;
            };
            fields.iter().all(|(name, sub)| {
                obj.get(name)
                    .is_some_and(|value| match_into(value, sub, captured))
            })
        }

        Pattern::Sequence(elems) => match_positional(node, elems, captured, false),
        Pattern::ExactLength(elems) => match_positional(node, elems, captured, true),

        Pattern::Each(sub) => {
            let Some(items) = node.as_array() else {
                return false;
            };
            for item in items {
                match is_match(item, sub) {
                    Some(bindings) => captured.merge(bindings),
                    None => return false,
                }
            }
            true
        }

        Pattern::AnyOf(alternatives) => {
            for alt in alternatives {
                if let Some(bindings) = is_match(node, alt) {
                    captured.merge(bindings);
                    return true;
                }
            }
            false
        }

        Pattern::Capture { name, inner } => {
            if let Some(inner) = inner {
                if !match_into(node, inner, captured) {
                    return false;
                }
            }
            captured.insert(name, node.clone());
            true
        }
    }
}

fn match_positional(
    node: &Value,
    elems: &[Pattern],
    captured: &mut Bindings,
    exact: bool,
) -> bool {
    let Some(items) = node.as_array() else {
        return false;
    };
    if exact {
        if items.len() != elems.len() {
            return false;
        }
    } else if items.len() < elems.len() {
        return false;
    }
    elems
        .iter()
        .zip(items)
        .all(|(sub, item)| match_into(item, sub, captured))
}

// Constructor helpers. The recognizer layer composes patterns from these
// rather than spelling out enum variants.

/// Scalar literal pattern.
pub fn lit(value: impl Into<Value>) -> Pattern {
    Pattern::Literal(value.into())
}

/// Structural field pattern.
pub fn fields<const N: usize>(pairs: [(&str, Pattern); N]) -> Pattern {
    Pattern::Fields(
        pairs
            .into_iter()
            .map(|(name, sub)| (name.to_string(), sub))
            .collect(),
    )
}

/// Positional prefix match over an array.
pub fn seq<const N: usize>(elems: [Pattern; N]) -> Pattern {
    Pattern::Sequence(elems.into_iter().collect())
}

/// Positional match requiring the exact array length.
pub fn exact_length<const N: usize>(elems: [Pattern; N]) -> Pattern {
    Pattern::ExactLength(elems.into_iter().collect())
}

/// Every array element must match `inner`.
pub fn each(inner: Pattern) -> Pattern {
    Pattern::Each(Box::new(inner))
}

/// First matching alternative wins.
pub fn any_of<const N: usize>(alternatives: [Pattern; N]) -> Pattern {
    Pattern::AnyOf(alternatives.into_iter().collect())
}

/// Capture the matched value under `name`, constrained by `inner`.
pub fn capture(name: &'static str, inner: Pattern) -> Pattern {
    Pattern::Capture {
        name,
        inner: Some(Box::new(inner)),
    }
}

/// Capture any value under `name`, unconstrained.
pub fn capture_any(name: &'static str) -> Pattern {
    Pattern::Capture { name, inner: None }
}
