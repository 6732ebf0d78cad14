//! Declaration-name heuristic — an ordered table of (predicate, extractor)
//! rules over common JS declaration idioms. Not a grammar: the first
//! matching predicate decides the outcome and never falls through to a
//! later rule.

use regex::Regex;
use std::sync::LazyLock;

// Bare method shorthand: `fName () {`. Prefix shape only, so a truncated
// declaration line still names.
static RE_METHOD_SHORTHAND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+\s*\(").unwrap());

struct Rule {
    matches: fn(&str) -> bool,
    extract: fn(&str) -> Option<String>,
}

const RULES: &[Rule] = &[
    // async function fName () {}
    Rule {
        matches: |l| l.starts_with("async function"),
        extract: |l| before_paren(l, 15),
    },
    // { ..., async fName () {}, ... }
    Rule {
        matches: |l| l.starts_with("async"),
        extract: |l| before_paren(l, 5),
    },
    // function fName () {}
    Rule {
        matches: |l| l.starts_with("function"),
        extract: |l| before_paren(l, 8),
    },
    // { ..., fName: function () {}, ... }
    Rule {
        matches: is_object_key_form,
        extract: |l| l.find(':').map(|c| l[..c].trim().to_string()),
    },
    // fName = function () {},  fName = async function () {}
    Rule {
        matches: |l| l.contains("function") && l.contains('='),
        extract: |l| l.split_whitespace().next().map(str::to_string),
    },
    // { ..., fName () {}, ... }
    Rule {
        matches: |l| RE_METHOD_SHORTHAND.is_match(l),
        extract: |l| l.find('(').map(|p| l[..p].trim().to_string()),
    },
];

/// Extract the declared function name from a declaration line.
/// `None` is the explicit unrecognized-declaration outcome, also produced
/// when the winning rule's required `(` is absent.
pub fn function_name(line: &str) -> Option<String> {
    RULES
        .iter()
        .find(|rule| (rule.matches)(line))
        .and_then(|rule| (rule.extract)(line))
}

fn is_object_key_form(line: &str) -> bool {
    match (line.find(':'), line.find("function")) {
        (Some(colon), Some(func)) => colon < func,
        _ => false,
    }
}

/// Substring between a fixed prefix offset and the opening parenthesis.
/// A parenthesis inside the prefix yields the empty name rather than a
/// backwards range.
fn before_paren(line: &str, offset: usize) -> Option<String> {
    let paren = line.find('(')?;
    let start = offset.min(paren);
    Some(line.get(start..paren)?.trim().to_string())
}
