//! JSDoc block parser — line-by-line scan over whitespace-trimmed lines.
//!
//! Recognizes `/** ... */` blocks, classifies each as a function or a
//! variable doc, and extracts fields by positional and delimiter-based
//! splitting. Best-effort by design: malformed tag lines degrade to
//! partially-populated fields, they never abort the run.

use crate::model::{FileDocumentation, FileKind, FunctionDoc, ParamDoc, ReturnDoc, VariableDoc};
use crate::parser::name;

const OPENER: &str = "/**";
const CLOSER: &str = "*/";

/// Continuation lines carry a fixed two-character `* ` prefix.
const CONTINUATION_WIDTH: usize = 2;

/// Parse a source file into a FileDocumentation.
pub fn parse(file_name: &str, input: &str) -> FileDocumentation {
    let lines: Vec<&str> = input.lines().map(str::trim).collect();

    let mut doc = FileDocumentation {
        file_name: file_name.to_string(),
        kind: FileKind::Source,
        ..Default::default()
    };

    for opener in 0..lines.len() {
        if !lines[opener].starts_with(OPENER) {
            continue;
        }
        if is_variable_block(&lines, opener) {
            match extract_variable(&lines, opener) {
                Some(var) => doc.variables.push(var),
                None => warn_unterminated(file_name, opener),
            }
        } else {
            match extract_function(file_name, &lines, opener) {
                Some(func) => doc.functions.push(func),
                None => warn_unterminated(file_name, opener),
            }
        }
    }

    doc
}

fn warn_unterminated(file_name: &str, opener: usize) {
    eprintln!(
        "warning: {}: unterminated comment block at line {}",
        file_name,
        opener + 1
    );
}

// -- Classification -----------------------------------------------------------

/// A block documents a variable when `@var` appears before the closer.
/// The scan is bounded to end-of-file; a block with no closer classifies
/// as a function.
fn is_variable_block(lines: &[&str], opener: usize) -> bool {
    for line in &lines[opener..] {
        if line.contains("@var") {
            return true;
        }
        if line.contains(CLOSER) {
            return false;
        }
    }
    false
}

// -- Function blocks ----------------------------------------------------------

fn extract_function(file_name: &str, lines: &[&str], opener: usize) -> Option<FunctionDoc> {
    if lines[opener].contains(CLOSER) {
        Some(oneline_function(file_name, lines, opener))
    } else {
        multiline_function(file_name, lines, opener)
    }
}

/// `/** description */` directly above the declaration.
fn oneline_function(file_name: &str, lines: &[&str], opener: usize) -> FunctionDoc {
    FunctionDoc {
        description: vec![between_markers(lines[opener]).to_string()],
        name: resolve_name(file_name, lines.get(opener + 1)),
        ..Default::default()
    }
}

/// Multi-line block: lines strictly between opener and closer, each with
/// its continuation prefix stripped, dispatched by tag prefix. Anything
/// unrecognized accumulates as description, in encounter order.
fn multiline_function(file_name: &str, lines: &[&str], opener: usize) -> Option<FunctionDoc> {
    let mut doc = FunctionDoc::default();
    let mut closer = None;

    for i in opener + 1..lines.len() {
        if lines[i].contains(CLOSER) {
            closer = Some(i);
            break;
        }
        let line = strip_continuation(lines[i]);

        if line.starts_with("@param") {
            doc.parameters.push(parse_param(line));
        } else if line.starts_with("@returns") {
            doc.returns = parse_returns(line);
        } else if line.starts_with("@helper_function") {
            doc.helper = true;
        } else if line.starts_with("@async") {
            doc.is_async = true;
        } else {
            doc.description.push(line.to_string());
        }
    }

    let closer = closer?;
    doc.name = resolve_name(file_name, lines.get(closer + 1));
    Some(doc)
}

/// `@param {Type} name - description`
fn parse_param(line: &str) -> ParamDoc {
    let mut tokens = line.split_whitespace().skip(1);
    let type_name = strip_braces(tokens.next().unwrap_or("")).to_string();
    let name = tokens.next().unwrap_or("").to_string();
    let description = match line.find(" - ") {
        Some(pos) => line[pos + 3..].to_string(),
        None => String::new(),
    };
    ParamDoc {
        name,
        type_name,
        description,
    }
}

/// `@returns {Type} value - description`
///
/// A bare `@returns {Type}` with no trailing text records nothing at all,
/// dropping the declared type. Known gap, kept for output compatibility.
fn parse_returns(line: &str) -> Option<ReturnDoc> {
    let mut tokens = line.split_whitespace().skip(1);
    let type_name = escape_angle(strip_braces(tokens.next().unwrap_or("")));
    tokens.next()?;

    // Description starts 2 bytes past the closing brace, skipping "} ".
    let description = line
        .find('}')
        .and_then(|pos| line.get(pos + 2..))
        .unwrap_or("")
        .to_string();
    Some(ReturnDoc {
        type_name,
        description,
    })
}

/// Hand the declaration line following the block to the name table.
/// A block closing on the last line has no declaration to inspect.
fn resolve_name(file_name: &str, decl: Option<&&str>) -> String {
    let Some(decl) = decl else {
        eprintln!("warning: {file_name}: documentation block at end of file has no declaration");
        return String::new();
    };
    match name::function_name(decl) {
        Some(n) => n,
        None => {
            eprintln!("warning: {file_name}: unrecognized declaration: {decl}");
            String::new()
        }
    }
}

// -- Variable blocks ----------------------------------------------------------

fn extract_variable(lines: &[&str], opener: usize) -> Option<VariableDoc> {
    if lines[opener].contains(CLOSER) {
        Some(oneline_variable(lines[opener]))
    } else {
        multiline_variable(lines, opener)
    }
}

/// `/** @var {Type} name - description */`
///
/// Deviating shapes extract what they can: a missing token leaves the
/// field empty, a missing `-` leaves the description empty.
fn oneline_variable(line: &str) -> VariableDoc {
    let inner = between_markers(line);
    let tokens: Vec<&str> = inner.split_whitespace().collect();

    let type_name = strip_braces(tokens.get(1).copied().unwrap_or("")).to_string();
    let name = tokens.get(2).copied().unwrap_or("").to_string();
    let description = match inner.find('-') {
        Some(pos) => inner[pos + 1..].trim().to_string(),
        None => String::new(),
    };

    VariableDoc {
        name,
        type_name,
        description: vec![description],
    }
}

/// The line after the opener carries `{Type}`, the name between `}` and the
/// first `-`, and the first description fragment after that `-`. Every
/// further line up to the closer appends another fragment.
fn multiline_variable(lines: &[&str], opener: usize) -> Option<VariableDoc> {
    let first = *lines.get(opener + 1)?;
    let mut var = VariableDoc::default();

    let open_brace = first.find('{');
    let close_brace = first.find('}');
    let dash = first.find('-');

    if let (Some(open), Some(close)) = (open_brace, close_brace) {
        if open < close {
            var.type_name = first[open + 1..close].trim().to_string();
        }
    }
    if let (Some(close), Some(dash)) = (close_brace, dash) {
        if close < dash {
            var.name = first[close + 1..dash].trim().to_string();
        }
    }
    if let Some(dash) = dash {
        var.description.push(first[dash + 1..].to_string());
    }

    for line in &lines[opener + 2..] {
        if line.contains(CLOSER) {
            return Some(var);
        }
        var.description.push(strip_continuation(line).trim().to_string());
    }
    None
}

// -- Text helpers -------------------------------------------------------------

/// Text between the opener and the first closer, trimmed.
fn between_markers(line: &str) -> &str {
    let inner = line.strip_prefix(OPENER).unwrap_or(line);
    match inner.find(CLOSER) {
        Some(pos) => inner[..pos].trim(),
        None => inner.trim(),
    }
}

/// Drop the fixed-width `* ` continuation prefix.
fn strip_continuation(line: &str) -> &str {
    line.get(CONTINUATION_WIDTH..).unwrap_or("")
}

fn strip_braces(token: &str) -> &str {
    let t = token.strip_prefix('{').unwrap_or(token);
    t.strip_suffix('}').unwrap_or(t)
}

fn escape_angle(s: &str) -> String {
    s.replace('<', "&lt;").replace('>', "&gt;")
}
