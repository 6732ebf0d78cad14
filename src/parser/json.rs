//! Metadata-file documentation extraction.
//!
//! A metadata file is a JSON object; keys ending in the documentation
//! suffix each contribute one variable entry, in original key order.
//! Everything else in the file is ignored.

use crate::model::{FileDocumentation, FileKind, VariableDoc};
use anyhow::{bail, Context, Result};
use serde_json::Value;

/// Keys carrying documentation entries end in this suffix.
const DOC_SUFFIX: &str = "__doc";

/// Parse a metadata file. Invalid JSON, a non-object top level, or a
/// documentation entry missing its fields is fatal to the run.
pub fn parse(file_name: &str, content: &str) -> Result<FileDocumentation> {
    let data: Value =
        serde_json::from_str(content).with_context(|| format!("invalid JSON in {file_name}"))?;
    let Value::Object(entries) = data else {
        bail!("{file_name}: expected a top-level JSON object");
    };

    let mut doc = FileDocumentation {
        file_name: file_name.to_string(),
        kind: FileKind::Metadata,
        ..Default::default()
    };

    for (key, value) in &entries {
        let Some(name) = key.strip_suffix(DOC_SUFFIX) else {
            continue;
        };
        let type_name = string_field(value, "type")
            .with_context(|| format!("{file_name}: entry \"{key}\""))?;
        let description = string_field(value, "description")
            .with_context(|| format!("{file_name}: entry \"{key}\""))?;
        doc.variables.push(VariableDoc {
            name: name.to_string(),
            type_name,
            description: vec![description],
        });
    }

    Ok(doc)
}

fn string_field(value: &Value, field: &str) -> Result<String> {
    value
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .with_context(|| format!("missing string field \"{field}\""))
}
