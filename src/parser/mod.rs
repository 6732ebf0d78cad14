//! Parser module — dispatch by file extension.

pub mod js;
pub mod json;
pub mod name;

use crate::model::FileDocumentation;
use anyhow::{anyhow, Result};
use std::path::Path;

/// Parse an input file into a FileDocumentation based on its extension.
pub fn parse_file(path: &Path, content: &str) -> Result<FileDocumentation> {
    let file_name = display_name(path);
    match path.extension().and_then(|e| e.to_str()) {
        Some("js") => Ok(js::parse(&file_name, content)),
        Some("json") => json::parse(&file_name, content),
        _ => Err(anyhow!("unsupported file type: {}", path.display())),
    }
}

/// File name without its directory part, used as the section heading.
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
