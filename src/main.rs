//! jsdocgen — generate a single HTML documentation report from JSDoc-style
//! comments in JavaScript sources and from JSON metadata files.
//!
//! Inputs come from an explicit file list (glob patterns supported) or a
//! directory scan; the report is written as `<project-name>.html` and,
//! best-effort, converted to PDF with wkhtmltopdf.

mod model;
mod parser;
mod render;

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use walkdir::WalkDir;

#[derive(Parser)]
#[command(
    name = "jsdocgen",
    about = "Generate an HTML documentation report from JSDoc-style comments"
)]
struct Cli {
    /// Project name, used for the report title and the output file name
    #[arg(short = 'n', long)]
    project_name: String,

    /// Directory to scan for input files
    #[arg(short = 'd', long, conflicts_with = "files")]
    folder: Option<PathBuf>,

    /// Scan the folder recursively
    #[arg(short = 'r', long, requires = "folder")]
    recursive: bool,

    /// Explicit input files (glob patterns supported)
    #[arg(short = 'f', long, num_args = 1..)]
    files: Vec<String>,

    /// Also process .json metadata files
    #[arg(long)]
    include_json: bool,

    /// Output directory
    #[arg(short = 'o', long, default_value = ".")]
    output: PathBuf,

    /// Skip the PDF export step
    #[arg(long)]
    no_pdf: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let inputs = collect_files(&cli)?;

    // One pass, input order preserved; every file is read whole before
    // parsing begins.
    let mut docs = Vec::with_capacity(inputs.len());
    for path in &inputs {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        docs.push(parser::parse_file(path, &content)?);
    }

    fs::create_dir_all(&cli.output).with_context(|| {
        format!(
            "failed to create output directory: {}",
            cli.output.display()
        )
    })?;

    let html = render::render_document(&cli.project_name, &docs);
    let html_path = cli.output.join(format!("{}.html", cli.project_name));
    fs::write(&html_path, &html)
        .with_context(|| format!("failed to write {}", html_path.display()))?;

    if !cli.no_pdf {
        export_pdf(&html_path, &cli.output.join("documentation.pdf"));
    }

    Ok(())
}

// -- File collection ----------------------------------------------------------

fn collect_files(cli: &Cli) -> Result<Vec<PathBuf>> {
    if let Some(ref folder) = cli.folder {
        return scan_folder(folder, cli.recursive, cli.include_json);
    }
    if cli.files.is_empty() {
        bail!("either --folder or --files is required");
    }
    expand_files(&cli.files, cli.include_json)
}

/// Scan a directory for input files, sorted for deterministic output.
fn scan_folder(folder: &Path, recursive: bool, include_json: bool) -> Result<Vec<PathBuf>> {
    if !folder.is_dir() {
        bail!("not a directory: {}", folder.display());
    }
    let max_depth = if recursive { usize::MAX } else { 1 };

    let mut files = Vec::new();
    for entry in WalkDir::new(folder).max_depth(max_depth) {
        let entry =
            entry.with_context(|| format!("failed to read directory: {}", folder.display()))?;
        if entry.file_type().is_file() && recognized(entry.path(), include_json) {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

/// Expand an explicit file list. The given order is preserved; glob
/// patterns expand sorted in place. A pattern matching nothing is fatal.
fn expand_files(patterns: &[String], include_json: bool) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            if recognized(path, include_json) {
                files.push(path.to_path_buf());
            }
            continue;
        }
        let mut matches: Vec<PathBuf> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {pattern}"))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file() && recognized(p, include_json))
            .collect();
        if matches.is_empty() {
            bail!("no such file: {pattern}");
        }
        matches.sort();
        files.append(&mut matches);
    }
    Ok(files)
}

/// Input extensions. `.json` only counts when metadata files were asked for.
fn recognized(path: &Path, include_json: bool) -> bool {
    match path.extension().and_then(|e| e.to_str()) {
        Some("js") => true,
        Some("json") => include_json,
        _ => false,
    }
}

// -- PDF export ---------------------------------------------------------------

/// Convert the HTML report to PDF with wkhtmltopdf. The report itself is
/// complete without it, so failures only warn.
fn export_pdf(html_path: &Path, pdf_path: &Path) {
    match Command::new("wkhtmltopdf")
        .arg(html_path)
        .arg(pdf_path)
        .output()
    {
        Ok(output) if output.status.success() => {}
        Ok(output) => eprintln!("warning: wkhtmltopdf exited with {}", output.status),
        Err(e) => eprintln!("warning: pdf export skipped: {e}"),
    }
}
