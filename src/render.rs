//! HTML report rendering — one standalone page for the whole run.
//!
//! Only angle brackets in type strings are escaped; every other field is
//! emitted verbatim, so HTML-significant characters in free-text
//! descriptions pass straight through into the report.

use crate::model::{FileDocumentation, FileKind, FunctionDoc, VariableDoc};

const STYLE: &str = "\
body {padding: 5px 70px;}
p, td, th, table, span, div, h1, h3, h4, h5 {color: #555;}
p, td, th {font-family: Verdana, Geneva, sans-serif; font-size: 15px;}
h1, h2, h3, h4, h5 {font-family: Georgia, serif;}
.small_italic {margin-left: 20px; font-weight: normal; font-style: italic; font-size: 18px;}
.heading-param {font-weight: normal;}
table {border-collapse: collapse;}
td, th {border: 1px solid #bbb; padding: 5px 15px; font-weight: normal;}
th {background-color: #edf2ed;}
h1 {font-size: 45px; color: black;}
h2 {font-size: 33px; color: #111;}
h3 {font-size: 25px;}
h4 {font-size: 22px; margin-bottom: 4px; margin-top: 45px; font-weight: normal; letter-spacing: 0.5;}
h5 {margin: 10px 0 3px 0; font-weight: normal; font-size: 17px;}
p {margin: 10px 0;}
hr {margin-top: 25px;}
.params-table th {background-color: #e8f7e8;}
.returns-table th {background-color: #f7e8f5;}
.variable-table th {background-color: #e8f3f7;}
.param-name-cell, .type-cell {font-family: monospace; white-space: pre;}
pre {display: inline;}
";

/// Render the complete report. Files contributing no entries produce no
/// section, in input order otherwise.
pub fn render_document(project_name: &str, files: &[FileDocumentation]) -> String {
    let mut out = String::new();

    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str(&format!(
        "<title>Documentation for project {project_name}</title>\n"
    ));
    out.push_str("<style>\n");
    out.push_str(STYLE);
    out.push_str("</style>\n</head>\n<body>\n");
    out.push_str(&format!(
        "<h1>Documentation for project {project_name}</h1>\n\n"
    ));

    for file in files {
        if file.is_empty() {
            continue;
        }
        out.push_str(&render_file_section(file));
    }

    out.push_str("</body>\n</html>\n");
    out
}

fn render_file_section(file: &FileDocumentation) -> String {
    let mut out = String::new();
    out.push_str(&format!("<hr/>\n\n<h2>File: {}</h2>\n\n", file.file_name));

    match file.kind {
        FileKind::Source => {
            if !file.variables.is_empty() {
                out.push_str("<h3 style=\"margin-bottom: 5px;\">Variables</h3>");
                out.push_str(&render_variables_table(&file.variables));
                out.push_str("\n\n");
            }
            if !file.functions.is_empty() {
                out.push_str("<h3 style=\"margin-bottom: -40px;\">Functions</h3>");
                for func in &file.functions {
                    out.push_str(&render_function(func));
                    out.push_str("\n\n");
                }
            }
        }
        FileKind::Metadata => {
            out.push_str(&render_variables_table(&file.variables));
            out.push_str("\n\n");
        }
    }

    out
}

fn render_function(func: &FunctionDoc) -> String {
    let param_names: Vec<&str> = func.parameters.iter().map(|p| p.name.as_str()).collect();

    let mut out = String::new();
    out.push_str(&format!(
        "<h4>{} <span class=\"heading-param\">({})</span>",
        func.name,
        param_names.join(", ")
    ));
    if func.is_async {
        out.push_str("<span class=\"small_italic\">async</span>");
    }
    if func.helper {
        out.push_str("<span class=\"small_italic\">helper</span>");
    }
    out.push_str("</h4>\n");

    out.push_str(&format!("<p>{}</p>\n", func.description.join(" ")));

    if !func.parameters.is_empty() {
        out.push_str("<h5 class=\"parameters-header\">Parameters:</h5>");
        out.push_str(
            "<table class=\"params-table\"><thead><tr><th>Name</th><th>Type</th><th>Description</th></tr></thead>",
        );
        for param in &func.parameters {
            out.push_str(&format!(
                "<tr><td class=\"param-name-cell\">{}</td><td class=\"type-cell\">{}</td><td class=\"description-cell\">{}</td></tr>",
                param.name,
                escape_angle(&param.type_name),
                param.description
            ));
        }
        out.push_str("</table>");
    }

    if let Some(ref ret) = func.returns {
        out.push_str("<h5 class=\"returns-header\">Returns:</h5>");
        out.push_str(
            "<table class=\"returns-table\"><thead><tr><th>Type</th><th>Description</th></tr></thead>",
        );
        out.push_str(&format!(
            "<tr><td class=\"type-cell\">{}</td><td class=\"description-cell\">{}</td></tr>",
            escape_angle(&ret.type_name),
            ret.description
        ));
        out.push_str("</table>");
    }

    out
}

fn render_variables_table(variables: &[VariableDoc]) -> String {
    let mut out = String::new();
    out.push_str(
        "<table class=\"variable-table\"><thead><tr><th>Name</th><th>Type</th><th>Description</th></tr></thead>",
    );
    for var in variables {
        out.push_str(&format!(
            "<tr><td class=\"param-name-cell\">{}</td><td class=\"type-cell\">{}</td><td class=\"description-cell\">{}</td></tr>",
            var.name,
            escape_angle(&var.type_name),
            var.description.join(" ")
        ));
    }
    out.push_str("</table>");
    out
}

/// Types are the only escaped fields, and only their angle brackets.
fn escape_angle(s: &str) -> String {
    s.replace('<', "&lt;").replace('>', "&gt;")
}
