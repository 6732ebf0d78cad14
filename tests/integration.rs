use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_jsdocgen")))
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn report(dir: &TempDir, project: &str) -> String {
    std::fs::read_to_string(dir.path().join(format!("{project}.html"))).unwrap()
}

// -- file mode --

#[test]
fn files_mode_writes_report() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["--project-name", "demo", "--no-pdf"])
        .args(["-o", dir.path().to_str().unwrap()])
        .args(["--files", &fixture_path("app.js")])
        .assert()
        .success();

    let html = report(&dir, "demo");
    assert!(html.contains("<h1>Documentation for project demo</h1>"));
    assert!(html.contains("<h2>File: app.js</h2>"));
    assert!(html.contains("collectRecords"));
    assert!(html.contains("(table, fields)"));
    assert!(html.contains("<span class=\"small_italic\">async</span>"));
    assert!(html.contains("Array&lt;String&gt;"));
    assert!(html.contains("defaultTable"));
    assert!(html.contains("Returns:"));
    assert!(html.contains("The matching records"));
}

#[test]
fn sections_follow_input_order() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["--project-name", "ordered", "--no-pdf", "--include-json"])
        .args(["-o", dir.path().to_str().unwrap()])
        .args(["--files", &fixture_path("app.js"), &fixture_path("config.json")])
        .assert()
        .success();

    let html = report(&dir, "ordered");
    let app = html.find("File: app.js").unwrap();
    let config = html.find("File: config.json").unwrap();
    assert!(app < config);
    assert!(html.contains("apiBase"));
    assert!(html.contains("retries"));
    assert!(!html.contains("timeoutMs"));
}

#[test]
fn sections_follow_input_order_reversed() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["--project-name", "reversed", "--no-pdf", "--include-json"])
        .args(["-o", dir.path().to_str().unwrap()])
        .args(["--files", &fixture_path("config.json"), &fixture_path("app.js")])
        .assert()
        .success();

    let html = report(&dir, "reversed");
    let config = html.find("File: config.json").unwrap();
    let app = html.find("File: app.js").unwrap();
    assert!(config < app);
}

#[test]
fn zero_entry_file_produces_no_section() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["--project-name", "demo", "--no-pdf"])
        .args(["-o", dir.path().to_str().unwrap()])
        .args(["--files", &fixture_path("empty.js"), &fixture_path("app.js")])
        .assert()
        .success();

    let html = report(&dir, "demo");
    assert!(!html.contains("empty.js"));
    assert!(html.contains("File: app.js"));
}

#[test]
fn metadata_files_need_the_include_flag() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["--project-name", "demo", "--no-pdf"])
        .args(["-o", dir.path().to_str().unwrap()])
        .args(["--files", &fixture_path("config.json")])
        .assert()
        .success();

    let html = report(&dir, "demo");
    assert!(!html.contains("config.json"));
}

#[test]
fn files_mode_expands_globs() {
    let dir = TempDir::new().unwrap();
    let pattern = format!("{}/tests/fixtures/*.js", env!("CARGO_MANIFEST_DIR"));

    cmd()
        .args(["--project-name", "globbed", "--no-pdf"])
        .args(["-o", dir.path().to_str().unwrap()])
        .args(["--files", &pattern])
        .assert()
        .success();

    let html = report(&dir, "globbed");
    assert!(html.contains("File: app.js"));
    assert!(html.contains("File: helpers.js"));
}

#[test]
fn helper_badge_is_rendered() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["--project-name", "demo", "--no-pdf"])
        .args(["-o", dir.path().to_str().unwrap()])
        .args(["--files", &fixture_path("helpers.js")])
        .assert()
        .success();

    let html = report(&dir, "demo");
    assert!(html.contains("buildQuery"));
    assert!(html.contains("<span class=\"small_italic\">helper</span>"));
    assert!(html.contains("maxDepth"));
}

// -- folder mode --

#[test]
fn folder_scan_is_not_recursive_by_default() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["--project-name", "demo", "--no-pdf"])
        .args(["-o", dir.path().to_str().unwrap()])
        .args(["--folder", &fixture_path("")])
        .assert()
        .success();

    let html = report(&dir, "demo");
    assert!(html.contains("File: app.js"));
    assert!(html.contains("File: helpers.js"));
    assert!(!html.contains("deep.js"));
    assert!(!html.contains("config.json"));
}

#[test]
fn recursive_folder_scan_descends() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["--project-name", "demo", "--no-pdf", "--recursive"])
        .args(["-o", dir.path().to_str().unwrap()])
        .args(["--folder", &fixture_path("")])
        .assert()
        .success();

    let html = report(&dir, "demo");
    assert!(html.contains("File: deep.js"));
    assert!(html.contains("hello"));
}

#[test]
fn folder_scan_includes_metadata_on_request() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["--project-name", "demo", "--no-pdf", "--include-json"])
        .args(["-o", dir.path().to_str().unwrap()])
        .args(["--folder", &fixture_path("")])
        .assert()
        .success();

    let html = report(&dir, "demo");
    assert!(html.contains("File: config.json"));
    assert!(html.contains("apiBase"));
}

// -- fatal errors --

#[test]
fn missing_folder_aborts_the_run() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["--project-name", "demo", "--no-pdf"])
        .args(["-o", dir.path().to_str().unwrap()])
        .args(["--folder", "/does/not/exist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a directory"));

    assert!(!dir.path().join("demo.html").exists());
}

#[test]
fn missing_file_aborts_the_run() {
    cmd()
        .args(["--project-name", "demo", "--no-pdf"])
        .args(["--files", "does/not/exist.js"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no such file"));
}

#[test]
fn invalid_metadata_aborts_the_run() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["--project-name", "demo", "--no-pdf", "--include-json"])
        .args(["-o", dir.path().to_str().unwrap()])
        .args(["--files", &fixture_path("invalid.json")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid JSON"));

    assert!(!dir.path().join("demo.html").exists());
}

// -- CLI surface --

#[test]
fn project_name_is_required() {
    cmd()
        .args(["--files", &fixture_path("app.js")])
        .assert()
        .failure();
}

#[test]
fn folder_and_files_conflict() {
    cmd()
        .args(["--project-name", "demo"])
        .args(["--folder", &fixture_path("")])
        .args(["--files", &fixture_path("app.js")])
        .assert()
        .failure();
}

#[test]
fn some_input_selection_is_required() {
    cmd()
        .args(["--project-name", "demo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--folder or --files"));
}

// -- pdf export --

#[test]
fn no_pdf_skips_the_export() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["--project-name", "demo", "--no-pdf"])
        .args(["-o", dir.path().to_str().unwrap()])
        .args(["--files", &fixture_path("app.js")])
        .assert()
        .success();

    assert!(!dir.path().join("documentation.pdf").exists());
}

#[test]
fn pdf_export_failure_does_not_fail_the_run() {
    // Whether or not wkhtmltopdf is installed, the run itself succeeds.
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["--project-name", "demo"])
        .args(["-o", dir.path().to_str().unwrap()])
        .args(["--files", &fixture_path("app.js")])
        .assert()
        .success();

    assert!(dir.path().join("demo.html").exists());
}
