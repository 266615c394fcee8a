//! End-to-end tests for the `catcolors` binary.

use assert_cmd::Command;
use std::io::Write;
use tempfile::NamedTempFile;

const SITE: &str = r##"
[[terms]]
slug = "sales"
name = "Sales"
count = 3

[[terms]]
slug = "it"
name = "IT"

[options]
job_manager_job_cat_what_color = "background"
job_manager_job_cat_sales_color = "#ff0000"
"##;

fn site_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn catcolors() -> Command {
    Command::cargo_bin("catcolors").unwrap()
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "command failed: {output:?}");
    String::from_utf8(output.stdout).unwrap()
}

// ============================================================================
// schema
// ============================================================================

#[test]
fn schema_prints_section_json() {
    let site = site_file(SITE);
    let out = stdout_of(catcolors().arg("schema").arg(site.path()));
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(json["id"], "job_cat_colors");
    let fields = json["fields"].as_array().unwrap();
    assert_eq!(fields.len(), 4);
    assert_eq!(fields[0]["kind"], "select");
    assert_eq!(fields[1]["key"], "job_manager_job_cat_sales_color");
    assert_eq!(fields[2]["label"], "<strong>IT</strong>");
    assert_eq!(fields[3]["kind"], "static_text");
}

#[test]
fn schema_with_no_terms() {
    let site = site_file("");
    let out = stdout_of(catcolors().arg("schema").arg(site.path()));
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["fields"].as_array().unwrap().len(), 2);
}

// ============================================================================
// css
// ============================================================================

#[test]
fn css_prints_style_tag() {
    let site = site_file(SITE);
    let out = stdout_of(catcolors().arg("css").arg(site.path()));

    assert!(out.starts_with("<style id='job_manager_cat_colors'>\n"));
    assert!(out.contains(".job-category.sales { background-color: #ff0000; }\n"));
    assert!(out.contains(".job-category.it { background-color: #ffffff; }\n"));
    assert!(out.ends_with("</style>\n"));
}

#[test]
fn css_bare_with_mode_override() {
    let site = site_file(SITE);
    let out = stdout_of(
        catcolors()
            .arg("css")
            .arg(site.path())
            .args(["--mode", "text", "--bare"]),
    );

    assert!(out.starts_with(".job-category {font"));
    assert!(out.contains(".job-category.sales { color: #ff0000; }"));
    assert!(!out.contains("<style"));
}

#[test]
fn css_bad_mode_fails() {
    let site = site_file(SITE);
    catcolors()
        .arg("css")
        .arg(site.path())
        .args(["--mode", "sideways"])
        .assert()
        .failure()
        .stdout("");
}

#[test]
fn css_bad_stored_mode_fails() {
    let site = site_file("[options]\njob_manager_job_cat_what_color = \"sideways\"\n");
    catcolors().arg("css").arg(site.path()).assert().failure().stdout("");
}

#[test]
fn css_uses_config_file() {
    let site = site_file(SITE);
    let config = site_file("selector_prefix = \"badge\"\nstyle_id = \"badges\"\n");
    let out = stdout_of(
        catcolors()
            .arg("--config")
            .arg(config.path())
            .arg("css")
            .arg(site.path()),
    );
    assert!(out.starts_with("<style id='badges'>"));
    assert!(out.contains(".badge.sales { background-color: #ff0000; }"));
}

// ============================================================================
// check
// ============================================================================

#[test]
fn check_ok() {
    let site = site_file(SITE);
    catcolors().arg("check").arg(site.path()).assert().success();
}

#[test]
fn check_reports_bad_color() {
    let site = site_file(
        "[[terms]]\nslug = \"it\"\nname = \"IT\"\n\n[options]\njob_manager_job_cat_it_color = \"blue\"\n",
    );
    catcolors().arg("check").arg(site.path()).assert().failure();
}

#[test]
fn missing_file_fails() {
    catcolors()
        .args(["check", "/nonexistent/site.toml"])
        .assert()
        .failure();
}

#[test]
fn unsafe_slug_fails() {
    let site = site_file("[[terms]]\nslug = \"x{y}\"\nname = \"X\"\n");
    catcolors().arg("schema").arg(site.path()).assert().failure();
}
