//! Integration tests for the `text` subcommand.

use std::io::Write;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("pdfxml").unwrap()
}

fn statement() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../tests/fixtures/statement.xml")
}

#[test]
fn text_lists_fragments() {
    cmd()
        .arg("text")
        .arg(statement())
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "page\ttop\tleft\twidth\theight\ttext\tbold\n",
        ))
        .stdout(predicate::str::contains("1\t60\t80\t240\t21\t\tAccount Statement"))
        .stdout(predicate::str::contains("1\t276\t200\t30\t13\tRent & Service\t"))
        .stdout(predicate::str::contains("2\t1100\t400\t70\t11\tPage 2 of 2\t"));
}

#[test]
fn text_page_selection() {
    cmd()
        .arg("text")
        .arg(statement())
        .args(["--pages", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("Coffee Shop").not());
}

#[test]
fn text_json_output() {
    let output = cmd()
        .arg("text")
        .arg(statement())
        .args(["--format", "json", "--pages", "1"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let fragments = value.as_array().unwrap();
    assert_eq!(fragments.len(), 15);
    assert_eq!(fragments[1]["bold"], "Date");
    assert_eq!(fragments[4]["text"], "01.03.2024");
    assert!(fragments[4]["bold"].is_null());
}

#[test]
fn text_csv_escapes_commas() {
    cmd()
        .arg("text")
        .arg(statement())
        .args(["--format", "csv", "--pages", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2,180,482,40,13,\"-42,10\","));
}

#[test]
fn text_unicode_normalization() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "<pdf2xml><page number=\"1\"><text top=\"5\" left=\"6\" width=\"7\" height=\"8\">\u{FB01}le</text></page></pdf2xml>"
    )
    .unwrap();

    cmd()
        .arg("text")
        .arg(file.path())
        .args(["--unicode-norm", "nfkc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1\t5\t6\t7\t8\tfile\t"));
}

#[test]
fn text_file_not_found() {
    cmd()
        .arg("text")
        .arg("/nonexistent/statement.xml")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: file not found"));
}

#[test]
fn text_malformed_document() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "<html><body>not pdf2xml</body></html>").unwrap();

    cmd()
        .arg("text")
        .arg(file.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: failed to open document"))
        .stderr(predicate::str::contains("<pdf2xml>"));
}
