// ABOUTME: Integration tests for the lectern CLI binary.
// ABOUTME: Tests HTML file mode, URL fetch mode, JSON output, and argument validation.

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo::CommandCargoExt;
use httpmock::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

const ARTICLE_HTML: &str = r#"<!DOCTYPE html>
<html>
<head><title>Fixture Article</title></head>
<body>
<nav><a href="/">Home</a></nav>
<article>
<p>A fixture paragraph with plenty of words, commas, and enough length to extract cleanly.</p>
<p>A second fixture paragraph that rounds out the body of the article with more prose.</p>
</article>
</body>
</html>"#;

fn lectern_cmd() -> Command {
    Command::cargo_bin("lectern").unwrap()
}

#[test]
fn extracts_from_html_file() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = temp_dir.path().join("article.html");
    fs::write(&html_path, ARTICLE_HTML).unwrap();

    lectern_cmd()
        .arg("--html")
        .arg(&html_path)
        .arg("--url")
        .arg("https://example.com/article")
        .assert()
        .success()
        .stdout(predicate::str::contains("fixture paragraph"))
        .stdout(predicate::str::contains("Home").not());
}

#[test]
fn json_output_includes_title_and_content() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = temp_dir.path().join("article.html");
    fs::write(&html_path, ARTICLE_HTML).unwrap();

    lectern_cmd()
        .arg("--html")
        .arg(&html_path)
        .arg("--url")
        .arg("https://example.com/article")
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"title\": \"Fixture Article\""))
        .stdout(predicate::str::contains("\"content\""))
        .stdout(predicate::str::contains("\"word_count\""));
}

#[test]
fn fetches_url_from_server() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/article");
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body(ARTICLE_HTML);
    });

    lectern_cmd()
        .arg("--allow-private-networks")
        .arg(server.url("/article"))
        .assert()
        .success()
        .stdout(predicate::str::contains("fixture paragraph"));

    mock.assert();
}

#[test]
fn failed_fetch_exits_nonzero() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/gone");
        then.status(404).body("not found");
    });

    lectern_cmd()
        .arg("--allow-private-networks")
        .arg(server.url("/gone"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("error reading"));
}

#[test]
fn timing_flag_prints_elapsed() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = temp_dir.path().join("article.html");
    fs::write(&html_path, ARTICLE_HTML).unwrap();

    lectern_cmd()
        .arg("--html")
        .arg(&html_path)
        .arg("--url")
        .arg("https://example.com/article")
        .arg("--timing")
        .assert()
        .success()
        .stderr(predicate::str::contains("elapsed:"))
        .stderr(predicate::str::contains("ms"));
}

#[test]
fn missing_url_with_html_fails() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = temp_dir.path().join("article.html");
    fs::write(&html_path, ARTICLE_HTML).unwrap();

    lectern_cmd()
        .arg("--html")
        .arg(&html_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--url is required"));
}

#[test]
fn no_args_fails() {
    lectern_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one URL is required"));
}
