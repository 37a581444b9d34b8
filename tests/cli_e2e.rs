//! End-to-end CLI tests for the abclient binary.

mod support;

use assert_cmd::Command;
use predicates::prelude::*;
use support::socket_guard::start_mock_server_or_skip;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

/// Test that invocation without a subcommand fails with usage output.
#[test]
fn test_binary_without_subcommand_fails_with_usage() {
    let mut cmd = Command::cargo_bin("abclient").unwrap();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

/// Test that --help displays usage information and exits with code 0.
#[test]
fn test_binary_help_displays_usage() {
    let mut cmd = Command::cargo_bin("abclient").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("audiobook download manager"));
}

/// Test that --version displays version and exits with code 0.
#[test]
fn test_binary_version_displays_version() {
    let mut cmd = Command::cargo_bin("abclient").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("abclient"));
}

/// Test that invalid flags cause non-zero exit.
#[test]
fn test_binary_invalid_flag_returns_error() {
    let mut cmd = Command::cargo_bin("abclient").unwrap();
    cmd.arg("--invalid-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

/// Test that an invalid base URL is rejected before any request is made.
#[test]
fn test_binary_invalid_api_url_fails_fast() {
    let mut cmd = Command::cargo_bin("abclient").unwrap();
    cmd.args(["status", "--api-url", "not-a-url"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid API base URL"));
}

/// Test the status probe against a mock backend, wired via the env var.
#[tokio::test(flavor = "multi_thread")]
async fn test_binary_status_probe_against_mock_backend() {
    let Some(server) = start_mock_server_or_skip().await else {
        return;
    };
    Mock::given(method("GET"))
        .and(path("/api/qbittorrent/test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "message": "connected"
        })))
        .mount(&server)
        .await;

    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        let mut cmd = Command::cargo_bin("abclient").unwrap();
        cmd.arg("status")
            .env("ABCLIENT_API_URL", uri)
            .assert()
            .success()
            .stdout(predicate::str::contains("qBittorrent: ok"));
    })
    .await
    .unwrap();
}

/// Test that a failed backend probe yields a non-zero exit code.
#[tokio::test(flavor = "multi_thread")]
async fn test_binary_status_probe_failure_exits_nonzero() {
    let Some(server) = start_mock_server_or_skip().await else {
        return;
    };
    Mock::given(method("GET"))
        .and(path("/api/qbittorrent/test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": false,
            "message": "authentication failed"
        })))
        .mount(&server)
        .await;

    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        let mut cmd = Command::cargo_bin("abclient").unwrap();
        cmd.arg("status")
            .env("ABCLIENT_API_URL", uri)
            .assert()
            .failure()
            .stdout(predicate::str::contains("authentication failed"));
    })
    .await
    .unwrap();
}

/// Test listing downloads against a mock backend.
#[tokio::test(flavor = "multi_thread")]
async fn test_binary_downloads_list_renders_rows() {
    let Some(server) = start_mock_server_or_skip().await else {
        return;
    };
    Mock::given(method("GET"))
        .and(path("/api/downloads"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "downloads": [{
                "id": "d1",
                "title": "Dune",
                "author": "Frank Herbert",
                "status": "downloading",
                "progress": 42,
                "created_at": "2026-08-01T12:00:00Z"
            }]
        })))
        .mount(&server)
        .await;

    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        let mut cmd = Command::cargo_bin("abclient").unwrap();
        cmd.arg("downloads")
            .env("ABCLIENT_API_URL", uri)
            .assert()
            .success()
            .stdout(predicate::str::contains("Dune").and(predicate::str::contains("42")));
    })
    .await
    .unwrap();
}

/// Test that store notifications emitted by the last operation are printed
/// before the process exits.
#[tokio::test(flavor = "multi_thread")]
async fn test_binary_add_prints_success_notification_before_exit() {
    let Some(server) = start_mock_server_or_skip().await else {
        return;
    };
    Mock::given(method("POST"))
        .and(path("/api/downloads"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "download": {
                "id": "d1",
                "title": "Dune",
                "author": "Frank Herbert",
                "status": "queued",
                "progress": 0,
                "created_at": "2026-08-01T12:00:00Z"
            }
        })))
        .mount(&server)
        .await;

    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        let mut cmd = Command::cargo_bin("abclient").unwrap();
        cmd.args([
            "add", "--title", "Dune", "--author", "Frank Herbert", "--magnet", "magnet:?xt=x",
        ])
        .env("ABCLIENT_API_URL", uri)
        .assert()
        .success()
        .stdout(predicate::str::contains("Download started successfully"));
    })
    .await
    .unwrap();
}
