//! Integration tests for the grafos binary
//!
//! These run the compiled binary and check that JSON output stays parseable.

use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::path::PathBuf;
use std::process::Command;

fn grafos_bin() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // Remove test binary name
    path.pop(); // Remove 'deps' directory
    path.push("grafos");
    path
}

fn run_in(dir: &std::path::Path, args: &[&str]) -> std::process::Output {
    Command::new(grafos_bin())
        .current_dir(dir)
        .env_remove("GRAFOS_BACKEND_URL")
        .env_remove("GRAFOS_LANGUAGE")
        .env_remove("GRAFOS_CITY")
        .env_remove("GRAFOS_MODE")
        .env_remove("GRAFOS_RADIUS_KM")
        .env("RUST_LOG", "off")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_config_json_output_is_valid() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &["config", "--json"]);
    assert!(output.status.success());

    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output should be valid JSON");

    assert_eq!(parsed["status"], "success");
    let entries = parsed["data"]["entries"].as_array().unwrap();
    let city = entries.iter().find(|e| e["key"] == "city").unwrap();
    assert_eq!(city["value"], "Paris, France");
    assert_eq!(city["source"], "Default");
}

#[test]
fn test_config_file_and_cli_precedence() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("grafos.toml"),
        "city = \"Lyon, France\"\nbackend_url = \"http://file.local:8000\"\n",
    )
    .unwrap();

    let output = run_in(
        dir.path(),
        &["config", "--json", "--backend-url", "http://cli.local:9000"],
    );
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = parsed["data"]["entries"].as_array().unwrap();
    let find = |key: &str| entries.iter().find(|e| e["key"] == key).unwrap().clone();

    assert_eq!(find("city")["value"], "Lyon, France");
    assert_eq!(find("city")["source"], "File");
    assert_eq!(find("backend_url")["value"], "http://cli.local:9000");
    assert_eq!(find("backend_url")["source"], "Cli");
}

#[test]
fn test_missing_explicit_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &["config", "--config", "missing.toml"]);
    assert!(!output.status.success());
}

#[test]
fn test_health_against_closed_port_fails() {
    let dir = tempfile::tempdir().unwrap();
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let output = run_in(dir.path(), &["health", "--json", "--backend-url", &url]);
    assert!(!output.status.success());
    assert!(!String::from_utf8_lossy(&output.stderr).contains("Error:"));

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["data"]["healthy"], false);
}

/// Serve one canned analysis reply on an ephemeral port
async fn serve(status: StatusCode, body: Value) -> String {
    let app = Router::new().route(
        "/api/analyze",
        post(move || {
            let body = body.clone();
            async move { (status, Json(body)) }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test(flavor = "multi_thread")]
async fn test_failed_analysis_prints_message_once() {
    let url = serve(
        StatusCode::BAD_REQUEST,
        json!({"detail": {"error": "timeout", "code": "osm_unavailable"}}),
    )
    .await;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().to_path_buf();

    let output = tokio::task::spawn_blocking(move || {
        run_in(&path, &["analyze", "--language", "en", "--backend-url", &url])
    })
    .await
    .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("timeout").count(), 1, "stderr was: {stderr}");
    assert!(stderr.contains("OVERPASS_API_URL"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_result_without_map_writes_no_artifacts() {
    let url = serve(
        StatusCode::OK,
        json!({"metrics": {"nodes": 4}, "downloads": {"metricsCSV": "indicateur,valeur"}}),
    )
    .await;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().to_path_buf();

    let output = tokio::task::spawn_blocking(move || {
        run_in(&path, &["analyze", "--backend-url", &url, "--out-dir", "out"])
    })
    .await
    .unwrap();

    assert!(output.status.success());
    assert!(!dir.path().join("out").join("indicateurs.csv").exists());
}
