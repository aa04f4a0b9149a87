use serde_json::json;
use std::io::Write;
use std::path::Path;
use std::process::{Output, Stdio};
use tokio::process::Command;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SECRET: &str = "SEEKRIT-KEY-42";

/// Run the built binary with a scrubbed environment so no developer key or
/// settings file leaks in from the host.
async fn tubeseed(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tubeseed"))
        .args(args)
        .env_clear()
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .stdin(Stdio::null())
        .output()
        .await
        .expect("binary runs")
}

fn seed_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[tokio::test]
async fn missing_key_exits_nonzero_without_output_or_requests() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .expect(0)
        .mount(&server)
        .await;

    let home = tempfile::tempdir().unwrap();
    let seeds = seed_file("abc\n");
    let seed_arg = format!("--seed={}", seeds.path().display());
    let base_arg = format!("--api-base={}", server.uri());

    let out = tubeseed(home.path(), &[seed_arg.as_str(), base_arg.as_str()]).await;

    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("Developer key not specified"),
        "stderr: {stderr}"
    );
}

#[tokio::test]
async fn seed_file_run_prints_ids_and_keeps_key_out_of_stderr() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "good"))
        .and(query_param("key", SECRET))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{ "id": { "kind": "youtube#video", "videoId": "abc" }, "snippet": { "title": "X" } }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("relatedToVideoId", "broken"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": { "code": 404, "message": "Requested entity was not found." }
        })))
        .mount(&server)
        .await;

    let home = tempfile::tempdir().unwrap();
    let seeds = seed_file("^good\nbroken\n");
    let seed_arg = format!("--seed={}", seeds.path().display());
    let base_arg = format!("--api-base={}", server.uri());
    let key_arg = format!("--developer-key={SECRET}");

    let out = tubeseed(home.path(), &[seed_arg.as_str(), base_arg.as_str(), key_arg.as_str()]).await;

    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "abc\n");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("seed.search_failed"), "stderr: {stderr}");
    assert!(!stderr.contains(SECRET), "key leaked: {stderr}");
}

#[tokio::test]
async fn unreachable_api_is_logged_without_the_key() {
    // Bind and drop a server so the port is closed.
    let uri = {
        let server = MockServer::start().await;
        server.uri()
    };

    let home = tempfile::tempdir().unwrap();
    let seeds = seed_file("abc\n");
    let seed_arg = format!("--seed={}", seeds.path().display());
    let base_arg = format!("--api-base={uri}");

    let out = Command::new(env!("CARGO_BIN_EXE_tubeseed"))
        .args([seed_arg.as_str(), base_arg.as_str()])
        .env_clear()
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env("YOUTUBE_DEVELOPER_KEY", SECRET)
        .stdin(Stdio::null())
        .output()
        .await
        .expect("binary runs");

    assert!(out.status.success());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("seed.search_failed"), "stderr: {stderr}");
    assert!(!stderr.contains(SECRET), "key leaked: {stderr}");
}
