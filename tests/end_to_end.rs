//! End-to-end polling scenarios against a mock document store.
//!
//! These tests exercise the public library surface the way the binary uses
//! it: build a `Config`, run the poller under a cancellation token, and
//! observe what lands in the sink.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use docstore_cp::{Config, OutputTarget, Poller, resolve_data_url};
use serde_json::json;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer, doc_path: &str, output: OutputTarget) -> Config {
    Config {
        url: resolve_data_url(&server.uri(), doc_path),
        headers: HashMap::new(),
        output,
        input: None,
        poll_interval: Duration::from_millis(10),
    }
}

/// Run the poller long enough for several 10ms cycles, then cancel it.
async fn run_cycles(config: Config, for_duration: Duration) {
    let poller = Poller::new(config).unwrap();
    let cancel_token = CancellationToken::new();
    let handle = tokio::spawn(poller.run(cancel_token.clone()));

    tokio::time::sleep(for_duration).await;
    cancel_token.cancel();
    handle.await.unwrap();
}

/// Poll for a file to appear with the expected contents, bounded by a
/// deadline so a broken poller fails the test instead of hanging it.
async fn wait_for_file(path: &Path, expected: &[u8]) {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
    loop {
        if let Ok(contents) = std::fs::read(path)
            && contents == expected
        {
            return;
        }
        assert!(
            tokio::time::Instant::now() < deadline,
            "sink never reached the expected contents {:?}",
            String::from_utf8_lossy(expected)
        );
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

#[tokio::test]
async fn get_poll_copies_a_string_result_into_the_sink() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/data/foo/bar"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "hello"})))
        .mount(&server)
        .await;

    let temp_dir = tempfile::TempDir::new().unwrap();
    let out_path = temp_dir.path().join("copy/out.txt");

    run_cycles(
        config_for(&server, "/foo/bar", OutputTarget::File(out_path.clone())),
        Duration::from_millis(60),
    )
    .await;

    assert_eq!(std::fs::read(&out_path).unwrap(), b"hello");

    let requests = server.received_requests().await.unwrap();
    assert!(!requests.is_empty());
    assert_eq!(requests[0].method, "GET");
    assert!(requests[0].body.is_empty(), "GET polls carry no body");
}

#[tokio::test]
async fn post_poll_submits_the_input_document_each_cycle() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/data/greet"))
        .and(body_json(json!({"input": {"who": "world"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "hi world"})))
        .mount(&server)
        .await;

    let temp_dir = tempfile::TempDir::new().unwrap();
    let out_path = temp_dir.path().join("out.txt");

    let mut config = config_for(&server, "/greet", OutputTarget::File(out_path.clone()));
    config.input = Some(json!({"who": "world"}));

    run_cycles(config, Duration::from_millis(60)).await;

    assert_eq!(std::fs::read(&out_path).unwrap(), b"hi world");

    // Every cycle matched the body matcher, otherwise nothing would have
    // been written
    let requests = server.received_requests().await.unwrap();
    assert!(requests.len() >= 2, "expected repeated polls");
}

#[tokio::test]
async fn each_successful_poll_overwrites_the_previous_result() {
    let server = MockServer::start().await;
    // First cycle sees "hello", every later cycle sees "world"
    Mock::given(method("GET"))
        .and(path("/v1/data/doc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "hello"})))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/data/doc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "world"})))
        .mount(&server)
        .await;

    let temp_dir = tempfile::TempDir::new().unwrap();
    let out_path = temp_dir.path().join("out.txt");

    let poller = Poller::new(config_for(
        &server,
        "/doc",
        OutputTarget::File(out_path.clone()),
    ))
    .unwrap();
    let cancel_token = CancellationToken::new();
    let handle = tokio::spawn(poller.run(cancel_token.clone()));

    wait_for_file(&out_path, b"world").await;
    cancel_token.cancel();
    handle.await.unwrap();
}

#[tokio::test]
async fn error_cycles_do_not_stop_later_successes() {
    let server = MockServer::start().await;
    // Two failing cycles, then a well-behaved document
    Mock::given(method("GET"))
        .and(path("/v1/data/doc"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "code": "internal_error",
            "message": "evaluation failed"
        })))
        .up_to_n_times(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/data/doc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "recovered"})))
        .mount(&server)
        .await;

    let temp_dir = tempfile::TempDir::new().unwrap();
    let out_path = temp_dir.path().join("out.txt");

    let poller = Poller::new(config_for(
        &server,
        "/doc",
        OutputTarget::File(out_path.clone()),
    ))
    .unwrap();
    let cancel_token = CancellationToken::new();
    let handle = tokio::spawn(poller.run(cancel_token.clone()));

    wait_for_file(&out_path, b"recovered").await;
    cancel_token.cancel();
    handle.await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(
        requests.len() >= 3,
        "the loop must outlive the failing cycles, saw {} request(s)",
        requests.len()
    );
}
