//! Tests for the binary's output and exit codes.

use std::process::Output;

use tokio::process::Command;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Nothing listens on port 1, so every IP lookup fails to connect.
const DEAD_IP_SERVICE: &str = "http://127.0.0.1:1";

async fn run_binary(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_iss_flyover"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .await
        .expect("Failed to run iss_flyover binary")
}

fn assert_ip_failure(output: &Output) {
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1), "stderr: {}", stderr);
    assert!(
        stderr.starts_with("It didn't work! Network error when fetching IP"),
        "Unexpected stderr: {}",
        stderr
    );
    assert_eq!(
        stderr.matches("It didn't work!").count(),
        1,
        "Failure should be reported once: {}",
        stderr
    );
    assert!(output.stdout.is_empty(), "Nothing should be printed on stdout");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_failed_lookup_without_subcommand_exits_with_one() {
    let output = run_binary(&["--ip-service-url", DEAD_IP_SERVICE]).await;
    assert_ip_failure(&output);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_failed_lookup_for_each_subcommand_exits_with_one() {
    for subcommand in ["next", "ip", "coords"] {
        let output = run_binary(&[subcommand, "--ip-service-url", DEAD_IP_SERVICE]).await;
        assert_ip_failure(&output);
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_invalid_config_exits_with_error() {
    let output = run_binary(&["ip", "--timeout-seconds", "0"]).await;
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("timeout_seconds"), "Unexpected stderr: {}", stderr);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_ip_subcommand_prints_ip() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"ip":"1.2.3.4"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_binary(&["ip", "--ip-service-url", &server.uri()]).await;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "1.2.3.4\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_default_command_prints_pass_lines() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"ip":"1.2.3.4"}"#))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/json/1.2.3.4"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"latitude":49.8625,"longitude":-119.5833}"#),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/iss-pass.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"response":[{"risetime":1600000000,"duration":600},{"risetime":1600005800,"duration":512}]}"#,
        ))
        .mount(&server)
        .await;

    let ip_url = server.uri();
    let geo_url = format!("{}/json", server.uri());
    let iss_url = format!("{}/iss-pass.json", server.uri());
    let output = run_binary(&[
        "--ip-service-url",
        &ip_url,
        "--geo-service-url",
        &geo_url,
        "--iss-service-url",
        &iss_url,
    ])
    .await;

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2, "stdout: {}", stdout);
    assert!(lines[0].starts_with("Next pass at ") && lines[0].ends_with(" for 600 seconds!"));
    assert!(lines[1].ends_with(" for 512 seconds!"));
}
