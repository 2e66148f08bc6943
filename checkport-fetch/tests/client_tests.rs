//! Client tests against a one-shot local HTTP responder.

use std::time::{Duration, Instant};

use checkport_fetch::{ApiClient, ClientSettings, FetchError, PingdomClient};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Serves exactly one response and returns the raw request it received.
async fn serve_once(status_line: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
            if request.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        String::from_utf8_lossy(&request).to_string()
    });

    (format!("http://{addr}/api/3.1"), handle)
}

fn client(base_url: &str) -> PingdomClient {
    PingdomClient::new(ClientSettings::new(base_url, "secret-token").with_request_delay_ms(0))
        .unwrap()
}

#[tokio::test]
async fn test_list_uptime_checks_sends_auth_and_query() {
    let body = r#"{"checks":[{"id":1,"name":"a","hostname":"a.com","status":"up","type":"http"}]}"#;
    let (base, server) = serve_once("200 OK", body).await;

    let response = client(&base).list_uptime_checks().await.unwrap();
    let request = server.await.unwrap().to_lowercase();

    assert_eq!(response.checks.len(), 1);
    assert!(request.starts_with("get /api/3.1/checks?limit=25000&include_tags=true http/1.1"));
    assert!(request.contains("authorization: bearer secret-token"));
    assert!(request.contains("accept: application/json"));
    assert!(request.contains("gzip"));
}

#[tokio::test]
async fn test_uptime_detail_is_unwrapped() {
    let body = r#"{"check":{"id":5,"hostname":"b.com","type":{"tcp":{"port":22}}}}"#;
    let (base, server) = serve_once("200 OK", body).await;

    let check = client(&base).get_uptime_check_detail(5).await.unwrap();
    let request = server.await.unwrap().to_lowercase();

    assert_eq!(check.id, 5);
    assert!(check.check_type.is_detail());
    assert!(request.starts_with("get /api/3.1/checks/5?include_teams=true http/1.1"));
}

#[tokio::test]
async fn test_transaction_detail_is_not_unwrapped() {
    let body = r#"{"id":11,"name":"Login","steps":[{"fn":"go_to","args":{"url":"https://x"}}]}"#;
    let (base, _server) = serve_once("200 OK", body).await;

    let check = client(&base).get_transaction_check_detail(11).await.unwrap();
    assert_eq!(check.id, 11);
    assert_eq!(check.steps.len(), 1);
}

#[tokio::test]
async fn test_configured_delay_precedes_request() {
    let (base, server) = serve_once("200 OK", r#"{"id":5,"name":"flow"}"#).await;
    let delayed = PingdomClient::new(
        ClientSettings::new(&base, "secret-token").with_request_delay_ms(300),
    )
    .unwrap();

    let started = Instant::now();
    let check = delayed.get_transaction_check_detail(5).await.unwrap();
    let elapsed = started.elapsed();
    server.await.unwrap();

    assert_eq!(check.id, 5);
    assert!(elapsed >= Duration::from_millis(300), "elapsed {elapsed:?}");
}

#[tokio::test]
async fn test_error_envelope_is_decoded() {
    let body = r#"{"error":{"statuscode":401,"statusdesc":"Unauthorized","errormessage":"Invalid token"}}"#;
    let (base, _server) = serve_once("401 Unauthorized", body).await;

    let err = client(&base).list_transaction_checks().await.unwrap_err();
    assert!(matches!(err, FetchError::Api { status_code: 401, .. }));
    assert_eq!(err.to_string(), "Pingdom API error (401): Invalid token");
}

#[tokio::test]
async fn test_plain_error_body_is_kept() {
    let (base, _server) = serve_once("503 Service Unavailable", "maintenance").await;

    let err = client(&base).get_uptime_check_detail(3).await.unwrap_err();
    assert_eq!(err.to_string(), "HTTP 503 Service Unavailable: maintenance");
}
