use checkdash::client::{ApiClient, CheckFetcher, FetchError, FetchResponse};
use std::sync::{Arc, Mutex};

/// Answers every request with the same outcome and records the URLs it saw.
struct MockFetcher {
    outcome: Result<(u16, String), FetchError>,
    urls: Mutex<Vec<String>>,
}

impl MockFetcher {
    fn responding(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: Ok((status, body.to_string())),
            urls: Mutex::new(Vec::new()),
        })
    }

    fn failing(err: FetchError) -> Arc<Self> {
        Arc::new(Self {
            outcome: Err(err),
            urls: Mutex::new(Vec::new()),
        })
    }

    fn urls(&self) -> Vec<String> {
        self.urls.lock().expect("lock").clone()
    }
}

#[async_trait::async_trait]
impl CheckFetcher for MockFetcher {
    async fn get(&self, url: &str) -> Result<FetchResponse, FetchError> {
        self.urls.lock().expect("lock").push(url.to_string());
        self.outcome
            .clone()
            .map(|(status, body)| FetchResponse { status, body })
    }
}

#[tokio::test]
async fn dashboard_data_is_returned_unchanged() {
    let fetcher = MockFetcher::responding(200, r#"[{"name":"db","status":"SUCCESSFUL"}]"#);
    let client = ApiClient::new(fetcher.clone(), "http://localhost:9967");

    let checks = client.fetch_dashboard_data().await.expect("fetch");

    let as_json = serde_json::to_value(&checks).expect("serialize");
    assert_eq!(as_json, serde_json::json!([{"name": "db", "status": "SUCCESSFUL"}]));
    assert_eq!(fetcher.urls(), vec!["http://localhost:9967/api/v1/checks".to_string()]);
}

#[tokio::test]
async fn non_ok_status_is_a_status_error() {
    let fetcher = MockFetcher::responding(500, r#"{"error":"boom"}"#);
    let client = ApiClient::new(fetcher, "http://localhost:9967");

    let err = client.fetch_dashboard_data().await.expect_err("should fail");
    assert_eq!(err, FetchError::Status(500));
    assert!(err.to_string().contains("500"));
    assert!(err.is_transient());
}

#[tokio::test]
async fn missing_check_is_permanent() {
    let fetcher = MockFetcher::responding(404, r#"{"error":"check not found"}"#);
    let client = ApiClient::new(fetcher, "http://localhost:9967");

    let err = client.fetch_named_check_data("ghost").await.expect_err("should fail");
    assert_eq!(err, FetchError::Status(404));
    assert!(!err.is_transient());
}

#[tokio::test]
async fn transport_errors_are_surfaced() {
    let fetcher = MockFetcher::failing(FetchError::Transport("connection refused".to_string()));
    let client = ApiClient::new(fetcher, "http://localhost:9967");

    let err = client.fetch_named_check_failures("db").await.expect_err("should fail");
    assert!(matches!(err, FetchError::Transport(message) if message.contains("refused")));
}

#[tokio::test]
async fn unparsable_body_is_a_decode_error() {
    let fetcher = MockFetcher::responding(200, "<html>not json</html>");
    let client = ApiClient::new(fetcher, "http://localhost:9967");

    let err = client.fetch_dashboard_data().await.expect_err("should fail");
    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn named_endpoints_encode_the_check_name() {
    let fetcher = MockFetcher::responding(200, "[]");
    let client = ApiClient::new(fetcher.clone(), "http://agent:9967/");

    client.fetch_named_check_data("Sample HTTP Check").await.expect("detail");
    client.fetch_named_check_failures("Sample HTTP Check").await.expect("failures");

    assert_eq!(
        fetcher.urls(),
        vec![
            "http://agent:9967/api/v1/checks/Sample%20HTTP%20Check".to_string(),
            "http://agent:9967/api/v1/checks/Sample%20HTTP%20Check/failures".to_string(),
        ]
    );
}

#[tokio::test]
async fn empty_base_url_uses_relative_paths() {
    let fetcher = MockFetcher::responding(200, "[]");
    let client = ApiClient::new(fetcher.clone(), "");

    client.fetch_dashboard_data().await.expect("fetch");
    assert_eq!(fetcher.urls(), vec!["/api/v1/checks".to_string()]);
}

#[tokio::test]
async fn check_runs_keep_agent_fields() {
    let body = r#"[{"timestamp":"2025-02-12T09:25:09+01:00","combined_out":"HTTP 503","rc":1,"error":null,"duration_ms":812}]"#;
    let fetcher = MockFetcher::responding(200, body);
    let client = ApiClient::new(fetcher, "http://localhost:9967");

    let failures = client.fetch_named_check_failures("api").await.expect("fetch");
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].rc, Some(1));
    assert_eq!(failures[0].effective_status(), "FAILED");
    assert_eq!(failures[0].extra.get("duration_ms"), Some(&serde_json::json!(812)));
}

/// Collects formatted log lines so tests can assert on them.
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().expect("lock")).to_string()
    }
}

impl std::io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().expect("lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[tokio::test]
async fn failed_fetch_is_logged_at_error_level() {
    let logs = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let fetcher = MockFetcher::responding(500, "internal error");
    let client = ApiClient::new(fetcher, "http://localhost:9967");
    client.fetch_dashboard_data().await.expect_err("should fail");

    let output = logs.contents();
    assert!(output.contains("ERROR"), "log output: {output}");
    assert!(output.contains("Response status: 500"), "log output: {output}");
    assert!(output.contains("http://localhost:9967/api/v1/checks"), "log output: {output}");
}

#[tokio::test]
async fn successful_fetch_logs_no_errors() {
    let logs = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let fetcher = MockFetcher::responding(200, "[]");
    let client = ApiClient::new(fetcher, "http://localhost:9967");
    client.fetch_dashboard_data().await.expect("fetch");

    assert!(!logs.contents().contains("ERROR"));
}
