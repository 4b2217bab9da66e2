use std::sync::Mutex;
use std::time::Duration;

use hello_view::core::config::ResolvedConfig;
use hello_view::core::diagnostics::DiagnosticSink;
use hello_view::core::state::HelloView;
use hello_view::fetch::{FetchFailure, HttpFetcher, TextFetcher};
use hello_view::plain::{drive, run_with};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

// ============================================================================
// Helper Functions
// ============================================================================

#[derive(Default)]
struct CollectingSink {
    entries: Mutex<Vec<FetchFailure>>,
}

impl DiagnosticSink for CollectingSink {
    fn record(&self, cause: &FetchFailure) {
        self.entries.lock().unwrap().push(cause.clone());
    }
}

/// Mounts a GET /api/hello mock that must be hit exactly once.
async fn mock_hello(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/api/hello"))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

async fn frames_against(server: &MockServer, sink: &CollectingSink) -> Vec<String> {
    let fetcher = HttpFetcher::new(server.uri());
    let mut view = HelloView::new();
    let mut frames = Vec::new();
    drive(&mut view, &fetcher, sink, |state| {
        frames.push(state.text().to_string())
    })
    .await;
    frames
}

// ============================================================================
// HttpFetcher Tests
// ============================================================================

#[tokio::test]
async fn test_http_fetcher_returns_body_text() {
    let server = MockServer::start().await;
    mock_hello(
        &server,
        ResponseTemplate::new(200).set_body_string("Hello from Java Backend! GitOps is working!"),
    )
    .await;

    let fetcher = HttpFetcher::new(server.uri());
    let result = fetcher.fetch_text("/api/hello").await;

    assert_eq!(
        result,
        Ok("Hello from Java Backend! GitOps is working!".to_string())
    );
}

#[tokio::test]
async fn test_http_fetcher_does_not_parse_json() {
    let server = MockServer::start().await;
    mock_hello(
        &server,
        ResponseTemplate::new(200)
            .insert_header("content-type", "application/json")
            .set_body_string("{\"message\":\"hi\"}"),
    )
    .await;

    let fetcher = HttpFetcher::new(server.uri());
    let result = fetcher.fetch_text("/api/hello").await;

    assert_eq!(result, Ok("{\"message\":\"hi\"}".to_string()));
}

#[tokio::test]
async fn test_http_fetcher_server_error_is_failure() {
    let server = MockServer::start().await;
    mock_hello(
        &server,
        ResponseTemplate::new(500).set_body_string("Internal Server Error"),
    )
    .await;

    let fetcher = HttpFetcher::new(server.uri());
    let result = fetcher.fetch_text("/api/hello").await;

    assert_eq!(result, Err(FetchFailure::Status { status: 500 }));
}

#[tokio::test]
async fn test_http_fetcher_not_found_is_failure() {
    // Nothing mounted: wiremock answers 404.
    let server = MockServer::start().await;

    let fetcher = HttpFetcher::new(server.uri());
    let result = fetcher.fetch_text("/api/hello").await;

    assert_eq!(result, Err(FetchFailure::Status { status: 404 }));
}

#[tokio::test]
async fn test_http_fetcher_connection_refused_is_network_failure() {
    // Grab a free port, then release it so nothing listens there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let fetcher = HttpFetcher::new(format!("http://{addr}"));
    let result = fetcher.fetch_text("/api/hello").await;

    assert!(matches!(result, Err(FetchFailure::Network(_))));
}

// ============================================================================
// Full Lifecycle Tests
// ============================================================================

#[tokio::test]
async fn test_lifecycle_delayed_pong() {
    let server = MockServer::start().await;
    mock_hello(
        &server,
        ResponseTemplate::new(200)
            .set_body_string("pong")
            .set_delay(Duration::from_millis(150)),
    )
    .await;
    let sink = CollectingSink::default();

    let frames = frames_against(&server, &sink).await;

    assert_eq!(frames, vec!["Loading...", "pong"]);
    assert!(sink.entries.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_lifecycle_backend_failure_shows_generic_error() {
    let server = MockServer::start().await;
    mock_hello(
        &server,
        ResponseTemplate::new(503).set_body_string("upstream exploded"),
    )
    .await;
    let sink = CollectingSink::default();

    let frames = frames_against(&server, &sink).await;

    assert_eq!(frames, vec!["Loading...", "Error connecting to backend"]);
    assert!(frames.iter().all(|f| !f.contains("503")));
    assert!(frames.iter().all(|f| !f.contains("exploded")));
    assert_eq!(
        *sink.entries.lock().unwrap(),
        vec![FetchFailure::Status { status: 503 }]
    );
}

#[tokio::test]
async fn test_plain_output_against_backend() {
    let server = MockServer::start().await;
    mock_hello(&server, ResponseTemplate::new(200).set_body_string("pong")).await;
    let sink = CollectingSink::default();
    let fetcher = HttpFetcher::new(server.uri());
    let mut out = Vec::new();

    run_with(&fetcher, &sink, &mut out).await.unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "Loading...\npong\n");
}

#[tokio::test]
async fn test_plain_run_fetches_once_from_configured_backend() {
    let server = MockServer::start().await;
    mock_hello(&server, ResponseTemplate::new(200).set_body_string("pong")).await;
    let config = ResolvedConfig {
        base_url: server.uri(),
    };

    hello_view::plain::run(&config).await.unwrap();
}
