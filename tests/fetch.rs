use std::time::Duration;
use tabscrape::fetch::{fetch, Fetcher};
use tabscrape::FetchError;
use wiremock::matchers::{header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PAGE: &str = "<html><body><h1>Example Domain</h1></body></html>";

// `fetch` uses the blocking reqwest client, which must not run on an async
// worker thread directly.
async fn fetch_blocking(url: String) -> String {
    tokio::task::spawn_blocking(move || fetch(&url))
        .await
        .unwrap()
}

#[tokio::test]
async fn fetch_returns_body_on_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PAGE))
        .mount(&server)
        .await;

    let body = fetch_blocking(server.uri()).await;
    assert!(body.contains("Example Domain"));
}

#[tokio::test]
async fn fetch_sends_a_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header_exists("user-agent"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PAGE))
        .expect(1)
        .mount(&server)
        .await;

    let body = fetch_blocking(server.uri()).await;
    assert!(!body.is_empty());
}

#[tokio::test]
async fn fetch_follows_redirects() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/old"))
        .respond_with(ResponseTemplate::new(301).insert_header("location", "/new"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/new"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PAGE))
        .mount(&server)
        .await;

    let body = fetch_blocking(format!("{}/old", server.uri())).await;
    assert!(body.contains("Example Domain"));
}

#[tokio::test]
async fn fetch_returns_empty_on_http_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    assert_eq!(fetch_blocking(server.uri()).await, "");
}

#[tokio::test]
async fn fetch_returns_empty_on_unreachable_host() {
    // Nothing is listening on this port once the server is dropped.
    let url = {
        let server = MockServer::start().await;
        server.uri()
    };

    assert_eq!(fetch_blocking(url).await, "");
}

#[tokio::test]
async fn fetch_returns_empty_on_malformed_url() {
    assert_eq!(fetch_blocking("not a url".to_string()).await, "");
}

#[tokio::test]
async fn strict_fetcher_reports_the_status_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let url = server.uri();
    let err = tokio::task::spawn_blocking(move || {
        let fetcher = Fetcher::builder().build()?;
        fetcher.get(&url).map(|_| ())
    })
    .await
    .unwrap()
    .unwrap_err();

    match err {
        FetchError::ResponseStatus { status_code } => assert_eq!(status_code, 500),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn strict_fetcher_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let url = server.uri();
    let err = tokio::task::spawn_blocking(move || {
        let fetcher = Fetcher::builder()
            .timeout(Duration::from_millis(100))
            .build()?;
        fetcher.get(&url).map(|_| ())
    })
    .await
    .unwrap()
    .unwrap_err();

    assert!(matches!(err, FetchError::RequestFailed(_)));
}
