//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and exercise the
//! full crawl cycle end-to-end.

use site_distill::config::HttpConfig;
use site_distill::crawler::{
    build_http_client, fetch_page, Coordinator, CrawlOptions, CrawlSummary,
};
use site_distill::CrawlError;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn html_response(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(body.to_string())
        .insert_header("content-type", "text/html")
}

async fn run_crawl(seed: &str, max_pages: usize) -> CrawlSummary {
    let client = build_http_client(&HttpConfig::default()).expect("Failed to build client");
    let seed = Url::parse(seed).expect("Failed to parse seed URL");
    let options = CrawlOptions {
        max_pages,
        max_pending: 10,
    };
    Coordinator::new(&client, seed, &options).run().await
}

#[tokio::test]
async fn test_full_crawl_aggregates_linked_pages() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_response(
            r#"<html><head><title>Home</title></head><body>
            <p>Welcome text</p>
            <a href="/page1">Page 1</a>
            <a href="/page2">Page 2</a>
            </body></html>"#,
        ))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/page1"))
        .respond_with(html_response(
            r#"<html><body><p>Content 1</p></body></html>"#,
        ))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/page2"))
        .respond_with(html_response(
            r#"<html><body><p>Content 2</p></body></html>"#,
        ))
        .mount(&mock_server)
        .await;

    let summary = run_crawl(&format!("{}/", mock_server.uri()), 10).await;

    assert_eq!(summary.pages_fetched, 3);
    assert_eq!(summary.pages_failed, 0);
    assert_eq!(summary.document.matches("--- Content from").count(), 3);
    assert!(summary.document.contains("Welcome text"));
    assert!(summary.document.contains("Content 1"));
    assert!(summary.document.contains("Content 2"));

    // The seed block comes first.
    let seed_pos = summary.document.find("Welcome text").unwrap();
    let child_pos = summary.document.find("Content 1").unwrap();
    assert!(seed_pos < child_pos);
}

#[tokio::test]
async fn test_max_pages_one_fetches_only_the_seed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_response(
            r#"<html><body>
            <p>Seed only</p>
            <a href="/page1">Page 1</a>
            </body></html>"#,
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    // Discovered links are queued but never consumed at this limit.
    Mock::given(method("GET"))
        .and(path("/page1"))
        .respond_with(html_response("<html><body>Never</body></html>"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let summary = run_crawl(&format!("{}/", mock_server.uri()), 1).await;

    assert_eq!(summary.pages_fetched, 1);
    assert_eq!(summary.document.matches("--- Content from").count(), 1);
    assert!(summary.document.contains("Seed only"));
}

#[tokio::test]
async fn test_pending_cap_limits_expansion() {
    let mock_server = MockServer::start().await;

    let anchors: String = (0..15)
        .map(|i| format!(r#"<a href="/p{}">Link {}</a>"#, i, i))
        .collect();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_response(&format!(
            "<html><body><p>Index</p>{}</body></html>",
            anchors
        )))
        .mount(&mock_server)
        .await;

    for i in 0..15 {
        Mock::given(method("GET"))
            .and(path(format!("/p{}", i)))
            .respond_with(html_response(&format!(
                "<html><body><p>Page {}</p></body></html>",
                i
            )))
            .mount(&mock_server)
            .await;
    }

    // max_pages is generous here so only the queue cap limits the crawl.
    let summary = run_crawl(&format!("{}/", mock_server.uri()), 50).await;

    assert_eq!(summary.pages_fetched, 11);
    assert_eq!(summary.document.matches("--- Content from").count(), 11);
}

#[tokio::test]
async fn test_failing_page_is_skipped_not_fatal() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_response(
            r#"<html><body>
            <p>Seed text</p>
            <a href="/good">Good</a>
            <a href="/bad">Bad</a>
            </body></html>"#,
        ))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/good"))
        .respond_with(html_response("<html><body><p>Good page</p></body></html>"))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/bad"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let summary = run_crawl(&format!("{}/", mock_server.uri()), 10).await;

    assert_eq!(summary.pages_fetched, 2);
    assert_eq!(summary.pages_failed, 1);
    assert_eq!(summary.document.matches("--- Content from").count(), 2);
    assert!(!summary.document.contains("/bad ---"));
}

#[tokio::test]
async fn test_offsite_links_are_never_fetched() {
    let site = MockServer::start().await;
    let elsewhere = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_response(&format!(
            r#"<html><body>
            <p>Seed</p>
            <a href="{}/external">External</a>
            <a href="/local">Local</a>
            </body></html>"#,
            elsewhere.uri()
        )))
        .mount(&site)
        .await;

    Mock::given(method("GET"))
        .and(path("/local"))
        .respond_with(html_response("<html><body><p>Local page</p></body></html>"))
        .mount(&site)
        .await;

    Mock::given(method("GET"))
        .respond_with(html_response("<html><body>Offsite</body></html>"))
        .expect(0)
        .mount(&elsewhere)
        .await;

    let summary = run_crawl(&format!("{}/", site.uri()), 10).await;

    assert_eq!(summary.pages_fetched, 2);
    assert!(summary.document.contains("Local page"));
    assert!(!summary.document.contains("Offsite"));
}

#[tokio::test]
async fn test_failed_seed_yields_empty_aggregate() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let summary = run_crawl(&format!("{}/", mock_server.uri()), 10).await;

    assert_eq!(summary.pages_fetched, 0);
    assert_eq!(summary.pages_failed, 1);
    assert_eq!(summary.document, "");
}

#[tokio::test]
async fn test_boilerplate_is_stripped_from_aggregate() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_response(
            r#"<html><head><style>.x { color: red }</style></head><body>
            <header>Banner</header>
            <nav>Menu</nav>
            <p>Article body</p>
            <script>console.log("tracking")</script>
            <footer>Legal</footer>
            </body></html>"#,
        ))
        .mount(&mock_server)
        .await;

    let summary = run_crawl(&format!("{}/", mock_server.uri()), 1).await;

    assert!(summary.document.contains("Article body"));
    for stripped in ["Banner", "Menu", "tracking", "Legal", "color"] {
        assert!(
            !summary.document.contains(stripped),
            "aggregate leaked boilerplate: {}",
            stripped
        );
    }
}

#[tokio::test]
async fn test_fetch_page_returns_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/doc"))
        .respond_with(html_response("<html><body>payload</body></html>"))
        .mount(&mock_server)
        .await;

    let client = build_http_client(&HttpConfig::default()).unwrap();
    let url = Url::parse(&format!("{}/doc", mock_server.uri())).unwrap();

    let body = fetch_page(&client, &url).await.unwrap();
    assert!(body.contains("payload"));
}

#[tokio::test]
async fn test_fetch_page_maps_status_errors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = build_http_client(&HttpConfig::default()).unwrap();
    let url = Url::parse(&format!("{}/missing", mock_server.uri())).unwrap();

    let result = fetch_page(&client, &url).await;
    assert!(matches!(
        result,
        Err(CrawlError::HttpStatus { status: 404, .. })
    ));
}

#[tokio::test]
async fn test_fetch_page_maps_transport_errors() {
    // Nothing listens on port 1.
    let client = build_http_client(&HttpConfig::default()).unwrap();
    let url = Url::parse("http://127.0.0.1:1/").unwrap();

    let result = fetch_page(&client, &url).await;
    assert!(matches!(result, Err(CrawlError::Transport { .. })));
}

#[tokio::test]
async fn test_fetch_page_follows_redirects() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(301).insert_header("location", "/home"))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/home"))
        .respond_with(html_response("<html><body>Landed</body></html>"))
        .mount(&mock_server)
        .await;

    let client = build_http_client(&HttpConfig::default()).unwrap();
    let url = Url::parse(&format!("{}/", mock_server.uri())).unwrap();

    let body = fetch_page(&client, &url).await.unwrap();
    assert!(body.contains("Landed"));
}
