//! End-to-end client behaviour against a local fixture server.

use std::io::Read;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use lewis_client::{ApiClient, ApiError};
use lewis_config::ApiConfig;
use lewis_core::entities::{Comment, Guide, Token};
use lewis_core::forms::{CommentDraft, Submission};
use lewis_core::{ListFilters, ListingKind, ViewKey};
use lewis_feed::{Paginator, ViewTracker};
use pretty_assertions::assert_eq;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Recorded {
    method: String,
    url: String,
    body: String,
}

type Route = fn(&str, &str) -> (u16, String);

struct Fixture {
    server: Arc<tiny_http::Server>,
    recorded: Arc<Mutex<Vec<Recorded>>>,
    thread: Option<JoinHandle<()>>,
}

impl Fixture {
    fn start(route: Route) -> Self {
        let server = Arc::new(tiny_http::Server::http("127.0.0.1:0").unwrap());
        let recorded = Arc::new(Mutex::new(Vec::new()));
        let thread = {
            let server = Arc::clone(&server);
            let recorded = Arc::clone(&recorded);
            std::thread::spawn(move || {
                for mut request in server.incoming_requests() {
                    let mut body = String::new();
                    request.as_reader().read_to_string(&mut body).unwrap();
                    let method = request.method().to_string();
                    let url = request.url().to_string();
                    let (status, reply) = route(&method, &url);
                    recorded.lock().unwrap().push(Recorded { method, url, body });

                    let mut response = tiny_http::Response::from_string(reply)
                        .with_status_code(status)
                        .with_header(
                            tiny_http::Header::from_bytes(
                                &b"Content-Type"[..],
                                &b"application/json"[..],
                            )
                            .unwrap(),
                        );
                    if status == 429 {
                        response = response.with_header(
                            tiny_http::Header::from_bytes(&b"Retry-After"[..], &b"7"[..]).unwrap(),
                        );
                    }
                    let _ = request.respond(response);
                }
            })
        };
        Self {
            server,
            recorded,
            thread: Some(thread),
        }
    }

    fn client(&self) -> ApiClient {
        let port = self.server.server_addr().to_ip().unwrap().port();
        let config = ApiConfig {
            base_url: format!("http://127.0.0.1:{port}/"),
            ..ApiConfig::default()
        };
        ApiClient::new(&config).unwrap()
    }

    fn urls(&self) -> Vec<String> {
        self.recorded
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.url.clone())
            .collect()
    }

    fn recorded(&self) -> Vec<Recorded> {
        self.recorded.lock().unwrap().clone()
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        self.server.unblock();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

fn token(symbol: &str) -> String {
    format!(
        r#"{{"id":"{id}","symbol":"{symbol}","name":"{symbol} coin"}}"#,
        id = symbol.to_lowercase()
    )
}

fn letters(method: &str, url: &str) -> (u16, String) {
    assert_eq!(method, "GET");
    let page = |symbols: &[&str], next: &str| {
        let items: Vec<String> = symbols.iter().map(|s| token(s)).collect();
        format!(r#"{{"items":[{}],"nextToken":{next}}}"#, items.join(","))
    };
    let body = match url {
        "/tokens?limit=2" => page(&["A", "B"], r#""c1""#),
        "/tokens?limit=2&nextToken=c1" => page(&["C", "D"], r#""c2""#),
        "/tokens?limit=2&nextToken=c2" => page(&["E"], "null"),
        other => return (404, format!(r#"{{"message":"no route {other}"}}"#)),
    };
    (200, body)
}

fn symbols(items: &[Token]) -> Vec<&str> {
    items.iter().map(|t| t.symbol.as_str()).collect()
}

#[tokio::test]
async fn paginator_walks_cursors_over_http() {
    let fixture = Fixture::start(letters);
    let mut pager = Paginator::new(fixture.client().tokens(), ListFilters::with_limit(2));

    pager.load().await.unwrap();
    assert_eq!(symbols(pager.items()), vec!["A", "B"]);
    assert!(pager.next().await.unwrap());
    assert!(pager.next().await.unwrap());
    assert_eq!(symbols(pager.items()), vec!["E"]);
    assert!(!pager.has_next());

    assert!(pager.previous().await.unwrap());
    assert_eq!(symbols(pager.items()), vec!["C", "D"]);
    assert!(pager.previous().await.unwrap());
    assert_eq!(symbols(pager.items()), vec!["A", "B"]);

    assert_eq!(
        fixture.urls(),
        vec![
            "/tokens?limit=2",
            "/tokens?limit=2&nextToken=c1",
            "/tokens?limit=2&nextToken=c2",
            "/tokens?limit=2&nextToken=c1",
            "/tokens?limit=2",
        ]
    );
}

#[tokio::test]
async fn server_error_leaves_paginator_in_place() {
    fn flaky(_method: &str, url: &str) -> (u16, String) {
        if url.contains("nextToken") {
            (502, r#"{"error":"upstream unavailable"}"#.into())
        } else {
            letters("GET", url)
        }
    }
    let fixture = Fixture::start(flaky);
    let mut pager = Paginator::new(fixture.client().tokens(), ListFilters::with_limit(2));
    pager.load().await.unwrap();

    let err = pager.next().await.unwrap_err();
    let ApiError::Api { status, ref message } = err else {
        panic!("expected Api error, got {err:?}");
    };
    assert_eq!((status, message.as_str()), (502, "upstream unavailable"));
    assert_eq!(pager.page_number(), 1);
    assert_eq!(symbols(pager.items()), vec!["A", "B"]);
}

#[tokio::test]
async fn missing_record_is_not_found() {
    fn guides(_method: &str, url: &str) -> (u16, String) {
        match url {
            "/guides/wallets" => (
                200,
                r#"{"id":"wallets","title":"Choosing a wallet","category":"security"}"#.into(),
            ),
            _ => (404, r#"{"message":"not found"}"#.into()),
        }
    }
    let fixture = Fixture::start(guides);
    let client = fixture.client();

    let guide: Guide = client.get(ListingKind::Guides, "wallets").await.unwrap();
    assert_eq!(guide.category.as_deref(), Some("security"));

    let err = client
        .get::<Guide>(ListingKind::Guides, "missing")
        .await
        .unwrap_err();
    let ApiError::NotFound { kind, ref id } = err else {
        panic!("expected NotFound, got {err:?}");
    };
    assert_eq!(kind, ListingKind::Guides);
    assert_eq!(id, "missing");
}

#[tokio::test]
async fn rate_limit_reports_retry_after() {
    fn limited(_method: &str, _url: &str) -> (u16, String) {
        (429, String::new())
    }
    let fixture = Fixture::start(limited);
    let err = fixture.client().search("sol", 5).await.unwrap_err();
    assert!(matches!(err, ApiError::RateLimited { retry_after_secs: 7 }));
}

#[tokio::test]
async fn comment_is_posted_with_captcha_token() {
    fn comments(method: &str, url: &str) -> (u16, String) {
        assert_eq!((method, url), ("POST", "/comments"));
        (
            201,
            r#"{"id":"c9","articleId":"4821","author":"satoshi","body":"Great write-up"}"#.into(),
        )
    }
    let fixture = Fixture::start(comments);
    let draft = CommentDraft {
        article_id: "4821".into(),
        author: Some("satoshi".into()),
        body: "Great write-up".into(),
    };
    let submission = Submission::new(draft, "tok-123").unwrap();

    let created: Comment = fixture.client().post_comment(&submission).await.unwrap();
    assert_eq!(created.id, "c9");

    let sent: serde_json::Value = serde_json::from_str(&fixture.recorded()[0].body).unwrap();
    assert_eq!(sent["captchaToken"], "tok-123");
    assert_eq!(sent["articleId"], "4821");
}

#[tokio::test]
async fn views_are_logged_once_per_key() {
    fn views(_method: &str, _url: &str) -> (u16, String) {
        (204, String::new())
    }
    let fixture = Fixture::start(views);
    let client = fixture.client();
    let mut tracker = ViewTracker::new();

    let key = ViewKey::new(ListingKind::News, "4821");
    assert!(tracker.track(&client, key.clone()).await);
    assert!(!tracker.track(&client, key).await);

    let recorded = fixture.recorded();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].method, "POST");
    assert_eq!(recorded[0].url, "/analytics/views");
    assert_eq!(recorded[0].body, r#"{"key":"news#4821"}"#);
}
