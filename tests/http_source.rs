// tests/http_source.rs
//
// HttpSource against a one-shot local HTTP responder.

use sheetfolio::{
    config::options::NetOptions,
    core::{FeedSource, HttpSource},
    error::FeedError,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serve a single canned response; returns the URL to fetch.
async fn serve_once(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut sock, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 1024];
        let _ = sock.read(&mut buf).await;
        let resp = format!(
            "HTTP/1.1 {status}\r\nContent-Type: text/csv\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let _ = sock.write_all(resp.as_bytes()).await;
        let _ = sock.shutdown().await;
    });
    format!("http://{addr}/feed.csv")
}

#[tokio::test]
async fn success_returns_body() {
    let url = serve_once("200 OK", "Begriff,Definition\nAtom,Unit\n").await;
    let source = HttpSource::new(&NetOptions::default()).unwrap();
    let body = source.fetch_text(&url).await.unwrap();
    assert_eq!(body, "Begriff,Definition\nAtom,Unit\n");
}

#[tokio::test]
async fn error_status_is_unavailable_and_body_is_dropped() {
    let url = serve_once("404 Not Found", "Title\nnot a feed\n").await;
    let source = HttpSource::new(&NetOptions::default()).unwrap();
    match source.fetch_text(&url).await {
        Err(FeedError::SourceUnavailable { url: u, reason }) => {
            assert_eq!(u, url);
            assert!(reason.contains("404"), "{reason}");
        }
        other => panic!("expected SourceUnavailable, got {other:?}"),
    }
}
