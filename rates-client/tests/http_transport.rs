//! Integration tests for the HTTP bulletin transport.
//!
//! These tests run a local axum server and point the transport at it, so
//! status mapping and proxy routing are checked without the live endpoint.

use axum::{
    Router,
    http::{StatusCode, Uri},
    routing::get,
};
use rates_client::HttpTransport;
use rates_types::{BulletinTransport, FetchError};

const BULLETIN: &str = "02 Jan 2024 #1
Country|Currency|Amount|Code|Rate
Australia|dollar|1|AUD|15.484
Euro zone|euro|1|EUR|24.115
United States|dollar|1|USD|22.091
";

/// Starts a server on an ephemeral port and returns its base URL.
async fn spawn_server(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn bulletin_app() -> Router {
    Router::new()
        .route("/daily.txt", get(|| async { BULLETIN }))
        .route(
            "/broken.txt",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        )
}

#[tokio::test]
async fn test_fetch_text_success() {
    let base = spawn_server(bulletin_app()).await;
    let transport = HttpTransport::new().with_url(format!("{}/daily.txt", base));

    let text = transport.fetch_text().await.unwrap();
    assert_eq!(text, BULLETIN);
}

#[tokio::test]
async fn test_not_found_maps_to_network_error() {
    let base = spawn_server(bulletin_app()).await;
    let transport = HttpTransport::new().with_url(format!("{}/missing.txt", base));

    let err = transport.fetch_text().await.unwrap_err();
    assert_eq!(err, FetchError::Network { status: 404 });
}

#[tokio::test]
async fn test_server_error_maps_to_network_error() {
    let base = spawn_server(bulletin_app()).await;
    let transport = HttpTransport::new().with_url(format!("{}/broken.txt", base));

    let err = transport.fetch_text().await.unwrap_err();
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn test_refused_connection_maps_to_transport_error() {
    // Reserve a port, then free it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let transport = HttpTransport::new().with_url(format!("http://{}/daily.txt", addr));
    let err = transport.fetch_text().await.unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_proxy_receives_target_url_in_path() {
    let app = Router::new().fallback(|uri: Uri| async move { uri.path().to_string() });
    let proxy = spawn_server(app).await;

    let transport = HttpTransport::new()
        .with_url("https://www.cnb.cz/daily.txt")
        .with_proxy(proxy);

    let path = transport.fetch_text().await.unwrap();
    assert!(path.starts_with("/https:"), "got {}", path);
    assert!(path.ends_with("www.cnb.cz/daily.txt"), "got {}", path);
}
