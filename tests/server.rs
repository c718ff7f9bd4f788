//! End-to-end tests over a real TCP listener.

use std::time::Duration;

use microservice_a::config::HttpServerConfig;
use microservice_a::http as server;
use microservice_a::{create_router, AppConfig, AppState, ServerError};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::sync::oneshot;

fn loopback() -> HttpServerConfig {
    HttpServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        debug: false,
    }
}

/// Send a bare HTTP/1.1 request and return the raw response text.
async fn raw_get(addr: std::net::SocketAddr, path: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let request = format!("GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();
    response
}

#[tokio::test]
async fn serves_both_routes_over_tcp() {
    let listener = server::bind(&loopback()).await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = create_router(AppState::new(AppConfig::default()));

    let (tx, rx) = oneshot::channel::<()>();
    let handle = tokio::spawn(server::serve(listener, app, async {
        let _ = rx.await;
    }));

    let root = raw_get(addr, "/").await;
    assert!(root.starts_with("HTTP/1.1 200 OK"));
    assert!(root.ends_with("Hello from Microservice A (Python/Flask)!"));

    let health = raw_get(addr, "/health").await;
    assert!(health.starts_with("HTTP/1.1 200 OK"));
    assert!(health.ends_with(r#"{"status":"UP","service":"test-python-app_1"}"#));

    let missing = raw_get(addr, "/unknown").await;
    assert!(missing.starts_with("HTTP/1.1 404 Not Found"));

    tx.send(()).unwrap();
    tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("server did not shut down")
        .unwrap()
        .unwrap();
}

#[tokio::test]
async fn bind_fails_when_port_is_taken() {
    let held = server::bind(&loopback()).await.unwrap();
    let port = held.local_addr().unwrap().port();

    let config = HttpServerConfig {
        port,
        ..loopback()
    };
    let err = server::bind(&config).await.unwrap_err();
    assert!(matches!(err, ServerError::Bind { .. }));
    assert!(err.to_string().contains(&port.to_string()));
}
