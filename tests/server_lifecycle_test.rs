use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

use student_registry::server;
use student_registry::services::StudentRegistry;

async fn raw_request(addr: std::net::SocketAddr, request: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.expect("Failed to connect");
    stream
        .write_all(request.as_bytes())
        .await
        .expect("Failed to write request");

    let mut response = Vec::new();
    timeout(Duration::from_secs(5), stream.read_to_end(&mut response))
        .await
        .expect("Timeout waiting for response")
        .expect("Failed to read response");
    String::from_utf8(response).expect("Response is not UTF-8")
}

#[tokio::test]
async fn test_serves_over_tcp_and_shuts_down() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let registry = StudentRegistry::seeded().into_shared();
    let shutdown = CancellationToken::new();

    let server = tokio::spawn(server::serve(listener, registry.clone(), shutdown.clone()));

    let body = r#"{"name":"Carol","age":21,"dept":"CS"}"#;
    let create = format!(
        "POST /students HTTP/1.1\r\nHost: {addr}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let response = raw_request(addr, &create).await;
    assert!(response.starts_with("HTTP/1.1 201"), "unexpected response: {response}");
    assert!(response.contains(r#""id":3"#));

    let list = format!("GET /students HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n");
    let response = raw_request(addr, &list).await;
    assert!(response.starts_with("HTTP/1.1 200"));
    assert!(response.contains("Alice"));
    assert!(response.contains("Carol"));

    assert_eq!(registry.read().await.len(), 3);

    shutdown.cancel();
    let result = timeout(Duration::from_secs(5), server)
        .await
        .expect("Server did not shut down")
        .expect("Server task panicked");
    assert!(result.is_ok());
}
