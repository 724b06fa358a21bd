//! Shared utilities for integration testing.

use std::net::SocketAddr;
use tokio::net::TcpListener;

use fixture_server::{FixtureServer, ServerConfig};

/// Start the fixture server on an ephemeral loopback port and return
/// the address it actually bound.
pub async fn spawn_server() -> SocketAddr {
    let config = ServerConfig {
        bind_address: "127.0.0.1:0".to_string(),
    };

    let listener = TcpListener::bind(&config.bind_address).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = FixtureServer::new(config);
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    addr
}

/// Client that does not follow redirects, for asserting on raw 302s.
#[allow(dead_code)]
pub fn manual_redirect_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .build()
        .unwrap()
}

/// Plain client with reqwest's default redirect-following behavior.
#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
