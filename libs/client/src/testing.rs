use axum::Router;
use tokio::net::TcpListener;

use crate::{Client, ClientConfig};

/// Serves `router` on an ephemeral local port and returns a client for it.
pub(crate) async fn serve(router: Router) -> Client {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });

    Client::new(ClientConfig {
        base_url: format!("http://{}/", addr),
        csrf_cookie: "csrftoken".to_string(),
        basic_auth: None,
    })
    .unwrap()
}
