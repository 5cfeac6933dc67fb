//! Mock game backend served by wiremock

use std::sync::atomic::{AtomicUsize, Ordering};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// In-process stand-in for the game API
pub struct MockGameBackend {
    pub server: MockServer,
}

impl MockGameBackend {
    /// Start a backend with no routes mounted
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn base_url(&self) -> String {
        self.server.uri()
    }

    /// `GET /` answers 200 with `{}`
    pub async fn healthy(&self) {
        self.health_responds(ResponseTemplate::new(200).set_body_json(json!({}))).await;
    }

    pub async fn health_responds(&self, template: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(template)
            .mount(&self.server)
            .await;
    }

    pub async fn create_game_responds(&self, template: ResponseTemplate) {
        Mock::given(method("POST"))
            .and(path("/api/games"))
            .respond_with(template)
            .mount(&self.server)
            .await;
    }

    /// Fail the test if game creation is ever requested
    pub async fn create_game_never_called(&self) {
        Mock::given(method("POST"))
            .and(path("/api/games"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&self.server)
            .await;
    }

    /// Every `POST /api/games` mints a new session id
    pub async fn minting_sessions(&self) {
        Mock::given(method("POST"))
            .and(path("/api/games"))
            .respond_with(SessionMinter::default())
            .mount(&self.server)
            .await;
    }

    pub async fn game_responds(&self, session_id: &str, template: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path(format!("/api/games/{}", session_id)))
            .respond_with(template)
            .mount(&self.server)
            .await;
    }

    pub async fn delete_responds(&self, session_id: &str, template: ResponseTemplate) {
        Mock::given(method("DELETE"))
            .and(path(format!("/api/games/{}", session_id)))
            .respond_with(template)
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Requests received so far, in arrival order
    pub async fn received(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap_or_default()
    }
}

/// Successful creation body carrying `session_id`
pub fn created_body(session_id: &str) -> serde_json::Value {
    json!({
        "success": true,
        "message": "ok",
        "game_data": {"session_id": session_id}
    })
}

/// Responder handing out `session-0`, `session-1`, ...
#[derive(Default)]
pub struct SessionMinter {
    next: AtomicUsize,
}

impl Respond for SessionMinter {
    fn respond(&self, _request: &Request) -> ResponseTemplate {
        let n = self.next.fetch_add(1, Ordering::SeqCst);
        ResponseTemplate::new(200).set_body_json(created_body(&format!("session-{}", n)))
    }
}

/// Base URL of a port nothing listens on
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}
