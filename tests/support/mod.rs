use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::time::Duration;

use webbot_smoke::RunConfig;

pub const TOKEN: &str = "eyJhbGciOiJIUzI1NiJ9.test-session-token";

/// Behaviour knobs for the mock backend
#[derive(Clone)]
pub struct Backend {
    pub health_status: StatusCode,
    pub gateways_delay: Option<Duration>,
    /// Body returned by a successful login
    pub login_body: Value,
}

impl Default for Backend {
    fn default() -> Self {
        Self {
            health_status: StatusCode::OK,
            gateways_delay: None,
            login_body: json!({ "token": TOKEN, "user": { "username": "admin" } }),
        }
    }
}

impl Backend {
    pub fn router(self) -> Router {
        let health_status = self.health_status;
        let delay = self.gateways_delay;
        let login_body = self.login_body;
        let expected_bearer = match login_body.get("token") {
            Some(Value::String(token)) => format!("Bearer {}", token),
            Some(Value::Number(token)) => format!("Bearer {}", token),
            _ => String::new(),
        };

        Router::new()
            .route(
                "/health",
                get(move || async move { (health_status, Json(json!({ "status": "ok" }))) }),
            )
            .route("/api/test", get(|| async { "API is working" }))
            .route(
                "/api/gateways",
                get(move || async move {
                    if let Some(delay) = delay {
                        tokio::time::sleep(delay).await;
                    }
                    Json(json!([{ "id": 1, "name": "stripe" }]))
                }),
            )
            .route(
                "/api/auth/login",
                post(move |Json(body): Json<Value>| async move {
                    if body["username"] == "admin" && body["password"] == "admin123" {
                        (StatusCode::OK, Json(login_body))
                    } else {
                        (
                            StatusCode::UNAUTHORIZED,
                            Json(json!({ "error": "invalid credentials" })),
                        )
                    }
                }),
            )
            .route(
                "/api/auth/verify",
                get(move |headers: HeaderMap| async move {
                    let authorized = headers
                        .get(AUTHORIZATION)
                        .and_then(|v| v.to_str().ok())
                        .map_or(false, |v| !expected_bearer.is_empty() && v == expected_bearer);
                    if authorized {
                        StatusCode::OK
                    } else {
                        StatusCode::UNAUTHORIZED
                    }
                }),
            )
    }

    /// Serve on an ephemeral loopback port and return the base URL
    pub async fn spawn(self) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock backend");
        let addr = listener.local_addr().expect("local addr");
        let app = self.router();
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve mock backend");
        });
        format!("http://{}", addr)
    }
}

/// Base URL of a port that nothing listens on
pub async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{}", addr)
}

pub fn config_for(base_url: &str) -> RunConfig {
    RunConfig::with_base_url(base_url)
}
