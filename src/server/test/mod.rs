//! End-to-end tests driving the full router with in-memory SQLite.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext};
use tower::ServiceExt;

use crate::server::{router::router, service::auth::token::TokenService, state::AppState};

mod auth;
mod dashboard;

const TEST_SECRET: &[u8] = b"test-secret-that-is-at-least-32-bytes-long";

struct TestApp {
    router: Router,
    _test: TestContext,
}

impl TestApp {
    async fn new() -> Self {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.clone().unwrap();
        let state = AppState::new(db, TokenService::new(TEST_SECRET), false);

        Self {
            router: router(state),
            _test: test,
        }
    }

    async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    async fn request(
        &self,
        method: Method,
        uri: &str,
        cookie: Option<&str>,
        body: Option<Value>,
    ) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.send(request).await
    }

    /// Registers an account and returns its session cookie (`name=value`).
    async fn sign_up(&self, email: &str) -> String {
        let response = self
            .request(
                Method::POST,
                "/api/auth/register",
                None,
                Some(json!({ "email": email, "password": "correct horse" })),
            )
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        session_cookie(&response)
    }

    /// Registers a server owned by the holder of `cookie`.
    async fn add_server(&self, cookie: &str, id: &str, member_count: i32) {
        let response = self
            .request(
                Method::POST,
                "/api/servers",
                Some(cookie),
                Some(json!({ "id": id, "name": format!("Server {}", id), "memberCount": member_count })),
            )
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }
}

/// Extracts `zyx_auth_token=<value>` from the response's Set-Cookie header.
fn session_cookie(response: &Response) -> String {
    set_cookie(response)
        .split(';')
        .next()
        .unwrap()
        .trim()
        .to_string()
}

fn set_cookie(response: &Response) -> String {
    response
        .headers()
        .get(header::SET_COOKIE)
        .expect("response should set a cookie")
        .to_str()
        .unwrap()
        .to_string()
}

async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
