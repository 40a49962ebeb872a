//! Shared helpers for platform-server integration tests

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode};
use platform_server::db::DbService;
use platform_server::{Config, PresetFailurePolicy, ServerState, build_app};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub state: ServerState,
    /// Keeps the work directory alive for the test
    pub work_dir: TempDir,
}

pub async fn test_app(policy: PresetFailurePolicy) -> TestApp {
    let work_dir = tempfile::tempdir().unwrap();
    let config = Config::with_overrides(work_dir.path().to_string_lossy(), 0)
        .with_preset_failure_policy(policy);
    let db = DbService::in_memory().await.unwrap();
    let state = ServerState::new(config, db.pool);
    TestApp {
        router: build_app(&state),
        state,
        work_dir,
    }
}

impl TestApp {
    pub async fn request(&self, method: Method, path: &str, body: Option<Value>) -> (StatusCode, Value) {
        let body = match body {
            Some(v) => Body::from(serde_json::to_vec(&v).unwrap()),
            None => Body::empty(),
        };
        let request = Request::builder()
            .method(method)
            .uri(path)
            .header("content-type", "application/json")
            .body(body)
            .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into()))
        };
        (status, json)
    }

    /// Install a trigger that aborts every `event` on `table`
    pub async fn fail_on(&self, table: &str, event: &str) {
        let sql = format!(
            "CREATE TRIGGER fail_{table}_{event} BEFORE {event} ON {table} \
             BEGIN SELECT RAISE(ABORT, '{table} locked'); END"
        );
        sqlx::query(&sql).execute(&self.state.pool).await.unwrap();
    }
}
