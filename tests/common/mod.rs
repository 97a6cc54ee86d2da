#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    extract::{Query, State},
    http::{Request, StatusCode, header::CONTENT_TYPE},
    response::IntoResponse,
    routing::get,
};
use ccl_dashboard::{DashboardState, api::ArchiveApi, dashboard_router, db::OrdersStore};
use serde_json::Value;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::{
    collections::HashMap,
    io,
    path::Path,
    sync::{Arc, Mutex},
};
use tempfile::TempDir;
use tower::ServiceExt;
use tracing_subscriber::fmt::MakeWriter;
use url::Url;

pub const SCHEMA: &[&str] = &[
    "CREATE TABLE orders (order_id INTEGER PRIMARY KEY, order_date TEXT NOT NULL)",
    "CREATE TABLE products (product_id INTEGER PRIMARY KEY, product_name TEXT)",
    "CREATE TABLE stock_level (product_id INTEGER NOT NULL REFERENCES products(product_id), quantity INTEGER NOT NULL)",
    "CREATE TABLE order_details (order_id INTEGER NOT NULL, product_id INTEGER NOT NULL, quantity_ordered INTEGER NOT NULL)",
    "CREATE TABLE payment_methods (method_id INTEGER PRIMARY KEY, method_name TEXT NOT NULL)",
    "CREATE TABLE payments (payment_id INTEGER PRIMARY KEY, method_id INTEGER NOT NULL REFERENCES payment_methods(method_id))",
];

/// Archive URL for tests that must never reach the network.
pub const UNUSED_ARCHIVE: &str = "http://127.0.0.1:9/v1/archive";

/// Create a shop database at `dir/shop.db` with the schema plus `fixtures`.
pub async fn seed_database(dir: &TempDir, fixtures: &[&str]) -> std::path::PathBuf {
    let path = dir.path().join("shop.db");
    let pool = SqlitePoolOptions::new()
        .connect_with(
            SqliteConnectOptions::new()
                .filename(&path)
                .create_if_missing(true),
        )
        .await
        .expect("failed to create fixture database");
    for stmt in SCHEMA.iter().chain(fixtures) {
        sqlx::query(stmt)
            .execute(&pool)
            .await
            .unwrap_or_else(|e| panic!("fixture statement failed: {stmt}: {e}"));
    }
    pool.close().await;
    path
}

pub fn app_for(db_path: &Path, archive_url: &str) -> Router {
    let archive = ArchiveApi::new(
        reqwest::Client::new(),
        Url::parse(archive_url).expect("invalid archive url"),
    );
    dashboard_router(DashboardState::new(OrdersStore::open(db_path), archive))
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Option<String>, Value) {
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");

    let status = resp.status();
    let content_type = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, content_type, json)
}

/// What the stand-in weather archive answers with.
#[derive(Clone)]
pub struct StubReply {
    pub status: StatusCode,
    pub body: String,
}

#[derive(Clone)]
struct StubState {
    reply: StubReply,
    calls: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

/// In-process weather archive. Records the query string of every call.
pub struct ArchiveStub {
    pub url: String,
    calls: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

impl ArchiveStub {
    pub async fn spawn(reply: StubReply) -> Self {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            reply,
            calls: calls.clone(),
        };
        let app = Router::new()
            .route("/v1/archive", get(stub_archive))
            .with_state(state);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind stub archive");
        let addr = listener.local_addr().expect("stub archive has no address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });
        Self {
            url: format!("http://{addr}/v1/archive"),
            calls,
        }
    }

    pub fn calls(&self) -> Vec<HashMap<String, String>> {
        self.calls.lock().expect("stub mutex poisoned").clone()
    }
}

async fn stub_archive(
    State(state): State<StubState>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    state
        .calls
        .lock()
        .expect("stub mutex poisoned")
        .push(params);
    (
        state.reply.status,
        [(CONTENT_TYPE, "application/json")],
        state.reply.body,
    )
}

/// Collects formatted log output for assertions.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().expect("log mutex poisoned")).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .expect("log mutex poisoned")
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
