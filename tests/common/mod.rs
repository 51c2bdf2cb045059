#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use serde_json::{Value, json};
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::Arc;
use studio_site::{AppState, Config};
use tokio::net::TcpListener;

pub const BRAINROT_TAG: u64 = 131452190170307;
pub const PAINT_OR_DIE: u64 = 101928524081695;

/// Canned responses for the two Roblox endpoints.
/// Places without a universe get a 404; universes without stats get a 500.
#[derive(Default)]
pub struct MockRoblox {
    universes: HashMap<u64, u64>,
    stats: HashMap<u64, Value>,
    garbled: HashSet<u64>,
    null_data: HashSet<u64>,
}

impl MockRoblox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn universe(mut self, place_id: u64, universe_id: u64) -> Self {
        self.universes.insert(place_id, universe_id);
        self
    }

    pub fn stats(mut self, universe_id: u64, details: Value) -> Self {
        self.stats.insert(universe_id, details);
        self
    }

    /// Stats lookup for this universe answers 200 with `"data": null`
    pub fn null_data(mut self, universe_id: u64) -> Self {
        self.null_data.insert(universe_id);
        self
    }

    /// Universe lookup for this place answers 200 with a non-JSON body
    pub fn garbled(mut self, place_id: u64) -> Self {
        self.garbled.insert(place_id);
        self
    }
}

#[derive(Deserialize)]
struct GamesQuery {
    #[serde(rename = "universeIds")]
    universe_ids: u64,
}

async fn universe(State(mock): State<Arc<MockRoblox>>, Path(place_id): Path<u64>) -> Response {
    if mock.garbled.contains(&place_id) {
        return (StatusCode::OK, "<html>maintenance</html>").into_response();
    }
    match mock.universes.get(&place_id) {
        Some(universe_id) => Json(json!({ "universeId": universe_id })).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn games(State(mock): State<Arc<MockRoblox>>, Query(query): Query<GamesQuery>) -> Response {
    if mock.null_data.contains(&query.universe_ids) {
        return Json(json!({ "data": null })).into_response();
    }
    match mock.stats.get(&query.universe_ids) {
        Some(details) if details.is_null() => Json(json!({ "data": [] })).into_response(),
        Some(details) => Json(json!({ "data": [details] })).into_response(),
        None => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

/// Serve the mock on an ephemeral port, returning its base URL
pub async fn spawn_mock_roblox(mock: MockRoblox) -> String {
    let app = Router::new()
        .route("/universes/v1/places/:place_id/universe", get(universe))
        .route("/v1/games", get(games))
        .with_state(Arc::new(mock));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

pub struct TestServer {
    base_url: String,
}

impl TestServer {
    pub fn http_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

pub async fn spawn_test_server(roblox_url: &str, public_dir: PathBuf) -> TestServer {
    let config = Config {
        public_dir,
        universe_api: roblox_url.to_string(),
        games_api: roblox_url.to_string(),
        ..Config::default()
    };

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let app = studio_site::app_with_state(AppState::from_config(&config));
        axum::serve(listener, app).await.unwrap();
    });

    TestServer {
        base_url: format!("http://{}", addr),
    }
}

/// Uniquely named directory under the OS temp dir, removed on drop
pub struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    pub fn new() -> Self {
        let path = std::env::temp_dir().join(format!("studio-site-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&path).unwrap();
        Self { path }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    pub fn touch(&self, relative: &str) -> &Self {
        let file = self.path.join(relative);
        if let Some(parent) = file.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(file, b"fake image bytes").unwrap();
        self
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}
