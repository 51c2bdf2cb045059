pub mod config;
pub mod site;

pub use config::Config;

use axum::{
    Json, Router,
    extract::State,
    http::{Method, header},
    response::{Html, IntoResponse},
    routing::get,
};
use chrono::Datelike;
use serde::Serialize;
use site::gallery::resolve_gallery;
use site::stats::enrich_games;
use site::{GameRecord, Page, StatsClient, Totals, base_games};
use std::path::PathBuf;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

async fn health() -> &'static str {
    "ok"
}

#[derive(Clone)]
pub struct AppState {
    pub stats: StatsClient,
    pub public_dir: PathBuf,
    pub gallery_dir: PathBuf,
    pub header_height: f64,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            stats: StatsClient::new(config.universe_api.clone(), config.games_api.clone()),
            public_dir: config.public_dir.clone(),
            gallery_dir: config.gallery_dir(),
            header_height: config.header_height,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GamesResponse {
    pub games: Vec<GameRecord>,
    pub totals: Totals,
}

async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let (gallery, games) = tokio::join!(
        resolve_gallery(&state.gallery_dir),
        enrich_games(&state.stats, base_games()),
    );
    let page = Page::new(gallery, games, state.header_height, chrono::Utc::now().year());

    ([(header::CACHE_CONTROL, "no-store")], Html(page.render()))
}

async fn games(State(state): State<AppState>) -> impl IntoResponse {
    let games = enrich_games(&state.stats, base_games()).await;
    let totals = Totals::from_games(&games);

    (
        [(header::CACHE_CONTROL, "no-store")],
        Json(GamesResponse { games, totals }),
    )
}

pub fn app(config: &Config) -> Router {
    app_with_state(AppState::from_config(config))
}

pub fn app_with_state(state: AppState) -> Router {
    let api = Router::new().route("/api/games", get(games)).layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET]),
    );

    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .merge(api)
        .fallback_service(ServeDir::new(&state.public_dir))
        .with_state(state)
}
