mod common;

use common::{BRAINROT_TAG, MockRoblox, PAINT_OR_DIE, spawn_mock_roblox};
use serde_json::json;
use studio_site::site::stats::{StatsError, enrich_game, enrich_games};
use studio_site::site::{GameRecord, StatsClient, base_games};

fn client_for(base_url: &str) -> StatsClient {
    StatsClient::new(base_url, base_url)
}

fn paint_or_die() -> GameRecord {
    base_games()
        .into_iter()
        .find(|g| g.place_id == PAINT_OR_DIE)
        .unwrap()
}

// ============ Fallback ============

#[tokio::test]
async fn failed_universe_lookup_returns_input_unchanged() {
    let url = spawn_mock_roblox(MockRoblox::new()).await;
    let client = client_for(&url);

    let game = paint_or_die();
    let result = enrich_game(&client, game.clone()).await;

    assert_eq!(result, game);
}

#[tokio::test]
async fn failed_stats_lookup_returns_input_unchanged() {
    let url = spawn_mock_roblox(MockRoblox::new().universe(PAINT_OR_DIE, 555)).await;
    let client = client_for(&url);

    let game = paint_or_die();
    let result = enrich_game(&client, game.clone()).await;

    assert_eq!(result, game);
    assert_eq!(result.universe_id, None);
}

#[tokio::test]
async fn malformed_universe_body_returns_input_unchanged() {
    let url = spawn_mock_roblox(MockRoblox::new().garbled(PAINT_OR_DIE)).await;
    let client = client_for(&url);

    let game = paint_or_die();
    let result = enrich_game(&client, game.clone()).await;

    assert_eq!(result, game);
}

// ============ Success ============

#[tokio::test]
async fn successful_lookup_uses_payload_counts() {
    let mock = MockRoblox::new().universe(PAINT_OR_DIE, 555).stats(
        555,
        json!({
            "id": 555,
            "name": "Paint or Die!",
            "description": "Live copy",
            "playing": 321,
            "visits": 4_567_890
        }),
    );
    let url = spawn_mock_roblox(mock).await;
    let client = client_for(&url);

    let result = enrich_game(&client, paint_or_die()).await;

    assert_eq!(result.universe_id, Some(555));
    assert_eq!(result.playing, Some(321));
    assert_eq!(result.visits, Some(4_567_890));
    assert_eq!(result.title, "Paint or Die!");
    assert_eq!(result.description.as_deref(), Some("Live copy"));
    assert_eq!(result.cover, "/gallery/paint.png");
}

#[tokio::test]
async fn null_fields_keep_static_values() {
    let mock = MockRoblox::new().universe(PAINT_OR_DIE, 555).stats(
        555,
        json!({ "name": null, "description": null, "playing": 8, "visits": null }),
    );
    let url = spawn_mock_roblox(mock).await;
    let client = client_for(&url);

    let game = paint_or_die();
    let result = enrich_game(&client, game.clone()).await;

    assert_eq!(result.playing, Some(8));
    assert_eq!(result.visits, None);
    assert_eq!(result.title, game.title);
    assert_eq!(result.description, game.description);
}

#[tokio::test]
async fn empty_stats_payload_records_only_universe() {
    let mock = MockRoblox::new()
        .universe(PAINT_OR_DIE, 555)
        .stats(555, serde_json::Value::Null);
    let url = spawn_mock_roblox(mock).await;
    let client = client_for(&url);

    let game = paint_or_die();
    let result = enrich_game(&client, game.clone()).await;

    assert_eq!(result.universe_id, Some(555));
    assert_eq!(GameRecord { universe_id: None, ..result }, game);
}

#[tokio::test]
async fn null_stats_payload_records_only_universe() {
    let mock = MockRoblox::new().universe(PAINT_OR_DIE, 555).null_data(555);
    let url = spawn_mock_roblox(mock).await;
    let client = client_for(&url);

    let game = paint_or_die();
    let result = enrich_game(&client, game.clone()).await;

    assert_eq!(result.universe_id, Some(555));
    assert_eq!(GameRecord { universe_id: None, ..result }, game);
}

#[tokio::test]
async fn enriches_each_game_independently_in_order() {
    // Only Brainrot Tag resolves; Paint or Die must fall back on its own
    let mock = MockRoblox::new()
        .universe(BRAINROT_TAG, 111)
        .stats(111, json!({ "playing": 10, "visits": 2_000 }));
    let url = spawn_mock_roblox(mock).await;
    let client = client_for(&url);

    let games = enrich_games(&client, base_games()).await;

    assert_eq!(games.len(), 2);
    assert_eq!(games[0].place_id, BRAINROT_TAG);
    assert_eq!(games[0].visits, Some(2_000));
    assert_eq!(games[1], paint_or_die());
}

// ============ Client errors ============

#[tokio::test]
async fn client_reports_which_lookup_failed() {
    let url = spawn_mock_roblox(MockRoblox::new().universe(PAINT_OR_DIE, 555)).await;
    let client = client_for(&url);

    let err = client.live_stats(BRAINROT_TAG).await.unwrap_err();
    assert!(matches!(
        err,
        StatsError::Status { status, .. } if status == reqwest::StatusCode::NOT_FOUND
    ));
    assert!(err.to_string().starts_with("universe lookup"));

    let err = client.live_stats(PAINT_OR_DIE).await.unwrap_err();
    assert!(err.to_string().starts_with("game stats lookup"));
}
