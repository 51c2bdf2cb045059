use super::client::{LiveStats, StatsClient};
use crate::site::game::GameRecord;
use futures_util::future::join_all;
use tracing::warn;

/// Overlay live stats onto a record. Fields the payload leaves out keep
/// their static values.
pub fn merge_stats(game: GameRecord, stats: LiveStats) -> GameRecord {
    let details = stats.details.unwrap_or_default();

    GameRecord {
        universe_id: Some(stats.universe_id),
        playing: details.playing.or(game.playing),
        visits: details.visits.or(game.visits),
        description: details.description.or(game.description),
        title: details.name.unwrap_or(game.title),
        ..game
    }
}

/// Enrich one record. Any failure is logged and the record comes back as given.
pub async fn enrich_game(client: &StatsClient, game: GameRecord) -> GameRecord {
    match client.live_stats(game.place_id).await {
        Ok(stats) => merge_stats(game, stats),
        Err(error) => {
            warn!(title = %game.title, place_id = game.place_id, %error, "Failed to fetch Roblox data");
            game
        }
    }
}

/// Enrich every record concurrently, keeping input order.
pub async fn enrich_games(client: &StatsClient, games: Vec<GameRecord>) -> Vec<GameRecord> {
    join_all(games.into_iter().map(|game| enrich_game(client, game))).await
}
