use super::error::{Lookup, StatsError};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UniverseResponse {
    universe_id: u64,
}

#[derive(Debug, Deserialize)]
struct GamesResponse {
    /// Absent and `null` both mean no stats
    #[serde(default)]
    data: Option<Vec<GameDetails>>,
}

/// Aggregate stats for one universe. Every field may be absent or null.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GameDetails {
    pub playing: Option<u64>,
    pub visits: Option<u64>,
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Result of both lookups for a single place
#[derive(Debug, Clone, PartialEq)]
pub struct LiveStats {
    pub universe_id: u64,
    /// First entry of the stats payload, if the payload had any
    pub details: Option<GameDetails>,
}

/// Client for the two public Roblox endpoints. Responses are never cached.
#[derive(Clone)]
pub struct StatsClient {
    http: reqwest::Client,
    universe_api: String,
    games_api: String,
}

impl StatsClient {
    pub fn new(universe_api: impl Into<String>, games_api: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), universe_api, games_api)
    }

    pub fn with_client(
        http: reqwest::Client,
        universe_api: impl Into<String>,
        games_api: impl Into<String>,
    ) -> Self {
        Self {
            http,
            universe_api: universe_api.into(),
            games_api: games_api.into(),
        }
    }

    pub async fn universe_id(&self, place_id: u64) -> Result<u64, StatsError> {
        let url = format!("{}/universes/v1/places/{}/universe", self.universe_api, place_id);
        debug!(place_id, %url, "Resolving universe");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(StatsError::Status {
                lookup: Lookup::Universe,
                status,
            });
        }

        let body: UniverseResponse = response.json().await?;
        Ok(body.universe_id)
    }

    pub async fn game_details(&self, universe_id: u64) -> Result<Option<GameDetails>, StatsError> {
        let url = format!("{}/v1/games", self.games_api);
        debug!(universe_id, %url, "Fetching game stats");

        let response = self
            .http
            .get(&url)
            .query(&[("universeIds", universe_id)])
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(StatsError::Status {
                lookup: Lookup::Games,
                status,
            });
        }

        let body: GamesResponse = response.json().await?;
        Ok(body.data.into_iter().flatten().next())
    }

    /// Run both lookups in order; the second needs the first's universe id.
    pub async fn live_stats(&self, place_id: u64) -> Result<LiveStats, StatsError> {
        let universe_id = self.universe_id(place_id).await?;
        let details = self.game_details(universe_id).await?;
        Ok(LiveStats {
            universe_id,
            details,
        })
    }
}
