use serde::{Deserialize, Serialize};

/// A game shown on the site. Built from static literals per request and
/// optionally decorated with live platform stats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub place_id: u64,
    pub title: String,
    pub cover: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub universe_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playing: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visits: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl GameRecord {
    pub fn new(
        place_id: u64,
        title: impl Into<String>,
        cover: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            place_id,
            title: title.into(),
            cover: cover.into(),
            url: url.into(),
            universe_id: None,
            playing: None,
            visits: None,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// The studio's published games, in display order
pub fn base_games() -> Vec<GameRecord> {
    vec![
        GameRecord::new(
            131452190170307,
            "BRAINROT TAG",
            "/gallery/regular2.png",
            "https://www.roblox.com/games/131452190170307/BRAINROT-TAG",
        )
        .with_description("Dodge the brainrot and stay alive in the arena."),
        GameRecord::new(
            101928524081695,
            "Paint or Die",
            "/gallery/paint.png",
            "https://www.roblox.com/games/101928524081695/Paint-or-Die",
        )
        .with_description("Race for the right color or get caught—pick fast and survive."),
    ]
}

/// Aggregate counters across all games. Missing counts contribute zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub visits: u64,
    pub playing: u64,
}

impl Totals {
    pub fn from_games(games: &[GameRecord]) -> Self {
        games.iter().fold(Self::default(), |acc, game| Self {
            visits: acc.visits.saturating_add(game.visits.unwrap_or(0)),
            playing: acc.playing.saturating_add(game.playing.unwrap_or(0)),
        })
    }
}
