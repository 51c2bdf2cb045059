mod client;
mod enrich;
mod error;

pub use client::{GameDetails, LiveStats, StatsClient};
pub use enrich::{enrich_game, enrich_games, merge_stats};
pub use error::{Lookup, StatsError};
