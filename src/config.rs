use std::env;
use std::path::PathBuf;

pub const DEFAULT_UNIVERSE_API: &str = "https://apis.roblox.com";
pub const DEFAULT_GAMES_API: &str = "https://games.roblox.com";
pub const DEFAULT_HEADER_HEIGHT: f64 = 64.0;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub public_dir: PathBuf,
    pub universe_api: String,
    pub games_api: String,
    pub header_height: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            public_dir: PathBuf::from("public"),
            universe_api: DEFAULT_UNIVERSE_API.to_string(),
            games_api: DEFAULT_GAMES_API.to_string(),
            header_height: DEFAULT_HEADER_HEIGHT,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from a key lookup. Missing or unparseable values use defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            public_dir: lookup("PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.public_dir),
            universe_api: lookup("ROBLOX_UNIVERSE_API")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.universe_api),
            games_api: lookup("ROBLOX_GAMES_API")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.games_api),
            header_height: lookup("HEADER_HEIGHT")
                .and_then(|h| h.parse::<f64>().ok())
                .filter(|h| h.is_finite() && *h >= 0.0)
                .unwrap_or(defaults.header_height),
        }
    }

    pub fn addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    pub fn gallery_dir(&self) -> PathBuf {
        self.public_dir.join("gallery")
    }
}
