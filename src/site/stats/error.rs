use reqwest::StatusCode;
use std::fmt;
use thiserror::Error;

/// Which outbound lookup a failure came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    Universe,
    Games,
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Universe => f.write_str("universe lookup"),
            Self::Games => f.write_str("game stats lookup"),
        }
    }
}

#[derive(Debug, Error)]
pub enum StatsError {
    /// Transport failure or an undecodable body
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{lookup} failed with status {status}")]
    Status { lookup: Lookup, status: StatusCode },
}
