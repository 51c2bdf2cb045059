pub mod gallery;
pub mod game;
pub mod nav;
pub mod page;
pub mod stats;

pub use game::{GameRecord, Totals, base_games};
pub use nav::{NavState, Section, ViewLine};
pub use page::Page;
pub use stats::StatsClient;
