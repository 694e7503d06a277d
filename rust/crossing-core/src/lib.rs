pub mod astar;
pub mod models;
pub mod options;
pub mod state;

pub use astar::Searcher;
pub use models::{Move, SearchResult, Step, MOVES};
pub use options::{validate_totals, ConfigError, SearchOptions};
pub use state::{BoatSide, PuzzleState};

/// Crate version string, for CLI banners and logs.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
