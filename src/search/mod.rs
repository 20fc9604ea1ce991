//! Word stream search over a grid: matching, ranking, and configuration.

pub mod collector;
pub mod config;
pub mod engine;
pub mod matcher;
pub mod results;

pub use collector::TopWordsCollector;
pub use config::{DEFAULT_RESULT_LIMIT, SearchConfig};
pub use engine::SearchEngine;
pub use matcher::{Direction, DirectionalMatcher};
pub use results::{MatchDetail, SearchResults, WordMatch};
