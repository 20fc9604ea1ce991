//! # Wordgrid
//!
//! A fast word-search grid engine for Rust.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Validated, immutable character grids up to 64x64
//! - Character position index for candidate lookup
//! - Left-to-right and top-to-bottom matching
//! - Parallel word stream search
//! - Ranked results (top words by match count)
//!
//! ## Example
//!
//! ```
//! use wordgrid::prelude::*;
//!
//! let index = GridIndex::new(&["abcd", "efgh", "ijkl", "mnop"])?;
//! let engine = SearchEngine::new(index)?;
//! let results = engine.find(["abcd", "xx"]);
//!
//! assert_eq!(results.words.len(), 1);
//! assert_eq!(results.words[0].word, "abcd");
//! # Ok::<(), wordgrid::error::WordGridError>(())
//! ```

pub mod cli;
pub mod error;
pub mod grid;
pub mod search;

pub mod prelude {
    pub use crate::error::{Result, WordGridError};
    pub use crate::grid::{Grid, GridIndex, Position};
    pub use crate::search::{
        Direction, DirectionalMatcher, MatchDetail, SearchConfig, SearchEngine, SearchResults,
        WordMatch,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
