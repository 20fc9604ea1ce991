//! Configuration for search execution.

use serde::{Deserialize, Serialize};

/// Default maximum number of ranked words a search returns.
pub const DEFAULT_RESULT_LIMIT: usize = 10;

/// Configuration for a [`SearchEngine`](crate::search::SearchEngine).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum number of ranked words to return.
    pub limit: usize,

    /// Whether to search the word stream on a thread pool.
    pub parallel: bool,

    /// Thread pool size for parallel execution.
    /// If None, uses the number of CPU cores.
    pub thread_pool_size: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_RESULT_LIMIT,
            parallel: true,
            thread_pool_size: None,
        }
    }
}

impl SearchConfig {
    /// Set the result limit.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Enable or disable parallel execution.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the thread pool size.
    pub fn with_thread_pool_size(mut self, size: usize) -> Self {
        self.thread_pool_size = Some(size);
        self
    }
}
