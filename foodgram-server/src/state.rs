use std::time::Instant;
use tokio::sync::RwLock;

pub struct AppState {
    pub http: reqwest::Client,
    pub stars: RwLock<StarsCache>,
}

/// Last known GitHub star count and when it was fetched.
#[derive(Debug, Clone, Copy, Default)]
pub struct StarsCache {
    pub value: Option<u64>,
    pub fetched_at: Option<Instant>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            stars: RwLock::new(StarsCache::default()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
