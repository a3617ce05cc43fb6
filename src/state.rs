use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;

/// Shared application state. The analysis engine itself is stateless, so
/// this only carries configuration and the startup instant for uptime
/// reporting.
#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
    started_at: Instant,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            config: Arc::new(config.clone()),
            started_at: Instant::now(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
