//! Client configuration.

use std::time::Duration;

/// Tunables shared read-only by every handle cloned from one root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Pause between consecutive pages of a paginated read.
    ///
    /// Applied before every page after the first; a zero interval disables
    /// the pause.
    pub request_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            request_interval: Duration::from_secs(1),
        }
    }
}

impl Config {
    /// The default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the inter-page pause.
    pub fn request_interval(mut self, interval: Duration) -> Self {
        self.request_interval = interval;
        self
    }
}
