//! Application state for the Payroll Engine API.

use std::sync::Arc;

use crate::config::{ConfigLoader, RateTable};

/// Shared application state.
///
/// Holds the rate table, loaded once at startup and read by every handler.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the loaded rate table.
    pub fn rates(&self) -> &RateTable {
        self.config.rates()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone_send_sync() {
        fn assert_traits<T: Clone + Send + Sync + 'static>() {}
        assert_traits::<AppState>();
    }

    #[test]
    fn test_clones_share_one_rate_table() {
        let state = AppState::new(ConfigLoader::load("./config/vn2024").unwrap());
        let clone = state.clone();
        assert!(std::ptr::eq(state.rates(), clone.rates()));
    }
}
