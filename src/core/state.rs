pub mod ballot;
pub mod system;

use crate::infrastructure::config::Config;

use ballot::BallotState;
use system::SystemState;

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub ballot: BallotState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    pub fn new_with_config(config: Config) -> Self {
        Self {
            config: ConfigState { config },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = AppState::default();

        assert!(state.ballot.candidates.is_empty());
        assert!(state.ballot.account.is_none());
        assert!(state.system.is_loading);
        assert!(!state.system.has_notice());
    }

    #[test]
    fn test_new_with_config_keeps_contract_address() {
        let config = Config {
            contract_address: "0x5FbDB2315678afecb367f032d93F642f64180aa3".to_string(),
            ..Default::default()
        };
        let state = AppState::new_with_config(config);

        assert_eq!(
            state.config.config.contract_address,
            "0x5FbDB2315678afecb367f032d93F642f64180aa3"
        );
    }
}
