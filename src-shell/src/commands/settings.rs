//! Settings commands

use mirage_core::{Config, InterfaceConfig, SearchEngine, Shortcut};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::parse_params;
use super::tabs::CommandResult;
use crate::state::AppState;

/// UI-facing view of the loaded configuration.
#[derive(Debug, Serialize)]
pub struct ConfigInfo {
    pub search_engine: SearchEngine,
    pub interface: InterfaceConfig,
    pub shortcuts: Vec<Shortcut>,
}

impl From<&Config> for ConfigInfo {
    fn from(config: &Config) -> Self {
        Self {
            search_engine: config.search_engine,
            interface: config.interface.clone(),
            shortcuts: config.shortcuts.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchEngineParams {
    engine: SearchEngine,
}

pub fn get_config(state: &AppState) -> CommandResult<ConfigInfo> {
    CommandResult::ok(state.with_browser(|browser| ConfigInfo::from(browser.config())))
}

pub fn set_search_engine(state: &AppState, params: &Value) -> CommandResult<ConfigInfo> {
    let SearchEngineParams { engine } = match parse_params(params) {
        Ok(p) => p,
        Err(e) => return CommandResult::err(e),
    };

    CommandResult::ok(state.with_browser_mut(|browser| {
        browser.set_search_engine(engine);
        ConfigInfo::from(browser.config())
    }))
}
