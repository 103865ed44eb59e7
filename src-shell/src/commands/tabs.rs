//! Tab management commands
use mirage_core::BrowserSnapshot;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::parse_params;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CommandResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

impl<T: Serialize> CommandResult<T> {
    /// Erase the payload type for the wire.
    pub fn into_json(self) -> CommandResult<Value> {
        match self.data.map(serde_json::to_value).transpose() {
            Ok(data) => CommandResult {
                success: self.success,
                data,
                error: self.error,
            },
            Err(e) => CommandResult::err(format!("Serialization error: {e}")),
        }
    }
}

#[derive(Debug, Deserialize)]
struct IndexParams {
    index: usize,
}

pub fn start_browser(state: &AppState) -> CommandResult<BrowserSnapshot> {
    CommandResult::ok(state.with_browser_mut(|browser| {
        browser.start();
        browser.snapshot()
    }))
}

pub fn snapshot(state: &AppState) -> CommandResult<BrowserSnapshot> {
    CommandResult::ok(state.with_browser(|browser| browser.snapshot()))
}

pub fn open_tab(state: &AppState) -> CommandResult<BrowserSnapshot> {
    CommandResult::ok(state.with_browser_mut(|browser| {
        browser.open_tab();
        browser.snapshot()
    }))
}

pub fn close_tab(state: &AppState, params: &Value) -> CommandResult<BrowserSnapshot> {
    let IndexParams { index } = match parse_params(params) {
        Ok(p) => p,
        Err(e) => return CommandResult::err(e),
    };

    state.with_browser_mut(|browser| {
        if browser.close_tab(index) {
            CommandResult::ok(browser.snapshot())
        } else {
            CommandResult::err(format!("Invalid tab index: {index}"))
        }
    })
}

pub fn switch_tab(state: &AppState, params: &Value) -> CommandResult<BrowserSnapshot> {
    let IndexParams { index } = match parse_params(params) {
        Ok(p) => p,
        Err(e) => return CommandResult::err(e),
    };

    state.with_browser_mut(|browser| {
        if browser.switch_tab(index) {
            CommandResult::ok(browser.snapshot())
        } else {
            CommandResult::err(format!("Invalid tab index: {index}"))
        }
    })
}
