//! Navigation and address bar commands

use mirage_core::BrowserSnapshot;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::parse_params;
use super::tabs::CommandResult;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct NavigationResult {
    /// Whether a load was started
    pub started: bool,
    pub snapshot: BrowserSnapshot,
}

#[derive(Debug, Deserialize)]
struct InputParams {
    input: String,
}

#[derive(Debug, Deserialize)]
struct QueryParams {
    query: String,
}

#[derive(Debug, Deserialize)]
struct UrlParams {
    url: String,
}

#[derive(Debug, Deserialize)]
struct MessageParams {
    message: Value,
}

fn navigation_with<P, F>(state: &AppState, params: &Value, f: F) -> CommandResult<NavigationResult>
where
    P: serde::de::DeserializeOwned,
    F: FnOnce(&mut mirage_core::Browser, P) -> bool,
{
    let params: P = match parse_params(params) {
        Ok(p) => p,
        Err(e) => return CommandResult::err(e),
    };

    CommandResult::ok(state.with_browser_mut(|browser| {
        let started = f(browser, params);
        NavigationResult {
            started,
            snapshot: browser.snapshot(),
        }
    }))
}

fn navigation_without(
    state: &AppState,
    f: impl FnOnce(&mut mirage_core::Browser) -> bool,
) -> CommandResult<NavigationResult> {
    CommandResult::ok(state.with_browser_mut(|browser| {
        let started = f(browser);
        NavigationResult {
            started,
            snapshot: browser.snapshot(),
        }
    }))
}

pub fn navigate(state: &AppState, params: &Value) -> CommandResult<NavigationResult> {
    navigation_with(state, params, |browser, p: InputParams| browser.navigate(&p.input))
}

pub fn search(state: &AppState, params: &Value) -> CommandResult<NavigationResult> {
    navigation_with(state, params, |browser, p: QueryParams| browser.search(&p.query))
}

pub fn navigate_to_shortcut(state: &AppState, params: &Value) -> CommandResult<NavigationResult> {
    navigation_with(state, params, |browser, p: UrlParams| {
        browser.navigate_to_shortcut(&p.url)
    })
}

pub fn go_back(state: &AppState) -> CommandResult<NavigationResult> {
    navigation_without(state, |browser| browser.go_back())
}

pub fn go_forward(state: &AppState) -> CommandResult<NavigationResult> {
    navigation_without(state, |browser| browser.go_forward())
}

pub fn reload(state: &AppState) -> CommandResult<NavigationResult> {
    navigation_without(state, |browser| browser.reload())
}

/// Forward a message from embedded content. Accepts the message either as
/// a JSON object or as its serialized string form.
pub fn post_message(state: &AppState, params: &Value) -> CommandResult<NavigationResult> {
    navigation_with(state, params, |browser, p: MessageParams| {
        let raw = match p.message {
            Value::String(raw) => raw,
            other => other.to_string(),
        };
        browser.handle_message_json(&raw)
    })
}

pub fn normalize(state: &AppState, params: &Value) -> CommandResult<String> {
    match parse_params::<InputParams>(params) {
        Ok(p) => CommandResult::ok(
            state.with_browser(|browser| browser.resolver().normalize(&p.input)),
        ),
        Err(e) => CommandResult::err(e),
    }
}
