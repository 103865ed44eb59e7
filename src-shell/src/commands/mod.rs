//! Shell commands
//!
//! One JSON request per line:
//! `{"id": 1, "method": "nav.navigate", "params": {"input": "github.com"}}`
//! answered by `{"id": 1, "success": true, "data": {...}, "error": null}`.

pub mod achievements;
pub mod bookmarks;
pub mod navigation;
pub mod settings;
pub mod tabs;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::state::AppState;
use tabs::CommandResult;

#[derive(Debug, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub id: Value,
    pub method: String,
    #[serde(default)]
    pub params: Value,
}

#[derive(Debug, Serialize)]
pub struct Response {
    pub id: Value,
    #[serde(flatten)]
    pub result: CommandResult<Value>,
}

pub(crate) fn parse_params<P: DeserializeOwned>(params: &Value) -> Result<P, String> {
    serde_json::from_value(params.clone()).map_err(|e| format!("Invalid params: {e}"))
}

/// Parse and execute one protocol line.
pub fn handle_line(state: &AppState, line: &str) -> Response {
    match serde_json::from_str::<Request>(line) {
        Ok(request) => dispatch(state, request),
        Err(e) => {
            tracing::debug!(error = %e, "Malformed request");
            Response {
                id: Value::Null,
                result: CommandResult::err(format!("Parse error: {e}")),
            }
        }
    }
}

pub fn dispatch(state: &AppState, request: Request) -> Response {
    let params = &request.params;

    let result = match request.method.as_str() {
        "ping" => CommandResult::ok(Value::from("pong")),

        // Browser and tabs
        "browser.start" => tabs::start_browser(state).into_json(),
        "browser.snapshot" => tabs::snapshot(state).into_json(),
        "tab.open" => tabs::open_tab(state).into_json(),
        "tab.close" => tabs::close_tab(state, params).into_json(),
        "tab.switch" => tabs::switch_tab(state, params).into_json(),

        // Settings
        "browser.config" => settings::get_config(state).into_json(),
        "browser.set_search_engine" => settings::set_search_engine(state, params).into_json(),

        // Navigation
        "nav.navigate" => navigation::navigate(state, params).into_json(),
        "nav.search" => navigation::search(state, params).into_json(),
        "nav.shortcut" => navigation::navigate_to_shortcut(state, params).into_json(),
        "nav.back" => navigation::go_back(state).into_json(),
        "nav.forward" => navigation::go_forward(state).into_json(),
        "nav.reload" => navigation::reload(state).into_json(),
        "nav.message" => navigation::post_message(state, params).into_json(),
        "nav.normalize" => navigation::normalize(state, params).into_json(),

        // Bookmarks
        "bookmark.toggle" => bookmarks::toggle_bookmark(state).into_json(),
        "bookmark.list" => bookmarks::list_bookmarks(state).into_json(),
        "bookmark.add" => bookmarks::add_bookmark(state, params).into_json(),
        "bookmark.remove" => bookmarks::remove_bookmark(state, params).into_json(),

        // Achievements and menus
        "achievement.list" => achievements::list_achievements(state).into_json(),
        "achievement.vpn" => achievements::activate_vpn(state).into_json(),
        "achievement.block_ads" => achievements::block_ads(state).into_json(),
        "achievement.scan" => achievements::scan_for_malware(state).into_json(),
        "achievement.privacy" => achievements::privacy_check(state).into_json(),
        "achievement.highlight" => achievements::smart_highlight(state).into_json(),
        "menu.toggle" => achievements::toggle_menu(state).into_json(),
        "menu.close" => achievements::close_menu(state).into_json(),
        "context_menu.show" => achievements::show_context_menu(state).into_json(),
        "context_menu.hide" => achievements::hide_context_menu(state).into_json(),

        other => {
            tracing::debug!(method = %other, "Unknown method");
            CommandResult::err(format!("Unknown method: {other}"))
        }
    };

    Response {
        id: request.id,
        result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mirage_core::{Browser, Config};
    use serde_json::json;
    use std::path::PathBuf;
    use std::time::Duration;

    fn test_state() -> AppState {
        let config = Config::new(PathBuf::from("/tmp/mirage-shell-test"));
        AppState::from_browser(Browser::in_memory(config))
    }

    fn call(state: &AppState, request: Value) -> Value {
        let response = handle_line(state, &request.to_string());
        serde_json::to_value(response).unwrap()
    }

    #[test]
    fn test_ping_echoes_id() {
        let state = test_state();
        let response = call(&state, json!({"id": 7, "method": "ping"}));

        assert_eq!(response["id"], 7);
        assert_eq!(response["success"], true);
        assert_eq!(response["data"], "pong");
        assert_eq!(response["error"], Value::Null);
    }

    #[test]
    fn test_malformed_and_unknown() {
        let state = test_state();

        let response = serde_json::to_value(handle_line(&state, "{oops")).unwrap();
        assert_eq!(response["id"], Value::Null);
        assert_eq!(response["success"], false);

        let response = call(&state, json!({"id": "a", "method": "tab.teleport"}));
        assert_eq!(response["success"], false);
        assert_eq!(response["error"], "Unknown method: tab.teleport");
    }

    #[test]
    fn test_navigation_flow() {
        let state = test_state();
        call(&state, json!({"id": 1, "method": "browser.start"}));

        let response = call(
            &state,
            json!({"id": 2, "method": "nav.navigate", "params": {"input": "github.com"}}),
        );
        assert_eq!(response["data"]["started"], true);
        let tab = &response["data"]["snapshot"]["tabs"][0];
        assert_eq!(tab["url"], "https://github.com");
        assert_eq!(tab["loading"], true);

        let events = state.advance(Duration::from_millis(2500));
        assert!(events.last().unwrap().completed);

        let response = call(&state, json!({"id": 3, "method": "nav.back"}));
        assert_eq!(response["data"]["started"], false);
    }

    #[test]
    fn test_tab_commands() {
        let state = test_state();
        call(&state, json!({"id": 1, "method": "browser.start"}));

        let response = call(&state, json!({"id": 2, "method": "tab.open"}));
        assert_eq!(response["data"]["tabs"].as_array().unwrap().len(), 2);
        assert_eq!(response["data"]["active_index"], 1);

        let response = call(
            &state,
            json!({"id": 3, "method": "tab.switch", "params": {"index": 0}}),
        );
        assert_eq!(response["success"], true);
        assert_eq!(response["data"]["active_index"], 0);

        let response = call(
            &state,
            json!({"id": 4, "method": "tab.switch", "params": {"index": 9}}),
        );
        assert_eq!(response["success"], false);
        assert_eq!(response["error"], "Invalid tab index: 9");

        let response = call(
            &state,
            json!({"id": 5, "method": "tab.close", "params": {"index": 1}}),
        );
        assert_eq!(response["data"]["tabs"].as_array().unwrap().len(), 1);
        assert_eq!(response["data"]["active_index"], 0);

        let response = call(
            &state,
            json!({"id": 6, "method": "tab.close", "params": {"index": 3}}),
        );
        assert_eq!(response["success"], false);
        assert_eq!(response["error"], "Invalid tab index: 3");

        // Closing the last tab leaves a fresh one
        let response = call(
            &state,
            json!({"id": 7, "method": "tab.close", "params": {"index": 0}}),
        );
        let tabs = response["data"]["tabs"].as_array().unwrap();
        assert_eq!(tabs.len(), 1);
        assert_eq!(tabs[0]["title"], "New Tab");
    }

    #[test]
    fn test_config_commands() {
        let mut config = Config::new(PathBuf::from("/tmp/mirage-shell-test"));
        config.shortcuts = vec![mirage_core::Shortcut {
            title: "Docs".to_string(),
            url: "https://docs.rs".to_string(),
        }];
        let state = AppState::from_browser(Browser::in_memory(config));

        let response = call(&state, json!({"id": 1, "method": "browser.config"}));
        assert_eq!(response["data"]["search_engine"], "bing");
        assert_eq!(response["data"]["interface"]["accent_color"], "#0A84FF");
        assert_eq!(response["data"]["shortcuts"][0]["url"], "https://docs.rs");

        let response = call(
            &state,
            json!({"id": 2, "method": "browser.set_search_engine",
                   "params": {"engine": "google"}}),
        );
        assert_eq!(response["data"]["search_engine"], "google");

        let response = call(
            &state,
            json!({"id": 3, "method": "nav.normalize", "params": {"input": "rust"}}),
        );
        assert_eq!(response["data"], "https://www.google.com/search?q=rust");

        let response = call(
            &state,
            json!({"id": 4, "method": "browser.set_search_engine",
                   "params": {"engine": "altavista"}}),
        );
        assert_eq!(response["success"], false);
    }

    #[test]
    fn test_missing_params_rejected() {
        let state = test_state();
        let response = call(&state, json!({"id": 1, "method": "nav.navigate"}));

        assert_eq!(response["success"], false);
        assert!(response["error"]
            .as_str()
            .unwrap()
            .starts_with("Invalid params"));
    }

    #[test]
    fn test_message_forms() {
        let state = test_state();

        let response = call(
            &state,
            json!({"id": 1, "method": "nav.message",
                   "params": {"message": {"type": "navigate", "url": "docs.rs"}}}),
        );
        assert_eq!(response["data"]["started"], true);

        let response = call(
            &state,
            json!({"id": 2, "method": "nav.message",
                   "params": {"message": "{\"type\":\"navigate\",\"url\":\"x.com\"}"}}),
        );
        assert_eq!(response["data"]["started"], true);
        assert_eq!(response["data"]["snapshot"]["tabs"][0]["url"], "https://x.com");
    }

    #[test]
    fn test_bookmark_commands() {
        let state = test_state();

        let response = call(&state, json!({"id": 1, "method": "bookmark.toggle"}));
        assert_eq!(response["success"], false);

        call(
            &state,
            json!({"id": 2, "method": "nav.shortcut", "params": {"url": "https://docs.rs"}}),
        );
        let response = call(&state, json!({"id": 3, "method": "bookmark.toggle"}));
        assert_eq!(response["data"]["bookmarked"], true);

        let response = call(
            &state,
            json!({"id": 4, "method": "bookmark.add",
                   "params": {"url": "https://docs.rs", "title": "Docs"}}),
        );
        assert_eq!(response["data"]["changed"], false);

        let response = call(&state, json!({"id": 5, "method": "bookmark.list"}));
        let list = response["data"].as_array().unwrap();
        assert_eq!(list.len(), 1);
        assert!(list[0]["dateAdded"].is_string());

        let response = call(
            &state,
            json!({"id": 6, "method": "bookmark.remove", "params": {"url": "https://docs.rs"}}),
        );
        assert_eq!(response["data"]["changed"], true);
    }

    #[test]
    fn test_achievement_commands() {
        let state = test_state();

        call(&state, json!({"id": 1, "method": "menu.toggle"}));
        let response = call(&state, json!({"id": 2, "method": "achievement.vpn"}));
        assert_eq!(response["data"]["achievements"][0]["progress"], 1);

        let response = call(&state, json!({"id": 3, "method": "browser.snapshot"}));
        assert_eq!(response["data"]["menu_open"], false);

        let response = call(&state, json!({"id": 4, "method": "achievement.scan"}));
        assert_eq!(
            response["data"]["report"],
            "Scanning for malware... No threats detected."
        );
        assert_eq!(response["data"]["achievements"][2]["progress"], 1);
    }

    #[test]
    fn test_normalize_command() {
        let state = test_state();
        let response = call(
            &state,
            json!({"id": 1, "method": "nav.normalize", "params": {"input": "hello world"}}),
        );
        assert_eq!(response["data"], "https://www.bing.com/search?q=hello+world");
    }
}
