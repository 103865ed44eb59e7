//! Achievement and menu commands

use mirage_core::{Achievement, AchievementKind, Achievements};
use serde::Serialize;

use super::tabs::CommandResult;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AchievementsInfo {
    pub achievements: Vec<Achievement>,
    pub completed: Vec<AchievementKind>,
}

impl From<&Achievements> for AchievementsInfo {
    fn from(achievements: &Achievements) -> Self {
        Self {
            achievements: achievements.all().to_vec(),
            completed: achievements.completed().iter().map(|a| a.kind).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReportInfo {
    pub report: &'static str,
    #[serde(flatten)]
    pub achievements: AchievementsInfo,
}

#[derive(Debug, Serialize)]
pub struct MenuInfo {
    pub menu_open: bool,
    pub context_menu_open: bool,
}

fn with_achievements<T>(
    state: &AppState,
    f: impl FnOnce(&mut Achievements) -> T,
) -> CommandResult<T> {
    CommandResult::ok(state.with_browser_mut(|browser| f(browser.achievements_mut())))
}

fn menu_info(achievements: &Achievements) -> MenuInfo {
    MenuInfo {
        menu_open: achievements.is_menu_open(),
        context_menu_open: achievements.is_context_menu_open(),
    }
}

fn report(
    state: &AppState,
    action: impl FnOnce(&mut Achievements) -> &'static str,
) -> CommandResult<ReportInfo> {
    with_achievements(state, |achievements| ReportInfo {
        report: action(achievements),
        achievements: AchievementsInfo::from(&*achievements),
    })
}

pub fn list_achievements(state: &AppState) -> CommandResult<AchievementsInfo> {
    CommandResult::ok(state.with_browser(|browser| AchievementsInfo::from(browser.achievements())))
}

pub fn activate_vpn(state: &AppState) -> CommandResult<AchievementsInfo> {
    with_achievements(state, |achievements| {
        achievements.activate_vpn();
        AchievementsInfo::from(&*achievements)
    })
}

pub fn block_ads(state: &AppState) -> CommandResult<AchievementsInfo> {
    with_achievements(state, |achievements| {
        achievements.block_ads();
        AchievementsInfo::from(&*achievements)
    })
}

pub fn scan_for_malware(state: &AppState) -> CommandResult<ReportInfo> {
    report(state, Achievements::scan_for_malware)
}

pub fn privacy_check(state: &AppState) -> CommandResult<ReportInfo> {
    report(state, Achievements::privacy_check)
}

pub fn smart_highlight(state: &AppState) -> CommandResult<ReportInfo> {
    report(state, Achievements::smart_highlight)
}

pub fn toggle_menu(state: &AppState) -> CommandResult<MenuInfo> {
    with_achievements(state, |achievements| {
        achievements.toggle_menu();
        menu_info(achievements)
    })
}

pub fn close_menu(state: &AppState) -> CommandResult<MenuInfo> {
    with_achievements(state, |achievements| {
        achievements.close_menu();
        menu_info(achievements)
    })
}

pub fn show_context_menu(state: &AppState) -> CommandResult<MenuInfo> {
    with_achievements(state, |achievements| {
        achievements.show_context_menu();
        menu_info(achievements)
    })
}

pub fn hide_context_menu(state: &AppState) -> CommandResult<MenuInfo> {
    with_achievements(state, |achievements| {
        achievements.hide_context_menu();
        menu_info(achievements)
    })
}
