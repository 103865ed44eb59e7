//! Achievements and shell menus
//!
//! Privacy and security actions are decorative: each one bumps a progress
//! counter and closes whichever menu triggered it.

use serde::{Deserialize, Serialize};

pub const MALWARE_SCAN_REPORT: &str = "Scanning for malware... No threats detected.";
pub const PRIVACY_CHECK_REPORT: &str =
    "Privacy Check:\n- Tracking protection: Enabled\n- VPN: Not connected\n- Ad blocking: Active";
pub const SMART_HIGHLIGHT_REPORT: &str =
    "Smart Highlight activated. Key information will be automatically detected and highlighted.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementKind {
    VpnUsage,
    AdBlocking,
    SecurityTasks,
}

impl AchievementKind {
    pub const ALL: [AchievementKind; 3] = [
        AchievementKind::VpnUsage,
        AchievementKind::AdBlocking,
        AchievementKind::SecurityTasks,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            AchievementKind::VpnUsage => "VPN Master",
            AchievementKind::AdBlocking => "Ad Ninja",
            AchievementKind::SecurityTasks => "Security Sentinel",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AchievementKind::VpnUsage => "Use VPN for total browsing privacy",
            AchievementKind::AdBlocking => "Block ads and trackers",
            AchievementKind::SecurityTasks => "Complete security checkpoints",
        }
    }

    pub fn max_progress(&self) -> u32 {
        match self {
            AchievementKind::VpnUsage => 10,
            AchievementKind::AdBlocking => 100,
            AchievementKind::SecurityTasks => 5,
        }
    }

    /// Progress added per recorded action
    fn step(&self) -> u32 {
        match self {
            AchievementKind::AdBlocking => 10,
            _ => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Achievement {
    pub kind: AchievementKind,
    pub title: &'static str,
    pub description: &'static str,
    pub progress: u32,
    pub max_progress: u32,
}

impl Achievement {
    fn new(kind: AchievementKind) -> Self {
        Self {
            kind,
            title: kind.title(),
            description: kind.description(),
            progress: 0,
            max_progress: kind.max_progress(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.progress >= self.max_progress
    }
}

#[derive(Debug, Clone)]
pub struct Achievements {
    entries: [Achievement; 3],
    menu_open: bool,
    context_menu_open: bool,
}

impl Achievements {
    pub fn new() -> Self {
        Self {
            entries: AchievementKind::ALL.map(Achievement::new),
            menu_open: false,
            context_menu_open: false,
        }
    }

    pub fn all(&self) -> &[Achievement] {
        &self.entries
    }

    pub fn get(&self, kind: AchievementKind) -> &Achievement {
        &self.entries[kind as usize]
    }

    /// Advance `kind` by one step unless it is already complete.
    /// Returns whether progress changed.
    pub fn record(&mut self, kind: AchievementKind) -> bool {
        let entry = &mut self.entries[kind as usize];
        if entry.progress >= entry.max_progress {
            return false;
        }

        entry.progress += kind.step();
        tracing::debug!(achievement = ?kind, progress = entry.progress, "Achievement progress");

        if entry.is_complete() {
            tracing::info!(achievement = entry.title, "Achievement unlocked");
        }
        true
    }

    pub fn completed(&self) -> Vec<&Achievement> {
        self.entries.iter().filter(|a| a.is_complete()).collect()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn is_context_menu_open(&self) -> bool {
        self.context_menu_open
    }

    pub fn show_context_menu(&mut self) {
        self.context_menu_open = true;
    }

    pub fn hide_context_menu(&mut self) {
        self.context_menu_open = false;
    }

    pub fn activate_vpn(&mut self) {
        self.record(AchievementKind::VpnUsage);
        self.close_menu();
    }

    pub fn block_ads(&mut self) {
        self.record(AchievementKind::AdBlocking);
        self.close_menu();
    }

    pub fn scan_for_malware(&mut self) -> &'static str {
        self.hide_context_menu();
        self.record(AchievementKind::SecurityTasks);
        MALWARE_SCAN_REPORT
    }

    pub fn privacy_check(&mut self) -> &'static str {
        self.hide_context_menu();
        PRIVACY_CHECK_REPORT
    }

    pub fn smart_highlight(&mut self) -> &'static str {
        self.hide_context_menu();
        SMART_HIGHLIGHT_REPORT
    }
}

impl Default for Achievements {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let achievements = Achievements::new();

        let titles: Vec<&str> = achievements.all().iter().map(|a| a.title).collect();
        assert_eq!(titles, ["VPN Master", "Ad Ninja", "Security Sentinel"]);
        assert!(achievements.all().iter().all(|a| a.progress == 0));
        assert!(achievements.completed().is_empty());
        assert!(!achievements.is_menu_open());
    }

    #[test]
    fn test_vpn_caps_at_max() {
        let mut achievements = Achievements::new();
        for _ in 0..15 {
            achievements.activate_vpn();
        }

        let vpn = achievements.get(AchievementKind::VpnUsage);
        assert_eq!(vpn.progress, 10);
        assert!(vpn.is_complete());
        assert!(!achievements.record(AchievementKind::VpnUsage));
    }

    #[test]
    fn test_ad_blocking_steps_by_ten() {
        let mut achievements = Achievements::new();
        achievements.block_ads();
        achievements.block_ads();
        assert_eq!(achievements.get(AchievementKind::AdBlocking).progress, 20);

        for _ in 0..20 {
            achievements.block_ads();
        }
        assert_eq!(achievements.get(AchievementKind::AdBlocking).progress, 100);
    }

    #[test]
    fn test_completed_lists_finished_only() {
        let mut achievements = Achievements::new();
        for _ in 0..5 {
            assert_eq!(achievements.scan_for_malware(), MALWARE_SCAN_REPORT);
        }
        achievements.activate_vpn();

        let done: Vec<AchievementKind> =
            achievements.completed().iter().map(|a| a.kind).collect();
        assert_eq!(done, [AchievementKind::SecurityTasks]);
    }

    #[test]
    fn test_menu_actions_close_menus() {
        let mut achievements = Achievements::new();

        assert!(achievements.toggle_menu());
        achievements.activate_vpn();
        assert!(!achievements.is_menu_open());

        achievements.toggle_menu();
        achievements.block_ads();
        assert!(!achievements.is_menu_open());

        assert!(achievements.toggle_menu());
        assert!(!achievements.toggle_menu());

        achievements.show_context_menu();
        achievements.privacy_check();
        assert!(!achievements.is_context_menu_open());
        // Report actions never count toward achievements
        assert_eq!(achievements.get(AchievementKind::SecurityTasks).progress, 0);
    }
}
