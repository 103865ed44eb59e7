//! Tab load state machine
//!
//! ```text
//! Empty
//!   ↓ navigate
//! Navigating ⟲ navigate / back / forward / reload
//!   ↓ load complete      ↑
//! Loaded ────────────────┘
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadState {
    /// Freshly opened, never navigated
    #[default]
    Empty,
    /// A simulated load is in flight
    Navigating,
    /// The last load completed
    Loaded,
}

impl LoadState {
    /// Check if transition to another state is valid
    pub fn can_transition_to(&self, target: LoadState) -> bool {
        match (self, target) {
            // Any state may start a load, including one superseding a load in flight
            (_, LoadState::Navigating) => true,
            (LoadState::Navigating, LoadState::Loaded) => true,
            // Nothing returns a tab to Empty, and Loaded only follows Navigating
            _ => false,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Navigating)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LoadState::Empty => "empty",
            LoadState::Navigating => "navigating",
            LoadState::Loaded => "loaded",
        }
    }
}

impl std::fmt::Display for LoadState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for LoadState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "empty" => Ok(LoadState::Empty),
            "navigating" => Ok(LoadState::Navigating),
            "loaded" => Ok(LoadState::Loaded),
            _ => Err(format!("Unknown load state: {}", s)),
        }
    }
}
