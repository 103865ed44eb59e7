//! Tab collection
//!
//! Ordered tab strip plus the active tab pointer. The active index, when
//! set, always refers to an existing tab.

use crate::error::TabError;
use crate::tab::Tab;
use crate::Result;

#[derive(Debug, Clone, Default)]
pub struct TabCollection {
    tabs: Vec<Tab>,
    active: Option<usize>,
}

impl TabCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active(&self) -> Option<&Tab> {
        self.active.and_then(|i| self.tabs.get(i))
    }

    pub fn active_mut(&mut self) -> Option<&mut Tab> {
        self.active.and_then(|i| self.tabs.get_mut(i))
    }

    pub fn get(&self, index: usize) -> Option<&Tab> {
        self.tabs.get(index)
    }

    pub fn get_by_id_mut(&mut self, tab_id: &str) -> Result<&mut Tab> {
        self.tabs
            .iter_mut()
            .find(|t| t.id == tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))
    }

    /// Append an empty tab and make it active. Returns its index.
    pub fn open_tab(&mut self) -> usize {
        let tab = Tab::new();
        tracing::info!(tab_id = %tab.id, "Opened new tab");

        self.tabs.push(tab);
        let index = self.tabs.len() - 1;
        self.active = Some(index);
        index
    }

    /// Index of the active tab, opening one first if there is none.
    pub fn ensure_active(&mut self) -> usize {
        match self.active {
            Some(index) => index,
            None => self.open_tab(),
        }
    }

    pub fn switch_tab(&mut self, index: usize) -> Result<()> {
        if index >= self.tabs.len() {
            return Err(TabError::InvalidIndex {
                index,
                len: self.tabs.len(),
            });
        }

        self.active = Some(index);
        Ok(())
    }

    /// Remove the tab at `index` and return it.
    ///
    /// Closing the last tab opens a fresh one. Otherwise the active index is
    /// only clamped to the new end; it is not shifted when an earlier tab
    /// goes away.
    pub fn close_tab(&mut self, index: usize) -> Result<Tab> {
        if index >= self.tabs.len() {
            return Err(TabError::InvalidIndex {
                index,
                len: self.tabs.len(),
            });
        }

        let removed = self.tabs.remove(index);
        tracing::info!(tab_id = %removed.id, index, "Closed tab");

        if self.tabs.is_empty() {
            self.open_tab();
            return Ok(removed);
        }

        if let Some(active) = self.active {
            if active >= self.tabs.len() {
                self.active = Some(self.tabs.len() - 1);
            }
        }

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::LoadState;

    fn collection_with(count: usize) -> TabCollection {
        let mut tabs = TabCollection::new();
        for _ in 0..count {
            tabs.open_tab();
        }
        tabs
    }

    #[test]
    fn test_open_activates_new_tab() {
        let mut tabs = TabCollection::new();
        assert!(tabs.active().is_none());

        assert_eq!(tabs.open_tab(), 0);
        assert_eq!(tabs.open_tab(), 1);
        assert_eq!(tabs.active_index(), Some(1));
        assert_eq!(tabs.len(), 2);
    }

    #[test]
    fn test_ensure_active_creates_once() {
        let mut tabs = TabCollection::new();
        assert_eq!(tabs.ensure_active(), 0);
        assert_eq!(tabs.ensure_active(), 0);
        assert_eq!(tabs.len(), 1);
    }

    #[test]
    fn test_close_only_tab_leaves_fresh_tab() {
        let mut tabs = collection_with(1);
        let closed_id = tabs.tabs()[0].id.clone();
        tabs.active_mut().unwrap().push_history("https://a.com".to_string());

        let removed = tabs.close_tab(0).unwrap();
        assert_eq!(removed.id, closed_id);

        assert_eq!(tabs.len(), 1);
        assert_eq!(tabs.active_index(), Some(0));
        let fresh = tabs.active().unwrap();
        assert_ne!(fresh.id, closed_id);
        assert!(fresh.history.is_empty());
        assert_eq!(fresh.state, LoadState::Empty);
    }

    #[test]
    fn test_close_clamps_active_index() {
        let mut tabs = collection_with(3);
        assert_eq!(tabs.active_index(), Some(2));

        tabs.close_tab(2).unwrap();
        assert_eq!(tabs.active_index(), Some(1));
    }

    #[test]
    fn test_close_before_active_does_not_shift() {
        let mut tabs = collection_with(3);
        tabs.switch_tab(1).unwrap();
        let third = tabs.tabs()[2].id.clone();

        tabs.close_tab(0).unwrap();
        assert_eq!(tabs.active_index(), Some(1));
        // Index 1 now holds what used to be the third tab
        assert_eq!(tabs.active().unwrap().id, third);
    }

    #[test]
    fn test_invalid_index() {
        let mut tabs = collection_with(2);

        assert_eq!(
            tabs.close_tab(5).unwrap_err(),
            TabError::InvalidIndex { index: 5, len: 2 }
        );
        assert!(tabs.switch_tab(2).is_err());
        assert_eq!(tabs.len(), 2);
        assert_eq!(tabs.active_index(), Some(1));
    }

    #[test]
    fn test_lookup_by_id() {
        let mut tabs = collection_with(2);
        let id = tabs.tabs()[0].id.clone();

        tabs.get_by_id_mut(&id).unwrap().title = "Renamed".to_string();
        assert_eq!(tabs.get(0).unwrap().title, "Renamed");
        assert!(matches!(
            tabs.get_by_id_mut("missing"),
            Err(TabError::NotFound(_))
        ));
    }
}
