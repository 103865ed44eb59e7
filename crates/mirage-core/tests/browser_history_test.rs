//! Property-based tests for the navigation controller.
//!
//! Arbitrary interleavings of navigation, traversal, tab management and
//! clock advances must keep every tab's history pointer in bounds and the
//! active index valid.

use std::path::PathBuf;
use std::time::Duration;

use mirage_core::{Browser, Config, LoadState};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Navigate(String),
    Back,
    Forward,
    Reload,
    OpenTab,
    CloseTab(usize),
    SwitchTab(usize),
    Advance(u64),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => "[a-z]{1,8}\\.(com|org|io)".prop_map(Op::Navigate),
        2 => Just(Op::Back),
        2 => Just(Op::Forward),
        1 => Just(Op::Reload),
        1 => Just(Op::OpenTab),
        1 => (0usize..5).prop_map(Op::CloseTab),
        1 => (0usize..5).prop_map(Op::SwitchTab),
        2 => (0u64..3000).prop_map(Op::Advance),
    ]
}

fn check_invariants(browser: &Browser) {
    let tabs = browser.tabs();

    if let Some(active) = tabs.active_index() {
        assert!(active < tabs.len(), "active index {active} out of {}", tabs.len());
    }

    for tab in tabs.tabs() {
        let position = tab.history_position();
        let len = tab.history.len() as i64;
        if len == 0 {
            assert_eq!(position, -1);
        } else {
            assert!(position >= 0 && position < len);
            assert_eq!(tab.current_entry(), Some(tab.history[position as usize].as_str()));
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn controller_keeps_history_in_bounds(ops in proptest::collection::vec(arb_op(), 0..60)) {
        let mut browser = Browser::in_memory(Config::new(PathBuf::from("/tmp/mirage-prop")));
        browser.start();

        for op in ops {
            match op {
                Op::Navigate(input) => {
                    browser.navigate(&input);
                }
                Op::Back => {
                    browser.go_back();
                }
                Op::Forward => {
                    browser.go_forward();
                }
                Op::Reload => {
                    browser.reload();
                }
                Op::OpenTab => {
                    browser.open_tab();
                }
                Op::CloseTab(index) => {
                    browser.close_tab(index);
                }
                Op::SwitchTab(index) => {
                    browser.switch_tab(index);
                }
                Op::Advance(ms) => {
                    browser.advance(Duration::from_millis(ms));
                }
            }
            check_invariants(&browser);
        }

        // Once the clock drains, nothing is left loading
        browser.run_until_idle();
        prop_assert_eq!(browser.pending_loads(), 0);
        prop_assert!(browser
            .tabs()
            .tabs()
            .iter()
            .all(|tab| tab.state != LoadState::Navigating));
    }
}
