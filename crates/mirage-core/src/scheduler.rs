//! Load scheduler
//!
//! A virtual-time timer queue for simulated page loads. The host advances
//! the clock; due tasks come back in `(due time, schedule order)` order.
//! Each task names its tab and the navigation token it was scheduled under
//! so the browser can discard callbacks from superseded loads.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::Duration;

use mirage_tabs::PROGRESS_STEPS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadKind {
    /// Fresh navigation; completion shows the embedded frame
    Navigate,
    /// Back or forward; completion shows mock page content
    Traverse,
    Reload,
}

impl LoadKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadKind::Navigate => "navigate",
            LoadKind::Traverse => "traverse",
            LoadKind::Reload => "reload",
        }
    }
}

impl std::fmt::Display for LoadKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStep {
    /// Index into [`PROGRESS_STEPS`]
    Progress(usize),
    Complete(LoadKind),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTask {
    pub tab_id: String,
    pub token: u64,
    pub step: LoadStep,
}

#[derive(Debug)]
struct Scheduled {
    due: Duration,
    seq: u64,
    task: LoadTask,
}

impl PartialEq for Scheduled {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl Eq for Scheduled {}

impl PartialOrd for Scheduled {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scheduled {
    fn cmp(&self, other: &Self) -> Ordering {
        self.due
            .cmp(&other.due)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

#[derive(Debug, Default)]
pub struct LoadScheduler {
    now: Duration,
    next_seq: u64,
    queue: BinaryHeap<Reverse<Scheduled>>,
}

impl LoadScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    #[cfg(test)]
    fn pending_for(&self, tab_id: &str) -> usize {
        self.queue
            .iter()
            .filter(|Reverse(s)| s.task.tab_id == tab_id)
            .count()
    }

    /// Time until the earliest pending task, if any.
    pub fn next_due(&self) -> Option<Duration> {
        self.queue
            .peek()
            .map(|Reverse(s)| s.due.saturating_sub(self.now))
    }

    pub fn schedule(&mut self, delay: Duration, task: LoadTask) {
        let scheduled = Scheduled {
            due: self.now + delay,
            seq: self.next_seq,
            task,
        };
        self.next_seq += 1;
        self.queue.push(Reverse(scheduled));
    }

    /// Queue the progress steps and completion of one simulated load.
    /// Steps that would land at or after `latency` are skipped.
    pub fn schedule_load(
        &mut self,
        tab_id: &str,
        token: u64,
        kind: LoadKind,
        latency: Duration,
        interval: Duration,
    ) {
        for step in 0..PROGRESS_STEPS.len() {
            let delay = interval * (step as u32 + 1);
            if delay >= latency {
                break;
            }
            self.schedule(
                delay,
                LoadTask {
                    tab_id: tab_id.to_string(),
                    token,
                    step: LoadStep::Progress(step),
                },
            );
        }

        self.schedule(
            latency,
            LoadTask {
                tab_id: tab_id.to_string(),
                token,
                step: LoadStep::Complete(kind),
            },
        );
    }

    /// Drop every pending task for `tab_id`. Returns how many were dropped.
    pub fn cancel_tab(&mut self, tab_id: &str) -> usize {
        let before = self.queue.len();
        self.queue.retain(|Reverse(s)| s.task.tab_id != tab_id);
        before - self.queue.len()
    }

    /// Move the clock forward and return the tasks that came due, in order.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<LoadTask> {
        let target = self.now + elapsed;
        let mut due = Vec::new();

        while self
            .queue
            .peek()
            .is_some_and(|Reverse(s)| s.due <= target)
        {
            if let Some(Reverse(scheduled)) = self.queue.pop() {
                due.push(scheduled.task);
            }
        }

        self.now = target;
        due
    }
}
