// Infrastructure: SearchMetrics - per-search counters shared by its layers
//
// One instance per search, shared through Rc between the layers of that
// search only. Evaluation is single-threaded and pull-based, so Cell is
// enough.

use serde::Serialize;
use std::cell::Cell;

#[derive(Debug, Default)]
pub struct SearchMetrics {
    expanded: Cell<u64>,
    rejected: Cell<u64>,
    truncated: Cell<bool>,
}

impl SearchMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// A walk layer produced a new trail
    pub fn record_expansion(&self) {
        self.expanded.set(self.expanded.get() + 1);
    }

    /// A filter layer dropped a trail
    pub fn record_rejection(&self) {
        self.rejected.set(self.rejected.get() + 1);
    }

    /// A filter layer hit its skip limit
    pub fn mark_truncated(&self) {
        self.truncated.set(true);
    }

    pub fn truncated(&self) -> bool {
        self.truncated.get()
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            trails_expanded: self.expanded.get(),
            trails_rejected: self.rejected.get(),
            truncated: self.truncated.get(),
        }
    }
}

/// Point-in-time copy of a search's counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub trails_expanded: u64,
    pub trails_rejected: u64,
    pub truncated: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let metrics = SearchMetrics::new();
        metrics.record_expansion();
        metrics.record_expansion();
        metrics.record_rejection();

        assert_eq!(
            metrics.snapshot(),
            MetricsSnapshot {
                trails_expanded: 2,
                trails_rejected: 1,
                truncated: false,
            }
        );

        metrics.mark_truncated();
        assert!(metrics.truncated());
    }
}
