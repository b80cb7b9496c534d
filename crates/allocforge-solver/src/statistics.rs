//! Allocation statistics.
//!
//! Summarises a finished allocation for logging and reporting.

use std::time::Duration;

use allocforge_core::AllocationResult;

/// Summary of one allocation run.
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationStatistics {
    /// Number of input items.
    pub item_count: usize,
    /// Items taken in full.
    pub items_whole: usize,
    /// Items taken in part (at most one for a greedy fill).
    pub items_partial: usize,
    /// Items left untouched.
    pub items_skipped: usize,
    /// Weight taken across all items.
    pub used_capacity: f64,
    /// Capacity left unused.
    pub remaining_capacity: f64,
    /// Time spent validating and filling.
    pub duration: Duration,
}

impl AllocationStatistics {
    /// Collects statistics from a result and the time it took.
    pub fn collect(result: &AllocationResult, duration: Duration) -> Self {
        let mut items_whole = 0;
        let mut items_partial = 0;
        let mut items_skipped = 0;
        for a in &result.allocations {
            if a.is_whole() {
                items_whole += 1;
            } else if a.is_untouched() {
                items_skipped += 1;
            } else {
                items_partial += 1;
            }
        }

        Self {
            item_count: result.item_count(),
            items_whole,
            items_partial,
            items_skipped,
            used_capacity: result.used_capacity(),
            remaining_capacity: result.remaining_capacity,
            duration,
        }
    }

    /// Share of the capacity used, in `[0, 1]`. Zero capacity reports 0.
    pub fn utilization(&self) -> f64 {
        let capacity = self.used_capacity + self.remaining_capacity;
        if capacity == 0.0 {
            0.0
        } else {
            (self.used_capacity / capacity).min(1.0)
        }
    }
}
