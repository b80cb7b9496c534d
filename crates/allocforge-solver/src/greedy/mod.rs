//! Greedy fractional allocator.
//!
//! Fills a capacity with the items of highest value-density first, taking a
//! fraction of the last item that does not fit whole. Greedy by ratio is
//! optimal for the fractional knapsack problem.
//!
//! Logging levels:
//! - **INFO**: Allocation start/end with totals and item counts
//! - **DEBUG**: Each item taken, with step, weight and fraction
//! - **TRACE**: Fill order and early termination

use std::time::Instant;

use allocforge_config::{AllocatorConfig, TieBreak};
use allocforge_core::item::validate_items;
use allocforge_core::{
    AllocationRequest, AllocationResult, Capacity, Item, ItemAllocation, ItemSet, Result,
};
use tracing::{debug, info, trace};

use crate::invariants::check_postconditions;
use crate::order::fill_order;
use crate::statistics::AllocationStatistics;


/// Allocates `capacity` across `items` with the default configuration.
///
/// # Errors
///
/// Returns `InvalidInput` if the capacity is negative or non-finite, or if
/// any item has a non-positive weight or a negative value.
///
/// # Examples
///
/// ```
/// use allocforge_core::Item;
/// use allocforge_solver::allocate;
///
/// let items = [Item::new(10.0, 60.0), Item::new(20.0, 100.0), Item::new(30.0, 120.0)];
/// let result = allocate(50.0, &items).unwrap();
///
/// assert!((result.total_value - 240.0).abs() < 1e-9);
/// ```
pub fn allocate(capacity: f64, items: &[Item]) -> Result<AllocationResult> {
    GreedyAllocator::default().allocate(capacity, items)
}

/// Allocates `capacity` across items given as parallel weight and value slices.
///
/// # Errors
///
/// Returns `InvalidInput(LengthMismatch)` when the slices differ in length,
/// and otherwise fails like [`allocate`].
pub fn allocate_parallel(
    capacity: f64,
    weights: &[f64],
    values: &[f64],
) -> Result<AllocationResult> {
    let items = ItemSet::from_parallel(weights, values)?;
    allocate(capacity, &items)
}

/// Stateless greedy allocator parameterized by an [`AllocatorConfig`].
///
/// The allocator holds only configuration, so one instance may be shared
/// across threads and reused for any number of calls.
#[derive(Debug, Clone, Default)]
pub struct GreedyAllocator {
    config: AllocatorConfig,
}

impl GreedyAllocator {
    pub fn new(config: AllocatorConfig) -> Self {
        Self { config }
    }

    /// Allocator with the default configuration but a specific tie-break.
    pub fn with_tie_break(tie_break: TieBreak) -> Self {
        Self::new(AllocatorConfig::default().with_tie_break(tie_break))
    }

    pub fn config(&self) -> &AllocatorConfig {
        &self.config
    }

    /// Allocates `capacity` across `items`.
    ///
    /// Inputs are validated before any accumulation begins; invalid input
    /// never produces a partial result.
    pub fn allocate(&self, capacity: f64, items: &[Item]) -> Result<AllocationResult> {
        self.allocate_with_statistics(capacity, items)
            .map(|(result, _)| result)
    }

    /// Allocates a request.
    pub fn allocate_request(&self, request: &AllocationRequest) -> Result<AllocationResult> {
        self.allocate(request.capacity, request.items())
    }

    /// Allocates `capacity` across `items` and reports statistics for the run.
    pub fn allocate_with_statistics(
        &self,
        capacity: f64,
        items: &[Item],
    ) -> Result<(AllocationResult, AllocationStatistics)> {
        let start = Instant::now();

        let capacity = Capacity::new(capacity)?;
        validate_items(items)?;

        info!(
            event = "allocation_start",
            item_count = items.len() as u64,
            capacity = capacity.get(),
            tie_break = ?self.config.tie_break,
        );

        let result = fill(capacity, items, self.config.tie_break);

        if self.config.is_asserted() {
            check_postconditions(capacity, items, &result, self.config.assert_tolerance)?;
        }

        let stats = AllocationStatistics::collect(&result, start.elapsed());
        info!(
            event = "allocation_end",
            total_value = result.total_value,
            items_whole = stats.items_whole as u64,
            items_partial = stats.items_partial as u64,
            items_skipped = stats.items_skipped as u64,
            remaining_capacity = result.remaining_capacity,
            duration_us = stats.duration.as_micros() as u64,
        );

        Ok((result, stats))
    }
}

/// The greedy fill pass over validated inputs.
fn fill(capacity: Capacity, items: &[Item], tie_break: TieBreak) -> AllocationResult {
    let order = fill_order(items, tie_break);
    trace!(event = "fill_order", order = ?order);

    let mut allocations: Vec<ItemAllocation> =
        (0..items.len()).map(ItemAllocation::untouched).collect();
    let mut remaining = capacity.get();

    for (step, &index) in order.iter().enumerate() {
        if remaining == 0.0 {
            trace!(event = "capacity_exhausted", step = step as u64);
            break;
        }

        let item = &items[index];
        let take = item.weight.min(remaining);
        // Gains scale the item's own value; the ratio may overflow to +inf and
        // only decides the order.
        let (fraction, gained_value) = if take == item.weight {
            (1.0, item.value)
        } else {
            let fraction = take / item.weight;
            (fraction, fraction * item.value)
        };

        allocations[index] = ItemAllocation {
            index,
            fraction,
            taken_weight: take,
            gained_value,
        };
        remaining -= take;

        debug!(
            event = "item_taken",
            step = step as u64,
            item = index as u64,
            taken = take,
            fraction,
        );
    }

    AllocationResult::new(capacity, allocations, order)
}
