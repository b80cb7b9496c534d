//! Allocation results

use crate::capacity::Capacity;

/// How much of one input item an allocation took.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemAllocation {
    /// Index of the item in the input sequence.
    pub index: usize,
    /// Fraction of the item's weight taken, in `[0, 1]`.
    pub fraction: f64,
    /// Weight actually taken.
    pub taken_weight: f64,
    /// Value contributed to the total.
    pub gained_value: f64,
}

impl ItemAllocation {
    /// An allocation that takes nothing from item `index`.
    pub const fn untouched(index: usize) -> Self {
        ItemAllocation {
            index,
            fraction: 0.0,
            taken_weight: 0.0,
            gained_value: 0.0,
        }
    }

    pub fn is_whole(&self) -> bool {
        self.fraction == 1.0
    }

    pub fn is_partial(&self) -> bool {
        self.fraction > 0.0 && self.fraction < 1.0
    }

    pub fn is_untouched(&self) -> bool {
        self.taken_weight == 0.0
    }
}

/// The outcome of one allocation.
///
/// Totals are accumulated in floating point and are subject to rounding;
/// compare them with a tolerance rather than for exact equality.
///
/// # Examples
///
/// ```
/// use allocforge_core::{AllocationResult, Capacity, ItemAllocation};
///
/// let result = AllocationResult::new(
///     Capacity::new(5.0).unwrap(),
///     vec![ItemAllocation { index: 0, fraction: 0.5, taken_weight: 5.0, gained_value: 30.0 }],
///     vec![0],
/// );
/// assert_eq!(result.total_value, 30.0);
/// assert_eq!(result.fraction(0), Some(0.5));
/// assert!(result.is_saturated());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AllocationResult {
    /// Total value accumulated.
    pub total_value: f64,
    /// The capacity the allocation ran against.
    pub capacity: f64,
    /// Capacity left unused.
    pub remaining_capacity: f64,
    /// Per-item allocations, in input order.
    pub allocations: Vec<ItemAllocation>,
    /// Item indices in fill priority order. Items ranked after the point
    /// where capacity ran out are untouched.
    pub fill_order: Vec<usize>,
}

impl AllocationResult {
    /// Assembles a result from per-item allocations (in input order).
    ///
    /// The total and remaining capacity are derived from the allocations,
    /// summed in `fill_order` so the accumulation order matches the fill pass.
    pub fn new(
        capacity: Capacity,
        allocations: Vec<ItemAllocation>,
        fill_order: Vec<usize>,
    ) -> Self {
        let mut total_value = 0.0;
        let mut remaining = capacity.get();
        for &index in &fill_order {
            let a = &allocations[index];
            if a.is_untouched() {
                continue;
            }
            total_value += a.gained_value;
            remaining -= a.taken_weight;
        }
        Self {
            total_value,
            capacity: capacity.get(),
            remaining_capacity: remaining,
            allocations,
            fill_order,
        }
    }

    /// The result for an empty item set.
    pub fn empty(capacity: Capacity) -> Self {
        Self::new(capacity, Vec::new(), Vec::new())
    }

    /// Fraction taken of every item, in input order.
    pub fn fractions(&self) -> Vec<f64> {
        self.allocations.iter().map(|a| a.fraction).collect()
    }

    /// Fraction taken of item `index`, or `None` if out of range.
    pub fn fraction(&self, index: usize) -> Option<f64> {
        self.allocations.get(index).map(|a| a.fraction)
    }

    /// Total weight taken across all items.
    pub fn used_capacity(&self) -> f64 {
        self.allocations.iter().map(|a| a.taken_weight).sum()
    }

    /// Share of the capacity used, in `[0, 1]`. Zero capacity reports 0.
    pub fn utilization(&self) -> f64 {
        if self.capacity == 0.0 {
            0.0
        } else {
            (self.used_capacity() / self.capacity).min(1.0)
        }
    }

    /// Returns `true` if the capacity was exhausted exactly.
    pub fn is_saturated(&self) -> bool {
        self.remaining_capacity == 0.0
    }

    pub fn item_count(&self) -> usize {
        self.allocations.len()
    }
}
