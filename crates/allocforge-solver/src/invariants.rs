//! Post-condition checks for full assert mode.
//!
//! Each check compares floating-point sums with a relative tolerance; an
//! exact comparison would flag ordinary rounding.

use allocforge_core::{AllocForgeError, AllocationResult, Capacity, Item, Result};
use tracing::warn;

/// Verifies that `result` is a consistent allocation of `capacity` over `items`.
///
/// # Errors
///
/// Returns `Internal` describing the first post-condition that fails.
pub fn check_postconditions(
    capacity: Capacity,
    items: &[Item],
    result: &AllocationResult,
    tolerance: f64,
) -> Result<()> {
    let violation = find_violation(capacity, items, result, tolerance);
    match violation {
        None => Ok(()),
        Some(message) => {
            warn!(event = "postcondition_failed", %message);
            Err(AllocForgeError::Internal(message))
        }
    }
}

fn find_violation(
    capacity: Capacity,
    items: &[Item],
    result: &AllocationResult,
    tolerance: f64,
) -> Option<String> {
    if result.allocations.len() != items.len() {
        return Some(format!(
            "{} allocations for {} items",
            result.allocations.len(),
            items.len()
        ));
    }

    for (index, (a, item)) in result.allocations.iter().zip(items).enumerate() {
        if a.index != index {
            return Some(format!("allocation {} is tagged with index {}", index, a.index));
        }
        if !(0.0..=1.0).contains(&a.fraction) {
            return Some(format!("item {} has fraction {} outside [0, 1]", index, a.fraction));
        }
        if !approx_le(a.taken_weight, item.weight, tolerance) {
            return Some(format!(
                "item {} took {} of weight {}",
                index, a.taken_weight, item.weight
            ));
        }
    }

    let capacity = capacity.get();
    let used = result.used_capacity();
    if !approx_le(used, capacity, tolerance) {
        return Some(format!("used capacity {} exceeds capacity {}", used, capacity));
    }

    let all_whole = result.allocations.iter().all(|a| a.is_whole());
    if !all_whole && !approx_eq(used, capacity, tolerance) {
        return Some(format!(
            "capacity {} left unused while items remain",
            capacity - used
        ));
    }

    let total_available: f64 = items.iter().map(|i| i.value).sum();
    if result.total_value < 0.0 || !approx_le(result.total_value, total_available, tolerance) {
        return Some(format!(
            "total value {} outside [0, {}]",
            result.total_value, total_available
        ));
    }

    let gained: f64 = result.allocations.iter().map(|a| a.gained_value).sum();
    if !approx_eq(gained, result.total_value, tolerance) {
        return Some(format!(
            "item values sum to {} but total is {}",
            gained, result.total_value
        ));
    }

    None
}

fn slack(a: f64, b: f64, tolerance: f64) -> f64 {
    tolerance * a.abs().max(b.abs()).max(1.0)
}

// Sums of valid values may overflow to +inf. Non-finite operands compare
// exactly, so inf <= inf holds and inf <= finite does not.
pub(crate) fn approx_le(a: f64, b: f64, tolerance: f64) -> bool {
    if !a.is_finite() || !b.is_finite() {
        return a <= b;
    }
    a <= b + slack(a, b, tolerance)
}

pub(crate) fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    if !a.is_finite() || !b.is_finite() {
        return a == b;
    }
    (a - b).abs() <= slack(a, b, tolerance)
}
