//! Fill ordering.
//!
//! The allocator walks items by value-density, highest first. Ties are broken
//! by an explicit [`TieBreak`] policy over an index permutation, never by
//! comparing whole records.

use std::cmp::Ordering;

use allocforge_config::TieBreak;
use allocforge_core::Item;

/// Returns item indices in the order the greedy allocator visits them.
///
/// Items must already be validated. A tiny weight can still push a ratio to
/// `+inf`; infinite ratios rank first and tie with each other.
///
/// # Examples
///
/// ```
/// use allocforge_config::TieBreak;
/// use allocforge_core::Item;
/// use allocforge_solver::fill_order;
///
/// let items = [Item::new(1.0, 2.0), Item::new(2.0, 4.0), Item::new(1.0, 5.0)];
///
/// assert_eq!(fill_order(&items, TieBreak::InputOrder), vec![2, 0, 1]);
/// assert_eq!(fill_order(&items, TieBreak::HeavierFirst), vec![2, 1, 0]);
/// ```
pub fn fill_order(items: &[Item], tie_break: TieBreak) -> Vec<usize> {
    let ratios: Vec<f64> = items.iter().map(Item::ratio).collect();
    sorted_indices(items, &ratios, tie_break)
}

/// Sorts `0..items.len()` by `ratios` descending.
///
/// `sort_by` is stable, so indices that compare equal keep input order.
fn sorted_indices(items: &[Item], ratios: &[f64], tie_break: TieBreak) -> Vec<usize> {
    debug_assert_eq!(items.len(), ratios.len());

    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&a, &b| {
        let by_ratio = descending(ratios[a], ratios[b]);
        match tie_break {
            TieBreak::InputOrder => by_ratio,
            TieBreak::HeavierFirst => by_ratio
                .then_with(|| descending(items[a].weight, items[b].weight))
                .then_with(|| descending(items[a].value, items[b].value)),
        }
    });
    order
}

// Validated ratios are never NaN, so partial_cmp never fails; -0.0 and 0.0 tie,
// as do two +inf ratios.
fn descending(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}
