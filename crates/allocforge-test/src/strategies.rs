//! `proptest` strategies for allocation inputs.
//!
//! Most weights and values are drawn from bounded ranges so sums stay far from
//! overflow and rounding stays well inside [`crate::TOLERANCE`]. The `wide`
//! strategies span magnitudes from `1e-300` to `1e301`, where ratios can
//! overflow to `+inf`.

use allocforge_core::Item;
use proptest::prelude::*;

/// A valid item with weight in `(0.01, 100]` and value in `[0, 1000]`.
pub fn arb_item() -> impl Strategy<Value = Item> {
    (0.01f64..=100.0, 0.0f64..=1000.0).prop_map(|(weight, value)| Item::new(weight, value))
}

/// A valid item drawn from a small integer grid, so equal ratios are common.
pub fn arb_grid_item() -> impl Strategy<Value = Item> {
    (1u32..=4, 0u32..=8).prop_map(|(weight, value)| Item::new(weight as f64, value as f64))
}

/// A valid item with weight and value anywhere between `1e-300` and `1e301`.
pub fn arb_wide_item() -> impl Strategy<Value = Item> {
    (1.0f64..10.0, -300i32..=300, 0.0f64..10.0, -300i32..=300).prop_map(
        |(weight, weight_exp, value, value_exp)| {
            Item::new(weight * 10f64.powi(weight_exp), value * 10f64.powi(value_exp))
        },
    )
}

/// Up to `max_len` valid items.
pub fn arb_items(max_len: usize) -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec(arb_item(), 0..=max_len)
}

/// Up to `max_len` valid grid items.
pub fn arb_grid_items(max_len: usize) -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec(arb_grid_item(), 0..=max_len)
}

/// A non-empty item set paired with a capacity anywhere from zero to beyond
/// the total weight.
pub fn arb_problem(max_len: usize) -> impl Strategy<Value = (f64, Vec<Item>)> {
    prop::collection::vec(arb_item(), 1..=max_len).prop_flat_map(|items| {
        let total: f64 = items.iter().map(|i| i.weight).sum();
        (0.0..=total * 1.5, Just(items))
    })
}

/// Like [`arb_problem`], over [`arb_wide_item`].
pub fn arb_wide_problem(max_len: usize) -> impl Strategy<Value = (f64, Vec<Item>)> {
    (prop::collection::vec(arb_wide_item(), 1..=max_len), 0.0f64..=1.5).prop_map(
        |(items, share)| {
            let total: f64 = items.iter().map(|i| i.weight).sum();
            (total * share, items)
        },
    )
}
