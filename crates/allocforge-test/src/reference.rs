//! Reference computations and float comparison helpers.

use allocforge_core::Item;

/// Relative tolerance for comparing allocation totals.
pub const TOLERANCE: f64 = 1e-9;

/// Returns `true` if `a` and `b` agree within [`TOLERANCE`] (relative, with an
/// absolute floor of `TOLERANCE` near zero).
pub fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= TOLERANCE * a.abs().max(b.abs()).max(1.0)
}

/// Panics with both numbers if they are not [`close`].
#[track_caller]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        close(actual, expected),
        "expected {} to be within {} of {}",
        actual,
        TOLERANCE,
        expected
    );
}

/// The LP-relaxation optimum of the fractional knapsack, via its Lagrangian dual.
///
/// `L(l) = l * capacity + sum(max(0, v_i - l * w_i))` bounds every feasible
/// allocation from above for `l >= 0`. `L` is convex and piecewise linear with
/// breakpoints at the item ratios, so its minimum over `{0} + ratios` is the
/// LP optimum. This never sorts, so it checks the greedy pass independently.
///
/// Items must be valid and `capacity` non-negative.
pub fn lp_upper_bound(capacity: f64, items: &[Item]) -> f64 {
    let dual = |lambda: f64| {
        lambda * capacity
            + items
                .iter()
                .map(|i| (i.value - lambda * i.weight).max(0.0))
                .sum::<f64>()
    };

    std::iter::once(0.0)
        .chain(items.iter().map(Item::ratio))
        .map(dual)
        .fold(f64::INFINITY, f64::min)
}
