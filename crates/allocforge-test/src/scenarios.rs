//! Worked allocation scenarios.

use allocforge_core::Item;

/// Capacity of the classic three-item example.
pub const CLASSIC_CAPACITY: f64 = 50.0;

/// Best total for the classic example: 60 + 100 + 20/30 of 120.
pub const CLASSIC_TOTAL: f64 = 240.0;

/// The textbook example: weights 10/20/30, values 60/100/120.
pub fn classic_items() -> Vec<Item> {
    vec![
        Item::new(10.0, 60.0),
        Item::new(20.0, 100.0),
        Item::new(30.0, 120.0),
    ]
}

/// Classic weights as a parallel slice.
pub const CLASSIC_WEIGHTS: [f64; 3] = [10.0, 20.0, 30.0];

/// Classic values as a parallel slice.
pub const CLASSIC_VALUES: [f64; 3] = [60.0, 100.0, 120.0];

/// Items whose ratios are all exactly 2, differing in weight and value.
pub fn equal_ratio_items() -> Vec<Item> {
    vec![
        Item::new(1.0, 2.0),
        Item::new(4.0, 8.0),
        Item::new(2.0, 4.0),
        Item::new(4.0, 8.0),
    ]
}
