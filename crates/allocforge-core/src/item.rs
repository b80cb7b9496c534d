//! Items and item sets
//!
//! An [`Item`] is a divisible resource: up to `weight` units of it may be
//! taken, and taking all of them yields `value`. An [`ItemSet`] is the ordered
//! sequence an allocator works over. Order carries no meaning beyond making
//! equal-ratio tie-breaks reproducible.

use std::ops::Deref;

use crate::error::{InputViolation, Result};

/// A divisible item with a total weight and the value of taking all of it.
///
/// # Examples
///
/// ```
/// use allocforge_core::Item;
///
/// let item = Item::new(10.0, 60.0);
/// assert_eq!(item.ratio(), 6.0);
/// assert!(item.validate(0).is_ok());
///
/// assert!(Item::new(0.0, 10.0).validate(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Maximum divisible quantity available. Must be positive.
    pub weight: f64,
    /// Value obtained if the whole weight is taken. Must be non-negative.
    pub value: f64,
}

impl Item {
    /// Creates an item without validating it.
    ///
    /// Allocators validate every item before using it, so an invalid item
    /// built here is reported there rather than silently accepted.
    #[inline]
    pub const fn new(weight: f64, value: f64) -> Self {
        Item { weight, value }
    }

    /// Value per unit of weight.
    ///
    /// Only meaningful for a validated item. Even then a tiny weight can
    /// overflow the ratio to `+inf`, so use it for ranking, not arithmetic.
    #[inline]
    pub fn ratio(&self) -> f64 {
        self.value / self.weight
    }

    /// Checks this item's preconditions, tagging violations with `index`.
    pub fn validate(&self, index: usize) -> Result<()> {
        let Item { weight, value } = *self;
        if !weight.is_finite() {
            return Err(InputViolation::NonFiniteWeight { index, weight }.into());
        }
        if !value.is_finite() {
            return Err(InputViolation::NonFiniteValue { index, value }.into());
        }
        if weight <= 0.0 {
            return Err(InputViolation::NonPositiveWeight { index, weight }.into());
        }
        if value < 0.0 {
            return Err(InputViolation::NegativeValue { index, value }.into());
        }
        Ok(())
    }
}

impl From<(f64, f64)> for Item {
    fn from((weight, value): (f64, f64)) -> Self {
        Item::new(weight, value)
    }
}

/// An ordered sequence of items, indexed `0..n`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ItemSet {
    items: Vec<Item>,
}

impl ItemSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from `(weight, value)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        pairs.into_iter().map(Item::from).collect()
    }

    /// Builds a set from parallel weight and value sequences.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput(LengthMismatch)` when the sequences differ in length.
    ///
    /// # Examples
    ///
    /// ```
    /// use allocforge_core::ItemSet;
    ///
    /// let set = ItemSet::from_parallel(&[10.0, 20.0], &[60.0, 100.0]).unwrap();
    /// assert_eq!(set.len(), 2);
    ///
    /// assert!(ItemSet::from_parallel(&[10.0], &[60.0, 100.0]).is_err());
    /// ```
    pub fn from_parallel(weights: &[f64], values: &[f64]) -> Result<Self> {
        if weights.len() != values.len() {
            return Err(InputViolation::LengthMismatch {
                weights: weights.len(),
                values: values.len(),
            }
            .into());
        }
        Ok(weights
            .iter()
            .zip(values)
            .map(|(&weight, &value)| Item::new(weight, value))
            .collect())
    }

    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn as_slice(&self) -> &[Item] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<Item> {
        self.items
    }

    /// Sum of all item weights.
    pub fn total_weight(&self) -> f64 {
        self.items.iter().map(|i| i.weight).sum()
    }

    /// Sum of all item values; the upper bound on any allocation.
    pub fn total_value(&self) -> f64 {
        self.items.iter().map(|i| i.value).sum()
    }

    /// Highest value-density in the set, or `None` when empty.
    pub fn max_ratio(&self) -> Option<f64> {
        self.items.iter().map(Item::ratio).reduce(f64::max)
    }

    /// Validates every item, reporting the first violation.
    pub fn validate(&self) -> Result<()> {
        validate_items(&self.items)
    }
}

/// Validates a slice of items in index order, reporting the first violation.
pub fn validate_items(items: &[Item]) -> Result<()> {
    items
        .iter()
        .enumerate()
        .try_for_each(|(index, item)| item.validate(index))
}

impl Deref for ItemSet {
    type Target = [Item];

    fn deref(&self) -> &[Item] {
        &self.items
    }
}

impl AsRef<[Item]> for ItemSet {
    fn as_ref(&self) -> &[Item] {
        &self.items
    }
}

impl From<Vec<Item>> for ItemSet {
    fn from(items: Vec<Item>) -> Self {
        ItemSet { items }
    }
}

impl FromIterator<Item> for ItemSet {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        ItemSet {
            items: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ItemSet {
    type Item = Item;
    type IntoIter = std::vec::IntoIter<Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a ItemSet {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
