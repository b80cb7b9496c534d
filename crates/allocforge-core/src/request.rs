//! Allocation requests

use crate::capacity::Capacity;
use crate::error::Result;
use crate::item::{validate_items, Item, ItemSet};

/// One independent allocation problem: a capacity and the items to fill it with.
///
/// Requests are the unit of work for batch allocation and the on-disk format
/// read by the CLI.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AllocationRequest {
    pub capacity: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub items: ItemSet,
}

impl AllocationRequest {
    pub fn new(capacity: f64, items: impl Into<ItemSet>) -> Self {
        Self {
            capacity,
            items: items.into(),
        }
    }

    /// Builds a request from parallel weight and value sequences.
    pub fn from_parallel(capacity: f64, weights: &[f64], values: &[f64]) -> Result<Self> {
        Ok(Self {
            capacity,
            items: ItemSet::from_parallel(weights, values)?,
        })
    }

    /// Validates capacity and items, returning the checked capacity.
    pub fn validate(&self) -> Result<Capacity> {
        let capacity = Capacity::new(self.capacity)?;
        validate_items(&self.items)?;
        Ok(capacity)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }
}
