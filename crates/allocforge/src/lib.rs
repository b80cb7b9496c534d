//! AllocForge - greedy fractional allocation in Rust
//!
//! Allocate a divisible capacity across weighted, valued items so the total
//! value is maximal. Items are taken whole in order of value-density until one
//! no longer fits, and that one is taken in part.
//!
//! # Example
//!
//! ```rust
//! use allocforge::prelude::*;
//!
//! let items = ItemSet::from_pairs([(10.0, 60.0), (20.0, 100.0), (30.0, 120.0)]);
//! let result = allocate(50.0, &items).unwrap();
//!
//! assert!((result.total_value - 240.0).abs() < 1e-9);
//! assert_eq!(result.fraction(0), Some(1.0));
//! ```
//!
//! Invalid input is reported, never coerced:
//!
//! ```rust
//! use allocforge::prelude::*;
//!
//! let err = allocate(10.0, &[Item::new(0.0, 10.0)]).unwrap_err();
//! assert!(err.is_invalid_input());
//! ```

// Core types
pub use allocforge_core::{
    AllocForgeError, AllocationRequest, AllocationResult, Capacity, InputViolation, Item,
    ItemAllocation, ItemSet, Result,
};

// Configuration
pub use allocforge_config::{
    AllocatorConfig, BatchThreadCount, ConfigError, EnvironmentMode, TieBreak,
};

// Allocator
pub use allocforge_solver::{
    allocate, allocate_parallel, fill_order, AllocationStatistics, BatchAllocator,
    GreedyAllocator,
};

#[cfg(feature = "console")]
mod console;

#[cfg(feature = "console")]
pub use console::init_console;

pub mod prelude {
    pub use super::{allocate, allocate_parallel, BatchAllocator, GreedyAllocator};
    pub use super::{AllocForgeError, AllocationRequest, AllocationResult, Item, ItemSet};
    pub use super::{AllocatorConfig, TieBreak};
}
