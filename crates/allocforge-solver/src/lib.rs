//! AllocForge Solver
//!
//! This crate provides the greedy fractional allocator including:
//! - Fill ordering by value-density with explicit tie-break policies
//! - The greedy allocator and its free-function entry points
//! - Post-condition checks for full assert mode
//! - Allocation statistics
//! - Batch allocation over rayon

pub mod batch;
pub mod greedy;
pub mod invariants;
pub mod order;
pub mod statistics;

pub use batch::BatchAllocator;
pub use greedy::{allocate, allocate_parallel, GreedyAllocator};
pub use invariants::check_postconditions;
pub use order::fill_order;
pub use statistics::AllocationStatistics;
