//! AllocForge Core - Core types for fractional allocation
//!
//! This crate provides the fundamental abstractions for AllocForge:
//! - Item and item set types describing divisible, valued resources
//! - A validated capacity scalar
//! - Allocation requests and results
//! - The error taxonomy shared by every AllocForge crate

pub mod capacity;
pub mod error;
pub mod item;
pub mod request;
pub mod result;

#[cfg(test)]
mod tests;

pub use capacity::Capacity;
pub use error::{AllocForgeError, InputViolation, Result};
pub use item::{Item, ItemSet};
pub use request::AllocationRequest;
pub use result::{AllocationResult, ItemAllocation};
