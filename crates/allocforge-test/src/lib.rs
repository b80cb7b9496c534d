//! Shared test fixtures for AllocForge crates.
//!
//! This crate provides data and pure functions for testing.
//! It does NOT depend on `allocforge-solver` so the solver can use it as a
//! dev-dependency.
//!
//! - [`scenarios`] - Worked allocation scenarios with known answers
//! - [`reference`] - Independent LP-optimum bound and float comparison helpers
//! - [`strategies`] - `proptest` strategies for items and capacities
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! allocforge-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use allocforge_test::scenarios::{classic_items, CLASSIC_CAPACITY};
//! use allocforge_test::reference::{assert_close, lp_upper_bound};
//! ```

pub mod reference;
pub mod scenarios;
pub mod strategies;

pub use reference::{assert_close, close, lp_upper_bound, TOLERANCE};
pub use scenarios::classic_items;
