//! Capacity - the divisible resource budget

use std::fmt;

use crate::error::{InputViolation, Result};

/// A validated, finite, non-negative resource budget.
///
/// # Examples
///
/// ```
/// use allocforge_core::Capacity;
///
/// let capacity = Capacity::new(50.0).unwrap();
/// assert_eq!(capacity.get(), 50.0);
///
/// assert!(Capacity::new(-1.0).is_err());
/// assert!(Capacity::new(f64::NAN).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Capacity(f64);

impl Capacity {
    /// The empty budget.
    pub const ZERO: Capacity = Capacity(0.0);

    /// Validates and wraps a raw capacity.
    pub fn new(capacity: f64) -> Result<Self> {
        if !capacity.is_finite() {
            return Err(InputViolation::NonFiniteCapacity(capacity).into());
        }
        if capacity < 0.0 {
            return Err(InputViolation::NegativeCapacity(capacity).into());
        }
        Ok(Capacity(capacity))
    }

    #[inline]
    pub const fn get(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }
}

impl fmt::Debug for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity({})", self.0)
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<f64> for Capacity {
    type Error = crate::AllocForgeError;

    fn try_from(value: f64) -> Result<Self> {
        Capacity::new(value)
    }
}
