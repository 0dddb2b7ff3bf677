// crates/shared-kernel/src/value_objects/counts.rs
use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign},
};

use serde::{Deserialize, Serialize};

/// Number of customers sharing one email domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerCount(usize);

impl CustomerCount {
    #[inline]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Count of a domain seen for the first time.
    #[inline]
    pub const fn one() -> Self {
        Self(1)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Counts one more customer.
    #[inline]
    pub fn increment(&mut self) {
        self.0 = self.0.saturating_add(1);
    }
}

impl Default for CustomerCount {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for CustomerCount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for CustomerCount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl From<usize> for CustomerCount {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

impl From<CustomerCount> for usize {
    fn from(value: CustomerCount) -> Self {
        value.0
    }
}

impl PartialEq<usize> for CustomerCount {
    fn eq(&self, other: &usize) -> bool {
        self.0 == *other
    }
}

impl Sum for CustomerCount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a> Sum<&'a CustomerCount> for CustomerCount {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Display for CustomerCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
