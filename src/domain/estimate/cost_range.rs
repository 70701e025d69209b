//! Low/mid/high triple of dollar amounts.

use serde::{Deserialize, Serialize};

/// A low, medium, and high estimate of one amount.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CostRange {
    pub low: f64,
    pub mid: f64,
    pub high: f64,
}

impl CostRange {
    pub fn new(low: f64, mid: f64, high: f64) -> Self {
        Self { low, mid, high }
    }

    /// The same amount in all three columns (used for fixed fees).
    pub fn flat(amount: f64) -> Self {
        Self::new(amount, amount, amount)
    }

    /// A symmetric band of `±spread` around `mid`.
    pub fn banded(mid: f64, spread: f64) -> Self {
        Self::new(mid * (1.0 - spread), mid, mid * (1.0 + spread))
    }

    /// Applies `f` to each column independently.
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.low), f(self.mid), f(self.high))
    }

    /// Combines two ranges column by column.
    pub fn zip_with(self, other: CostRange, f: impl Fn(f64, f64) -> f64) -> Self {
        Self::new(
            f(self.low, other.low),
            f(self.mid, other.mid),
            f(self.high, other.high),
        )
    }

    /// Adds a fixed amount to every column.
    pub fn offset(self, amount: f64) -> Self {
        self.map(|v| v + amount)
    }

    /// Multiplies every column by `rate`.
    pub fn scale(self, rate: f64) -> Self {
        self.map(|v| v * rate)
    }

    /// Returns true if `low <= mid <= high`.
    pub fn is_ordered(&self) -> bool {
        self.low <= self.mid && self.mid <= self.high
    }

    /// Returns true if every column is zero.
    pub fn is_zero(&self) -> bool {
        self.low == 0.0 && self.mid == 0.0 && self.high == 0.0
    }
}
