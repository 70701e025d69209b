//! Dollars value object for whole-dollar currency display.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A US dollar amount.
///
/// Arithmetic elsewhere works on raw `f64` without intermediate rounding;
/// this type only rounds when formatted, to the nearest whole dollar
/// (half away from zero) with thousands separators.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dollars(f64);

impl Dollars {
    /// Zero dollars.
    pub const ZERO: Self = Self(0.0);

    /// Wraps a raw amount.
    pub fn new(amount: f64) -> Self {
        Self(amount)
    }

    /// Returns the unrounded amount.
    pub fn amount(&self) -> f64 {
        self.0
    }

    /// Returns the amount rounded to whole dollars.
    pub fn whole(&self) -> i64 {
        self.0.round() as i64
    }
}

impl From<f64> for Dollars {
    fn from(amount: f64) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Dollars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.whole();
        let digits = whole.unsigned_abs().to_string();

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        let sign = if whole < 0 { "-" } else { "" };
        f.pad(&format!("{}${}", sign, grouped))
    }
}
