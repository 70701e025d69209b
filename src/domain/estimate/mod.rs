//! Estimate Module - Pure cost estimation.
//!
//! Turns a catalog entry plus two site conditions into an itemized
//! breakdown with low/medium/high columns. No I/O and no state; the
//! result is rebuilt from scratch on every change of input.
//!
//! # Components
//!
//! - `EstimateInput` / `SiteConditions` - What the user chose
//! - `EstimateCalculator` - The cost formula
//! - `EstimateResult` - Line items, totals, and cost per square foot

mod breakdown;
mod calculator;
mod cost_range;
mod input;
mod line_item;

pub use breakdown::EstimateResult;
pub use calculator::EstimateCalculator;
pub use cost_range::CostRange;
pub use input::{EstimateInput, SiteConditions};
pub use line_item::{LineItem, LineItemKind};
