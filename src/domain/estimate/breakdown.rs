//! EstimateResult - the itemized output of the estimator.

use serde::{Deserialize, Serialize};

use super::{CostRange, LineItem, LineItemKind, SiteConditions};
use crate::domain::catalog::UnitTypeKey;

/// A fully itemized cost estimate.
///
/// Immutable once built; recompute from scratch whenever an input changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateResult {
    pub unit_type: UnitTypeKey,
    pub unit_name: String,
    /// Nominal floor area of the unit type, in square feet.
    pub area: f64,
    pub site: SiteConditions,
    /// Design fee after any hillside adjustment.
    pub design_cost: f64,
    /// Sum of every fixed-fee line.
    pub shared_costs: f64,
    pub line_items: Vec<LineItem>,
    pub totals: CostRange,
    pub cost_per_area: CostRange,
}

impl EstimateResult {
    pub fn low_total(&self) -> f64 {
        self.totals.low
    }

    pub fn mid_total(&self) -> f64 {
        self.totals.mid
    }

    pub fn high_total(&self) -> f64 {
        self.totals.high
    }

    pub fn cost_per_area_low(&self) -> f64 {
        self.cost_per_area.low
    }

    pub fn cost_per_area_mid(&self) -> f64 {
        self.cost_per_area.mid
    }

    pub fn cost_per_area_high(&self) -> f64 {
        self.cost_per_area.high
    }

    /// Line items that should be displayed, in breakdown order.
    pub fn visible_items(&self) -> impl Iterator<Item = &LineItem> {
        self.line_items.iter().filter(|item| item.visible)
    }

    /// Finds the line item of a given kind.
    pub fn item(&self, kind: LineItemKind) -> Option<&LineItem> {
        self.line_items.iter().find(|item| item.kind == kind)
    }

    /// Hard construction cost after utilities and hillside adjustments.
    pub fn hard_construction(&self) -> CostRange {
        self.item(LineItemKind::HardConstruction)
            .map(LineItem::amounts)
            .unwrap_or_default()
    }

    pub fn contingency(&self) -> CostRange {
        self.item(LineItemKind::Contingency)
            .map(LineItem::amounts)
            .unwrap_or_default()
    }
}
