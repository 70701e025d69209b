//! Estimate Calculator - the cost formula.
//!
//! Steps, in order (the order matters for floating point reproducibility):
//!
//! 1. Split the area at `INITIAL_AREA_CUTOFF` and price each part.
//! 2. Apply the unit's discount rate to get the mid hard cost.
//! 3. Band low/high at ±`LOW_HIGH_RANGE` around that mid.
//! 4. Add `UTILITIES_COST` to each column if utilities are included.
//! 5. Multiply each column by `HILLSIDE_RATE` on a hillside.
//! 6. Contingency is the unit's rate times the adjusted hard cost.
//! 7. Totals are fixed fees + hard cost + contingency; per-area figures
//!    divide by the nominal catalog area.

use crate::domain::catalog::constants::{
    ADDL_AREA_COST, DESIGN_COST, HILLSIDE_RATE, INITIAL_AREA_COST, INITIAL_AREA_CUTOFF,
    LOW_HIGH_RANGE, TITLE_24_COST, UTILITIES_COST,
};
use crate::domain::catalog::{Catalog, UnitType};

use super::{CostRange, EstimateInput, EstimateResult, LineItem, LineItemKind, SiteConditions};

/// Stateless cost estimator.
pub struct EstimateCalculator;

impl EstimateCalculator {
    /// Computes the estimate for a resolved input.
    pub fn estimate_input(input: &EstimateInput) -> EstimateResult {
        Self::estimate(Catalog::get(input.unit_type), input.site)
    }

    /// Computes the full breakdown for a unit type and site conditions.
    pub fn estimate(unit: &UnitType, site: SiteConditions) -> EstimateResult {
        let hard = Self::hard_construction(unit, site);
        let design_cost = Self::design_cost(site);

        let shared_costs = unit.survey_fee
            + design_cost
            + unit.permit_fee
            + unit.engineering_fee
            + TITLE_24_COST
            + unit.solar_fee;

        let contingency = hard.scale(unit.contingency_rate);
        let totals = hard.zip_with(contingency, |h, c| shared_costs + h + c);
        let cost_per_area = totals.map(|total| total / unit.area);

        let line_items = vec![
            LineItem::optional_fee(LineItemKind::BoundarySurvey, unit.survey_fee),
            LineItem::new(
                LineItemKind::DesignAndPermitting,
                CostRange::flat(design_cost + unit.permit_fee),
            ),
            LineItem::new(
                LineItemKind::StructuralEngineering,
                CostRange::flat(unit.engineering_fee),
            ),
            LineItem::new(LineItemKind::Title24, CostRange::flat(TITLE_24_COST)),
            LineItem::optional_fee(LineItemKind::SolarInstallation, unit.solar_fee),
            LineItem::new(LineItemKind::HardConstruction, hard),
            LineItem::new(LineItemKind::Contingency, contingency),
        ];

        EstimateResult {
            unit_type: unit.key,
            unit_name: unit.name.to_string(),
            area: unit.area,
            site,
            design_cost,
            shared_costs,
            line_items,
            totals,
            cost_per_area,
        }
    }

    /// Area-driven hard construction cost, after utilities and hillside.
    pub fn hard_construction(unit: &UnitType, site: SiteConditions) -> CostRange {
        let initial_area = unit.area.min(INITIAL_AREA_CUTOFF);
        let addl_area = (unit.area - INITIAL_AREA_CUTOFF).max(0.0);

        let mid = (initial_area * INITIAL_AREA_COST + addl_area * ADDL_AREA_COST)
            * unit.discount_rate;
        let mut hard = CostRange::banded(mid, LOW_HIGH_RANGE);

        if site.include_utilities {
            hard = hard.offset(UTILITIES_COST);
        }
        if site.on_hillside {
            hard = hard.scale(HILLSIDE_RATE);
        }

        hard
    }

    /// Design fee, scaled on a hillside.
    pub fn design_cost(site: SiteConditions) -> f64 {
        DESIGN_COST * if site.on_hillside { HILLSIDE_RATE } else { 1.0 }
    }
}
