//! Reference scenarios and properties of the estimator.
//!
//! The fixed figures are worked examples; the properties are checked over
//! every combination of unit type and site conditions.

use proptest::prelude::*;

use adu_estimator::domain::catalog::{Catalog, UnitTypeKey};
use adu_estimator::domain::estimate::{
    EstimateCalculator, EstimateInput, EstimateResult, LineItemKind, SiteConditions,
};

// =============================================================================
// Helpers
// =============================================================================

const TOLERANCE: f64 = 1e-6;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "expected {expected}, got {actual}"
    );
}

fn estimate(key: UnitTypeKey, utilities: bool, hillside: bool) -> EstimateResult {
    EstimateCalculator::estimate_input(&EstimateInput::new(key, utilities, hillside))
}

fn assert_hard(result: &EstimateResult, low: f64, mid: f64, high: f64) {
    let item = result
        .item(LineItemKind::HardConstruction)
        .expect("hard construction line is always present");
    assert_close(item.low, low);
    assert_close(item.mid, mid);
    assert_close(item.high, high);
}

// =============================================================================
// Worked examples
// =============================================================================

#[test]
fn garage_studio_without_adjustments() {
    let result = estimate(UnitTypeKey::GarageStudio, false, false);

    assert_hard(&result, 77_350.0, 91_000.0, 104_650.0);
    assert_close(result.design_cost, 10_000.0);
    assert_close(result.shared_costs, 14_500.0);
    assert_close(result.low_total(), 107_320.0);
    assert_close(result.mid_total(), 123_700.0);
    assert_close(result.high_total(), 140_080.0);
    assert_close(result.cost_per_area_mid(), 309.25);
}

#[test]
fn detached_one_bedroom_uses_tiered_area_rate() {
    let result = estimate(UnitTypeKey::Detached1Br, false, false);

    assert_hard(&result, 174_250.0, 205_000.0, 235_750.0);
    assert_close(result.shared_costs, 34_500.0);
    assert_close(result.low_total(), 226_175.0);
    assert_close(result.mid_total(), 260_000.0);
    assert_close(result.high_total(), 293_825.0);
}

#[test]
fn detached_studio_with_utilities_on_hillside() {
    let result = estimate(UnitTypeKey::DetachedStudio, true, true);

    assert_hard(&result, 173_750.0, 200_000.0, 226_250.0);
    assert_close(result.design_cost, 12_500.0);
    assert_close(result.shared_costs, 30_500.0);
    assert_close(result.mid_total(), 250_500.0);
}

#[test]
fn utilities_add_to_every_band_before_contingency() {
    let plain = estimate(UnitTypeKey::GarageStudio, false, false);
    let with = estimate(UnitTypeKey::GarageStudio, true, false);

    assert_hard(&with, 97_350.0, 111_000.0, 124_650.0);
    // 20,000 hard cost plus 20% contingency on it
    assert_close(with.mid_total() - plain.mid_total(), 24_000.0);
    assert_close(with.low_total() - plain.low_total(), 24_000.0);
}

// =============================================================================
// Visibility
// =============================================================================

#[test]
fn garage_conversion_hides_survey_and_solar() {
    let result = estimate(UnitTypeKey::GarageStudio, false, false);
    let visible: Vec<_> = result.visible_items().map(|item| item.kind).collect();

    assert_eq!(
        visible,
        vec![
            LineItemKind::DesignAndPermitting,
            LineItemKind::StructuralEngineering,
            LineItemKind::Title24,
            LineItemKind::HardConstruction,
            LineItemKind::Contingency,
        ]
    );
    assert_eq!(result.line_items.len(), 7);
}

#[test]
fn detached_types_show_every_line() {
    for key in &UnitTypeKey::all()[1..] {
        let result = estimate(*key, false, false);
        assert_eq!(result.visible_items().count(), 7, "{key}");
    }
}

// =============================================================================
// Properties
// =============================================================================

fn any_key() -> impl Strategy<Value = UnitTypeKey> {
    prop::sample::select(UnitTypeKey::all().to_vec())
}

proptest! {
    #[test]
    fn bands_are_ordered(key in any_key(), utilities: bool, hillside: bool) {
        let result = estimate(key, utilities, hillside);
        prop_assert!(result.totals.is_ordered());
        prop_assert!(result.cost_per_area.is_ordered());
        for item in &result.line_items {
            prop_assert!(item.amounts().is_ordered(), "{:?}", item.kind);
        }
    }

    #[test]
    fn totals_are_the_sum_of_all_lines(key in any_key(), utilities: bool, hillside: bool) {
        let result = estimate(key, utilities, hillside);
        let mid: f64 = result.line_items.iter().map(|item| item.mid).sum();
        let low: f64 = result.line_items.iter().map(|item| item.low).sum();
        prop_assert!((mid - result.mid_total()).abs() < TOLERANCE);
        prop_assert!((low - result.low_total()).abs() < TOLERANCE);
    }

    #[test]
    fn cost_per_area_divides_by_nominal_area(key in any_key(), utilities: bool, hillside: bool) {
        let result = estimate(key, utilities, hillside);
        let area = Catalog::get(key).area;
        prop_assert!((result.cost_per_area_high() * area - result.high_total()).abs() < 1e-3);
    }

    #[test]
    fn utilities_raise_totals_by_fixed_amount(key in any_key(), hillside: bool) {
        let unit = Catalog::get(key);
        let without = estimate(key, false, hillside);
        let with = estimate(key, true, hillside);
        let hillside_rate = if hillside { 1.25 } else { 1.0 };
        let expected = 20_000.0 * hillside_rate * (1.0 + unit.contingency_rate);
        prop_assert!((with.mid_total() - without.mid_total() - expected).abs() < 1e-3);
        prop_assert!((with.high_total() - without.high_total() - expected).abs() < 1e-3);
    }

    #[test]
    fn hillside_never_lowers_cost(key in any_key(), utilities: bool) {
        let flat = estimate(key, utilities, false);
        let slope = estimate(key, utilities, true);
        prop_assert!(slope.low_total() > flat.low_total());
        prop_assert!(slope.mid_total() > flat.mid_total());
        prop_assert!(slope.high_total() > flat.high_total());
    }

    #[test]
    fn estimates_are_deterministic(key in any_key(), utilities: bool, hillside: bool) {
        let unit = Catalog::get(key);
        let site = SiteConditions::new(utilities, hillside);
        prop_assert_eq!(
            EstimateCalculator::estimate(unit, site),
            EstimateCalculator::estimate(unit, site)
        );
    }
}
