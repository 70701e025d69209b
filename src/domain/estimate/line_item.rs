//! Line items of a cost breakdown.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::CostRange;

/// The seven line items, in the order they appear in a breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineItemKind {
    BoundarySurvey,
    DesignAndPermitting,
    StructuralEngineering,
    Title24,
    SolarInstallation,
    HardConstruction,
    Contingency,
}

impl LineItemKind {
    /// Returns all kinds in breakdown order.
    pub fn all() -> &'static [LineItemKind] {
        &[
            LineItemKind::BoundarySurvey,
            LineItemKind::DesignAndPermitting,
            LineItemKind::StructuralEngineering,
            LineItemKind::Title24,
            LineItemKind::SolarInstallation,
            LineItemKind::HardConstruction,
            LineItemKind::Contingency,
        ]
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            LineItemKind::BoundarySurvey => "Boundary survey",
            LineItemKind::DesignAndPermitting => "Designs and permitting fees",
            LineItemKind::StructuralEngineering => "Structural engineering report",
            LineItemKind::Title24 => "Title 24 energy calculations",
            LineItemKind::SolarInstallation => "Solar installation",
            LineItemKind::HardConstruction => "Hard construction costs",
            LineItemKind::Contingency => "Contingency",
        }
    }

    /// Returns the explanation shown alongside the line.
    pub fn description(&self) -> &'static str {
        match self {
            LineItemKind::BoundarySurvey => {
                "A land survey that outlines the boundaries of the parcel. It proves the \
                 property complies with zoning regulations and local ordinances, and \
                 confirms your ownership of the parcel."
            }
            LineItemKind::DesignAndPermitting => {
                "A full set of architectural plans and the permit application fees. Cities \
                 may also charge fees tied to new construction, such as a school district \
                 fee or an energy surcharge; these vary from city to city."
            }
            LineItemKind::StructuralEngineering => {
                "Confirms that the building plans meet the state's building code and \
                 safety requirements."
            }
            LineItemKind::Title24 => {
                "Estimates the unit's energy usage and confirms the plans meet the state's \
                 energy efficiency requirements for new construction."
            }
            LineItemKind::SolarInstallation => {
                "New construction ADUs are typically required to install solar panels \
                 (garage conversions are exempt). Panels on the primary dwelling can also \
                 meet this requirement."
            }
            LineItemKind::HardConstruction => {
                "Labor, building materials, appliances, fixtures and finishes, HVAC, and \
                 utilities."
            }
            LineItemKind::Contingency => {
                "Money set aside to cover unexpected costs that arise during construction."
            }
        }
    }
}

impl fmt::Display for LineItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One row of a cost breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub kind: LineItemKind,
    pub label: String,
    pub low: f64,
    pub mid: f64,
    pub high: f64,
    /// False when the line is omitted from display (a zero fixed fee).
    pub visible: bool,
}

impl LineItem {
    /// Creates a line item that is always shown.
    pub fn new(kind: LineItemKind, amounts: CostRange) -> Self {
        Self {
            kind,
            label: kind.label().to_string(),
            low: amounts.low,
            mid: amounts.mid,
            high: amounts.high,
            visible: true,
        }
    }

    /// Creates a fixed-fee line item that is hidden when the fee is zero.
    pub fn optional_fee(kind: LineItemKind, fee: f64) -> Self {
        Self {
            visible: fee != 0.0,
            ..Self::new(kind, CostRange::flat(fee))
        }
    }

    pub fn amounts(&self) -> CostRange {
        CostRange::new(self.low, self.mid, self.high)
    }

    pub fn description(&self) -> &'static str {
        self.kind.description()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_has_seven_kinds_in_order() {
        let all = LineItemKind::all();
        assert_eq!(all.len(), 7);
        assert_eq!(all[0], LineItemKind::BoundarySurvey);
        assert_eq!(all[4], LineItemKind::SolarInstallation);
        assert_eq!(all[6], LineItemKind::Contingency);
    }

    #[test]
    fn every_kind_has_label_and_description() {
        for kind in LineItemKind::all() {
            assert!(!kind.label().is_empty());
            assert!(!kind.description().is_empty());
        }
    }

    #[test]
    fn new_is_visible_and_uses_kind_label() {
        let item = LineItem::new(LineItemKind::Title24, CostRange::flat(500.0));
        assert!(item.visible);
        assert_eq!(item.label, "Title 24 energy calculations");
        assert_eq!(item.amounts(), CostRange::flat(500.0));
    }

    #[test]
    fn optional_fee_hidden_when_zero() {
        let item = LineItem::optional_fee(LineItemKind::SolarInstallation, 0.0);
        assert!(!item.visible);
        assert_eq!(item.mid, 0.0);
    }

    #[test]
    fn optional_fee_visible_when_nonzero() {
        let item = LineItem::optional_fee(LineItemKind::BoundarySurvey, 2000.0);
        assert!(item.visible);
        assert_eq!(item.amounts(), CostRange::flat(2000.0));
    }

    #[test]
    fn kind_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&LineItemKind::HardConstruction).unwrap(),
            "\"hard_construction\""
        );
    }
}
