//! UnitType definition and invariants.

use serde::Serialize;
use std::fmt;

use super::UnitTypeKey;
use crate::domain::foundation::ValidationError;

/// How the unit is built. Garage conversions reuse an existing shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstructionMethod {
    GarageConversion,
    DetachedNewBuild,
}

impl fmt::Display for ConstructionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ConstructionMethod::GarageConversion => "Garage conversion",
            ConstructionMethod::DetachedNewBuild => "New construction",
        };
        write!(f, "{}", s)
    }
}

/// A catalog entry: the fixed parameters of one kind of ADU.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitType {
    pub key: UnitTypeKey,
    pub name: &'static str,
    pub construction: ConstructionMethod,
    /// Floor area in square feet.
    pub area: f64,
    pub permit_fee: f64,
    pub engineering_fee: f64,
    /// Zero means no boundary survey line item.
    pub survey_fee: f64,
    /// Zero means no solar line item.
    pub solar_fee: f64,
    /// Multiplier on the area-based hard construction estimate.
    pub discount_rate: f64,
    /// Share of hard construction cost reserved for contingency.
    pub contingency_rate: f64,
}

impl UnitType {
    /// Returns true if this unit must include a solar installation.
    pub fn requires_solar(&self) -> bool {
        self.solar_fee != 0.0
    }

    /// Returns true if this unit needs a boundary survey.
    pub fn requires_survey(&self) -> bool {
        self.survey_fee != 0.0
    }

    /// Checks the data-model invariants of a catalog entry.
    ///
    /// - `area > 0`
    /// - `0 < discount_rate <= 1`
    /// - `0 <= contingency_rate <= 1`
    /// - every fee is non-negative
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if !(self.area.is_finite() && self.area > 0.0) {
            return Err(ValidationError::out_of_range("area", 0.0, f64::MAX, self.area));
        }
        if !(self.discount_rate > 0.0 && self.discount_rate <= 1.0) {
            return Err(ValidationError::out_of_range(
                "discount_rate",
                0.0,
                1.0,
                self.discount_rate,
            ));
        }
        if !(0.0..=1.0).contains(&self.contingency_rate) {
            return Err(ValidationError::out_of_range(
                "contingency_rate",
                0.0,
                1.0,
                self.contingency_rate,
            ));
        }

        let fees = [
            ("permit_fee", self.permit_fee),
            ("engineering_fee", self.engineering_fee),
            ("survey_fee", self.survey_fee),
            ("solar_fee", self.solar_fee),
        ];
        for (field, fee) in fees {
            if !(fee.is_finite() && fee >= 0.0) {
                return Err(ValidationError::out_of_range(field, 0.0, f64::MAX, fee));
            }
        }

        Ok(())
    }
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
