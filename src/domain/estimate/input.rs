//! Estimator inputs.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::UnitTypeKey;

/// The two binary site conditions chosen in the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SiteConditions {
    /// Separate water and gas meters for the unit.
    pub include_utilities: bool,
    /// Home is located on a slope.
    pub on_hillside: bool,
}

impl SiteConditions {
    pub fn new(include_utilities: bool, on_hillside: bool) -> Self {
        Self {
            include_utilities,
            on_hillside,
        }
    }
}

/// A fully resolved request for an estimate.
///
/// There is no partial form of this type; every field must be chosen
/// before an estimate can be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EstimateInput {
    pub unit_type: UnitTypeKey,
    #[serde(flatten)]
    pub site: SiteConditions,
}

impl EstimateInput {
    pub fn new(unit_type: UnitTypeKey, include_utilities: bool, on_hillside: bool) -> Self {
        Self {
            unit_type,
            site: SiteConditions::new(include_utilities, on_hillside),
        }
    }

    pub fn include_utilities(&self) -> bool {
        self.site.include_utilities
    }

    pub fn on_hillside(&self) -> bool {
        self.site.on_hillside
    }
}
