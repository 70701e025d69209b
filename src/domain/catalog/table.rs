//! The fixed table of unit types.

use super::{CatalogError, ConstructionMethod, UnitType, UnitTypeKey};

/// Catalog entries, indexed by `UnitTypeKey::order_index`.
static UNIT_TYPES: [UnitType; 5] = [
    UnitType {
        key: UnitTypeKey::GarageStudio,
        name: "Garage conversion studio",
        construction: ConstructionMethod::GarageConversion,
        area: 400.0,
        permit_fee: 3000.0,
        engineering_fee: 1000.0,
        survey_fee: 0.0,
        solar_fee: 0.0,
        discount_rate: 0.65,
        contingency_rate: 0.2,
    },
    UnitType {
        key: UnitTypeKey::DetachedStudio,
        name: "Detached new build studio",
        construction: ConstructionMethod::DetachedNewBuild,
        area: 400.0,
        permit_fee: 4000.0,
        engineering_fee: 1500.0,
        survey_fee: 2000.0,
        solar_fee: 10000.0,
        discount_rate: 1.0,
        contingency_rate: 0.1,
    },
    UnitType {
        key: UnitTypeKey::Detached1Br,
        name: "Detached new build 1 bedroom",
        construction: ConstructionMethod::DetachedNewBuild,
        area: 600.0,
        permit_fee: 5000.0,
        engineering_fee: 2000.0,
        survey_fee: 2000.0,
        solar_fee: 15000.0,
        discount_rate: 1.0,
        contingency_rate: 0.1,
    },
    UnitType {
        key: UnitTypeKey::Detached2Br,
        name: "Detached new build 2 bedroom",
        construction: ConstructionMethod::DetachedNewBuild,
        area: 750.0,
        permit_fee: 6000.0,
        engineering_fee: 2500.0,
        survey_fee: 2000.0,
        solar_fee: 17500.0,
        discount_rate: 1.0,
        contingency_rate: 0.1,
    },
    UnitType {
        key: UnitTypeKey::Detached3Br,
        name: "Detached new build 3 bedroom",
        construction: ConstructionMethod::DetachedNewBuild,
        area: 900.0,
        permit_fee: 8000.0,
        engineering_fee: 3000.0,
        survey_fee: 2000.0,
        solar_fee: 20000.0,
        discount_rate: 1.0,
        contingency_rate: 0.1,
    },
];

/// Read-only access to the unit type table.
///
/// The table is process-wide constant data; there are no mutation
/// operations.
pub struct Catalog;

impl Catalog {
    /// Returns every entry paired with its key, in display order.
    pub fn list_types() -> Vec<(UnitTypeKey, &'static UnitType)> {
        UnitTypeKey::all()
            .iter()
            .map(|key| (*key, Self::get(*key)))
            .collect()
    }

    /// Returns the entry for a key. Total over `UnitTypeKey`.
    pub fn get(key: UnitTypeKey) -> &'static UnitType {
        &UNIT_TYPES[key.order_index()]
    }

    /// Resolves an untrusted string key.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnknownType` if `key` is not one of the
    /// five catalog keys.
    pub fn lookup(key: &str) -> Result<&'static UnitType, CatalogError> {
        let key: UnitTypeKey = key.parse()?;
        Ok(Self::get(key))
    }
}
