//! ListUnitTypesHandler - Query handler for the catalog listing.

use serde::Serialize;

use crate::domain::catalog::{Catalog, ConstructionMethod, UnitTypeKey};

/// One catalog entry as shown by the listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitTypeSummary {
    pub key: UnitTypeKey,
    pub name: &'static str,
    pub construction: ConstructionMethod,
    pub area: f64,
}

/// Handler for listing unit types in display order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListUnitTypesHandler;

impl ListUnitTypesHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self) -> Vec<UnitTypeSummary> {
        Catalog::list_types()
            .into_iter()
            .map(|(key, unit)| UnitTypeSummary {
                key,
                name: unit.name,
                construction: unit.construction,
                area: unit.area,
            })
            .collect()
    }
}
