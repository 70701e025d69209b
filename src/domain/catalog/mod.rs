//! Catalog module - the five unit types an estimate can be made for.
//!
//! # Components
//!
//! - `UnitTypeKey` - Closed set of catalog keys, parseable from untrusted input
//! - `UnitType` - Area, fixed fees, and rates for one kind of ADU
//! - `Catalog` - Static lookup table in display order
//! - `constants` - Cost constants shared by every unit type

pub mod constants;
mod errors;
mod table;
mod unit_type;
mod unit_type_key;

pub use table::Catalog;
pub use errors::CatalogError;
pub use unit_type::{ConstructionMethod, UnitType};
pub use unit_type_key::UnitTypeKey;
