//! Cost constants shared by every unit type. Dollars unless noted.

/// Architectural design fee before any hillside adjustment.
pub const DESIGN_COST: f64 = 10_000.0;

/// Title 24 energy calculation fee.
pub const TITLE_24_COST: f64 = 500.0;

/// Separate water and gas meters.
pub const UTILITIES_COST: f64 = 20_000.0;

/// Multiplier applied to design and hard construction costs on a slope.
pub const HILLSIDE_RATE: f64 = 1.25;

/// Cost per square foot for the first `INITIAL_AREA_CUTOFF` square feet.
pub const INITIAL_AREA_COST: f64 = 350.0;

/// Cost per square foot beyond `INITIAL_AREA_CUTOFF`.
pub const ADDL_AREA_COST: f64 = 300.0;

/// Square feet billed at `INITIAL_AREA_COST`.
pub const INITIAL_AREA_CUTOFF: f64 = 500.0;

/// Half-width of the low/high band around the mid estimate (±15%).
pub const LOW_HIGH_RANGE: f64 = 0.15;
