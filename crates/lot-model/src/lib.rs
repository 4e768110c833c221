//! Traceability data model: the per-product configuration record that
//! owns a lot number format, and the shelf-life rules derived from a
//! product's bill of materials.

pub mod config;
pub mod enums;
pub mod error;
pub mod shelf_life;

pub use config::{ConfigReport, DEFAULT_LOT_FORMAT, TraceabilityConfig};
pub use enums::{ExpiryCalculationMethod, TraceabilityLevel};
pub use error::{Result, TraceabilityError};
pub use shelf_life::{
    Ingredient, ShelfLifeEstimate, ShelfLifePolicy, best_before_date, estimate_shelf_life,
};
