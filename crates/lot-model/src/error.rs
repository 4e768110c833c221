use thiserror::Error;

#[derive(Debug, Error)]
pub enum TraceabilityError {
    #[error("product has no ingredients to derive a shelf life from")]
    EmptyBillOfMaterials,
    #[error("ingredients missing a declared shelf life: {}", .0.join(", "))]
    MissingIngredientShelfLife(Vec<String>),
    #[error("rolling expiry requires at least one ingredient expiry date")]
    MissingIngredientExpiry,
    #[error("manual expiry method requires an operator-entered date")]
    ManualExpiry,
    #[error("date arithmetic out of range while computing best-before date")]
    DateOutOfRange,
}

pub type Result<T> = std::result::Result<T, TraceabilityError>;
