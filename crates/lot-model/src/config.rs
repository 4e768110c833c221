//! Per-product traceability configuration.

use serde::{Deserialize, Serialize};

use lot_format::validate_format;

use crate::enums::{ExpiryCalculationMethod, TraceabilityLevel};

/// Default lot number format for products with no configuration yet.
pub const DEFAULT_LOT_FORMAT: &str = "LOT-{YYYY}-{SEQ:6}";

/// Traceability settings attached to a product.
///
/// Mirrors the persisted key-value record; persistence itself lives in
/// the surrounding service layer, this type only carries and validates
/// the values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceabilityConfig {
    pub lot_number_format: String,
    pub traceability_level: TraceabilityLevel,
    pub expiry_calculation_method: ExpiryCalculationMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard_batch_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_batch_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_batch_size: Option<u32>,
    /// Days subtracted from the earliest ingredient expiry under the
    /// rolling method.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_buffer_days: Option<u32>,
    #[serde(default)]
    pub gs1_lot_encoding_enabled: bool,
    #[serde(default)]
    pub gs1_expiry_encoding_enabled: bool,
    #[serde(default)]
    pub gs1_sscc_enabled: bool,
}

impl Default for TraceabilityConfig {
    fn default() -> Self {
        Self {
            lot_number_format: DEFAULT_LOT_FORMAT.to_string(),
            traceability_level: TraceabilityLevel::Lot,
            expiry_calculation_method: ExpiryCalculationMethod::FixedDays,
            standard_batch_size: None,
            min_batch_size: None,
            max_batch_size: None,
            processing_buffer_days: None,
            gs1_lot_encoding_enabled: false,
            gs1_expiry_encoding_enabled: false,
            gs1_sscc_enabled: false,
        }
    }
}

/// Outcome of validating a configuration record before it is persisted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl TraceabilityConfig {
    /// Validate the record. Persistence is gated on `valid` upstream.
    ///
    /// Runs the lot format validator and checks the batch-size ordering
    /// `min <= standard <= max` for whichever bounds are present.
    pub fn validate(&self) -> ConfigReport {
        let mut errors = validate_format(&self.lot_number_format).errors;

        for (field, value) in [
            ("standard_batch_size", self.standard_batch_size),
            ("min_batch_size", self.min_batch_size),
            ("max_batch_size", self.max_batch_size),
        ] {
            if value == Some(0) {
                errors.push(format!("{field} must be at least 1"));
            }
        }
        if let (Some(min), Some(max)) = (self.min_batch_size, self.max_batch_size)
            && min > max
        {
            errors.push(format!(
                "min_batch_size ({min}) exceeds max_batch_size ({max})"
            ));
        }
        if let (Some(min), Some(standard)) = (self.min_batch_size, self.standard_batch_size)
            && min > standard
        {
            errors.push(format!(
                "standard_batch_size ({standard}) is below min_batch_size ({min})"
            ));
        }
        if let (Some(standard), Some(max)) = (self.standard_batch_size, self.max_batch_size)
            && standard > max
        {
            errors.push(format!(
                "standard_batch_size ({standard}) exceeds max_batch_size ({max})"
            ));
        }

        if self.processing_buffer_days.is_some()
            && self.expiry_calculation_method != ExpiryCalculationMethod::Rolling
        {
            errors.push(format!(
                "processing_buffer_days only applies to the rolling expiry method (method is {})",
                self.expiry_calculation_method
            ));
        }

        ConfigReport {
            valid: errors.is_empty(),
            errors,
        }
    }
}
