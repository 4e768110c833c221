//! Type-safe enumerations for traceability master data.
//!
//! These concepts are stored as snake_case strings in the configuration
//! record; the enums give them compile-time type safety.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Granularity at which a product run is identified and traced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceabilityLevel {
    /// One identifier per production lot (the default).
    Lot,
    /// One identifier per batch within a lot.
    Batch,
    /// One identifier per unit.
    Serial,
}

impl TraceabilityLevel {
    /// Canonical name as stored in the configuration record.
    pub fn as_str(&self) -> &'static str {
        match self {
            TraceabilityLevel::Lot => "lot",
            TraceabilityLevel::Batch => "batch",
            TraceabilityLevel::Serial => "serial",
        }
    }
}

impl fmt::Display for TraceabilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TraceabilityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lot" => Ok(TraceabilityLevel::Lot),
            "batch" => Ok(TraceabilityLevel::Batch),
            "serial" => Ok(TraceabilityLevel::Serial),
            other => Err(format!("unknown traceability level: {other}")),
        }
    }
}

/// How a lot's best-before date is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryCalculationMethod {
    /// Production date plus a fixed shelf life in days.
    FixedDays,
    /// Earliest ingredient expiry minus a processing buffer.
    Rolling,
    /// Entered by an operator at lot creation.
    Manual,
}

impl ExpiryCalculationMethod {
    /// Canonical name as stored in the configuration record.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpiryCalculationMethod::FixedDays => "fixed_days",
            ExpiryCalculationMethod::Rolling => "rolling",
            ExpiryCalculationMethod::Manual => "manual",
        }
    }
}

impl fmt::Display for ExpiryCalculationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExpiryCalculationMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed_days" => Ok(ExpiryCalculationMethod::FixedDays),
            "rolling" => Ok(ExpiryCalculationMethod::Rolling),
            "manual" => Ok(ExpiryCalculationMethod::Manual),
            other => Err(format!("unknown expiry calculation method: {other}")),
        }
    }
}
