//! Shelf-life propagation and best-before dates.
//!
//! A finished product can keep no longer than its most perishable
//! ingredient: the base shelf life is the minimum of the ingredient shelf
//! lives, reduced by processing losses and a percentage safety buffer,
//! and never below one day.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::enums::ExpiryCalculationMethod;
use crate::error::{Result, TraceabilityError};

/// A bill-of-materials line relevant to shelf-life propagation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    /// Declared shelf life in days; `None` when master data is incomplete.
    pub shelf_life_days: Option<u32>,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, shelf_life_days: u32) -> Self {
        Self {
            name: name.into(),
            shelf_life_days: Some(shelf_life_days),
        }
    }
}

/// Deductions applied on top of the minimum-ingredient rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShelfLifePolicy {
    /// Safety buffer as a percentage of the shortest ingredient shelf
    /// life, rounded up to whole days.
    pub safety_buffer_percent: u32,
    /// Days lost to processing (thawing, mixing, proofing).
    pub processing_impact_days: u32,
}

/// Result of a shelf-life estimation, including the inputs that drove it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShelfLifeEstimate {
    /// Final shelf life in days, at least 1.
    pub shelf_life_days: u32,
    pub shortest_ingredient: String,
    pub shortest_ingredient_days: u32,
    pub safety_buffer_days: u32,
}

/// Estimate a product's shelf life from its ingredients.
///
/// # Errors
///
/// - [`TraceabilityError::EmptyBillOfMaterials`] when `ingredients` is empty.
/// - [`TraceabilityError::MissingIngredientShelfLife`] naming every
///   ingredient without a declared shelf life.
pub fn estimate_shelf_life(
    ingredients: &[Ingredient],
    policy: ShelfLifePolicy,
) -> Result<ShelfLifeEstimate> {
    if ingredients.is_empty() {
        return Err(TraceabilityError::EmptyBillOfMaterials);
    }

    let mut declared = Vec::with_capacity(ingredients.len());
    let mut missing = Vec::new();
    for ingredient in ingredients {
        match ingredient.shelf_life_days {
            Some(days) => declared.push((days, ingredient.name.as_str())),
            None => missing.push(ingredient.name.clone()),
        }
    }
    if !missing.is_empty() {
        return Err(TraceabilityError::MissingIngredientShelfLife(missing));
    }

    let Some(&(shortest_days, shortest_name)) = declared.iter().min_by_key(|(days, _)| *days)
    else {
        return Err(TraceabilityError::EmptyBillOfMaterials);
    };

    let safety_buffer_days = (shortest_days * policy.safety_buffer_percent).div_ceil(100);
    let shelf_life_days = shortest_days
        .saturating_sub(policy.processing_impact_days)
        .saturating_sub(safety_buffer_days)
        .max(1);

    Ok(ShelfLifeEstimate {
        shelf_life_days,
        shortest_ingredient: shortest_name.to_string(),
        shortest_ingredient_days: shortest_days,
        safety_buffer_days,
    })
}

/// Compute a lot's best-before date.
///
/// Fixed-days adds `shelf_life_days` to the production date; rolling takes
/// the earliest ingredient expiry minus `processing_buffer_days`; manual
/// always errors, the date comes from the operator.
pub fn best_before_date(
    method: ExpiryCalculationMethod,
    produced_on: NaiveDate,
    shelf_life_days: u32,
    ingredient_expiries: &[NaiveDate],
    processing_buffer_days: u32,
) -> Result<NaiveDate> {
    match method {
        ExpiryCalculationMethod::FixedDays => produced_on
            .checked_add_days(Days::new(u64::from(shelf_life_days)))
            .ok_or(TraceabilityError::DateOutOfRange),
        ExpiryCalculationMethod::Rolling => {
            let earliest = ingredient_expiries
                .iter()
                .min()
                .copied()
                .ok_or(TraceabilityError::MissingIngredientExpiry)?;
            earliest
                .checked_sub_days(Days::new(u64::from(processing_buffer_days)))
                .ok_or(TraceabilityError::DateOutOfRange)
        }
        ExpiryCalculationMethod::Manual => Err(TraceabilityError::ManualExpiry),
    }
}
