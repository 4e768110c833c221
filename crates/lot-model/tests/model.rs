//! Tests for lot-model types.

use lot_model::{
    ExpiryCalculationMethod, Ingredient, ShelfLifePolicy, TraceabilityConfig, TraceabilityLevel,
    estimate_shelf_life,
};

#[test]
fn config_serializes_with_snake_case_enums() {
    let config = TraceabilityConfig {
        traceability_level: TraceabilityLevel::Serial,
        expiry_calculation_method: ExpiryCalculationMethod::FixedDays,
        ..TraceabilityConfig::default()
    };
    let json = serde_json::to_string(&config).expect("serialize config");
    assert!(json.contains("\"serial\""));
    assert!(json.contains("\"fixed_days\""));
    assert!(json.contains("LOT-{YYYY}-{SEQ:6}"));

    let round: TraceabilityConfig = serde_json::from_str(&json).expect("deserialize config");
    assert_eq!(round, config);
}

#[test]
fn config_deserializes_with_absent_optionals() {
    let json = r#"{
        "lot_number_format": "{PROD}-{YYMMDD}-{SEQ:4}",
        "traceability_level": "batch",
        "expiry_calculation_method": "rolling",
        "processing_buffer_days": 7
    }"#;
    let config: TraceabilityConfig = serde_json::from_str(json).expect("deserialize config");
    assert_eq!(config.traceability_level, TraceabilityLevel::Batch);
    assert_eq!(config.processing_buffer_days, Some(7));
    assert_eq!(config.standard_batch_size, None);
    assert!(!config.gs1_sscc_enabled);
    assert!(config.validate().valid);
}

#[test]
fn config_validation_collects_all_errors() {
    let config = TraceabilityConfig {
        lot_number_format: "NO_PLACEHOLDERS".to_string(),
        min_batch_size: Some(0),
        processing_buffer_days: Some(3),
        ..TraceabilityConfig::default()
    };
    let report = config.validate();
    assert!(!report.valid);
    assert!(report.errors.len() >= 3);
}

#[test]
fn shelf_life_report_carries_the_driving_ingredient() {
    let estimate = estimate_shelf_life(
        &[
            Ingredient::new("Flour", 180),
            Ingredient::new("Yeast", 14),
            Ingredient::new("Butter", 60),
        ],
        ShelfLifePolicy {
            safety_buffer_percent: 20,
            processing_impact_days: 2,
        },
    )
    .expect("estimate");
    assert_eq!(estimate.shortest_ingredient, "Yeast");
    assert_eq!(estimate.shortest_ingredient_days, 14);
    assert_eq!(estimate.safety_buffer_days, 3);
    assert_eq!(estimate.shelf_life_days, 9);
}

#[test]
fn missing_shelf_life_error_lists_every_offender() {
    let ingredients = vec![
        Ingredient {
            name: "Glaze".to_string(),
            shelf_life_days: None,
        },
        Ingredient::new("Flour", 180),
        Ingredient {
            name: "Filling".to_string(),
            shelf_life_days: None,
        },
    ];
    let error = estimate_shelf_life(&ingredients, ShelfLifePolicy::default())
        .expect_err("missing shelf lives");
    let message = error.to_string();
    assert!(message.contains("Glaze"));
    assert!(message.contains("Filling"));
}
