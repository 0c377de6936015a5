//! Tests for the combined dashboard analysis

use crate::analysis::{AxisRange, SweepAxis, SweepSettings, aggregate_population, analyze};
use crate::config::ScenarioBuilder;
use crate::error::AnalysisError;
use crate::model::ScenarioInputs;
use crate::profit::evaluate;

#[test]
fn test_analyze_defaults() {
    let inputs = ScenarioInputs::default();
    let settings = SweepSettings::default();
    let analysis = analyze(&inputs, &settings).unwrap();

    assert_eq!(analysis.per_head, evaluate(&inputs.validate()));
    assert_eq!(analysis.curve.len(), 81);
    assert_eq!(analysis.map.margins.shape(), &[60, 81]);
    assert_eq!(analysis.breakeven_locus.len(), 60);
    assert!((analysis.elasticity - inputs.exit_weight).abs() < 1e-6);
}

#[test]
fn test_analyze_population_matches_aggregate() {
    let inputs = ScenarioBuilder::new().herd(250, 4.0).build();
    let analysis = analyze(&inputs, &SweepSettings::default()).unwrap();

    let expected = aggregate_population(&analysis.per_head, 250.0, 4.0);
    assert_eq!(analysis.population, expected);
    assert!((analysis.population.realized_heads - 240.0).abs() < 1e-9);
}

#[test]
fn test_analyze_applies_daily_gain_floor() {
    let inputs = ScenarioInputs {
        average_daily_gain: 0.0,
        ..Default::default()
    };
    let analysis = analyze(&inputs, &SweepSettings::default()).unwrap();

    assert_eq!(analysis.inputs.average_daily_gain(), 0.01);
    // 260 kg at 0.01 kg/day
    assert!((analysis.per_head.days_on_feed - 26_000.0).abs() < 1e-6);
    assert!(analysis.per_head.is_finite());
}

#[test]
fn test_analyze_with_custom_axes() {
    let settings = SweepSettings {
        curve: AxisRange::new(SweepAxis::FeedPricePerTon, 40_000.0, 90_000.0, 11),
        map_rows: AxisRange::new(SweepAxis::AverageDailyGain, 0.8, 1.6, 5),
        map_cols: AxisRange::new(SweepAxis::SalePrice, 3_000.0, 4_000.0, 6),
        min_daily_gain: 0.01,
    };
    assert_eq!(settings.total_points(), 11 + 30 + 5);

    let inputs = ScenarioInputs::default();
    let analysis = analyze(&inputs, &settings).unwrap();
    assert_eq!(analysis.curve.axis, SweepAxis::FeedPricePerTon);
    assert_eq!(analysis.map.row_axis, SweepAxis::AverageDailyGain);

    // Feed price slope: minus gain times conversion per kg
    let gained = inputs.exit_weight - inputs.purchase_weight;
    let expected = -gained * inputs.feed_conversion_ratio / 1_000.0;
    assert!((analysis.elasticity - expected).abs() < 1e-6);

    // Better gain means fewer days of yard fee, so a lower breakeven
    for pair in analysis.breakeven_locus.windows(2) {
        assert!(pair[1] < pair[0]);
    }
}

#[test]
fn test_analyze_propagates_grid_errors() {
    let settings = SweepSettings {
        map_cols: AxisRange::new(SweepAxis::PurchasePrice, 1.0, 2.0, 3),
        ..Default::default()
    };
    let err = analyze(&ScenarioInputs::default(), &settings).unwrap_err();
    assert_eq!(err, AnalysisError::DuplicateAxis(SweepAxis::PurchasePrice));
}

#[test]
fn test_analysis_serializes() {
    let settings = SweepSettings {
        curve: AxisRange::new(SweepAxis::SalePrice, 3_000.0, 4_000.0, 3),
        map_rows: AxisRange::new(SweepAxis::PurchasePrice, 2_500.0, 3_500.0, 2),
        map_cols: AxisRange::new(SweepAxis::SalePrice, 3_000.0, 4_000.0, 2),
        min_daily_gain: 0.01,
    };
    let analysis = analyze(&ScenarioInputs::default(), &settings).unwrap();
    let json = serde_json::to_value(&analysis).unwrap();

    assert!(json["perHead"]["netMargin"].is_number());
    assert_eq!(json["curve"]["axis"], "sale-price");
    assert_eq!(json["map"]["margins"]["shape"], serde_json::json!([2, 2]));
}
