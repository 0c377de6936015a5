//! Tests for one- and two-dimensional sweeps
//!
//! These tests verify that:
//! - Every grid point equals a direct evaluation with that field substituted
//! - Elasticity picks the nearest point and takes a forward difference
//! - Margin maps agree with sensitivity curves along a row
//! - The breakeven locus zeroes the margin at every row

use crate::analysis::{
    AxisRange, SweepAxis, breakeven_locus, elasticity_at, linear_space, sweep_1d, sweep_2d,
};
use crate::error::AnalysisError;
use crate::model::{InputField, ScenarioInputs, ValidatedInputs};
use crate::profit::evaluate;

fn base() -> ValidatedInputs {
    ScenarioInputs::default().validate()
}

fn sale_range(step_count: usize) -> AxisRange {
    AxisRange::new(SweepAxis::SalePrice, 2_000.0, 6_000.0, step_count)
}

fn purchase_range(step_count: usize) -> AxisRange {
    AxisRange::new(SweepAxis::PurchasePrice, 2_000.0, 6_000.0, step_count)
}

// ============================================================================
// Sensitivity curves
// ============================================================================

#[test]
fn test_curve_points_match_direct_evaluation() {
    let base = base();
    let curve = sweep_1d(&base, &sale_range(81)).unwrap();

    assert_eq!(curve.len(), 81);
    assert_eq!(curve.axis, SweepAxis::SalePrice);
    for (value, result) in curve.points() {
        let direct = evaluate(&base.with_field(InputField::SalePrice, value));
        assert_eq!(*result, direct, "mismatch at sale price {value}");
    }
}

#[test]
fn test_sale_price_curve_is_increasing() {
    let curve = sweep_1d(&base(), &sale_range(41)).unwrap();
    let margins = curve.net_margins();
    for pair in margins.windows(2) {
        assert!(pair[1] > pair[0]);
    }
}

#[test]
fn test_curve_on_every_axis_is_finite() {
    let base = base();
    for axis in SweepAxis::ALL {
        let range = AxisRange::new(axis, 0.0, 500.0, 11);
        let curve = sweep_1d(&base, &range).unwrap();
        assert_eq!(curve.len(), 11);
        assert!(
            curve.results.iter().all(|r| r.is_finite()),
            "non-finite result sweeping {axis}"
        );
    }
}

#[test]
fn test_single_point_curve() {
    let range = AxisRange::new(SweepAxis::FeedPricePerTon, 70_000.0, 90_000.0, 1);
    let curve = sweep_1d(&base(), &range).unwrap();
    assert_eq!(curve.values, vec![70_000.0]);
    assert_eq!(curve.elasticity_at(80_000.0), Some(0.0));
}

#[test]
fn test_empty_range_is_rejected() {
    let err = sweep_1d(&base(), &sale_range(0)).unwrap_err();
    assert_eq!(err, AnalysisError::EmptyGrid { count: 0 });
}

// ============================================================================
// Elasticity
// ============================================================================

#[test]
fn test_sale_price_elasticity_is_exit_weight() {
    // Net margin is linear in sale price with slope equal to the exit weight
    let base = base();
    let curve = sweep_1d(&base, &sale_range(81)).unwrap();
    let slope = curve.elasticity_at(base.sale_price()).unwrap();
    assert!((slope - base.exit_weight()).abs() < 1e-6, "slope {slope}");
}

#[test]
fn test_purchase_price_elasticity_is_minus_purchase_weight() {
    let base = base();
    let curve = sweep_1d(&base, &purchase_range(60)).unwrap();
    let slope = curve.elasticity_at(3_000.0).unwrap();
    assert!((slope + base.purchase_weight()).abs() < 1e-6, "slope {slope}");
}

#[test]
fn test_elasticity_ties_pick_first_point() {
    let xs = [0.0, 10.0, 20.0];
    let ys = [0.0, 100.0, 400.0];
    // 5.0 is equidistant from 0 and 10: the first wins, slope to the next point
    assert_eq!(elasticity_at(&xs, &ys, 5.0), Some(10.0));
    assert_eq!(elasticity_at(&xs, &ys, 15.0), Some(30.0));
}

#[test]
fn test_elasticity_at_last_point_is_zero() {
    let xs = [0.0, 10.0, 20.0];
    let ys = [0.0, 100.0, 400.0];
    assert_eq!(elasticity_at(&xs, &ys, 1_000.0), Some(0.0));
}

#[test]
fn test_elasticity_below_grid_uses_first_step() {
    let xs = [0.0, 10.0, 20.0];
    let ys = [0.0, 100.0, 400.0];
    assert_eq!(elasticity_at(&xs, &ys, -50.0), Some(10.0));
}

#[test]
fn test_elasticity_rejects_bad_series() {
    assert_eq!(elasticity_at(&[], &[], 1.0), None);
    assert_eq!(elasticity_at(&[1.0, 2.0], &[1.0], 1.0), None);
}

#[test]
fn test_elasticity_repeated_grid_value_is_finite() {
    let xs = [1.0, 1.0];
    let ys = [0.0, 5.0];
    let slope = elasticity_at(&xs, &ys, 1.0).unwrap();
    assert!(slope.is_finite());
    assert!(slope > 0.0);
}

// ============================================================================
// Margin maps
// ============================================================================

#[test]
fn test_map_cells_match_direct_evaluation() {
    let base = base();
    let map = sweep_2d(&base, &purchase_range(7), &sale_range(9)).unwrap();

    assert_eq!(map.margins.shape(), &[7, 9]);
    for (r, &purchase) in map.row_values.iter().enumerate() {
        for (c, &sale) in map.col_values.iter().enumerate() {
            let direct = evaluate(
                &base
                    .with_field(InputField::PurchasePrice, purchase)
                    .with_field(InputField::SalePrice, sale),
            );
            assert_eq!(map.get(r, c), Some(direct.net_margin));
        }
    }
    assert_eq!(map.get(7, 0), None);
    assert_eq!(map.get(0, 9), None);
}

#[test]
fn test_map_row_matches_curve() {
    let base = base();
    let rows = purchase_range(5);
    let cols = sale_range(17);
    let map = sweep_2d(&base, &rows, &cols).unwrap();

    for (r, &purchase) in map.row_values.iter().enumerate() {
        let row_base = base.with_field(InputField::PurchasePrice, purchase);
        let curve = sweep_1d(&row_base, &cols).unwrap();
        assert_eq!(map.margins.row(r).unwrap(), curve.net_margins().as_slice());
    }
}

#[test]
fn test_map_default_dashboard_shape() {
    let map = sweep_2d(&base(), &purchase_range(60), &sale_range(81)).unwrap();
    assert_eq!(map.margins.len(), 60 * 81);
    assert_eq!(map.margins.rows().count(), 60);
    assert!(map.margins.data().iter().all(|m| m.is_finite()));

    let share = map.profitable_share();
    assert!(share > 0.0 && share < 1.0, "share {share}");
}

#[test]
fn test_map_rejects_duplicate_axis() {
    let err = sweep_2d(&base(), &sale_range(3), &sale_range(4)).unwrap_err();
    assert_eq!(err, AnalysisError::DuplicateAxis(SweepAxis::SalePrice));
}

#[test]
fn test_map_rejects_empty_axis() {
    let err = sweep_2d(&base(), &purchase_range(0), &sale_range(4)).unwrap_err();
    assert_eq!(err, AnalysisError::EmptyGrid { count: 0 });
}

#[test]
fn test_map_over_weights() {
    let rows = AxisRange::new(SweepAxis::PurchaseWeight, 150.0, 250.0, 3);
    let cols = AxisRange::new(SweepAxis::ExitWeight, 150.0, 500.0, 8);
    let map = sweep_2d(&base(), &rows, &cols).unwrap();
    assert!(map.margins.data().iter().all(|m| m.is_finite()));
    let (lo, hi) = map.margins.min_max().unwrap();
    assert!(lo < hi);
}

// ============================================================================
// Breakeven locus
// ============================================================================

#[test]
fn test_locus_zeroes_margin_on_every_row() {
    let base = base();
    let rows = linear_space(2_000.0, 6_000.0, 60).unwrap();
    let locus = breakeven_locus(&base, SweepAxis::PurchasePrice, &rows);

    assert_eq!(locus.len(), rows.len());
    for (&purchase, &sale) in rows.iter().zip(&locus) {
        let margin = evaluate(
            &base
                .with_field(InputField::PurchasePrice, purchase)
                .with_field(InputField::SalePrice, sale),
        )
        .net_margin;
        assert!(margin.abs() < 1e-6, "margin {margin} at purchase {purchase}");
    }
}

#[test]
fn test_locus_slope_is_weight_ratio() {
    let base = base();
    let locus = breakeven_locus(&base, SweepAxis::PurchasePrice, &[3_000.0, 3_100.0]);
    let slope = (locus[1] - locus[0]) / 100.0;
    let expected = base.purchase_weight() / base.exit_weight();
    assert!((slope - expected).abs() < 1e-9);
}

#[test]
fn test_locus_separates_profit_from_loss() {
    let base = base();
    let map = sweep_2d(&base, &purchase_range(12), &sale_range(41)).unwrap();
    let locus = breakeven_locus(&base, map.row_axis, &map.row_values);

    for (r, &threshold) in locus.iter().enumerate() {
        for (c, &sale) in map.col_values.iter().enumerate() {
            let margin = map.get(r, c).unwrap();
            if sale > threshold + 1e-6 {
                assert!(margin > 0.0);
            } else if sale < threshold - 1e-6 {
                assert!(margin < 0.0);
            }
        }
    }
}
