//! Tests for the risk grid sweep and sweep ranges.

#[cfg(test)]
mod tests {
    use crate::config::{
        BUOYANCY_RATIO_CEILING, DEFAULT_HEIGHT_MAX, DEFAULT_HEIGHT_MIN, DEFAULT_SWEEP_SAMPLES,
        DRAG_RATIO_CEILING,
    };
    use crate::risk_error::{GridAxis, InvalidGridError};
    use crate::risk_model::force_balance::evaluate_point;
    use crate::risk_model::risk_grid::*;
    use crate::risk_model::sweep::{SweepConfig, SweepRange};
    use crate::vehicle::{OperatingPoint, VehicleParams, VehicleSpec};

    fn default_field() -> RiskField {
        evaluate_sweep(&VehicleParams::default(), &SweepConfig::default()).unwrap()
    }

    // -------------------------------------------------------------------------
    // Shape and ordering
    // -------------------------------------------------------------------------

    #[test]
    fn test_shape_is_velocities_by_heights() {
        let heights = [0.1, 0.4, 0.7, 1.0, 1.3];
        let velocities = [0.5, 1.5, 3.0];
        let field = evaluate_grid(&VehicleParams::default(), &heights, &velocities).unwrap();
        assert_eq!(field.shape(), (3, 5));
        assert_eq!(field.drag_over_friction().len(), 15);
        assert_eq!(field.buoyancy_over_weight().len(), 15);
    }

    #[test]
    fn test_default_sweep_shape() {
        let field = default_field();
        assert_eq!(field.shape(), (DEFAULT_SWEEP_SAMPLES, DEFAULT_SWEEP_SAMPLES));
    }

    #[test]
    fn test_rows_are_velocity_columns_are_height() {
        let heights = [0.3, 0.6, 0.9];
        let velocities = [1.0, 4.0];
        let field = evaluate_grid(&VehicleParams::default(), &heights, &velocities).unwrap();

        // Buoyancy ratio depends on height only: constant down each column.
        for col in 0..3 {
            assert_eq!(field.buoyancy_ratio_at(0, col), field.buoyancy_ratio_at(1, col));
        }
        // Drag ratio grows with velocity down a column.
        assert!(field.drag_ratio_at(1, 1) > field.drag_ratio_at(0, 1));
        assert_eq!(field.drag_row(1).len(), 3);
        assert_eq!(field.drag_row(1)[2], field.drag_ratio_at(1, 2));
    }

    // -------------------------------------------------------------------------
    // Agreement with evaluate_point
    // -------------------------------------------------------------------------

    #[test]
    fn test_every_node_matches_point_evaluation() {
        let params = VehicleParams::new(VehicleSpec {
            mass: 1_400.0,
            friction_coefficient: 0.7,
            ..Default::default()
        })
        .unwrap();
        let sweep = SweepConfig::with_samples(25);
        let heights = sweep.heights.values();
        let velocities = sweep.velocities.values();
        let field = evaluate_grid(&params, &heights, &velocities).unwrap();

        for (row, &v) in velocities.iter().enumerate() {
            for (col, &h) in heights.iter().enumerate() {
                let fb = evaluate_point(&params, OperatingPoint::new(h, v));
                let d = field.drag_ratio_at(row, col);
                let b = field.buoyancy_ratio_at(row, col);
                assert!((d - fb.drag_over_friction()).abs() < 1e-12);
                assert!((b - fb.buoyancy_over_weight()).abs() < 1e-12);
                // Below the ceilings, ratio > 1 agrees with the boolean flags.
                if fb.floats {
                    assert!(b > 1.0, "floats but ratio {b} at h={h}");
                } else {
                    assert!(b <= 1.0 + 1e-9, "does not float but ratio {b} at h={h}");
                }
                if fb.slides && fb.friction_force > 0.0 {
                    assert!(d > 1.0 - 1e-9, "slides but ratio {d} at h={h} v={v}");
                }
                if !fb.slides {
                    assert!(d <= 1.0 + 1e-9, "stable but ratio {d} at h={h} v={v}");
                }
            }
        }
    }

    // -------------------------------------------------------------------------
    // Clamp bounds
    // -------------------------------------------------------------------------

    #[test]
    fn test_values_within_clamp_bounds() {
        let light = VehicleParams::new(VehicleSpec {
            mass: 600.0,
            friction_coefficient: 0.1,
            ..Default::default()
        })
        .unwrap();
        for params in [VehicleParams::default(), light] {
            let field = evaluate_sweep(&params, &SweepConfig::default()).unwrap();
            for &d in field.drag_over_friction() {
                assert!(d.is_finite() && (0.0..=DRAG_RATIO_CEILING).contains(&d));
            }
            for &b in field.buoyancy_over_weight() {
                assert!(b.is_finite() && (0.0..=BUOYANCY_RATIO_CEILING).contains(&b));
            }
        }
    }

    #[test]
    fn test_ceilings_reached_for_light_vehicle_in_deep_fast_water() {
        let light = VehicleParams::new(VehicleSpec {
            mass: 600.0,
            ..Default::default()
        })
        .unwrap();
        let field = evaluate_grid(&light, &[1.8], &[6.0]).unwrap();
        assert_eq!(field.drag_ratio_at(0, 0), DRAG_RATIO_CEILING);
        assert_eq!(field.buoyancy_ratio_at(0, 0), BUOYANCY_RATIO_CEILING);
    }

    #[test]
    fn test_overflowing_samples_stay_finite() {
        let params = VehicleParams::default();

        // v² overflows while the body is still dry.
        let dry = evaluate_grid(&params, &[0.1], &[1e200]).unwrap();
        assert_eq!(dry.drag_ratio_at(0, 0), 0.0);

        // v² overflows with the body wet: saturates at the ceiling.
        let wet = evaluate_grid(&params, &[1.0], &[1e200]).unwrap();
        assert_eq!(wet.drag_ratio_at(0, 0), DRAG_RATIO_CEILING);

        // Buoyancy and the drag factor overflow in still water.
        let deep = evaluate_grid(&params, &[1e307], &[0.0]).unwrap();
        assert_eq!(deep.drag_ratio_at(0, 0), 0.0);
        assert_eq!(deep.buoyancy_ratio_at(0, 0), BUOYANCY_RATIO_CEILING);

        for field in [dry, wet, deep] {
            assert!(field.drag_over_friction().iter().all(|d| d.is_finite()));
            assert!(field.buoyancy_over_weight().iter().all(|b| b.is_finite()));
        }
    }

    // -------------------------------------------------------------------------
    // Degenerate grids
    // -------------------------------------------------------------------------

    #[test]
    fn test_empty_heights_rejected() {
        let err = evaluate_grid(&VehicleParams::default(), &[], &[1.0]).unwrap_err();
        assert_eq!(err, InvalidGridError::EmptyHeights);
    }

    #[test]
    fn test_empty_velocities_rejected() {
        let err = evaluate_grid(&VehicleParams::default(), &[0.5], &[]).unwrap_err();
        assert_eq!(err, InvalidGridError::EmptyVelocities);
    }

    #[test]
    fn test_non_finite_sample_rejected() {
        let err = evaluate_grid(&VehicleParams::default(), &[0.5, f64::NAN], &[1.0]).unwrap_err();
        assert!(matches!(
            err,
            InvalidGridError::InvalidRange {
                axis: GridAxis::Height,
                ..
            }
        ));
    }

    #[test]
    fn test_zero_sample_sweep_rejected() {
        let mut sweep = SweepConfig::default();
        sweep.velocities.samples = 0;
        let err = evaluate_sweep(&VehicleParams::default(), &sweep).unwrap_err();
        assert_eq!(err, InvalidGridError::EmptyVelocities);
    }

    #[test]
    fn test_reversed_sweep_rejected() {
        let mut sweep = SweepConfig::default();
        sweep.heights = SweepRange::new(1.0, 0.5, 10);
        let err = evaluate_sweep(&VehicleParams::default(), &sweep).unwrap_err();
        assert!(matches!(
            err,
            InvalidGridError::InvalidRange {
                axis: GridAxis::Height,
                ..
            }
        ));
    }

    // -------------------------------------------------------------------------
    // Sweep ranges
    // -------------------------------------------------------------------------

    #[test]
    fn test_sweep_values_inclusive_endpoints() {
        let values = SweepConfig::default().heights.values();
        assert_eq!(values.len(), DEFAULT_SWEEP_SAMPLES);
        assert_eq!(values[0], DEFAULT_HEIGHT_MIN);
        assert_eq!(values[DEFAULT_SWEEP_SAMPLES - 1], DEFAULT_HEIGHT_MAX);
        assert!(values.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_single_sample_is_start() {
        let range = SweepRange::new(0.4, 1.2, 1);
        assert_eq!(range.values(), vec![0.4]);
        assert_eq!(range.step(), 0.0);
    }

    #[test]
    fn test_sweep_step() {
        let range = SweepRange::new(0.0, 1.0, 5);
        assert!((range.step() - 0.25).abs() < 1e-12);
        assert_eq!(range.values(), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    // -------------------------------------------------------------------------
    // Marker lookup and summary
    // -------------------------------------------------------------------------

    #[test]
    fn test_nearest_cell_for_operating_point() {
        let heights = [0.2, 0.4, 0.6, 0.8];
        let velocities = [1.0, 2.0, 3.0];
        let field = evaluate_grid(&VehicleParams::default(), &heights, &velocities).unwrap();
        assert_eq!(field.nearest_cell(OperatingPoint::new(0.55, 2.2)), Some((1, 2)));
        assert_eq!(field.nearest_cell(OperatingPoint::new(0.2, 1.0)), Some((0, 0)));
        assert_eq!(field.nearest_cell(OperatingPoint::new(0.9, 2.0)), None);
        assert_eq!(field.nearest_cell(OperatingPoint::new(0.5, 0.5)), None);
    }

    #[test]
    fn test_summary_fractions() {
        let field = default_field();
        let summary = field.summary();
        assert!((0.0..=1.0).contains(&summary.sliding_fraction));
        assert!((0.0..=1.0).contains(&summary.floating_fraction));
        assert!(summary.sliding_fraction > 0.0, "fast deep water should slide");
        assert!(summary.floating_fraction > 0.0, "1.8 m of water floats 3 t");
        assert!(summary.max_drag_over_friction <= DRAG_RATIO_CEILING);
        assert!(summary.max_buoyancy_over_weight <= BUOYANCY_RATIO_CEILING);
    }
}
