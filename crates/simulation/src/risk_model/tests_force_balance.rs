//! Tests for the single-point force balance.

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    use crate::config::{BUOYANCY_RATIO_CEILING, DRAG_RATIO_CEILING};
    use crate::risk_model::force_balance::*;
    use crate::vehicle::{OperatingPoint, VehicleParams, VehicleSpec};

    fn reference() -> VehicleParams {
        VehicleParams::default()
    }

    fn assert_close(actual: f64, expected: f64, tol: f64, what: &str) {
        assert!(
            (actual - expected).abs() <= tol,
            "{what}: expected {expected} +/- {tol}, got {actual}"
        );
    }

    // -------------------------------------------------------------------------
    // Reference scenario: 0.55 m of water flowing at 2 m/s
    // -------------------------------------------------------------------------

    #[test]
    fn test_reference_scenario_forces() {
        let fb = evaluate_point(&reference(), OperatingPoint::new(0.55, 2.0));

        assert_close(fb.submerged_height, 0.27, 1e-12, "submerged height");
        // 1000 * 9.81 * 0.27 * (4.795 * 1.855)
        assert_close(fb.buoyancy, 23_559.458_107_5, 1e-6, "buoyancy");
        assert_close(fb.weight, 29_430.0, 1e-9, "weight");
        assert_close(fb.normal_force, 5_870.541_892_5, 1e-6, "normal force");
        assert_close(fb.friction_force, 2_935.270_946_25, 1e-6, "friction");
        // 0.5 * 1.0 * 1000 * (0.27 * 1.855) * 2^2
        assert_close(fb.drag_force, 1_001.7, 1e-9, "drag");
        assert!(!fb.floats, "3 t pickup should not float in 0.55 m of water");
        assert!(!fb.slides, "1002 N of drag is below 2935 N of friction");
    }

    #[test]
    fn test_reference_scenario_matches_rounded_figures() {
        // Published hand calculation for the same scenario, rounded to ~0.2%.
        let fb = evaluate_point(&reference(), OperatingPoint::new(0.55, 2.0));
        assert!((fb.buoyancy - 23_568.0).abs() / 23_568.0 < 2e-3);
        assert!((fb.normal_force - 5_862.0).abs() / 5_862.0 < 2e-3);
        assert!((fb.friction_force - 2_931.0).abs() / 2_931.0 < 2e-3);
    }

    // -------------------------------------------------------------------------
    // Zero-submersion baseline
    // -------------------------------------------------------------------------

    #[test]
    fn test_water_below_clearance_has_no_hydrodynamic_load() {
        let params = reference();
        for h in [0.0, 0.1, 0.28] {
            let fb = evaluate_point(&params, OperatingPoint::new(h, 5.0));
            assert_eq!(fb.submerged_height, 0.0);
            assert_eq!(fb.buoyancy, 0.0);
            assert_eq!(fb.drag_force, 0.0);
            assert_eq!(fb.normal_force, params.weight());
            assert_close(
                fb.friction_force,
                params.friction_coefficient() * params.weight(),
                1e-9,
                "friction at zero submersion",
            );
            assert!(!fb.floats);
            assert!(!fb.slides);
        }
    }

    #[test]
    fn test_negative_water_height_saturates() {
        let fb = evaluate_point(&reference(), OperatingPoint::new(-1.0, 3.0));
        assert_eq!(fb.submerged_height, 0.0);
        assert_eq!(fb.buoyancy, 0.0);
        assert_eq!(fb.drag_force, 0.0);
    }

    // -------------------------------------------------------------------------
    // Flotation: normal force floors at zero
    // -------------------------------------------------------------------------

    #[test]
    fn test_deep_water_lifts_vehicle() {
        let params = reference();
        let fb = evaluate_point(&params, OperatingPoint::new(1.5, 0.5));
        assert!(fb.buoyancy > fb.weight);
        assert!(fb.floats);
        assert_eq!(fb.normal_force, 0.0);
        assert_eq!(fb.friction_force, 0.0);
        assert!(fb.slides, "any drag exceeds zero friction");
    }

    #[test]
    fn test_float_fraction_scales_buoyancy() {
        let half = VehicleParams::new(VehicleSpec {
            float_fraction: 0.5,
            ..Default::default()
        })
        .unwrap();
        let point = OperatingPoint::new(0.8, 1.0);
        let full_fb = evaluate_point(&reference(), point);
        let half_fb = evaluate_point(&half, point);
        assert_close(half_fb.buoyancy * 2.0, full_fb.buoyancy, 1e-6, "half buoyancy");
    }

    #[test]
    fn test_zero_float_fraction_never_floats() {
        let sealed_off = VehicleParams::new(VehicleSpec {
            float_fraction: 0.0,
            ..Default::default()
        })
        .unwrap();
        let fb = evaluate_point(&sealed_off, OperatingPoint::new(1.8, 0.0));
        assert_eq!(fb.buoyancy, 0.0);
        assert!(!fb.floats);
        assert_eq!(fb.normal_force, sealed_off.weight());
    }

    #[test]
    fn test_still_water_never_slides() {
        let fb = evaluate_point(&reference(), OperatingPoint::new(0.5, 0.0));
        assert_eq!(fb.drag_force, 0.0);
        assert!(!fb.slides);
    }

    // -------------------------------------------------------------------------
    // Monotonicity in water height (randomized, seeded)
    // -------------------------------------------------------------------------

    #[test]
    fn test_monotonic_in_water_height() {
        let mut rng = ChaCha8Rng::seed_from_u64(0xF100D);
        for _ in 0..500 {
            let spec = VehicleSpec {
                ground_clearance: rng.gen_range(0.0..0.5),
                mass: rng.gen_range(500.0..5000.0),
                length: rng.gen_range(2.5..6.0),
                width: rng.gen_range(1.4..2.2),
                height: rng.gen_range(1.2..2.5),
                float_fraction: rng.gen_range(0.0..=1.0),
                drag_coefficient: rng.gen_range(0.3..2.0),
                friction_coefficient: rng.gen_range(0.0..1.0),
            };
            let params = VehicleParams::new(spec).unwrap();
            let v = rng.gen_range(0.0..6.0);
            let h1 = rng.gen_range(0.0..2.0);
            let h2 = h1 + rng.gen_range(0.0..0.5);

            let low = evaluate_point(&params, OperatingPoint::new(h1, v));
            let high = evaluate_point(&params, OperatingPoint::new(h2, v));

            assert!(high.buoyancy >= low.buoyancy, "buoyancy decreased");
            assert!(high.normal_force <= low.normal_force, "normal force increased");
            assert!(high.friction_force <= low.friction_force, "friction increased");
            assert!(high.drag_force >= low.drag_force, "drag decreased");
        }
    }

    // -------------------------------------------------------------------------
    // Point risk ratios
    // -------------------------------------------------------------------------

    #[test]
    fn test_point_ratios_reference() {
        let fb = evaluate_point(&reference(), OperatingPoint::new(0.55, 2.0));
        assert_close(fb.drag_over_friction(), 1_001.7 / 2_935.270_946_25, 1e-9, "d/f");
        assert_close(fb.buoyancy_over_weight(), 23_559.458_107_5 / 29_430.0, 1e-9, "b/w");
    }

    #[test]
    fn test_ratio_clamps_at_ceilings() {
        assert_eq!(drag_over_friction(1_000.0, 0.0), DRAG_RATIO_CEILING);
        assert_eq!(buoyancy_over_weight(1e9, 1.0), BUOYANCY_RATIO_CEILING);
        assert_eq!(drag_over_friction(0.0, 0.0), 0.0);
        assert_eq!(buoyancy_over_weight(0.0, 100.0), 0.0);
    }

    #[test]
    fn test_undefined_ratio_reads_as_zero() {
        assert_eq!(drag_over_friction(f64::NAN, 10.0), 0.0);
        assert_eq!(buoyancy_over_weight(f64::NAN, 10.0), 0.0);
        assert_eq!(drag_over_friction(f64::INFINITY, 10.0), DRAG_RATIO_CEILING);
    }

    #[test]
    fn test_huge_velocity_over_dry_ground_has_no_drag() {
        let fb = evaluate_point(&reference(), OperatingPoint::new(0.1, 1e200));
        assert_eq!(fb.drag_force, 0.0);
        assert!(!fb.slides);

        let wet = evaluate_point(&reference(), OperatingPoint::new(1.0, 1e200));
        assert!(wet.drag_force.is_infinite());
        assert!(wet.slides);
    }

    #[test]
    fn test_labelled_forces_order() {
        let fb = evaluate_point(&reference(), OperatingPoint::default());
        let labels: Vec<&str> = fb.labelled_forces().iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, ["Buoyancy", "Weight", "Normal", "Friction", "Drag"]);
        assert_eq!(fb.labelled_forces()[4].1, fb.drag_force);
    }
}
