//! Tests for verdicts, pass/fail lines, and the parameter footer.

#[cfg(test)]
mod tests {
    use crate::risk_model::diagnostics::*;
    use crate::risk_model::force_balance::evaluate_point;
    use crate::vehicle::{OperatingPoint, VehicleParams};

    #[test]
    fn test_verdict_from_flags() {
        assert_eq!(Verdict::from_flags(false, false), Verdict::Stable);
        assert_eq!(Verdict::from_flags(false, true), Verdict::Slides);
        assert_eq!(Verdict::from_flags(true, false), Verdict::Floats);
        assert_eq!(Verdict::from_flags(true, true), Verdict::FloatsAndSlides);
        assert!(Verdict::Stable.is_safe());
        assert!(!Verdict::Slides.is_safe());
    }

    #[test]
    fn test_reference_point_is_stable() {
        let fb = evaluate_point(&VehicleParams::default(), OperatingPoint::default());
        let diagnosis = Diagnosis::from_balance(&fb);
        assert_eq!(diagnosis.verdict, Verdict::Stable);
        assert!(diagnosis.flotation.passed);
        assert!(diagnosis.sliding.passed);
        assert!(diagnosis.flotation.margin() > 0.0);
        assert!(diagnosis.sliding.margin() > 0.0);

        let lines = diagnosis.lines();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Stable"), "got: {}", lines[0]);
        assert!(lines[1].starts_with("PASS flotation"), "got: {}", lines[1]);
        assert!(lines[2].starts_with("PASS sliding"), "got: {}", lines[2]);
    }

    #[test]
    fn test_deep_fast_water_fails_both_checks() {
        let fb = evaluate_point(&VehicleParams::default(), OperatingPoint::new(1.2, 3.0));
        let diagnosis = Diagnosis::from_balance(&fb);
        assert_eq!(diagnosis.verdict, Verdict::FloatsAndSlides);
        assert!(diagnosis.flotation.margin() < 0.0);

        let lines = diagnosis.lines();
        assert!(lines[1].starts_with("FAIL flotation"), "got: {}", lines[1]);
        assert!(lines[2].starts_with("FAIL sliding"), "got: {}", lines[2]);
    }

    #[test]
    fn test_shallow_fast_water_slides_only() {
        // 0.5 m of water at 5.5 m/s: drag 6173 N against 5117 N of friction.
        let fb = evaluate_point(&VehicleParams::default(), OperatingPoint::new(0.5, 5.5));
        let diagnosis = Diagnosis::from_balance(&fb);
        assert_eq!(diagnosis.verdict, Verdict::Slides);
    }

    #[test]
    fn test_params_summary_format() {
        let text = params_summary(&VehicleParams::default(), OperatingPoint::new(0.55, 2.0));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Water height: 0.55 m  |  Velocity: 2.00 m/s");
        assert_eq!(lines[1], "Mass: 3000 kg  |  \u{3bc}=0.50  Cd=1.00");
    }
}
