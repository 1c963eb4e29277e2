//! Cross-condition checks of the engine's public surface.

use std::sync::Arc;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use beam_core::analyzers::two_span_unequal::TwoSpanStatics;
use beam_core::{
    load_request, save_report, AnalysisRequest, Beam, BeamAnalysis, CalcError, Equation,
    Material, Quantity, SIMPLY_SUPPORTED, TWO_SPAN_UNEQUAL,
};

fn steel() -> Arc<Material> {
    Arc::new(Material::new("Steel", [("E", 200_000.0), ("I", 0.0001)]))
}

/// (beam, load, condition, interior support positions)
fn cases() -> Vec<(Beam, f64, &'static str, Vec<f64>)> {
    vec![
        (Beam::single_span(4.0, steel()), 10.0, SIMPLY_SUPPORTED, vec![]),
        (Beam::single_span(7.5, steel()), -3.0, SIMPLY_SUPPORTED, vec![]),
        (Beam::new(3.0, 5.0, steel()), 5.0, TWO_SPAN_UNEQUAL, vec![3.0]),
        (Beam::new(6.0, 2.0, steel()), 12.0, TWO_SPAN_UNEQUAL, vec![6.0]),
    ]
}

fn y(eq: &Equation, x: f64) -> f64 {
    eq.evaluate(x).expect("inside domain").y
}

#[test]
fn shear_is_derivative_of_moment() {
    let engine = BeamAnalysis::new();
    for (beam, load, condition, interior) in cases() {
        let m = engine.get_bending_moment(&beam, load, condition).unwrap().equation;
        let v = engine.get_shear_force(&beam, load, condition).unwrap().equation;
        let total = m.domain_end();
        let h = 1e-5;

        for i in 1..100 {
            let x = total * i as f64 / 100.0;
            if interior.iter().any(|s| (x - s).abs() < 10.0 * h) {
                continue;
            }
            let slope = (y(&m, x + h) - y(&m, x - h)) / (2.0 * h);
            assert_abs_diff_eq!(slope, y(&v, x), epsilon = 1e-4);
        }
    }
}

#[test]
fn zero_moment_and_deflection_at_end_supports() {
    let engine = BeamAnalysis::new();
    for (beam, load, condition, interior) in cases() {
        let m = engine.get_bending_moment(&beam, load, condition).unwrap().equation;
        let d = engine.get_deflection(&beam, load, condition).unwrap().equation;
        let total = engine.total_span(&beam, condition).unwrap();

        assert_abs_diff_eq!(y(&m, 0.0), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(y(&m, total), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(y(&d, 0.0), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(y(&d, total), 0.0, epsilon = 1e-9);
        for s in interior {
            assert_abs_diff_eq!(y(&d, s), 0.0, epsilon = 1e-9);
        }
    }
}

#[test]
fn interior_moment_matches_three_moment_solution() {
    let beam = Beam::new(3.0, 5.0, steel());
    let m = BeamAnalysis::new()
        .get_bending_moment(&beam, 5.0, TWO_SPAN_UNEQUAL)
        .unwrap();
    let statics = TwoSpanStatics::solve(3.0, 5.0, 5.0);
    assert_relative_eq!(m.at(3.0).unwrap().y, statics.m1, epsilon = 1e-12);
}

#[test]
fn none_outside_domain_and_finite_inside() {
    let engine = BeamAnalysis::new();
    for (beam, load, condition, _) in cases() {
        for quantity in Quantity::ALL {
            let eq = engine.get(quantity, &beam, load, condition).unwrap().equation;
            let total = eq.domain_end();

            for x in [-1e-9, -1.0, total + 1e-9, total + 10.0, f64::NAN] {
                assert!(eq.evaluate(x).is_none(), "{quantity} at {x} should be None");
            }
            for p in eq.sample(0.05) {
                assert!(p.y.is_finite(), "{quantity} at {} not finite", p.x);
            }
        }
    }
}

#[test]
fn unregistered_condition_fails_for_all_operations() {
    let engine = BeamAnalysis::new();
    let beam = Beam::single_span(4.0, steel());
    for quantity in Quantity::ALL {
        let err = engine.get(quantity, &beam, 10.0, "fixed-fixed").unwrap_err();
        assert!(matches!(err, CalcError::InvalidCondition { .. }));
        assert!(err.is_recoverable());
    }
}

#[test]
fn simply_supported_scenario() {
    let beam = Beam::single_span(4.0, steel());
    let engine = BeamAnalysis::new();
    let m = engine.get_bending_moment(&beam, 10.0, SIMPLY_SUPPORTED).unwrap();
    let v = engine.get_shear_force(&beam, 10.0, SIMPLY_SUPPORTED).unwrap();

    assert_relative_eq!(m.at(2.0).unwrap().y, 10.0 * 16.0 / 8.0);
    assert_relative_eq!(v.at(0.0).unwrap().y, 20.0);
    assert_relative_eq!(v.at(4.0).unwrap().y, -20.0);
}

#[test]
fn two_span_shear_discontinuity_equals_interior_reaction() {
    let beam = Beam::new(3.0, 5.0, steel());
    let engine = BeamAnalysis::new();
    let v = engine.get_shear_force(&beam, 5.0, TWO_SPAN_UNEQUAL).unwrap();
    let reactions = engine.reactions(&beam, 5.0, TWO_SPAN_UNEQUAL).unwrap();

    let at_support = v.at(3.0).unwrap().y;
    let jump = at_support - v.at(3.0 - 1e-10).unwrap().y;
    assert_relative_eq!(jump, reactions[1], epsilon = 1e-6);
    assert_relative_eq!(at_support, v.at(3.0 + 1e-10).unwrap().y, epsilon = 1e-6);
    assert_relative_eq!(reactions.iter().sum::<f64>(), 5.0 * 8.0, epsilon = 1e-9);
}

#[test]
fn request_file_to_report_file() {
    let dir = std::env::temp_dir();
    let request_path = dir.join(format!("beam_core_it_{}_request.json", std::process::id()));
    let report_path = dir.join(format!("beam_core_it_{}_report.json", std::process::id()));

    let request = AnalysisRequest::new(Beam::new(3.0, 5.0, steel()), 5.0, TWO_SPAN_UNEQUAL);
    std::fs::write(&request_path, serde_json::to_string(&request).unwrap()).unwrap();

    let loaded = load_request(&request_path).unwrap();
    assert_eq!(loaded, request);

    let report = loaded.run(&BeamAnalysis::new()).unwrap();
    save_report(&report, &report_path).unwrap();
    let back = beam_core::file_io::load_report(&report_path).unwrap();
    assert_eq!(back.id, report.id);
    assert_eq!(back.reactions.len(), 3);

    let _ = std::fs::remove_file(&request_path);
    let _ = std::fs::remove_file(&report_path);
}
