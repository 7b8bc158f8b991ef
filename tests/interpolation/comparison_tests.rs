use std::f64::consts::PI;

use tabula::interpolation::errors::InterpolationError;
use tabula::interpolation::report::MethodOutcome;
use tabula::interpolation::traits::DEFAULT_SAMPLES;
use tabula::interpolation::{
    compare, evaluate, interpolate, Algorithm, ComparisonCfg, DataSet, Interpolant,
    InterpolationCfg, Interpolator,
};

type TabulaResult = Result<(), InterpolationError>;

const AGREE: f64 = 1e-6;

fn cubic(x: f64) -> f64 {
    2.0 * x * x * x - 3.0 * x * x + x - 5.0
}

#[test]
fn every_method_reproduces_quadratic() -> TabulaResult {
    let x = [0.0, 1.0, 2.0, 3.0, 4.0];
    let y = [0.0, 1.0, 4.0, 9.0, 16.0];

    for algorithm in Algorithm::ALL {
        let got = interpolate(algorithm, &x, &y, 2.5)?;
        assert!((got - 6.25).abs() < AGREE, "{algorithm}: {got}");
    }
    Ok(())
}

#[test]
fn every_method_agrees_with_lagrange_on_cubic() -> TabulaResult {
    let x = [-1.0, -0.5, 0.0, 0.5, 1.0];
    let y: Vec<f64> = x.iter().map(|&v| cubic(v)).collect();

    for xq in [-1.3, -0.75, -0.2, 0.1, 0.6, 1.4] {
        let reference = interpolate(Algorithm::Lagrange, &x, &y, xq)?;
        assert!((reference - cubic(xq)).abs() < AGREE);

        for algorithm in Algorithm::ALL {
            let got = interpolate(algorithm, &x, &y, xq)?;
            assert!((got - reference).abs() < AGREE, "{algorithm} at {xq}: {got} vs {reference}");
        }
    }
    Ok(())
}

#[test]
fn sine_lagrange_vs_newton() -> TabulaResult {
    let x = [0.0, PI / 2.0, PI, 3.0 * PI / 2.0];
    let y = [0.0, 1.0, 0.0, -1.0];
    let xq = PI / 4.0;

    let lagrange = interpolate(Algorithm::Lagrange, &x, &y, xq)?;
    let newton   = interpolate(Algorithm::NewtonForward, &x, &y, xq)?;

    assert!((lagrange - newton).abs() < AGREE);
    assert!((lagrange - 0.875).abs() < AGREE);
    Ok(())
}

#[test]
fn stirling_is_the_only_failure_on_two_nodes() {
    let x = [0.0, 1.0];
    let y = [1.0, 3.0];

    for algorithm in Algorithm::ALL {
        let result = interpolate(algorithm, &x, &y, 0.5);
        match algorithm {
            Algorithm::Stirling => assert!(matches!(
                result,
                Err(InterpolationError::InsufficientNodes { got: 2, need: 3, .. })
            )),
            _ => assert!(result.is_ok_and(f64::is_finite), "{algorithm}"),
        }
    }
}

#[test]
fn evaluate_many_points() -> TabulaResult {
    let x = [0.0, 1.0, 2.0, 3.0, 4.0];
    let y = [0.0, 1.0, 8.0, 27.0, 64.0];
    let x_eval = [0.5, 1.5, 2.5];

    let cfg = InterpolationCfg::new(Algorithm::GaussBackward)
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x_eval)?;

    let rep = evaluate(cfg)?;
    assert_eq!(rep.algorithm_name, "gauss_backward");
    assert_eq!(rep.n_provided, 5);
    assert_eq!(rep.n_evaluated, 3);
    for (got, want) in rep.evaluated.iter().zip([0.125, 3.375, 15.625]) {
        assert!((got - want).abs() < 1e-9);
    }
    Ok(())
}

#[test]
fn evaluate_rejects_non_uniform() -> TabulaResult {
    let x = [0.0, 1.0, 3.0];
    let y = [0.0, 1.0, 9.0];

    let cfg = InterpolationCfg::new(Algorithm::Bessel)
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&[2.0])?;
    let err = evaluate(cfg).unwrap_err();
    assert!(matches!(err, InterpolationError::NonUniformSpacing { idx: 2, .. }));

    let cfg = InterpolationCfg::new(Algorithm::Lagrange)
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&[2.0])?;
    assert!((evaluate(cfg)?.evaluated[0] - 4.0).abs() < 1e-12);
    Ok(())
}

#[test]
fn evaluate_stirling_two_nodes() -> TabulaResult {
    let cfg = InterpolationCfg::new(Algorithm::Stirling)
        .set_x(&[0.0, 1.0])?
        .set_y(&[0.0, 1.0])?;
    let err = evaluate(cfg).unwrap_err();
    assert!(matches!(err, InterpolationError::InsufficientNodes { got: 2, .. }));
    Ok(())
}

#[test]
fn evaluate_without_y() -> TabulaResult {
    let cfg = InterpolationCfg::new(Algorithm::Lagrange).set_x(&[0.0, 1.0])?;
    assert!(matches!(evaluate(cfg).unwrap_err(), InterpolationError::EmptyInput));
    Ok(())
}

#[test]
fn setters_validate() {
    let err = InterpolationCfg::new(Algorithm::Lagrange).set_x(&[1.0, 0.0, 1.0]).unwrap_err();
    assert!(matches!(err, InterpolationError::DuplicateX { .. }));

    let cfg = InterpolationCfg::new(Algorithm::Lagrange).set_x(&[0.0, 1.0, 2.0]).unwrap();
    let err = cfg.set_y(&[0.0, 1.0]).unwrap_err();
    assert!(matches!(err, InterpolationError::UnequalLength { x_len: 3, y_len: 2 }));

    let err = ComparisonCfg::new().set_x_eval(&[f64::INFINITY]).unwrap_err();
    assert!(matches!(err, InterpolationError::NonFiniteVec { idx: 0 }));

    let err = ComparisonCfg::new().set_step_rtol(-1.0).unwrap_err();
    assert!(matches!(err, InterpolationError::InvalidStepTol { .. }));
}

#[test]
fn compare_reports_every_method() -> TabulaResult {
    let x = [0.0, 1.0, 2.0, 3.0, 4.0];
    let y = [0.0, 1.0, 4.0, 9.0, 16.0];

    let cfg = ComparisonCfg::new().set_x(&x)?.set_y(&y)?.set_x_eval(&[2.5, 3.5])?;
    let report = compare(cfg)?;

    assert_eq!(report.n_provided, 5);
    assert_eq!(report.methods.len(), 7);
    for algorithm in Algorithm::ALL {
        let values = report.values(algorithm).expect("every method evaluates");
        assert!((values[0] - 6.25).abs() < AGREE, "{algorithm}");
        assert!((values[1] - 12.25).abs() < AGREE, "{algorithm}");
    }
    Ok(())
}

#[test]
fn compare_keeps_going_past_failures() -> TabulaResult {
    // non-uniform: only Lagrange survives
    let cfg = ComparisonCfg::new()
        .set_x(&[0.0, 1.0, 3.0])?
        .set_y(&[0.0, 1.0, 9.0])?
        .set_x_eval(&[2.0])?;
    let report = compare(cfg)?;
    for (algorithm, outcome) in &report.methods {
        match (algorithm, outcome) {
            (Algorithm::Lagrange, MethodOutcome::Evaluated { values }) => {
                assert!((values[0] - 4.0).abs() < 1e-12)
            }
            (Algorithm::Lagrange, _) => panic!("lagrange should evaluate"),
            (_, MethodOutcome::Failed { error }) => assert!(error.contains("non-uniform")),
            (other, _) => panic!("{other} should fail on non-uniform nodes"),
        }
    }

    // two nodes: only Stirling fails
    let cfg = ComparisonCfg::new().set_x(&[0.0, 1.0])?.set_y(&[1.0, 3.0])?.set_x_eval(&[0.25])?;
    let report = compare(cfg)?;
    assert!(report.values(Algorithm::Stirling).is_none());
    assert!(report.values(Algorithm::Bessel).is_some());
    Ok(())
}

#[test]
fn compare_serializes() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = ComparisonCfg::new().set_x(&[0.0, 1.0])?.set_y(&[1.0, 3.0])?.set_x_eval(&[0.5])?;
    let json = serde_json::to_value(compare(cfg)?)?;

    assert_eq!(json["n_provided"], 2);
    assert_eq!(json["methods"][0][0], "lagrange");
    assert_eq!(json["methods"][0][1]["status"], "evaluated");
    assert_eq!(json["methods"][5][0], "stirling");
    assert_eq!(json["methods"][5][1]["status"], "failed");
    Ok(())
}

#[test]
fn interpolant_samples_curve() -> TabulaResult {
    let data = DataSet::new(vec![0.0, 1.0, 2.0, 3.0, 4.0], vec![0.0, 1.0, 4.0, 9.0, 16.0])?;
    let curve = Interpolant::new(Algorithm::NewtonBackward, &data);

    let points = curve.sample(0.0, 4.0, 4)?;
    assert_eq!(points.len(), 5);
    for (x, y) in points {
        assert!((y - x * x).abs() < 1e-9);
    }

    let (left, right) = curve.default_range();
    assert!((left + 0.1).abs() < 1e-12 && (right - 4.1).abs() < 1e-12);
    assert_eq!(curve.sample(left, right, DEFAULT_SAMPLES)?.len(), DEFAULT_SAMPLES + 1);

    let many = curve.eval_many(&[0.5, 1.5])?;
    assert!((many[0] - 0.25).abs() < 1e-9 && (many[1] - 2.25).abs() < 1e-9);

    let err = curve.sample(1.0, 1.0, 10).unwrap_err();
    assert!(matches!(err, InterpolationError::InvalidSampleRange { .. }));
    Ok(())
}

#[test]
fn shared_across_threads() -> TabulaResult {
    let data = DataSet::new(vec![-1.0, -0.5, 0.0, 0.5, 1.0], vec![0.2, 0.9, 1.0, 0.4, -0.3])?;
    let expected: Vec<f64> = Algorithm::ALL
        .iter()
        .map(|&a| data.value(a, 0.3))
        .collect::<Result<_, _>>()?;

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                s.spawn(|| {
                    Algorithm::ALL
                        .iter()
                        .map(|&a| Interpolant::new(a, &data).eval(0.3))
                        .collect::<Result<Vec<_>, _>>()
                })
            })
            .collect();
        for handle in handles {
            let got = handle.join().expect("worker panicked").expect("valid table");
            assert_eq!(got, expected);
        }
    });
    Ok(())
}
