use tabula::interpolation::errors::InterpolationError;
use tabula::interpolation::{lagrange, stirling};

type TabulaResult = Result<(), InterpolationError>;

const ATOL: f64 = 1e-9;

#[inline]
fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= ATOL
}

#[test]
fn quadratic_midpoint() -> TabulaResult {
    let x = [0.0, 1.0, 2.0, 3.0, 4.0];
    let y = [0.0, 1.0, 4.0, 9.0, 16.0];
    assert!(approx_eq(stirling::value(&x, &y, 2.5)?, 6.25));
    Ok(())
}

#[test]
fn two_nodes_rejected() {
    let x = [0.0, 1.0];
    let y = [0.0, 1.0];

    let err = stirling::value(&x, &y, 0.5).unwrap_err();
    assert!(matches!(
        err,
        InterpolationError::InsufficientNodes { algorithm: "stirling", got: 2, need: 3 }
    ));
}

#[test]
fn three_nodes() -> TabulaResult {
    let x = [0.0, 1.0, 2.0];
    let y = [0.0, 1.0, 4.0];
    assert!(approx_eq(stirling::value(&x, &y, 0.5)?, 0.25));
    assert!(approx_eq(stirling::value(&x, &y, 1.8)?, 3.24));
    Ok(())
}

#[test]
fn cubic_five_nodes() -> TabulaResult {
    let x = [0.0, 1.0, 2.0, 3.0, 4.0];
    let y = [0.0, 1.0, 8.0, 27.0, 64.0];

    assert!(approx_eq(stirling::value(&x, &y, 2.5)?, 15.625));
    assert!(approx_eq(stirling::value(&x, &y, 1.3)?, 1.3 * 1.3 * 1.3));
    Ok(())
}

#[test]
fn quartic_uses_fourth_order() -> TabulaResult {
    let x = [-1.0, -0.5, 0.0, 0.5, 1.0];
    let y: Vec<f64> = x.iter().map(|&v: &f64| v.powi(4) + v.powi(3)).collect();

    for xq in [-0.3, 0.2, 0.7] {
        let got = stirling::value(&x, &y, xq)?;
        let want = lagrange::value(&x, &y, xq);
        assert!(approx_eq(got, want), "x={xq}: {got} vs {want}");
    }
    Ok(())
}

#[test]
fn four_nodes_skip_third_order() -> TabulaResult {
    // Δ³y[mid-1] does not exist for n = 4
    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [0.0, 1.0, 8.0, 27.0];
    assert!(approx_eq(stirling::value(&x, &y, 2.5)?, 16.0));
    Ok(())
}

#[test]
fn central_node_returns_its_value() -> TabulaResult {
    let x = [0.0, 0.1, 0.2, 0.3, 0.4];
    let y = [3.0, -1.0, 2.5, 7.0, 0.0];
    assert_eq!(stirling::value(&x, &y, 0.2)?, 2.5);
    Ok(())
}

#[test]
fn vanishing_first_term_ends_series() -> TabulaResult {
    // symmetric even data: the mean first difference at the center is 0,
    // so the series is considered converged before the t² term
    let x = [-2.0, -1.0, 0.0, 1.0, 2.0];
    let y = [4.0, 1.0, 0.0, 1.0, 4.0];
    assert_eq!(stirling::value(&x, &y, 0.5)?, 0.0);
    Ok(())
}
