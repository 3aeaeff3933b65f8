mod common;

use common::init_logging;
use pretty_assertions::assert_eq;
use testresult::TestResult;
use vector2::{NormalizeError, Vector2};

#[test]
fn normalize_mutates_in_place_and_returns_receiver() {
    init_logging();
    let mut v = Vector2::new(0.0, 5.0);
    let returned = *v.normalize();
    assert_eq!(v, Vector2::new(0.0, 1.0));
    assert_eq!(returned, v);
}

#[test]
fn normalizing_zero_yields_nan_without_panic() {
    init_logging();
    let n = Vector2::ZERO.normalized();
    assert!(n.x.is_nan(), "x: expected NaN, got {}", n.x);
    assert!(n.y.is_nan(), "y: expected NaN, got {}", n.y);

    let mut v = Vector2::from_ints(0, 0);
    let returned = *v.normalize();
    assert!(v.is_nan());
    assert!(returned.is_nan());
}

#[test]
fn try_normalized_reports_degenerate_vectors() -> TestResult {
    init_logging();
    let unit = Vector2::new(-4.0, 3.0).try_normalized()?;
    assert_eq!(unit, Vector2::new(-0.8, 0.6));

    let err = Vector2::ZERO.try_normalized().unwrap_err();
    assert_eq!(err, NormalizeError::ZeroLength);
    assert_eq!(err.to_string(), "can not normalize a zero length vector");

    let err = Vector2::new(f32::NAN, f32::NAN).try_normalized().unwrap_err();
    assert_eq!(err, NormalizeError::NonFinite);
    Ok(())
}
