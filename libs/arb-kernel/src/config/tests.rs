//! Tests covering kernel tolerance behavior.

use super::*;

#[test]
fn default_matches_constants() {
    let tol = Tolerance::default();
    assert_eq!(tol.dist, DIST_TOLERANCE);
    assert_eq!(tol.perp, PERP_TOLERANCE);
    assert_eq!(tol.para, 1.0 - PERP_TOLERANCE);
}

#[test]
fn builder_validates_input() {
    let err = Tolerance::new(0.0, 1.0e-6).unwrap_err();
    assert_eq!(err, ToleranceError(ConfigError::InvalidDistance(0.0)));
}

#[test]
fn builder_matches_global_snapshot() {
    let tol = Tolerance::new(0.01, 1.0e-5).unwrap();
    assert_eq!(tol, Tolerance::from_global(&GlobalConfig::new(0.01, 1.0e-5).unwrap()));
    assert_eq!(tol.dist_sq, 0.01 * 0.01);
}

#[test]
fn near_equal_is_componentwise() {
    let tol = Tolerance::default();
    let a = DVec3::new(1.0, 2.0, 3.0);
    assert!(tol.near_equal(a, a + DVec3::splat(tol.dist * 0.5)));
    assert!(!tol.near_equal(a, a + DVec3::new(0.0, tol.dist * 2.0, 0.0)));
}

#[test]
fn near_zero_uses_distance_tolerance() {
    let tol = Tolerance::new(0.01, 1.0e-6).unwrap();
    assert!(tol.near_zero(0.005));
    assert!(tol.near_zero(-0.005));
    assert!(!tol.near_zero(0.02));
}
