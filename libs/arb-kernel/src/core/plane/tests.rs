//! Plane fitting and intersection tests.

use super::*;
use approx::assert_relative_eq;

fn tol() -> Tolerance {
    Tolerance::default()
}

/// Right-hand rule orientation and offset.
#[test]
fn test_from_points_orientation() {
    let p = Plane::from_points(
        DVec3::new(0.0, 0.0, 2.0),
        DVec3::new(1.0, 0.0, 2.0),
        DVec3::new(0.0, 1.0, 2.0),
        &tol(),
    )
    .unwrap();
    assert_relative_eq!(p.normal.z, 1.0);
    assert_relative_eq!(p.offset, 2.0);

    let q = Plane::from_points(
        DVec3::new(0.0, 0.0, 2.0),
        DVec3::new(0.0, 1.0, 2.0),
        DVec3::new(1.0, 0.0, 2.0),
        &tol(),
    )
    .unwrap();
    assert!(q.approx_eq(&p.flipped(), &tol()));
}

/// Identical or collinear points never produce a zero or NaN normal.
#[test]
fn test_from_points_rejects_degenerate() {
    let a = DVec3::new(1.0, 1.0, 1.0);
    assert!(Plane::from_points(a, a, a, &tol()).is_none());
    assert!(Plane::from_points(a, a, DVec3::ZERO, &tol()).is_none());
    assert!(Plane::from_points(DVec3::ZERO, DVec3::X, DVec3::X * 3.0, &tol()).is_none());
}

#[test]
fn test_through_point() {
    let p = Plane::through_point(DVec3::new(0.0, 0.0, 4.0), DVec3::new(5.0, 5.0, 1.5)).unwrap();
    assert_eq!(p.normal, DVec3::Z);
    assert_relative_eq!(p.offset, 1.5);
    assert!(Plane::through_point(DVec3::ZERO, DVec3::ONE).is_none());
}

#[test]
fn test_signed_distance() {
    let p = Plane::new(DVec3::Z, 1.0);
    assert_relative_eq!(p.signed_distance(DVec3::new(3.0, 4.0, 3.0)), 2.0);
    assert_relative_eq!(p.signed_distance(DVec3::ZERO), -1.0);
}

/// Line parameter is measured in units of the (unnormalized) direction.
#[test]
fn test_intersect_line() {
    let p = Plane::new(DVec3::Z, 4.0);
    let t = p.intersect_line(DVec3::ZERO, DVec3::new(0.0, 0.0, 2.0), &tol()).unwrap();
    assert_relative_eq!(t, 2.0);
    assert!(p.intersect_line(DVec3::ZERO, DVec3::X, &tol()).is_none());
    assert!(p.intersect_line(DVec3::ZERO, DVec3::ZERO, &tol()).is_none());
}

#[test]
fn test_intersect_three_parallel() {
    let a = Plane::new(DVec3::X, 0.0);
    let b = Plane::new(DVec3::X, 1.0);
    let c = Plane::new(DVec3::Y, 0.0);
    assert!(Plane::intersect_three(&a, &b, &c).is_none());
}

#[test]
fn test_intersect_three_oblique() {
    let a = Plane::through_point(DVec3::new(1.0, 1.0, 0.0), DVec3::new(1.0, 0.0, 0.0)).unwrap();
    let b = Plane::new(DVec3::Y, 0.0);
    let c = Plane::new(DVec3::Z, 0.5);
    let p = Plane::intersect_three(&a, &b, &c).unwrap();
    assert_relative_eq!(p.x, 1.0, epsilon = 1e-12);
    assert_relative_eq!(p.y, 0.0, epsilon = 1e-12);
    assert_relative_eq!(p.z, 0.5, epsilon = 1e-12);
}

/// Offsets compare within the distance tolerance.
#[test]
fn test_approx_eq_offset_tolerance() {
    let p = Plane::new(DVec3::Z, 1.0);
    assert!(p.approx_eq(&Plane::new(DVec3::Z, 1.0 + tol().dist * 0.5), &tol()));
    assert!(!p.approx_eq(&Plane::new(DVec3::Z, 1.0 + tol().dist * 2.0), &tol()));
    assert!(!p.approx_eq(&Plane::new(-DVec3::Z, -1.0), &tol()));
}
