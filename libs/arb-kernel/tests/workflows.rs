//! End-to-end edit and query sequences driven through the public API.

use approx::assert_relative_eq;
use arb_kernel::arb::planes::check_edges;
use arb_kernel::edit::{self, Axis};
use arb_kernel::{
    classify, Aabb, Arb, ArbError, ArbType, BoxClass, ElementMove, ErrorKind, FacePlanes, PreparedArb,
    Ray, Tolerance,
};
use glam::DVec3;

fn tol() -> Tolerance {
    Tolerance::default()
}

fn tetrahedron() -> Arb {
    Arb::arb4([
        DVec3::ZERO,
        DVec3::new(2.0, 0.0, 0.0),
        DVec3::new(0.0, 2.0, 0.0),
        DVec3::new(0.0, 0.0, 2.0),
    ])
}

#[test]
fn extruded_tetrahedron_becomes_a_wedge() {
    let tol = tol();
    for face in [123, 124, 134, 234] {
        let mut arb = tetrahedron();
        let mut planes = FacePlanes::default();
        edit::extrude_face(&mut arb, &mut planes, face, 1.0, &tol).unwrap();

        let c = classify(&arb.pt, &tol).unwrap();
        assert_eq!(c.arb_type, ArbType::Arb6, "face {face}");
        assert!(c.is_canonical());
        assert_eq!(planes.len(), 5);
        check_edges(&arb.pt, ArbType::Arb6, &tol).unwrap();
        assert!(arb.volume(&tol) > 0.0);
    }
}

/// Build a box, stretch it, relabel it and query it with rays.
#[test]
fn box_edit_session() {
    let tol = tol();
    let mut arb = Arb::from_box(DVec3::ZERO, DVec3::ONE);
    let mut planes = FacePlanes::default();

    edit::extrude_face(&mut arb, &mut planes, 1234, 4.0, &tol).unwrap();
    assert_relative_eq!(arb.volume(&tol), 4.0, epsilon = 1e-12);

    edit::move_face(&mut arb, &mut planes, 1, DVec3::new(0.0, 0.0, 2.0), &tol).unwrap();
    assert_relative_eq!(arb.volume(&tol), 2.0, epsilon = 1e-12);

    edit::permute(&mut arb, &mut planes, "567", &tol).unwrap();
    assert_eq!(arb.pt[0], DVec3::new(0.0, 0.0, 2.0));
    assert_relative_eq!(arb.volume(&tol), 2.0, epsilon = 1e-12);

    let solid = PreparedArb::prepare(&arb, &tol).unwrap();
    let seg = solid
        .shoot(&Ray::new(DVec3::new(0.5, 0.5, -10.0), DVec3::Z))
        .unwrap();
    assert_relative_eq!(seg.entry.distance, 10.0, epsilon = 1e-12);
    assert_relative_eq!(seg.exit.distance, 12.0, epsilon = 1e-12);
    let normal = solid.hit_normal(&seg.entry).unwrap();
    assert!(normal.distance(-DVec3::Z) < 1e-12);
    assert_eq!(
        solid.classify_box(&Aabb::new(DVec3::splat(0.2), DVec3::splat(0.8))),
        BoxClass::Inside
    );
}

#[test]
fn rejected_edits_leave_the_store_alone() {
    let tol = tol();
    let original = Arb::from_box(DVec3::ZERO, DVec3::ONE);
    let mut planes = FacePlanes::default();

    let mut arb = original;
    let err = edit::edit_element(
        &mut arb,
        &mut planes,
        12,
        ElementMove::To(DVec3::ONE),
        &tol,
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    assert_eq!(arb, original);

    let err = edit::extrude_face(&mut arb, &mut planes, 1357, 1.0, &tol).unwrap_err();
    assert!(matches!(err, ArbError::InvalidFace { .. }));
    assert_eq!(arb, original);

    let err = edit::mirror_face(&mut arb, &mut planes, 1234, Axis::X, &tol).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Degenerate);
    assert_eq!(arb, original);

    assert!(edit::permute(&mut arb, &mut planes, "19", &tol).is_err());
    assert_eq!(arb, original);
    assert!(planes.is_empty());
}

#[test]
fn ray_misses_and_parallel_rays() {
    let tol = tol();
    let solid = PreparedArb::prepare(&Arb::from_box(DVec3::ZERO, DVec3::ONE), &tol).unwrap();

    assert!(solid
        .shoot(&Ray::new(DVec3::new(2.0, 2.0, -5.0), DVec3::Z))
        .is_none());
    // parallel to the x faces, outside them
    assert!(solid
        .shoot(&Ray::new(DVec3::new(1.5, 0.5, -5.0), DVec3::Z))
        .is_none());
    // pointing away from the solid still reports the segment behind the origin
    let seg = solid
        .shoot(&Ray::new(DVec3::new(0.5, 0.5, 5.0), DVec3::Z))
        .unwrap();
    assert!(seg.exit.distance < 0.0);
}
