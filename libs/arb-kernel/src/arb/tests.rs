//! # Vertex Store Tests

use super::*;
use approx::assert_relative_eq;

fn tol() -> Tolerance {
    Tolerance::default()
}

fn unit_cube() -> Arb {
    Arb::from_box(DVec3::ZERO, DVec3::ONE)
}

#[test]
fn test_from_box_layout() {
    let arb = Arb::from_box(DVec3::new(1.0, 2.0, 3.0), DVec3::ZERO);
    assert_eq!(arb.pt[0], DVec3::ZERO);
    assert_eq!(arb.pt[1], DVec3::new(1.0, 0.0, 0.0));
    assert_eq!(arb.pt[3], DVec3::new(0.0, 2.0, 0.0));
    assert_eq!(arb.pt[4], DVec3::new(0.0, 0.0, 3.0));
    assert_eq!(arb.pt[6], DVec3::new(1.0, 2.0, 3.0));
    assert_eq!(arb.arb_type(&tol()).unwrap(), ArbType::Arb8);
}

#[test]
fn test_constructors_fill_duplicates() {
    let arb = samples::arb4();
    assert_eq!(arb.pt[3], arb.pt[0]);
    assert!(arb.pt[5..].iter().all(|p| *p == arb.pt[4]));

    let arb = samples::arb6();
    assert_eq!(arb.pt[5], arb.pt[4]);
    assert_eq!(arb.pt[7], arb.pt[6]);

    let arb = samples::arb7();
    assert_eq!(arb.pt[7], arb.pt[4]);
}

#[test]
fn test_real_vertices_round_trip() {
    for arb_type in ArbType::ALL {
        let arb = samples::sample(arb_type);
        let real = arb.real_vertices(arb_type);
        assert_eq!(real.len(), arb_type.vertex_count());
        assert_eq!(Arb::from_real_vertices(arb_type, &real).unwrap(), arb);
    }
}

#[test]
fn test_from_real_vertices_wrong_count() {
    let err = Arb::from_real_vertices(ArbType::Arb6, &[DVec3::ZERO; 5]).unwrap_err();
    assert!(matches!(err, ArbError::InvalidParameter(_)));
}

#[test]
fn test_arb_type_rejects_non_canonical() {
    let mut arb = unit_cube();
    arb.pt[1] = arb.pt[0];
    assert_eq!(
        arb.arb_type(&tol()).unwrap_err(),
        ArbError::NonCanonicalLayout {
            arb_type: ArbType::Arb7
        }
    );
}

#[test]
fn test_face_planes_count() {
    for arb_type in ArbType::ALL {
        let planes = samples::sample(arb_type).face_planes(&tol()).unwrap();
        assert_eq!(planes.len(), arb_type.face_count());
    }
}

#[test]
fn test_bounding_box() {
    let bb = samples::arb8().bounding_box();
    assert_eq!(bb.min, DVec3::ZERO);
    assert_eq!(bb.max, DVec3::new(4.0, 4.0, 2.0));
    assert_eq!(bb.center(), DVec3::new(2.0, 2.0, 1.0));
    assert_eq!(bb.extent(), DVec3::new(4.0, 4.0, 2.0));
    assert!(bb.contains(DVec3::new(4.0, 0.0, 1.0)));
    assert!(!bb.contains(DVec3::new(4.1, 0.0, 1.0)));
}

#[test]
fn test_centroid() {
    let c = unit_cube().centroid(&tol()).unwrap();
    assert_relative_eq!(c.x, 0.5);
    assert_relative_eq!(c.y, 0.5);
    assert_relative_eq!(c.z, 0.5);

    // duplicates do not weigh in
    let c = samples::arb4().centroid(&tol()).unwrap();
    assert_relative_eq!(c.x, 0.5);
    assert_relative_eq!(c.z, 0.5);
}

#[test]
fn test_volume() {
    assert_relative_eq!(unit_cube().volume(&tol()), 1.0, epsilon = 1e-12);
    // frustum: h/3 * (A1 + A2 + sqrt(A1 * A2))
    assert_relative_eq!(samples::arb8().volume(&tol()), 56.0 / 3.0, epsilon = 1e-12);
    assert_relative_eq!(samples::arb6().volume(&tol()), 4.0, epsilon = 1e-12);
    assert_relative_eq!(samples::arb5().volume(&tol()), 8.0 / 3.0, epsilon = 1e-12);
    assert_relative_eq!(samples::arb4().volume(&tol()), 4.0 / 3.0, epsilon = 1e-12);
}

#[test]
fn test_edges() {
    assert_eq!(unit_cube().edges(&tol()).unwrap().len(), 12);
    assert_eq!(samples::arb5().edges(&tol()).unwrap().len(), 8);
    assert_eq!(samples::arb4().edges(&tol()).unwrap().len(), 6);
}

#[test]
fn test_describe() {
    let text = samples::arb4().describe(&tol()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "ARB4");
    assert_eq!(lines[2], "\t2 (2, 0, 0)");
    assert_eq!(lines[4], "\t4 (0, 0, 2)");
    assert_eq!(
        text,
        "ARB4\n\t1 (0, 0, 0)\n\t2 (2, 0, 0)\n\t3 (0, 2, 0)\n\t4 (0, 0, 2)\n"
    );
}

#[test]
fn test_nearest_edge() {
    let cube = unit_cube();
    let view = DMat4::IDENTITY;
    // edge 12 and edge 56 project onto the same segment; the first row wins
    assert_eq!(cube.nearest_edge(&view, DVec2::new(0.5, -0.1), &tol()).unwrap(), 0);
    assert_eq!(cube.nearest_edge(&view, DVec2::new(1.2, 0.5), &tol()).unwrap(), 1);

    // rotated a quarter turn about y, edge 15 projects onto the x axis
    let side = DMat4::from_rotation_y(std::f64::consts::FRAC_PI_2);
    assert_eq!(cube.nearest_edge(&side, DVec2::new(0.5, 0.0), &tol()).unwrap(), 4);
}

#[test]
fn test_nearest_edge_point_rows() {
    let arb = samples::arb4();
    let row = arb
        .nearest_edge(&DMat4::IDENTITY, DVec2::new(1.9, 0.1), &tol())
        .unwrap();
    assert_eq!(row, 1);
}
