//! Consistency checks between the per-shape tables.

use super::*;

fn label_set(arb_type: ArbType, face: usize) -> Vec<usize> {
    let mut labels = face_labels(arb_type, face);
    labels.sort_unstable();
    labels
}

/// Every face has at least three distinct vertices and the right count of
/// faces exists per shape.
#[test]
fn test_faces_are_polygons() {
    for arb_type in ArbType::ALL {
        assert_eq!(faces(arb_type).len(), arb_type.face_count());
        for face in 0..arb_type.face_count() {
            let n = face_labels(arb_type, face).len();
            assert!((3..=4).contains(&n), "{arb_type} face {face} has {n} vertices");
        }
    }
}

/// The three planes that define a slot all contain that slot's vertex.
#[test]
fn test_vertex_planes_contain_vertex() {
    for arb_type in ArbType::ALL {
        for slot in 0..8 {
            let label = vertex_label(arb_type, slot);
            for face in vertex_planes(arb_type, slot) {
                assert!(
                    face_labels(arb_type, face).contains(&label),
                    "{arb_type} slot {slot}: face {face} misses vertex {label}"
                );
            }
        }
    }
}

/// Each edge endpoint lands on the bounding plane paired with it.
#[test]
fn test_edit_rows_bound_their_endpoints() {
    for arb_type in ArbType::ALL {
        for row in edit_rows(arb_type) {
            if let EditTarget::Edge { v1, v2, bound } = row.target {
                assert!(face_labels(arb_type, bound[0]).contains(&vertex_label(arb_type, v1)));
                assert!(face_labels(arb_type, bound[1]).contains(&vertex_label(arb_type, v2)));
            }
            for rebuild in row.rebuild {
                match *rebuild {
                    PlaneRebuild::Through { face, .. } | PlaneRebuild::FromFaceTable(face) => {
                        assert!(face < arb_type.face_count(), "{arb_type} {}", row.label)
                    }
                    PlaneRebuild::All => {}
                }
            }
        }
    }
}

#[test]
fn test_edit_row_counts() {
    let counts: Vec<usize> = ArbType::ALL.iter().map(|&t| edit_rows(t).len()).collect();
    assert_eq!(counts, vec![5, 9, 10, 12, 12]);
    assert_eq!(edit_rows(ArbType::Arb7)[11].target, EditTarget::Point(4));
    assert_eq!(edit_rows(ArbType::Arb6)[9].target, EditTarget::Point(6));
}

/// Edge counts satisfy Euler's formula V - E + F = 2.
#[test]
fn test_edge_counts_match_euler() {
    for arb_type in ArbType::ALL {
        let v = arb_type.vertex_count() as i64;
        let e = edges(arb_type).len() as i64;
        let f = arb_type.face_count() as i64;
        assert_eq!(v - e + f, 2, "{arb_type}");
    }
}

#[test]
fn test_labels_and_slots() {
    assert_eq!(vertex_label(ArbType::Arb4, 3), 1);
    assert_eq!(vertex_label(ArbType::Arb4, 6), 4);
    assert_eq!(vertex_label(ArbType::Arb6, 7), 6);
    assert_eq!(slot_of_label(ArbType::Arb6, 6), Some(6));
    assert_eq!(slot_of_label(ArbType::Arb5, 6), None);
    assert_eq!(slot_of_label(ArbType::Arb5, 0), None);
    assert_eq!(face_name(ArbType::Arb8, 2), "1584");
    assert_eq!(face_name(ArbType::Arb6, 3), "521");
}

#[test]
fn test_propagate_duplicates() {
    let mut pts = [DVec3::ZERO; 8];
    for (i, p) in pts.iter_mut().enumerate() {
        *p = DVec3::splat(i as f64);
    }
    propagate_duplicates(ArbType::Arb4, &mut pts);
    assert_eq!(pts[3], pts[0]);
    assert!(pts[5..].iter().all(|p| *p == pts[4]));

    propagate_duplicates(ArbType::Arb8, &mut pts);
    assert_eq!(pts[3], pts[0]);
}

/// Every case names a real face of each shape it applies to, and no two
/// cases for one shape share a product.
#[test]
fn test_face_cases_name_faces() {
    for case in FACE_CASES.iter() {
        for &arb_type in case.shapes {
            assert!(face_with_labels(arb_type, case.labels).is_some());
            assert_eq!(face_case(arb_type, case.labels), Some(case));
        }
    }
    // 1345 shares the product 60 with 1256 but is not a face
    assert!(face_case(ArbType::Arb8, &[1, 3, 4, 5]).is_none());
    assert!(face_case(ArbType::Arb6, &[1, 2, 3, 4]).is_none());
}

/// Every permutation maps the face structure onto itself.
#[test]
fn test_permutations_are_symmetries() {
    for arb_type in ArbType::ALL {
        let faces: Vec<Vec<usize>> = (0..arb_type.face_count())
            .map(|f| label_set(arb_type, f))
            .collect();
        for start in 1..=arb_type.vertex_count() {
            for perm in permutations(arb_type, start) {
                let code = perm.as_bytes();
                assert_eq!(code.len(), 8);
                for face in &faces {
                    let mut mapped: Vec<usize> = face
                        .iter()
                        .map(|&label| {
                            let slot = slot_of_label(arb_type, label).unwrap_or(0);
                            usize::from(code[slot] - b'0')
                        })
                        .collect();
                    mapped.sort_unstable();
                    assert!(faces.contains(&mapped), "{arb_type} {perm} breaks {face:?}");
                }
            }
        }
    }
}
