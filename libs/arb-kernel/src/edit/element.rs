//! Edge and point drags driven by the per-shape edit tables.

use config::constants::ARB_VERTEX_SLOTS;
use glam::DVec3;

use super::{transaction, ElementMove, Scratch};
use crate::arb::classify::ArbType;
use crate::arb::planes::FacePlanes;
use crate::arb::topology::{self, EditTarget, PlaneRebuild};
use crate::arb::Arb;
use crate::config::Tolerance;
use crate::core::plane::Plane;
use crate::error::{ArbError, ArbResult};

/// Moves the edge `ends` onto the line `through + t * direction`.
///
/// Each endpoint becomes the point where the line crosses its bounding
/// plane: `ends[0]` lands on `planes[bound[0]]`, `ends[1]` on
/// `planes[bound[1]]`. Both are computed before either is written, so a
/// line parallel to one of the planes leaves `pts` unchanged.
///
/// This is the raw step behind the edge rows of [`edit_element`]; it does
/// not rebuild planes or check the result.
pub fn move_edge(
    pts: &mut [DVec3; ARB_VERTEX_SLOTS],
    planes: &FacePlanes,
    ends: [usize; 2],
    bound: [usize; 2],
    through: DVec3,
    direction: DVec3,
    tol: &Tolerance,
) -> ArbResult<()> {
    if ends.iter().any(|&slot| slot >= pts.len()) {
        return Err(ArbError::invalid_parameter(format!(
            "edge slots {ends:?} out of range"
        )));
    }
    if direction.length_squared() < tol.dist_sq || !direction.is_finite() {
        return Err(ArbError::ZeroDirection {
            what: "edge direction",
        });
    }

    let mut moved = [DVec3::ZERO; 2];
    for (end, &plane) in moved.iter_mut().zip(&bound) {
        let t = planes
            .plane(plane)?
            .intersect_line(through, direction, tol)
            .ok_or(ArbError::ParallelToPlane { plane })?;
        *end = through + direction * t;
    }
    pts[ends[0]] = moved[0];
    pts[ends[1]] = moved[1];
    Ok(())
}

/// Drags element `index` of the shape's edit table.
///
/// Edge rows slide the edge between its bounding planes (see
/// [`move_edge`]); point rows place the vertex directly. The row then
/// refits the planes it names and re-intersects the vertices they touch.
///
/// # Examples
/// ```
/// use arb_kernel::{edit, Arb, ElementMove, FacePlanes, Tolerance};
/// use glam::DVec3;
///
/// let tol = Tolerance::default();
/// let mut arb = Arb::from_box(DVec3::ZERO, DVec3::ONE);
/// let mut planes = FacePlanes::default();
/// // edge 12 down to z = -1, keeping its direction
/// edit::edit_element(&mut arb, &mut planes, 0, ElementMove::To(DVec3::new(0.0, 0.0, -1.0)), &tol)
///     .unwrap();
/// assert_eq!(arb.pt[1].z, -1.0);
/// assert_eq!(planes.len(), 6);
/// ```
pub fn edit_element(
    arb: &mut Arb,
    planes: &mut FacePlanes,
    index: usize,
    motion: ElementMove,
    tol: &Tolerance,
) -> ArbResult<()> {
    transaction("edit_element", arb, planes, tol, |s, tol| {
        apply_row(s, index, motion, tol)
    })
}

fn apply_row(s: &mut Scratch, index: usize, motion: ElementMove, tol: &Tolerance) -> ArbResult<()> {
    let arb_type = s.arb_type;
    let rows = topology::edit_rows(arb_type);
    let row = rows.get(index).ok_or(ArbError::InvalidEditIndex {
        index,
        arb_type,
        count: rows.len(),
    })?;

    match row.target {
        EditTarget::Point(slot) => {
            let ElementMove::To(p) = motion else {
                return Err(ArbError::UnsupportedOperation {
                    operation: "moving a point along a line",
                    arb_type,
                });
            };
            if !p.is_finite() {
                return Err(ArbError::invalid_parameter("point is not finite"));
            }
            s.pts[slot] = p;
        }
        EditTarget::Edge { v1, v2, bound } => {
            let (through, direction) = match motion {
                ElementMove::To(p) => (p, s.pts[v2] - s.pts[v1]),
                ElementMove::Direction(d) => (s.pts[v1], d),
                ElementMove::Line { through, direction } => (through, direction),
            };
            move_edge(&mut s.pts, &s.planes, [v1, v2], bound, through, direction, tol)?;
        }
    }
    topology::propagate_duplicates(arb_type, &mut s.pts);

    for rebuild in row.rebuild {
        rebuild_plane(s, *rebuild, tol)?;
    }
    for &slot in row.rederive {
        s.pts[slot] = s.planes.intersect_vertex(arb_type, slot)?;
    }
    tracing::trace!(row = row.label, "edit row applied");
    Ok(())
}

fn rebuild_plane(s: &mut Scratch, rebuild: PlaneRebuild, tol: &Tolerance) -> ArbResult<()> {
    match rebuild {
        PlaneRebuild::All => {
            s.planes = FacePlanes::build(&s.pts, s.arb_type, tol)?;
            Ok(())
        }
        PlaneRebuild::Through { face, points } => fit(s, face, points, tol),
        PlaneRebuild::FromFaceTable(face) => {
            let slots = face_slots(s.arb_type, face)?;
            fit(s, face, [slots[0], slots[1], slots[2]], tol)
        }
    }
}

fn fit(s: &mut Scratch, face: usize, points: [usize; 3], tol: &Tolerance) -> ArbResult<()> {
    let [a, b, c] = points.map(|slot| s.pts[slot]);
    let plane = Plane::from_points(a, b, c, tol).ok_or(ArbError::DegeneratePlane { points })?;
    s.planes.set(face, plane)
}

fn face_slots(arb_type: ArbType, face: usize) -> ArbResult<[usize; 4]> {
    topology::faces(arb_type)
        .get(face)
        .copied()
        .ok_or_else(|| ArbError::invalid_parameter(format!("no face {face} in {arb_type}")))
}
