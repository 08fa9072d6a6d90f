//! Face-driven edits: extrude, mirror, move and rotate.

use glam::DVec3;

use super::{transaction, Axis, Scratch};
use crate::arb::classify::ArbType;
use crate::arb::planes::FacePlanes;
use crate::arb::topology::{self, FaceCase, FaceSweep};
use crate::arb::Arb;
use crate::config::Tolerance;
use crate::core::plane::Plane;
use crate::error::{ArbError, ArbResult};

/// Splits a face identifier such as `1584` into its sorted vertex labels.
///
/// Three or four digits, each a vertex label of `arb_type`, no repeats.
fn parse_face_id(face: u32, arb_type: ArbType) -> ArbResult<Vec<usize>> {
    let invalid = |reason| ArbError::InvalidFace {
        face,
        arb_type,
        reason,
    };
    let mut labels: Vec<usize> = face
        .to_string()
        .bytes()
        .map(|b| usize::from(b - b'0'))
        .collect();
    if !(3..=4).contains(&labels.len()) {
        return Err(invalid("expected three or four vertex labels"));
    }
    if labels
        .iter()
        .any(|&l| l == 0 || l > arb_type.vertex_count())
    {
        return Err(invalid("vertex label out of range"));
    }
    labels.sort_unstable();
    if labels.windows(2).any(|w| w[0] == w[1]) {
        return Err(invalid("repeated vertex label"));
    }
    Ok(labels)
}

/// Looks up the sweep case and face-table index of a face identifier.
fn face_case(face: u32, arb_type: ArbType) -> ArbResult<(&'static FaceCase, usize)> {
    let labels = parse_face_id(face, arb_type)?;
    let case = topology::face_case(arb_type, &labels).ok_or(ArbError::InvalidFace {
        face,
        arb_type,
        reason: "no sweep is defined for this face",
    })?;
    let index = topology::face_with_labels(arb_type, &labels).ok_or(ArbError::InvalidFace {
        face,
        arb_type,
        reason: "not a face of this shape",
    })?;
    Ok((case, index))
}

/// Applies a sweep, mapping every source position through `map`.
fn sweep(s: &mut Scratch, case: &FaceCase, map: impl Fn(DVec3) -> DVec3) {
    match case.sweep {
        FaceSweep::Pairs(pairs) => {
            for (dst, src) in pairs {
                s.pts[dst] = map(s.pts[src]);
            }
        }
        FaceSweep::PromoteArb4([a, b, c]) => {
            let (pa, pb, pc) = (s.pts[a], s.pts[b], s.pts[c]);
            s.pts = [pa, pb, map(pb), map(pa), pc, pc, map(pc), map(pc)];
            s.arb_type = ArbType::Arb6;
        }
    }
}

/// Extrudes face `face` by `distance`.
///
/// The vertices off the face are replaced by copies of the face vertices
/// moved `distance` along the face's inward normal, so a positive distance
/// builds the solid behind the face. Extruding a face of an ARB4 turns it
/// into an ARB6 wedge.
///
/// Supported: ARB8 (all faces), ARB6 (faces 125 and 346), ARB4 (all faces).
///
/// # Examples
/// ```
/// use arb_kernel::{edit, Arb, FacePlanes, Tolerance};
/// use glam::DVec3;
///
/// let tol = Tolerance::default();
/// let mut arb = Arb::from_box(DVec3::ZERO, DVec3::ONE);
/// let mut planes = FacePlanes::default();
/// edit::extrude_face(&mut arb, &mut planes, 1234, 3.0, &tol).unwrap();
/// assert_eq!(arb.pt[6], DVec3::new(1.0, 1.0, 3.0));
/// ```
pub fn extrude_face(
    arb: &mut Arb,
    planes: &mut FacePlanes,
    face: u32,
    distance: f64,
    tol: &Tolerance,
) -> ArbResult<()> {
    transaction("extrude_face", arb, planes, tol, |s, _| {
        if !matches!(s.arb_type, ArbType::Arb8 | ArbType::Arb6 | ArbType::Arb4) {
            return Err(ArbError::UnsupportedOperation {
                operation: "extrude",
                arb_type: s.arb_type,
            });
        }
        if !distance.is_finite() {
            return Err(ArbError::invalid_parameter("extrusion distance is not finite"));
        }
        let (case, index) = face_case(face, s.arb_type)?;
        let offset = s.planes.plane(index)?.normal * -distance;
        sweep(s, case, |p| p + offset);
        Ok(())
    })
}

/// Mirrors the solid across face `face`: each vertex off the face becomes
/// its partner on the face with the `axis` component negated.
///
/// Supported: ARB8 (all faces) and ARB6 (faces 125 and 346).
pub fn mirror_face(
    arb: &mut Arb,
    planes: &mut FacePlanes,
    face: u32,
    axis: Axis,
    tol: &Tolerance,
) -> ArbResult<()> {
    transaction("mirror_face", arb, planes, tol, |s, _| {
        if !matches!(s.arb_type, ArbType::Arb8 | ArbType::Arb6) {
            return Err(ArbError::UnsupportedOperation {
                operation: "mirror",
                arb_type: s.arb_type,
            });
        }
        let (case, _) = face_case(face, s.arb_type)?;
        let k = axis.index();
        sweep(s, case, |mut p| {
            p[k] = -p[k];
            p
        });
        Ok(())
    })
}

fn check_face_index(face: usize, arb_type: ArbType) -> ArbResult<()> {
    if face >= arb_type.face_count() {
        return Err(ArbError::InvalidFace {
            face: u32::try_from(face).unwrap_or(u32::MAX),
            arb_type,
            reason: "face index out of range",
        });
    }
    Ok(())
}

/// Shifts face `face` (face-table index) so it passes through `through`,
/// keeping its normal, and rebuilds every vertex from the planes.
pub fn move_face(
    arb: &mut Arb,
    planes: &mut FacePlanes,
    face: usize,
    through: DVec3,
    tol: &Tolerance,
) -> ArbResult<()> {
    transaction("move_face", arb, planes, tol, |s, tol| {
        check_face_index(face, s.arb_type)?;
        if !through.is_finite() {
            return Err(ArbError::invalid_parameter("point is not finite"));
        }
        let mut plane = s.planes.plane(face)?;
        plane.offset = plane.normal.dot(through);
        s.planes.set(face, plane)?;
        s.pts = s.planes.reconstruct(s.arb_type, tol)?;
        Ok(())
    })
}

/// Gives face `face` a new `normal`, pivoting about vertex `fixed_vertex`
/// (1-based label, must lie on the face), and rebuilds every vertex.
pub fn rotate_face(
    arb: &mut Arb,
    planes: &mut FacePlanes,
    face: usize,
    fixed_vertex: usize,
    normal: DVec3,
    tol: &Tolerance,
) -> ArbResult<()> {
    transaction("rotate_face", arb, planes, tol, |s, tol| {
        check_face_index(face, s.arb_type)?;
        if !topology::face_labels(s.arb_type, face).contains(&fixed_vertex) {
            return Err(ArbError::invalid_parameter(format!(
                "vertex {fixed_vertex} is not on face {}",
                topology::face_name(s.arb_type, face)
            )));
        }
        let slot = topology::slot_of_label(s.arb_type, fixed_vertex).ok_or_else(|| {
            ArbError::invalid_parameter(format!("no vertex {fixed_vertex}"))
        })?;
        let plane = Plane::through_point(normal, s.pts[slot]).ok_or(ArbError::ZeroDirection {
            what: "face normal",
        })?;
        s.planes.set(face, plane)?;
        s.pts = s.planes.reconstruct(s.arb_type, tol)?;
        Ok(())
    })
}

/// Unit normal from a rotation angle about z and a fallback (elevation)
/// angle above the xy plane, both in degrees.
///
/// # Examples
/// ```
/// use arb_kernel::edit::normal_from_angles;
///
/// let n = normal_from_angles(90.0, 0.0);
/// assert!((n.y - 1.0).abs() < 1e-12);
/// ```
pub fn normal_from_angles(rotation_deg: f64, fallback_deg: f64) -> DVec3 {
    let (rot, fb) = (rotation_deg.to_radians(), fallback_deg.to_radians());
    DVec3::new(fb.cos() * rot.cos(), fb.cos() * rot.sin(), fb.sin())
}
