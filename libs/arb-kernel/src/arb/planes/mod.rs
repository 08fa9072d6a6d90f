//! # Face planes
//!
//! Fitting face planes from the vertex store and the inverse, rebuilding
//! every vertex slot as the meeting point of its three defining faces.
//!
//! A [`FacePlanes`] set is a derived cache. It is only meaningful for the
//! vertex store it was built from.

use config::constants::{ARB_MAX_FACES, ARB_VERTEX_SLOTS};
use glam::DVec3;

use crate::arb::classify::ArbType;
use crate::arb::topology;
use crate::config::Tolerance;
use crate::core::plane::Plane;
use crate::error::{ArbError, ArbResult};

/// Vertex triples tried, in order, when fitting a four-slot face.
const FIT_TRIPLES: [[usize; 3]; 4] = [[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]];

/// Up to six face planes, indexed like the shape's face table.
///
/// Normals point away from the solid: interior points have a negative
/// [`Plane::signed_distance`] to every face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FacePlanes {
    planes: [Plane; ARB_MAX_FACES],
    len: usize,
}

impl Default for FacePlanes {
    fn default() -> Self {
        Self::new()
    }
}

impl FacePlanes {
    /// An empty set.
    pub fn new() -> Self {
        Self {
            planes: [Plane::new(DVec3::ZERO, 0.0); ARB_MAX_FACES],
            len: 0,
        }
    }

    /// Number of faces held.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no planes are held.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Plane of `face`, if present.
    pub fn get(&self, face: usize) -> Option<&Plane> {
        self.as_slice().get(face)
    }

    /// The held planes.
    pub fn as_slice(&self) -> &[Plane] {
        &self.planes[..self.len]
    }

    /// Iterates over the held planes.
    pub fn iter(&self) -> impl Iterator<Item = &Plane> {
        self.as_slice().iter()
    }

    pub(crate) fn plane(&self, face: usize) -> ArbResult<Plane> {
        self.get(face).copied().ok_or_else(|| {
            ArbError::invalid_parameter(format!("face {face} out of range ({} faces)", self.len))
        })
    }

    pub(crate) fn set(&mut self, face: usize, plane: Plane) -> ArbResult<()> {
        if face >= self.len {
            return Err(ArbError::invalid_parameter(format!(
                "face {face} out of range ({} faces)",
                self.len
            )));
        }
        self.planes[face] = plane;
        Ok(())
    }

    /// Fits one plane per face of `arb_type`.
    ///
    /// Each face is fitted through its first usable vertex triple, every
    /// face vertex must lie within `tol.dist` of the result, and the normal
    /// is turned to face away from the centroid of the real vertices.
    ///
    /// # Examples
    /// ```
    /// use arb_kernel::{Arb, ArbType, FacePlanes, Tolerance};
    /// use glam::DVec3;
    ///
    /// let cube = Arb::from_box(DVec3::ZERO, DVec3::ONE);
    /// let planes = FacePlanes::build(&cube.pt, ArbType::Arb8, &Tolerance::default()).unwrap();
    /// assert_eq!(planes.len(), 6);
    /// assert_eq!(planes.get(0).unwrap().normal, -DVec3::Z);
    /// ```
    pub fn build(
        pts: &[DVec3; ARB_VERTEX_SLOTS],
        arb_type: ArbType,
        tol: &Tolerance,
    ) -> ArbResult<Self> {
        let real = topology::real_slots(arb_type);
        let centroid = real.iter().map(|&s| pts[s]).sum::<DVec3>() / real.len() as f64;

        let mut set = Self::new();
        for (face, slots) in topology::faces(arb_type).iter().enumerate() {
            let mut plane = fit_face(pts, slots, tol).ok_or_else(|| ArbError::DegenerateFace {
                face,
                label: topology::face_name(arb_type, face),
                reason: "vertices are collinear or coincident",
            })?;

            for &slot in slots {
                let deviation = plane.signed_distance(pts[slot]).abs();
                if deviation > tol.dist {
                    return Err(ArbError::NonPlanarFace {
                        face,
                        label: topology::face_name(arb_type, face),
                        vertex: topology::vertex_label(arb_type, slot),
                        deviation,
                    });
                }
            }

            let side = plane.signed_distance(centroid);
            if tol.near_zero(side) {
                return Err(ArbError::FlatSolid { face });
            }
            if side > 0.0 {
                plane = plane.flipped();
            }
            tracing::trace!(face, normal = ?plane.normal, offset = plane.offset, "face plane");
            set.planes[face] = plane;
            set.len = face + 1;
        }
        Ok(set)
    }

    /// Meeting point of the three faces that define `slot`.
    pub fn intersect_vertex(&self, arb_type: ArbType, slot: usize) -> ArbResult<DVec3> {
        let planes = topology::vertex_planes(arb_type, slot);
        let [a, b, c] = [
            self.plane(planes[0])?,
            self.plane(planes[1])?,
            self.plane(planes[2])?,
        ];
        Plane::intersect_three(&a, &b, &c)
            .ok_or(ArbError::PlanesDoNotIntersect { slot, planes })
    }

    /// Rebuilds all eight slots from the planes and rejects the result if
    /// any edge collapsed. Nothing is written anywhere on failure.
    pub fn reconstruct(
        &self,
        arb_type: ArbType,
        tol: &Tolerance,
    ) -> ArbResult<[DVec3; ARB_VERTEX_SLOTS]> {
        let mut pts = [DVec3::ZERO; ARB_VERTEX_SLOTS];
        for (slot, pt) in pts.iter_mut().enumerate() {
            *pt = self.intersect_vertex(arb_type, slot)?;
        }
        check_edges(&pts, arb_type, tol)?;
        Ok(pts)
    }
}

/// Fits a plane through the first usable triple of a face's slots.
fn fit_face(pts: &[DVec3; ARB_VERTEX_SLOTS], slots: &[usize; 4], tol: &Tolerance) -> Option<Plane> {
    FIT_TRIPLES.iter().find_map(|[a, b, c]| {
        Plane::from_points(pts[slots[*a]], pts[slots[*b]], pts[slots[*c]], tol)
    })
}

/// Fails if two vertices joined by an edge of `arb_type` coincide.
pub fn check_edges(
    pts: &[DVec3; ARB_VERTEX_SLOTS],
    arb_type: ArbType,
    tol: &Tolerance,
) -> ArbResult<()> {
    for &(a, b) in topology::edges(arb_type) {
        if tol.near_equal(pts[a], pts[b]) {
            return Err(ArbError::CollapsedEdge {
                v1: topology::vertex_label(arb_type, a),
                v2: topology::vertex_label(arb_type, b),
            });
        }
    }
    Ok(())
}
