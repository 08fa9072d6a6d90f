//! Per-face texture parameterization.

use config::constants::{ARB_VERTEX_SLOTS, RAY_PARALLEL_EPSILON};
use glam::DVec3;

use super::{BeamSpec, Ray, SurfaceHit, UvCoord};
use crate::arb::classify::ArbType;
use crate::arb::planes::FacePlanes;
use crate::arb::topology;
use crate::config::Tolerance;
use crate::error::{ArbError, ArbResult};

/// U/V frame spanning one face.
///
/// `u` and `v` are scaled by the inverse face extent, so face points map
/// into the unit square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct FaceUv {
    pub origin: DVec3,
    pub u: DVec3,
    pub v: DVec3,
    pub inv_ulen: f64,
    pub inv_vlen: f64,
}

/// Builds one frame per face of `arb_type`.
pub(crate) fn build(
    pts: &[DVec3; ARB_VERTEX_SLOTS],
    arb_type: ArbType,
    planes: &FacePlanes,
    tol: &Tolerance,
) -> ArbResult<Vec<FaceUv>> {
    let frames = planes
        .iter()
        .enumerate()
        .map(|(face, plane)| {
            let corners: Vec<DVec3> = topology::face_labels(arb_type, face)
                .into_iter()
                .filter_map(|label| topology::slot_of_label(arb_type, label))
                .map(|slot| pts[slot])
                .collect();
            frame(&corners, plane.normal, tol).ok_or_else(|| ArbError::DegenerateFace {
                face,
                label: topology::face_name(arb_type, face),
                reason: "no uv frame spans the face",
            })
        })
        .collect::<ArbResult<Vec<_>>>()?;
    tracing::trace!(faces = frames.len(), "built uv frames");
    Ok(frames)
}

/// Frame with U along the first edge and V across it, grown until every
/// corner projects into `[0, ulen] x [0, vlen]`.
fn frame(corners: &[DVec3], normal: DVec3, tol: &Tolerance) -> Option<FaceUv> {
    let (&a, rest) = corners.split_first()?;
    let b = *rest.first()?;

    let mut ulen = (b - a).length();
    if ulen < tol.dist {
        return None;
    }
    let u = (b - a) / ulen;

    let across = normal.cross(u).try_normalize()?;
    let (v, mut vlen) = rest.iter().find_map(|&c| {
        let f = across.dot(c - a);
        (!tol.near_zero(f)).then_some((across * f.signum(), f.abs()))
    })?;

    let mut origin = a;
    for &p in rest {
        let f = (p - origin).dot(u);
        if f > ulen {
            ulen = f;
        } else if f < 0.0 {
            origin += u * f;
            ulen -= f;
        }
        let f = (p - origin).dot(v);
        if f > vlen {
            vlen = f;
        } else if f < 0.0 {
            origin += v * f;
            vlen -= f;
        }
    }

    Some(FaceUv {
        origin,
        u: u / ulen,
        v: v / vlen,
        inv_ulen: 1.0 / ulen,
        inv_vlen: 1.0 / vlen,
    })
}

impl FaceUv {
    /// Coordinates of a hit on this face.
    ///
    /// `v` runs from the far edge back towards the first edge.
    pub fn coord(&self, ray: &Ray, hit: &SurfaceHit, normal: DVec3, beam: BeamSpec) -> UvCoord {
        let rel = ray.at(hit.distance) - self.origin;
        let mut u = rel.dot(self.u);
        let mut v = 1.0 - rel.dot(self.v);
        if !(0.0..=1.0).contains(&u) || !(0.0..=1.0).contains(&v) {
            tracing::trace!(u, v, face = hit.face, "uv outside the unit square");
            u = u.abs();
            v = v.abs();
        }

        let r = beam.radius + beam.divergence * hit.distance;
        let min_du = r * self.inv_ulen;
        let min_dv = r * self.inv_vlen;

        let rev = -ray.direction;
        let dot_n = rev.dot(normal);
        let (du, dv) = if dot_n.abs() > RAY_PARALLEL_EPSILON {
            let along = (rev - normal * dot_n).normalize_or_zero();
            (
                (r * along.dot(self.u) / dot_n).abs(),
                (r * along.dot(self.v) / dot_n).abs(),
            )
        } else {
            (0.0, 0.0)
        };

        UvCoord {
            u,
            v,
            du: du.max(min_du),
            dv: dv.max(min_dv),
        }
    }
}
