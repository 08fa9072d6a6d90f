//! # Ray Intersection
//!
//! [`PreparedArb`] is the read-only form of an ARB used while tracing: the
//! outward face planes plus bounding volumes. It is `Sync`, so any number
//! of worker threads can query one prepared solid at once.
//!
//! Rays are clipped against every face half-space in turn (Cyrus-Beck):
//! the largest entry distance and the smallest exit distance survive, and
//! the faces that produced them identify the surfaces hit.
//!
//! ## Example
//!
//! ```rust
//! use arb_kernel::{Arb, PreparedArb, Ray, Tolerance};
//! use glam::DVec3;
//!
//! let cube = Arb::from_box(DVec3::ZERO, DVec3::ONE);
//! let solid = PreparedArb::prepare(&cube, &Tolerance::default()).unwrap();
//! let seg = solid.shoot(&Ray::new(DVec3::new(0.5, 0.5, -5.0), DVec3::Z)).unwrap();
//! assert_eq!(seg.entry.face, 0);
//! assert_eq!(seg.exit.distance, 6.0);
//! ```

mod batch;
mod uv;


pub use batch::{par_shoot_batch, shoot_batch};

use std::sync::OnceLock;

use config::constants::{ARB_VERTEX_SLOTS, RAY_PARALLEL_EPSILON};
use glam::DVec3;

use crate::arb::classify::ArbType;
use crate::arb::planes::FacePlanes;
use crate::arb::{Aabb, Arb};
use crate::config::Tolerance;
use crate::core::plane::Plane;
use crate::error::{ArbError, ArbResult};
use uv::FaceUv;

// =============================================================================
// QUERY TYPES
// =============================================================================

/// Ray `origin + t * direction`.
///
/// Distances reported for a ray are in units of `direction`; use a unit
/// direction to get model-space distances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point.
    pub origin: DVec3,
    /// Direction, not required to be normalized.
    pub direction: DVec3,
}

impl Ray {
    /// Creates a ray.
    pub const fn new(origin: DVec3, direction: DVec3) -> Self {
        Self { origin, direction }
    }

    /// Point at parameter `t`.
    #[inline]
    pub fn at(&self, t: f64) -> DVec3 {
        self.origin + self.direction * t
    }
}

/// Where a ray crosses the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHit {
    /// Ray parameter of the crossing.
    pub distance: f64,
    /// Index of the face in the shape's face table.
    pub face: usize,
}

/// The part of a ray inside the solid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Where the ray enters.
    pub entry: SurfaceHit,
    /// Where the ray leaves.
    pub exit: SurfaceHit,
}

/// Principal curvature at a hit. Faces are flat, so both curvatures are 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Curvature {
    /// Unit principal direction, tangent to the face.
    pub pdir: DVec3,
    /// Curvature along `pdir`.
    pub c1: f64,
    /// Curvature across `pdir`.
    pub c2: f64,
}

/// Beam footprint used to size texture filter extents in [`PreparedArb::uv`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BeamSpec {
    /// Beam radius at the ray origin.
    pub radius: f64,
    /// Radius growth per unit distance.
    pub divergence: f64,
}

/// Face-local texture coordinate of a hit.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct UvCoord {
    /// Coordinate along the face's U axis, 0..1.
    pub u: f64,
    /// Coordinate along the face's V axis, 0..1.
    pub v: f64,
    /// Beam footprint along U.
    pub du: f64,
    /// Beam footprint along V.
    pub dv: f64,
}

/// Relation between an axis-aligned box and the solid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxClass {
    /// Box and solid are disjoint.
    Outside,
    /// Box lies entirely inside the solid.
    Inside,
    /// Anything else.
    Overlapping,
}

// =============================================================================
// SLAB CLIPPER
// =============================================================================

/// Running state of one ray being clipped face by face.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Slab {
    entry: f64,
    exit: f64,
    entry_face: Option<usize>,
    exit_face: Option<usize>,
    alive: bool,
}

impl Slab {
    pub(crate) const START: Slab = Slab {
        entry: f64::NEG_INFINITY,
        exit: f64::INFINITY,
        entry_face: None,
        exit_face: None,
        alive: true,
    };

    /// A ray already rejected by the bounding sphere.
    pub(crate) const MISS: Slab = Slab {
        alive: false,
        ..Slab::START
    };

    /// Clips against one face half-space. Returns `false` once the ray is
    /// known to miss.
    #[inline]
    pub(crate) fn clip(&mut self, plane: &Plane, face: usize, ray: &Ray) -> bool {
        // positive: origin outside this face
        let dxbdn = plane.normal.dot(ray.origin) - plane.offset;
        // positive: ray approaching the face from outside
        let dn = -plane.normal.dot(ray.direction);

        if dn < -RAY_PARALLEL_EPSILON {
            let s = dxbdn / dn;
            if s < self.exit {
                self.exit = s;
                self.exit_face = Some(face);
            }
        } else if dn > RAY_PARALLEL_EPSILON {
            let s = dxbdn / dn;
            if s > self.entry {
                self.entry = s;
                self.entry_face = Some(face);
            }
        } else if dxbdn > RAY_PARALLEL_EPSILON {
            self.alive = false;
        }
        if self.entry > self.exit {
            self.alive = false;
        }
        self.alive
    }

    #[inline]
    pub(crate) fn alive(&self) -> bool {
        self.alive
    }

    pub(crate) fn finish(self) -> Option<Segment> {
        if !self.alive || self.entry >= self.exit || self.exit == f64::INFINITY {
            return None;
        }
        Some(Segment {
            entry: SurfaceHit {
                distance: self.entry,
                face: self.entry_face?,
            },
            exit: SurfaceHit {
                distance: self.exit,
                face: self.exit_face?,
            },
        })
    }
}

// =============================================================================
// PREPARED SOLID
// =============================================================================

/// Ray-tracing form of an [`Arb`].
#[derive(Debug)]
pub struct PreparedArb {
    arb_type: ArbType,
    pts: [DVec3; ARB_VERTEX_SLOTS],
    planes: FacePlanes,
    bounds: Aabb,
    center: DVec3,
    radius: f64,
    aradius: f64,
    tol: Tolerance,
    uv: OnceLock<ArbResult<Vec<FaceUv>>>,
}

impl PreparedArb {
    /// Classifies `arb`, fits its outward face planes and records the
    /// bounding box and spheres.
    pub fn prepare(arb: &Arb, tol: &Tolerance) -> ArbResult<Self> {
        let arb_type = arb.arb_type(tol)?;
        let planes = FacePlanes::build(&arb.pt, arb_type, tol)?;
        let bounds = arb.bounding_box();
        let half = bounds.extent() * 0.5;
        tracing::debug!(%arb_type, faces = planes.len(), "prepared ARB for ray tracing");
        Ok(Self {
            arb_type,
            pts: arb.pt,
            planes,
            bounds,
            center: bounds.center(),
            radius: half.length(),
            aradius: half.max_element(),
            tol: *tol,
            uv: OnceLock::new(),
        })
    }

    /// Shape of the solid.
    pub fn arb_type(&self) -> ArbType {
        self.arb_type
    }

    /// Outward face planes.
    pub fn planes(&self) -> &FacePlanes {
        &self.planes
    }

    /// Bounding box of the vertices.
    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    /// Center of the bounding box. Not necessarily inside the solid.
    pub fn center(&self) -> DVec3 {
        self.center
    }

    /// Radius of the sphere about [`Self::center`] enclosing the box.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Largest half-extent of the box.
    pub fn aradius(&self) -> f64 {
        self.aradius
    }

    /// Cheap rejection: `false` when the ray's line misses the bounding
    /// sphere.
    pub fn may_intersect(&self, ray: &Ray) -> bool {
        let Some(dir) = ray.direction.try_normalize() else {
            return false;
        };
        let to_center = self.center - ray.origin;
        let perp = to_center - dir * to_center.dot(dir);
        perp.length_squared() <= self.radius * self.radius
    }

    /// Clips `ray` against the solid.
    ///
    /// Returns `None` when the ray misses. Distances are negative for
    /// parts of the solid behind the ray origin.
    pub fn shoot(&self, ray: &Ray) -> Option<Segment> {
        if !self.may_intersect(ray) {
            return None;
        }
        let mut slab = Slab::START;
        for (face, plane) in self.planes.iter().enumerate() {
            if !slab.clip(plane, face, ray) {
                return None;
            }
        }
        slab.finish()
    }

    /// Outward unit normal at a hit.
    pub fn hit_normal(&self, hit: &SurfaceHit) -> ArbResult<DVec3> {
        Ok(self.planes.plane(hit.face)?.normal)
    }

    /// Point where `ray` crosses the surface at `hit`.
    pub fn hit_point(&self, ray: &Ray, hit: &SurfaceHit) -> DVec3 {
        ray.at(hit.distance)
    }

    /// Surface curvature at a hit.
    pub fn curvature(&self, hit: &SurfaceHit) -> ArbResult<Curvature> {
        let normal = self.hit_normal(hit)?;
        Ok(Curvature {
            pdir: normal.any_orthonormal_vector(),
            c1: 0.0,
            c2: 0.0,
        })
    }

    /// Texture coordinate of a hit, with the beam footprint in `du`/`dv`
    /// when `beam` is given.
    ///
    /// The per-face parameterization is built on first use and shared by
    /// all threads afterwards.
    pub fn uv(&self, ray: &Ray, hit: &SurfaceHit, beam: Option<BeamSpec>) -> ArbResult<UvCoord> {
        let normal = self.hit_normal(hit)?;
        let faces = self
            .uv
            .get_or_init(|| uv::build(&self.pts, self.arb_type, &self.planes, &self.tol))
            .as_ref()
            .map_err(ArbError::clone)?;
        let face = faces
            .get(hit.face)
            .ok_or_else(|| ArbError::invalid_parameter("hit face has no uv basis"))?;
        Ok(face.coord(ray, hit, normal, beam.unwrap_or_default()))
    }

    /// Classifies an axis-aligned box against the face half-spaces.
    ///
    /// The test is conservative: a box near an edge of the solid can be
    /// reported as overlapping while lying outside.
    pub fn classify_box(&self, bb: &Aabb) -> BoxClass {
        if bb.contains(self.bounds.min) && bb.contains(self.bounds.max) {
            return BoxClass::Overlapping;
        }
        let mut inside = true;
        for plane in self.planes.iter() {
            let n = plane.normal;
            let nearest = DVec3::select(n.cmpgt(DVec3::ZERO), bb.min, bb.max);
            let farthest = DVec3::select(n.cmpgt(DVec3::ZERO), bb.max, bb.min);
            if plane.signed_distance(nearest) > self.tol.dist {
                return BoxClass::Outside;
            }
            if plane.signed_distance(farthest) >= -self.tol.dist {
                inside = false;
            }
        }
        if inside {
            BoxClass::Inside
        } else {
            BoxClass::Overlapping
        }
    }
}
