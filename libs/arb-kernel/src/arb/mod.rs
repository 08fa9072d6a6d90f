//! # ARB vertex store
//!
//! [`Arb`] holds the eight vertex slots, the only durable state of an ARB.
//! Shapes with fewer than eight distinct vertices repeat some of them in
//! fixed slots; [`topology::propagate_duplicates`] keeps those copies in
//! sync and [`Arb::real_vertices`] gives the de-duplicated view.
//!
//! ## Slot layout per shape
//!
//! ```text
//! ARB4  0 1 2 0 4 4 4 4
//! ARB5  0 1 2 3 4 4 4 4
//! ARB6  0 1 2 3 4 4 6 6
//! ARB7  0 1 2 3 4 5 6 4
//! ARB8  0 1 2 3 4 5 6 7
//! ```

pub mod classify;
pub mod planes;
pub mod topology;

#[cfg(test)]
pub(crate) mod samples;

use config::constants::ARB_VERTEX_SLOTS;
use glam::{DMat4, DVec2, DVec3};

use crate::config::Tolerance;
use crate::core::plane::Plane;
use crate::error::{ArbError, ArbResult};
use classify::{classify, ArbType, Classification};
use planes::FacePlanes;
use topology::EditTarget;

/// Tetrahedra covering the eight slots, `[base0, base1, base2, apex]`.
const VOLUME_TETRAHEDRA: [[usize; 4]; 6] = [
    [0, 1, 2, 4],
    [4, 5, 6, 1],
    [1, 2, 6, 4],
    [0, 2, 3, 4],
    [4, 6, 7, 2],
    [2, 3, 7, 4],
];

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: DVec3,
    /// Maximum corner.
    pub max: DVec3,
}

impl Aabb {
    /// Box spanning two corners in any order.
    pub fn new(a: DVec3, b: DVec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Midpoint.
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    /// Size along each axis.
    pub fn extent(&self) -> DVec3 {
        self.max - self.min
    }

    /// True when `p` lies inside or on the box.
    pub fn contains(&self, p: DVec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    /// The eight corners.
    pub fn corners(&self) -> [DVec3; ARB_VERTEX_SLOTS] {
        let (a, b) = (self.min, self.max);
        [
            DVec3::new(a.x, a.y, a.z),
            DVec3::new(b.x, a.y, a.z),
            DVec3::new(b.x, b.y, a.z),
            DVec3::new(a.x, b.y, a.z),
            DVec3::new(a.x, a.y, b.z),
            DVec3::new(b.x, a.y, b.z),
            DVec3::new(b.x, b.y, b.z),
            DVec3::new(a.x, b.y, b.z),
        ]
    }
}

/// Eight-slot ARB vertex store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arb {
    /// Vertex slots.
    pub pt: [DVec3; ARB_VERTEX_SLOTS],
}

impl Arb {
    /// Wraps eight slots as given.
    pub const fn new(pt: [DVec3; ARB_VERTEX_SLOTS]) -> Self {
        Self { pt }
    }

    /// Axis-aligned box: slots 1-4 on the low-z face, counter-clockwise
    /// seen from +z starting at `min`, slots 5-8 directly above them.
    ///
    /// # Examples
    /// ```
    /// use arb_kernel::Arb;
    /// use glam::DVec3;
    ///
    /// let arb = Arb::from_box(DVec3::ZERO, DVec3::new(1.0, 2.0, 3.0));
    /// assert_eq!(arb.pt[6], DVec3::new(1.0, 2.0, 3.0));
    /// ```
    pub fn from_box(min: DVec3, max: DVec3) -> Self {
        Self::new(Aabb::new(min, max).corners())
    }

    /// Tetrahedron from its four vertices.
    pub fn arb4(v: [DVec3; 4]) -> Self {
        Self::expand(ArbType::Arb4, &v)
    }

    /// Pyramid: four base vertices then the apex.
    pub fn arb5(v: [DVec3; 5]) -> Self {
        Self::expand(ArbType::Arb5, &v)
    }

    /// Wedge: four base vertices, then the ridge ends over edges 12 and 34.
    pub fn arb6(v: [DVec3; 6]) -> Self {
        Self::expand(ArbType::Arb6, &v)
    }

    /// Seven-vertex hexahedron (vertex 8 merged into vertex 5).
    pub fn arb7(v: [DVec3; 7]) -> Self {
        Self::expand(ArbType::Arb7, &v)
    }

    /// Builds the store of `arb_type` from its real vertices in label order.
    pub fn from_real_vertices(arb_type: ArbType, vertices: &[DVec3]) -> ArbResult<Self> {
        if vertices.len() != arb_type.vertex_count() {
            return Err(ArbError::invalid_parameter(format!(
                "{arb_type} needs {} vertices, got {}",
                arb_type.vertex_count(),
                vertices.len()
            )));
        }
        Ok(Self::expand(arb_type, vertices))
    }

    fn expand(arb_type: ArbType, vertices: &[DVec3]) -> Self {
        let mut pt = [DVec3::ZERO; ARB_VERTEX_SLOTS];
        for (&slot, &v) in topology::real_slots(arb_type).iter().zip(vertices) {
            pt[slot] = v;
        }
        topology::propagate_duplicates(arb_type, &mut pt);
        Self { pt }
    }

    /// Real vertices in label order.
    pub fn real_vertices(&self, arb_type: ArbType) -> Vec<DVec3> {
        topology::real_slots(arb_type)
            .iter()
            .map(|&slot| self.pt[slot])
            .collect()
    }

    /// Duplicate grouping and shape, see [`classify`].
    pub fn classify(&self, tol: &Tolerance) -> ArbResult<Classification> {
        classify(&self.pt, tol)
    }

    /// Shape of the store, requiring the canonical duplicate layout.
    pub fn arb_type(&self, tol: &Tolerance) -> ArbResult<ArbType> {
        let c = self.classify(tol)?;
        if !c.is_canonical() {
            return Err(ArbError::NonCanonicalLayout {
                arb_type: c.arb_type,
            });
        }
        Ok(c.arb_type)
    }

    /// Classifies and fits the outward face planes.
    pub fn face_planes(&self, tol: &Tolerance) -> ArbResult<FacePlanes> {
        FacePlanes::build(&self.pt, self.arb_type(tol)?, tol)
    }

    /// Re-copies real vertices into their duplicate slots.
    pub fn propagate_duplicates(&mut self, arb_type: ArbType) {
        topology::propagate_duplicates(arb_type, &mut self.pt);
    }

    /// Bounding box of the eight slots.
    pub fn bounding_box(&self) -> Aabb {
        let (min, max) = self
            .pt
            .iter()
            .skip(1)
            .fold((self.pt[0], self.pt[0]), |(lo, hi), p| (lo.min(*p), hi.max(*p)));
        Aabb { min, max }
    }

    /// Average of the real vertices.
    pub fn centroid(&self, tol: &Tolerance) -> ArbResult<DVec3> {
        let real = self.real_vertices(self.arb_type(tol)?);
        Ok(real.iter().sum::<DVec3>() / real.len() as f64)
    }

    /// Enclosed volume.
    ///
    /// The slots are split into six tetrahedra; tetrahedra whose base
    /// collapses (duplicate slots) contribute nothing.
    pub fn volume(&self, tol: &Tolerance) -> f64 {
        VOLUME_TETRAHEDRA
            .iter()
            .filter_map(|&[a, b, c, d]| {
                let (pa, pb, pc) = (self.pt[a], self.pt[b], self.pt[c]);
                let base = Plane::from_points(pa, pb, pc, tol)?;
                let height = base.signed_distance(self.pt[d]).abs();
                Some((pb - pa).cross(pc - pa).length() * height)
            })
            .sum::<f64>()
            / 6.0
    }

    /// Edges of the shape as slot pairs.
    pub fn edges(&self, tol: &Tolerance) -> ArbResult<&'static [(usize, usize)]> {
        Ok(topology::edges(self.arb_type(tol)?))
    }

    /// Shape name followed by one line per real vertex.
    ///
    /// # Examples
    /// ```
    /// use arb_kernel::{Arb, Tolerance};
    /// use glam::DVec3;
    ///
    /// let text = Arb::from_box(DVec3::ZERO, DVec3::ONE).describe(&Tolerance::default()).unwrap();
    /// assert!(text.starts_with("ARB8\n\t1 (0, 0, 0)"));
    /// ```
    pub fn describe(&self, tol: &Tolerance) -> ArbResult<String> {
        let arb_type = self.arb_type(tol)?;
        let mut out = format!("{arb_type}\n");
        for (i, v) in self.real_vertices(arb_type).iter().enumerate() {
            out.push_str(&format!("\t{} ({}, {}, {})\n", i + 1, v.x, v.y, v.z));
        }
        Ok(out)
    }

    /// Edit index of the edge (or point) whose projection through `view`
    /// lies closest to `screen` in view-space x/y.
    pub fn nearest_edge(&self, view: &DMat4, screen: DVec2, tol: &Tolerance) -> ArbResult<usize> {
        let arb_type = self.arb_type(tol)?;
        let project = |slot: usize| view.transform_point3(self.pt[slot]).truncate();

        let mut best: Option<(usize, f64)> = None;
        for (index, row) in topology::edit_rows(arb_type).iter().enumerate() {
            let dist = match row.target {
                EditTarget::Edge { v1, v2, .. } => {
                    distance_to_segment(screen, project(v1), project(v2))
                }
                EditTarget::Point(slot) => screen.distance(project(slot)),
            };
            if best.map_or(true, |(_, d)| dist < d) {
                best = Some((index, dist));
            }
        }
        best.map(|(index, _)| index)
            .ok_or_else(|| ArbError::invalid_parameter("shape has no edit rows"))
    }
}

fn distance_to_segment(p: DVec2, a: DVec2, b: DVec2) -> f64 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

#[cfg(test)]
mod tests;
