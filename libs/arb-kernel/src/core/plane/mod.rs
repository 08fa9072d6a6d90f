//! # Plane
//!
//! Plane in Hessian normal form: `normal · x = offset` with a unit normal.
//! Points with a positive [`Plane::signed_distance`] are on the side the
//! normal points to.

use config::constants::PLANE_DETERMINANT_EPSILON;
use glam::DVec3;

use crate::config::Tolerance;

/// Plane with unit normal and offset from the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal.
    pub normal: DVec3,
    /// Distance from the origin along `normal`.
    pub offset: f64,
}

impl Plane {
    /// Creates a plane from raw parts. `normal` must already be unit length.
    pub const fn new(normal: DVec3, offset: f64) -> Self {
        Self { normal, offset }
    }

    /// Fits a plane through three points.
    ///
    /// The normal is `(b - a) × (c - a)` normalized, so it follows the
    /// right-hand rule on `a → b → c`. Returns `None` when any two points
    /// coincide within `tol.dist` or the three are collinear within
    /// `tol.perp`.
    ///
    /// # Examples
    /// ```
    /// use arb_kernel::{Plane, Tolerance};
    /// use glam::DVec3;
    ///
    /// let tol = Tolerance::default();
    /// let p = Plane::from_points(DVec3::ZERO, DVec3::X, DVec3::Y, &tol).unwrap();
    /// assert_eq!(p.normal, DVec3::Z);
    /// assert!(Plane::from_points(DVec3::ZERO, DVec3::X, DVec3::X * 2.0, &tol).is_none());
    /// ```
    pub fn from_points(a: DVec3, b: DVec3, c: DVec3, tol: &Tolerance) -> Option<Self> {
        let ba = b - a;
        let ca = c - a;
        if ba.length_squared() < tol.dist_sq
            || ca.length_squared() < tol.dist_sq
            || (c - b).length_squared() < tol.dist_sq
        {
            return None;
        }
        let cross = ba.cross(ca);
        let mag = cross.length();
        // sine of the angle at `a` below tolerance means collinear
        if !mag.is_finite() || mag <= tol.perp * ba.length() * ca.length() {
            return None;
        }
        let normal = cross / mag;
        Some(Self {
            normal,
            offset: normal.dot(a),
        })
    }

    /// Plane with the given direction passing through `point`.
    /// Returns `None` for a zero or non-finite normal.
    pub fn through_point(normal: DVec3, point: DVec3) -> Option<Self> {
        let normal = normal.try_normalize()?;
        Some(Self {
            normal,
            offset: normal.dot(point),
        })
    }

    /// Signed distance of `point` from the plane.
    #[inline]
    pub fn signed_distance(&self, point: DVec3) -> f64 {
        self.normal.dot(point) - self.offset
    }

    /// Same plane with the opposite orientation.
    #[inline]
    pub fn flipped(&self) -> Self {
        Self {
            normal: -self.normal,
            offset: -self.offset,
        }
    }

    /// Parameter `t` at which `through + t * dir` meets the plane.
    ///
    /// `t` is measured in units of `dir`, which need not be normalized.
    /// Returns `None` when the line is parallel to the plane within
    /// `tol.perp`.
    pub fn intersect_line(&self, through: DVec3, dir: DVec3, tol: &Tolerance) -> Option<f64> {
        let len = dir.length();
        let dn = self.normal.dot(dir);
        if len == 0.0 || dn.abs() <= tol.perp * len {
            return None;
        }
        Some((self.offset - self.normal.dot(through)) / dn)
    }

    /// The single point common to three planes, if there is one.
    ///
    /// # Examples
    /// ```
    /// use arb_kernel::Plane;
    /// use glam::DVec3;
    ///
    /// let p = Plane::intersect_three(
    ///     &Plane::new(DVec3::X, 1.0),
    ///     &Plane::new(DVec3::Y, 2.0),
    ///     &Plane::new(DVec3::Z, 3.0),
    /// )
    /// .unwrap();
    /// assert_eq!(p, DVec3::new(1.0, 2.0, 3.0));
    /// ```
    pub fn intersect_three(a: &Plane, b: &Plane, c: &Plane) -> Option<DVec3> {
        let bc = b.normal.cross(c.normal);
        let det = a.normal.dot(bc);
        if !det.is_finite() || det.abs() < PLANE_DETERMINANT_EPSILON {
            return None;
        }
        let ca = c.normal.cross(a.normal);
        let ab = a.normal.cross(b.normal);
        Some((bc * a.offset + ca * b.offset + ab * c.offset) / det)
    }

    /// Approximate equality of both normal and offset.
    pub fn approx_eq(&self, other: &Plane, tol: &Tolerance) -> bool {
        self.normal.dot(other.normal) >= tol.para && tol.near_zero(self.offset - other.offset)
    }
}

#[cfg(test)]
mod tests;
