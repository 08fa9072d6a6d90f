//! Kernel-level tolerance built on the shared `config` crate.
//!
//! Every predicate in the kernel takes a [`Tolerance`] so callers can run
//! the same solid at different model scales.

use config::constants::{ConfigError, GlobalConfig, DIST_TOLERANCE, PERP_TOLERANCE};
use glam::DVec3;

/// Distance and angle tolerances forwarded to every geometric predicate.
///
/// # Examples
/// ```
/// use arb_kernel::config::Tolerance;
/// let tol = Tolerance::default();
/// assert_eq!(tol.dist_sq, tol.dist * tol.dist);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Points closer than this are coincident.
    pub dist: f64,
    /// `dist * dist`, cached.
    pub dist_sq: f64,
    /// Cosine below which directions are perpendicular.
    pub perp: f64,
    /// Cosine above which directions are parallel (`1 - perp`).
    pub para: f64,
}

impl Tolerance {
    /// Creates a tolerance from explicit values.
    ///
    /// # Examples
    /// ```
    /// use arb_kernel::config::Tolerance;
    /// let tol = Tolerance::new(1.0e-3, 1.0e-6).unwrap();
    /// assert_eq!(tol.dist, 1.0e-3);
    /// assert!(Tolerance::new(-1.0, 1.0e-6).is_err());
    /// ```
    pub fn new(dist: f64, perp: f64) -> Result<Self, ToleranceError> {
        GlobalConfig::new(dist, perp)
            .map(|cfg| Self::from_global(&cfg))
            .map_err(ToleranceError)
    }

    /// Builds the kernel tolerance from a validated global snapshot.
    pub fn from_global(cfg: &GlobalConfig) -> Self {
        Self {
            dist: cfg.dist_tolerance,
            dist_sq: cfg.dist_tolerance * cfg.dist_tolerance,
            perp: cfg.perp_tolerance,
            para: 1.0 - cfg.perp_tolerance,
        }
    }

    /// Component-wise coincidence test.
    #[inline]
    pub fn near_equal(&self, a: DVec3, b: DVec3) -> bool {
        let d = (a - b).abs();
        d.x < self.dist && d.y < self.dist && d.z < self.dist
    }

    /// True when `value` is within `dist` of zero.
    #[inline]
    pub fn near_zero(&self, value: f64) -> bool {
        value.abs() < self.dist
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            dist: DIST_TOLERANCE,
            dist_sq: DIST_TOLERANCE * DIST_TOLERANCE,
            perp: PERP_TOLERANCE,
            para: 1.0 - PERP_TOLERANCE,
        }
    }
}

/// Error wrapper for invalid tolerance values.
#[derive(Debug, PartialEq)]
pub struct ToleranceError(ConfigError);

impl std::fmt::Display for ToleranceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ToleranceError {}

#[cfg(test)]
mod tests;
