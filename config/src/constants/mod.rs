//! Numeric tolerances and fixed capacities shared by the ARB kernel.
//!
//! Each public item documents its purpose and provides a minimal usage
//! example so downstream crates can stay declarative.

use std::fmt;

/// Distance below which two points are considered coincident (model units).
///
/// # Examples
/// ```
/// use config::constants::DIST_TOLERANCE;
/// assert!(DIST_TOLERANCE > 0.0 && DIST_TOLERANCE < 1.0e-2);
/// ```
pub const DIST_TOLERANCE: f64 = 0.0005;

/// Cosine below which two directions are treated as perpendicular; also the
/// sine below which they are treated as parallel.
///
/// # Examples
/// ```
/// use config::constants::PERP_TOLERANCE;
/// assert!(PERP_TOLERANCE < 1.0e-3);
/// ```
pub const PERP_TOLERANCE: f64 = 1.0e-6;

/// Rate of approach below which a ray counts as parallel to a face plane.
///
/// This is the square root of the smallest useful `f64` magnitude, so only
/// truly grazing rays fall into the parallel branch.
///
/// # Examples
/// ```
/// use config::constants::RAY_PARALLEL_EPSILON;
/// assert!(RAY_PARALLEL_EPSILON > 0.0);
/// ```
pub const RAY_PARALLEL_EPSILON: f64 = 1.0e-39;

/// Determinant magnitude below which three unit plane normals have no
/// unique common point.
///
/// # Examples
/// ```
/// use config::constants::PLANE_DETERMINANT_EPSILON;
/// assert!(PLANE_DETERMINANT_EPSILON < 1.0e-6);
/// ```
pub const PLANE_DETERMINANT_EPSILON: f64 = 1.0e-12;

/// Number of vertex slots in every ARB vertex store.
///
/// # Examples
/// ```
/// use config::constants::ARB_VERTEX_SLOTS;
/// assert_eq!(ARB_VERTEX_SLOTS, 8);
/// ```
pub const ARB_VERTEX_SLOTS: usize = 8;

/// Maximum number of face planes an ARB can carry.
///
/// # Examples
/// ```
/// use config::constants::ARB_MAX_FACES;
/// assert_eq!(ARB_MAX_FACES, 6);
/// ```
pub const ARB_MAX_FACES: usize = 6;

/// Rays handed to one rayon task by the parallel batched ray query.
///
/// # Examples
/// ```
/// use config::constants::RAY_BATCH_CHUNK;
/// assert!(RAY_BATCH_CHUNK.is_power_of_two());
/// ```
pub const RAY_BATCH_CHUNK: usize = 256;

/// Immutable snapshot of the tolerances shared between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.dist_tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Coincidence distance in model units.
    pub dist_tolerance: f64,
    /// Perpendicularity/parallelism tolerance (a cosine).
    pub perp_tolerance: f64,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of both tolerances.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-4, 1.0e-7).expect("valid config");
    /// assert_eq!(cfg.dist_tolerance, 1.0e-4);
    /// ```
    pub fn new(dist_tolerance: f64, perp_tolerance: f64) -> Result<Self, ConfigError> {
        if !dist_tolerance.is_finite() || dist_tolerance <= 0.0 {
            return Err(ConfigError::InvalidDistance(dist_tolerance));
        }
        if !perp_tolerance.is_finite() || perp_tolerance <= 0.0 || perp_tolerance >= 1.0 {
            return Err(ConfigError::InvalidPerpendicular(perp_tolerance));
        }
        Ok(Self {
            dist_tolerance,
            perp_tolerance,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            dist_tolerance: DIST_TOLERANCE,
            perp_tolerance: PERP_TOLERANCE,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the distance tolerance is not a positive finite number.
    InvalidDistance(f64),
    /// Raised when the perpendicular tolerance is outside `(0, 1)`.
    InvalidPerpendicular(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDistance(value) => {
                write!(f, "distance tolerance must be positive and finite: {value}")
            }
            ConfigError::InvalidPerpendicular(value) => {
                write!(f, "perpendicular tolerance must lie in (0, 1): {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
