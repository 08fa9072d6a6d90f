//! # Error Types
//!
//! Error types for ARB operations. All errors are explicit and carry the
//! 1-based vertex/face labels a user would see in an editor.
//!
//! ## Error Policy
//!
//! - NO fallback mechanisms when operations fail
//! - A failed edit leaves the vertex store and plane set untouched
//! - Errors fall into three kinds, see [`ErrorKind`]

use thiserror::Error;

use crate::arb::classify::ArbType;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Broad category of an [`ArbError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Collinear/coincident points, parallel lines or planes, collapsed edges.
    /// The caller keeps the object unchanged and reports the message.
    Degenerate,
    /// The vertex store is not one of the supported shapes.
    Classification,
    /// A selector or parameter was rejected before anything was touched.
    InvalidInput,
}

/// Errors that can occur during ARB operations.
///
/// ## Example
///
/// ```rust
/// use arb_kernel::{Arb, ArbError, ErrorKind, Tolerance};
/// use glam::DVec3;
///
/// let flat = Arb::new([DVec3::ZERO; 8]);
/// let err = flat.arb_type(&Tolerance::default()).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Classification);
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArbError {
    /// A face has no three usable points to fit a plane through.
    #[error("face {face} ({label}) is degenerate: {reason}")]
    DegenerateFace {
        /// Face index in the shape's face table.
        face: usize,
        /// 1-based vertex labels of the face.
        label: String,
        /// What went wrong.
        reason: &'static str,
    },

    /// A fourth face vertex lies off the plane fitted through the others.
    #[error("face {face} ({label}) is not planar: vertex {vertex} is {deviation:.6} off the plane")]
    NonPlanarFace {
        /// Face index in the shape's face table.
        face: usize,
        /// 1-based vertex labels of the face.
        label: String,
        /// 1-based label of the offending vertex.
        vertex: usize,
        /// Distance of the vertex from the fitted plane.
        deviation: f64,
    },

    /// Three points that should span a plane do not.
    #[error("points {points:?} do not define a plane")]
    DegeneratePlane {
        /// Vertex slots used for the fit.
        points: [usize; 3],
    },

    /// An edge or face direction with zero length.
    #[error("{what} has zero length")]
    ZeroDirection {
        /// Which direction was zero.
        what: &'static str,
    },

    /// A line runs parallel to a plane it has to cross.
    #[error("line is parallel to bounding plane {plane}")]
    ParallelToPlane {
        /// Plane index.
        plane: usize,
    },

    /// Three planes meant to define a vertex have no single common point.
    #[error("planes {planes:?} do not intersect in a point (vertex slot {slot})")]
    PlanesDoNotIntersect {
        /// Vertex slot being rebuilt.
        slot: usize,
        /// The three plane indices.
        planes: [usize; 3],
    },

    /// Two vertices joined by an edge ended up coincident.
    #[error("edge {v1}{v2} collapsed to zero length")]
    CollapsedEdge {
        /// 1-based label of the first vertex.
        v1: usize,
        /// 1-based label of the second vertex.
        v2: usize,
    },

    /// The solid has no interior, so face orientation is undefined.
    #[error("solid is flat: centroid lies on face {face}")]
    FlatSolid {
        /// Face the centroid touches.
        face: usize,
    },

    /// The duplicate pattern does not match any supported shape.
    #[error("{unique} unduplicated vertices do not form an ARB4..ARB8")]
    UnsupportedVertexPattern {
        /// Number of slots without a near-duplicate.
        unique: usize,
    },

    /// The duplicate slots are not where the shape's tables expect them.
    #[error("vertex store does not follow the {arb_type} duplicate layout")]
    NonCanonicalLayout {
        /// The classified shape.
        arb_type: ArbType,
    },

    /// A face identifier does not name a face of the shape.
    #[error("invalid face {face} for {arb_type}: {reason}")]
    InvalidFace {
        /// The identifier as supplied.
        face: u32,
        /// The classified shape.
        arb_type: ArbType,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// Mirror axis other than x, y or z.
    #[error("unrecognized axis '{0}', expected x, y or z")]
    InvalidAxis(String),

    /// A permutation string that is malformed or not in the table.
    #[error("invalid permutation '{encoded}' for {arb_type}: {reason}")]
    InvalidPermutation {
        /// The string as supplied.
        encoded: String,
        /// The classified shape.
        arb_type: ArbType,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// Edit row index past the end of the shape's edit table.
    #[error("edit index {index} out of range for {arb_type} ({count} rows)")]
    InvalidEditIndex {
        /// Requested row.
        index: usize,
        /// The classified shape.
        arb_type: ArbType,
        /// Rows available.
        count: usize,
    },

    /// The operation has no meaning for this shape or element.
    #[error("{operation} is not supported for {arb_type}")]
    UnsupportedOperation {
        /// Operation name.
        operation: &'static str,
        /// The classified shape.
        arb_type: ArbType,
    },

    /// Any other rejected parameter (non-finite distance, bad index...).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

impl ArbError {
    /// Returns the taxonomy bucket of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DegenerateFace { .. }
            | Self::NonPlanarFace { .. }
            | Self::DegeneratePlane { .. }
            | Self::ZeroDirection { .. }
            | Self::ParallelToPlane { .. }
            | Self::PlanesDoNotIntersect { .. }
            | Self::CollapsedEdge { .. }
            | Self::FlatSolid { .. } => ErrorKind::Degenerate,
            Self::UnsupportedVertexPattern { .. } | Self::NonCanonicalLayout { .. } => {
                ErrorKind::Classification
            }
            Self::InvalidFace { .. }
            | Self::InvalidAxis(_)
            | Self::InvalidPermutation { .. }
            | Self::InvalidEditIndex { .. }
            | Self::UnsupportedOperation { .. }
            | Self::InvalidParameter(_) => ErrorKind::InvalidInput,
        }
    }

    /// True for geometric degeneracy the caller can recover from.
    pub fn is_degenerate(&self) -> bool {
        self.kind() == ErrorKind::Degenerate
    }

    /// Helper for [`ArbError::InvalidParameter`].
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter(message.into())
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for ARB operations.
pub type ArbResult<T> = Result<T, ArbError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test error display messages.
    #[test]
    fn test_error_display() {
        let err = ArbError::DegenerateFace {
            face: 0,
            label: "1234".to_string(),
            reason: "vertices are collinear",
        };
        assert!(err.to_string().contains("1234"));
        assert!(err.to_string().contains("collinear"));

        let err = ArbError::InvalidAxis("w".to_string());
        assert!(err.to_string().contains("'w'"));

        let err = ArbError::InvalidEditIndex {
            index: 12,
            arb_type: ArbType::Arb8,
            count: 12,
        };
        assert!(err.to_string().contains("ARB8"));
    }

    /// Test the taxonomy buckets.
    #[test]
    fn test_error_kinds() {
        assert!(ArbError::ParallelToPlane { plane: 2 }.is_degenerate());
        assert_eq!(
            ArbError::UnsupportedVertexPattern { unique: 3 }.kind(),
            ErrorKind::Classification
        );
        assert_eq!(
            ArbError::invalid_parameter("distance is NaN").kind(),
            ErrorKind::InvalidInput
        );
    }

    /// Test error types are Send + Sync for use across render threads.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ArbError>();
    }
}
