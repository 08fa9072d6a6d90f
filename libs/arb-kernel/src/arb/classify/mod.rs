//! # Shape classification
//!
//! Buckets the 8 slots of a vertex store into near-duplicate groups and
//! names the canonical shape they form. Counting is done on slots that
//! have no duplicate at all:
//!
//! | unduplicated slots | shape |
//! |--------------------|-------|
//! | 8                  | ARB8  |
//! | 6                  | ARB7  |
//! | 4, first group of 2 | ARB6 |
//! | 4, otherwise       | ARB5  |
//! | 2                  | ARB4  |

use std::fmt;

use config::constants::ARB_VERTEX_SLOTS;
use glam::DVec3;

use crate::config::Tolerance;
use crate::error::{ArbError, ArbResult};

/// One of the five canonical ARB shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ArbType {
    /// Tetrahedron.
    Arb4,
    /// Pyramid on a quadrilateral base.
    Arb5,
    /// Wedge: quadrilateral base and a ridge.
    Arb6,
    /// Hexahedron with one corner collapsed.
    Arb7,
    /// General hexahedron.
    Arb8,
}

impl ArbType {
    /// All shapes, smallest first.
    pub const ALL: [ArbType; 5] = [
        ArbType::Arb4,
        ArbType::Arb5,
        ArbType::Arb6,
        ArbType::Arb7,
        ArbType::Arb8,
    ];

    /// Number of distinct (real) vertices.
    pub const fn vertex_count(self) -> usize {
        match self {
            ArbType::Arb4 => 4,
            ArbType::Arb5 => 5,
            ArbType::Arb6 => 6,
            ArbType::Arb7 => 7,
            ArbType::Arb8 => 8,
        }
    }

    /// Number of faces.
    pub const fn face_count(self) -> usize {
        match self {
            ArbType::Arb4 => 4,
            ArbType::Arb5 | ArbType::Arb6 => 5,
            ArbType::Arb7 | ArbType::Arb8 => 6,
        }
    }

    /// Row of this shape in the per-shape tables.
    pub(crate) const fn index(self) -> usize {
        self.vertex_count() - 4
    }
}

impl fmt::Display for ArbType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ARB{}", self.vertex_count())
    }
}

/// Result of [`classify`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// The shape the duplicate pattern describes.
    pub arb_type: ArbType,
    /// Slots with no near-duplicate, ascending.
    pub unique: Vec<usize>,
    /// Groups of mutually coincident slots, each ascending, ordered by
    /// their first slot.
    pub duplicates: Vec<Vec<usize>>,
}

impl Classification {
    /// True when the duplicate groups sit exactly where the shape's tables
    /// expect them.
    pub fn is_canonical(&self) -> bool {
        let expected = crate::arb::topology::duplicate_groups(self.arb_type);
        self.duplicates.len() == expected.len()
            && self
                .duplicates
                .iter()
                .zip(expected)
                .all(|(got, want)| got.as_slice() == *want)
    }
}

/// Classifies an 8-slot vertex store.
///
/// Every slot is compared with every later, not yet grouped slot; slots
/// within `tol.dist` component-wise form a group.
///
/// # Examples
/// ```
/// use arb_kernel::{classify, Arb, ArbType, Tolerance};
/// use glam::DVec3;
///
/// let cube = Arb::from_box(DVec3::ZERO, DVec3::ONE);
/// let c = classify(&cube.pt, &Tolerance::default()).unwrap();
/// assert_eq!(c.arb_type, ArbType::Arb8);
/// assert!(c.duplicates.is_empty());
/// ```
pub fn classify(points: &[DVec3; ARB_VERTEX_SLOTS], tol: &Tolerance) -> ArbResult<Classification> {
    let mut grouped = [false; ARB_VERTEX_SLOTS];
    let mut unique = Vec::with_capacity(ARB_VERTEX_SLOTS);
    let mut duplicates: Vec<Vec<usize>> = Vec::new();

    for i in 0..ARB_VERTEX_SLOTS {
        if grouped[i] {
            continue;
        }
        let mut group = vec![i];
        for j in (i + 1)..ARB_VERTEX_SLOTS {
            if !grouped[j] && tol.near_equal(points[i], points[j]) {
                grouped[j] = true;
                group.push(j);
            }
        }
        if group.len() == 1 {
            unique.push(i);
        } else {
            duplicates.push(group);
        }
    }

    let arb_type = match unique.len() {
        8 => ArbType::Arb8,
        6 => ArbType::Arb7,
        4 if duplicates.first().map(Vec::len) == Some(2) => ArbType::Arb6,
        4 => ArbType::Arb5,
        2 => ArbType::Arb4,
        n => {
            tracing::debug!(unique = n, "vertex pattern matches no ARB shape");
            return Err(ArbError::UnsupportedVertexPattern { unique: n });
        }
    };

    tracing::trace!(%arb_type, ?duplicates, "classified vertex store");
    Ok(Classification {
        arb_type,
        unique,
        duplicates,
    })
}
