//! # Edit Operations
//!
//! Topology-preserving edits on an [`Arb`]:
//! - **edit_element**: drag an edge or point picked from the shape's edit table
//! - **move_edge**: slide an edge between its two bounding planes
//! - **extrude_face** / **mirror_face**: rebuild the vertices off a named face
//! - **permute**: relabel the real vertices
//! - **move_face** / **rotate_face**: change one face plane, rebuild all vertices
//!
//! ## Transactions
//!
//! Every operation works on a scratch copy of the vertex store with freshly
//! built face planes. The copy is committed only when it still classifies
//! as the expected shape, every face is planar and no edge collapsed; the
//! caller's [`FacePlanes`] are then refreshed from the committed store. A
//! failed edit leaves both untouched.

mod element;
mod face;
mod permute;


pub use element::{edit_element, move_edge};
pub use face::{extrude_face, mirror_face, move_face, normal_from_angles, rotate_face};
pub use permute::permute;

use std::fmt;
use std::str::FromStr;

use config::constants::ARB_VERTEX_SLOTS;
use glam::DVec3;

use crate::arb::classify::{classify, ArbType};
use crate::arb::planes::{check_edges, FacePlanes};
use crate::arb::{topology, Arb};
use crate::config::Tolerance;
use crate::error::{ArbError, ArbResult};

// =============================================================================
// PARAMETER TYPES
// =============================================================================

/// Principal axis for [`mirror_face`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// X axis.
    X,
    /// Y axis.
    Y,
    /// Z axis.
    Z,
}

impl Axis {
    /// Component index (0, 1, 2).
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Axis::X => 'x',
            Axis::Y => 'y',
            Axis::Z => 'z',
        };
        write!(f, "{c}")
    }
}

impl FromStr for Axis {
    type Err = ArbError;

    /// Parses `x`, `y` or `z`, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "x" | "X" => Ok(Axis::X),
            "y" | "Y" => Ok(Axis::Y),
            "z" | "Z" => Ok(Axis::Z),
            other => Err(ArbError::InvalidAxis(other.to_string())),
        }
    }
}

/// New location for the element picked by [`edit_element`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ElementMove {
    /// Point rows: the new position. Edge rows: the edge keeps its
    /// direction and passes through this point.
    To(DVec3),
    /// Edge rows: pivot the edge about its first endpoint.
    Direction(DVec3),
    /// Edge rows: an explicit new line.
    Line {
        /// A point on the line.
        through: DVec3,
        /// Line direction, any non-zero length.
        direction: DVec3,
    },
}

// =============================================================================
// TRANSACTION
// =============================================================================

/// Working copy handed to an edit closure.
pub(crate) struct Scratch {
    /// Shape the scratch store must have on commit. Edits that change the
    /// shape (ARB4 extrusion) update it.
    pub arb_type: ArbType,
    /// Copy of the vertex store.
    pub pts: [DVec3; ARB_VERTEX_SLOTS],
    /// Face planes built from the store before the edit.
    pub planes: FacePlanes,
}

/// Runs `edit` on a scratch copy of `arb` and commits it if it validates.
pub(crate) fn transaction<F>(
    operation: &'static str,
    arb: &mut Arb,
    planes: &mut FacePlanes,
    tol: &Tolerance,
    edit: F,
) -> ArbResult<()>
where
    F: FnOnce(&mut Scratch, &Tolerance) -> ArbResult<()>,
{
    match stage(arb, tol, edit) {
        Ok((arb_type, pts, fresh)) => {
            arb.pt = pts;
            *planes = fresh;
            tracing::debug!(operation, %arb_type, "edit committed");
            Ok(())
        }
        Err(error) => {
            tracing::warn!(operation, %error, "edit rejected");
            Err(error)
        }
    }
}

fn stage<F>(
    arb: &Arb,
    tol: &Tolerance,
    edit: F,
) -> ArbResult<(ArbType, [DVec3; ARB_VERTEX_SLOTS], FacePlanes)>
where
    F: FnOnce(&mut Scratch, &Tolerance) -> ArbResult<()>,
{
    let arb_type = arb.arb_type(tol)?;
    let mut scratch = Scratch {
        arb_type,
        pts: arb.pt,
        planes: FacePlanes::build(&arb.pt, arb_type, tol)?,
    };
    edit(&mut scratch, tol)?;

    let Scratch {
        arb_type, mut pts, ..
    } = scratch;
    topology::propagate_duplicates(arb_type, &mut pts);
    check_edges(&pts, arb_type, tol)?;
    let fresh = FacePlanes::build(&pts, arb_type, tol)?;

    let c = classify(&pts, tol)?;
    if c.arb_type != arb_type || !c.is_canonical() {
        return Err(ArbError::NonCanonicalLayout {
            arb_type: c.arb_type,
        });
    }
    Ok((arb_type, pts, fresh))
}
