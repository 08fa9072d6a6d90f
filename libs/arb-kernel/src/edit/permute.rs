//! Vertex relabeling.

use glam::DVec3;

use super::transaction;
use crate::arb::classify::ArbType;
use crate::arb::planes::FacePlanes;
use crate::arb::topology;
use crate::arb::Arb;
use crate::config::Tolerance;
use crate::error::{ArbError, ArbResult};

/// Relabels the vertices of `arb`.
///
/// `encoded` lists the old vertex labels that take the roles of the new
/// vertices 1, 2, 3 ... It needs only as many labels as it takes to pick
/// one symmetry of the shape (3 for ARB4 and ARB8, 2 for ARB5 and ARB6,
/// 1 for ARB7) and at most one face worth of them. The geometry does not
/// change; only which slot holds which vertex.
///
/// # Examples
/// ```
/// use arb_kernel::{edit, Arb, FacePlanes, Tolerance};
/// use glam::DVec3;
///
/// let tol = Tolerance::default();
/// let mut arb = Arb::from_box(DVec3::ZERO, DVec3::ONE);
/// let before = arb;
/// edit::permute(&mut arb, &mut FacePlanes::default(), "567", &tol).unwrap();
/// assert_eq!(arb.pt[0], before.pt[4]);
/// ```
pub fn permute(
    arb: &mut Arb,
    planes: &mut FacePlanes,
    encoded: &str,
    tol: &Tolerance,
) -> ArbResult<()> {
    transaction("permute", arb, planes, tol, |s, _| {
        let relabel = lookup(s.arb_type, encoded)?;
        let old = s.pts;
        for (slot, c) in relabel.bytes().enumerate() {
            s.pts[slot] = match c {
                b'*' => DVec3::ZERO,
                digit => {
                    let label = usize::from(digit - b'0');
                    let from = topology::slot_of_label(s.arb_type, label).ok_or_else(|| {
                        ArbError::invalid_parameter(format!("no vertex {label}"))
                    })?;
                    old[from]
                }
            };
        }
        Ok(())
    })
}

/// Validates `encoded` and returns the full relabeling it selects.
fn lookup(arb_type: ArbType, encoded: &str) -> ArbResult<&'static str> {
    let invalid = |reason| ArbError::InvalidPermutation {
        encoded: encoded.to_string(),
        arb_type,
        reason,
    };
    let len = encoded.len();
    if len < topology::min_permutation_len(arb_type) {
        return Err(invalid("too short to pick a single relabeling"));
    }
    if len > topology::max_permutation_len(arb_type) {
        return Err(invalid("longer than one face"));
    }

    let mut seen = [false; 9];
    for c in encoded.bytes() {
        let label = match c {
            b'1'..=b'8' => usize::from(c - b'0'),
            _ => return Err(invalid("labels must be digits 1-8")),
        };
        if label > arb_type.vertex_count() {
            return Err(invalid("vertex label out of range"));
        }
        if std::mem::replace(&mut seen[label], true) {
            return Err(invalid("repeated vertex label"));
        }
    }

    let start = usize::from(encoded.as_bytes()[0] - b'0');
    topology::permutations(arb_type, start)
        .iter()
        .copied()
        .find(|p| p.starts_with(encoded))
        .ok_or_else(|| invalid("not a symmetry of the shape"))
}
