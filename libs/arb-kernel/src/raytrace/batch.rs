//! Batched ray queries.
//!
//! Ray `i` is clipped against solid `i`. The loops run face-outer,
//! ray-inner, so one face row of every solid is processed before the next;
//! each ray still sees the bounding-sphere rejection and then its faces in
//! table order with the same arithmetic as [`PreparedArb::shoot`], so the
//! results are bit-identical.

use config::constants::{ARB_MAX_FACES, RAY_BATCH_CHUNK};
use rayon::prelude::*;

use super::{PreparedArb, Ray, Segment, Slab};
use crate::error::{ArbError, ArbResult};

fn check_lengths(solids: usize, rays: usize) -> ArbResult<()> {
    if solids != rays {
        return Err(ArbError::invalid_parameter(format!(
            "{solids} solids for {rays} rays"
        )));
    }
    Ok(())
}

/// Clips `rays[i]` against `solids[i]` for every `i`.
pub fn shoot_batch(solids: &[&PreparedArb], rays: &[Ray]) -> ArbResult<Vec<Option<Segment>>> {
    check_lengths(solids.len(), rays.len())?;
    Ok(transposed(solids, rays))
}

/// [`shoot_batch`] split into chunks of rays run on the rayon pool.
/// Output order matches input order.
pub fn par_shoot_batch(
    solids: &[&PreparedArb],
    rays: &[Ray],
) -> ArbResult<Vec<Option<Segment>>> {
    check_lengths(solids.len(), rays.len())?;
    let chunks: Vec<Vec<Option<Segment>>> = solids
        .par_chunks(RAY_BATCH_CHUNK)
        .zip(rays.par_chunks(RAY_BATCH_CHUNK))
        .map(|(solids, rays)| transposed(solids, rays))
        .collect();
    Ok(chunks.into_iter().flatten().collect())
}

fn transposed(solids: &[&PreparedArb], rays: &[Ray]) -> Vec<Option<Segment>> {
    let mut slabs: Vec<Slab> = solids
        .iter()
        .zip(rays)
        .map(|(solid, ray)| {
            if solid.may_intersect(ray) {
                Slab::START
            } else {
                Slab::MISS
            }
        })
        .collect();
    for face in 0..ARB_MAX_FACES {
        for ((slab, solid), ray) in slabs.iter_mut().zip(solids).zip(rays) {
            if !slab.alive() {
                continue;
            }
            if let Some(plane) = solid.planes.get(face) {
                slab.clip(plane, face, ray);
            }
        }
    }
    slabs.into_iter().map(Slab::finish).collect()
}
