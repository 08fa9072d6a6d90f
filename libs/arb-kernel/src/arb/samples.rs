//! One valid vertex store per shape for unit tests.

use glam::DVec3;

use super::classify::ArbType;
use super::Arb;

fn v(x: f64, y: f64, z: f64) -> DVec3 {
    DVec3::new(x, y, z)
}

/// Frustum of a square pyramid.
pub(crate) fn arb8() -> Arb {
    Arb::new([
        v(0.0, 0.0, 0.0),
        v(4.0, 0.0, 0.0),
        v(4.0, 4.0, 0.0),
        v(0.0, 4.0, 0.0),
        v(1.0, 1.0, 2.0),
        v(3.0, 1.0, 2.0),
        v(3.0, 3.0, 2.0),
        v(1.0, 3.0, 2.0),
    ])
}

/// Square base, slanted back face, triangular top.
pub(crate) fn arb7() -> Arb {
    Arb::arb7([
        v(0.0, 0.0, 0.0),
        v(2.0, 0.0, 0.0),
        v(2.0, 2.0, 0.0),
        v(0.0, 2.0, 0.0),
        v(0.0, 0.0, 2.0),
        v(2.0, 0.0, 1.0),
        v(2.0, 1.0, 1.0),
    ])
}

/// Wedge with its ridge along y.
pub(crate) fn arb6() -> Arb {
    Arb::arb6([
        v(0.0, 0.0, 0.0),
        v(2.0, 0.0, 0.0),
        v(2.0, 2.0, 0.0),
        v(0.0, 2.0, 0.0),
        v(1.0, 0.0, 2.0),
        v(1.0, 2.0, 2.0),
    ])
}

pub(crate) fn arb5() -> Arb {
    Arb::arb5([
        v(0.0, 0.0, 0.0),
        v(2.0, 0.0, 0.0),
        v(2.0, 2.0, 0.0),
        v(0.0, 2.0, 0.0),
        v(1.0, 1.0, 2.0),
    ])
}

pub(crate) fn arb4() -> Arb {
    Arb::arb4([
        v(0.0, 0.0, 0.0),
        v(2.0, 0.0, 0.0),
        v(0.0, 2.0, 0.0),
        v(0.0, 0.0, 2.0),
    ])
}

pub(crate) fn sample(arb_type: ArbType) -> Arb {
    match arb_type {
        ArbType::Arb4 => arb4(),
        ArbType::Arb5 => arb5(),
        ArbType::Arb6 => arb6(),
        ArbType::Arb7 => arb7(),
        ArbType::Arb8 => arb8(),
    }
}
