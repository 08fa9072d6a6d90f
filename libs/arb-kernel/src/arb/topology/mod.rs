//! # Topology tables
//!
//! Static per-shape data shared by the plane builder, the point
//! reconstructor and the edit layer. Slot numbers are 0-based; the labels
//! a user sees are the 1-based positions of the real vertices (see
//! [`real_slots`]).
//!
//! All tables are indexed by [`ArbType`] in the order ARB4, ARB5, ARB6,
//! ARB7, ARB8.

use config::constants::ARB_VERTEX_SLOTS;
use glam::DVec3;

use crate::arb::classify::ArbType;

// =============================================================================
// VERTEX LAYOUT
// =============================================================================

/// Slot each slot copies its position from.
const SLOT_SOURCE: [[usize; ARB_VERTEX_SLOTS]; 5] = [
    [0, 1, 2, 0, 4, 4, 4, 4],
    [0, 1, 2, 3, 4, 4, 4, 4],
    [0, 1, 2, 3, 4, 4, 6, 6],
    [0, 1, 2, 3, 4, 5, 6, 4],
    [0, 1, 2, 3, 4, 5, 6, 7],
];

const REAL_SLOTS: [&[usize]; 5] = [
    &[0, 1, 2, 4],
    &[0, 1, 2, 3, 4],
    &[0, 1, 2, 3, 4, 6],
    &[0, 1, 2, 3, 4, 5, 6],
    &[0, 1, 2, 3, 4, 5, 6, 7],
];

const DUPLICATE_GROUPS: [&[&[usize]]; 5] = [
    &[&[0, 3], &[4, 5, 6, 7]],
    &[&[4, 5, 6, 7]],
    &[&[4, 5], &[6, 7]],
    &[&[4, 7]],
    &[],
];

/// Slots holding the real vertices of a shape; position `i` is vertex
/// label `i + 1`.
pub fn real_slots(arb_type: ArbType) -> &'static [usize] {
    REAL_SLOTS[arb_type.index()]
}

/// The slot a given slot mirrors (itself for real slots).
pub fn source_slot(arb_type: ArbType, slot: usize) -> usize {
    SLOT_SOURCE[arb_type.index()][slot]
}

/// Groups of slots that hold the same vertex in the canonical layout.
pub fn duplicate_groups(arb_type: ArbType) -> &'static [&'static [usize]] {
    DUPLICATE_GROUPS[arb_type.index()]
}

/// 1-based vertex label of a slot.
pub fn vertex_label(arb_type: ArbType, slot: usize) -> usize {
    let source = source_slot(arb_type, slot);
    real_slots(arb_type)
        .iter()
        .position(|&s| s == source)
        .map_or(0, |i| i + 1)
}

/// Slot of a 1-based vertex label, if the shape has that vertex.
pub fn slot_of_label(arb_type: ArbType, label: usize) -> Option<usize> {
    label
        .checked_sub(1)
        .and_then(|i| real_slots(arb_type).get(i).copied())
}

/// Copies every real vertex into the slots that duplicate it.
///
/// This is the only place duplicate slots are written.
pub fn propagate_duplicates(arb_type: ArbType, pts: &mut [DVec3; ARB_VERTEX_SLOTS]) {
    for slot in 0..ARB_VERTEX_SLOTS {
        let source = source_slot(arb_type, slot);
        if source != slot {
            pts[slot] = pts[source];
        }
    }
}

// =============================================================================
// FACES
// =============================================================================

const ARB4_FACES: [[usize; 4]; 4] = [[0, 1, 2, 3], [0, 1, 4, 5], [1, 2, 4, 5], [0, 2, 4, 5]];
const ARB5_FACES: [[usize; 4]; 5] = [
    [0, 1, 2, 3],
    [4, 0, 1, 5],
    [4, 1, 2, 5],
    [4, 2, 3, 5],
    [4, 3, 0, 5],
];
const ARB6_FACES: [[usize; 4]; 5] = [
    [0, 1, 2, 3],
    [1, 2, 4, 6],
    [0, 4, 6, 3],
    [4, 1, 0, 5],
    [6, 2, 3, 7],
];
const ARB7_FACES: [[usize; 4]; 6] = [
    [0, 1, 2, 3],
    [4, 5, 6, 7],
    [0, 3, 4, 7],
    [1, 2, 6, 5],
    [0, 1, 5, 4],
    [3, 2, 6, 4],
];
const ARB8_FACES: [[usize; 4]; 6] = [
    [0, 1, 2, 3],
    [4, 5, 6, 7],
    [0, 4, 7, 3],
    [1, 2, 6, 5],
    [0, 1, 5, 4],
    [3, 2, 6, 7],
];

/// Face table: four slots per face, duplicates allowed for triangles.
pub fn faces(arb_type: ArbType) -> &'static [[usize; 4]] {
    match arb_type {
        ArbType::Arb4 => &ARB4_FACES,
        ArbType::Arb5 => &ARB5_FACES,
        ArbType::Arb6 => &ARB6_FACES,
        ArbType::Arb7 => &ARB7_FACES,
        ArbType::Arb8 => &ARB8_FACES,
    }
}

/// Distinct vertex labels of a face, in table order.
pub fn face_labels(arb_type: ArbType, face: usize) -> Vec<usize> {
    let mut labels = Vec::with_capacity(4);
    if let Some(slots) = faces(arb_type).get(face) {
        for &slot in slots {
            let label = vertex_label(arb_type, slot);
            if !labels.contains(&label) {
                labels.push(label);
            }
        }
    }
    labels
}

/// Face labels as the digit string users type, e.g. `"1584"`.
pub fn face_name(arb_type: ArbType, face: usize) -> String {
    face_labels(arb_type, face)
        .iter()
        .map(|l| l.to_string())
        .collect()
}

/// Index of the face whose label set equals `sorted_labels`.
pub fn face_with_labels(arb_type: ArbType, sorted_labels: &[usize]) -> Option<usize> {
    (0..arb_type.face_count()).find(|&face| {
        let mut labels = face_labels(arb_type, face);
        labels.sort_unstable();
        labels == sorted_labels
    })
}

// =============================================================================
// VERTEX → DEFINING PLANES
// =============================================================================

const VERTEX_PLANES: [[[usize; 3]; ARB_VERTEX_SLOTS]; 5] = [
    [[0, 1, 3], [0, 1, 2], [0, 2, 3], [0, 1, 3], [1, 2, 3], [1, 2, 3], [1, 2, 3], [1, 2, 3]],
    [[0, 1, 4], [0, 1, 2], [0, 2, 3], [0, 3, 4], [1, 2, 4], [1, 2, 4], [1, 2, 4], [1, 2, 4]],
    [[0, 2, 3], [0, 1, 3], [0, 1, 4], [0, 2, 4], [1, 2, 3], [1, 2, 3], [1, 2, 4], [1, 2, 4]],
    [[0, 2, 4], [0, 3, 4], [0, 3, 5], [0, 2, 5], [1, 4, 5], [1, 3, 4], [1, 3, 5], [1, 2, 4]],
    [[0, 2, 4], [0, 3, 4], [0, 3, 5], [0, 2, 5], [1, 2, 4], [1, 3, 4], [1, 3, 5], [1, 2, 5]],
];

/// The three faces whose planes meet at a slot.
pub fn vertex_planes(arb_type: ArbType, slot: usize) -> [usize; 3] {
    VERTEX_PLANES[arb_type.index()][slot]
}

// =============================================================================
// EDGES
// =============================================================================

const VALIDATION_EDGES: [&[(usize, usize)]; 5] = [
    &[(0, 1), (1, 2), (2, 0), (0, 4), (1, 4), (2, 4)],
    &[(0, 1), (1, 2), (2, 3), (0, 3), (0, 4), (1, 4), (2, 4), (3, 4)],
    &[(0, 1), (1, 2), (2, 3), (0, 3), (0, 4), (1, 4), (2, 6), (3, 6), (4, 6)],
    &[
        (0, 1), (1, 2), (2, 3), (0, 3), (0, 4), (1, 5),
        (4, 5), (5, 6), (2, 6), (4, 6), (3, 4),
    ],
    &[
        (0, 1), (1, 2), (2, 3), (0, 3), (0, 4), (1, 5),
        (4, 5), (5, 6), (6, 7), (4, 7), (2, 6), (3, 7),
    ],
];

/// Every edge of the shape as a pair of real slots. Used for the
/// collapsed-edge check and for edge listings.
pub fn edges(arb_type: ArbType) -> &'static [(usize, usize)] {
    VALIDATION_EDGES[arb_type.index()]
}

// =============================================================================
// EDIT DESCRIPTORS
// =============================================================================

/// What an edit row moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    /// Edge between two slots, slid between two bounding planes.
    Edge {
        /// First endpoint slot.
        v1: usize,
        /// Second endpoint slot.
        v2: usize,
        /// Plane that receives `v1` and the plane that receives `v2`.
        bound: [usize; 2],
    },
    /// A single vertex slot.
    Point(usize),
}

/// Plane rebuild instruction run after the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneRebuild {
    /// Refit every face from the face table.
    All,
    /// Refit one face through three slots.
    Through {
        /// Face index.
        face: usize,
        /// Slots the plane passes through.
        points: [usize; 3],
    },
    /// Refit one face through the first three slots of its face-table row.
    FromFaceTable(usize),
}

/// One row of a shape's edit table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditRow {
    /// Menu label, e.g. `"edge 12"` or `"point 5"`.
    pub label: &'static str,
    /// What moves.
    pub target: EditTarget,
    /// Planes to refit, in order.
    pub rebuild: &'static [PlaneRebuild],
    /// Slots to re-intersect from their defining planes afterwards.
    pub rederive: &'static [usize],
}

const fn edge(
    label: &'static str,
    v1: usize,
    v2: usize,
    bound: [usize; 2],
    rebuild: &'static [PlaneRebuild],
    rederive: &'static [usize],
) -> EditRow {
    EditRow {
        label,
        target: EditTarget::Edge { v1, v2, bound },
        rebuild,
        rederive,
    }
}

const fn point(
    label: &'static str,
    slot: usize,
    rebuild: &'static [PlaneRebuild],
    rederive: &'static [usize],
) -> EditRow {
    EditRow {
        label,
        target: EditTarget::Point(slot),
        rebuild,
        rederive,
    }
}

const fn through(face: usize, a: usize, b: usize, c: usize) -> PlaneRebuild {
    PlaneRebuild::Through {
        face,
        points: [a, b, c],
    }
}

use self::PlaneRebuild::{All, FromFaceTable};

const REBUILD_ALL: &[PlaneRebuild] = &[All];

const ARB8_EDITS: [EditRow; 12] = [
    edge("edge 12", 0, 1, [2, 3], &[through(0, 0, 1, 2), through(4, 0, 1, 4)], &[3, 5]),
    edge("edge 23", 1, 2, [4, 5], &[through(0, 0, 1, 2), through(3, 1, 2, 5)], &[3, 6]),
    edge("edge 34", 2, 3, [3, 2], &[through(0, 0, 2, 3), through(5, 2, 3, 6)], &[1, 7]),
    edge("edge 14", 0, 3, [4, 5], &[through(0, 0, 1, 3), through(2, 0, 3, 4)], &[2, 7]),
    edge("edge 15", 0, 4, [0, 1], &[through(2, 0, 4, 3), through(4, 0, 1, 4)], &[7, 5]),
    edge("edge 26", 1, 5, [0, 1], &[through(4, 0, 1, 5), through(3, 1, 2, 5)], &[4, 6]),
    edge("edge 56", 4, 5, [2, 3], &[through(4, 0, 5, 4), through(1, 4, 5, 6)], &[1, 7]),
    edge("edge 67", 5, 6, [4, 5], &[through(3, 1, 5, 6), through(1, 4, 5, 6)], &[2, 7]),
    edge("edge 78", 6, 7, [3, 2], &[through(5, 2, 7, 6), through(1, 4, 6, 7)], &[3, 4]),
    edge("edge 58", 4, 7, [4, 5], &[through(2, 0, 7, 4), through(1, 4, 5, 7)], &[3, 6]),
    edge("edge 37", 2, 6, [0, 1], &[through(3, 1, 2, 6), through(5, 2, 3, 6)], &[5, 7]),
    edge("edge 48", 3, 7, [0, 1], &[through(2, 0, 3, 7), through(5, 2, 3, 7)], &[4, 6]),
];

const ARB7_EDITS: [EditRow; 12] = [
    edge("edge 12", 0, 1, [2, 3], &[through(0, 0, 1, 2), through(4, 0, 1, 4)], &[3, 5]),
    edge("edge 23", 1, 2, [4, 5], &[through(0, 0, 1, 2), through(3, 1, 2, 5)], &[3, 6]),
    edge("edge 34", 2, 3, [3, 2], &[through(0, 0, 2, 3), through(5, 2, 3, 6)], &[1, 4]),
    edge("edge 14", 0, 3, [4, 5], &[through(0, 0, 1, 3), through(2, 0, 3, 4)], &[2]),
    edge(
        "edge 15",
        0,
        4,
        [0, 5],
        &[through(4, 0, 5, 4), through(2, 0, 3, 4), through(1, 4, 5, 6)],
        &[1],
    ),
    edge("edge 26", 1, 5, [0, 1], &[through(4, 0, 1, 5), through(3, 1, 2, 5)], &[4, 6]),
    edge(
        "edge 56",
        4,
        5,
        [5, 3],
        &[through(2, 0, 3, 4), through(4, 0, 5, 4), through(1, 4, 5, 6)],
        &[1],
    ),
    edge("edge 67", 5, 6, [4, 5], &[through(3, 1, 6, 5), through(1, 4, 5, 6)], &[2]),
    edge("edge 37", 2, 6, [0, 1], &[through(5, 2, 3, 6), through(3, 1, 2, 6)], &[4, 5]),
    edge(
        "edge 57",
        4,
        6,
        [4, 3],
        &[through(2, 0, 3, 4), through(5, 3, 4, 6), through(1, 4, 5, 6)],
        &[2],
    ),
    edge(
        "edge 45",
        3,
        4,
        [0, 1],
        &[through(4, 0, 1, 4), through(2, 0, 3, 4), through(5, 2, 3, 4)],
        &[5, 6],
    ),
    point(
        "point 5",
        4,
        &[through(5, 2, 3, 4), through(4, 0, 1, 4), FromFaceTable(2), FromFaceTable(1)],
        &[6, 5],
    ),
];

const ARB6_EDITS: [EditRow; 10] = [
    edge("edge 12", 0, 1, [2, 1], &[through(3, 0, 1, 4), through(0, 0, 1, 2)], &[3]),
    edge("edge 23", 1, 2, [3, 4], &[through(1, 1, 2, 5), through(0, 0, 1, 2)], &[3, 4]),
    edge("edge 34", 2, 3, [1, 2], &[through(4, 2, 3, 5), through(0, 0, 2, 3)], &[1]),
    edge("edge 14", 0, 3, [3, 4], &[through(2, 0, 3, 5), through(0, 0, 1, 3)], &[4, 2]),
    edge("edge 15", 0, 4, [0, 1], &[through(3, 0, 1, 4), through(2, 0, 3, 4)], &[6]),
    edge("edge 25", 1, 4, [0, 2], &[through(3, 0, 1, 4), through(1, 1, 2, 4)], &[6]),
    edge("edge 36", 2, 6, [0, 2], &[through(4, 6, 2, 3), through(1, 1, 2, 6)], &[4]),
    edge("edge 46", 3, 6, [0, 1], &[through(4, 6, 2, 3), through(2, 0, 3, 6)], &[4]),
    point(
        "point 5",
        4,
        &[through(2, 0, 3, 4), through(1, 1, 2, 4), through(3, 0, 1, 4)],
        &[6],
    ),
    point(
        "point 6",
        6,
        &[through(2, 0, 3, 6), through(1, 1, 2, 6), through(4, 2, 3, 6)],
        &[4],
    ),
];

const ARB5_EDITS: [EditRow; 9] = [
    edge("edge 12", 0, 1, [4, 2], &[through(0, 0, 1, 2), through(1, 0, 1, 4)], &[3]),
    edge("edge 23", 1, 2, [1, 3], &[through(0, 0, 1, 2), through(2, 1, 2, 4)], &[3]),
    edge("edge 34", 2, 3, [2, 4], &[through(0, 0, 2, 3), through(3, 2, 3, 4)], &[1]),
    edge("edge 14", 0, 3, [1, 3], &[through(0, 0, 1, 3), through(4, 0, 3, 4)], &[2]),
    edge("edge 15", 0, 4, [0, 2], REBUILD_ALL, &[]),
    edge("edge 25", 1, 4, [0, 3], REBUILD_ALL, &[]),
    edge("edge 35", 2, 4, [0, 4], REBUILD_ALL, &[]),
    edge("edge 45", 3, 4, [0, 1], REBUILD_ALL, &[]),
    point("point 5", 4, REBUILD_ALL, &[]),
];

const ARB4_EDITS: [EditRow; 5] = [
    point("point 1", 0, REBUILD_ALL, &[]),
    point("point 2", 1, REBUILD_ALL, &[]),
    point("point 3", 2, REBUILD_ALL, &[]),
    point("point 4", 4, REBUILD_ALL, &[]),
    point("point 4", 4, REBUILD_ALL, &[]),
];

/// Edit table of a shape; the row index is the edit index callers pass.
pub fn edit_rows(arb_type: ArbType) -> &'static [EditRow] {
    match arb_type {
        ArbType::Arb4 => &ARB4_EDITS,
        ArbType::Arb5 => &ARB5_EDITS,
        ArbType::Arb6 => &ARB6_EDITS,
        ArbType::Arb7 => &ARB7_EDITS,
        ArbType::Arb8 => &ARB8_EDITS,
    }
}

// =============================================================================
// EXTRUDE / MIRROR FACE CASES
// =============================================================================

/// How the vertices off a named face are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceSweep {
    /// `(destination, source)` slot pairs: each destination becomes a
    /// transformed copy of its source on the named face.
    Pairs([(usize, usize); 4]),
    /// An ARB4 face swept into a wedge; the three slots are the face's
    /// vertices in label order.
    PromoteArb4([usize; 3]),
}

/// One recognised face of the extrude/mirror case table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceCase {
    /// Sorted 1-based labels of the face.
    pub labels: &'static [usize],
    /// Shapes the case applies to.
    pub shapes: &'static [ArbType],
    /// Vertex production rule.
    pub sweep: FaceSweep,
}

impl FaceCase {
    /// Product of the labels; unique per face within one shape.
    pub fn key(&self) -> usize {
        self.labels.iter().product()
    }
}

const ARB8_ONLY: &[ArbType] = &[ArbType::Arb8];
const ARB6_ONLY: &[ArbType] = &[ArbType::Arb6];
const ARB4_ONLY: &[ArbType] = &[ArbType::Arb4];

const SWEEP_1256: FaceSweep = FaceSweep::Pairs([(3, 0), (2, 1), (7, 4), (6, 5)]);
const SWEEP_3478: FaceSweep = FaceSweep::Pairs([(0, 3), (1, 2), (5, 6), (4, 7)]);

static FACE_CASES: [FaceCase; 12] = [
    FaceCase {
        labels: &[1, 2, 3, 4],
        shapes: ARB8_ONLY,
        sweep: FaceSweep::Pairs([(4, 0), (5, 1), (6, 2), (7, 3)]),
    },
    FaceCase {
        labels: &[5, 6, 7, 8],
        shapes: ARB8_ONLY,
        sweep: FaceSweep::Pairs([(0, 4), (1, 5), (2, 6), (3, 7)]),
    },
    FaceCase {
        labels: &[1, 2, 5, 6],
        shapes: ARB8_ONLY,
        sweep: SWEEP_1256,
    },
    FaceCase {
        labels: &[1, 2, 5],
        shapes: ARB6_ONLY,
        sweep: SWEEP_1256,
    },
    FaceCase {
        labels: &[3, 4, 7, 8],
        shapes: ARB8_ONLY,
        sweep: SWEEP_3478,
    },
    FaceCase {
        labels: &[3, 4, 6],
        shapes: ARB6_ONLY,
        sweep: SWEEP_3478,
    },
    FaceCase {
        labels: &[2, 3, 6, 7],
        shapes: ARB8_ONLY,
        sweep: FaceSweep::Pairs([(0, 1), (3, 2), (4, 5), (7, 6)]),
    },
    FaceCase {
        labels: &[1, 4, 5, 8],
        shapes: ARB8_ONLY,
        sweep: FaceSweep::Pairs([(1, 0), (5, 4), (2, 3), (6, 7)]),
    },
    FaceCase {
        labels: &[1, 2, 3],
        shapes: ARB4_ONLY,
        sweep: FaceSweep::PromoteArb4([0, 1, 2]),
    },
    FaceCase {
        labels: &[1, 2, 4],
        shapes: ARB4_ONLY,
        sweep: FaceSweep::PromoteArb4([0, 1, 4]),
    },
    FaceCase {
        labels: &[1, 3, 4],
        shapes: ARB4_ONLY,
        sweep: FaceSweep::PromoteArb4([0, 2, 4]),
    },
    FaceCase {
        labels: &[2, 3, 4],
        shapes: ARB4_ONLY,
        sweep: FaceSweep::PromoteArb4([1, 2, 4]),
    },
];

/// Finds the case for a face given by its label product, confirming the
/// label set itself so products shared by two label sets never alias.
pub fn face_case(arb_type: ArbType, sorted_labels: &[usize]) -> Option<&'static FaceCase> {
    let key: usize = sorted_labels.iter().product();
    FACE_CASES.iter().find(|case| {
        case.key() == key && case.labels == sorted_labels && case.shapes.contains(&arb_type)
    })
}

// =============================================================================
// PERMUTATIONS
// =============================================================================

const PERM4: [&[&str]; 4] = [
    &["123*4***", "124*3***", "132*4***", "134*2***", "142*3***", "143*2***"],
    &["213*4***", "214*3***", "231*4***", "234*1***", "241*3***", "243*1***"],
    &["312*4***", "314*2***", "321*4***", "324*1***", "341*2***", "342*1***"],
    &["412*3***", "413*2***", "421*3***", "423*1***", "431*2***", "432*1***"],
];

const PERM5: [&[&str]; 5] = [
    &["12345***", "14325***"],
    &["21435***", "23415***"],
    &["32145***", "34125***"],
    &["41235***", "43215***"],
    &[],
];

const PERM6: [&[&str]; 6] = [
    &["12345*6*", "15642*3*"],
    &["21435*6*", "25631*4*"],
    &["34126*5*", "36524*1*"],
    &["43216*5*", "46513*2*"],
    &["51462*3*", "52361*4*"],
    &["63254*1*", "64153*2*"],
];

const PERM7: [&[&str]; 7] = [
    &["1234567*"],
    &[],
    &[],
    &["4321576*"],
    &[],
    &["6237514*"],
    &["7326541*"],
];

const PERM8: [&[&str]; 8] = [
    &["12345678", "12654378", "14325876", "14852376", "15624873", "15842673"],
    &["21436587", "21563487", "23416785", "23761485", "26513784", "26731584"],
    &["32147658", "32674158", "34127856", "34872156", "37624851", "37842651"],
    &["41238567", "41583267", "43218765", "43781265", "48513762", "48731562"],
    &["51268437", "51486237", "56218734", "56781234", "58416732", "58761432"],
    &["62157348", "62375148", "65127843", "65872143", "67325841", "67852341"],
    &["73268415", "73486215", "76238514", "76583214", "78436512", "78563412"],
    &["84157326", "84375126", "85147623", "85674123", "87345621", "87654321"],
];

/// Full 8-character relabelings that start with vertex `label`.
///
/// Character `i` names the old vertex that takes the role of slot `i`;
/// `*` marks a duplicate slot.
pub fn permutations(arb_type: ArbType, label: usize) -> &'static [&'static str] {
    let Some(i) = label.checked_sub(1) else {
        return &[];
    };
    let table: &[&[&str]] = match arb_type {
        ArbType::Arb4 => &PERM4,
        ArbType::Arb5 => &PERM5,
        ArbType::Arb6 => &PERM6,
        ArbType::Arb7 => &PERM7,
        ArbType::Arb8 => &PERM8,
    };
    table.get(i).copied().unwrap_or(&[])
}

/// Shortest prefix that picks a single permutation.
pub fn min_permutation_len(arb_type: ArbType) -> usize {
    match arb_type {
        ArbType::Arb4 | ArbType::Arb8 => 3,
        ArbType::Arb5 | ArbType::Arb6 => 2,
        ArbType::Arb7 => 1,
    }
}

/// Longest prefix accepted: one face worth of labels.
pub fn max_permutation_len(arb_type: ArbType) -> usize {
    match arb_type {
        ArbType::Arb4 => 3,
        _ => 4,
    }
}

#[cfg(test)]
mod tests;
