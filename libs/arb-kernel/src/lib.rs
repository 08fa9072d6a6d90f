//! ARB geometry kernel
//!
//! Arbitrary convex polyhedra with 4 to 8 distinct vertices, stored as an
//! 8-slot vertex store with table-defined duplicate slots. The crate
//! classifies the store into one of the five canonical shapes, fits and
//! inverts face planes, runs topology-preserving edits as copy / validate /
//! commit transactions, and answers ray queries against a prepared,
//! thread-shareable solid.
//!
//! ```rust
//! use arb_kernel::{Arb, PreparedArb, Ray, Tolerance};
//! use glam::DVec3;
//!
//! let tol = Tolerance::default();
//! let cube = Arb::from_box(DVec3::ZERO, DVec3::ONE);
//! let prepared = PreparedArb::prepare(&cube, &tol).unwrap();
//!
//! let ray = Ray::new(DVec3::new(0.5, 0.5, -5.0), DVec3::Z);
//! let segment = prepared.shoot(&ray).unwrap();
//! assert_eq!(segment.entry.distance, 5.0);
//! assert_eq!(segment.exit.distance, 6.0);
//! ```

pub mod arb;
pub mod config;
pub mod core;
pub mod edit;
pub mod error;
pub mod raytrace;

pub use arb::classify::{classify, ArbType, Classification};
pub use arb::planes::FacePlanes;
pub use arb::{Aabb, Arb};
pub use config::Tolerance;
pub use core::plane::Plane;
pub use edit::{Axis, ElementMove};
pub use error::{ArbError, ArbResult, ErrorKind};
pub use raytrace::{
    par_shoot_batch, shoot_batch, BeamSpec, BoxClass, Curvature, PreparedArb, Ray, Segment,
    SurfaceHit, UvCoord,
};
