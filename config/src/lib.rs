//! # Config Crate
//!
//! Centralized configuration constants for the ARB geometry kernel.
//! Tolerances and fixed capacities are defined here so the kernel never
//! scatters literals through its predicates.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DIST_TOLERANCE, PERP_TOLERANCE};
//!
//! // Two points closer than DIST_TOLERANCE are the same vertex.
//! let gap: f64 = 1.0e-5;
//! assert!(gap < DIST_TOLERANCE);
//! assert!(PERP_TOLERANCE < DIST_TOLERANCE);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Validated Snapshots**: Custom values go through [`constants::GlobalConfig::new`]

pub mod constants;
