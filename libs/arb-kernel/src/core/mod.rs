//! Core geometric primitives shared by the classifier, the edit layer and
//! the ray engine.

pub mod plane;

pub use plane::Plane;
