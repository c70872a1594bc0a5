//! Core types for Zar: dice, polyhedron geometry, and the roll engine.
//!
//! Provides the six supported die types with their display specs, a
//! deterministic mesh builder for each die shape, a uniform roll engine over
//! any random source, and the cosmetic spin/pulse animation model renderers
//! sample from.

pub mod animation;
pub mod die;
pub mod error;
pub mod geometry;
pub mod roll;

pub use animation::{Pose, RollAnimation};
pub use die::{DieSpec, DieType};
pub use error::{DiceError, DiceResult};
pub use geometry::{MeshExport, PolyhedronMesh, build, build_faces};
pub use roll::{RandomSource, roll};
