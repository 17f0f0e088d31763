//! Domain layer: core value types and the traits the host edges implement.
//!
//! The rewrite core operates purely on the types in [`entities`]; the
//! [`repositories`] traits are the seams behind which the map file and the
//! remote site catalog live.

pub mod entities;
pub mod repositories;
