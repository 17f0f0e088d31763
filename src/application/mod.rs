//! Application layer: service orchestration over the domain types.

pub mod services;
