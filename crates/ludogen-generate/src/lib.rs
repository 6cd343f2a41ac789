//! Relationally-consistent dataset generation for ludogen.
//!
//! The engine runs one strictly-ordered pass over the entity kinds, minting
//! identifiers into per-kind reference pools so every later record draws its
//! foreign keys from records that already exist. Follow edges run as a
//! dedicated second pass over the completed user pool.

pub mod engine;
pub mod errors;
pub mod generators;
pub mod graph;
pub mod model;
pub mod pools;
pub mod samplers;

pub use engine::GenerationEngine;
pub use errors::GenerationError;
pub use model::{GenerationReport, TableReport};
pub use pools::{IdPool, ReferencePools};
