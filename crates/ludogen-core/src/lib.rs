//! Core contracts for ludogen.
//!
//! This crate defines the entity model for the generated catalog, the
//! identifier type minted at record creation, and the run configuration
//! shared by the generator, export, and upload crates.

pub mod config;
pub mod error;
pub mod ids;
pub mod model;

pub use config::GeneratorConfig;
pub use error::{Error, Result};
pub use ids::EntityId;
pub use model::{
    AccessEvent, Contributor, ContributorKind, Dataset, EsrbRating, Follow, GameCollection, Genre,
    OwnedGame, Platform, PlatformRelease, PlaySession, Rating, User, VideoGame,
};
