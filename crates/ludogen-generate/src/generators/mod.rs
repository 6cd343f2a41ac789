//! One generator per entity kind.
//!
//! Each generator consumes the reference pools for the kinds it depends on
//! and registers every identifier it mints before returning, so later
//! generators can only reference records that already exist.

pub mod catalog;
pub mod collections;
pub mod users;

pub use catalog::{
    generate_contributors, generate_games, generate_genres, generate_platform_releases,
    generate_platforms,
};
pub use collections::generate_collections;
pub use users::{UserBundle, generate_users};
