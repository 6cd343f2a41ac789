use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// All knobs for a generation run.
///
/// Every cardinality range and bound the generators consume lives here, so
/// dataset shape is adjustable without code changes. Defaults mirror the
/// constants the project shipped with.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Number of users to create.
    pub num_users: usize,
    /// Number of catalog games to create.
    pub num_games: usize,
    /// Number of contributors (developers and publishers) to create.
    pub num_contributors: usize,
    /// Number of platforms, drawn from the head of `platform_names`.
    pub num_platforms: usize,
    /// Number of genres, drawn from the head of `genre_names`.
    pub num_genres: usize,

    /// Per-game fan-out caps.
    pub max_developers_per_game: usize,
    pub max_publishers_per_game: usize,
    pub max_genres_per_game: usize,
    pub max_platforms_per_game: usize,

    /// Per-user fan-out caps and ranges.
    pub max_platforms_per_user: usize,
    pub max_owned_games_per_user: usize,
    pub max_play_sessions_per_owned_game: usize,
    pub min_access_events_per_user: usize,
    pub max_access_events_per_user: usize,
    pub max_follows_per_user: usize,
    pub max_collections_per_user: usize,
    pub max_games_per_collection: usize,

    /// Probability that an owned game gets a rating.
    pub rating_probability: f64,
    pub min_rating: i32,
    pub max_rating: i32,

    /// Release price bounds (currency units, 2 decimals).
    pub min_price: f64,
    pub max_price: f64,

    /// Playtime bounds (hours) and the Gaussian noise applied to them.
    pub min_playtime_hours: i64,
    pub max_playtime_hours: i64,
    pub playtime_noise_std_dev_hours: f64,

    /// PBKDF2 iteration count for password hashing.
    pub password_iterations: u32,

    /// Candidate platform names; `num_platforms` picks from the front.
    pub platform_names: Vec<String>,
    /// Candidate genre names; `num_genres` picks from the front.
    pub genre_names: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_users: 50,
            num_games: 30,
            num_contributors: 40,
            num_platforms: 5,
            num_genres: 10,
            max_developers_per_game: 2,
            max_publishers_per_game: 2,
            max_genres_per_game: 3,
            max_platforms_per_game: 3,
            max_platforms_per_user: 2,
            max_owned_games_per_user: 5,
            max_play_sessions_per_owned_game: 3,
            min_access_events_per_user: 5,
            max_access_events_per_user: 20,
            max_follows_per_user: 10,
            max_collections_per_user: 3,
            max_games_per_collection: 5,
            rating_probability: 0.8,
            min_rating: 1,
            max_rating: 5,
            min_price: 4.99,
            max_price: 79.99,
            min_playtime_hours: 1,
            max_playtime_hours: 50,
            playtime_noise_std_dev_hours: 2.0,
            password_iterations: 310_000,
            platform_names: [
                "Steam",
                "Nintendo eStore",
                "PlayStation Store",
                "Xbox Store",
                "Epic Games Store",
                "GOG",
                "Android PlayStore",
                "iOS AppStore",
                "Origin",
                "Ubisoft Connect",
            ]
            .map(str::to_string)
            .to_vec(),
            genre_names: [
                "Action",
                "Adventure",
                "RPG",
                "FPS",
                "Puzzle",
                "Platformer",
                "Strategy",
                "Sports",
                "Simulation",
                "Horror",
                "MMO",
                "Racing",
                "Fighting",
                "Sandbox",
                "Survival",
            ]
            .map(str::to_string)
            .to_vec(),
        }
    }
}

/// Minimum PBKDF2 iteration count accepted for password hashing.
pub const MIN_PASSWORD_ITERATIONS: u32 = 300_000;

impl GeneratorConfig {
    /// Load a config from a TOML file; absent keys fall back to defaults.
    pub fn from_toml_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: GeneratorConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the generators cannot honor.
    pub fn validate(&self) -> Result<()> {
        if self.num_genres == 0 {
            return Err(Error::InvalidConfig(
                "num_genres must be at least 1: every game needs a genre".to_string(),
            ));
        }
        if self.num_platforms == 0 {
            return Err(Error::InvalidConfig(
                "num_platforms must be at least 1: every user needs a platform".to_string(),
            ));
        }
        if self.num_platforms > self.platform_names.len() {
            return Err(Error::InvalidConfig(format!(
                "num_platforms ({}) exceeds the {} configured platform names",
                self.num_platforms,
                self.platform_names.len()
            )));
        }
        if self.num_genres > self.genre_names.len() {
            return Err(Error::InvalidConfig(format!(
                "num_genres ({}) exceeds the {} configured genre names",
                self.num_genres,
                self.genre_names.len()
            )));
        }
        let one_minimum_caps = [
            ("max_developers_per_game", self.max_developers_per_game),
            ("max_publishers_per_game", self.max_publishers_per_game),
            ("max_genres_per_game", self.max_genres_per_game),
            ("max_platforms_per_game", self.max_platforms_per_game),
            ("max_platforms_per_user", self.max_platforms_per_user),
            ("max_owned_games_per_user", self.max_owned_games_per_user),
            (
                "max_play_sessions_per_owned_game",
                self.max_play_sessions_per_owned_game,
            ),
            ("max_games_per_collection", self.max_games_per_collection),
        ];
        for (name, value) in one_minimum_caps {
            if value == 0 {
                return Err(Error::InvalidConfig(format!("{name} must be at least 1")));
            }
        }
        if !(0.0..=1.0).contains(&self.rating_probability) {
            return Err(Error::InvalidConfig(format!(
                "rating_probability must be within [0, 1], got {}",
                self.rating_probability
            )));
        }
        if self.min_rating > self.max_rating {
            return Err(Error::InvalidConfig(format!(
                "min_rating ({}) exceeds max_rating ({})",
                self.min_rating, self.max_rating
            )));
        }
        if self.min_price > self.max_price || self.min_price < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "price range [{}, {}] is not a valid non-negative range",
                self.min_price, self.max_price
            )));
        }
        if self.min_playtime_hours > self.max_playtime_hours || self.min_playtime_hours < 0 {
            return Err(Error::InvalidConfig(format!(
                "playtime range [{}, {}] hours is not a valid non-negative range",
                self.min_playtime_hours, self.max_playtime_hours
            )));
        }
        if self.min_access_events_per_user > self.max_access_events_per_user {
            return Err(Error::InvalidConfig(format!(
                "min_access_events_per_user ({}) exceeds max_access_events_per_user ({})",
                self.min_access_events_per_user, self.max_access_events_per_user
            )));
        }
        if self.password_iterations < MIN_PASSWORD_ITERATIONS {
            return Err(Error::InvalidConfig(format!(
                "password_iterations must be at least {MIN_PASSWORD_ITERATIONS}, got {}",
                self.password_iterations
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        GeneratorConfig::default().validate().expect("default config");
    }

    #[test]
    fn rejects_zero_genres() {
        let config = GeneratorConfig {
            num_genres: 0,
            ..GeneratorConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn rejects_zero_fanout_caps() {
        let config = GeneratorConfig {
            max_owned_games_per_user: 0,
            ..GeneratorConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn rejects_weak_password_iterations() {
        let config = GeneratorConfig {
            password_iterations: 1000,
            ..GeneratorConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let config: GeneratorConfig =
            toml::from_str("num_users = 5\nnum_games = 6").expect("parse partial toml");
        assert_eq!(config.num_users, 5);
        assert_eq!(config.num_games, 6);
        assert_eq!(config.num_contributors, 40);
    }
}
