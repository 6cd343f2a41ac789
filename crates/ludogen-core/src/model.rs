use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::EntityId;

/// A storefront or console platform. Names are unique within a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    #[serde(rename = "_id")]
    pub id: EntityId,
    pub platform_name: String,
}

/// A game genre. Names are unique within a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Genre {
    #[serde(rename = "_id")]
    pub id: EntityId,
    pub genre_name: String,
}

/// Whether a contributor develops or publishes games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContributorKind {
    Developer,
    Publisher,
}

/// A studio or publishing house. The display name is PII-adjacent company
/// data and is stored encrypted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contributor {
    #[serde(rename = "_id")]
    pub id: EntityId,
    pub contributor_name_enc: String,
    #[serde(rename = "type")]
    pub kind: ContributorKind,
}

/// ESRB content rating categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EsrbRating {
    E,
    #[serde(rename = "E10+")]
    E10Plus,
    T,
    M,
    A,
    #[serde(rename = "RP")]
    Rp,
}

impl EsrbRating {
    pub const ALL: [EsrbRating; 6] = [
        EsrbRating::E,
        EsrbRating::E10Plus,
        EsrbRating::T,
        EsrbRating::M,
        EsrbRating::A,
        EsrbRating::Rp,
    ];
}

/// A catalog entry. Developer/publisher/genre references may only name
/// contributors and genres created earlier in the same run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoGame {
    #[serde(rename = "_id")]
    pub id: EntityId,
    pub title: String,
    pub esrb: EsrbRating,
    pub developers: Vec<EntityId>,
    pub publishers: Vec<EntityId>,
    pub genres: Vec<EntityId>,
}

/// A game's availability on one platform, with its own price and date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformRelease {
    #[serde(rename = "_id")]
    pub id: EntityId,
    pub game_id: EntityId,
    pub platform_id: EntityId,
    pub price: f64,
    #[serde(rename = "releaseDate")]
    pub release_date: DateTime<Utc>,
}

/// A platform user. Every identifying field is stored as a security
/// derivative: encrypted, hashed, or masked. No plaintext PII survives
/// generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: EntityId,
    pub username_enc: String,
    pub username_hash: String,
    pub email_enc: String,
    pub email_masked: String,
    #[serde(rename = "firstName_enc")]
    pub first_name_enc: String,
    #[serde(rename = "lastName_enc")]
    pub last_name_enc: String,
    pub password_hash: String,
    pub password_salt: String,
    pub password_iterations: u32,
    #[serde(rename = "creationDate")]
    pub creation_date: DateTime<Utc>,
    pub role: String,
    pub platforms: Vec<EntityId>,
    pub audit_token: String,
}

/// A (user, game) ownership record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnedGame {
    #[serde(rename = "_id")]
    pub id: EntityId,
    pub user_id: EntityId,
    pub game_id: EntityId,
    #[serde(rename = "acquisitionDate")]
    pub acquisition_date: DateTime<Utc>,
}

/// One play of an owned game. Reported playtime is noise-injected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaySession {
    #[serde(rename = "_id")]
    pub id: EntityId,
    pub user_id: EntityId,
    pub game_id: EntityId,
    #[serde(rename = "datetimeOpened")]
    pub datetime_opened: DateTime<Utc>,
    /// Seconds, already noise-injected and floor-clamped.
    #[serde(rename = "timePlayed")]
    pub time_played: i64,
}

/// A user's score for an owned game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rating {
    #[serde(rename = "_id")]
    pub id: EntityId,
    pub user_id: EntityId,
    pub game_id: EntityId,
    pub rating: i32,
    #[serde(rename = "ratingDate")]
    pub rating_date: DateTime<Utc>,
}

/// A timestamped login/access record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessEvent {
    #[serde(rename = "_id")]
    pub id: EntityId,
    pub user_id: EntityId,
    pub time: DateTime<Utc>,
}

/// A directed follower -> followed edge between two distinct users.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Follow {
    #[serde(rename = "_id")]
    pub id: EntityId,
    pub follower_id: EntityId,
    pub followed_id: EntityId,
}

/// A user-curated list of games drawn without replacement from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameCollection {
    #[serde(rename = "_id")]
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub user_id: EntityId,
    pub games: Vec<EntityId>,
}

/// The full in-memory table set produced by one generation run.
///
/// Tables are listed in generation order; every foreign key in a table
/// resolves to a record in an earlier table (or, for follows, to the
/// completed user table).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub platforms: Vec<Platform>,
    pub genres: Vec<Genre>,
    pub contributors: Vec<Contributor>,
    pub videogames: Vec<VideoGame>,
    pub platform_releases: Vec<PlatformRelease>,
    pub users: Vec<User>,
    pub owned: Vec<OwnedGame>,
    pub plays: Vec<PlaySession>,
    pub ratings: Vec<Rating>,
    pub access_times: Vec<AccessEvent>,
    pub follows: Vec<Follow>,
    pub collections: Vec<GameCollection>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn esrb_serializes_like_the_rating_board_labels() {
        let labels: Vec<String> = EsrbRating::ALL
            .iter()
            .map(|r| serde_json::to_value(r).expect("serialize esrb"))
            .map(|v| v.as_str().expect("esrb is a string").to_string())
            .collect();
        assert_eq!(labels, ["E", "E10+", "T", "M", "A", "RP"]);
    }

    #[test]
    fn contributor_kind_uses_lowercase_type_field() {
        let contributor = Contributor {
            id: EntityId::mint(),
            contributor_name_enc: "token".to_string(),
            kind: ContributorKind::Developer,
        };
        let json = serde_json::to_value(&contributor).expect("serialize contributor");
        assert_eq!(json["type"], "developer");
        assert!(json.get("_id").is_some());
    }
}
