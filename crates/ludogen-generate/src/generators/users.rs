use std::collections::HashSet;

use rand::Rng;

use ludogen_core::{AccessEvent, EntityId, GeneratorConfig, OwnedGame, PlaySession, Rating, User};
use ludogen_secure::{FieldCipher, audit_token, hash_identifier, hash_password, inject_noise, mask_email};

use crate::errors::GenerationError;
use crate::pools::ReferencePools;
use crate::samplers;

const USER_ROLE: &str = "USER";
const SECONDS_PER_HOUR: i64 = 3600;

/// Users plus the per-user sub-records generated in the same pass.
#[derive(Debug, Default)]
pub struct UserBundle {
    pub users: Vec<User>,
    pub owned: Vec<OwnedGame>,
    pub plays: Vec<PlaySession>,
    pub ratings: Vec<Rating>,
    pub access_times: Vec<AccessEvent>,
}

/// Create users and their ownership/play/rating/access records.
///
/// All PII is transformed before a record is assembled: usernames, emails,
/// and names are encrypted; the username additionally gets a deterministic
/// lookup digest; the email gets a display mask; the password only ever
/// exists as a salted PBKDF2 record. Plaintext is dropped on the floor here.
pub fn generate_users<R: Rng + ?Sized>(
    config: &GeneratorConfig,
    cipher: &FieldCipher,
    pools: &mut ReferencePools,
    rng: &mut R,
) -> Result<UserBundle, GenerationError> {
    let mut bundle = UserBundle::default();
    let mut usernames = HashSet::new();

    for _ in 0..config.num_users {
        let username = unique_username(rng, &mut usernames);
        let email = samplers::email(rng);
        let first_name = samplers::first_name(rng);
        let last_name = samplers::last_name(rng);
        let password = samplers::password(rng);
        let password_record = hash_password(&password, config.password_iterations);

        let wanted_platforms = rng.random_range(1..=config.max_platforms_per_user);
        let platforms = pools
            .platforms
            .sample(rng, wanted_platforms.min(pools.platforms.len()).max(1))?;

        let user_id = EntityId::mint();
        pools.users.register(user_id);
        bundle.users.push(User {
            id: user_id,
            username_enc: cipher.encrypt(&username)?,
            username_hash: hash_identifier(&username),
            email_enc: cipher.encrypt(&email)?,
            email_masked: mask_email(&email),
            first_name_enc: cipher.encrypt(&first_name)?,
            last_name_enc: cipher.encrypt(&last_name)?,
            password_hash: password_record.hash,
            password_salt: password_record.salt,
            password_iterations: password_record.iterations,
            creation_date: samplers::datetime_within_years(rng, 5),
            role: USER_ROLE.to_string(),
            platforms,
            audit_token: audit_token(),
        });

        // Owned games are drawn distinct, so a user never owns the same
        // game twice in one run.
        let wanted_owned = rng.random_range(1..=config.max_owned_games_per_user);
        for game_id in pools.games.sample_clamped(rng, wanted_owned) {
            bundle.owned.push(OwnedGame {
                id: EntityId::mint(),
                user_id,
                game_id,
                acquisition_date: samplers::datetime_within_years(rng, 3),
            });

            for _ in 0..rng.random_range(1..=config.max_play_sessions_per_owned_game) {
                let base_hours =
                    rng.random_range(config.min_playtime_hours..=config.max_playtime_hours);
                let noisy_hours = inject_noise(
                    base_hours,
                    config.min_playtime_hours,
                    config.playtime_noise_std_dev_hours,
                    rng,
                );
                bundle.plays.push(PlaySession {
                    id: EntityId::mint(),
                    user_id,
                    game_id,
                    datetime_opened: samplers::datetime_within_years(rng, 2),
                    time_played: noisy_hours * SECONDS_PER_HOUR,
                });
            }

            if rng.random_bool(config.rating_probability) {
                bundle.ratings.push(Rating {
                    id: EntityId::mint(),
                    user_id,
                    game_id,
                    rating: rng.random_range(config.min_rating..=config.max_rating),
                    rating_date: samplers::datetime_within_years(rng, 1),
                });
            }
        }

        let access_count = rng
            .random_range(config.min_access_events_per_user..=config.max_access_events_per_user);
        for _ in 0..access_count {
            bundle.access_times.push(AccessEvent {
                id: EntityId::mint(),
                user_id,
                time: samplers::datetime_within_years(rng, 2),
            });
        }
    }

    Ok(bundle)
}

/// Draw a username no earlier user in this run has taken. The deterministic
/// username digest carries a unique index downstream, so a colliding pair
/// would fail the upload on valid-looking data. Falls back to a numbered
/// variant if the sampler keeps colliding.
fn unique_username<R: Rng + ?Sized>(rng: &mut R, taken: &mut HashSet<String>) -> String {
    const ATTEMPTS: usize = 16;
    for _ in 0..ATTEMPTS {
        let candidate = samplers::username(rng);
        if taken.insert(candidate.clone()) {
            return candidate;
        }
    }
    let base = samplers::username(rng);
    let mut suffix = 2u32;
    loop {
        let candidate = format!("{base}{suffix}");
        if taken.insert(candidate.clone()) {
            return candidate;
        }
        suffix += 1;
    }
}
