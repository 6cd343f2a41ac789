use rand::Rng;

use ludogen_core::{
    Contributor, ContributorKind, EntityId, EsrbRating, GeneratorConfig, Genre, Platform,
    PlatformRelease, VideoGame,
};
use ludogen_secure::FieldCipher;

use crate::errors::GenerationError;
use crate::pools::ReferencePools;
use crate::samplers;

/// Create one platform per configured name, head-first.
pub fn generate_platforms(
    names: &[String],
    count: usize,
    pools: &mut ReferencePools,
) -> Vec<Platform> {
    names
        .iter()
        .take(count)
        .map(|name| {
            let id = EntityId::mint();
            pools.platforms.register(id);
            Platform {
                id,
                platform_name: name.clone(),
            }
        })
        .collect()
}

/// Create one genre per configured name, head-first.
pub fn generate_genres(names: &[String], count: usize, pools: &mut ReferencePools) -> Vec<Genre> {
    names
        .iter()
        .take(count)
        .map(|name| {
            let id = EntityId::mint();
            pools.genres.register(id);
            Genre {
                id,
                genre_name: name.clone(),
            }
        })
        .collect()
}

/// Create contributors with a uniformly random developer/publisher kind.
/// Display names are encrypted before the record ever exists in memory.
pub fn generate_contributors<R: Rng + ?Sized>(
    count: usize,
    cipher: &FieldCipher,
    pools: &mut ReferencePools,
    rng: &mut R,
) -> Result<Vec<Contributor>, GenerationError> {
    let mut contributors = Vec::with_capacity(count);
    for _ in 0..count {
        let kind = if rng.random_bool(0.5) {
            ContributorKind::Developer
        } else {
            ContributorKind::Publisher
        };
        let id = EntityId::mint();
        match kind {
            ContributorKind::Developer => pools.developers.register(id),
            ContributorKind::Publisher => pools.publishers.register(id),
        }
        contributors.push(Contributor {
            id,
            contributor_name_enc: cipher.encrypt(&samplers::company_name(rng))?,
            kind,
        });
    }
    Ok(contributors)
}

/// Create catalog games referencing existing contributors and genres.
///
/// Developer/publisher sets clamp to their pool sizes (empty pools yield
/// empty sets); the genre set always holds at least one member, so an empty
/// genre pool is a sequencing bug and fails the run.
pub fn generate_games<R: Rng + ?Sized>(
    config: &GeneratorConfig,
    pools: &mut ReferencePools,
    rng: &mut R,
) -> Result<Vec<VideoGame>, GenerationError> {
    let mut games = Vec::with_capacity(config.num_games);
    for _ in 0..config.num_games {
        let wanted_developers = rng.random_range(1..=config.max_developers_per_game);
        let developers = pools.developers.sample_clamped(rng, wanted_developers);
        let wanted_publishers = rng.random_range(1..=config.max_publishers_per_game);
        let publishers = pools.publishers.sample_clamped(rng, wanted_publishers);
        let wanted_genres = rng.random_range(1..=config.max_genres_per_game);
        let genres = pools
            .genres
            .sample(rng, wanted_genres.min(pools.genres.len()).max(1))?;

        let id = EntityId::mint();
        pools.games.register(id);
        games.push(VideoGame {
            id,
            title: samplers::game_title(rng),
            esrb: EsrbRating::ALL[rng.random_range(0..EsrbRating::ALL.len())],
            developers,
            publishers,
            genres,
        });
    }
    Ok(games)
}

/// Release each game on 1..=max distinct platforms, each release with an
/// independently sampled price (2 decimals) and release date.
pub fn generate_platform_releases<R: Rng + ?Sized>(
    config: &GeneratorConfig,
    games: &[VideoGame],
    pools: &ReferencePools,
    rng: &mut R,
) -> Result<Vec<PlatformRelease>, GenerationError> {
    let mut releases = Vec::new();
    for game in games {
        let wanted = rng.random_range(1..=config.max_platforms_per_game);
        let platform_ids = pools
            .platforms
            .sample(rng, wanted.min(pools.platforms.len()).max(1))?;
        for platform_id in platform_ids {
            let price = rng.random_range(config.min_price..=config.max_price);
            releases.push(PlatformRelease {
                id: EntityId::mint(),
                game_id: game.id,
                platform_id,
                price: (price * 100.0).round() / 100.0,
                release_date: samplers::datetime_within_years(rng, 10),
            });
        }
    }
    Ok(releases)
}
