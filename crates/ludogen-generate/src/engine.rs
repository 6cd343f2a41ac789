use std::time::Instant;

use rand::Rng;
use tracing::info;

use ludogen_core::{Dataset, GeneratorConfig};
use ludogen_secure::FieldCipher;

use crate::errors::GenerationError;
use crate::generators::{
    generate_collections, generate_contributors, generate_games, generate_genres,
    generate_platform_releases, generate_platforms, generate_users,
};
use crate::graph::assign_follows;
use crate::model::GenerationReport;
use crate::pools::ReferencePools;

/// Entry point for a generation run.
///
/// The engine owns nothing global: configuration and the field cipher come
/// in through the constructor, and the randomness source through
/// [`run`](Self::run), so tests can inject throwaway keys and seeded rngs.
pub struct GenerationEngine {
    config: GeneratorConfig,
    cipher: FieldCipher,
}

impl GenerationEngine {
    pub fn new(config: GeneratorConfig, cipher: FieldCipher) -> Result<Self, GenerationError> {
        config.validate()?;
        Ok(Self { config, cipher })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Run the fixed-order pipeline: platforms and genres, contributors,
    /// games, platform releases, users with their sub-records, the follow
    /// second pass, and finally collections.
    pub fn run<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<(Dataset, GenerationReport), GenerationError> {
        let start = Instant::now();
        let run_id = uuid::Uuid::new_v4().to_string();
        let config = &self.config;
        let mut pools = ReferencePools::new();

        info!(
            run_id = %run_id,
            users = config.num_users,
            games = config.num_games,
            contributors = config.num_contributors,
            "generation started"
        );

        let platforms =
            generate_platforms(&config.platform_names, config.num_platforms, &mut pools);
        let genres = generate_genres(&config.genre_names, config.num_genres, &mut pools);
        let contributors =
            generate_contributors(config.num_contributors, &self.cipher, &mut pools, rng)?;
        let videogames = generate_games(config, &mut pools, rng)?;
        let platform_releases = generate_platform_releases(config, &videogames, &pools, rng)?;
        let bundle = generate_users(config, &self.cipher, &mut pools, rng)?;
        let follows = assign_follows(config.max_follows_per_user, &pools, rng);
        let collections = generate_collections(config, &pools, rng);

        let dataset = Dataset {
            platforms,
            genres,
            contributors,
            videogames,
            platform_releases,
            users: bundle.users,
            owned: bundle.owned,
            plays: bundle.plays,
            ratings: bundle.ratings,
            access_times: bundle.access_times,
            follows,
            collections,
        };

        let mut report = GenerationReport::new(run_id.clone());
        report.record_table("platforms", dataset.platforms.len());
        report.record_table("genres", dataset.genres.len());
        report.record_table("contributors", dataset.contributors.len());
        report.record_table("videogames", dataset.videogames.len());
        report.record_table("platform_releases", dataset.platform_releases.len());
        report.record_table("users", dataset.users.len());
        report.record_table("owned", dataset.owned.len());
        report.record_table("plays", dataset.plays.len());
        report.record_table("ratings", dataset.ratings.len());
        report.record_table("access_times", dataset.access_times.len());
        report.record_table("follows", dataset.follows.len());
        report.record_table("collections", dataset.collections.len());
        report.duration_ms = start.elapsed().as_millis() as u64;

        info!(
            run_id = %run_id,
            users = dataset.users.len(),
            games = dataset.videogames.len(),
            follows = dataset.follows.len(),
            duration_ms = report.duration_ms,
            "generation completed"
        );

        Ok((dataset, report))
    }
}
