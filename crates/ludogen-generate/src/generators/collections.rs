use rand::Rng;

use ludogen_core::{EntityId, GameCollection, GeneratorConfig};

use crate::pools::ReferencePools;
use crate::samplers;

/// Create 0..=max curated collections per user, each holding up to
/// `max_games_per_collection` games drawn without replacement from the full
/// catalog. An empty catalog yields empty collections, not an error.
pub fn generate_collections<R: Rng + ?Sized>(
    config: &GeneratorConfig,
    pools: &ReferencePools,
    rng: &mut R,
) -> Vec<GameCollection> {
    let mut collections = Vec::new();
    for owner in pools.users.ids() {
        for _ in 0..rng.random_range(0..=config.max_collections_per_user) {
            let wanted = rng.random_range(1..=config.max_games_per_collection);
            let games = pools.games.sample_clamped(rng, wanted);
            collections.push(GameCollection {
                id: EntityId::mint(),
                name: samplers::collection_name(rng),
                description: samplers::sentence(rng),
                user_id: *owner,
                games,
            });
        }
    }
    collections
}
