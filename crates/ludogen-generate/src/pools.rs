use rand::Rng;
use rand::seq::index;

use ludogen_core::EntityId;

use crate::errors::GenerationError;

/// Append-only ordered pool of identifiers for one entity kind.
///
/// Identifiers are registered the moment their record is created; the pool
/// is the only legal source of foreign keys into that kind.
#[derive(Debug, Clone)]
pub struct IdPool {
    kind: &'static str,
    ids: Vec<EntityId>,
}

impl IdPool {
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            ids: Vec::new(),
        }
    }

    /// Register a freshly minted identifier.
    pub fn register(&mut self, id: EntityId) {
        self.ids.push(id);
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[EntityId] {
        &self.ids
    }

    pub fn contains(&self, id: &EntityId) -> bool {
        self.ids.contains(id)
    }

    /// Draw `k` distinct identifiers uniformly.
    ///
    /// Requesting more than the pool holds fails loudly instead of silently
    /// truncating; callers that want the clamp-to-size policy use
    /// [`sample_clamped`](Self::sample_clamped).
    pub fn sample<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        k: usize,
    ) -> Result<Vec<EntityId>, GenerationError> {
        if k > self.ids.len() {
            return Err(GenerationError::PoolExhausted {
                kind: self.kind,
                requested: k,
                available: self.ids.len(),
            });
        }
        Ok(index::sample(rng, self.ids.len(), k)
            .into_iter()
            .map(|i| self.ids[i])
            .collect())
    }

    /// Draw up to `k` distinct identifiers, clamped to the pool size.
    /// An empty pool yields zero items.
    pub fn sample_clamped<R: Rng + ?Sized>(&self, rng: &mut R, k: usize) -> Vec<EntityId> {
        let k = k.min(self.ids.len());
        index::sample(rng, self.ids.len(), k)
            .into_iter()
            .map(|i| self.ids[i])
            .collect()
    }

    /// Like [`sample_clamped`](Self::sample_clamped), but never yields
    /// `exclude`. Used for self-referential edges.
    pub fn sample_clamped_excluding<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        k: usize,
        exclude: EntityId,
    ) -> Vec<EntityId> {
        let candidates: Vec<EntityId> = self
            .ids
            .iter()
            .copied()
            .filter(|id| *id != exclude)
            .collect();
        let k = k.min(candidates.len());
        index::sample(rng, candidates.len(), k)
            .into_iter()
            .map(|i| candidates[i])
            .collect()
    }
}

/// Per-kind identifier pools; the single source of truth for which
/// identifiers currently exist in a run.
///
/// Contributors are split by kind so games can reference developers and
/// publishers separately.
#[derive(Debug)]
pub struct ReferencePools {
    pub platforms: IdPool,
    pub genres: IdPool,
    pub developers: IdPool,
    pub publishers: IdPool,
    pub games: IdPool,
    pub users: IdPool,
}

impl ReferencePools {
    pub fn new() -> Self {
        Self {
            platforms: IdPool::new("platforms"),
            genres: IdPool::new("genres"),
            developers: IdPool::new("developers"),
            publishers: IdPool::new("publishers"),
            games: IdPool::new("games"),
            users: IdPool::new("users"),
        }
    }
}

impl Default for ReferencePools {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn pool_with(n: usize) -> IdPool {
        let mut pool = IdPool::new("games");
        for _ in 0..n {
            pool.register(EntityId::mint());
        }
        pool
    }

    #[test]
    fn sample_draws_distinct_members() {
        let pool = pool_with(10);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let drawn = pool.sample(&mut rng, 4).expect("sample 4 of 10");
        assert_eq!(drawn.len(), 4);
        for id in &drawn {
            assert!(pool.contains(id));
        }
        let mut dedup = drawn.clone();
        dedup.sort();
        dedup.dedup();
        assert_eq!(dedup.len(), 4);
    }

    #[test]
    fn oversampling_fails_loudly() {
        let pool = pool_with(3);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let err = pool.sample(&mut rng, 4).unwrap_err();
        assert!(matches!(
            err,
            GenerationError::PoolExhausted {
                kind: "games",
                requested: 4,
                available: 3,
            }
        ));
    }

    #[test]
    fn sampling_one_from_an_empty_pool_fails() {
        let pool = IdPool::new("developers");
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert!(pool.sample(&mut rng, 1).is_err());
    }

    #[test]
    fn clamped_sampling_truncates_instead() {
        let pool = pool_with(3);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert_eq!(pool.sample_clamped(&mut rng, 10).len(), 3);
        assert!(IdPool::new("users").sample_clamped(&mut rng, 10).is_empty());
    }

    #[test]
    fn excluding_sample_never_returns_the_excluded_id() {
        let mut pool = IdPool::new("users");
        let me = EntityId::mint();
        pool.register(me);
        for _ in 0..5 {
            pool.register(EntityId::mint());
        }
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..50 {
            let drawn = pool.sample_clamped_excluding(&mut rng, 6, me);
            assert_eq!(drawn.len(), 5);
            assert!(!drawn.contains(&me));
        }
    }
}
