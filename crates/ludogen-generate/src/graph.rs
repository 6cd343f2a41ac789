//! Second-pass follow-edge assignment.
//!
//! Follow edges are self-referential on users, so a single generation pass
//! would have to reference users that do not exist yet. Pass one creates
//! every user with no edges; this pass draws edges against the completed
//! user pool.

use rand::Rng;

use ludogen_core::{EntityId, Follow};

use crate::pools::ReferencePools;

/// Draw follow edges for every user in the completed pool.
///
/// Per user: a uniform follow count in `0..=min(max_follows, users - 1)`,
/// then that many distinct targets excluding the user itself. Sampling
/// distinct targets makes duplicate ordered pairs impossible within a run.
pub fn assign_follows<R: Rng + ?Sized>(
    max_follows_per_user: usize,
    pools: &ReferencePools,
    rng: &mut R,
) -> Vec<Follow> {
    let mut follows = Vec::new();
    let cap = max_follows_per_user.min(pools.users.len().saturating_sub(1));

    for follower in pools.users.ids() {
        let count = if cap == 0 {
            0
        } else {
            rng.random_range(0..=cap)
        };
        for followed_id in pools.users.sample_clamped_excluding(rng, count, *follower) {
            follows.push(Follow {
                id: EntityId::mint(),
                follower_id: *follower,
                followed_id,
            });
        }
    }
    follows
}
