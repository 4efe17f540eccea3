use std::{collections::BTreeSet, ops::Range};

use rand::{distributions::Uniform, prelude::Distribution, thread_rng};

/// Draws `cardinality` distinct values uniformly from `range`, sorted.
pub fn uniform_sorted_set(range: Range<u32>, cardinality: usize) -> Vec<u32> {
    assert!(cardinality <= range.len());

    let rng = &mut thread_rng();
    let dist = Uniform::from(range);

    let mut set: BTreeSet<u32> = BTreeSet::new();
    while set.len() < cardinality {
        set.insert(dist.sample(rng));
    }
    set.into_iter().collect()
}
