use std::collections::BTreeSet;

use compressed_bitset::CompressedBitSet;
use quickcheck::{Arbitrary, Gen};

// Arbitrary Set //
#[derive(Debug, Clone)]
pub struct SortedValues(Vec<u32>);

impl SortedValues {
    pub fn from_unsorted(mut vec: Vec<u32>) -> Self {
        vec.sort_unstable();
        vec.dedup();
        Self(vec)
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }
}

impl From<Vec<u32>> for SortedValues {
    fn from(value: Vec<u32>) -> Self {
        Self::from_unsorted(value)
    }
}

impl Arbitrary for SortedValues {
    fn arbitrary(g: &mut Gen) -> Self {
        Self::from_unsorted(Vec::<u32>::arbitrary(g))
    }
}

// Arbitrary Pair of Sets //
/// Pair with a shared component so intersections are non-trivial.
#[derive(Debug, Clone)]
pub struct SimilarSetPair(pub SortedValues, pub SortedValues);

impl Arbitrary for SimilarSetPair {
    fn arbitrary(g: &mut Gen) -> Self {
        let shared: Vec<u32> = Vec::arbitrary(g);

        let mut left = Vec::arbitrary(g);
        let mut right = Vec::arbitrary(g);
        left.extend(&shared);
        right.extend(&shared);

        SimilarSetPair(left.into(), right.into())
    }
}

/// Pair confined to two high prefixes and sized so buckets can cross the
/// dense threshold.
#[derive(Debug, Clone)]
pub struct ClusteredSetPair(pub SortedValues, pub SortedValues);

impl Arbitrary for ClusteredSetPair {
    fn arbitrary(g: &mut Gen) -> Self {
        let size_a = usize::arbitrary(g) % 10_000;
        let size_b = usize::arbitrary(g) % 10_000;

        ClusteredSetPair(
            clustered_values(size_a, g).into(),
            clustered_values(size_b, g).into(),
        )
    }
}

fn clustered_values(len: usize, g: &mut Gen) -> Vec<u32> {
    (0..len).map(|_| u32::arbitrary(g) % (2 << 16)).collect()
}

// Helpers //
pub fn build_set(values: &[u32]) -> CompressedBitSet {
    let mut set = CompressedBitSet::new();
    for &value in values {
        set.add(value);
    }
    set
}

/// Probe points: every input value plus its immediate neighbours, so misses
/// right next to hits are exercised too.
pub fn probe_values(inputs: &[&[u32]]) -> Vec<u32> {
    let mut probes = BTreeSet::new();
    probes.insert(0);
    probes.insert(u32::MAX);
    for input in inputs {
        for &value in *input {
            probes.insert(value);
            probes.insert(value.wrapping_sub(1));
            probes.insert(value.wrapping_add(1));
        }
    }
    probes.into_iter().collect()
}

pub fn agrees_with(set: &CompressedBitSet, reference: &BTreeSet<u32>, probes: &[u32]) -> bool {
    probes.iter().all(|&v| set.contains(v) == reference.contains(&v))
}
