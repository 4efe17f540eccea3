//! Top-level compressed set over the full `u32` domain.

use crate::bucket::Bucket;
use crate::{ops, Set};

pub const NUM_BUCKETS: usize = 1 << 16;

/// Compressed bitmap for sets of `u32` values.
///
/// One bucket per possible high-16-bit prefix, all 65,536 allocated up
/// front; an unused bucket is just an empty sparse bucket. Every operation
/// decomposes its argument(s) by bucket index and delegates, so there is no
/// cross-bucket interaction anywhere.
#[derive(Clone)]
pub struct CompressedBitSet {
    buckets: Box<[Bucket]>,
}

#[inline]
fn split(value: u32) -> (usize, u16) {
    ((value >> 16) as usize, (value & 0xFFFF) as u16)
}

impl CompressedBitSet {
    pub fn new() -> Self {
        Self {
            buckets: vec![Bucket::new(); NUM_BUCKETS].into_boxed_slice(),
        }
    }

    pub fn add(&mut self, value: u32) {
        let (high, low) = split(value);
        self.buckets[high].add(low);
    }

    pub fn remove(&mut self, value: u32) {
        let (high, low) = split(value);
        self.buckets[high].remove(low);
    }

    pub fn contains(&self, value: u32) -> bool {
        let (high, low) = split(value);
        self.buckets[high].contains(low)
    }

    pub fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            bucket.clear();
        }
    }

    /// Sum of bucket cardinalities, computed on demand.
    pub fn cardinality(&self) -> usize {
        self.buckets.iter().map(Bucket::cardinality).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Bucket::is_empty)
    }

    /// Replaces each bucket with its intersection with the matching bucket
    /// of `other`. Intersecting with an empty bucket yields an empty bucket.
    pub fn intersect(&mut self, other: &CompressedBitSet) {
        for (mine, theirs) in self.buckets.iter_mut().zip(other.buckets.iter()) {
            *mine = ops::intersect(mine, theirs);
        }
    }

    /// Replaces each bucket with its union with the matching bucket of
    /// `other`. Uniting with an empty bucket is the identity.
    pub fn unite(&mut self, other: &CompressedBitSet) {
        for (mine, theirs) in self.buckets.iter_mut().zip(other.buckets.iter()) {
            *mine = ops::unite(mine, theirs);
        }
    }
}

impl Default for CompressedBitSet {
    fn default() -> Self {
        Self::new()
    }
}

impl Set<u32> for CompressedBitSet {
    fn from_sorted(sorted: &[u32]) -> Self {
        debug_assert!(sorted.windows(2).all(|w| w[0] < w[1]));

        let mut set = Self::new();
        let mut rest = sorted;

        while let Some(&first) = rest.first() {
            let high = (first >> 16) as usize;
            let run = rest
                .iter()
                .take_while(|&&v| (v >> 16) as usize == high)
                .count();

            let lows: Vec<u16> = rest[..run].iter().map(|&v| (v & 0xFFFF) as u16).collect();
            set.buckets[high] = Bucket::from_sorted(&lows);

            rest = &rest[run..];
        }

        set
    }
}
