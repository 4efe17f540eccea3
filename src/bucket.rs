//! Per-prefix container with adaptive representation.

use smallvec::SmallVec;

use crate::dense::BitVector;
use crate::Set;

/// Cardinality at which the sorted array gives way to the bit vector.
///
/// Array entries cost 2 bytes each while the bit vector costs a flat 8 KiB,
/// so the crossover sits at 4096 entries (1/16 density).
pub const SPARSE_THRESHOLD: usize = 4096;

pub type SparseVec = SmallVec<[u16; 8]>;

/// Holds the low 16 bits of every set member sharing one high-16-bit prefix.
///
/// `add` and `remove` never switch representation; [`Bucket::normalize`] is
/// the single conversion point and only the boolean-op layer invokes it, so
/// conversion cost is amortized across runs of point mutations.
#[derive(Clone, Debug)]
pub enum Bucket {
    /// Strictly ascending, duplicate-free low values.
    Sparse(SparseVec),
    /// Flat 65,536-bit vector, boxed to keep the enum small.
    Dense(Box<BitVector>),
}

impl Bucket {
    pub fn new() -> Self {
        Bucket::Sparse(SparseVec::new())
    }

    /// Inserts `low` if absent. The sparse insert keeps the sequence sorted
    /// and duplicate-free; binary search and the merge algorithms depend on
    /// that holding at all times.
    pub fn add(&mut self, low: u16) {
        match self {
            Bucket::Sparse(values) => {
                if let Err(slot) = values.binary_search(&low) {
                    values.insert(slot, low);
                }
            }
            Bucket::Dense(bits) => bits.insert(low),
        }
    }

    /// Removes `low` if present. No representation shrinkage here either.
    pub fn remove(&mut self, low: u16) {
        match self {
            Bucket::Sparse(values) => {
                if let Ok(slot) = values.binary_search(&low) {
                    values.remove(slot);
                }
            }
            Bucket::Dense(bits) => bits.remove(low),
        }
    }

    pub fn contains(&self, low: u16) -> bool {
        match self {
            Bucket::Sparse(values) => values.binary_search(&low).is_ok(),
            Bucket::Dense(bits) => bits.contains(low),
        }
    }

    /// Resets to an empty sparse bucket.
    pub fn clear(&mut self) {
        *self = Bucket::new();
    }

    /// Computed on demand; there is no separately-tracked counter to drift.
    pub fn cardinality(&self) -> usize {
        match self {
            Bucket::Sparse(values) => values.len(),
            Bucket::Dense(bits) => bits.count_ones(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Bucket::Sparse(values) => values.is_empty(),
            Bucket::Dense(bits) => bits.count_ones() == 0,
        }
    }

    /// Converts to whichever representation is optimal for the current
    /// cardinality: a sparse bucket at or above [`SPARSE_THRESHOLD`] becomes
    /// dense, a dense bucket below it becomes sparse. Lossless both ways.
    pub fn normalize(self) -> Bucket {
        match self {
            Bucket::Sparse(values) if values.len() >= SPARSE_THRESHOLD => {
                Bucket::Dense(Box::new(to_bit_vector(&values)))
            }
            Bucket::Dense(ref bits) if bits.count_ones() < SPARSE_THRESHOLD => {
                Bucket::Sparse(to_sparse(bits))
            }
            other => other,
        }
    }
}

impl Default for Bucket {
    fn default() -> Self {
        Self::new()
    }
}

impl Set<u16> for Bucket {
    fn from_sorted(sorted: &[u16]) -> Self {
        debug_assert!(sorted.windows(2).all(|w| w[0] < w[1]));

        if sorted.len() >= SPARSE_THRESHOLD {
            Bucket::Dense(Box::new(to_bit_vector(sorted)))
        } else {
            Bucket::Sparse(SparseVec::from_slice(sorted))
        }
    }
}

fn to_bit_vector(values: &[u16]) -> BitVector {
    let mut bits = BitVector::new();
    for &low in values {
        bits.insert(low);
    }
    bits
}

fn to_sparse(bits: &BitVector) -> SparseVec {
    let mut values = SparseVec::with_capacity(bits.count_ones());
    bits.for_each_set(|low| values.push(low));
    values
}
