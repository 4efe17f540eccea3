//! Boolean set algebra over bucket representation pairs.
//!
//! Both operations dispatch on the (sparse, dense) variant pair of their
//! operands. Whenever one side is dense, the sparse side is the one scanned.
//! Every result passes through [`Bucket::normalize`] before it is returned,
//! so buckets entering subsequent operations are already in their
//! minimal-cost form.

use crate::bucket::{Bucket, SparseVec};
use crate::dense::BitVector;

pub fn intersect(a: &Bucket, b: &Bucket) -> Bucket {
    use Bucket::{Dense, Sparse};

    let raw = match (a, b) {
        // Cardinality can only shrink, so stay sparse rather than paying
        // for an intermediate bit vector.
        (Sparse(lhs), Sparse(rhs)) => Sparse(zipper_intersect(lhs, rhs)),
        (Sparse(values), Dense(bits)) | (Dense(bits), Sparse(values)) => {
            Sparse(filter_by_bits(values, bits))
        }
        (Dense(lhs), Dense(rhs)) => {
            let mut bits = lhs.clone();
            bits.intersect_with(rhs);
            Dense(bits)
        }
    };

    raw.normalize()
}

pub fn unite(a: &Bucket, b: &Bucket) -> Bucket {
    use Bucket::{Dense, Sparse};

    let raw = match (a, b) {
        // Unions tend to grow dense; materialize as a bit vector and let
        // normalize() walk it back when that guess turns out wrong.
        (Sparse(lhs), Sparse(rhs)) => {
            let mut bits = Box::new(BitVector::new());
            for &low in lhs.iter() {
                bits.insert(low);
            }
            for &low in rhs.iter() {
                bits.insert(low);
            }
            Dense(bits)
        }
        // Lower-bounded by the dense side, which is already above threshold.
        (Sparse(values), Dense(bits)) | (Dense(bits), Sparse(values)) => {
            let mut union = bits.clone();
            for &low in values.iter() {
                union.insert(low);
            }
            Dense(union)
        }
        (Dense(lhs), Dense(rhs)) => {
            let mut bits = lhs.clone();
            bits.union_with(rhs);
            Dense(bits)
        }
    };

    raw.normalize()
}

/// Zipper intersection of two strictly ascending sequences, with branchless
/// index updates on the miss path.
fn zipper_intersect(lhs: &[u16], rhs: &[u16]) -> SparseVec {
    let mut idx_l = 0;
    let mut idx_r = 0;
    let mut result = SparseVec::new();

    while idx_l < lhs.len() && idx_r < rhs.len() {
        let value_l = lhs[idx_l];
        let value_r = rhs[idx_r];

        if value_l == value_r {
            result.push(value_l);
            idx_l += 1;
            idx_r += 1;
        } else {
            idx_l += (value_l < value_r) as usize;
            idx_r += (value_r < value_l) as usize;
        }
    }

    result
}

/// Scans the sparse side, keeping the values set in the bit vector.
fn filter_by_bits(values: &[u16], bits: &BitVector) -> SparseVec {
    values.iter().copied().filter(|&low| bits.contains(low)).collect()
}
