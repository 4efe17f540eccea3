//! Compressed bitmap for sets of 32-bit unsigned integers.
//!
//! Each value is split into a 16-bit bucket prefix (`value >> 16`) and a
//! 16-bit in-bucket offset (`value & 0xFFFF`). A bucket stores its offsets
//! as either a sorted array or a flat bit vector, whichever is cheaper for
//! its current cardinality, and union/intersection dispatch on the
//! representation pair of the two operands.

pub mod bucket;
pub mod dense;
pub mod ops;
mod bitmap;

pub use bitmap::{CompressedBitSet, NUM_BUCKETS};

pub trait Set<T>
where
    T: Clone,
{
    fn from_sorted(sorted: &[T]) -> Self;
}
