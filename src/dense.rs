//! Fixed-width bit vector backing the dense bucket representation.

use std::fmt;

const WORD_BITS: usize = u64::BITS as usize;
const NUM_WORDS: usize = (1 << 16) / WORD_BITS;

/// A flat 65,536-bit vector, one bit per possible low-order value.
///
/// Costs 8 KiB regardless of cardinality, so owners box it and only reach
/// for it once a bucket holds enough values to beat the sorted array.
#[derive(Clone, PartialEq, Eq)]
pub struct BitVector {
    words: [u64; NUM_WORDS],
}

impl BitVector {
    pub fn new() -> Self {
        Self { words: [0; NUM_WORDS] }
    }

    #[inline]
    pub fn insert(&mut self, bit: u16) {
        self.words[bit as usize / WORD_BITS] |= 1 << (bit as usize % WORD_BITS);
    }

    #[inline]
    pub fn remove(&mut self, bit: u16) {
        self.words[bit as usize / WORD_BITS] &= !(1 << (bit as usize % WORD_BITS));
    }

    #[inline]
    pub fn contains(&self, bit: u16) -> bool {
        self.words[bit as usize / WORD_BITS] & (1 << (bit as usize % WORD_BITS)) != 0
    }

    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Single pass over the full width; no early exit.
    pub fn intersect_with(&mut self, other: &BitVector) {
        for (word, other_word) in self.words.iter_mut().zip(&other.words) {
            *word &= other_word;
        }
    }

    pub fn union_with(&mut self, other: &BitVector) {
        for (word, other_word) in self.words.iter_mut().zip(&other.words) {
            *word |= other_word;
        }
    }

    /// Visits every set bit in ascending order.
    pub fn for_each_set<F: FnMut(u16)>(&self, mut f: F) {
        for (index, word) in self.words.iter().copied().enumerate() {
            let base = (index * WORD_BITS) as u32;
            let mut state = word;
            while state != 0 {
                f((base | state.trailing_zeros()) as u16);
                state &= state - 1;
            }
        }
    }
}

impl Default for BitVector {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitVector")
            .field("count_ones", &self.count_ones())
            .finish()
    }
}
