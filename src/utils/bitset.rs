//! A bit vector for efficient node-set operations.
//!
//! Traversal analyzers track visited nodes in this set; 64 nodes share one
//! word, so even the all-pairs computations in
//! [`GraphMetrics`](crate::algo::GraphMetrics) allocate only `n / 8` bytes
//! per run.

use crate::node::{Node, NumNodes};

/// A fixed-capacity bit vector indexed by [`Node`].
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BitSet {
    /// The bits, stored as a vector of words
    words: Vec<u64>,
    /// The number of bits in the set
    len: NumNodes,
}

impl BitSet {
    /// Creates a new empty bit set with the given capacity
    pub fn new(capacity: NumNodes) -> Self {
        let num_words = (capacity as usize).div_ceil(64);
        Self {
            words: vec![0; num_words],
            len: capacity,
        }
    }

    /// Creates a new bit set of the given capacity with all listed bits set
    pub fn new_with_bits_set<I>(capacity: NumNodes, bits: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        let mut set = Self::new(capacity);
        set.set_bits(bits);
        set
    }

    /// Returns the capacity of this bit set
    pub fn capacity(&self) -> NumNodes {
        self.len
    }

    /// Sets the bit at the given index and returns its previous value.
    /// ** Panics if `u >= capacity` **
    pub fn set_bit(&mut self, u: Node) -> bool {
        assert!(u < self.len, "bit index out of bounds");
        let word = (u / 64) as usize;
        let mask = 1u64 << (u % 64);
        let prev = self.words[word] & mask != 0;
        self.words[word] |= mask;
        prev
    }

    /// Sets all bits yielded by the iterator
    pub fn set_bits<I>(&mut self, bits: I)
    where
        I: IntoIterator<Item = Node>,
    {
        for u in bits {
            self.set_bit(u);
        }
    }

    /// Clears the bit at the given index and returns its previous value.
    /// ** Panics if `u >= capacity` **
    pub fn clear_bit(&mut self, u: Node) -> bool {
        assert!(u < self.len, "bit index out of bounds");
        let word = (u / 64) as usize;
        let mask = 1u64 << (u % 64);
        let prev = self.words[word] & mask != 0;
        self.words[word] &= !mask;
        prev
    }

    /// Returns *true* if the bit at the given index is set.
    /// ** Panics if `u >= capacity` **
    pub fn get_bit(&self, u: Node) -> bool {
        assert!(u < self.len, "bit index out of bounds");
        self.words[(u / 64) as usize] & (1u64 << (u % 64)) != 0
    }

    /// Returns the number of set bits
    pub fn cardinality(&self) -> NumNodes {
        self.words.iter().map(|w| w.count_ones()).sum()
    }

    /// Returns *true* if no bit is set
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Clears all bits
    pub fn clear_all(&mut self) {
        self.words.fill(0);
    }

    /// Returns an iterator over the indices of all set bits, in increasing order
    pub fn iter_set_bits(&self) -> BitSetIter<'_> {
        BitSetIter {
            words: &self.words,
            word_idx: 0,
            current: self.words.first().copied().unwrap_or(0),
        }
    }
}

impl std::fmt::Debug for BitSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter_set_bits()).finish()
    }
}

/// Iterator over the set bits of a [`BitSet`]
pub struct BitSetIter<'a> {
    words: &'a [u64],
    word_idx: usize,
    current: u64,
}

impl Iterator for BitSetIter<'_> {
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        while self.current == 0 {
            self.word_idx += 1;
            if self.word_idx >= self.words.len() {
                return None;
            }
            self.current = self.words[self.word_idx];
        }

        let bit = self.current.trailing_zeros();
        self.current &= self.current - 1;
        Some(self.word_idx as Node * 64 + bit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn set_and_get() {
        let mut set = BitSet::new(100);
        assert!(!set.set_bit(0));
        assert!(!set.set_bit(63));
        assert!(!set.set_bit(64));
        assert!(!set.set_bit(99));
        assert!(set.set_bit(63));

        assert!(set.get_bit(0));
        assert!(set.get_bit(64));
        assert!(!set.get_bit(1));
        assert_eq!(set.cardinality(), 4);
    }

    #[test]
    fn clear() {
        let mut set = BitSet::new_with_bits_set(70, [3, 65]);
        assert!(set.clear_bit(3));
        assert!(!set.clear_bit(3));
        assert_eq!(set.cardinality(), 1);

        set.clear_all();
        assert!(set.is_empty());
    }

    #[test]
    fn iter_set_bits() {
        let bits = vec![0 as Node, 1, 63, 64, 65, 127, 128, 199];
        let set = BitSet::new_with_bits_set(200, bits.iter().copied());
        assert_eq!(set.iter_set_bits().collect_vec(), bits);

        let empty = BitSet::new(200);
        assert_eq!(empty.iter_set_bits().count(), 0);

        let zero_capacity = BitSet::new(0);
        assert_eq!(zero_capacity.iter_set_bits().count(), 0);
    }

    #[test]
    #[should_panic]
    fn out_of_bounds() {
        let set = BitSet::new(10);
        set.get_bit(10);
    }
}
