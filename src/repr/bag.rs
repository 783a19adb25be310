use std::{iter::Copied, slice::Iter};

use smallvec::{Array, SmallVec};

use crate::node::{Node, NumNodes};

/// An unordered multiset of adjacent nodes.
///
/// Duplicate entries represent parallel edges; a node listing itself
/// represents a self-loop (stored twice by the graph). Iteration order is
/// implementation-defined but **stable**: it is the insertion order, and it
/// never changes as long as no entries are added.
pub trait AdjacencyBag: Clone + Default {
    /// Returns the number of entries in the bag
    fn num_of_neighbors(&self) -> NumNodes;

    type NeighborhoodIter<'a>: Iterator<Item = Node> + 'a
    where
        Self: 'a;

    /// Returns an iterator over all entries in insertion order
    fn neighbors(&self) -> Self::NeighborhoodIter<'_>;

    /// Appends an entry. Duplicates are not checked, which is what makes
    /// parallel edges representable in the first place.
    fn add_neighbor(&mut self, u: Node);

    /// Returns the entries as a slice in insertion order
    fn as_slice(&self) -> &[Node];
}

/// Basic bag implementation using `Vec<Node>`
#[derive(Debug, Default, Clone)]
pub struct ArrBag(pub Vec<Node>);

impl AdjacencyBag for ArrBag {
    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    type NeighborhoodIter<'a>
        = Copied<Iter<'a, Node>>
    where
        Self: 'a;

    fn neighbors(&self) -> Self::NeighborhoodIter<'_> {
        self.0.iter().copied()
    }

    fn add_neighbor(&mut self, u: Node) {
        self.0.push(u);
    }

    fn as_slice(&self) -> &[Node] {
        &self.0
    }
}

/// Like [`ArrBag`] but uses `SmallVec<[Node; N]>` instead.
/// Prefer this if the graph is known to be sparse.
#[derive(Debug, Default, Clone)]
pub struct SparseBag<const N: usize = 8>(pub SmallVec<[Node; N]>)
where
    [Node; N]: Array<Item = Node>;

impl<const N: usize> AdjacencyBag for SparseBag<N>
where
    [Node; N]: Array<Item = Node>,
{
    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    type NeighborhoodIter<'a>
        = Copied<Iter<'a, Node>>
    where
        Self: 'a;

    fn neighbors(&self) -> Self::NeighborhoodIter<'_> {
        self.0.iter().copied()
    }

    fn add_neighbor(&mut self, u: Node) {
        self.0.push(u);
    }

    fn as_slice(&self) -> &[Node] {
        &self.0
    }
}
