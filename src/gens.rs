/*!
# Substructure Generators

Utility methods to connect common motifs (paths, cycles, cliques) inside an
already existing graph. Handy for building test instances with known
structure, e.g. an odd cycle or a graph of known girth.

# Example

```rust
use mugraphs::{prelude::*, gens::*};

let mut g = AdjMultiGraph::new(5);
g.connect_path([0, 1, 2])?;
g.connect_cycle([2, 3, 4])?;

assert_eq!(g.number_of_edges(), 5);
# Ok::<(), mugraphs::error::GraphError>(())
```
*/

use itertools::Itertools;

use crate::prelude::*;

/// Trait for creating additional **substructures** (paths, cycles, cliques)
/// inside an already existing graph.
///
/// Implemented for all graphs that support edge editing.
pub trait GeneratorSubstructures {
    /// Connects the given nodes in order with a **simple path**.
    ///
    /// Each consecutive pair of nodes is connected by a single edge.
    ///
    /// # Errors
    /// [`GraphError::InvalidVertex`] if a node is out of range; edges before
    /// the offending pair remain added.
    fn connect_path<P>(&mut self, nodes_on_path: P) -> Result<()>
    where
        P: IntoIterator<Item = Node>;

    /// Connects the given nodes with a **cycle**.
    ///
    /// Consecutive nodes are connected by edges and the last node is
    /// connected back to the first. A single node yields a self-loop, two
    /// nodes a pair of parallel edges.
    ///
    /// # Errors
    /// See [`GeneratorSubstructures::connect_path`].
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C) -> Result<()>
    where
        C: IntoIterator<Item = Node>;

    /// Connects all given nodes into a **clique** (complete subgraph),
    /// adding each unordered pair exactly once and no self-loops.
    ///
    /// # Errors
    /// See [`GeneratorSubstructures::connect_path`].
    fn connect_clique<C>(&mut self, nodes: C) -> Result<()>
    where
        C: IntoIterator<Item = Node>,
        C::IntoIter: Clone;
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing,
{
    fn connect_path<P>(&mut self, nodes_on_path: P) -> Result<()>
    where
        P: IntoIterator<Item = Node>,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            self.add_edge(u, v)?;
        }
        Ok(())
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C) -> Result<()>
    where
        C: IntoIterator<Item = Node>,
    {
        let mut iter = nodes_in_cycle.into_iter();

        // tedious by hand to avoid cloning the iterator
        if let Some(first) = iter.next() {
            let mut prev = first;
            for cur in iter {
                self.add_edge(prev, cur)?;
                prev = cur;
            }

            self.add_edge(prev, first)?;
        }

        Ok(())
    }

    fn connect_clique<C>(&mut self, nodes: C) -> Result<()>
    where
        C: IntoIterator<Item = Node>,
        C::IntoIter: Clone,
    {
        for (u, v) in nodes.into_iter().tuple_combinations() {
            self.add_edge(u, v)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connect_path_adds_consecutive_edges() {
        let mut g = AdjMultiGraph::new(6);
        g.connect_path([]).unwrap();
        assert_eq!(g.number_of_edges(), 0);

        g.connect_path([1]).unwrap();
        assert_eq!(g.number_of_edges(), 0);

        g.connect_path([2, 1, 4]).unwrap();
        assert_eq!(g.number_of_edges(), 2);
        assert_eq!(g.adjacency(1).unwrap(), [2, 4]);
    }

    #[test]
    fn connect_cycle_closes_back_to_the_first_node() {
        let mut g = AdjMultiGraph::new(4);
        g.connect_cycle(0..4).unwrap();

        assert_eq!(g.number_of_edges(), 4);
        assert_eq!(g.adjacency(0).unwrap(), [1, 3]);

        // degenerate cycles
        let mut g = AdjMultiGraph::new(2);
        g.connect_cycle([0]).unwrap();
        assert_eq!(g.adjacency(0).unwrap(), [0, 0]);

        let mut g = AdjMultiGraph::new(2);
        g.connect_cycle([0, 1]).unwrap();
        assert_eq!(g.adjacency(0).unwrap(), [1, 1]);
    }

    #[test]
    fn connect_clique_adds_every_pair_once() {
        let mut g = AdjMultiGraph::new(5);
        g.connect_clique(1..5).unwrap();

        assert_eq!(g.number_of_edges(), 6);
        assert_eq!(g.degree_of(0), 0);
        for v in 1..5 {
            assert_eq!(g.degree_of(v), 3);
        }
    }

    #[test]
    fn out_of_range_nodes_are_rejected() {
        let mut g = AdjMultiGraph::new(3);
        assert!(g.connect_path([0, 1, 7]).is_err());
        assert!(g.connect_cycle([0, 5]).is_err());
        assert!(g.connect_clique([0, 1, 9]).is_err());
    }
}
