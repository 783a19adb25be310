/*!
# Graph Operations

Trait seam between the storage backends in [`repr`](crate::repr) and the
analyzers in [`algo`](crate::algo). The getters here mirror the container's
validated contract but **panic** on out-of-range indices: algorithms only ever
feed them node values they obtained by enumerating `0..n`, so validation
happens once at the analyzer boundary (see [`GraphNodeOrder::try_vertex`])
and not per adjacency access.
*/

use std::ops::Range;

use itertools::Itertools;

use crate::prelude::*;

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Returns the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V
    fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns an empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.number_of_nodes() == 0
    }

    /// Validates a vertex index against the node range of this graph.
    /// This is the eager check every fallible entry point performs before
    /// any traversal work.
    fn try_vertex(&self, u: Node) -> Result<Node> {
        if u < self.number_of_nodes() {
            Ok(u)
        } else {
            Err(GraphError::InvalidVertex {
                vertex: u,
                bound: self.number_of_nodes(),
            })
        }
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph.
    ///
    /// This counts `add_edge` calls: a self-loop counts once here even though
    /// it contributes two entries to its node's adjacency bag.
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn has_no_edges(&self) -> bool {
        self.number_of_edges() == 0
    }
}

macro_rules! node_iterator {
    ($iter : ident, $single : ident, $type : ty) => {
        fn $iter(&self) -> impl Iterator<Item = $type> + '_ {
            self.vertices().map(|u| self.$single(u))
        }
    };
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the (open) neighborhood of a given vertex.
    /// Multiplicities are preserved: a parallel edge yields its endpoint
    /// once per copy, a self-loop yields `u` twice.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the neighborhood of a given vertex as a slice in insertion order.
    /// ** Panics if `u >= n` **
    fn as_neighbors_slice(&self, u: Node) -> &[Node];

    /// Returns the number of adjacency entries of `u`.
    /// A self-loop contributes `2` to this count.
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    node_iterator!(degrees, degree_of, NumNodes);

    /// Returns an iterator over outgoing edges of a given vertex.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u)
            .map(move |v| Edge(u, v))
            .filter(move |e| !only_normalized || e.is_normalized())
    }

    /// Returns an iterator over all adjacency entries in the graph as edges.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// Note that every proper edge appears twice when `only_normalized` is false
    /// (once from each endpoint), and that a self-loop always contributes both
    /// of its bag entries.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices()
            .flat_map(move |u| self.edges_of(u, only_normalized))
    }

    /// Returns an iterator over all edges in the graph in sorted order.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn ordered_edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> {
        self.edges(only_normalized).sorted()
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph with n singleton nodes
    fn new(n: NumNodes) -> Self;
}

/// Provides functions to insert edges.
///
/// Edges are append-only: there is no removal. The adjacency order within a
/// bag is the insertion order of the `add_edge` calls, which is what makes
/// traversal results (and thus cycle/path witnesses) deterministic for a
/// fixed construction sequence.
pub trait GraphEdgeEditing: GraphNodeOrder {
    /// Adds the undirected edge `{u, v}` to the graph. Parallel edges and
    /// self-loops are permitted and stored with their multiplicity.
    ///
    /// # Errors
    /// [`GraphError::InvalidVertex`] if either endpoint is `>= n`; the check
    /// runs before any mutation.
    fn add_edge(&mut self, u: Node, v: Node) -> Result<()>;

    /// Adds all edges in the collection
    fn add_edges<I>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<Edge>,
    {
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            self.add_edge(u, v)?;
        }
        Ok(())
    }
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch: Sized {
    /// Create a graph from a number of nodes and an iterator over Edges
    fn from_edges<I>(n: NumNodes, edges: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Edge>;
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges<I>(n: NumNodes, edges: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Edge>,
    {
        let mut graph = Self::new(n);
        graph.add_edges(edges)?;
        Ok(graph)
    }
}
