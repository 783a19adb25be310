use std::fmt::{Display, Formatter};

use crate::{ops::*, prelude::*};

use super::AdjacencyBag;

/// An undirected multigraph: a fixed number of nodes, an append-only edge set
/// with parallel edges and self-loops, and one adjacency bag per node.
///
/// Adding the edge `{u, v}` appends `v` to `u`'s bag and `u` to `v`'s bag; a
/// self-loop appends `u` to its own bag **twice**. The edge counter counts
/// `add_edge` calls, so `degree(u)` of a self-looped node exceeds what naive
/// edge-counting suggests. This convention is deliberate and load-bearing:
/// the girth and cycle analyzers expect both bag entries of a self-loop.
///
/// Cloning deep-copies all bags and preserves the per-node adjacency order.
///
/// # Examples
/// ```
/// use mugraphs::prelude::*;
///
/// let mut g = AdjMultiGraph::new(3);
/// g.add_edge(0, 1)?;
/// g.add_edge(0, 1)?; // parallel edge
/// g.add_edge(2, 2)?; // self-loop
///
/// assert_eq!(g.number_of_edges(), 3);
/// assert_eq!(g.degree(0)?, 2);
/// assert_eq!(g.degree(2)?, 2);
/// assert_eq!(g.adjacency(2)?, &[2, 2]);
/// # Ok::<(), mugraphs::error::GraphError>(())
/// ```
#[derive(Debug, Clone)]
pub struct MultiGraph<B: AdjacencyBag> {
    bags: Vec<B>,
    num_edges: NumEdges,
}

/// Representation using `Vec`-backed adjacency bags
pub type AdjMultiGraph = MultiGraph<ArrBag>;

/// Representation using `SmallVec`-backed adjacency bags
pub type SparseMultiGraph = MultiGraph<SparseBag>;

impl<B: AdjacencyBag> MultiGraph<B> {
    /// Returns the adjacency entries of `u` in insertion order.
    /// This is the validated counterpart of
    /// [`AdjacencyList::as_neighbors_slice`].
    pub fn adjacency(&self, u: Node) -> Result<&[Node]> {
        self.try_vertex(u)?;
        Ok(self.bags[u as usize].as_slice())
    }

    /// Returns the number of adjacency entries of `u`; a self-loop counts twice.
    /// This is the validated counterpart of [`AdjacencyList::degree_of`].
    pub fn degree(&self, u: Node) -> Result<NumNodes> {
        self.try_vertex(u)?;
        Ok(self.bags[u as usize].num_of_neighbors())
    }
}

impl<B: AdjacencyBag> GraphNodeOrder for MultiGraph<B> {
    fn number_of_nodes(&self) -> NumNodes {
        self.bags.len() as NumNodes
    }
}

impl<B: AdjacencyBag> GraphEdgeOrder for MultiGraph<B> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<B: AdjacencyBag> AdjacencyList for MultiGraph<B> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.bags[u as usize].neighbors()
    }

    fn as_neighbors_slice(&self, u: Node) -> &[Node] {
        self.bags[u as usize].as_slice()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.bags[u as usize].num_of_neighbors()
    }
}

impl<B: AdjacencyBag> GraphNew for MultiGraph<B> {
    fn new(n: NumNodes) -> Self {
        Self {
            bags: vec![B::default(); n as usize],
            num_edges: 0,
        }
    }
}

impl<B: AdjacencyBag> GraphEdgeEditing for MultiGraph<B> {
    fn add_edge(&mut self, u: Node, v: Node) -> Result<()> {
        self.try_vertex(u)?;
        self.try_vertex(v)?;

        self.num_edges += 1;
        self.bags[u as usize].add_neighbor(v);
        self.bags[v as usize].add_neighbor(u);
        Ok(())
    }
}

impl<B: AdjacencyBag> Display for MultiGraph<B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{} vertices, {} edges",
            self.number_of_nodes(),
            self.number_of_edges()
        )?;
        for u in self.vertices() {
            write!(f, "{u}:")?;
            for v in self.neighbors_of(u) {
                write!(f, " {v}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
