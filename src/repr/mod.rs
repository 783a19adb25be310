/*!
# Representations

Storage backends for undirected multigraphs.

A graph is a flat `Vec` of per-node **adjacency bags** plus an edge counter;
the bag type is pluggable via the [`AdjacencyBag`] trait:

- [`ArrBag`]: a plain `Vec<Node>` per node, the default,
- [`SparseBag`]: a `SmallVec`-backed bag that stores the first few neighbors
  inline. Prefer this if the graph is known to be sparse.

Bags are unordered multisets with a stable, insertion-ordered iteration: the
same sequence of `add_edge` calls always produces the same adjacency order,
which keeps traversal results and witness cycles deterministic.
*/

mod bag;
mod multigraph;

pub use bag::*;
pub use multigraph::*;
