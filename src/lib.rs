/*!
`mugraphs` is a small analysis engine for graphs that are
- **m**ulti-edged : parallel edges and self-loops are first-class citizens,
- **u**nlabelled and **u**nsigned : Nodes are numbered `0` to `n - 1` (a symbol layer maps string labels onto that range),
- **u**nweighted : Neither nodes nor edges carry a weight,
- **u**ndirected : `Edge(u, v)` is treated as equivalent to `Edge(v, u)`.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
As most common graphs do not exceed `2^32` nodes, this should normally suffice and save space as compared to `u64/usize`.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`.

The storage backend is [`MultiGraph`](crate::repr::MultiGraph): one append-only adjacency bag per
node, generic over the bag implementation (see [`repr`]). Adding the edge `{u, v}` appends `v` to
`u`'s bag and `u` to `v`'s bag; a self-loop appends `u` to its own bag twice. The edge counter
counts `add_edge` calls, so a self-loop contributes `2` to `degree(u)` but only `1` to the edge
count. Downstream algorithms (girth in particular) rely on this convention.

# Design

Every analyzer is an eager struct: its entire algorithm runs inside the constructor and the
finished instance only answers read-only queries. A constructor either returns a fully computed
result or fails with a [`GraphError`](crate::error::GraphError) before any traversal begins.
The graph itself is never mutated by an analyzer.

The most common entry points are also available as traits on the graph itself
(`graph.bfs(0)`, `graph.connected_components()`, ...), so simple queries need no
explicit analyzer construction.

# Usage

There are *5* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, errors, basic graph operations, and the graph representations,
- [`algo`] includes the analyzers: traversal ([`DepthFirstSearch`](crate::algo::DepthFirstSearch),
  [`BreadthFirstSearch`](crate::algo::BreadthFirstSearch)), [`ConnectedComponents`](crate::algo::ConnectedComponents),
  [`CycleFinder`](crate::algo::CycleFinder), [`Bipartiteness`](crate::algo::Bipartiteness), and
  [`GraphMetrics`](crate::algo::GraphMetrics),
- [`io`] includes readers/writers for the serialized edge-list format,
- [`symbol`] includes [`SymbolGraph`](crate::symbol::SymbolGraph), mapping arbitrary string labels to dense node indices,
- [`gens`] includes deterministic substructure generators (paths, cycles, cliques) for building test instances.

In most use-cases, `use mugraphs::{prelude::*, algo::*};` suffices for your needs.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub mod symbol;
#[cfg(test)]
pub(crate) mod testing;
pub mod utils;

/// `mugraphs::prelude` includes definitions for nodes, edges and errors, all basic graph
/// operation traits as well as the implemented representations.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*};
}
