/*!
Cycle detection with witnesses.

A cycle here is any closed walk of length at least one that does not simply
retrace a single edge: a self-loop, a pair of parallel edges, or a proper
cycle through three or more vertices. The finder always produces a concrete
witness walk, not just a boolean.

Runs in two phases. A linear pre-scan catches parallel edges by marking the
neighbor bag of every vertex and watching for a repeated non-loop entry. Only
when that finds nothing does the general depth-first phase run, which reports
the first already-visited neighbor that is not the vertex it arrived from and
reconstructs the cycle through the predecessor chain. Self-loop entries are
skipped in the pre-scan so the depth-first phase discovers a self-loop at `v`
as the minimal witness `[v, v]`.
*/

use crate::prelude::*;

/// One simulated recursive call of the cycle search: a node, the node the
/// search arrived from, and the position of the adjacency scan.
#[derive(Debug, Clone)]
struct CycleFrame {
    node: Node,
    from: Node,
    next_neighbor: usize,
}

/// Eager cycle finder over all components of the graph.
///
/// Detection stops at the first cycle found; its witness is a closed walk
/// with `first == last` whose consecutive entries are joined by edges of the
/// graph. A self-loop yields `[v, v]`, parallel edges yield `[v, w, v]`.
///
/// # Examples
/// ```
/// use mugraphs::{prelude::*, algo::*};
///
/// let acyclic = AdjMultiGraph::from_edges(3, [(0, 1), (1, 2)])?;
/// assert!(!acyclic.find_cycle().has_cycle());
///
/// let looped = AdjMultiGraph::from_edges(2, [(0, 0), (0, 1)])?;
/// assert_eq!(looped.find_cycle().cycle(), Some(&[0, 0][..]));
/// # Ok::<(), mugraphs::error::GraphError>(())
/// ```
#[derive(Debug)]
pub struct CycleFinder {
    cycle: Option<Vec<Node>>,
}

impl CycleFinder {
    /// Searches `graph` for a cycle in time `O(n + m)`
    pub fn new<G: AdjacencyList>(graph: &G) -> Self {
        let cycle = Self::parallel_edge(graph).or_else(|| Self::depth_first_cycle(graph));
        Self { cycle }
    }

    /// Returns *true* if the graph contains a self-loop, parallel edges, or a
    /// proper cycle
    pub fn has_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// Returns the witness walk of the first cycle found, `None` if the graph
    /// is acyclic
    pub fn cycle(&self) -> Option<&[Node]> {
        self.cycle.as_deref()
    }

    /// Pre-scan for parallel edges: marks the bag of every vertex once,
    /// skipping self-loop entries, and reports the first repeat.
    fn parallel_edge<G: AdjacencyList>(graph: &G) -> Option<Vec<Node>> {
        let mut marked = graph.vertex_bitset_unset();

        for v in graph.vertices() {
            for w in graph.neighbors_of(v) {
                if w != v && marked.set_bit(w) {
                    return Some(vec![v, w, v]);
                }
            }
            // unmark for the next bag
            for w in graph.neighbors_of(v) {
                marked.clear_bit(w);
            }
        }

        None
    }

    fn depth_first_cycle<G: AdjacencyList>(graph: &G) -> Option<Vec<Node>> {
        let mut visited = graph.vertex_bitset_unset();
        let mut parent = vec![INVALID_NODE; graph.len()];

        for s in graph.vertices() {
            if visited.get_bit(s) {
                continue;
            }
            visited.set_bit(s);

            let mut stack = vec![CycleFrame {
                node: s,
                from: INVALID_NODE,
                next_neighbor: 0,
            }];

            while let Some(frame) = stack.last_mut() {
                let adjacency = graph.as_neighbors_slice(frame.node);
                if let Some(&w) = adjacency.get(frame.next_neighbor) {
                    frame.next_neighbor += 1;
                    if !visited.get_bit(w) {
                        visited.set_bit(w);
                        parent[w as usize] = frame.node;
                        let from = frame.node;
                        stack.push(CycleFrame {
                            node: w,
                            from,
                            next_neighbor: 0,
                        });
                    } else if w != frame.from {
                        // closed through the non-tree edge {frame.node, w};
                        // w is an ancestor of frame.node (or frame.node itself
                        // for a self-loop)
                        let mut cycle = Vec::new();
                        let mut x = frame.node;
                        while x != w {
                            cycle.push(x);
                            x = parent[x as usize];
                        }
                        cycle.push(w);
                        cycle.push(frame.node);
                        return Some(cycle);
                    }
                } else {
                    stack.pop();
                }
            }
        }

        None
    }
}

/// Provides cycle detection directly as a method on graph data structures
pub trait CycleDetection: AdjacencyList {
    /// Searches the graph for a cycle
    fn find_cycle(&self) -> CycleFinder {
        CycleFinder::new(self)
    }
}

impl<G: AdjacencyList> CycleDetection for G {}
