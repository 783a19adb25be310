/*!
Connected components of an undirected multigraph.

A single sweep over all vertices runs one depth-first search per still
unvisited vertex and stamps a component id on everything it reaches. Parallel
edges and self-loops never influence connectivity, they are simply redundant
adjacency entries.
*/

use crate::{algo::NodeSequencer, prelude::*};

/// Eagerly computed partition of the vertices into connected components.
///
/// Component ids are dense in `[0, count)` and assigned in order of the
/// smallest vertex of each component.
///
/// # Examples
/// ```
/// use mugraphs::{prelude::*, algo::*};
///
/// let g = AdjMultiGraph::from_edges(5, [(0, 1), (3, 4)])?;
/// let cc = g.connected_components();
///
/// assert_eq!(cc.count(), 3);
/// assert!(cc.connected(0, 1)?);
/// assert!(!cc.connected(1, 3)?);
/// assert_eq!(cc.size_of_component_containing(2)?, 1);
/// # Ok::<(), mugraphs::error::GraphError>(())
/// ```
#[derive(Debug)]
pub struct ConnectedComponents {
    component: Vec<Node>,
    sizes: Vec<NumNodes>,
    count: NumNodes,
}

impl ConnectedComponents {
    /// Computes the connected components of `graph` in time `O(n + m)`
    pub fn new<G: AdjacencyList>(graph: &G) -> Self {
        let mut cc = Self {
            component: vec![INVALID_NODE; graph.len()],
            sizes: Vec::new(),
            count: 0,
        };

        let mut visited = graph.vertex_bitset_unset();
        for u in graph.vertices() {
            if visited.get_bit(u) {
                continue;
            }

            let mut size = 0;
            visited.set_bit(u);
            let mut stack = Vec::init(u);
            while let Some(v) = stack.pop() {
                cc.component[v as usize] = cc.count;
                size += 1;
                for w in graph.neighbors_of(v) {
                    if !visited.set_bit(w) {
                        stack.push(w);
                    }
                }
            }

            cc.sizes.push(size);
            cc.count += 1;
        }

        cc
    }

    /// Returns the number of connected components
    pub fn count(&self) -> NumNodes {
        self.count
    }

    /// Returns *true* if the graph consists of at most one component
    pub fn is_connected(&self) -> bool {
        self.count <= 1
    }

    /// Returns the component id of `v`
    pub fn component_of(&self, v: Node) -> Result<Node> {
        self.try_vertex(v)?;
        Ok(self.component[v as usize])
    }

    /// Returns the number of vertices in the component containing `v`
    pub fn size_of_component_containing(&self, v: Node) -> Result<NumNodes> {
        let id = self.component_of(v)?;
        Ok(self.sizes[id as usize])
    }

    /// Returns *true* if `v` and `w` lie in the same component
    pub fn connected(&self, v: Node, w: Node) -> Result<bool> {
        Ok(self.component_of(v)? == self.component_of(w)?)
    }

    fn try_vertex(&self, v: Node) -> Result<()> {
        let bound = self.component.len() as NumNodes;
        if v < bound {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex { vertex: v, bound })
        }
    }
}

/// Searches for a vertex whose removal does not disconnect the subgraph
/// reachable from `start`.
///
/// A vertex qualifies if all of its neighbors are already visited by the time
/// its depth-first scan finishes, i.e. it spawned no child in the search tree.
/// Such a vertex always exists in a non-empty search, so the result is `Some`
/// whenever `start` is valid.
///
/// # Errors
/// [`GraphError::InvalidVertex`] if `start >= n`.
pub fn non_separating_vertex<G: AdjacencyList>(graph: &G, start: Node) -> Result<Option<Node>> {
    graph.try_vertex(start)?;

    let mut visited = graph.vertex_bitset_unset();
    visited.set_bit(start);

    // (vertex, adjacency position, spawned a child)
    let mut stack = vec![(start, 0usize, false)];
    let mut candidate = None;

    while let Some((v, pos, spawned)) = stack.last_mut() {
        let adjacency = graph.as_neighbors_slice(*v);
        if let Some(&w) = adjacency.get(*pos) {
            *pos += 1;
            if !visited.set_bit(w) {
                *spawned = true;
                stack.push((w, 0, false));
            }
        } else {
            if !*spawned {
                candidate = Some(*v);
            }
            stack.pop();
        }
    }

    Ok(candidate)
}

/// Provides the component analysis directly as methods on graph data structures
pub trait Connectivity: AdjacencyList {
    /// Computes the connected components of the graph
    fn connected_components(&self) -> ConnectedComponents {
        ConnectedComponents::new(self)
    }

    /// Returns *true* if every vertex is reachable from every other vertex
    fn is_connected(&self) -> bool {
        self.connected_components().is_connected()
    }
}

impl<G: AdjacencyList> Connectivity for G {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{algo::Traversal, testing::*};
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn three_components_with_expected_sizes() {
        let graph = tiny_g();
        let cc = graph.connected_components();

        assert_eq!(cc.count(), 3);
        assert!(!cc.is_connected());

        assert_eq!(cc.size_of_component_containing(0).unwrap(), 7);
        assert_eq!(cc.size_of_component_containing(7).unwrap(), 2);
        assert_eq!(cc.size_of_component_containing(9).unwrap(), 4);

        for (v, w) in [(0, 6), (7, 8), (9, 12)] {
            assert!(cc.connected(v, w).unwrap());
        }
        assert!(!cc.connected(0, 7).unwrap());
        assert!(!cc.connected(8, 9).unwrap());
    }

    #[test]
    fn ids_are_dense_and_ordered_by_smallest_vertex() {
        let graph = tiny_g();
        let cc = graph.connected_components();

        assert_eq!(cc.component_of(0).unwrap(), 0);
        assert_eq!(cc.component_of(7).unwrap(), 1);
        assert_eq!(cc.component_of(9).unwrap(), 2);
    }

    #[test]
    fn components_form_a_partition() {
        let rng = &mut Pcg64Mcg::seed_from_u64(23);

        for _ in 0..20 {
            let graph =
                AdjMultiGraph::from_edges(30, random_edges(rng, 30, 25).into_iter()).unwrap();
            let cc = graph.connected_components();

            let mut sizes = vec![0 as NumNodes; cc.count() as usize];
            for v in graph.vertices() {
                let id = cc.component_of(v).unwrap();
                assert!(id < cc.count());
                sizes[id as usize] += 1;
            }
            assert_eq!(sizes.iter().sum::<NumNodes>(), graph.number_of_nodes());
            for v in graph.vertices() {
                assert_eq!(
                    sizes[cc.component_of(v).unwrap() as usize],
                    cc.size_of_component_containing(v).unwrap()
                );
            }

            // same component iff mutually reachable
            let searches: Vec<_> = graph.vertices().map(|v| graph.dfs(v).unwrap()).collect();
            for v in graph.vertices() {
                for w in graph.vertices() {
                    assert_eq!(
                        cc.connected(v, w).unwrap(),
                        searches[v as usize].did_visit(w).unwrap()
                    );
                }
            }
        }
    }

    #[test]
    fn edgeless_graph_has_singleton_components() {
        let graph = AdjMultiGraph::new(4);
        let cc = graph.connected_components();

        assert_eq!(cc.count(), 4);
        for v in graph.vertices() {
            assert_eq!(cc.component_of(v).unwrap(), v);
            assert_eq!(cc.size_of_component_containing(v).unwrap(), 1);
        }
    }

    #[test]
    fn queries_validate_their_vertex() {
        let cc = AdjMultiGraph::new(2).connected_components();

        assert!(cc.component_of(2).is_err());
        assert!(cc.connected(0, 2).is_err());
        assert!(cc.size_of_component_containing(5).is_err());
    }

    #[test]
    fn removal_candidate_keeps_graph_connected() {
        let graph = tiny_cg();
        let v = non_separating_vertex(&graph, 0).unwrap().unwrap();

        // rebuild without v and check the rest is still one component
        let n = graph.number_of_nodes();
        let survivors = graph
            .edges(true)
            .filter(|&Edge(a, b)| a != v && b != v)
            .collect::<Vec<_>>();
        let reduced = AdjMultiGraph::from_edges(n, survivors).unwrap();

        let cc = reduced.connected_components();
        for w in reduced.vertices().filter(|&w| w != v) {
            assert!(cc.connected(
                reduced.vertices().find(|&x| x != v).unwrap(),
                w
            ).unwrap());
        }
    }

    #[test]
    fn removal_candidate_on_path_is_an_endpoint() {
        let graph = path_graph(6);
        let v = non_separating_vertex(&graph, 0).unwrap().unwrap();
        assert_eq!(v, 5);

        assert!(non_separating_vertex(&graph, 9).is_err());
    }
}
