/*!
Distance metrics of a connected graph.

Eccentricity, diameter, radius, and center are computed from one breadth-first
search per vertex, so construction costs `O(n * (n + m))`. The girth (length
of a shortest cycle) falls out of the same sweep: whenever a search from `s`
traverses an edge `{v, w}` whose far end is already visited but is not `v`'s
own predecessor, the graph contains a closed walk of length
`dist(v) + dist(w) + 1`, and the minimum of these candidates over all start
vertices is exact.
*/

use std::collections::VecDeque;

use crate::{algo::Connectivity, prelude::*};

/// Eagerly computed distance metrics of a connected multigraph.
///
/// # Examples
/// ```
/// use mugraphs::{prelude::*, algo::*};
///
/// // a path on 11 vertices
/// let g = AdjMultiGraph::from_edges(11, (0..10).map(|v| (v, v + 1)))?;
/// let metrics = GraphMetrics::new(&g)?;
///
/// assert_eq!(metrics.diameter(), 10);
/// assert_eq!(metrics.radius(), 5);
/// assert_eq!(metrics.center(), 5);
/// assert_eq!(metrics.girth(), None);
/// # Ok::<(), mugraphs::error::GraphError>(())
/// ```
#[derive(Debug)]
pub struct GraphMetrics {
    eccentricity: Vec<NumNodes>,
    diameter: NumNodes,
    radius: NumNodes,
    center: Node,
    girth: Option<NumNodes>,
}

impl GraphMetrics {
    /// Computes all metrics of `graph` with one BFS per vertex.
    ///
    /// # Errors
    /// [`GraphError::InvalidArgument`] if the graph has no vertices or more
    /// than one connected component; the check runs before any distance
    /// computation.
    pub fn new<G: AdjacencyList>(graph: &G) -> Result<Self> {
        if graph.is_empty() {
            return Err(GraphError::invalid_argument("graph has no vertices"));
        }
        if !graph.is_connected() {
            return Err(GraphError::invalid_argument("graph is not connected"));
        }

        let mut metrics = Self {
            eccentricity: Vec::with_capacity(graph.len()),
            diameter: 0,
            radius: NumNodes::MAX,
            center: 0,
            girth: None,
        };

        let mut dist = vec![INVALID_NODE; graph.len()];
        let mut parent = vec![INVALID_NODE; graph.len()];
        for s in graph.vertices() {
            let (ecc, shortest_cycle) = Self::sweep_from(graph, s, &mut dist, &mut parent);

            metrics.eccentricity.push(ecc);
            metrics.diameter = metrics.diameter.max(ecc);
            if ecc < metrics.radius {
                metrics.radius = ecc;
                metrics.center = s;
            }
            if let Some(len) = shortest_cycle {
                metrics.girth = Some(metrics.girth.map_or(len, |g| g.min(len)));
            }
        }

        Ok(metrics)
    }

    /// One BFS from `s`: returns the eccentricity of `s` and the length of
    /// the shortest closed walk witnessed through a non-tree edge.
    fn sweep_from<G: AdjacencyList>(
        graph: &G,
        s: Node,
        dist: &mut [NumNodes],
        parent: &mut [Node],
    ) -> (NumNodes, Option<NumNodes>) {
        dist.fill(INVALID_NODE);
        parent.fill(INVALID_NODE);
        dist[s as usize] = 0;

        let mut ecc = 0;
        let mut shortest_cycle = None;

        let mut queue = VecDeque::from(vec![s]);
        while let Some(v) = queue.pop_front() {
            ecc = ecc.max(dist[v as usize]);
            for w in graph.neighbors_of(v) {
                if dist[w as usize] == INVALID_NODE {
                    dist[w as usize] = dist[v as usize] + 1;
                    parent[w as usize] = v;
                    queue.push_back(w);
                } else if w != parent[v as usize] {
                    let len = dist[v as usize] + dist[w as usize] + 1;
                    shortest_cycle = Some(shortest_cycle.map_or(len, |c: NumNodes| c.min(len)));
                }
            }
        }

        (ecc, shortest_cycle)
    }

    /// Returns the maximum BFS distance from `v` to any vertex
    pub fn eccentricity(&self, v: Node) -> Result<NumNodes> {
        let bound = self.eccentricity.len() as NumNodes;
        if v < bound {
            Ok(self.eccentricity[v as usize])
        } else {
            Err(GraphError::InvalidVertex { vertex: v, bound })
        }
    }

    /// Returns the largest eccentricity
    pub fn diameter(&self) -> NumNodes {
        self.diameter
    }

    /// Returns the smallest eccentricity
    pub fn radius(&self) -> NumNodes {
        self.radius
    }

    /// Returns the smallest vertex whose eccentricity equals the radius
    pub fn center(&self) -> Node {
        self.center
    }

    /// Returns the length of a shortest cycle, `None` if the graph is acyclic
    pub fn girth(&self) -> Option<NumNodes> {
        self.girth
    }
}
