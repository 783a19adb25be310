/*!
Graph traversal analyzers and the frontier abstraction they share.

This module provides:
- [`NodeSequencer`]: the frontier interface, implemented with queue semantics
  by `VecDeque` (BFS) and with stack semantics by `Vec` (DFS).
- [`DepthFirstSearch`]: reachability with predecessor tracking, available both
  as a recursive walk and as an explicit-stack iterative walk that produces
  identical results without risking call-stack overflow on deep graphs.
- [`BreadthFirstSearch`]: single- and multi-source shortest unweighted paths.
- A high-level [`Traversal`] trait that exposes the analyzers directly as
  methods on graph data structures.

Both analyzers run eagerly in their constructor; afterwards they only answer
read-only queries against the visited-set, predecessor and distance state they
computed.
*/

use std::collections::VecDeque;

use crate::prelude::*;

/// Abstraction for the traversal frontier data structure.
///
/// A `NodeSequencer` is responsible for storing the "to be visited"
/// items during a traversal. Different implementations determine
/// the traversal order:
///
/// - [`VecDeque`] -> queue semantics -> **BFS**
/// - [`Vec`] -> stack semantics -> **DFS**
pub trait NodeSequencer<T> {
    /// Creates a new sequencer initialized with a single item
    fn init(u: T) -> Self;

    /// Pushes an item into the frontier
    fn push(&mut self, item: T);

    /// Removes and returns the next item from the frontier
    fn pop(&mut self) -> Option<T>;

    /// Returns a clone of the next item without removing it
    fn peek(&self) -> Option<T>;

    /// Returns the number of items currently in the frontier
    fn cardinality(&self) -> usize;

    /// Returns *true* if the frontier holds no items
    fn is_exhausted(&self) -> bool {
        self.cardinality() == 0
    }
}

impl<T> NodeSequencer<T> for VecDeque<T>
where
    T: Clone,
{
    fn init(u: T) -> Self {
        Self::from(vec![u])
    }
    fn push(&mut self, u: T) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn peek(&self) -> Option<T> {
        self.front().cloned()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl<T> NodeSequencer<T> for Vec<T>
where
    T: Clone,
{
    fn init(u: T) -> Self {
        vec![u]
    }
    fn push(&mut self, u: T) {
        self.push(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }
    fn peek(&self) -> Option<T> {
        self.last().cloned()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// One simulated recursive call of the iterative depth-first search:
/// a node together with the position of its adjacency scan.
#[derive(Debug, Clone)]
struct DfsFrame {
    node: Node,
    next_neighbor: usize,
}

/// Eager depth-first search from a single start node.
///
/// Records the visited-set, the predecessor of every reached node in the DFS
/// tree, and the number of reached nodes. The two constructors —
/// [`recursive`](DepthFirstSearch::recursive) and
/// [`iterative`](DepthFirstSearch::iterative) — produce the exact same state
/// for the same graph and start node; the iterative form keeps its call stack
/// on the heap and is the one every other analyzer builds on.
///
/// # Examples
/// ```
/// use mugraphs::{prelude::*, algo::*};
///
/// let g = AdjMultiGraph::from_edges(4, [(0, 1), (1, 2)])?;
/// let dfs = g.dfs(0)?;
///
/// assert_eq!(dfs.count(), 3);
/// assert!(dfs.did_visit(2)?);
/// assert!(!dfs.did_visit(3)?);
/// assert_eq!(dfs.path_to(2)?, Some(vec![0, 1, 2]));
/// # Ok::<(), mugraphs::error::GraphError>(())
/// ```
#[derive(Debug)]
pub struct DepthFirstSearch {
    visited: NodeBitSet,
    parent: Vec<Node>,
    start: Node,
    reached: NumNodes,
}

impl DepthFirstSearch {
    /// Runs an iterative depth-first search from `start` using an explicit
    /// frame stack on the heap.
    ///
    /// # Errors
    /// [`GraphError::InvalidVertex`] if `start >= n`.
    pub fn iterative<G: AdjacencyList>(graph: &G, start: Node) -> Result<Self> {
        graph.try_vertex(start)?;

        let mut search = Self::pristine(graph, start);
        search.visited.set_bit(start);
        search.reached = 1;

        let mut stack = Vec::init(DfsFrame {
            node: start,
            next_neighbor: 0,
        });

        while let Some(frame) = stack.last_mut() {
            let adjacency = graph.as_neighbors_slice(frame.node);
            if let Some(&w) = adjacency.get(frame.next_neighbor) {
                frame.next_neighbor += 1;
                if !search.visited.set_bit(w) {
                    search.parent[w as usize] = frame.node;
                    search.reached += 1;
                    stack.push(DfsFrame {
                        node: w,
                        next_neighbor: 0,
                    });
                }
            } else {
                stack.pop();
            }
        }

        Ok(search)
    }

    /// Runs a recursive depth-first search from `start`.
    ///
    /// Call-stack depth is proportional to the longest simple path found, so
    /// prefer [`DepthFirstSearch::iterative`] for graphs that may be deep.
    /// Both constructors yield identical visited-sets and predecessor maps.
    ///
    /// # Errors
    /// [`GraphError::InvalidVertex`] if `start >= n`.
    pub fn recursive<G: AdjacencyList>(graph: &G, start: Node) -> Result<Self> {
        graph.try_vertex(start)?;

        let mut search = Self::pristine(graph, start);
        search.visited.set_bit(start);
        search.reached = 1;
        search.visit(graph, start);

        Ok(search)
    }

    fn pristine<G: AdjacencyList>(graph: &G, start: Node) -> Self {
        Self {
            visited: graph.vertex_bitset_unset(),
            parent: vec![INVALID_NODE; graph.len()],
            start,
            reached: 0,
        }
    }

    fn visit<G: AdjacencyList>(&mut self, graph: &G, v: Node) {
        for w in graph.neighbors_of(v) {
            if !self.visited.set_bit(w) {
                self.parent[w as usize] = v;
                self.reached += 1;
                self.visit(graph, w);
            }
        }
    }

    /// Returns the start node of this search
    pub fn start(&self) -> Node {
        self.start
    }

    /// Returns the number of nodes reached from the start node (including it)
    pub fn count(&self) -> NumNodes {
        self.reached
    }

    /// Returns *true* if `v` was reached from the start node
    pub fn did_visit(&self, v: Node) -> Result<bool> {
        self.try_vertex(v)?;
        Ok(self.visited.get_bit(v))
    }

    /// Returns the predecessor of `v` in the DFS tree, `None` for the start
    /// node and for unreached nodes
    pub fn predecessor(&self, v: Node) -> Result<Option<Node>> {
        self.try_vertex(v)?;
        let p = self.parent[v as usize];
        Ok((p != INVALID_NODE).then_some(p))
    }

    /// Reconstructs the tree path from the start node to `v` by walking
    /// predecessors backwards. Returns `Ok(None)` if `v` was never reached;
    /// that is not an error.
    pub fn path_to(&self, v: Node) -> Result<Option<Vec<Node>>> {
        self.try_vertex(v)?;
        if !self.visited.get_bit(v) {
            return Ok(None);
        }

        let mut path = vec![v];
        let mut x = v;
        while x != self.start {
            x = self.parent[x as usize];
            path.push(x);
        }
        path.reverse();
        Ok(Some(path))
    }

    fn try_vertex(&self, v: Node) -> Result<()> {
        let bound = self.parent.len() as NumNodes;
        if v < bound {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex { vertex: v, bound })
        }
    }
}

/// Eager breadth-first search from one or more source nodes.
///
/// Records the visited-set, the predecessor of every reached node in the BFS
/// forest, and the distance (number of edges on a shortest path) from the
/// closest source. Multi-source searches seed **one unified frontier** with
/// all sources at distance `0` before any expansion; this is not equivalent
/// to running independent searches and is the reason the predecessor map
/// forms a forest rooted at the whole source set.
///
/// # Examples
/// ```
/// use mugraphs::{prelude::*, algo::*};
///
/// let g = AdjMultiGraph::from_edges(5, [(0, 1), (1, 2), (2, 3)])?;
/// let bfs = g.bfs(0)?;
///
/// assert_eq!(bfs.distance_to(3)?, Some(3));
/// assert_eq!(bfs.distance_to(4)?, None);
/// assert_eq!(bfs.path_to(2)?, Some(vec![0, 1, 2]));
/// # Ok::<(), mugraphs::error::GraphError>(())
/// ```
#[derive(Debug)]
pub struct BreadthFirstSearch {
    visited: NodeBitSet,
    parent: Vec<Node>,
    dist: Vec<NumNodes>,
}

impl BreadthFirstSearch {
    /// Runs a breadth-first search from a single source.
    ///
    /// # Errors
    /// [`GraphError::InvalidVertex`] if `source >= n`.
    pub fn new<G: AdjacencyList>(graph: &G, source: Node) -> Result<Self> {
        Self::multi_source(graph, &[source])
    }

    /// Runs a breadth-first search from every node in `sources`
    /// simultaneously: all sources start at distance `0` in the same frontier.
    ///
    /// # Errors
    /// [`GraphError::InvalidArgument`] if `sources` is empty,
    /// [`GraphError::InvalidVertex`] if any source is `>= n`. Both are checked
    /// before the traversal starts.
    pub fn multi_source<G: AdjacencyList>(graph: &G, sources: &[Node]) -> Result<Self> {
        if sources.is_empty() {
            return Err(GraphError::invalid_argument("source collection is empty"));
        }
        for &s in sources {
            graph.try_vertex(s)?;
        }

        let mut search = Self {
            visited: graph.vertex_bitset_unset(),
            parent: vec![INVALID_NODE; graph.len()],
            dist: vec![INVALID_NODE; graph.len()],
        };

        let mut queue: VecDeque<Node> = VecDeque::with_capacity(sources.len());
        for &s in sources {
            // duplicate sources are seeded only once
            if !search.visited.set_bit(s) {
                search.dist[s as usize] = 0;
                queue.push(s);
            }
        }

        while let Some(v) = queue.pop() {
            for w in graph.neighbors_of(v) {
                if !search.visited.set_bit(w) {
                    search.parent[w as usize] = v;
                    search.dist[w as usize] = search.dist[v as usize] + 1;
                    queue.push(w);
                }
            }
        }

        Ok(search)
    }

    /// Returns *true* if `v` was reached from some source
    pub fn has_path_to(&self, v: Node) -> Result<bool> {
        self.try_vertex(v)?;
        Ok(self.visited.get_bit(v))
    }

    /// Returns the number of edges on a shortest path from the closest source
    /// to `v`, or `None` if `v` is unreached
    pub fn distance_to(&self, v: Node) -> Result<Option<NumNodes>> {
        self.try_vertex(v)?;
        let d = self.dist[v as usize];
        Ok((d != INVALID_NODE).then_some(d))
    }

    /// Returns the predecessor of `v` in the BFS forest, `None` for sources
    /// and for unreached nodes
    pub fn predecessor(&self, v: Node) -> Result<Option<Node>> {
        self.try_vertex(v)?;
        let p = self.parent[v as usize];
        Ok((p != INVALID_NODE).then_some(p))
    }

    /// Reconstructs a shortest path from the closest source to `v` by walking
    /// predecessors backwards until a distance-`0` node is met. Returns
    /// `Ok(None)` if `v` was never reached; that is not an error.
    pub fn path_to(&self, v: Node) -> Result<Option<Vec<Node>>> {
        self.try_vertex(v)?;
        if !self.visited.get_bit(v) {
            return Ok(None);
        }

        let mut path = vec![v];
        let mut x = v;
        while self.dist[x as usize] != 0 {
            x = self.parent[x as usize];
            path.push(x);
        }
        path.reverse();
        Ok(Some(path))
    }

    fn try_vertex(&self, v: Node) -> Result<()> {
        let bound = self.dist.len() as NumNodes;
        if v < bound {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex { vertex: v, bound })
        }
    }
}

/// Provides the traversal analyzers directly as methods on graph data structures
pub trait Traversal: AdjacencyList {
    /// Runs an (iterative) depth-first search from `start`.
    ///
    /// # Examples
    /// ```
    /// use mugraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjMultiGraph::from_edges(3, [(0, 1), (1, 2)])?;
    /// assert_eq!(g.dfs(0)?.count(), 3);
    /// # Ok::<(), mugraphs::error::GraphError>(())
    /// ```
    fn dfs(&self, start: Node) -> Result<DepthFirstSearch> {
        DepthFirstSearch::iterative(self, start)
    }

    /// Runs a breadth-first search from a single source.
    ///
    /// # Examples
    /// ```
    /// use mugraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjMultiGraph::from_edges(3, [(0, 1), (1, 2)])?;
    /// assert_eq!(g.bfs(0)?.distance_to(2)?, Some(2));
    /// # Ok::<(), mugraphs::error::GraphError>(())
    /// ```
    fn bfs(&self, source: Node) -> Result<BreadthFirstSearch> {
        BreadthFirstSearch::new(self, source)
    }

    /// Runs a breadth-first search from all given sources at once.
    ///
    /// # Examples
    /// ```
    /// use mugraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjMultiGraph::from_edges(5, [(0, 1), (1, 2), (3, 2)])?;
    /// let bfs = g.bfs_from_sources(&[0, 3])?;
    /// assert_eq!(bfs.distance_to(2)?, Some(1));
    /// # Ok::<(), mugraphs::error::GraphError>(())
    /// ```
    fn bfs_from_sources(&self, sources: &[Node]) -> Result<BreadthFirstSearch> {
        BreadthFirstSearch::multi_source(self, sources)
    }
}

impl<G: AdjacencyList> Traversal for G {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn recursive_and_iterative_dfs_agree() {
        let rng = &mut Pcg64Mcg::seed_from_u64(13);

        for n in [5 as NumNodes, 10, 30] {
            for _ in 0..20 {
                let graph =
                    AdjMultiGraph::from_edges(n, random_edges(rng, n, n * 3).into_iter()).unwrap();

                for start in graph.vertices() {
                    let rec = DepthFirstSearch::recursive(&graph, start).unwrap();
                    let it = DepthFirstSearch::iterative(&graph, start).unwrap();

                    assert_eq!(rec.count(), it.count());
                    for v in graph.vertices() {
                        assert_eq!(rec.did_visit(v).unwrap(), it.did_visit(v).unwrap());
                        assert_eq!(rec.predecessor(v).unwrap(), it.predecessor(v).unwrap());
                    }
                }
            }
        }
    }

    #[test]
    fn dfs_visits_exactly_the_component() {
        let graph = tiny_g();
        let dfs = graph.dfs(0).unwrap();

        assert_eq!(dfs.count(), 7);
        for v in 0..7 {
            assert!(dfs.did_visit(v).unwrap());
        }
        for v in 7..13 {
            assert!(!dfs.did_visit(v).unwrap());
            assert_eq!(dfs.path_to(v).unwrap(), None);
        }
    }

    #[test]
    fn dfs_path_walks_tree_edges() {
        let graph = tiny_cg();
        let dfs = graph.dfs(0).unwrap();

        for v in graph.vertices() {
            let path = dfs.path_to(v).unwrap().unwrap();
            assert_eq!(path[0], 0);
            assert_eq!(*path.last().unwrap(), v);
            for (&x, &y) in path.iter().tuple_windows() {
                assert!(graph.adjacency(x).unwrap().contains(&y));
            }
        }
    }

    #[test]
    fn bfs_distances_on_path_graph() {
        let graph = path_graph(11);
        let bfs = graph.bfs(0).unwrap();

        for v in graph.vertices() {
            assert_eq!(bfs.distance_to(v).unwrap(), Some(v));
        }
        assert_eq!(bfs.path_to(10).unwrap(), Some((0..11).collect_vec()));
    }

    #[test]
    fn bfs_distance_is_shortest() {
        // 1, 2 and 5 are adjacent to 0; 3 and 4 sit one layer further out
        let graph = tiny_cg();
        let bfs = graph.bfs(0).unwrap();

        assert_eq!(bfs.distance_to(0).unwrap(), Some(0));
        assert_eq!(bfs.distance_to(1).unwrap(), Some(1));
        assert_eq!(bfs.distance_to(2).unwrap(), Some(1));
        assert_eq!(bfs.distance_to(5).unwrap(), Some(1));
        assert_eq!(bfs.distance_to(3).unwrap(), Some(2));
        assert_eq!(bfs.distance_to(4).unwrap(), Some(2));
    }

    #[test]
    fn adjacent_bfs_distances_differ_by_at_most_one() {
        let rng = &mut Pcg64Mcg::seed_from_u64(17);

        for _ in 0..20 {
            let graph =
                AdjMultiGraph::from_edges(25, random_edges(rng, 25, 60).into_iter()).unwrap();
            let bfs = graph.bfs(0).unwrap();

            for Edge(u, v) in graph.edges(true) {
                match (bfs.distance_to(u).unwrap(), bfs.distance_to(v).unwrap()) {
                    (Some(du), Some(dv)) => assert!(du.abs_diff(dv) <= 1),
                    // an edge never crosses the reachability boundary
                    (du, dv) => assert_eq!(du, dv),
                }
            }
        }
    }

    #[test]
    fn multi_source_distance_is_minimum_over_sources() {
        let rng = &mut Pcg64Mcg::seed_from_u64(19);

        for _ in 0..10 {
            let graph =
                AdjMultiGraph::from_edges(20, random_edges(rng, 20, 30).into_iter()).unwrap();
            let sources = [0 as Node, 7, 13];

            let multi = graph.bfs_from_sources(&sources).unwrap();
            let singles = sources.map(|s| graph.bfs(s).unwrap());

            for v in graph.vertices() {
                let expected = singles
                    .iter()
                    .filter_map(|bfs| bfs.distance_to(v).unwrap())
                    .min();
                assert_eq!(multi.distance_to(v).unwrap(), expected);
            }
        }
    }

    #[test]
    fn multi_source_path_ends_at_a_source() {
        let graph = path_graph(9);
        let bfs = graph.bfs_from_sources(&[2, 8]).unwrap();

        assert_eq!(bfs.distance_to(5).unwrap(), Some(3));
        let path = bfs.path_to(5).unwrap().unwrap();
        assert_eq!(*path.last().unwrap(), 5);
        assert!(path[0] == 2 || path[0] == 8);
        assert_eq!(path.len(), 4);
    }

    #[test]
    fn invalid_sources_are_rejected_eagerly() {
        let graph = AdjMultiGraph::new(3);

        assert!(matches!(
            graph.bfs_from_sources(&[]).unwrap_err(),
            GraphError::InvalidArgument { .. }
        ));
        assert!(matches!(
            graph.bfs_from_sources(&[0, 3]).unwrap_err(),
            GraphError::InvalidVertex {
                vertex: 3,
                bound: 3
            }
        ));
        assert!(graph.bfs(5).is_err());
        assert!(graph.dfs(5).is_err());
        assert!(DepthFirstSearch::recursive(&graph, 5).is_err());
    }

    #[test]
    fn queries_validate_their_vertex() {
        let graph = AdjMultiGraph::new(2);
        let dfs = graph.dfs(0).unwrap();
        let bfs = graph.bfs(0).unwrap();

        assert!(dfs.did_visit(2).is_err());
        assert!(dfs.path_to(2).is_err());
        assert!(bfs.distance_to(2).is_err());
        assert!(bfs.path_to(2).is_err());
    }

    #[test]
    fn self_loops_and_parallel_edges_do_not_disturb_traversal() {
        let graph = AdjMultiGraph::from_edges(3, [(0, 0), (0, 1), (0, 1), (1, 2)]).unwrap();

        let bfs = graph.bfs(0).unwrap();
        assert_eq!(bfs.distance_to(1).unwrap(), Some(1));
        assert_eq!(bfs.distance_to(2).unwrap(), Some(2));

        let dfs = graph.dfs(0).unwrap();
        assert_eq!(dfs.count(), 3);
    }

    #[test]
    fn sequencer_orders() {
        let mut queue: VecDeque<Node> = NodeSequencer::init(0);
        queue.push(1);
        queue.push(2);
        assert_eq!(queue.peek(), Some(0));
        assert_eq!(queue.pop(), Some(0));
        assert_eq!(queue.cardinality(), 2);

        let mut stack: Vec<Node> = NodeSequencer::init(0);
        NodeSequencer::push(&mut stack, 1);
        NodeSequencer::push(&mut stack, 2);
        assert_eq!(NodeSequencer::peek(&stack), Some(2));
        assert_eq!(NodeSequencer::pop(&mut stack), Some(2));
        assert!(!NodeSequencer::<Node>::is_exhausted(&stack));
    }
}
