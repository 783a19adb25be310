/*!
Shared fixtures and helpers for the test modules.

The two named fixtures are small graphs whose components, cycles, and
distances are easy to verify by hand; tests assert against their known
structure. Random instances come from [`random_edges`], which deliberately
keeps duplicates and self-loops since those are legal multigraph inputs.
*/

use itertools::Itertools;
use rand::Rng;

use crate::prelude::*;

/// 13 vertices in three components: {0..=6}, {7, 8}, {9..=12}
pub fn tiny_g() -> AdjMultiGraph {
    AdjMultiGraph::from_edges(
        13,
        [
            (0, 5),
            (4, 3),
            (0, 1),
            (9, 12),
            (6, 4),
            (5, 4),
            (0, 2),
            (11, 12),
            (9, 10),
            (0, 6),
            (7, 8),
            (9, 11),
            (5, 3),
        ],
    )
    .unwrap()
}

/// 6 vertices, connected, several short cycles
pub fn tiny_cg() -> AdjMultiGraph {
    AdjMultiGraph::from_edges(
        6,
        [
            (0, 5),
            (2, 4),
            (2, 3),
            (1, 2),
            (0, 1),
            (3, 4),
            (3, 5),
            (0, 2),
        ],
    )
    .unwrap()
}

/// The path 0 - 1 - ... - (n - 1)
pub fn path_graph(n: NumNodes) -> AdjMultiGraph {
    AdjMultiGraph::from_edges(n, (1..n).map(|v| (v - 1, v))).unwrap()
}

/// Creates a list of `m` uniform random edges for nodes `0..n`,
/// keeping duplicates and self-loops
pub fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m: NumEdges) -> Vec<Edge> {
    (0..m)
        .map(|_| Edge(rng.random_range(0..n), rng.random_range(0..n)))
        .collect_vec()
}
