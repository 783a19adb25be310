/*!
# Symbol graphs

A thin label layer over [`AdjMultiGraph`] for graphs whose vertices are named
by strings instead of dense indices. The input is delimited text: every line
names one vertex followed by its neighbors, and the first token of a line is
connected to each of the remaining tokens. Labels are assigned indices in
first-seen order, scanning lines left to right.

# Example

Degrees of separation over a route map:

```
use mugraphs::{prelude::*, algo::*, io::*, symbol::*};

let routes = "JFK ORD ATL\nORD DEN\nDEN LAS\nLAS PHX\n";
let sg = SymbolGraphReader::new().try_read_graph(routes.as_bytes())?;

let bfs = sg.graph().bfs(sg.index_of("JFK")?)?;
assert_eq!(bfs.distance_to(sg.index_of("PHX")?)?, Some(4));
# Ok::<(), mugraphs::error::GraphError>(())
```
*/

use std::{fmt::Display, io::BufRead};

use fxhash::FxHashMap;

use crate::{io::GraphReader, prelude::*};

/// An undirected multigraph whose vertices carry string labels.
///
/// The label/index mapping is fixed at construction; `index_of` and
/// `label_of` translate between the two worlds, `graph` exposes the
/// underlying index-based graph to the analyzers.
pub struct SymbolGraph {
    labels: Vec<String>,
    index: FxHashMap<String, Node>,
    graph: AdjMultiGraph,
}

impl SymbolGraph {
    /// Returns *true* if some vertex carries the label
    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// Returns the vertex carrying the label.
    ///
    /// # Errors
    /// [`GraphError::NotFound`] if no vertex carries it.
    pub fn index_of(&self, label: &str) -> Result<Node> {
        self.index
            .get(label)
            .copied()
            .ok_or_else(|| GraphError::NotFound {
                label: label.to_owned(),
            })
    }

    /// Returns the label of vertex `v`.
    ///
    /// # Errors
    /// [`GraphError::InvalidVertex`] if `v >= n`.
    pub fn label_of(&self, v: Node) -> Result<&str> {
        self.graph.try_vertex(v)?;
        Ok(&self.labels[v as usize])
    }

    /// Returns the underlying index-based graph
    pub fn graph(&self) -> &AdjMultiGraph {
        &self.graph
    }
}

impl Display for SymbolGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{} vertices, {} edges",
            self.graph.number_of_nodes(),
            self.graph.number_of_edges()
        )?;
        for v in self.graph.vertices() {
            write!(f, "{}:", self.labels[v as usize])?;
            for w in self.graph.neighbors_of(v) {
                write!(f, " {}", self.labels[w as usize])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A GraphReader for delimited label text
#[derive(Debug, Clone)]
pub struct SymbolGraphReader {
    /// Separator between the tokens of a line
    delimiter: String,
}

impl Default for SymbolGraphReader {
    fn default() -> Self {
        Self {
            delimiter: " ".to_string(),
        }
    }
}

impl SymbolGraphReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the delimiter
    pub fn delimiter<S: Into<String>>(mut self, d: S) -> SymbolGraphReader {
        self.delimiter = d.into();
        self
    }
}

impl GraphReader<SymbolGraph> for SymbolGraphReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<SymbolGraph> {
        let lines = reader
            .lines()
            .collect::<std::io::Result<Vec<String>>>()?;

        // pass 1: register every unseen label with the next index
        let mut index: FxHashMap<String, Node> = FxHashMap::default();
        let mut labels = Vec::new();
        for line in &lines {
            for token in line.split(&self.delimiter).filter(|t| !t.is_empty()) {
                if !index.contains_key(token) {
                    index.insert(token.to_owned(), labels.len() as Node);
                    labels.push(token.to_owned());
                }
            }
        }

        // pass 2: the first token of a line owns an edge to every other token
        let mut graph = AdjMultiGraph::new(labels.len() as NumNodes);
        for line in &lines {
            let mut tokens = line.split(&self.delimiter).filter(|t| !t.is_empty());
            if let Some(owner) = tokens.next() {
                let v = index[owner];
                for w in tokens {
                    graph.add_edge(v, index[w])?;
                }
            }
        }

        Ok(SymbolGraph {
            labels,
            index,
            graph,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::*;

    const ROUTES: &str = "JFK MCO\nORD DEN\nORD HOU\nDFW PHX\nJFK ATL\n\
                          ORD DFW\nORD JFK\nATL HOU\nDEN PHX\nPHX LAX\n";

    fn routes() -> SymbolGraph {
        SymbolGraphReader::new()
            .try_read_graph(ROUTES.as_bytes())
            .unwrap()
    }

    #[test]
    fn labels_are_indexed_in_first_seen_order() {
        let sg = routes();

        for (v, label) in ["JFK", "MCO", "ORD", "DEN", "HOU", "DFW", "PHX", "ATL", "LAX"]
            .into_iter()
            .enumerate()
        {
            assert!(sg.contains(label));
            assert_eq!(sg.index_of(label).unwrap(), v as Node);
            assert_eq!(sg.label_of(v as Node).unwrap(), label);
        }
    }

    #[test]
    fn edges_connect_the_line_owner_to_its_tokens() {
        let sg = routes();
        let graph = sg.graph();

        assert_eq!(graph.number_of_nodes(), 9);
        assert_eq!(graph.number_of_edges(), 10);

        let ord = sg.index_of("ORD").unwrap();
        assert_eq!(
            graph.adjacency(ord).unwrap(),
            [
                sg.index_of("DEN").unwrap(),
                sg.index_of("HOU").unwrap(),
                sg.index_of("DFW").unwrap(),
                sg.index_of("JFK").unwrap()
            ]
        );
    }

    #[test]
    fn unknown_label_and_vertex_are_errors() {
        let sg = routes();

        assert!(!sg.contains("LAS"));
        assert!(matches!(
            sg.index_of("LAS").unwrap_err(),
            GraphError::NotFound { label } if label == "LAS"
        ));
        assert!(matches!(
            sg.label_of(9).unwrap_err(),
            GraphError::InvalidVertex {
                vertex: 9,
                bound: 9
            }
        ));
    }

    #[test]
    fn repeated_pairs_become_parallel_edges() {
        let sg = SymbolGraphReader::new()
            .try_read_graph("a b\na b\n".as_bytes())
            .unwrap();

        assert_eq!(sg.graph().number_of_edges(), 2);
        assert_eq!(sg.graph().degree(0).unwrap(), 2);
    }

    #[test]
    fn custom_delimiter_splits_tokens() {
        let sg = SymbolGraphReader::new()
            .delimiter("/")
            .try_read_graph("a movie/an actor/another actor\n".as_bytes())
            .unwrap();

        assert_eq!(sg.graph().number_of_nodes(), 3);
        assert_eq!(sg.index_of("an actor").unwrap(), 1);
        assert_eq!(sg.graph().degree(0).unwrap(), 2);
    }

    #[test]
    fn display_renders_labels() {
        let sg = SymbolGraphReader::new()
            .try_read_graph("a b c\n".as_bytes())
            .unwrap();

        let text = sg.to_string();
        assert!(text.starts_with("3 vertices, 2 edges\n"));
        assert!(text.contains("a: b c\n"));
    }

    #[test]
    fn symbol_graph_feeds_the_analyzers() {
        let sg = routes();
        let graph = sg.graph();

        assert!(graph.is_connected());
        let bfs = graph.bfs(sg.index_of("JFK").unwrap()).unwrap();
        assert_eq!(
            bfs.distance_to(sg.index_of("DEN").unwrap()).unwrap(),
            Some(2)
        );
    }
}
