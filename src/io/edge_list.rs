//! # EdgeList
//!
//! A graph is serialized as the vertex count, the edge count, and then one
//! pair `u v` of zero-based vertex indices per edge. Tokens are separated by
//! arbitrary whitespace including line breaks, so `4 2 0 1 2 3` on one line
//! and the same six tokens on six lines describe the same graph.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use super::*;
use crate::prelude::*;

/// A GraphReader for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for EdgeListReader {
    fn default() -> Self {
        Self {
            comment_identifier: "#".to_string(),
        }
    }
}

impl EdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> EdgeListReader {
        self.comment_identifier = c.into();
        self
    }
}

impl<G: GraphFromScratch> GraphReader<G> for EdgeListReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<G> {
        let mut tokens = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim_start().starts_with(&self.comment_identifier) {
                continue;
            }
            tokens.extend(line.split_whitespace().map(str::to_owned));
        }

        let mut tokens = tokens.iter();
        let n: NumNodes = parse_next_token!(tokens, "vertex count");
        let m: NumEdges = parse_next_token!(tokens, "edge count");

        let mut edges = Vec::with_capacity(m as usize);
        for _ in 0..m {
            let u: Node = parse_next_token!(tokens, "source vertex");
            let v: Node = parse_next_token!(tokens, "target vertex");
            edges.push(Edge(u, v));
        }

        G::from_edges(n, edges)
    }
}

/// Trait for creating graphs from an EdgeListReader.
/// Used as shorthand for default EdgeListReader settings
pub trait EdgeListRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_edge_list(BufReader::new(File::open(path)?))
    }
}

impl<G> EdgeListRead for G
where
    G: GraphFromScratch,
{
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        EdgeListReader::default().try_read_graph(reader)
    }
}

/// A writer for the EdgeList-Format
#[derive(Debug, Clone, Default)]
pub struct EdgeListWriter;

impl EdgeListWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self
    }
}

impl<G: AdjacencyList + GraphEdgeOrder> GraphWriter<G> for EdgeListWriter {
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        writeln!(writer, "{}", graph.number_of_nodes())?;
        writeln!(writer, "{}", graph.number_of_edges())?;

        // a proper edge appears in both endpoint bags, a self-loop twice in
        // its own bag; emitting `u < w` and every second loop entry produces
        // exactly `number_of_edges` lines
        for u in graph.vertices() {
            let mut loop_entries = 0usize;
            for w in graph.neighbors_of(u) {
                if u < w {
                    writeln!(writer, "{u} {w}")?;
                } else if u == w {
                    loop_entries += 1;
                    if loop_entries % 2 == 0 {
                        writeln!(writer, "{u} {u}")?;
                    }
                }
            }
        }

        Ok(())
    }
}

/// Trait for writing a graph to a writer in the EdgeList-Format.
/// Shorthand for default settings.
pub trait EdgeListWrite {
    /// Tries to write the graph to a writer
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a file
    fn try_write_edge_list_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_edge_list(writer)
    }
}

impl<G: AdjacencyList + GraphEdgeOrder> EdgeListWrite for G {
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()> {
        EdgeListWriter::default().try_write_graph(self, writer)
    }
}
