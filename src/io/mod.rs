/*!
# IO

Reading and writing graphs as serialized edge lists.

The edge-list format is a whitespace-separated token stream: the vertex
count, the edge count, then one pair of zero-based vertex indices per edge.
Line breaks carry no meaning beyond whitespace; lines starting with a
configurable comment identifier are skipped entirely.

[`GraphReader`] and [`GraphWriter`] are implemented by readers and writers
for a specific format; [`EdgeListRead`] and [`EdgeListWrite`] are shorthands
with default settings.
*/

pub mod edge_list;

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::prelude::*;

pub use edge_list::*;

/// Trait for types that can read graphs in a specific format.
///
/// This trait provides both a low-level method to read from any
/// [`BufRead`] instance and a convenience wrapper to read directly
/// from files.
pub trait GraphReader<G> {
    /// Reads a graph from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the input is not a valid representation
    /// of a graph in the expected format.
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead;

    /// Reads a graph from a file according to the settings in `self`.
    ///
    /// Internally wraps the file in a buffered reader.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if its contents
    /// are not a valid representation of a graph in the expected format.
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Trait for types that can write graphs in a specific format.
///
/// This trait provides both a low-level method to write to any
/// [`Write`] instance and a convenience wrapper to write directly
/// to files.
pub trait GraphWriter<G> {
    /// Writes the given graph to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if writing fails (e.g., IO errors).
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the given graph to a file according to the settings in `self`.
    ///
    /// Internally wraps the file in a buffered writer.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_graph(graph, BufWriter::new(File::create(path)?))
    }
}

/// Tries to parse the next token in an iterator and returns early if it fails
macro_rules! parse_next_token {
    ($iterator : expr, $name : expr) => {{
        let next = $iterator.next().ok_or_else(|| {
            GraphError::format(format!("premature end of input when parsing {}", $name))
        })?;

        next.parse().map_err(|_| {
            GraphError::format(format!("cannot parse {} from {:?}", $name, next))
        })?
    }};
}

use parse_next_token;
