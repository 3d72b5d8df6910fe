//! # Dot
//!
//! Writes a social network in the DOT language of [GraphViz](https://graphviz.org/):
//! ```text
//! graph RedeAmizades {
//!   v0 [label="Alice"];
//!   v1 [label="Bob"];
//!   v0 -- v1;
//! }
//! ```
//! Nodes are written in position order, friendships once each as `(u, v)` with `u < v` in
//! ascending order.
//!
//! Single steps can be combined to highlight people, e.g. everyone reachable from Dave:
//! ```
//! use friendgraph::{prelude::*, gens::*, io::*};
//!
//! let graph = sample_network();
//! let dot_writer = DotWriter::new().graph_name("Reachable");
//! let mut buffer = Vec::new();
//!
//! dot_writer.start_graph(&mut buffer).unwrap();
//! dot_writer.write_nodes(&mut buffer, graph.people()).unwrap();
//! dot_writer.write_edges(&mut buffer, graph.ordered_edges(true)).unwrap();
//! dot_writer
//!     .color_nodes(&mut buffer, graph.breadth_first_from("Dave").unwrap(), DotColor::Red)
//!     .unwrap();
//! dot_writer.finish_graph(&mut buffer).unwrap();
//!
//! assert!(String::from_utf8(buffer).unwrap().ends_with("  v0 [style=filled, color=red];\n}\n"));
//! ```
use std::fmt::Display;

use super::*;

/// Graph name used unless configured otherwise
pub const DEFAULT_GRAPH_NAME: &str = "RedeAmizades";

/// A writer for the Dot-Format
#[derive(Debug, Clone)]
pub struct DotWriter {
    /// Identifier after the `graph` keyword (default: `RedeAmizades`)
    graph_name: String,
    /// Prefix of a node (default: `v`)
    prefix: String,
}

impl Default for DotWriter {
    fn default() -> Self {
        Self {
            graph_name: DEFAULT_GRAPH_NAME.to_string(),
            prefix: "v".to_string(),
        }
    }
}

impl DotWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the identifier written after the `graph` keyword
    pub fn graph_name<S>(mut self, name: S) -> Self
    where
        S: Into<String>,
    {
        self.graph_name = name.into();
        self
    }

    /// Set the prefix of a node (`v` by default)
    pub fn node_prefix<S>(mut self, prefix: S) -> Self
    where
        S: Into<String>,
    {
        self.prefix = prefix.into();
        self
    }

    /// Writes the opening line of the graph
    pub fn start_graph<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write,
    {
        writeln!(writer, "graph {} {{", self.graph_name)
    }

    fn format_node(&self, u: Node) -> String {
        format!("{}{u}", self.prefix)
    }

    /// Writes one labelled node per `(position, name)` pair
    pub fn write_nodes<'a, W, I>(&self, writer: &mut W, people: I) -> Result<()>
    where
        W: Write,
        I: IntoIterator<Item = (Node, &'a str)>,
    {
        for (u, name) in people {
            writeln!(
                writer,
                "  {} [label=\"{}\"];",
                self.format_node(u),
                escape_label(name)
            )?;
        }
        Ok(())
    }

    /// Writes one undirected edge line per friendship
    pub fn write_edges<W, I>(&self, writer: &mut W, edges: I) -> Result<()>
    where
        W: Write,
        I: IntoIterator<Item = Edge>,
    {
        for Edge(u, v) in edges {
            writeln!(
                writer,
                "  {} -- {};",
                self.format_node(u),
                self.format_node(v)
            )?;
        }
        Ok(())
    }

    /// Fills the given nodes with `color`. Later colorings override earlier ones in a visualizer.
    pub fn color_nodes<W, I>(&self, writer: &mut W, nodes: I, color: DotColor) -> Result<()>
    where
        W: Write,
        I: IntoIterator<Item = Node>,
    {
        for u in nodes {
            writeln!(
                writer,
                "  {} [style=filled, color={color}];",
                self.format_node(u)
            )?;
        }
        Ok(())
    }

    /// Closes the Dot-Graph, thus finishing the graph
    pub fn finish_graph<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write,
    {
        writeln!(writer, "}}")
    }
}

/// Escapes `"` and `\` so that `name` can be placed inside a quoted DOT string
fn escape_label(name: &str) -> String {
    let mut escaped = String::with_capacity(name.len());
    for c in name.chars() {
        if matches!(c, '"' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

impl<G> GraphWriter<G> for DotWriter
where
    G: AdjacencyList + NamedVertices,
{
    fn try_write_graph<W>(&self, graph: &G, mut writer: W) -> Result<()>
    where
        W: Write,
    {
        self.start_graph(&mut writer)?;
        self.write_nodes(&mut writer, graph.people())?;
        self.write_edges(&mut writer, graph.ordered_edges(true))?;
        self.finish_graph(&mut writer)
    }
}

/// Trait for writing a graph to a writer in the Dot-Format.
/// Shorthand for default settings.
pub trait DotWrite {
    /// Tries to write the graph to a writer
    fn try_write_dot<W>(&self, writer: W) -> Result<()>
    where
        W: Write;

    /// Tries to write the graph to a file
    fn try_write_dot_file<P>(&self, path: P) -> Result<()>
    where
        P: AsRef<Path>;
}

impl<G> DotWrite for G
where
    G: AdjacencyList + NamedVertices,
{
    fn try_write_dot<W>(&self, writer: W) -> Result<()>
    where
        W: Write,
    {
        DotWriter::default().try_write_graph(self, writer)
    }

    fn try_write_dot_file<P>(&self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        DotWriter::default().try_write_graph_file(self, path)
    }
}

/// A few colors of the Svg-Dot color scheme,
/// see `https://graphviz.gitlab.io/doc/info/colors.html#svg`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DotColor {
    Black,
    Blue,
    Gold,
    Gray,
    Green,
    LightBlue,
    Orange,
    Red,
    Violet,
}

impl Display for DotColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format!("{self:?}").to_lowercase())
    }
}
