//! # Graph Construction Module
//!
//! This module turns a plain-text dependency listing into a directed graph.
//!
//! ## Input Format
//!
//! One declaration per line:
//!
//! ```text
//! main.c: parser.c, lexer.c
//! parser.c: lexer.c
//! lexer.c:
//! ```
//!
//! The name before the first `:` declares a file; the comma separated names
//! after it are the files it depends on. Blank lines are ignored.
//!
//! ## Components
//!
//! - **DependencyGraphBuilder**: Parses a listing and builds the graph
//! - **DependencyGraph**: The built graph with name lookup
//! - **FileNode** / **DependencyEdge**: Node and edge weights
//!
//! ## Example
//!
//! ```
//! use check_dependency::graph::DependencyGraphBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let graph = DependencyGraphBuilder::new().build_from_str("app: core, core\ncore:\n")?;
//!
//! assert_eq!(graph.node_count(), 2);
//! assert_eq!(graph.dependencies_of("app"), Some(vec!["core"]));
//! # Ok(())
//! # }
//! ```

mod builder;
mod parser;
mod types;

pub use builder::DependencyGraphBuilder;
pub use parser::{Declaration, parse_line};
pub use types::{DependencyEdge, DependencyGraph, FileNode};
