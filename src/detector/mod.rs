//! # Cycle Detection Module
//!
//! This module decides whether a dependency graph contains a circular
//! dependency.
//!
//! ## Algorithm
//!
//! A depth-first search is started from every file that has not been fully
//! explored, since the graph need not be connected. Each file moves through
//! three states: unvisited, on the current search path, and done. Meeting a
//! dependency that is still on the path is a back edge and therefore a cycle;
//! the whole search stops there. Done files are skipped from every later
//! root, which keeps the total work at O(V + E) where V is the number of
//! files and E the number of dependencies.
//!
//! Only the existence of a cycle is reported, not its members.
//!
//! ## Example
//!
//! ```
//! use check_dependency::detector::CycleDetector;
//! use check_dependency::graph::DependencyGraphBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let graph = DependencyGraphBuilder::new().build_from_str("a: b\nb: c\nc: a\n")?;
//!
//! let mut detector = CycleDetector::new();
//! assert!(detector.has_cycle(&graph));
//! assert!(detector.stats().nodes_explored <= graph.node_count());
//! # Ok(())
//! # }
//! ```

mod detector_impl;

pub use detector_impl::*;
