//! Core graph types
//!
//! This module contains the fundamental data structures used in the dependency
//! graph.

use std::collections::{HashMap, HashSet};

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::error::CheckDependencyError;

/// A file named in the dependency listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNode {
    pub name: String,
}

impl FileNode {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A declared dependency of one file on another
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependencyEdge {
    /// 1-based line on which the dependency was first declared
    pub line_number: usize,
}

/// Directed graph of files and the files they depend on
///
/// Nodes are addressed by [`NodeIndex`], handed out in first-mention order.
/// An edge `a -> b` means `a` depends on `b`. At most one edge exists
/// between any ordered pair of files.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    graph: DiGraph<FileNode, DependencyEdge>,
    indices: HashMap<String, NodeIndex>,
    edges: HashSet<(NodeIndex, NodeIndex)>,
}

/// Largest node or edge count the default `u32` petgraph index can address
pub const MAX_GRAPH_ELEMENTS: usize = u32::MAX as usize - 1;

/// Fail with `ResourceError` once `count` elements of `kind` fill the index space
pub(crate) fn check_index_capacity(count: usize, kind: &str) -> Result<(), CheckDependencyError> {
    if count >= MAX_GRAPH_ELEMENTS {
        return Err(CheckDependencyError::ResourceError {
            message: format!("graph cannot hold more than {MAX_GRAPH_ELEMENTS} {kind}"),
        });
    }
    Ok(())
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct files, including ones only ever referenced
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of distinct dependency edges
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn contains(&self, name: &str) -> bool {
        self.indices.contains_key(name)
    }

    pub fn index_of(&self, name: &str) -> Option<NodeIndex> {
        self.indices.get(name).copied()
    }

    pub fn node(&self, index: NodeIndex) -> Option<&FileNode> {
        self.graph.node_weight(index)
    }

    /// File names in first-mention order
    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.graph.node_weights().map(FileNode::name)
    }

    /// Dependencies of `index` in the order they were first declared
    pub fn dependency_indices(&self, index: NodeIndex) -> Vec<NodeIndex> {
        let mut edges: Vec<_> = self
            .graph
            .edges(index)
            .map(|edge| (edge.id(), edge.target()))
            .collect();
        edges.sort_by_key(|(id, _)| *id);
        edges.into_iter().map(|(_, target)| target).collect()
    }

    /// Names of the files `name` depends on, or `None` for an unknown file
    pub fn dependencies_of(&self, name: &str) -> Option<Vec<&str>> {
        let index = self.index_of(name)?;
        Some(
            self.dependency_indices(index)
                .into_iter()
                .map(|dep| self.graph[dep].name())
                .collect(),
        )
    }

    /// The underlying petgraph view
    pub fn graph(&self) -> &DiGraph<FileNode, DependencyEdge> {
        &self.graph
    }

    /// Look up `name`, creating a node with no dependencies if it is new
    ///
    /// Fails with `ResourceError` when the name index cannot grow or the
    /// graph already holds [`MAX_GRAPH_ELEMENTS`] files.
    pub(crate) fn ensure_node(&mut self, name: &str) -> Result<NodeIndex, CheckDependencyError> {
        if let Some(&index) = self.indices.get(name) {
            return Ok(index);
        }

        check_index_capacity(self.graph.node_count(), "files")?;
        self.indices
            .try_reserve(1)
            .map_err(|e| CheckDependencyError::ResourceError {
                message: e.to_string(),
            })?;

        let index = self.graph.add_node(FileNode::new(name));
        self.indices.insert(name.to_string(), index);
        Ok(index)
    }

    /// Record `from -> to` unless that edge already exists
    ///
    /// Returns `Ok(true)` if a new edge was added.
    pub(crate) fn add_dependency(
        &mut self,
        from: NodeIndex,
        to: NodeIndex,
        line_number: usize,
    ) -> Result<bool, CheckDependencyError> {
        if self.edges.contains(&(from, to)) {
            return Ok(false);
        }

        check_index_capacity(self.graph.edge_count(), "dependencies")?;
        self.edges
            .try_reserve(1)
            .map_err(|e| CheckDependencyError::ResourceError {
                message: e.to_string(),
            })?;

        self.edges.insert((from, to));
        self.graph.add_edge(from, to, DependencyEdge { line_number });
        Ok(true)
    }
}
