use petgraph::graph::{DiGraph, Neighbors, NodeIndex};
use tracing::{debug, trace};

use crate::graph::{DependencyEdge, DependencyGraph, FileNode};

/// Per-node progress of a detection run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitState {
    Unvisited,
    /// On the path from the current root to the node being explored
    OnPath,
    /// Fully explored; no cycle is reachable through this node
    Done,
}

/// Work done by the most recent detection run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetectionStats {
    /// Nodes a depth-first search was started from
    pub roots_started: usize,
    /// Nodes that were moved onto the search path
    pub nodes_explored: usize,
    /// Dependency edges that were looked at
    pub edges_examined: usize,
}

/// Detector for dependency cycles
///
/// Runs a depth-first search from every node that has not been fully
/// explored yet, tracking which nodes are on the current path. Reaching a
/// node that is still on the path means a cycle. Nodes that finish without
/// finding one are never explored again, so a whole run costs O(V + E).
///
/// The search keeps its own stack, so long dependency chains do not grow the
/// call stack.
#[derive(Debug, Default)]
pub struct CycleDetector {
    stats: DetectionStats,
    last_result: Option<bool>,
}

struct Frame<'a> {
    node: NodeIndex,
    dependencies: Neighbors<'a, DependencyEdge>,
}

impl CycleDetector {
    /// Create a new cycle detector
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether `graph` contains a directed cycle, self-loops included
    ///
    /// Stops at the first cycle found. The graph is only read.
    pub fn has_cycle(&mut self, graph: &DependencyGraph) -> bool {
        let graph = graph.graph();
        let mut states = vec![VisitState::Unvisited; graph.node_count()];
        let mut stats = DetectionStats::default();
        let mut found = false;

        for root in graph.node_indices() {
            if states[root.index()] == VisitState::Done {
                continue;
            }
            stats.roots_started += 1;
            if search_from(graph, root, &mut states, &mut stats) {
                found = true;
                break;
            }
        }

        debug!(
            cyclic = found,
            roots = stats.roots_started,
            nodes = stats.nodes_explored,
            edges = stats.edges_examined,
            "cycle detection finished"
        );

        self.stats = stats;
        self.last_result = Some(found);
        found
    }

    /// Statistics of the most recent run
    pub fn stats(&self) -> &DetectionStats {
        &self.stats
    }

    /// Result of the most recent run, if any
    pub fn last_result(&self) -> Option<bool> {
        self.last_result
    }
}

fn search_from(
    graph: &DiGraph<FileNode, DependencyEdge>,
    root: NodeIndex,
    states: &mut [VisitState],
    stats: &mut DetectionStats,
) -> bool {
    states[root.index()] = VisitState::OnPath;
    stats.nodes_explored += 1;

    let mut stack = vec![Frame {
        node: root,
        dependencies: graph.neighbors(root),
    }];

    while let Some(frame) = stack.last_mut() {
        let node = frame.node;
        let Some(dependency) = frame.dependencies.next() else {
            states[node.index()] = VisitState::Done;
            stack.pop();
            continue;
        };
        stats.edges_examined += 1;

        match states[dependency.index()] {
            VisitState::Done => {}
            VisitState::OnPath => {
                trace!(
                    from = graph[node].name(),
                    to = graph[dependency].name(),
                    "back edge closes a cycle"
                );
                return true;
            }
            VisitState::Unvisited => {
                states[dependency.index()] = VisitState::OnPath;
                stats.nodes_explored += 1;
                stack.push(Frame {
                    node: dependency,
                    dependencies: graph.neighbors(dependency),
                });
            }
        }
    }

    false
}

/// Check `graph` for a cycle with a throwaway detector
pub fn has_cycle(graph: &DependencyGraph) -> bool {
    CycleDetector::new().has_cycle(graph)
}
