use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, trace};

use super::parser::parse_line;
use super::types::DependencyGraph;
use crate::error::CheckDependencyError;

/// Builder for constructing dependency graphs from text listings
///
/// Every line declares one file and the files it depends on. Files may be
/// referenced before their own declaration line; they are created on first
/// mention with no dependencies and filled in when declared. Repeated
/// declarations of the same file are merged, and each dependency is stored
/// once no matter how often it is repeated.
///
/// The build methods consume the builder, so a graph is only ever handed out
/// once every line has been accepted.
#[derive(Debug, Default)]
pub struct DependencyGraphBuilder {
    graph: DependencyGraph,
    declarations: usize,
}

impl DependencyGraphBuilder {
    /// Create a new dependency graph builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from an in-memory listing
    pub fn build_from_str(mut self, input: &str) -> Result<DependencyGraph, CheckDependencyError> {
        for (index, line) in input.lines().enumerate() {
            self.add_line(index + 1, line)?;
        }
        Ok(self.finish())
    }

    /// Build a graph from any buffered text source
    pub fn build_from_reader<R: BufRead>(
        mut self,
        reader: R,
    ) -> Result<DependencyGraph, CheckDependencyError> {
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            self.add_line(index + 1, &line)?;
        }
        Ok(self.finish())
    }

    /// Open `path` and build a graph from its contents
    pub fn build_from_path(self, path: &Path) -> Result<DependencyGraph, CheckDependencyError> {
        debug!(path = %path.display(), "reading dependency listing");

        let file = File::open(path).map_err(|source| CheckDependencyError::FileReadError {
            path: path.to_path_buf(),
            source,
        })?;

        self.build_from_reader(BufReader::new(file))
    }

    fn add_line(&mut self, line_number: usize, line: &str) -> Result<(), CheckDependencyError> {
        let Some(declaration) = parse_line(line_number, line)? else {
            return Ok(());
        };
        self.declarations += 1;

        let merging = self.graph.contains(declaration.name);
        let from = self.graph.ensure_node(declaration.name)?;
        if merging {
            debug!(
                file = declaration.name,
                line_number, "merging dependencies into existing file"
            );
        }

        for dependency in declaration.dependencies {
            let to = self.graph.ensure_node(dependency)?;
            if self.graph.add_dependency(from, to, line_number)? {
                trace!(from = declaration.name, to = dependency, "dependency recorded");
            } else {
                debug!(
                    from = declaration.name,
                    to = dependency,
                    line_number,
                    "skipping duplicate dependency"
                );
            }
        }

        Ok(())
    }

    fn finish(self) -> DependencyGraph {
        debug!(
            declarations = self.declarations,
            files = self.graph.node_count(),
            dependencies = self.graph.edge_count(),
            "dependency graph built"
        );
        self.graph
    }
}
