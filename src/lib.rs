//! # Check Dependency - Detect Cyclic Dependencies in Plain-Text Listings
//!
//! Check Dependency reads a listing where every line names a file followed by
//! the files it depends on, builds the directed graph those lines describe,
//! and reports whether the graph contains a cycle.
//!
//! ## Main Components
//!
//! - **Graph**: Parses `name: dep1, dep2, ...` lines into a dependency graph,
//!   creating forward-referenced files on first mention and storing every
//!   dependency once
//! - **Detector**: Depth-first cycle detection with on-path / done tracking
//! - **Reports**: Human-readable and JSON verdicts
//!
//! ## Usage
//!
//! ```
//! use check_dependency::detector::CycleDetector;
//! use check_dependency::graph::DependencyGraphBuilder;
//!
//! # fn main() -> miette::Result<()> {
//! let listing = "\
//! main.c: parser.c, lexer.c
//! parser.c: lexer.c
//! lexer.c:
//! ";
//!
//! let graph = DependencyGraphBuilder::new().build_from_str(listing)?;
//! let mut detector = CycleDetector::new();
//!
//! if detector.has_cycle(&graph) {
//!     println!("Cyclic dependency");
//! } else {
//!     println!("No Cyclic dependency");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Reporting Malformed Input
//!
//! ```
//! use check_dependency::error::CheckDependencyError;
//! use check_dependency::graph::DependencyGraphBuilder;
//!
//! let err = DependencyGraphBuilder::new()
//!     .build_from_str("a: b\njustaname\n")
//!     .unwrap_err();
//!
//! match err {
//!     CheckDependencyError::ParseError(parse) => assert_eq!(parse.line_number, 2),
//!     other => panic!("unexpected error: {other}"),
//! }
//! ```

// Private modules
mod constants;
mod logging;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod detector;
pub mod error;
pub mod executors;
pub mod graph;
pub mod reports;

pub use common::ConfigBuilder;
pub use utils::NameList;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    logging::init(cli.verbose);

    execute_command(cli.command)
}
