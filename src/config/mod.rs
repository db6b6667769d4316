//! # Configuration Module
//!
//! This module provides configuration structures for all check-dependency
//! commands. Each command has its own config module with a builder for easy
//! construction.
//!
//! ## Command Configurations
//!
//! - **CheckConfig**: Configuration for the `check` command
//! - **LineupConfig**: Configuration for the `lineup` command
//!
//! ## Example
//!
//! ```
//! use check_dependency::cli::OutputFormat;
//! use check_dependency::common::ConfigBuilder;
//! use check_dependency::config::CheckConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CheckConfig::builder()
//!     .with_path("deps.txt".into())
//!     .with_format(OutputFormat::Human)
//!     .with_error_on_cycles(true)
//!     .build()?;
//!
//! assert!(config.error_on_cycles);
//! # Ok(())
//! # }
//! ```

pub mod check;
pub mod lineup;

pub use check::CheckConfig;
pub use lineup::LineupConfig;
