use clap::{Parser, Subcommand};

use crate::common::{FormatArgs, InputArgs};

#[derive(Parser)]
#[command(
    name = "check-dependency",
    about = "Detect cyclic dependencies in a plain-text dependency listing",
    long_about = "check-dependency reads a file where every line has the form \
                  `name: dep1, dep2, ...`, builds the dependency graph it describes and \
                  reports whether that graph contains a cycle.",
    subcommand_required = true,
    version
)]
pub struct Cli {
    /// Print debug logging to stderr
    #[arg(short, long, global = true, env = "CHECK_DEPENDENCY_VERBOSE")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check a dependency listing for cycles
    ///
    /// Prints `Cyclic dependency` if any file depends on itself, directly or
    /// through other files, and `No Cyclic dependency` otherwise.
    #[command(
        long_about = "Build the dependency graph described by FILE and run a depth-first \
                      search over it. Self-dependencies count as cycles. Files mentioned only \
                      as dependencies are treated as having none of their own."
    )]
    Check {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        format: FormatArgs,

        /// Exit with error code if a cycle is found
        #[arg(long, env = "CHECK_DEPENDENCY_ERROR_ON_CYCLES")]
        error_on_cycles: bool,
    },

    /// Print the parsed dependency listing
    ///
    /// Shows every file in first-mention order with its deduplicated
    /// dependencies, exactly as the cycle check sees them.
    Lineup {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        format: FormatArgs,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_check_command() {
        let cli = Cli::try_parse_from([
            "check-dependency",
            "check",
            "deps.txt",
            "--format",
            "json",
            "--error-on-cycles",
        ])
        .unwrap();

        match cli.command {
            Commands::Check {
                input,
                format,
                error_on_cycles,
            } => {
                assert_eq!(input.file, PathBuf::from("deps.txt"));
                assert_eq!(format.format, OutputFormat::Json);
                assert!(error_on_cycles);
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_check_requires_exactly_one_file() {
        assert!(Cli::try_parse_from(["check-dependency", "check"]).is_err());
        assert!(Cli::try_parse_from(["check-dependency", "check", "a.txt", "b.txt"]).is_err());
    }

    #[test]
    fn test_verbose_is_global() {
        let cli =
            Cli::try_parse_from(["check-dependency", "lineup", "deps.txt", "--verbose"]).unwrap();
        assert!(cli.verbose);
    }
}
