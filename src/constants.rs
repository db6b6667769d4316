//! Configuration constants for check-dependency
//!
//! This module contains the fixed messages and environment variable names
//! used throughout the application.

/// Result messages printed on stdout
pub mod output {
    /// Default output format when not specified
    pub const DEFAULT_FORMAT: &str = "human";

    /// Printed when the listing contains a cycle
    pub const CYCLE_FOUND: &str = "Cyclic dependency";

    /// Printed when the listing is acyclic
    pub const NO_CYCLE: &str = "No Cyclic dependency";
}

/// Logging configuration
pub mod logging {
    /// Environment variable holding an `EnvFilter` directive
    pub const LOG_ENV_VAR: &str = "CHECK_DEPENDENCY_LOG";

    /// Directive used when the variable is unset
    pub const DEFAULT_DIRECTIVE: &str = "warn";

    /// Directive used with `--verbose`
    pub const VERBOSE_DIRECTIVE: &str = "check_dependency=debug";
}
