//! Check command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::CheckConfig;
use crate::error::CheckDependencyError;

impl FromCommand for CheckConfig {
    fn from_command(command: Commands) -> Result<Self, CheckDependencyError> {
        match command {
            Commands::Check {
                input,
                format,
                error_on_cycles,
            } => CheckConfig::builder()
                .with_path(input.file)
                .with_format(format.format)
                .with_error_on_cycles(error_on_cycles)
                .build(),
            _ => Err(CheckDependencyError::ConfigurationError {
                message: "Invalid command type for CheckConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(CheckConfig);

/// Execute the check command for detecting cyclic dependencies
pub fn execute_check_command(command: Commands) -> Result<()> {
    let config = CheckConfig::from_command(command)
        .wrap_err("Failed to parse check command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::check::CheckExecutor;
    CheckExecutor::execute(config)
}
