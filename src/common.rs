//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

/// Input file argument shared by every command
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Dependency listing to read
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_FORMAT, env = "CHECK_DEPENDENCY_FORMAT")]
    pub format: crate::cli::OutputFormat,
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::CheckDependencyError>;
}

/// Trait for configurations that can be created from CLI commands
pub trait FromCommand: Sized {
    fn from_command(
        command: crate::cli::Commands,
    ) -> Result<Self, crate::error::CheckDependencyError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::CheckDependencyError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}

/// Macro generating a builder whose fields are all required
///
/// Each `setter => field: Type` entry produces a `setter(value)` method, and
/// [`ConfigBuilder::build`] reports the first field that was never set.
#[macro_export]
macro_rules! impl_builder {
    ($builder:ident => $config:ident { $($setter:ident => $field:ident : $ty:ty),* $(,)? }) => {
        #[derive(Default)]
        pub struct $builder {
            $($field: Option<$ty>,)*
        }

        impl $builder {
            pub fn new() -> Self {
                Self::default()
            }

            $(
                pub fn $setter(mut self, $field: $ty) -> Self {
                    self.$field = Some($field);
                    self
                }
            )*
        }

        impl $crate::common::ConfigBuilder for $builder {
            type Config = $config;

            fn build(self) -> Result<Self::Config, $crate::error::CheckDependencyError> {
                Ok($config {
                    $(
                        $field: self.$field.ok_or_else(|| {
                            $crate::error::CheckDependencyError::ConfigurationError {
                                message: concat!("Missing required field: ", stringify!($field))
                                    .to_string(),
                            }
                        })?,
                    )*
                })
            }
        }
    };
}
