//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

use crate::exclusion::ExclusionFilter;

/// Solution loading arguments shared by every command
#[derive(Args, Debug, Clone)]
pub struct SolutionArgs {
    /// Path to the .sln file
    #[arg(value_name = "SOLUTION", env = "SLNDEPS_SOLUTION")]
    pub solution: PathBuf,

    /// Drop dependencies that are already implied by a longer path
    #[arg(long, env = "SLNDEPS_SIMPLIFY")]
    pub simplify: bool,

    /// Report dependency identifiers that match no project
    #[arg(long, env = "SLNDEPS_SHOW_UNRESOLVED")]
    pub show_unresolved: bool,
}

/// Graph emission arguments
#[derive(Args, Debug, Clone, Default)]
pub struct GraphArgs {
    /// Projects to leave out, by display name
    #[arg(long, num_args = 1.., value_name = "NAME", env = "SLNDEPS_EXCLUDE", value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Leave out projects whose display name matches a glob pattern
    #[arg(long, value_name = "GLOB", env = "SLNDEPS_EXCLUDE_MATCHING", value_delimiter = ',')]
    pub exclude_matching: Vec<String>,

    /// Leave out the helper targets CMake generates (ALL_BUILD, ZERO_CHECK, ...)
    #[arg(long, env = "SLNDEPS_EXCLUDE_CMAKE_TARGETS")]
    pub exclude_cmake_targets: bool,

    /// Point arrows from dependency to dependent
    #[arg(long, env = "SLNDEPS_REVERSE")]
    pub reverse: bool,

    /// Omit projects that take part in no edge
    #[arg(long, env = "SLNDEPS_REMOVE_EMPTY")]
    pub remove_empty: bool,
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_FORMAT, env = "SLNDEPS_FORMAT")]
    pub format: crate::cli::OutputFormat,
}

impl GraphArgs {
    /// Build the exclusion filter described by these arguments
    pub fn exclusion_filter(&self) -> Result<ExclusionFilter, crate::error::SlnDepsError> {
        let mut filter = ExclusionFilter::new().with_names(&self.exclude);
        for pattern in &self.exclude_matching {
            filter = filter.with_pattern(pattern)?;
        }
        if self.exclude_cmake_targets {
            filter = filter.with_cmake_targets();
        }
        Ok(filter)
    }
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::SlnDepsError>;
}

/// Trait for configurations that can be created from CLI commands
/// This trait simplifies command-to-config conversions
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(command: crate::cli::Commands) -> Result<Self, crate::error::SlnDepsError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::SlnDepsError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}

/// Macro to generate a builder whose fields are all required
///
/// Each field gets a setter of the same name; [`ConfigBuilder::build`] fails
/// with a configuration error naming the first field that was never set.
#[macro_export]
macro_rules! impl_builder {
    ($builder:ident => $config:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        #[derive(Default)]
        pub struct $builder {
            $($field: Option<$ty>,)*
        }

        impl $builder {
            pub fn new() -> Self {
                Self::default()
            }

            $(
                pub fn $field(mut self, $field: $ty) -> Self {
                    self.$field = Some($field);
                    self
                }
            )*
        }

        impl $crate::common::ConfigBuilder for $builder {
            type Config = $config;

            fn build(self) -> Result<Self::Config, $crate::error::SlnDepsError> {
                Ok($config {
                    $(
                        $field: self.$field.ok_or_else(|| {
                            $crate::error::SlnDepsError::ConfigurationError {
                                message: format!("Missing required field: {}", stringify!($field)),
                            }
                        })?,
                    )*
                })
            }
        }
    };
}
