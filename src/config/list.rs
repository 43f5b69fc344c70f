//! List command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::impl_builder;
use crate::solution::LoadOptions;

#[derive(Debug, Clone)]
pub struct ListConfig {
    pub solution: PathBuf,
    pub load: LoadOptions,
    pub show_unresolved: bool,
    pub format: OutputFormat,
}

impl ListConfig {
    pub fn builder() -> ListConfigBuilder {
        ListConfigBuilder::new()
    }
}

impl_builder! {
    ListConfigBuilder => ListConfig {
        solution: PathBuf,
        load: LoadOptions,
        show_unresolved: bool,
        format: OutputFormat,
    }
}
