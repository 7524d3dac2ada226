pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::pipelines::selection_pipeline::SelectionPipeline;
pub use config::{cli::LocalStorage, toml_config::TomlConfig};
pub use crate::core::engine::{SelectionOutcome, SelectorEngine};
pub use crate::core::frontier::{rank_combinations, select};
pub use domain::model::{Combination, OutputFormat, PriceCatalog, RaidLevel, RankedResult};
pub use utils::error::{Result, SelectorError};
