pub mod engine;
pub mod frontier;
pub mod report;

pub use crate::domain::model::{Combination, PriceCatalog, RaidLevel, RankedResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
