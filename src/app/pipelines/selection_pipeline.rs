use crate::core::frontier::rank_combinations;
use crate::core::report;
use crate::core::{ConfigProvider, Pipeline, PriceCatalog, RankedResult, Storage};
use crate::utils::error::Result;

pub struct SelectionPipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
}

impl<S: Storage, C: ConfigProvider> SelectionPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for SelectionPipeline<S, C> {
    async fn extract(&self) -> Result<PriceCatalog> {
        tracing::debug!("Reading price catalog from: {}", self.config.catalog_path());
        let data = self.storage.read_file(self.config.catalog_path()).await?;
        PriceCatalog::from_json_slice(&data)
    }

    async fn transform(&self, catalog: PriceCatalog) -> Result<RankedResult> {
        rank_combinations(
            &catalog,
            self.config.min_drive_count(),
            self.config.max_drive_count(),
            self.config.raid_level(),
        )
    }

    async fn load(&self, result: &RankedResult) -> Result<Option<String>> {
        let Some(output_path) = self.config.output_path() else {
            tracing::debug!("No output path configured, skipping file output");
            return Ok(None);
        };

        let format = self.config.output_format();
        let data = report::encode(result, format)?;

        tracing::debug!(
            "Writing {} bytes as {:?} to storage",
            data.len(),
            format
        );
        self.storage.write_file(output_path, &data).await?;

        Ok(Some(output_path.to_string()))
    }
}
