use crate::core::Pipeline;
use crate::domain::model::RankedResult;
use crate::utils::error::Result;

#[derive(Debug, Clone)]
pub struct SelectionOutcome {
    pub ranked: RankedResult,
    pub catalog_size: usize,
    pub output_path: Option<String>,
}

pub struct SelectorEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> SelectorEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<SelectionOutcome> {
        tracing::info!("Starting RAID selection...");

        // Extract
        let catalog = self.pipeline.extract().await?;
        let catalog_size = catalog.len();
        tracing::info!("Loaded {} catalog entries", catalog_size);

        // Transform
        let ranked = self.pipeline.transform(catalog).await?;
        tracing::info!("Selected {} combinations", ranked.len());

        // Load
        let output_path = self.pipeline.load(&ranked).await?;
        if let Some(path) = &output_path {
            tracing::info!("Output saved to: {}", path);
        }

        Ok(SelectionOutcome {
            ranked,
            catalog_size,
            output_path,
        })
    }

    /// Extract and transform only; nothing is written.
    pub async fn dry_run(&self) -> Result<SelectionOutcome> {
        tracing::info!("🔍 DRY RUN MODE - No output will be written");

        let catalog = self.pipeline.extract().await?;
        let catalog_size = catalog.len();
        let ranked = self.pipeline.transform(catalog).await?;

        tracing::info!(
            "Would keep {} combinations from {} catalog entries",
            ranked.len(),
            catalog_size
        );

        Ok(SelectionOutcome {
            ranked,
            catalog_size,
            output_path: None,
        })
    }
}
