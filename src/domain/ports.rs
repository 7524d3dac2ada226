use crate::domain::model::{OutputFormat, PriceCatalog, RankedResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn catalog_path(&self) -> &str;
    fn min_drive_count(&self) -> u32;
    fn max_drive_count(&self) -> u32;
    fn raid_level(&self) -> &str;
    fn output_path(&self) -> Option<&str>;

    /// 未指定時依輸出檔名推斷
    fn output_format(&self) -> OutputFormat {
        self.output_path()
            .map(OutputFormat::from_path)
            .unwrap_or_default()
    }
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<PriceCatalog>;
    async fn transform(&self, catalog: PriceCatalog) -> Result<RankedResult>;
    async fn load(&self, result: &RankedResult) -> Result<Option<String>>;
}
