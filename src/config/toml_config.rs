use crate::core::ConfigProvider;
use crate::domain::model::{OutputFormat, DEFAULT_MIN_DRIVE_COUNT, DEFAULT_RAID_LEVEL};
use crate::utils::error::{Result, SelectorError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub catalog: CatalogConfig,
    pub selection: SelectionConfig,
    pub output: Option<OutputConfig>,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionConfig {
    pub min_drive_count: Option<u32>,
    pub max_drive_count: Option<u32>,
    pub raid_level: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: Option<String>,
    pub format: Option<String>,
    pub print_results: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub log_level: Option<String>,
    pub json_logs: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SelectorError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SelectorError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CATALOG_DIR})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SelectorError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        let max_drive_count = validation::validate_required_field(
            "selection.max_drive_count",
            &self.selection.max_drive_count,
        )?;
        validation::validate_selection(
            &self.catalog.path,
            self.min_drive_count(),
            *max_drive_count,
            self.raid_level(),
        )?;

        if let Some(output) = &self.output {
            if let Some(path) = &output.path {
                validation::validate_path("output.path", path)?;
            }
            validation::validate_output_format("output.format", output.format.as_deref())?;
        }

        Ok(())
    }

    /// 是否在 stdout 列出結果，預設為是
    pub fn print_results(&self) -> bool {
        self.output
            .as_ref()
            .and_then(|o| o.print_results)
            .unwrap_or(true)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.monitoring.as_ref().and_then(|m| m.log_level.as_deref())
    }

    pub fn json_logs(&self) -> bool {
        self.monitoring
            .as_ref()
            .and_then(|m| m.json_logs)
            .unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn catalog_path(&self) -> &str {
        &self.catalog.path
    }

    fn min_drive_count(&self) -> u32 {
        self.selection
            .min_drive_count
            .unwrap_or(DEFAULT_MIN_DRIVE_COUNT)
    }

    /// 未設定時為 0，驗證階段會先回報缺少欄位
    fn max_drive_count(&self) -> u32 {
        self.selection.max_drive_count.unwrap_or(0)
    }

    fn raid_level(&self) -> &str {
        self.selection
            .raid_level
            .as_deref()
            .unwrap_or(DEFAULT_RAID_LEVEL.as_str())
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.path.as_deref())
    }

    fn output_format(&self) -> OutputFormat {
        let explicit = self
            .output
            .as_ref()
            .and_then(|o| o.format.as_deref())
            .and_then(|format| format.parse().ok());
        explicit
            .or_else(|| self.output_path().map(OutputFormat::from_path))
            .unwrap_or_default()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
