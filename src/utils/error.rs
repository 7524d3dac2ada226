use thiserror::Error;

#[derive(Error, Debug)]
pub enum SelectorError {
    #[error("Unsupported RAID level: {level}")]
    UnsupportedRaidLevel { level: String },

    #[error("Invalid drive count range: minimum {min} exceeds maximum {max}")]
    InvalidRange { min: u32, max: u32 },

    #[error("Too many candidates: {drive_counts} drive counts × {catalog_size} catalog entries exceeds {limit}")]
    TooManyCandidates {
        drive_counts: u64,
        catalog_size: usize,
        limit: u64,
    },

    #[error("Malformed price catalog: {reason}")]
    MalformedInput { reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Io,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SelectorError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnsupportedRaidLevel { .. }
            | Self::InvalidRange { .. }
            | Self::TooManyCandidates { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::MalformedInput { .. } => ErrorCategory::Input,
            Self::IoError(_) => ErrorCategory::Io,
            Self::SerializationError(_) | Self::CsvError(_) => ErrorCategory::Output,
        }
    }

    /// 所有錯誤都會中止整個計算，沒有部分結果
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::UnsupportedRaidLevel { .. } => {
                "Use one of RAID0, RAID1, RAID3, RAID4, RAID5, RAID6".to_string()
            }
            Self::InvalidRange { .. } => {
                "Make sure the minimum drive count is not larger than the maximum".to_string()
            }
            Self::TooManyCandidates { .. } => {
                "Narrow the drive count range or trim the catalog".to_string()
            }
            Self::MalformedInput { .. } => {
                "The catalog must be a JSON object mapping capacities to prices, e.g. {\"4\": 89.99}"
                    .to_string()
            }
            Self::IoError(_) => "Check that the file exists and is readable/writable".to_string(),
            Self::SerializationError(_) | Self::CsvError(_) => {
                "Check the output path and format".to_string()
            }
            Self::ConfigValidationError { field, .. }
            | Self::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' setting and try again", field)
            }
            Self::MissingConfigError { field } => format!("Add the '{}' setting", field),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::UnsupportedRaidLevel { level } => {
                format!("RAID level '{}' is not supported", level)
            }
            Self::InvalidRange { min, max } => {
                format!("Drive count range {}..={} is empty", min, max)
            }
            Self::MalformedInput { reason } => format!("Could not read price catalog: {}", reason),
            Self::IoError(e) => format!("File access failed: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SelectorError>;
