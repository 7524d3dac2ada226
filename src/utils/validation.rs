use crate::domain::model::{OutputFormat, RaidLevel};
use crate::utils::error::{Result, SelectorError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(SelectorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SelectorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u32, min_value: u32) -> Result<()> {
    if value < min_value {
        return Err(SelectorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| SelectorError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_drive_range(min_drive_count: u32, max_drive_count: u32) -> Result<()> {
    if min_drive_count > max_drive_count {
        return Err(SelectorError::InvalidRange {
            min: min_drive_count,
            max: max_drive_count,
        });
    }
    Ok(())
}

/// 解析 RAID 等級；磁碟數不足時只記錄警告，不修正
pub fn validate_raid_level(raid_level: &str, min_drive_count: u32) -> Result<RaidLevel> {
    let level: RaidLevel = raid_level.parse()?;
    if min_drive_count < level.min_drive_count() {
        tracing::warn!(
            "{} needs at least {} drives; arrays with {} drive(s) will report reduced or no usable capacity",
            level,
            level.min_drive_count(),
            min_drive_count
        );
    }
    tracing::debug!(
        "{} with {} drives tolerates {} drive failure(s)",
        level,
        min_drive_count,
        level.fault_tolerance(min_drive_count)
    );
    Ok(level)
}

pub fn validate_output_format(field_name: &str, format: Option<&str>) -> Result<()> {
    if let Some(format) = format {
        format.parse::<OutputFormat>().map_err(|_| SelectorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format.to_string(),
            reason: "Unsupported format. Valid formats: json, csv".to_string(),
        })?;
    }
    Ok(())
}

/// Shared checks for every way of configuring a selection run.
pub fn validate_selection(
    catalog_path: &str,
    min_drive_count: u32,
    max_drive_count: u32,
    raid_level: &str,
) -> Result<RaidLevel> {
    validate_path("catalog_path", catalog_path)?;
    validate_positive_number("min_drive_count", min_drive_count, 1)?;
    validate_drive_range(min_drive_count, max_drive_count)?;
    validate_raid_level(raid_level, min_drive_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("catalog_path", "prices.json").is_ok());
        assert!(validate_path("catalog_path", "").is_err());
        assert!(validate_path("catalog_path", "   ").is_err());
        assert!(validate_path("catalog_path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("min_drive_count", 3, 1).is_ok());
        assert!(validate_positive_number("min_drive_count", 0, 1).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        assert_eq!(*validate_required_field("max_drive_count", &Some(8)).unwrap(), 8);
        assert!(matches!(
            validate_required_field::<u32>("max_drive_count", &None),
            Err(SelectorError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_validate_drive_range() {
        assert!(validate_drive_range(3, 3).is_ok());
        assert!(matches!(
            validate_drive_range(6, 4),
            Err(SelectorError::InvalidRange { min: 6, max: 4 })
        ));
    }

    #[test]
    fn test_validate_selection() {
        assert_eq!(
            validate_selection("prices.json", 3, 8, "raid6").unwrap(),
            RaidLevel::Raid6
        );
        assert!(matches!(
            validate_selection("prices.json", 3, 8, "RAID9"),
            Err(SelectorError::UnsupportedRaidLevel { .. })
        ));
        assert!(validate_selection("prices.json", 0, 8, "RAID5").is_err());
        // undersized arrays are allowed, only warned about
        assert!(validate_selection("prices.json", 2, 8, "RAID6").is_ok());
    }

    #[test]
    fn test_validate_output_format() {
        assert!(validate_output_format("format", None).is_ok());
        assert!(validate_output_format("format", Some("CSV")).is_ok());
        assert!(validate_output_format("format", Some("xml")).is_err());
    }
}
