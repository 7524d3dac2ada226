use crate::domain::model::{Combination, OutputFormat, RankedResult};
use crate::utils::error::{Result, SelectorError};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    drive_count: u32,
    unit_capacity: f64,
    unit_price: f64,
    raid_level: &'a str,
    total_capacity: f64,
    total_price: f64,
}

/// 容量顯示方式：整數保留一位小數 (`2.0`)，其他照原樣 (`1.5`)
pub fn format_capacity(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// `4x 2.0TB Drives = 6.0TB:\t$600.00 ($100.00/TB)`
pub fn format_line(combo: &Combination) -> String {
    let per_capacity = match combo.price_per_capacity() {
        Some(per_tb) => format!("${:.2}/TB", per_tb),
        None => "n/a".to_string(),
    };
    format!(
        "{}x {}TB Drives = {}TB:\t${:.2} ({})",
        combo.drive_count,
        format_capacity(combo.unit_capacity),
        format_capacity(combo.total_capacity()),
        combo.total_price(),
        per_capacity
    )
}

pub fn render_lines(result: &RankedResult) -> Vec<String> {
    result.iter().map(format_line).collect()
}

pub fn encode(result: &RankedResult, format: OutputFormat) -> Result<Vec<u8>> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_vec_pretty(result)?),
        OutputFormat::Csv => encode_csv(result),
    }
}

fn encode_csv(result: &RankedResult) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for combo in result {
        writer.serialize(CsvRow {
            drive_count: combo.drive_count,
            unit_capacity: combo.unit_capacity,
            unit_price: combo.unit_price,
            raid_level: combo.raid_level.as_str(),
            total_capacity: combo.total_capacity(),
            total_price: combo.total_price(),
        })?;
    }
    writer
        .into_inner()
        .map_err(|e| SelectorError::IoError(e.into_error()))
}
