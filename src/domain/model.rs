use crate::utils::error::{Result, SelectorError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_RAID_LEVEL: RaidLevel = RaidLevel::Raid5;
pub const DEFAULT_MIN_DRIVE_COUNT: u32 = 3;

/// Supported RAID layouts. Each level maps to a fixed usable-capacity formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RaidLevel {
    Raid0,
    Raid1,
    Raid3,
    Raid4,
    Raid5,
    Raid6,
}

impl RaidLevel {
    pub const ALL: [RaidLevel; 6] = [
        RaidLevel::Raid0,
        RaidLevel::Raid1,
        RaidLevel::Raid3,
        RaidLevel::Raid4,
        RaidLevel::Raid5,
        RaidLevel::Raid6,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RaidLevel::Raid0 => "RAID0",
            RaidLevel::Raid1 => "RAID1",
            RaidLevel::Raid3 => "RAID3",
            RaidLevel::Raid4 => "RAID4",
            RaidLevel::Raid5 => "RAID5",
            RaidLevel::Raid6 => "RAID6",
        }
    }

    /// Usable capacity of `drive_count` drives of `unit_capacity` each.
    ///
    /// Drive counts below [`RaidLevel::min_drive_count`] are not rejected:
    /// RAID6 over two drives yields zero, over one drive a negative value.
    pub fn total_capacity(&self, drive_count: u32, unit_capacity: f64) -> f64 {
        let drives = f64::from(drive_count);
        match self {
            RaidLevel::Raid0 => unit_capacity * drives,
            RaidLevel::Raid1 => unit_capacity,
            RaidLevel::Raid3 | RaidLevel::Raid4 | RaidLevel::Raid5 => {
                unit_capacity * (drives - 1.0)
            }
            RaidLevel::Raid6 => unit_capacity * (drives - 2.0),
        }
    }

    /// Smallest array for which the level is meaningful.
    pub fn min_drive_count(&self) -> u32 {
        match self {
            RaidLevel::Raid0 => 1,
            RaidLevel::Raid1 => 2,
            RaidLevel::Raid3 | RaidLevel::Raid4 | RaidLevel::Raid5 => 3,
            RaidLevel::Raid6 => 4,
        }
    }

    /// Number of drives that may fail without data loss.
    pub fn fault_tolerance(&self, drive_count: u32) -> u32 {
        match self {
            RaidLevel::Raid0 => 0,
            RaidLevel::Raid1 => drive_count.saturating_sub(1),
            RaidLevel::Raid3 | RaidLevel::Raid4 | RaidLevel::Raid5 => 1,
            RaidLevel::Raid6 => 2,
        }
    }
}

impl Default for RaidLevel {
    fn default() -> Self {
        DEFAULT_RAID_LEVEL
    }
}

impl fmt::Display for RaidLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RaidLevel {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_uppercase();
        let digits = normalized.strip_prefix("RAID").unwrap_or(&normalized);
        match digits {
            "0" => Ok(RaidLevel::Raid0),
            "1" => Ok(RaidLevel::Raid1),
            "3" => Ok(RaidLevel::Raid3),
            "4" => Ok(RaidLevel::Raid4),
            "5" => Ok(RaidLevel::Raid5),
            "6" => Ok(RaidLevel::Raid6),
            _ => Err(SelectorError::UnsupportedRaidLevel {
                level: s.to_string(),
            }),
        }
    }
}

impl Serialize for RaidLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RaidLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Unit capacity → unit price table, kept sorted by ascending capacity so
/// that iteration order (and therefore tie-breaking) is reproducible.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceCatalog {
    entries: Vec<(f64, f64)>,
}

impl PriceCatalog {
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut entries: Vec<(f64, f64)> = entries.into_iter().collect();

        for &(capacity, price) in &entries {
            if !capacity.is_finite() || capacity <= 0.0 {
                return Err(SelectorError::malformed(format!(
                    "capacity {} must be a positive number",
                    capacity
                )));
            }
            if !price.is_finite() || price < 0.0 {
                return Err(SelectorError::malformed(format!(
                    "price {} for capacity {} must be a non-negative number",
                    price, capacity
                )));
            }
        }

        entries.sort_by(|a, b| a.0.total_cmp(&b.0));
        if let Some(pair) = entries.windows(2).find(|pair| pair[0].0 == pair[1].0) {
            return Err(SelectorError::malformed(format!(
                "capacity {} is listed more than once",
                pair[0].0
            )));
        }

        Ok(Self { entries })
    }

    /// 解析 `{"4": 89.99, "8.0": 149.5}` 格式的價格表
    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(content)
            .map_err(|e| SelectorError::malformed(format!("invalid JSON: {}", e)))?;
        Self::from_json_value(&value)
    }

    pub fn from_json_slice(data: &[u8]) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_slice(data)
            .map_err(|e| SelectorError::malformed(format!("invalid JSON: {}", e)))?;
        Self::from_json_value(&value)
    }

    pub fn from_json_value(value: &serde_json::Value) -> Result<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| SelectorError::malformed("expected a JSON object at the top level"))?;

        let mut entries = Vec::with_capacity(object.len());
        for (key, price) in object {
            let capacity: f64 = key.trim().parse().map_err(|_| {
                SelectorError::malformed(format!("capacity key '{}' is not a number", key))
            })?;
            let price = price.as_f64().ok_or_else(|| {
                SelectorError::malformed(format!("price for capacity '{}' is not a number", key))
            })?;
            entries.push((capacity, price));
        }

        Self::from_entries(entries)
    }

    /// (unit_capacity, unit_price) pairs in ascending capacity order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One candidate array: `drive_count` drives of the same catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Combination {
    pub drive_count: u32,
    pub unit_capacity: f64,
    pub unit_price: f64,
    #[serde(default)]
    pub raid_level: RaidLevel,
}

impl Combination {
    pub fn new(drive_count: u32, unit_capacity: f64, unit_price: f64, raid_level: RaidLevel) -> Self {
        Self {
            drive_count,
            unit_capacity,
            unit_price,
            raid_level,
        }
    }

    pub fn total_capacity(&self) -> f64 {
        self.raid_level
            .total_capacity(self.drive_count, self.unit_capacity)
    }

    pub fn total_price(&self) -> f64 {
        self.unit_price * f64::from(self.drive_count)
    }

    /// Price per unit of usable capacity; `None` when nothing is usable.
    pub fn price_per_capacity(&self) -> Option<f64> {
        let capacity = self.total_capacity();
        (capacity > 0.0).then(|| self.total_price() / capacity)
    }
}

/// Frontier members ordered by strictly decreasing total capacity.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RankedResult {
    combinations: Vec<Combination>,
}

impl RankedResult {
    pub(crate) fn push(&mut self, combination: Combination) {
        self.combinations.push(combination);
    }

    pub(crate) fn last(&self) -> Option<&Combination> {
        self.combinations.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Combination> {
        self.combinations.iter()
    }

    pub fn as_slice(&self) -> &[Combination] {
        &self.combinations
    }

    pub fn len(&self) -> usize {
        self.combinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combinations.is_empty()
    }
}

impl<'a> IntoIterator for &'a RankedResult {
    type Item = &'a Combination;
    type IntoIter = std::slice::Iter<'a, Combination>;

    fn into_iter(self) -> Self::IntoIter {
        self.combinations.iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
}

impl OutputFormat {
    /// `.csv` 檔名使用 CSV，其他一律 JSON
    pub fn from_path(path: &str) -> Self {
        let is_csv = std::path::Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);
        if is_csv {
            OutputFormat::Csv
        } else {
            OutputFormat::Json
        }
    }
}

impl FromStr for OutputFormat {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(SelectorError::InvalidConfigValueError {
                field: "output.format".to_string(),
                value: other.to_string(),
                reason: "Unsupported format. Valid formats: json, csv".to_string(),
            }),
        }
    }
}
