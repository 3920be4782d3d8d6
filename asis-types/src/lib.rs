use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Ranking movement shown next to a tracked keyword.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    pub const fn as_str(self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Flat => "flat",
        }
    }
}

/// One tracked keyword and its ranking metrics.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct KeywordRecord {
    pub keyword: String,
    /// Search ranking position, 1-based.
    pub position: u32,
    pub search_volume: u32,
    /// Ranking difficulty score in `0..=100`.
    pub difficulty: u32,
    pub trend: Trend,
}

/// One synthesized traffic observation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrafficSample {
    pub date: NaiveDate,
    pub organic_traffic: u32,
    pub page_views: u32,
    pub bounce_rate: f64,
}

/// Organic traffic summed over every sample sharing a date.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct DailyTraffic {
    pub date: NaiveDate,
    pub total_organic_traffic: u64,
}

/// Row-oriented keyword table (fixture data).
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct KeywordTable {
    pub rows: Vec<KeywordRecord>,
}

impl KeywordTable {
    pub fn new(rows: Vec<KeywordRecord>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[KeywordRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Row-oriented traffic table. Dates may repeat.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TrafficTable {
    pub rows: Vec<TrafficSample>,
}

impl TrafficTable {
    pub fn new(rows: Vec<TrafficSample>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[TrafficSample] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn total_organic_traffic(&self) -> u64 {
        self.rows.iter().map(|r| u64::from(r.organic_traffic)).sum()
    }
}

impl FromIterator<TrafficSample> for TrafficTable {
    fn from_iter<I: IntoIterator<Item = TrafficSample>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum LinkType {
    Follow,
    NoFollow,
}

impl LinkType {
    pub const fn as_str(self) -> &'static str {
        match self {
            LinkType::Follow => "Follow",
            LinkType::NoFollow => "NoFollow",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum LinkStatus {
    Active,
    Lost,
}

impl LinkStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            LinkStatus::Active => "Active",
            LinkStatus::Lost => "Lost",
        }
    }
}

/// A referring domain seen by the backlink monitor.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BacklinkRecord {
    pub domain: String,
    pub domain_authority: u32,
    pub link_type: LinkType,
    pub status: LinkStatus,
}

/// Headline number with its change since the previous period.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricCard {
    pub label: String,
    pub value: String,
    pub delta: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Warning,
    Critical,
}

impl Severity {
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Critical => "critical",
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub severity: Severity,
    pub message: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditOutcome {
    Pass,
    Warning,
    Fail,
}

impl AuditOutcome {
    pub const fn as_str(self) -> &'static str {
        match self {
            AuditOutcome::Pass => "pass",
            AuditOutcome::Warning => "warning",
            AuditOutcome::Fail => "fail",
        }
    }
}

/// A single on-page audit check result.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct AuditItem {
    pub check: String,
    pub detail: String,
    pub outcome: AuditOutcome,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum ReportFormat {
    Csv,
    Pdf,
    Excel,
}

impl ReportFormat {
    pub const fn as_str(self) -> &'static str {
        match self {
            ReportFormat::Csv => "CSV",
            ReportFormat::Pdf => "PDF",
            ReportFormat::Excel => "Excel",
        }
    }
}

/// Entry in the recent reports list.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub name: String,
    pub date: NaiveDate,
    pub format: ReportFormat,
}

/// Equal-width histogram bucket over `[start, end)`; the last bucket is closed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: u64,
}

/// Occurrence count of one distinct value.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ValueCount {
    pub value: String,
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(day: u32, organic: u32) -> TrafficSample {
        TrafficSample {
            date: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            organic_traffic: organic,
            page_views: 600,
            bounce_rate: 0.5,
        }
    }

    #[test]
    fn traffic_total_sums_all_rows() {
        let table: TrafficTable = vec![sample(1, 100), sample(2, 50), sample(1, 30)]
            .into_iter()
            .collect();
        assert_eq!(table.len(), 3);
        assert_eq!(table.total_organic_traffic(), 180);
    }

    #[test]
    fn trend_serializes_lowercase() {
        let json = serde_json::to_string(&Trend::Flat).unwrap();
        assert_eq!(json, "\"flat\"");
        assert_eq!(Trend::Down.as_str(), "down");
    }
}
