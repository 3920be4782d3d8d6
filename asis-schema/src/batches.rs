//! Row -> column conversion for every generated table.

use std::sync::Arc;

use arrow_array::types::UInt8Type;
use arrow_array::{ArrayRef, Date32Array, DictionaryArray, Float64Array, StringArray, UInt32Array, UInt64Array};
use asis_types::{
    Alert, AuditItem, BacklinkRecord, DailyTraffic, HistogramBin, KeywordTable, MetricCard,
    ReportEntry, TrafficTable, ValueCount,
};
use chrono::NaiveDate;

use crate::generated::*;
use crate::SchemaError;

/// Days since 1970-01-01, the Arrow `Date32` encoding.
pub fn date_to_days(date: NaiveDate) -> i32 {
    (date - NaiveDate::default()).num_days() as i32
}

fn utf8<'a>(values: impl Iterator<Item = &'a str>) -> ArrayRef {
    Arc::new(StringArray::from(values.collect::<Vec<_>>()))
}

fn dict<'a>(values: impl Iterator<Item = &'a str>) -> ArrayRef {
    Arc::new(values.collect::<DictionaryArray<UInt8Type>>())
}

fn dates(values: impl Iterator<Item = NaiveDate>) -> ArrayRef {
    Arc::new(Date32Array::from(values.map(date_to_days).collect::<Vec<_>>()))
}

fn metric_columns(cards: &[MetricCard]) -> Vec<ArrayRef> {
    vec![
        utf8(cards.iter().map(|c| c.label.as_str())),
        utf8(cards.iter().map(|c| c.value.as_str())),
        utf8(cards.iter().map(|c| c.delta.as_str())),
    ]
}

fn histogram_columns(bins: &[HistogramBin]) -> Vec<ArrayRef> {
    vec![
        Arc::new(Float64Array::from(bins.iter().map(|b| b.start).collect::<Vec<_>>())),
        Arc::new(Float64Array::from(bins.iter().map(|b| b.end).collect::<Vec<_>>())),
        Arc::new(UInt64Array::from(bins.iter().map(|b| b.count).collect::<Vec<_>>())),
    ]
}

impl KeywordBatch {
    pub fn from_table(table: &KeywordTable) -> Result<Self, SchemaError> {
        let rows = table.rows();
        Self::from_columns(vec![
            utf8(rows.iter().map(|r| r.keyword.as_str())),
            Arc::new(UInt32Array::from(rows.iter().map(|r| r.position).collect::<Vec<_>>())),
            Arc::new(UInt32Array::from(rows.iter().map(|r| r.search_volume).collect::<Vec<_>>())),
            Arc::new(UInt32Array::from(rows.iter().map(|r| r.difficulty).collect::<Vec<_>>())),
            dict(rows.iter().map(|r| r.trend.as_str())),
        ])
    }
}

impl TrafficBatch {
    pub fn from_table(table: &TrafficTable) -> Result<Self, SchemaError> {
        let rows = table.rows();
        Self::from_columns(vec![
            dates(rows.iter().map(|r| r.date)),
            Arc::new(UInt32Array::from(rows.iter().map(|r| r.organic_traffic).collect::<Vec<_>>())),
            Arc::new(UInt32Array::from(rows.iter().map(|r| r.page_views).collect::<Vec<_>>())),
            Arc::new(Float64Array::from(rows.iter().map(|r| r.bounce_rate).collect::<Vec<_>>())),
        ])
    }
}

impl DailyTrafficBatch {
    pub fn from_rows(rows: &[DailyTraffic]) -> Result<Self, SchemaError> {
        Self::from_columns(vec![
            dates(rows.iter().map(|r| r.date)),
            Arc::new(UInt64Array::from(
                rows.iter().map(|r| r.total_organic_traffic).collect::<Vec<_>>(),
            )),
        ])
    }
}

impl OverviewMetricBatch {
    pub fn from_cards(cards: &[MetricCard]) -> Result<Self, SchemaError> {
        Self::from_columns(metric_columns(cards))
    }
}

impl AuditScoreBatch {
    pub fn from_cards(cards: &[MetricCard]) -> Result<Self, SchemaError> {
        Self::from_columns(metric_columns(cards))
    }
}

impl AlertBatch {
    pub fn from_rows(rows: &[Alert]) -> Result<Self, SchemaError> {
        Self::from_columns(vec![
            dict(rows.iter().map(|r| r.severity.as_str())),
            utf8(rows.iter().map(|r| r.message.as_str())),
        ])
    }
}

impl BacklinkBatch {
    pub fn from_rows(rows: &[BacklinkRecord]) -> Result<Self, SchemaError> {
        Self::from_columns(vec![
            utf8(rows.iter().map(|r| r.domain.as_str())),
            Arc::new(UInt32Array::from(rows.iter().map(|r| r.domain_authority).collect::<Vec<_>>())),
            dict(rows.iter().map(|r| r.link_type.as_str())),
            dict(rows.iter().map(|r| r.status.as_str())),
        ])
    }
}

impl StatusCountBatch {
    pub fn from_counts(counts: &[ValueCount]) -> Result<Self, SchemaError> {
        Self::from_columns(vec![
            utf8(counts.iter().map(|c| c.value.as_str())),
            Arc::new(UInt64Array::from(counts.iter().map(|c| c.count).collect::<Vec<_>>())),
        ])
    }
}

impl PositionHistogramBatch {
    pub fn from_bins(bins: &[HistogramBin]) -> Result<Self, SchemaError> {
        Self::from_columns(histogram_columns(bins))
    }
}

impl AuthorityHistogramBatch {
    pub fn from_bins(bins: &[HistogramBin]) -> Result<Self, SchemaError> {
        Self::from_columns(histogram_columns(bins))
    }
}

impl AuditItemBatch {
    pub fn from_rows(rows: &[AuditItem]) -> Result<Self, SchemaError> {
        Self::from_columns(vec![
            utf8(rows.iter().map(|r| r.check.as_str())),
            utf8(rows.iter().map(|r| r.detail.as_str())),
            dict(rows.iter().map(|r| r.outcome.as_str())),
        ])
    }
}

impl ReportBatch {
    pub fn from_rows(rows: &[ReportEntry]) -> Result<Self, SchemaError> {
        Self::from_columns(vec![
            utf8(rows.iter().map(|r| r.name.as_str())),
            dates(rows.iter().map(|r| r.date)),
            dict(rows.iter().map(|r| r.format.as_str())),
        ])
    }
}
