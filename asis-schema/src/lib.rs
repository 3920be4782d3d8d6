#![forbid(unsafe_code)]

pub mod section;
pub mod macros;
pub mod batches;
pub mod json;

use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;
use thiserror::Error;

use section::Section;

pub use json::to_column_json;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("schema mismatch for table {table}: {detail}")]
    Mismatch { table: String, detail: String },
    #[error("unsupported column type for '{column}': {data_type}")]
    UnsupportedType { column: String, data_type: String },
    #[error("arrow error: {0}")]
    Arrow(#[from] ArrowError),
}

/// Column-oriented table handed to the rendering layer.
pub trait ColumnTable {
    fn kind(&self) -> &'static str;
    fn section(&self) -> Section;
    fn batch(&self) -> &RecordBatch;

    fn to_json(&self) -> Result<serde_json::Value, SchemaError> {
        to_column_json(self.kind(), self.section(), self.batch())
    }
}

/// Generated table wrappers and schemas for every dashboard table.
pub mod generated {
    use super::Section;
    use crate::define_tables;

    define_tables! {
        // Keyword Tracking
        table KeywordBatch {
            section: Section::KeywordTracking,
            kind: "keywords",
            fields: {
                keyword: Utf8,
                position: UInt32,
                search_volume: UInt32,
                difficulty: UInt32,
                trend: DictU8Utf8
            }
        },

        table PositionHistogramBatch {
            section: Section::KeywordTracking,
            kind: "position_histogram",
            fields: {
                bin_start: Float64,
                bin_end: Float64,
                count: UInt64
            }
        },

        // Overview
        table TrafficBatch {
            section: Section::Overview,
            kind: "traffic",
            fields: {
                date: Date32,
                organic_traffic: UInt32,
                page_views: UInt32,
                bounce_rate: Float64
            }
        },

        table DailyTrafficBatch {
            section: Section::Overview,
            kind: "daily_traffic",
            fields: {
                date: Date32,
                total_organic_traffic: UInt64
            }
        },

        table OverviewMetricBatch {
            section: Section::Overview,
            kind: "metrics",
            fields: {
                label: Utf8,
                value: Utf8,
                delta: Utf8
            }
        },

        table AlertBatch {
            section: Section::Overview,
            kind: "alerts",
            fields: {
                severity: DictU8Utf8,
                message: Utf8
            }
        },

        // Backlink Monitor
        table BacklinkBatch {
            section: Section::BacklinkMonitor,
            kind: "backlinks",
            fields: {
                domain: Utf8,
                domain_authority: UInt32,
                link_type: DictU8Utf8,
                status: DictU8Utf8
            }
        },

        table StatusCountBatch {
            section: Section::BacklinkMonitor,
            kind: "status_counts",
            fields: {
                status: Utf8,
                count: UInt64
            }
        },

        table AuthorityHistogramBatch {
            section: Section::BacklinkMonitor,
            kind: "authority_histogram",
            fields: {
                bin_start: Float64,
                bin_end: Float64,
                count: UInt64
            }
        },

        // SEO Audit
        table AuditScoreBatch {
            section: Section::SeoAudit,
            kind: "scores",
            fields: {
                label: Utf8,
                value: Utf8,
                delta: Utf8
            }
        },

        table AuditItemBatch {
            section: Section::SeoAudit,
            kind: "audit_items",
            fields: {
                check: Utf8,
                detail: Utf8,
                outcome: DictU8Utf8
            }
        },

        // Reports
        table ReportBatch {
            section: Section::Reports,
            kind: "recent_reports",
            fields: {
                name: Utf8,
                date: Date32,
                format: DictU8Utf8
            }
        }
    }
}

pub use generated::*;
