#![forbid(unsafe_code)]

pub mod aggregate;
pub mod cache;
pub mod config;
pub mod synth;

use std::sync::Arc;

use asis_types::{DailyTraffic, KeywordTable, TrafficTable};
use thiserror::Error;

pub use aggregate::daily_aggregate;
pub use cache::SampleCache;
pub use config::{ConfigError, DashboardConfig};
pub use synth::SampleDataSynthesizer;

#[derive(Debug, Error)]
pub enum SynthError {
    #[error("sample cache lock poisoned")]
    Poisoned,
}

/// One synthesis result: the keyword fixture and the traffic sample set.
///
/// Immutable for the lifetime of its cache epoch.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleData {
    pub epoch: u64,
    pub keywords: KeywordTable,
    pub traffic: TrafficTable,
}

impl SampleData {
    /// Daily organic traffic totals, recomputed from the traffic table on each call.
    pub fn daily(&self) -> Vec<DailyTraffic> {
        daily_aggregate(&self.traffic)
    }
}

pub type SampleHandle = Arc<SampleData>;
