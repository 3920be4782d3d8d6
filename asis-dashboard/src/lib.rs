#![forbid(unsafe_code)]

pub mod chart;
pub mod fixtures;
pub mod sections;
pub mod stats;

use asis_schema::SchemaError;
use thiserror::Error;

pub use chart::{ChartKind, ChartSpec};
pub use sections::{build_section, Panel, SectionView};

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Schema(#[from] SchemaError),
}
