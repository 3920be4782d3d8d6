//! Assemble the tables and chart declarations for each dashboard section.

use asis_schema::section::Section;
use asis_schema::{
    AlertBatch, AuditItemBatch, AuditScoreBatch, AuthorityHistogramBatch, BacklinkBatch,
    ColumnTable, DailyTrafficBatch, KeywordBatch, OverviewMetricBatch, PositionHistogramBatch,
    ReportBatch, StatusCountBatch,
};
use asis_synth::SampleData;
use serde_json::{json, Value};
use tracing::debug;

use crate::chart::ChartSpec;
use crate::fixtures;
use crate::stats::{histogram, value_counts};
use crate::DashboardError;

/// Histogram bucket count used by every distribution chart.
pub const HISTOGRAM_BINS: usize = 10;

/// One table, optionally drawn as a chart.
pub struct Panel {
    pub table: Box<dyn ColumnTable + Send + Sync>,
    pub chart: Option<ChartSpec>,
}

impl Panel {
    fn plain(table: impl ColumnTable + Send + Sync + 'static) -> Self {
        Self {
            table: Box::new(table),
            chart: None,
        }
    }

    fn charted(table: impl ColumnTable + Send + Sync + 'static, chart: ChartSpec) -> Self {
        Self {
            table: Box::new(table),
            chart: Some(chart),
        }
    }
}

pub struct SectionView {
    pub section: Section,
    pub panels: Vec<Panel>,
}

impl SectionView {
    pub fn to_json(&self) -> Result<Value, DashboardError> {
        let panels = self
            .panels
            .iter()
            .map(|p| -> Result<Value, DashboardError> {
                Ok(json!({
                    "table": p.table.to_json()?,
                    "chart": p.chart,
                }))
            })
            .collect::<Result<Vec<_>, DashboardError>>()?;
        Ok(json!({
            "section": self.section.slug(),
            "title": self.section.title(),
            "panels": panels,
        }))
    }

    /// Look up a panel by table kind.
    pub fn panel(&self, kind: &str) -> Option<&Panel> {
        self.panels.iter().find(|p| p.table.kind() == kind)
    }
}

pub fn build_section(section: Section, data: &SampleData) -> Result<SectionView, DashboardError> {
    debug!(section = section.slug(), epoch = data.epoch, "building section");
    let panels = match section {
        Section::Overview => vec![
            Panel::plain(OverviewMetricBatch::from_cards(&fixtures::overview_metrics())?),
            Panel::plain(AlertBatch::from_rows(&fixtures::alerts())?),
            Panel::charted(
                DailyTrafficBatch::from_rows(&data.daily())?,
                ChartSpec::line("Daily Organic Traffic", "date", "total_organic_traffic"),
            ),
        ],
        Section::KeywordTracking => {
            let positions: Vec<f64> = data
                .keywords
                .rows()
                .iter()
                .map(|k| f64::from(k.position))
                .collect();
            vec![
                Panel::plain(KeywordBatch::from_table(&data.keywords)?),
                Panel::charted(
                    PositionHistogramBatch::from_bins(&histogram(&positions, HISTOGRAM_BINS))?,
                    ChartSpec::histogram(
                        "Keyword Position Distribution",
                        "bin_start",
                        "count",
                        HISTOGRAM_BINS,
                    ),
                ),
            ]
        }
        Section::BacklinkMonitor => {
            let backlinks = fixtures::backlinks();
            let counts = value_counts(backlinks.iter().map(|b| b.status.as_str()));
            let authority: Vec<f64> = backlinks
                .iter()
                .map(|b| f64::from(b.domain_authority))
                .collect();
            vec![
                Panel::charted(
                    StatusCountBatch::from_counts(&counts)?,
                    ChartSpec::pie("Backlink Status Distribution", "status", "count"),
                ),
                Panel::charted(
                    AuthorityHistogramBatch::from_bins(&histogram(&authority, HISTOGRAM_BINS))?,
                    ChartSpec::histogram(
                        "Domain Authority Distribution",
                        "bin_start",
                        "count",
                        HISTOGRAM_BINS,
                    ),
                ),
                Panel::plain(BacklinkBatch::from_rows(&backlinks)?),
            ]
        }
        Section::SeoAudit => vec![
            Panel::plain(AuditScoreBatch::from_cards(&fixtures::audit_scores())?),
            Panel::plain(AuditItemBatch::from_rows(&fixtures::audit_items())?),
        ],
        Section::Reports => vec![Panel::plain(ReportBatch::from_rows(&fixtures::recent_reports())?)],
    };
    Ok(SectionView { section, panels })
}
