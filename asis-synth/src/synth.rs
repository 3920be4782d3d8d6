//! Sample data synthesis: the keyword fixture plus randomly drawn traffic samples.

use std::ops::Range;

use asis_types::{KeywordRecord, KeywordTable, TrafficSample, TrafficTable, Trend};
use chrono::{Datelike, NaiveDate};
use rand::Rng;

/// Calendar year the traffic dates are drawn from.
pub const SAMPLE_YEAR: i32 = 2024;
/// Traffic rows per synthesis.
pub const TRAFFIC_SAMPLES: usize = 100;
pub const ORGANIC_TRAFFIC_RANGE: Range<u32> = 100..1000;
pub const PAGE_VIEWS_RANGE: Range<u32> = 500..5000;
pub const BOUNCE_RATE_RANGE: Range<f64> = 0.2..0.8;

/// Every calendar date of `year`, ascending.
pub fn dates_in_year(year: i32) -> Vec<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .into_iter()
        .flat_map(|start| start.iter_days())
        .take_while(|d| d.year() == year)
        .collect()
}

/// The fixed keyword set tracked by the dashboard.
pub fn keyword_fixture() -> KeywordTable {
    let rows = [
        ("SEO automation", 3, 1200, 65, Trend::Up),
        ("digital marketing", 7, 8500, 78, Trend::Down),
        ("website optimization", 12, 3200, 45, Trend::Up),
        ("keyword tracking", 5, 890, 52, Trend::Flat),
        ("backlink analysis", 9, 1500, 71, Trend::Up),
    ];
    KeywordTable::new(
        rows.into_iter()
            .map(|(keyword, position, search_volume, difficulty, trend)| KeywordRecord {
                keyword: keyword.to_string(),
                position,
                search_volume,
                difficulty,
                trend,
            })
            .collect(),
    )
}

/// Produces the keyword and traffic tables.
///
/// The random source is supplied by the caller; a seeded generator yields the
/// exact same traffic table on every call.
#[derive(Clone, Debug)]
pub struct SampleDataSynthesizer {
    dates: Vec<NaiveDate>,
    samples: usize,
}

impl Default for SampleDataSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleDataSynthesizer {
    pub fn new() -> Self {
        Self {
            dates: dates_in_year(SAMPLE_YEAR),
            samples: TRAFFIC_SAMPLES,
        }
    }

    /// Dates traffic samples are drawn from.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> (KeywordTable, TrafficTable) {
        (keyword_fixture(), self.sample_traffic(rng))
    }

    /// Draw the traffic rows. Dates are sampled with replacement.
    pub fn sample_traffic<R: Rng + ?Sized>(&self, rng: &mut R) -> TrafficTable {
        // `dates` always holds the full sample year, never empty.
        (0..self.samples)
            .map(|_| TrafficSample {
                date: self.dates[rng.gen_range(0..self.dates.len())],
                organic_traffic: rng.gen_range(ORGANIC_TRAFFIC_RANGE),
                page_views: rng.gen_range(PAGE_VIEWS_RANGE),
                bounce_rate: rng.gen_range(BOUNCE_RATE_RANGE),
            })
            .collect()
    }
}
