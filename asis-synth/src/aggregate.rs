use std::collections::BTreeMap;

use asis_types::{DailyTraffic, TrafficTable};
use chrono::NaiveDate;

/// Group traffic rows by date and sum organic traffic per date, ascending by date.
///
/// Many rows may share a date; each distinct date appears exactly once in the output.
pub fn daily_aggregate(traffic: &TrafficTable) -> Vec<DailyTraffic> {
    let mut totals: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for row in traffic.rows() {
        *totals.entry(row.date).or_default() += u64::from(row.organic_traffic);
    }
    totals
        .into_iter()
        .map(|(date, total_organic_traffic)| DailyTraffic {
            date,
            total_organic_traffic,
        })
        .collect()
}
