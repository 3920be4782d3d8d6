use asis_synth::synth::{
    BOUNCE_RATE_RANGE, ORGANIC_TRAFFIC_RANGE, PAGE_VIEWS_RANGE, TRAFFIC_SAMPLES,
};
use asis_synth::{daily_aggregate, SampleCache, SampleDataSynthesizer};
use chrono::NaiveDate;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn year_bounds() -> (NaiveDate, NaiveDate) {
    (
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
    )
}

proptest! {
    #[test]
    fn generated_tables_respect_column_ranges(seed in any::<u64>()) {
        let (keywords, traffic) =
            SampleDataSynthesizer::new().generate(&mut StdRng::seed_from_u64(seed));

        prop_assert_eq!(keywords.len(), 5);
        for k in keywords.rows() {
            prop_assert!(k.position >= 1);
            prop_assert!(k.difficulty <= 100);
        }

        let (first, last) = year_bounds();
        prop_assert_eq!(traffic.len(), TRAFFIC_SAMPLES);
        for row in traffic.rows() {
            prop_assert!(row.date >= first && row.date <= last);
            prop_assert!(ORGANIC_TRAFFIC_RANGE.contains(&row.organic_traffic));
            prop_assert!(PAGE_VIEWS_RANGE.contains(&row.page_views));
            prop_assert!(BOUNCE_RATE_RANGE.contains(&row.bounce_rate));
        }
    }

    #[test]
    fn aggregate_is_strictly_increasing_and_conserves_totals(seed in any::<u64>()) {
        let (_, traffic) =
            SampleDataSynthesizer::new().generate(&mut StdRng::seed_from_u64(seed));
        let daily = daily_aggregate(&traffic);

        prop_assert!(daily.windows(2).all(|w| w[0].date < w[1].date));
        for d in &daily {
            let expected: u64 = traffic
                .rows()
                .iter()
                .filter(|r| r.date == d.date)
                .map(|r| u64::from(r.organic_traffic))
                .sum();
            prop_assert_eq!(d.total_organic_traffic, expected);
        }
        let total: u64 = daily.iter().map(|d| d.total_organic_traffic).sum();
        prop_assert_eq!(total, traffic.total_organic_traffic());
    }

    #[test]
    fn regenerated_epochs_keep_invariants(seed in any::<u64>(), rounds in 1usize..4) {
        let cache = SampleCache::new(SampleDataSynthesizer::new(), Some(seed));
        let (first, last) = year_bounds();
        for _ in 0..rounds {
            let data = cache.get().unwrap();
            prop_assert_eq!(data.traffic.len(), TRAFFIC_SAMPLES);
            prop_assert!(data.traffic.rows().iter().all(|r| r.date >= first && r.date <= last));
            prop_assert_eq!(data.keywords.len(), 5);
            cache.invalidate().unwrap();
        }
    }
}

#[test]
fn cache_hits_do_not_resample() {
    let cache = SampleCache::new(SampleDataSynthesizer::new(), None);
    let a = cache.get().unwrap();
    let b = cache.get().unwrap();
    assert_eq!(a.traffic.rows(), b.traffic.rows());
    assert_eq!(a.daily(), b.daily());
}
