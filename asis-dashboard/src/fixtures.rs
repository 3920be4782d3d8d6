//! Static content shown alongside the synthesized tables.

use asis_types::{
    Alert, AuditItem, AuditOutcome, BacklinkRecord, LinkStatus, LinkType, MetricCard,
    ReportEntry, ReportFormat, Severity,
};
use chrono::NaiveDate;

fn card(label: &str, value: &str, delta: &str) -> MetricCard {
    MetricCard {
        label: label.into(),
        value: value.into(),
        delta: delta.into(),
    }
}

pub fn overview_metrics() -> Vec<MetricCard> {
    vec![
        card("Total Keywords Tracked", "147", "12"),
        card("Total Backlinks", "2,847", "45"),
        card("Avg. Position", "8.3", "-1.2"),
        card("SEO Alerts", "3", "1"),
    ]
}

pub fn alerts() -> Vec<Alert> {
    [
        (Severity::Success, "New backlink detected from high-authority domain"),
        (Severity::Warning, "Keyword 'SEO automation' dropped 3 positions"),
        (Severity::Critical, "Site speed score decreased below 70"),
    ]
    .into_iter()
    .map(|(severity, message)| Alert {
        severity,
        message: message.into(),
    })
    .collect()
}

pub fn backlinks() -> Vec<BacklinkRecord> {
    [
        ("example.com", 65, LinkType::Follow, LinkStatus::Active),
        ("testsite.org", 45, LinkType::NoFollow, LinkStatus::Active),
        ("samplepage.net", 72, LinkType::Follow, LinkStatus::Lost),
        ("demo.co", 38, LinkType::Follow, LinkStatus::Active),
        ("trial.info", 58, LinkType::NoFollow, LinkStatus::Active),
    ]
    .into_iter()
    .map(|(domain, domain_authority, link_type, status)| BacklinkRecord {
        domain: domain.into(),
        domain_authority,
        link_type,
        status,
    })
    .collect()
}

pub fn audit_scores() -> Vec<MetricCard> {
    vec![
        card("Page Speed", "85", "5"),
        card("Mobile Friendly", "92", "2"),
        card("Security Score", "88", "-3"),
    ]
}

pub fn audit_items() -> Vec<AuditItem> {
    [
        ("Title Tags", "All pages have unique title tags", AuditOutcome::Pass),
        ("Meta Descriptions", "5 pages missing meta descriptions", AuditOutcome::Warning),
        ("Image Alt Text", "All images have alt text", AuditOutcome::Pass),
        ("Broken Links", "3 broken internal links found", AuditOutcome::Fail),
        ("SSL Certificate", "Valid SSL certificate installed", AuditOutcome::Pass),
    ]
    .into_iter()
    .map(|(check, detail, outcome)| AuditItem {
        check: check.into(),
        detail: detail.into(),
        outcome,
    })
    .collect()
}

pub fn recent_reports() -> Vec<ReportEntry> {
    [
        ("Traffic Analysis", 15, ReportFormat::Csv),
        ("Keyword Performance", 14, ReportFormat::Pdf),
        ("Backlink Audit", 13, ReportFormat::Excel),
        ("Technical SEO", 12, ReportFormat::Pdf),
    ]
    .into_iter()
    .filter_map(|(name, day, format)| {
        Some(ReportEntry {
            name: name.into(),
            date: NaiveDate::from_ymd_opt(2024, 12, day)?,
            format,
        })
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_have_expected_sizes() {
        assert_eq!(overview_metrics().len(), 4);
        assert_eq!(alerts().len(), 3);
        assert_eq!(backlinks().len(), 5);
        assert_eq!(audit_scores().len(), 3);
        assert_eq!(audit_items().len(), 5);
        assert_eq!(recent_reports().len(), 4);
    }

    #[test]
    fn reports_are_newest_first() {
        let reports = recent_reports();
        assert!(reports.windows(2).all(|w| w[0].date > w[1].date));
        assert_eq!(reports[2].format, ReportFormat::Excel);
    }

    #[test]
    fn one_backlink_is_lost() {
        let lost: Vec<_> = backlinks()
            .into_iter()
            .filter(|b| b.status == LinkStatus::Lost)
            .collect();
        assert_eq!(lost.len(), 1);
        assert_eq!(lost[0].domain, "samplepage.net");
    }
}
