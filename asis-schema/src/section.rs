//! Dashboard sections that own the generated tables.

/// Sections of the dashboard, one per navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Overview,
    KeywordTracking,
    BacklinkMonitor,
    SeoAudit,
    Reports,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Overview,
        Section::KeywordTracking,
        Section::BacklinkMonitor,
        Section::SeoAudit,
        Section::Reports,
    ];

    /// Short machine name used in URLs and CLI arguments.
    pub const fn slug(self) -> &'static str {
        match self {
            Section::Overview => "overview",
            Section::KeywordTracking => "keywords",
            Section::BacklinkMonitor => "backlinks",
            Section::SeoAudit => "audit",
            Section::Reports => "reports",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Section::Overview => "Overview",
            Section::KeywordTracking => "Keyword Tracking",
            Section::BacklinkMonitor => "Backlink Monitor",
            Section::SeoAudit => "SEO Audit",
            Section::Reports => "Reports",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.slug() == slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_slug(section.slug()), Some(section));
        }
        assert_eq!(Section::from_slug("settings"), None);
    }
}
