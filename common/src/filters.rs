//! Filter selections and tab state for the sidebar, insights and community
//! pages. Filters are recorded and logged only; nothing here narrows the
//! data that is rendered.

use tracing::debug;

use crate::insight::InsightKind;

pub const DISTRICT_OPTIONS: [&str; 5] = ["All", "Wayanad", "Idukki", "Palakkad", "Thrissur"];
pub const VILLAGE_OPTIONS: [&str; 6] =
    ["All", "Meppadi", "Sulthan Bathery", "Munnar", "Thekkady", "Attappady"];
pub const CLAIM_TYPE_OPTIONS: [&str; 5] = ["All", "Filed", "Approved", "Pending", "Rejected"];
pub const YEAR_OPTIONS: [&str; 7] = ["All", "2019", "2020", "2021", "2022", "2023", "2024"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    District,
    Village,
    ClaimType,
    Year,
    Description,
}

impl FilterField {
    pub const SELECTS: [FilterField; 4] = [
        FilterField::District,
        FilterField::Village,
        FilterField::ClaimType,
        FilterField::Year,
    ];

    pub fn key(self) -> &'static str {
        match self {
            FilterField::District => "district",
            FilterField::Village => "village",
            FilterField::ClaimType => "claimType",
            FilterField::Year => "year",
            FilterField::Description => "description",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterField::District => "District",
            FilterField::Village => "Village",
            FilterField::ClaimType => "Claim Type",
            FilterField::Year => "Year",
            FilterField::Description => "Description",
        }
    }

    /// Choices for a select field; the free-text description has none.
    pub fn options(self) -> &'static [&'static str] {
        match self {
            FilterField::District => &DISTRICT_OPTIONS,
            FilterField::Village => &VILLAGE_OPTIONS,
            FilterField::ClaimType => &CLAIM_TYPE_OPTIONS,
            FilterField::Year => &YEAR_OPTIONS,
            FilterField::Description => &[],
        }
    }
}

/// Current values of the sidebar filter form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimFilters {
    pub district: String,
    pub village: String,
    pub claim_type: String,
    pub year: String,
    pub description: String,
}

impl Default for ClaimFilters {
    fn default() -> Self {
        Self {
            district: "All".into(),
            village: "All".into(),
            claim_type: "All".into(),
            year: "All".into(),
            description: String::new(),
        }
    }
}

impl ClaimFilters {
    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::District => &self.district,
            FilterField::Village => &self.village,
            FilterField::ClaimType => &self.claim_type,
            FilterField::Year => &self.year,
            FilterField::Description => &self.description,
        }
    }

    /// Record a new value for `field`. Returns `false` if it was already set.
    pub fn set(&mut self, field: FilterField, value: impl Into<String>) -> bool {
        let value = value.into();
        let slot = match field {
            FilterField::District => &mut self.district,
            FilterField::Village => &mut self.village,
            FilterField::ClaimType => &mut self.claim_type,
            FilterField::Year => &mut self.year,
            FilterField::Description => &mut self.description,
        };
        if *slot == value {
            return false;
        }
        debug!(field = field.key(), value = %value, "filter changed");
        *slot = value;
        true
    }

    /// Fields holding something other than their default.
    pub fn active_count(&self) -> usize {
        let defaults = ClaimFilters::default();
        FilterField::SELECTS
            .into_iter()
            .chain([FilterField::Description])
            .filter(|f| self.get(*f) != defaults.get(*f))
            .count()
    }
}

// ─── Tabs ────────────────────────────────────────────────────────────────────

/// Tabs of the map page control panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SidebarTab {
    #[default]
    Filters,
    Layers,
    Upload,
    Voice,
}

impl SidebarTab {
    pub const ALL: [SidebarTab; 4] =
        [SidebarTab::Filters, SidebarTab::Layers, SidebarTab::Upload, SidebarTab::Voice];

    pub fn label(self) -> &'static str {
        match self {
            SidebarTab::Filters => "Filters",
            SidebarTab::Layers => "Layers",
            SidebarTab::Upload => "Upload",
            SidebarTab::Voice => "Voice",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            SidebarTab::Filters | SidebarTab::Layers => "⚲",
            SidebarTab::Upload => "⇪",
            SidebarTab::Voice => "🎤",
        }
    }
}

/// Section filter on the insights page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InsightFilter {
    #[default]
    All,
    Predictions,
    Anomalies,
    Risks,
}

impl InsightFilter {
    pub const ALL: [InsightFilter; 4] = [
        InsightFilter::All,
        InsightFilter::Predictions,
        InsightFilter::Anomalies,
        InsightFilter::Risks,
    ];

    pub fn label(self) -> &'static str {
        match self {
            InsightFilter::All => "All Insights",
            InsightFilter::Predictions => "Predictions",
            InsightFilter::Anomalies => "Anomalies",
            InsightFilter::Risks => "Risk Analysis",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            InsightFilter::All | InsightFilter::Predictions => "🧠",
            InsightFilter::Anomalies => "⚠️",
            InsightFilter::Risks => "📈",
        }
    }

    /// Whether the section holding `kind` insights is rendered.
    pub fn shows(self, kind: InsightKind) -> bool {
        match self {
            InsightFilter::All => true,
            InsightFilter::Predictions => kind == InsightKind::Prediction,
            InsightFilter::Anomalies => kind == InsightKind::Anomaly,
            InsightFilter::Risks => kind == InsightKind::Risk,
        }
    }
}

/// Tabs of the community page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CommunityTab {
    #[default]
    Overview,
    Voices,
    Record,
}

impl CommunityTab {
    pub const ALL: [CommunityTab; 3] =
        [CommunityTab::Overview, CommunityTab::Voices, CommunityTab::Record];

    pub fn label(self) -> &'static str {
        match self {
            CommunityTab::Overview => "Overview",
            CommunityTab::Voices => "Voice Notes",
            CommunityTab::Record => "Record",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            CommunityTab::Overview => "📊",
            CommunityTab::Voices => "🔊",
            CommunityTab::Record => "💬",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Dataset;

    #[test]
    fn test_filter_defaults_and_updates() {
        let mut f = ClaimFilters::default();
        assert_eq!(f.get(FilterField::Year), "All");
        assert_eq!(f.get(FilterField::Description), "");
        f.set(FilterField::District, "Idukki");
        f.set(FilterField::Description, "grazing land near stream");
        assert_eq!(f.district, "Idukki");
        assert_eq!(f.get(FilterField::Description), "grazing land near stream");
        assert_eq!(f.village, "All");
    }

    #[test]
    fn test_filter_change_reports_and_counts() {
        let mut f = ClaimFilters::default();
        assert_eq!(f.active_count(), 0);
        assert!(f.set(FilterField::Year, "2023"));
        assert!(!f.set(FilterField::Year, "2023"));
        assert!(f.set(FilterField::Description, "bamboo"));
        assert_eq!(f.active_count(), 2);
        assert!(f.set(FilterField::Year, "All"));
        assert_eq!(f.active_count(), 1);
    }

    #[test]
    fn test_select_options_start_with_all() {
        for field in FilterField::SELECTS {
            assert_eq!(field.options().first(), Some(&"All"));
        }
        assert!(FilterField::Description.options().is_empty());
    }

    #[test]
    fn test_insight_filter_changes_only_visibility() {
        let ds = Dataset::bundled().unwrap();
        let before = ds.insights.clone();
        let total = ds.insights.insights().len();
        let mut seen = 0;
        for filter in InsightFilter::ALL.into_iter().skip(1) {
            seen += ds.insights.insights().iter().filter(|i| filter.shows(i.kind())).count();
        }
        assert_eq!(seen, total);
        assert!(ds.insights.insights().iter().all(|i| InsightFilter::All.shows(i.kind())));
        assert_eq!(ds.insights, before);
    }

    #[test]
    fn test_anomaly_filter_hides_predictions() {
        assert!(InsightFilter::Anomalies.shows(InsightKind::Anomaly));
        assert!(!InsightFilter::Anomalies.shows(InsightKind::Prediction));
        assert!(!InsightFilter::Anomalies.shows(InsightKind::Risk));
    }
}
