//! Report templates, export formats and the simulated generation state.

/// The four report templates offered on the reports page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    Summary,
    Detailed,
    Trends,
    Community,
}

/// Static descriptor for a report template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportTemplate {
    pub kind: ReportKind,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

pub const REPORT_TEMPLATES: [ReportTemplate; 4] = [
    ReportTemplate {
        kind: ReportKind::Summary,
        title: "Executive Summary",
        description: "High-level overview of FRA implementation progress",
        icon: "📊",
        color: "forest",
    },
    ReportTemplate {
        kind: ReportKind::Detailed,
        title: "Detailed Analytics",
        description: "Comprehensive analysis with village-level breakdowns",
        icon: "🥧",
        color: "blue",
    },
    ReportTemplate {
        kind: ReportKind::Trends,
        title: "Trends Analysis",
        description: "Historical trends and forecasting insights",
        icon: "📈",
        color: "green",
    },
    ReportTemplate {
        kind: ReportKind::Community,
        title: "Community Impact",
        description: "Social impact assessment and community feedback",
        icon: "👥",
        color: "purple",
    },
];

impl ReportKind {
    pub fn template(self) -> &'static ReportTemplate {
        match self {
            ReportKind::Summary => &REPORT_TEMPLATES[0],
            ReportKind::Detailed => &REPORT_TEMPLATES[1],
            ReportKind::Trends => &REPORT_TEMPLATES[2],
            ReportKind::Community => &REPORT_TEMPLATES[3],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Pdf,
    Excel,
    Csv,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Pdf, ExportFormat::Excel, ExportFormat::Csv];

    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "PDF Report",
            ExportFormat::Excel => "Excel Spreadsheet",
            ExportFormat::Csv => "CSV Data",
        }
    }

    /// First word of the label, shown on the compact buttons.
    pub fn short_label(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "PDF",
            ExportFormat::Excel => "Excel",
            ExportFormat::Csv => "CSV",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "📄",
            ExportFormat::Excel => "📊",
            ExportFormat::Csv => "📋",
        }
    }
}

/// Entry in the static "recent reports" list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecentReport {
    pub name: &'static str,
    pub format: &'static str,
    pub date: &'static str,
    pub size: &'static str,
}

pub const RECENT_REPORTS: [RecentReport; 4] = [
    RecentReport { name: "Q4 2024 Executive Summary", format: "PDF", date: "2024-01-15", size: "2.4 MB" },
    RecentReport { name: "District Performance Analysis", format: "Excel", date: "2024-01-12", size: "5.1 MB" },
    RecentReport { name: "Community Feedback Report", format: "PDF", date: "2024-01-10", size: "3.2 MB" },
    RecentReport { name: "Processing Time Trends", format: "CSV", date: "2024-01-08", size: "1.8 MB" },
];

/// Time period selector on the reports page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportPeriod {
    Monthly,
    Quarterly,
    #[default]
    Yearly,
    Custom,
}

impl ReportPeriod {
    pub const ALL: [ReportPeriod; 4] = [
        ReportPeriod::Monthly,
        ReportPeriod::Quarterly,
        ReportPeriod::Yearly,
        ReportPeriod::Custom,
    ];

    pub fn value(self) -> &'static str {
        match self {
            ReportPeriod::Monthly => "monthly",
            ReportPeriod::Quarterly => "quarterly",
            ReportPeriod::Yearly => "yearly",
            ReportPeriod::Custom => "custom",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReportPeriod::Monthly => "Monthly",
            ReportPeriod::Quarterly => "Quarterly",
            ReportPeriod::Yearly => "Yearly",
            ReportPeriod::Custom => "Custom Range",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.value() == value)
    }
}

/// `(value, label)` pairs for the reports district selector.
pub const REPORT_DISTRICTS: [(&str, &str); 5] = [
    ("all", "All Districts"),
    ("wayanad", "Wayanad"),
    ("idukki", "Idukki"),
    ("palakkad", "Palakkad"),
    ("thrissur", "Thrissur"),
];

/// Single shared "generating" flag: every Generate/export button is disabled
/// while any report is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReportGeneration {
    in_flight: Option<ReportKind>,
}

impl ReportGeneration {
    /// Begin generating `kind`. Returns `false` if another report is running.
    pub fn begin(&mut self, kind: ReportKind) -> bool {
        if self.in_flight.is_some() {
            return false;
        }
        self.in_flight = Some(kind);
        true
    }

    /// Mark the running report as done, returning which one it was.
    pub fn finish(&mut self) -> Option<ReportKind> {
        self.in_flight.take()
    }

    pub fn is_generating(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn in_flight(&self) -> Option<ReportKind> {
        self.in_flight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_is_exclusive() {
        let mut g = ReportGeneration::default();
        assert!(g.begin(ReportKind::Trends));
        assert!(!g.begin(ReportKind::Summary));
        assert_eq!(g.in_flight(), Some(ReportKind::Trends));
        assert_eq!(g.finish(), Some(ReportKind::Trends));
        assert!(!g.is_generating());
        assert!(g.begin(ReportKind::Summary));
    }

    #[test]
    fn test_template_lookup() {
        for t in REPORT_TEMPLATES.iter() {
            assert_eq!(t.kind.template(), t);
        }
    }

    #[test]
    fn test_period_round_trip_values() {
        assert_eq!(ReportPeriod::from_value("quarterly"), Some(ReportPeriod::Quarterly));
        assert_eq!(ReportPeriod::from_value("weekly"), None);
        assert_eq!(ReportPeriod::default(), ReportPeriod::Yearly);
    }
}
