//! Bundled mock datasets, embedded at compile time and decoded once.

use std::sync::LazyLock;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::community::CommunityData;
use crate::dashboard::DashboardData;
use crate::error::DataError;
use crate::insight::InsightData;
use crate::map_data::MapData;

const MAP_JSON: &str = include_str!("../data/map_data.json");
const DASHBOARD_JSON: &str = include_str!("../data/dashboard_data.json");
const INSIGHTS_JSON: &str = include_str!("../data/ai_insights.json");
const COMMUNITY_JSON: &str = include_str!("../data/community_data.json");

static BUNDLED: LazyLock<Result<Dataset, DataError>> = LazyLock::new(|| {
    Dataset::from_sources(MAP_JSON, DASHBOARD_JSON, INSIGHTS_JSON, COMMUNITY_JSON)
});

/// Every read-only document the dashboard renders.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub map: MapData,
    pub dashboard: DashboardData,
    pub insights: InsightData,
    pub community: CommunityData,
}

/// A village whose `claims.total` disagrees with its status buckets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimMismatch {
    pub village_id: u32,
    pub village: String,
    pub total: u32,
    pub tallied: u32,
}

impl Dataset {
    /// The datasets compiled into this binary. Decoded on first use.
    pub fn bundled() -> Result<&'static Dataset, &'static DataError> {
        BUNDLED.as_ref()
    }

    /// Decode the four documents from JSON text.
    pub fn from_sources(
        map: &str,
        dashboard: &str,
        insights: &str,
        community: &str,
    ) -> Result<Self, DataError> {
        let dataset = Dataset {
            map: decode("map", map)?,
            dashboard: decode("dashboard", dashboard)?,
            insights: decode("insights", insights)?,
            community: decode("community", community)?,
        };
        debug!(
            villages = dataset.map.villages.len(),
            predictions = dataset.insights.predictions.len(),
            voice_notes = dataset.community.voice_notes.len(),
            "datasets decoded"
        );
        Ok(dataset)
    }

    /// Villages whose claim total is not the sum of approved, pending and
    /// rejected. Informational only; rendering never depends on it.
    pub fn consistency_report(&self) -> Vec<ClaimMismatch> {
        let mismatches: Vec<_> = self
            .map
            .villages
            .iter()
            .filter(|v| !v.claims.is_consistent())
            .map(|v| ClaimMismatch {
                village_id: v.id,
                village: v.name.clone(),
                total: v.claims.total,
                tallied: v.claims.tallied(),
            })
            .collect();
        for m in &mismatches {
            warn!(
                village = %m.village,
                total = m.total,
                tallied = m.tallied,
                "claim total does not match status buckets"
            );
        }
        mismatches
    }
}

fn decode<T: DeserializeOwned>(dataset: &'static str, text: &str) -> Result<T, DataError> {
    serde_json::from_str(text).map_err(|source| DataError::Malformed { dataset, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_datasets_decode() {
        let ds = Dataset::bundled().unwrap();
        assert_eq!(ds.map.villages.len(), 9);
        assert_eq!(ds.map.map_layers.forest_cover.data.len(), 3);
        assert_eq!(ds.dashboard.claims_by_year.len(), 6);
        assert_eq!(ds.insights.ml_models.len(), 3);
        assert_eq!(ds.community.voice_notes.len(), 4);
    }

    #[test]
    fn test_bundled_claims_are_consistent() {
        let ds = Dataset::bundled().unwrap();
        assert!(ds.consistency_report().is_empty());
    }

    #[test]
    fn test_malformed_source_names_dataset() {
        let err = Dataset::from_sources(MAP_JSON, "{", INSIGHTS_JSON, COMMUNITY_JSON).unwrap_err();
        let DataError::Malformed { dataset, .. } = err;
        assert_eq!(dataset, "dashboard");
    }

    #[test]
    fn test_consistency_report_flags_mismatch() {
        let mut ds = Dataset::bundled().unwrap().clone();
        ds.map.villages[0].claims.total += 3;
        let report = ds.consistency_report();
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].village, "Meppadi");
        assert_eq!(report[0].total, report[0].tallied + 3);
    }
}
