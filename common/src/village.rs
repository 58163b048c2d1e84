//! Villages – the primary map entity – and their FRA claim tallies.

use serde::{Deserialize, Serialize};

/// A `[lat, lon]` pair as stored in the bundled JSON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct LatLng {
    pub lat: f64,
    pub lon: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl From<[f64; 2]> for LatLng {
    fn from([lat, lon]: [f64; 2]) -> Self {
        Self { lat, lon }
    }
}

impl From<LatLng> for [f64; 2] {
    fn from(p: LatLng) -> Self {
        [p.lat, p.lon]
    }
}

// ─── Status & levels ─────────────────────────────────────────────────────────

/// Forest Rights Act claim status of a village.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FraStatus {
    Approved,
    Pending,
    Rejected,
}

impl FraStatus {
    pub const ALL: [FraStatus; 3] = [FraStatus::Approved, FraStatus::Pending, FraStatus::Rejected];

    pub fn label(self) -> &'static str {
        match self {
            FraStatus::Approved => "Approved",
            FraStatus::Pending => "Pending",
            FraStatus::Rejected => "Rejected",
        }
    }

    /// Marker fill colour on the map.
    pub fn color(self) -> &'static str {
        match self {
            FraStatus::Approved => "#22C55E",
            FraStatus::Pending => "#EAB308",
            FraStatus::Rejected => "#EF4444",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            FraStatus::Approved => "✅",
            FraStatus::Pending => "⏳",
            FraStatus::Rejected => "❌",
        }
    }

    /// CSS modifier used for status badges.
    pub fn css_class(self) -> &'static str {
        match self {
            FraStatus::Approved => "status-approved",
            FraStatus::Pending => "status-pending",
            FraStatus::Rejected => "status-rejected",
        }
    }
}

/// Qualitative level used for biodiversity and deforestation risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl Level {
    /// Upper-case badge text, e.g. `VERY HIGH`.
    pub fn badge(self) -> &'static str {
        match self {
            Level::Low => "LOW",
            Level::Medium => "MEDIUM",
            Level::High => "HIGH",
            Level::VeryHigh => "VERY HIGH",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Level::Low => "level-low",
            Level::Medium => "level-medium",
            Level::High => "level-high",
            Level::VeryHigh => "level-very-high",
        }
    }
}

// ─── Village ─────────────────────────────────────────────────────────────────

/// Claim tallies for one village.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub total: u32,
    pub approved: u32,
    pub pending: u32,
    pub rejected: u32,
}

impl Claims {
    /// Sum of the three status buckets.
    pub fn tallied(&self) -> u32 {
        self.approved + self.pending + self.rejected
    }

    /// Whether `total` agrees with the per-status buckets.
    pub fn is_consistent(&self) -> bool {
        self.total == self.tallied()
    }

    /// `(status, count)` pairs in display order.
    pub fn by_status(&self) -> [(FraStatus, u32); 3] {
        [
            (FraStatus::Approved, self.approved),
            (FraStatus::Pending, self.pending),
            (FraStatus::Rejected, self.rejected),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Village {
    pub id: u32,
    pub name: String,
    pub district: String,
    pub coordinates: LatLng,
    pub population: u32,
    pub fra_status: FraStatus,
    pub claims: Claims,
    pub biodiversity: Level,
    pub deforestation_risk: Level,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_village_from_json() {
        let json = r#"{
            "id": 7, "name": "Masinagudi", "district": "Nilgiris",
            "coordinates": [11.57, 76.64], "population": 1640,
            "fraStatus": "rejected",
            "claims": {"total": 23, "approved": 6, "pending": 4, "rejected": 13},
            "biodiversity": "very_high", "deforestationRisk": "medium"
        }"#;
        let v: Village = serde_json::from_str(json).unwrap();
        assert_eq!(v.fra_status, FraStatus::Rejected);
        assert_eq!(v.coordinates, LatLng::new(11.57, 76.64));
        assert_eq!(v.biodiversity.badge(), "VERY HIGH");
        assert!(v.claims.is_consistent());
    }

    #[test]
    fn test_claims_mismatch() {
        let c = Claims { total: 10, approved: 3, pending: 3, rejected: 3 };
        assert_eq!(c.tallied(), 9);
        assert!(!c.is_consistent());
    }

    #[test]
    fn test_unknown_status_rejected() {
        let res: Result<FraStatus, _> = serde_json::from_str("\"withdrawn\"");
        assert!(res.is_err());
    }
}
