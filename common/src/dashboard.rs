//! Headline statistics for the map dashboard and reports previews.

use serde::{Deserialize, Serialize};

/// Contents of the bundled dashboard document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub overview: Overview,
    pub claims_by_year: Vec<YearlyClaims>,
    pub claim_type_distribution: Vec<ClaimTypeShare>,
    pub district_wise_stats: Vec<DistrictStats>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub total_claims: u32,
    pub approved_claims: u32,
    pub pending_claims: u32,
    pub rejected_claims: u32,
    pub average_processing_time: String,
}

impl Overview {
    /// Approved share of all claims, in percent.
    pub fn approval_rate(&self) -> f64 {
        if self.total_claims == 0 {
            return 0.0;
        }
        self.approved_claims as f64 / self.total_claims as f64 * 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyClaims {
    pub year: String,
    pub filed: u32,
    pub approved: u32,
    pub avg_processing_months: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimTypeShare {
    #[serde(rename = "type")]
    pub claim_type: String,
    pub count: u32,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictStats {
    pub district: String,
    pub claims: u32,
    pub approved: u32,
    pub approval_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approval_rate() {
        let o = Overview {
            total_claims: 1247,
            approved_claims: 856,
            pending_claims: 289,
            rejected_claims: 102,
            average_processing_time: "8.5 months".into(),
        };
        assert_eq!(format!("{:.1}", o.approval_rate()), "68.6");
    }

    #[test]
    fn test_approval_rate_empty() {
        let o = Overview {
            total_claims: 0,
            approved_claims: 0,
            pending_claims: 0,
            rejected_claims: 0,
            average_processing_time: String::new(),
        };
        assert_eq!(o.approval_rate(), 0.0);
    }
}
