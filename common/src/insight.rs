//! Precomputed "AI" insights: predictions, anomaly alerts and risk cards.
//!
//! Nothing here is inferred at runtime; the records are rendered as shipped.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Contents of the bundled insights document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightData {
    pub predictions: Vec<Prediction>,
    pub anomaly_alerts: Vec<AnomalyAlert>,
    pub risk_assessment: RiskAssessment,
    /// Model name (camelCase key) → status.
    pub ml_models: BTreeMap<String, MlModel>,
}

/// Three-step rating used for confidence and severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rating {
    Low,
    Medium,
    High,
}

impl Rating {
    pub fn label(self) -> &'static str {
        match self {
            Rating::Low => "Low",
            Rating::Medium => "Medium",
            Rating::High => "High",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Rating::Low => "rating-low",
            Rating::Medium => "rating-medium",
            Rating::High => "rating-high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub id: u32,
    #[serde(rename = "type")]
    pub title: String,
    pub village: String,
    pub confidence: Rating,
    /// Approval probability in percent.
    #[serde(default)]
    pub probability: Option<u32>,
    #[serde(default)]
    pub estimated_months: Option<u32>,
    #[serde(default)]
    pub factors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyAlert {
    pub id: u32,
    #[serde(rename = "type")]
    pub title: String,
    pub village: String,
    pub severity: Rating,
    pub description: String,
    pub recommendation: String,
    /// RFC 3339 timestamp.
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub deforestation_risk: Vec<DeforestationRisk>,
    pub biodiversity_impact: Vec<BiodiversityImpact>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeforestationRisk {
    pub village: String,
    pub risk_level: Rating,
    /// Out of 10.
    pub score: f64,
    #[serde(default)]
    pub factors: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiodiversityImpact {
    pub village: String,
    pub impact_level: String,
    pub score: f64,
    pub description: String,
}

impl BiodiversityImpact {
    pub fn is_positive(&self) -> bool {
        self.impact_level == "Positive"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MlModel {
    /// Accuracy in percent.
    pub accuracy: f64,
    pub last_updated: String,
}

// ─── Tagged view ─────────────────────────────────────────────────────────────

/// The three kinds of insight card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InsightKind {
    Prediction,
    Anomaly,
    Risk,
}

/// One renderable insight, tagged by kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Insight {
    Prediction(Prediction),
    Anomaly(AnomalyAlert),
    Risk(DeforestationRisk),
}

impl Insight {
    pub fn kind(&self) -> InsightKind {
        match self {
            Insight::Prediction(_) => InsightKind::Prediction,
            Insight::Anomaly(_) => InsightKind::Anomaly,
            Insight::Risk(_) => InsightKind::Risk,
        }
    }
}

impl InsightData {
    /// All predictions, anomalies and deforestation risks as tagged insights.
    pub fn insights(&self) -> Vec<Insight> {
        let predictions = self.predictions.iter().cloned().map(Insight::Prediction);
        let anomalies = self.anomaly_alerts.iter().cloned().map(Insight::Anomaly);
        let risks = self
            .risk_assessment
            .deforestation_risk
            .iter()
            .cloned()
            .map(Insight::Risk);
        predictions.chain(anomalies).chain(risks).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prediction_optional_fields() {
        let json = r#"{"id": 4, "type": "Processing Time Estimate",
                       "village": "Masinagudi", "confidence": "High",
                       "estimatedMonths": 4}"#;
        let p: Prediction = serde_json::from_str(json).unwrap();
        assert_eq!(p.probability, None);
        assert_eq!(p.estimated_months, Some(4));
        assert!(p.factors.is_empty());
    }

    #[test]
    fn test_insight_kind_tags() {
        let risk = DeforestationRisk {
            village: "Attappady".into(),
            risk_level: Rating::High,
            score: 7.8,
            factors: vec![],
            recommendations: vec![],
        };
        let insight = Insight::Risk(risk);
        assert_eq!(insight.kind(), InsightKind::Risk);
    }
}
