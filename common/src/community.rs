//! Community voice notes and sentiment summaries.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Contents of the bundled community document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityData {
    pub voice_notes: Vec<VoiceNote>,
    pub sentiment_analysis: SentimentAnalysis,
    pub feedback_trends: Vec<FeedbackTrend>,
    pub community_engagement: CommunityEngagement,
    pub topic_modeling: TopicModeling,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    pub fn label(self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Sentiment::Positive => "😊",
            Sentiment::Neutral => "😐",
            Sentiment::Negative => "😞",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Sentiment::Positive => "#22C55E",
            Sentiment::Neutral => "#EAB308",
            Sentiment::Negative => "#EF4444",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Sentiment::Positive => "sentiment-positive",
            Sentiment::Neutral => "sentiment-neutral",
            Sentiment::Negative => "sentiment-negative",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceNote {
    pub id: u32,
    pub village: String,
    pub speaker: String,
    pub transcript: String,
    pub sentiment: Sentiment,
    pub keywords: Vec<String>,
    /// `m:ss` as recorded.
    pub duration: String,
    pub timestamp: String,
}

/// Percentages per sentiment bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentSplit {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
}

impl SentimentSplit {
    pub fn get(&self, sentiment: Sentiment) -> f64 {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Neutral => self.neutral,
            Sentiment::Negative => self.negative,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentAnalysis {
    pub overall: SentimentSplit,
    pub by_district: Vec<DistrictSentiment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistrictSentiment {
    pub district: String,
    #[serde(flatten)]
    pub split: SentimentSplit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackTrend {
    pub month: String,
    #[serde(flatten)]
    pub split: SentimentSplit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityEngagement {
    pub total_participants: u32,
    pub active_voices: u32,
    pub average_response_time: String,
    /// Language → share in percent.
    pub language_distribution: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicModeling {
    pub major_themes: Vec<Theme>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub theme: String,
    pub frequency: f64,
    pub sentiment: Sentiment,
    pub keywords: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flattened_split() {
        let json = r#"{"district": "Idukki", "positive": 41, "neutral": 38, "negative": 21}"#;
        let d: DistrictSentiment = serde_json::from_str(json).unwrap();
        assert_eq!(d.split.get(Sentiment::Neutral), 38.0);
    }

    #[test]
    fn test_sentiment_presentation() {
        assert_eq!(Sentiment::Negative.emoji(), "😞");
        assert_eq!(Sentiment::Positive.color(), "#22C55E");
    }
}
