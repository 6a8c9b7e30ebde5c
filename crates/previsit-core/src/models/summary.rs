use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Nominal bounds of every chart score.
pub const SCORE_MIN: f64 = 0.0;
pub const SCORE_MAX: f64 = 10.0;

/// The structured clinical summary returned for one questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ClinicalSummary {
    /// Subjective-style clinical narrative for the chart.
    pub summary: String,
    /// A single clinical tag, e.g. `#R/O_PCOS`.
    pub sentiment: String,
    pub keywords: Vec<String>,
    /// Follow-up questions for the consultation, in asking order.
    pub doctor_questions: Vec<String>,
    pub chart_data: ChartData,
}

/// Symptom quantification on a 0–10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChartData {
    pub pain: f64,
    pub bleeding: f64,
    pub urgency: f64,
    pub stress: f64,
    pub severity: f64,
}

impl ChartData {
    pub fn scores(&self) -> [(&'static str, f64); 5] {
        [
            ("pain", self.pain),
            ("bleeding", self.bleeding),
            ("urgency", self.urgency),
            ("stress", self.stress),
            ("severity", self.severity),
        ]
    }
}

impl ClinicalSummary {
    /// Chart scores outside `[SCORE_MIN, SCORE_MAX]`. Values are passed
    /// through as generated; callers decide whether to flag them.
    pub fn out_of_range_scores(&self) -> Vec<(&'static str, f64)> {
        self.chart_data
            .scores()
            .into_iter()
            .filter(|(_, value)| !(SCORE_MIN..=SCORE_MAX).contains(value))
            .collect()
    }
}
