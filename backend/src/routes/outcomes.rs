use serde::{Deserialize, Serialize};

// =========================================================
// Outcome (pie chart) types
// =========================================================

/// Label used for successful launches in a single-site breakdown.
pub const SUCCESS_LABEL: &str = "Success";

/// Label used for failed launches in a single-site breakdown.
pub const FAILED_LABEL: &str = "Failed";

/// Successful launches at one site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSuccessCount {
    pub site: String,
    pub successes: usize,
}

/// Launch count for one outcome label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeCount {
    pub label: String,
    pub count: usize,
}

/// Result of the outcome aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "counts", rename_all = "snake_case")]
pub enum OutcomeSummary {
    /// Success count per site, in catalog order.
    BySite(Vec<SiteSuccessCount>),
    /// Success/failure counts for a single site.
    ByOutcome(Vec<OutcomeCount>),
}

impl OutcomeSummary {
    /// Sum of all slice values.
    pub fn total(&self) -> usize {
        match self {
            OutcomeSummary::BySite(counts) => counts.iter().map(|c| c.successes).sum(),
            OutcomeSummary::ByOutcome(counts) => counts.iter().map(|c| c.count).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            OutcomeSummary::BySite(counts) => counts.is_empty(),
            OutcomeSummary::ByOutcome(counts) => counts.is_empty(),
        }
    }

    /// Count for a site (`BySite`) or an outcome label (`ByOutcome`).
    pub fn get(&self, key: &str) -> Option<usize> {
        match self {
            OutcomeSummary::BySite(counts) => counts
                .iter()
                .find(|c| c.site == key)
                .map(|c| c.successes),
            OutcomeSummary::ByOutcome(counts) => {
                counts.iter().find(|c| c.label == key).map(|c| c.count)
            }
        }
    }

    /// Uniform `(label, value)` view for pie rendering.
    pub fn slices(&self) -> Vec<PieSlice> {
        match self {
            OutcomeSummary::BySite(counts) => counts
                .iter()
                .map(|c| PieSlice {
                    label: c.site.clone(),
                    value: c.successes,
                })
                .collect(),
            OutcomeSummary::ByOutcome(counts) => counts
                .iter()
                .map(|c| PieSlice {
                    label: c.label.clone(),
                    value: c.count,
                })
                .collect(),
        }
    }
}

/// One slice of the outcome pie chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub value: usize,
}

/// Complete outcome chart dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeChartData {
    pub title: String,
    /// Wire value of the selector that produced this chart.
    pub selector: String,
    pub summary: OutcomeSummary,
    pub slices: Vec<PieSlice>,
}

/// Path of the outcome chart endpoint.
pub const OUTCOMES_PATH: &str = "/outcomes";
