//! Data Transfer Objects for the HTTP API.
//!
//! Chart DTOs are re-exported from the routes module since they already
//! derive Serialize. Query-string types live here.

use serde::{Deserialize, Serialize};

pub use crate::api::{
    OutcomeChartData, OutcomeCount, OutcomeSummary, PayloadSlider, PieSlice, ScatterChartData,
    ScatterPoint, SiteCatalogData, SiteOption, SiteSuccessCount, SliderMark,
};
use crate::models::SiteSelector;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Number of launch records loaded
    pub records: usize,
    /// SHA-256 of the dataset file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_checksum: Option<String>,
}

/// Query parameters for the outcome chart endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutcomesQuery {
    /// Site wire value; absent means ALL
    #[serde(default)]
    pub site: Option<String>,
}

impl OutcomesQuery {
    pub fn selector(&self) -> SiteSelector {
        selector_from(self.site.as_deref())
    }
}

/// Query parameters for the scatter chart endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScatterQuery {
    /// Site wire value; absent means ALL
    #[serde(default)]
    pub site: Option<String>,
    /// Lower payload bound in kg; absent means the dataset minimum
    #[serde(default)]
    pub low: Option<f64>,
    /// Upper payload bound in kg; absent means the dataset maximum
    #[serde(default)]
    pub high: Option<f64>,
}

impl ScatterQuery {
    pub fn selector(&self) -> SiteSelector {
        selector_from(self.site.as_deref())
    }
}

fn selector_from(site: Option<&str>) -> SiteSelector {
    site.map(SiteSelector::parse).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_site_means_all() {
        assert_eq!(OutcomesQuery::default().selector(), SiteSelector::All);
        assert_eq!(ScatterQuery::default().selector(), SiteSelector::All);
    }

    #[test]
    fn test_site_is_parsed_exactly() {
        let query = OutcomesQuery {
            site: Some("All".to_string()),
        };
        assert_eq!(query.selector(), SiteSelector::Site("All".to_string()));
    }
}
