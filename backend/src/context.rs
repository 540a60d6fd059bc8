//! Immutable dashboard context shared by every query.
//!
//! The dataset, site catalog and payload slider are computed once when the
//! context is built and never change afterwards. Wrap the context in an
//! `Arc` to share it between concurrent requests; no locking is needed.

use std::path::Path;

use crate::api::{
    OutcomeChartData, OutcomeSummary, PayloadSlider, ScatterChartData, ScatterPoint,
    SiteCatalogData, SiteOption,
};
use crate::error::{InvalidRangeError, LoadResult};
use crate::io::{DatasetLoadResult, DatasetLoader};
use crate::models::{LaunchDataset, PayloadRange, SiteSelector};
use crate::services;

#[derive(Debug, Clone)]
pub struct DashboardContext {
    dataset: LaunchDataset,
    catalog: Vec<SiteOption>,
    slider: PayloadSlider,
    full_range: PayloadRange,
    checksum: Option<String>,
}

impl DashboardContext {
    pub fn new(dataset: LaunchDataset) -> Self {
        let catalog = services::build_catalog(&dataset);
        let slider = services::payload_slider(&dataset);
        // Unparsed in-memory records may carry NaN payloads
        let full_range =
            PayloadRange::new(slider.min, slider.max).unwrap_or_else(|_| PayloadRange::zero());
        Self {
            dataset,
            catalog,
            slider,
            full_range,
            checksum: None,
        }
    }

    /// Load the dataset from `path` and build the context around it.
    pub fn load(path: &Path) -> LoadResult<Self> {
        DatasetLoader::load_from_file(path).map(Self::from)
    }

    pub fn dataset(&self) -> &LaunchDataset {
        &self.dataset
    }

    pub fn catalog(&self) -> &[SiteOption] {
        &self.catalog
    }

    /// Catalog plus the dropdown's initial value, which is always ALL.
    pub fn catalog_data(&self) -> SiteCatalogData {
        SiteCatalogData {
            options: self.catalog.clone(),
            default_value: SiteSelector::All.to_string(),
        }
    }

    pub fn slider(&self) -> &PayloadSlider {
        &self.slider
    }

    /// SHA-256 of the source file, when loaded from one.
    pub fn checksum(&self) -> Option<&str> {
        self.checksum.as_deref()
    }

    /// The full `[min, max]` payload span of the dataset.
    pub fn full_range(&self) -> PayloadRange {
        self.full_range
    }

    /// Build a range from optional bounds, defaulting to the dataset span.
    pub fn range_or_full(
        &self,
        low: Option<f64>,
        high: Option<f64>,
    ) -> Result<PayloadRange, InvalidRangeError> {
        PayloadRange::new(
            low.unwrap_or(self.full_range.low()),
            high.unwrap_or(self.full_range.high()),
        )
    }

    pub fn outcomes(&self, selector: &SiteSelector) -> OutcomeSummary {
        services::aggregate_outcomes(&self.dataset, selector)
    }

    pub fn outcome_chart(&self, selector: &SiteSelector) -> OutcomeChartData {
        services::compute_outcome_chart(&self.dataset, selector)
    }

    pub fn scatter(&self, selector: &SiteSelector, range: &PayloadRange) -> Vec<ScatterPoint> {
        services::filter_by_payload(&self.dataset, selector, range)
    }

    pub fn scatter_chart(&self, selector: &SiteSelector, range: &PayloadRange) -> ScatterChartData {
        services::compute_scatter_chart(&self.dataset, selector, range)
    }
}

impl From<DatasetLoadResult> for DashboardContext {
    fn from(result: DatasetLoadResult) -> Self {
        let mut context = Self::new(result.dataset);
        context.checksum = Some(result.checksum);
        context
    }
}
