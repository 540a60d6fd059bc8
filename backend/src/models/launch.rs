//! Launch record domain types.

use qtty::Kilograms;
use serde::{Deserialize, Serialize};

use super::selector::SiteSelector;

/// One row of the launch records table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    pub launch_site: String,
    pub payload_mass_kg: Kilograms,
    /// Mission outcome (`class` column: 1 = success, 0 = failure).
    pub success: bool,
    pub booster_category: Option<String>,
    pub flight_number: Option<i64>,
}

impl LaunchRecord {
    pub fn new(launch_site: impl Into<String>, payload_mass_kg: f64, success: bool) -> Self {
        Self {
            launch_site: launch_site.into(),
            payload_mass_kg: Kilograms::new(payload_mass_kg),
            success,
            booster_category: None,
            flight_number: None,
        }
    }

    pub fn with_booster_category(mut self, category: impl Into<String>) -> Self {
        self.booster_category = Some(category.into());
        self
    }

    pub fn with_flight_number(mut self, flight_number: i64) -> Self {
        self.flight_number = Some(flight_number);
        self
    }

    /// Outcome as the 0/1 indicator used by the charts.
    pub fn class(&self) -> u8 {
        u8::from(self.success)
    }

    pub fn payload_kg(&self) -> f64 {
        self.payload_mass_kg.value()
    }

    /// Color-grouping key: the booster category, or the site when unknown.
    pub fn category_or_site(&self) -> &str {
        self.booster_category
            .as_deref()
            .unwrap_or(self.launch_site.as_str())
    }

    pub fn is_selected_by(&self, selector: &SiteSelector) -> bool {
        selector.matches(&self.launch_site)
    }
}

/// The full, immutable launch records table in source row order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LaunchDataset {
    records: Vec<LaunchRecord>,
    has_booster_category: bool,
}

impl LaunchDataset {
    /// Build a dataset, recording whether the source schema carried the
    /// booster category column.
    pub fn new(records: Vec<LaunchRecord>, has_booster_category: bool) -> Self {
        Self {
            records,
            has_booster_category,
        }
    }

    /// Build a dataset from in-memory records; the category column counts as
    /// present when any record carries a category.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let has_booster_category = records.iter().any(|r| r.booster_category.is_some());
        Self::new(records, has_booster_category)
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LaunchRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_booster_category(&self) -> bool {
        self.has_booster_category
    }

    /// Smallest payload in the table, `None` when empty.
    pub fn min_payload(&self) -> Option<f64> {
        self.records
            .iter()
            .map(LaunchRecord::payload_kg)
            .min_by(|a, b| a.total_cmp(b))
    }

    /// Largest payload in the table, `None` when empty.
    pub fn max_payload(&self) -> Option<f64> {
        self.records
            .iter()
            .map(LaunchRecord::payload_kg)
            .max_by(|a, b| a.total_cmp(b))
    }

    pub fn total_successes(&self) -> usize {
        self.records.iter().filter(|r| r.success).count()
    }
}

impl<'a> IntoIterator for &'a LaunchDataset {
    type Item = &'a LaunchRecord;
    type IntoIter = std::slice::Iter<'a, LaunchRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
