use serde::{Deserialize, Serialize};

use crate::models::{ALL_SITES, ALL_SITES_LABEL};

// =========================================================
// Site catalog + payload slider types
// =========================================================

/// One entry of the site dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteOption {
    pub label: String,
    pub value: String,
}

impl SiteOption {
    /// The "every site" pseudo-option.
    pub fn all() -> Self {
        Self {
            label: ALL_SITES_LABEL.to_string(),
            value: ALL_SITES.to_string(),
        }
    }

    pub fn site(site: impl Into<String>) -> Self {
        let site = site.into();
        Self {
            label: site.clone(),
            value: site,
        }
    }
}

/// Dropdown contents plus the value it starts on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteCatalogData {
    pub options: Vec<SiteOption>,
    pub default_value: String,
}

/// A labelled tick on the payload slider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliderMark {
    pub value: i64,
    pub label: String,
}

/// Payload range slider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadSlider {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Initial selection, the full `[min, max]` span.
    pub value: [f64; 2],
    pub marks: Vec<SliderMark>,
}

/// Path of the site catalog endpoint.
pub const SITES_PATH: &str = "/sites";

/// Path of the payload slider endpoint.
pub const PAYLOAD_RANGE_PATH: &str = "/payload-range";
