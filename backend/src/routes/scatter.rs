use serde::{Deserialize, Serialize};

use crate::models::PayloadRange;

// =========================================================
// Payload correlation (scatter chart) types
// =========================================================

/// Column name used as color key when the booster category is known.
pub const BOOSTER_CATEGORY_KEY: &str = "Booster Version Category";

/// Column name used as color key when it is not.
pub const LAUNCH_SITE_KEY: &str = "Launch Site";

/// One point of the payload vs. outcome chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    /// x axis
    pub payload_mass_kg: f64,
    /// y axis, 1 = success
    pub class: u8,
    /// marker shape
    pub launch_site: String,
    /// marker color
    pub category: String,
}

/// Complete scatter chart dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterChartData {
    pub title: String,
    pub color_key: String,
    pub range: PayloadRange,
    pub points: Vec<ScatterPoint>,
}

/// Path of the scatter chart endpoint.
pub const SCATTER_PATH: &str = "/scatter";
