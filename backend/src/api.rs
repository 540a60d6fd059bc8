//! Public API surface for the dashboard backend.
//!
//! This file consolidates the DTO types returned to the dashboard frontend.
//! All types derive Serialize for JSON serialization.

pub use crate::models::LaunchDataset;
pub use crate::models::LaunchRecord;
pub use crate::models::PayloadRange;
pub use crate::models::SiteSelector;
pub use crate::routes::outcomes::OutcomeChartData;
pub use crate::routes::outcomes::OutcomeCount;
pub use crate::routes::outcomes::OutcomeSummary;
pub use crate::routes::outcomes::PieSlice;
pub use crate::routes::outcomes::SiteSuccessCount;
pub use crate::routes::scatter::ScatterChartData;
pub use crate::routes::scatter::ScatterPoint;
pub use crate::routes::sites::PayloadSlider;
pub use crate::routes::sites::SiteCatalogData;
pub use crate::routes::sites::SiteOption;
pub use crate::routes::sites::SliderMark;
