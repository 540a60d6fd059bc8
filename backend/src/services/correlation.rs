//! Payload vs. outcome filtering for the scatter chart.

use log::debug;

use crate::api::{ScatterChartData, ScatterPoint};
use crate::error::InvalidRangeError;
use crate::models::{LaunchDataset, LaunchRecord, PayloadRange, SiteSelector};
use crate::routes::scatter::{BOOSTER_CATEGORY_KEY, LAUNCH_SITE_KEY};

/// Keep the records whose payload lies in `range` (inclusive) and, unless the
/// selector is ALL, whose site matches it. Dataset row order is preserved.
pub fn filter_by_payload(
    dataset: &LaunchDataset,
    selector: &SiteSelector,
    range: &PayloadRange,
) -> Vec<ScatterPoint> {
    let points: Vec<ScatterPoint> = dataset
        .iter()
        .filter(|r| range.contains(r.payload_kg()))
        .filter(|r| r.is_selected_by(selector))
        .map(to_scatter_point)
        .collect();

    debug!(
        "Filtered {} of {} records for selector={} range={}",
        points.len(),
        dataset.len(),
        selector,
        range
    );

    points
}

/// Same as [`filter_by_payload`], validating raw slider bounds first.
pub fn filter_by_payload_bounds(
    dataset: &LaunchDataset,
    selector: &SiteSelector,
    low: f64,
    high: f64,
) -> Result<Vec<ScatterPoint>, InvalidRangeError> {
    let range = PayloadRange::new(low, high)?;
    Ok(filter_by_payload(dataset, selector, &range))
}

fn to_scatter_point(record: &LaunchRecord) -> ScatterPoint {
    ScatterPoint {
        payload_mass_kg: record.payload_kg(),
        class: record.class(),
        launch_site: record.launch_site.clone(),
        category: record.category_or_site().to_string(),
    }
}

/// Column the chart colors points by.
pub fn color_key(dataset: &LaunchDataset) -> &'static str {
    if dataset.has_booster_category() {
        BOOSTER_CATEGORY_KEY
    } else {
        LAUNCH_SITE_KEY
    }
}

/// Title of the scatter chart, finite bounds truncated to whole kilograms.
pub fn scatter_chart_title(selector: &SiteSelector, range: &PayloadRange) -> String {
    let subject = selector.site().unwrap_or("All Sites");
    format!(
        "Payload vs. Outcome for {} ({}–{} kg)",
        subject,
        bound_label(range.low()),
        bound_label(range.high())
    )
}

fn bound_label(kg: f64) -> String {
    if kg.is_finite() {
        (kg.trunc() as i64).to_string()
    } else {
        kg.to_string()
    }
}

/// Filter the dataset and package the points with title and color key.
pub fn compute_scatter_chart(
    dataset: &LaunchDataset,
    selector: &SiteSelector,
    range: &PayloadRange,
) -> ScatterChartData {
    ScatterChartData {
        title: scatter_chart_title(selector, range),
        color_key: color_key(dataset).to_string(),
        range: *range,
        points: filter_by_payload(dataset, selector, range),
    }
}
