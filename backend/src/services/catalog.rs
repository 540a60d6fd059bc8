//! Site dropdown and payload slider derivation.

use std::collections::BTreeSet;

use crate::api::{PayloadSlider, SiteOption, SliderMark};
use crate::models::LaunchDataset;

/// Slider step in kilograms.
pub const PAYLOAD_SLIDER_STEP: f64 = 1000.0;

/// Distinct launch sites in ascending byte-lexicographic order.
pub fn sorted_sites(dataset: &LaunchDataset) -> Vec<String> {
    dataset
        .iter()
        .map(|r| r.launch_site.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Build the site dropdown: the ALL option followed by every distinct site.
pub fn build_catalog(dataset: &LaunchDataset) -> Vec<SiteOption> {
    std::iter::once(SiteOption::all())
        .chain(sorted_sites(dataset).into_iter().map(SiteOption::site))
        .collect()
}

/// Build the payload slider spanning the dataset's payload range.
///
/// Marks sit at the minimum, the truncated midpoint and the maximum. An empty
/// dataset yields a `[0, 0]` slider.
pub fn payload_slider(dataset: &LaunchDataset) -> PayloadSlider {
    let min = dataset.min_payload().unwrap_or(0.0);
    let max = dataset.max_payload().unwrap_or(0.0);

    let mut mark_values = vec![
        min.trunc() as i64,
        ((min + max) / 2.0).trunc() as i64,
        max.trunc() as i64,
    ];
    mark_values.dedup();

    let marks = mark_values
        .into_iter()
        .map(|value| SliderMark {
            value,
            label: value.to_string(),
        })
        .collect();

    PayloadSlider {
        min,
        max,
        step: PAYLOAD_SLIDER_STEP,
        value: [min, max],
        marks,
    }
}
