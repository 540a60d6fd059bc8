//! Outcome aggregation for the pie chart.

use std::collections::BTreeMap;

use log::debug;

use crate::api::{OutcomeChartData, OutcomeCount, OutcomeSummary, SiteSuccessCount};
use crate::models::{LaunchDataset, SiteSelector};
use crate::routes::outcomes::{FAILED_LABEL, SUCCESS_LABEL};

/// Aggregate launch outcomes for the selected site(s).
///
/// With [`SiteSelector::All`] every site present in the dataset appears with
/// its success count (zero included), in ascending site order. With a single
/// site the result holds `"Success"` and `"Failed"` counts; labels with a
/// zero count are left out, so an unknown site yields an empty summary.
pub fn aggregate_outcomes(dataset: &LaunchDataset, selector: &SiteSelector) -> OutcomeSummary {
    let summary = match selector {
        SiteSelector::All => successes_by_site(dataset),
        SiteSelector::Site(site) => outcomes_for_site(dataset, site),
    };

    debug!(
        "Aggregated outcomes for selector={} ({} slices, total={})",
        selector,
        summary.slices().len(),
        summary.total()
    );

    summary
}

fn successes_by_site(dataset: &LaunchDataset) -> OutcomeSummary {
    let mut by_site: BTreeMap<&str, usize> = BTreeMap::new();
    for record in dataset {
        *by_site.entry(record.launch_site.as_str()).or_insert(0) += usize::from(record.success);
    }

    OutcomeSummary::BySite(
        by_site
            .into_iter()
            .map(|(site, successes)| SiteSuccessCount {
                site: site.to_string(),
                successes,
            })
            .collect(),
    )
}

fn outcomes_for_site(dataset: &LaunchDataset, site: &str) -> OutcomeSummary {
    let (successes, failures) = dataset
        .iter()
        .filter(|r| r.launch_site == site)
        .fold((0usize, 0usize), |(ok, failed), r| {
            if r.success {
                (ok + 1, failed)
            } else {
                (ok, failed + 1)
            }
        });

    let counts = [(SUCCESS_LABEL, successes), (FAILED_LABEL, failures)]
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .map(|(label, count)| OutcomeCount {
            label: label.to_string(),
            count,
        })
        .collect();

    OutcomeSummary::ByOutcome(counts)
}

/// Title of the outcome chart for a selector.
pub fn outcome_chart_title(selector: &SiteSelector) -> String {
    match selector {
        SiteSelector::All => "Total Successful Launches by Site".to_string(),
        SiteSelector::Site(site) => format!("Launch Outcomes for {}", site),
    }
}

/// Aggregate outcomes and package them with the chart title and slices.
pub fn compute_outcome_chart(dataset: &LaunchDataset, selector: &SiteSelector) -> OutcomeChartData {
    let summary = aggregate_outcomes(dataset, selector);
    OutcomeChartData {
        title: outcome_chart_title(selector),
        selector: selector.to_string(),
        slices: summary.slices(),
        summary,
    }
}
