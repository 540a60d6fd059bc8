//! Service layer for the dashboard derivations.
//!
//! Every function here is a pure function of the immutable dataset and the
//! current query inputs. Nothing is cached between calls.

pub mod catalog;

pub mod correlation;

pub mod outcomes;

#[cfg(test)]
#[path = "correlation_tests.rs"]
mod correlation_tests;

pub use catalog::{build_catalog, payload_slider, sorted_sites};
pub use correlation::{
    color_key, compute_scatter_chart, filter_by_payload, filter_by_payload_bounds,
    scatter_chart_title,
};
pub use outcomes::{aggregate_outcomes, compute_outcome_chart, outcome_chart_title};
