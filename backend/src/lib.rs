//! # Launch Records Dashboard Backend
//!
//! Filtering and aggregation engine behind the launch records dashboard.
//!
//! The dashboard lets a user pick a launch site (or all sites) and a payload
//! mass range, and redraws two charts: the share of successful launches
//! (per site, or success vs. failure for one site) and payload mass against
//! mission outcome. This crate computes the data for both charts from a
//! launch records table loaded once at startup, and serves it over a REST
//! API via Axum.
//!
//! ## Architecture
//!
//! - [`models`]: Launch records, the site selector and the payload range
//! - [`parsing`]: CSV parsing (Polars) and dataset checksums
//! - [`io`]: One-shot dataset loading
//! - [`services`]: Site catalog, outcome aggregation and payload filtering
//! - [`context`]: The immutable context shared by every query
//! - [`routes`] / [`api`]: Chart DTOs returned to the frontend
//! - [`config`]: TOML + environment configuration
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Example
//!
//! ```no_run
//! use launch_dash::context::DashboardContext;
//! use launch_dash::models::{PayloadRange, SiteSelector};
//! use std::path::Path;
//!
//! let context = DashboardContext::load(Path::new("spacex_launch_dash.csv"))?;
//! let pie = context.outcomes(&SiteSelector::All);
//! let points = context.scatter(
//!     &SiteSelector::parse("KSC LC-39A"),
//!     &PayloadRange::new(2000.0, 8000.0)?,
//! );
//! println!("{} successes, {} points", pie.total(), points.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod api;
pub mod config;
pub mod context;
pub mod error;
pub mod io;
pub mod models;
pub mod parsing;
pub mod routes;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
