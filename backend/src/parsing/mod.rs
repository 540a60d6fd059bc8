//! Parsers for the launch records table.
//!
//! - [`csv_parser`]: Parse the dashboard CSV into a [`LaunchDataset`](crate::models::LaunchDataset)
//! - [`checksum`]: Fingerprint the raw source bytes
//!
//! # Example
//!
//! ```no_run
//! use launch_dash::parsing::csv_parser::parse_launch_csv_to_dataset;
//! use std::path::Path;
//!
//! let dataset = parse_launch_csv_to_dataset(Path::new("spacex_launch_dash.csv"))
//!     .expect("Failed to parse launch records");
//! ```

pub mod checksum;
pub mod csv_parser;
