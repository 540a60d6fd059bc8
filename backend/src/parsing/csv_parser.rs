use std::io::{Cursor, ErrorKind};
use std::path::Path;

use log::debug;
use polars::prelude::*;

use crate::error::{DataLoadError, LoadResult};
use crate::models::{LaunchDataset, LaunchRecord};

pub const LAUNCH_SITE_COLUMN: &str = "Launch Site";
pub const PAYLOAD_MASS_COLUMN: &str = "Payload Mass (kg)";
pub const CLASS_COLUMN: &str = "class";
pub const BOOSTER_CATEGORY_COLUMN: &str = "Booster Version Category";
pub const FLIGHT_NUMBER_COLUMN: &str = "Flight Number";

/// Columns the dashboard cannot work without.
pub const REQUIRED_COLUMNS: [&str; 3] = [LAUNCH_SITE_COLUMN, PAYLOAD_MASS_COLUMN, CLASS_COLUMN];

/// Read the raw bytes of a CSV source, mapping a missing file to `NotFound`.
pub fn read_csv_source(csv_path: &Path) -> LoadResult<Vec<u8>> {
    std::fs::read(csv_path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => DataLoadError::NotFound {
            path: csv_path.to_path_buf(),
        },
        _ => DataLoadError::Io {
            path: csv_path.to_path_buf(),
            source,
        },
    })
}

/// Parse a CSV file into a Polars DataFrame
pub fn parse_launch_csv(csv_path: &Path) -> LoadResult<DataFrame> {
    let bytes = read_csv_source(csv_path)?;
    parse_launch_csv_bytes(bytes)
}

/// Parse CSV content into a Polars DataFrame with the launch columns cast
/// to their expected types.
pub fn parse_launch_csv_bytes(bytes: Vec<u8>) -> LoadResult<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .into_reader_with_file_handle(Cursor::new(bytes))
        .finish()?;

    cast_launch_columns(df)
}

/// Parse a CSV file straight into a `LaunchDataset`
pub fn parse_launch_csv_to_dataset(csv_path: &Path) -> LoadResult<LaunchDataset> {
    let df = parse_launch_csv(csv_path)?;
    dataframe_to_dataset(&df)
}

/// Parse CSV text straight into a `LaunchDataset`
pub fn parse_launch_csv_str(csv_text: &str) -> LoadResult<LaunchDataset> {
    let df = parse_launch_csv_bytes(csv_text.as_bytes().to_vec())?;
    dataframe_to_dataset(&df)
}

fn cast_launch_columns(df: DataFrame) -> LoadResult<DataFrame> {
    let column_names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();
    let has_column = |name: &str| column_names.iter().any(|c| c == name);

    if let Some(missing) = REQUIRED_COLUMNS.iter().find(|name| !has_column(name)) {
        return Err(DataLoadError::MissingColumn(missing.to_string()));
    }

    // Payload and class may be inferred as i64 when no decimal point appears.
    // Class goes through Float64 so fractional outcomes are seen, not truncated.
    let mut lazy_df = df
        .lazy()
        .with_column(col(LAUNCH_SITE_COLUMN).cast(DataType::String))
        .with_column(col(PAYLOAD_MASS_COLUMN).cast(DataType::Float64))
        .with_column(col(CLASS_COLUMN).cast(DataType::Float64));

    if has_column(BOOSTER_CATEGORY_COLUMN) {
        lazy_df = lazy_df.with_column(col(BOOSTER_CATEGORY_COLUMN).cast(DataType::String));
    }
    if has_column(FLIGHT_NUMBER_COLUMN) {
        lazy_df = lazy_df.with_column(col(FLIGHT_NUMBER_COLUMN).cast(DataType::Int64));
    }

    Ok(lazy_df.collect()?)
}

/// Convert a typed DataFrame into launch records, validating every row.
pub fn dataframe_to_dataset(df: &DataFrame) -> LoadResult<LaunchDataset> {
    let sites = df.column(LAUNCH_SITE_COLUMN)?.str()?;
    let payloads = df.column(PAYLOAD_MASS_COLUMN)?.f64()?;
    let classes = df.column(CLASS_COLUMN)?.f64()?;
    let categories = df
        .column(BOOSTER_CATEGORY_COLUMN)
        .ok()
        .and_then(|c| c.str().ok());
    let flight_numbers = df
        .column(FLIGHT_NUMBER_COLUMN)
        .ok()
        .and_then(|c| c.i64().ok());

    let mut records = Vec::with_capacity(df.height());

    for row in 0..df.height() {
        let launch_site = sites.get(row).ok_or_else(|| {
            DataLoadError::invalid_value(LAUNCH_SITE_COLUMN, row, "missing launch site")
        })?;

        let payload = payloads.get(row).ok_or_else(|| {
            DataLoadError::invalid_value(
                PAYLOAD_MASS_COLUMN,
                row,
                "missing or non-numeric payload mass",
            )
        })?;
        if !payload.is_finite() || payload < 0.0 {
            return Err(DataLoadError::invalid_value(
                PAYLOAD_MASS_COLUMN,
                row,
                format!("payload mass must be a non-negative number, got {}", payload),
            ));
        }

        let success = match classes.get(row) {
            Some(v) if v == 1.0 => true,
            Some(v) if v == 0.0 => false,
            Some(other) => {
                return Err(DataLoadError::invalid_value(
                    CLASS_COLUMN,
                    row,
                    format!("expected 0 or 1, got {}", other),
                ))
            }
            None => {
                return Err(DataLoadError::invalid_value(
                    CLASS_COLUMN,
                    row,
                    "missing or non-numeric outcome",
                ))
            }
        };

        let mut record = LaunchRecord::new(launch_site, payload, success);
        record.booster_category = categories.and_then(|c| c.get(row)).map(str::to_string);
        record.flight_number = flight_numbers.and_then(|c| c.get(row));
        records.push(record);
    }

    debug!(
        "Parsed {} launch records (booster category column: {})",
        records.len(),
        categories.is_some()
    );

    Ok(LaunchDataset::new(records, categories.is_some()))
}
